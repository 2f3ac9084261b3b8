//! Slit coordinate resolvers.
//!
//! [`resolve_sitnstare_xy`] maps every position along the slit of a
//! sit-and-stare observation to solar X/Y. Each call reads the provider once,
//! keeps no state, and either returns a full [`Resolution`] or an error.

use tracing::{info, warn};

use crate::config::ResolverConfig;
use crate::error::SlitError;
use crate::geometry::{extent_mismatch, RollRegime, SlitCoordinates, SlitInput};
use crate::observation::{ObservationMeta, ObservationProvider};
use crate::Result;


/// Output of a resolver call.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub coords: SlitCoordinates,
    /// Index of the representative exposure, returned in every mode.
    pub midind: usize,
    /// Model the roll selected.
    pub regime: RollRegime,
}

impl Resolution {
    pub fn into_parts(self) -> (SlitCoordinates, usize) {
        (self.coords, self.midind)
    }
}

/// Computes solar X/Y along the slit of a sit-and-stare observation.
///
/// With `all_times` unset, coordinates are returned for the middle exposure
/// only; otherwise one `(ns, nt)` column per exposure.
///
/// # Errors
///
/// - [`SlitError::UnsupportedMode`] if `OBS_DESC` does not describe a
///   sit-and-stare observation.
/// - [`SlitError::InvalidInput`] if the provider cannot supply usable metadata.
///
/// # Example
///
/// ```
/// use slitxy::observation::InMemoryObservation;
/// use slitxy::resolve_sitnstare_xy;
///
/// let obs = InMemoryObservation::sit_and_stare(0.0, 5, 2.0, &[3.0, 3.0, 3.0], &[10.0, 10.0, 10.0]);
/// let resolution = resolve_sitnstare_xy(&obs, false).unwrap();
/// assert_eq!(resolution.midind, 1);
///
/// let (x, y) = resolution.coords.into_representative().unwrap();
/// assert_eq!(y.to_vec(), vec![6.0, 8.0, 10.0, 12.0, 14.0]);
/// assert_eq!(x.to_vec(), vec![3.0; 5]);
/// ```
pub fn resolve_sitnstare_xy<P>(provider: &P, all_times: bool) -> Result<Resolution>
where
    P: ObservationProvider + ?Sized,
{
    let config = ResolverConfig {
        all_times,
        ..ResolverConfig::default()
    };
    resolve_sitnstare_xy_with(provider, &config)
}

/// [`resolve_sitnstare_xy`] with explicit configuration.
pub fn resolve_sitnstare_xy_with<P>(provider: &P, config: &ResolverConfig) -> Result<Resolution>
where
    P: ObservationProvider + ?Sized,
{
    let meta = ObservationMeta::read(provider, config)?;

    if config.all_times {
        info!("Returning coordinates along the slit for all exposures");
    }

    let regime = RollRegime::from_roll(meta.sat_rot, config.roll_snap_threshold);
    info!(regime = %regime, "Selected slit geometry");

    let input = SlitInput::new(meta.ns, meta.ds, &meta.xcen, &meta.ycen, meta.midind())?;
    let coords = regime.apply(&input, config.all_times);

    if config.check_extent && matches!(regime, RollRegime::Arbitrary { .. }) {
        check_extent(&coords, input.fov(), config.extent_tolerance);
    }

    Ok(Resolution {
        coords,
        midind: input.midind(),
        regime,
    })
}

fn check_extent(coords: &SlitCoordinates, fov: f64, tolerance: f64) {
    for t in 0..coords.columns() {
        let Some((xcoord, ycoord)) = coords.column(t) else {
            continue;
        };
        if let Some(mismatch) = extent_mismatch(xcoord, ycoord, fov) {
            if mismatch.abs() > tolerance {
                warn!(
                    column = t,
                    mismatch_percent = mismatch * 100.0,
                    "Computed slit extent differs from CDELT2 * NAXIS2"
                );
            }
        }
    }
}

/// Options for [`resolve_raster_xy`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterOptions {
    /// Use the exposure closest to the middle of each raster step.
    pub mid_time: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { mid_time: true }
    }
}

/// Slit coordinates for rastering observations.
///
/// No geometric model exists for scanning observations yet; this always
/// fails with [`SlitError::NotImplemented`] and never reads the provider.
pub fn resolve_raster_xy<P>(_provider: &P, _options: &RasterOptions) -> Result<Resolution>
where
    P: ObservationProvider + ?Sized,
{
    Err(SlitError::NotImplemented("raster"))
}
