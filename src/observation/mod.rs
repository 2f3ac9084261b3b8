//! Access to observation metadata and pointing samples.
//!
//! The resolver never reads files itself. Anything that can answer header
//! lookups and hand out pointing-table columns implements
//! [`ObservationProvider`]; [`ObservationMeta::read`] pulls the handful of
//! values the geometry needs and validates them once.

pub mod error;
mod memory;

pub use error::ProviderError;
pub use memory::InMemoryObservation;

use std::fmt;

use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::SlitError;
use crate::units::Degrees;

/// Observation description (primary header).
pub const OBS_DESC: &str = "OBS_DESC";
/// Spacecraft roll in degrees (primary header).
pub const SAT_ROT: &str = "SAT_ROT";
/// Number of positions along the slit.
pub const NAXIS2: &str = "NAXIS2";
/// Spatial step between slit positions.
pub const CDELT2: &str = "CDELT2";
/// Number of exposures.
pub const NAXIS3: &str = "NAXIS3";

/// Which header a keyword lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderUnit {
    /// Observation-wide header.
    Primary,
    /// Header of the spectral window image.
    SpectralWindow,
}

impl fmt::Display for HeaderUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderUnit::Primary => write!(f, "primary"),
            HeaderUnit::SpectralWindow => write!(f, "spectral window"),
        }
    }
}

/// A single header card value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl HeaderValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            HeaderValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value; integer cards coerce to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HeaderValue::Integer(v) => Some(*v as f64),
            HeaderValue::Float(v) => Some(*v),
            HeaderValue::Text(_) => None,
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Text(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Text(value)
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        HeaderValue::Integer(value)
    }
}

impl From<f64> for HeaderValue {
    fn from(value: f64) -> Self {
        HeaderValue::Float(value)
    }
}

/// Read-only source of observation metadata and pointing samples.
///
/// Implementations must not change their answers for the duration of a
/// resolver call.
pub trait ObservationProvider {
    /// Looks up a header keyword.
    fn header(&self, unit: HeaderUnit, keyword: &str) -> Result<HeaderValue, ProviderError>;

    /// Returns one column of the pointing table, one value per exposure.
    fn pointing_column(&self, column: usize) -> Result<Vec<f64>, ProviderError>;

    fn text(&self, unit: HeaderUnit, keyword: &str) -> Result<String, ProviderError> {
        self.header(unit, keyword)?
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::WrongType {
                keyword: keyword.to_string(),
                expected: "a string",
            })
    }

    fn float(&self, unit: HeaderUnit, keyword: &str) -> Result<f64, ProviderError> {
        self.header(unit, keyword)?
            .as_f64()
            .ok_or_else(|| ProviderError::WrongType {
                keyword: keyword.to_string(),
                expected: "a number",
            })
    }

    fn integer(&self, unit: HeaderUnit, keyword: &str) -> Result<i64, ProviderError> {
        self.header(unit, keyword)?
            .as_integer()
            .ok_or_else(|| ProviderError::WrongType {
                keyword: keyword.to_string(),
                expected: "an integer",
            })
    }
}

impl<P: ObservationProvider + ?Sized> ObservationProvider for &P {
    fn header(&self, unit: HeaderUnit, keyword: &str) -> Result<HeaderValue, ProviderError> {
        (**self).header(unit, keyword)
    }

    fn pointing_column(&self, column: usize) -> Result<Vec<f64>, ProviderError> {
        (**self).pointing_column(column)
    }
}

/// Validated metadata of a sit-and-stare observation.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationMeta {
    pub obs_desc: String,
    /// Roll as stored in the header, before any snapping.
    pub sat_rot: Degrees,
    /// Positions along the slit.
    pub ns: usize,
    /// Spatial step; may be negative.
    pub ds: f64,
    /// Exposures.
    pub nt: usize,
    /// Slit-centre X per exposure.
    pub xcen: Vec<f64>,
    /// Slit-centre Y per exposure.
    pub ycen: Vec<f64>,
}

impl ObservationMeta {
    /// Reads and validates everything the resolver needs.
    ///
    /// The observation mode is checked before any other keyword is touched,
    /// so a raster dataset fails with [`SlitError::UnsupportedMode`] even if
    /// the rest of its metadata would be unusable.
    pub fn read<P>(provider: &P, config: &ResolverConfig) -> Result<Self, SlitError>
    where
        P: ObservationProvider + ?Sized,
    {
        let obs_desc = provider.text(HeaderUnit::Primary, OBS_DESC)?;
        if !obs_desc.contains(config.mode_marker.as_str()) {
            return Err(SlitError::UnsupportedMode { obs_desc });
        }

        let sat_rot = finite(SAT_ROT, provider.float(HeaderUnit::Primary, SAT_ROT)?)?;
        let ns = axis_length(NAXIS2, provider.integer(HeaderUnit::SpectralWindow, NAXIS2)?)?;
        let ds = finite(CDELT2, provider.float(HeaderUnit::SpectralWindow, CDELT2)?)?;
        let nt = axis_length(NAXIS3, provider.integer(HeaderUnit::SpectralWindow, NAXIS3)?)?;

        let xcen = pointing(provider, config.xcen_column, nt)?;
        let ycen = pointing(provider, config.ycen_column, nt)?;

        debug!(
            obs_desc = %obs_desc,
            sat_rot,
            ns,
            ds,
            nt,
            "Read sit-and-stare metadata"
        );

        Ok(Self {
            obs_desc,
            sat_rot: Degrees::new(sat_rot),
            ns,
            ds,
            nt,
            xcen,
            ycen,
        })
    }

    /// Angular extent of the slit, `ds * ns`.
    pub fn fov(&self) -> f64 {
        self.ds * self.ns as f64
    }

    /// Index of the representative (middle) exposure.
    pub fn midind(&self) -> usize {
        self.nt / 2
    }
}

fn finite(keyword: &str, value: f64) -> Result<f64, SlitError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SlitError::InvalidInput(format!(
            "{keyword} must be finite, got {value}"
        )))
    }
}

fn axis_length(keyword: &str, value: i64) -> Result<usize, SlitError> {
    if value > 0 {
        usize::try_from(value)
            .map_err(|_| SlitError::InvalidInput(format!("{keyword} is too large: {value}")))
    } else {
        Err(SlitError::InvalidInput(format!(
            "{keyword} must be positive, got {value}"
        )))
    }
}

fn pointing<P>(provider: &P, column: usize, nt: usize) -> Result<Vec<f64>, SlitError>
where
    P: ObservationProvider + ?Sized,
{
    let values = provider.pointing_column(column)?;
    if values.len() != nt {
        return Err(SlitError::InvalidInput(format!(
            "pointing column {column} has {} samples, expected {nt}",
            values.len()
        )));
    }
    if let Some(bad) = values.iter().position(|v| !v.is_finite()) {
        return Err(SlitError::InvalidInput(format!(
            "pointing column {column} has a non-finite value at exposure {bad}"
        )));
    }
    Ok(values)
}
