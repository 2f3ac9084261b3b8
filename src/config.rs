//! Tunables for the slit coordinate resolver.

use crate::units::Degrees;

/// Configuration for [`resolve_sitnstare_xy_with`](crate::resolve_sitnstare_xy_with).
///
/// The defaults reproduce the documented behaviour; most callers only touch
/// `all_times` or the extent check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolverConfig {
    /// Return one coordinate column per exposure instead of the middle one.
    pub all_times: bool,
    /// Rolls with a smaller magnitude are treated as exactly zero.
    pub roll_snap_threshold: Degrees,
    /// Substring `OBS_DESC` must contain for a fixed-pointing observation.
    pub mode_marker: String,
    /// Pointing-table column holding the slit-centre X.
    pub xcen_column: usize,
    /// Pointing-table column holding the slit-centre Y.
    pub ycen_column: usize,
    /// Compare the end-to-end extent of a tilted slit against `ds * ns`.
    pub check_extent: bool,
    /// Relative mismatch above which the extent check warns.
    pub extent_tolerance: f64,
}

impl ResolverConfig {
    pub const DEFAULT_MODE_MARKER: &'static str = "sit-and-stare";
    pub const DEFAULT_XCEN_COLUMN: usize = 13;
    pub const DEFAULT_YCEN_COLUMN: usize = 14;

    /// Default configuration with `all_times` set.
    pub fn all_times() -> Self {
        Self {
            all_times: true,
            ..Self::default()
        }
    }

    pub fn with_extent_check(mut self, tolerance: f64) -> Self {
        self.check_extent = true;
        self.extent_tolerance = tolerance;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            all_times: false,
            roll_snap_threshold: Degrees::new(1.0),
            mode_marker: Self::DEFAULT_MODE_MARKER.to_string(),
            xcen_column: Self::DEFAULT_XCEN_COLUMN,
            ycen_column: Self::DEFAULT_YCEN_COLUMN,
            check_extent: false,
            extent_tolerance: 1e-6,
        }
    }
}
