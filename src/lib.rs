//! slitxy - solar X/Y positions along a spectrograph slit
//!
//! Derives the sky coordinates sampled along the slit of a fixed-pointing
//! ("sit-and-stare") spectral observation from its header metadata and
//! pointing table. The slit model is chosen from the spacecraft roll; see
//! [`geometry::RollRegime`].

pub mod config;
pub mod error;
pub mod geometry;
pub mod observation;
pub mod resolver;
pub mod units;

pub use config::ResolverConfig;
pub use error::SlitError;
pub use geometry::{RollRegime, SlitCoordinates};
pub use observation::{InMemoryObservation, ObservationProvider};
pub use resolver::{
    resolve_raster_xy, resolve_sitnstare_xy, resolve_sitnstare_xy_with, RasterOptions, Resolution,
};

pub type Result<T> = std::result::Result<T, SlitError>;
