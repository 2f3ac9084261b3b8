//! Angle handling for the spacecraft roll.
//!
//! Roll angles arrive from the observation header as bare degrees. They are
//! wrapped in `qtty` quantities here so the rest of the crate cannot mix
//! degrees and radians by accident. Slit coordinates themselves stay plain
//! `f64` in whatever unit `CDELT2` uses (arcseconds for solar data).

use qtty::{Degree, Quantity, Radian, Unit};

/// Roll angle in degrees.
pub type Degrees = Quantity<Degree>;

/// Roll angle in radians.
pub type Radians = Quantity<Radian>;

/// Marker trait for units that share the same physical dimension.
///
/// Implemented for every pair of units where `From::Dim == To::Dim`, so
/// `convert::<Degree, Radian>` compiles and `convert::<Degree, Second>` does not.
pub trait SameDim<To: Unit>: Unit<Dim = To::Dim> {}

impl<From, To> SameDim<To> for From
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
{
}

/// Converts a quantity to another unit of the same dimension.
#[inline]
pub const fn convert<From, To>(q: Quantity<From>) -> Quantity<To>
where
    From: SameDim<To>,
    To: Unit,
{
    q.to_const::<To>()
}

/// Snaps sub-threshold rolls to exactly zero.
///
/// Rolls smaller than `threshold` in magnitude are indistinguishable from an
/// unrolled pointing and would otherwise select the arbitrary-roll model.
pub fn snap_roll(roll: Degrees, threshold: Degrees) -> Degrees {
    if roll.value().abs() < threshold.value() {
        Degrees::new(0.0)
    } else {
        roll
    }
}

/// Roll expressed in radians, for the trigonometry of the tilted slit.
pub fn roll_radians(roll: Degrees) -> Radians {
    convert::<Degree, Radian>(roll)
}
