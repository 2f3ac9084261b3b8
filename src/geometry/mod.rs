//! Slit geometry on the solar disk.
//!
//! The slit orientation follows the spacecraft roll. Three models cover it:
//! an unrolled slit running along solar Y, a slit rolled by exactly ±90°
//! running along solar X, and a straight slit tilted by any other roll.
//! [`RollRegime`] picks the model once; each model is a pure function of a
//! shared [`SlitInput`].

mod extent;
mod regimes;

pub use extent::extent_mismatch;
pub use regimes::{arbitrary_roll, right_angle_roll, zero_roll};

use std::fmt;

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::SlitError;
use crate::units::{snap_roll, Degrees};

/// Geometric model selected from the spacecraft roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RollRegime {
    /// Slit along solar Y.
    ZeroRoll,
    /// Slit along solar X; `roll` is either +90° or -90°.
    RightAngle { roll: Degrees },
    /// Slit tilted by `roll` through the pointing centre.
    Arbitrary { roll: Degrees },
}

impl RollRegime {
    /// Selects the model for `roll`, snapping rolls below `snap_threshold` to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use slitxy::geometry::RollRegime;
    /// use slitxy::units::Degrees;
    ///
    /// let threshold = Degrees::new(1.0);
    /// assert_eq!(RollRegime::from_roll(Degrees::new(0.4), threshold), RollRegime::ZeroRoll);
    /// assert!(matches!(
    ///     RollRegime::from_roll(Degrees::new(-90.0), threshold),
    ///     RollRegime::RightAngle { .. }
    /// ));
    /// assert!(matches!(
    ///     RollRegime::from_roll(Degrees::new(45.0), threshold),
    ///     RollRegime::Arbitrary { .. }
    /// ));
    /// ```
    pub fn from_roll(roll: Degrees, snap_threshold: Degrees) -> Self {
        let roll = snap_roll(roll, snap_threshold);
        let value = roll.value();
        if value == 0.0 {
            RollRegime::ZeroRoll
        } else if value.abs() == 90.0 {
            RollRegime::RightAngle { roll }
        } else {
            RollRegime::Arbitrary { roll }
        }
    }

    /// Effective roll after snapping.
    pub fn roll(&self) -> Degrees {
        match self {
            RollRegime::ZeroRoll => Degrees::new(0.0),
            RollRegime::RightAngle { roll } | RollRegime::Arbitrary { roll } => *roll,
        }
    }

    /// Computes slit coordinates with this regime's model.
    pub fn apply(&self, input: &SlitInput<'_>, all_times: bool) -> SlitCoordinates {
        match self {
            RollRegime::ZeroRoll => zero_roll(input, all_times),
            RollRegime::RightAngle { roll } => right_angle_roll(input, *roll, all_times),
            RollRegime::Arbitrary { roll } => arbitrary_roll(input, *roll, all_times),
        }
    }
}

impl fmt::Display for RollRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollRegime::ZeroRoll => write!(f, "0° roll"),
            RollRegime::RightAngle { .. } => write!(f, "+/- 90° roll"),
            RollRegime::Arbitrary { roll } => write!(f, "{}° roll", roll.value()),
        }
    }
}

/// Inputs shared by every geometric model.
///
/// Built through [`SlitInput::new`], which guarantees matching pointing
/// columns and a representative exposure inside them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlitInput<'a> {
    ns: usize,
    ds: f64,
    xcen: &'a [f64],
    ycen: &'a [f64],
    midind: usize,
}

impl<'a> SlitInput<'a> {
    /// Validates and bundles the model inputs.
    ///
    /// # Errors
    ///
    /// [`SlitError::InvalidInput`] if `ns` is zero, the pointing columns are
    /// empty or differ in length, or `midind` is not a valid exposure.
    pub fn new(
        ns: usize,
        ds: f64,
        xcen: &'a [f64],
        ycen: &'a [f64],
        midind: usize,
    ) -> Result<Self, SlitError> {
        if ns == 0 {
            return Err(SlitError::InvalidInput(
                "slit must have at least one position".to_string(),
            ));
        }
        if xcen.len() != ycen.len() {
            return Err(SlitError::InvalidInput(format!(
                "pointing columns differ in length: {} X samples, {} Y samples",
                xcen.len(),
                ycen.len()
            )));
        }
        if midind >= xcen.len() {
            return Err(SlitError::InvalidInput(format!(
                "representative exposure {midind} outside {} exposures",
                xcen.len()
            )));
        }
        Ok(Self {
            ns,
            ds,
            xcen,
            ycen,
            midind,
        })
    }

    /// Positions along the slit.
    pub fn ns(&self) -> usize {
        self.ns
    }

    /// Spatial step between positions.
    pub fn ds(&self) -> f64 {
        self.ds
    }

    /// Representative exposure used outside all-times mode.
    pub fn midind(&self) -> usize {
        self.midind
    }

    /// Angular extent of the slit, `ds * ns`.
    pub fn fov(&self) -> f64 {
        self.ds * self.ns as f64
    }

    /// Number of exposures.
    pub fn nt(&self) -> usize {
        self.xcen.len()
    }

    /// Slit centre at exposure `t`.
    pub(crate) fn centre(&self, t: usize) -> (f64, f64) {
        (self.xcen[t], self.ycen[t])
    }

    /// Pixel-centre positions along one axis around `centre`.
    ///
    /// The endpoints sit half a step inside the slit edges.
    pub(crate) fn pixel_centres(&self, centre: f64) -> Array1<f64> {
        let half_fov = self.fov() / 2.0;
        let half_step = self.ds / 2.0;
        Array1::linspace(
            centre - half_fov + half_step,
            centre + half_fov - half_step,
            self.ns,
        )
    }

    /// Evaluates `column` at the representative exposure, or at every
    /// exposure in all-times mode, and lays the results out.
    pub(crate) fn evaluate<F>(&self, all_times: bool, column: F) -> SlitCoordinates
    where
        F: Fn(usize) -> (Array1<f64>, Array1<f64>),
    {
        if !all_times {
            let (xcoord, ycoord) = column(self.midind);
            return SlitCoordinates::Representative { xcoord, ycoord };
        }

        let mut xcoord = Array2::zeros((self.ns, self.nt()));
        let mut ycoord = Array2::zeros((self.ns, self.nt()));
        for t in 0..self.nt() {
            let (x, y) = column(t);
            xcoord.column_mut(t).assign(&x);
            ycoord.column_mut(t).assign(&y);
        }
        SlitCoordinates::AllTimes { xcoord, ycoord }
    }
}

/// Coordinates of every slit position.
#[derive(Debug, Clone, PartialEq)]
pub enum SlitCoordinates {
    /// One coordinate per slit position, at the representative exposure.
    Representative {
        xcoord: Array1<f64>,
        ycoord: Array1<f64>,
    },
    /// Shape `(ns, nt)`: column `t` holds the slit at exposure `t`.
    AllTimes {
        xcoord: Array2<f64>,
        ycoord: Array2<f64>,
    },
}

impl SlitCoordinates {
    pub fn is_all_times(&self) -> bool {
        matches!(self, SlitCoordinates::AllTimes { .. })
    }

    /// Positions along the slit.
    pub fn ns(&self) -> usize {
        match self {
            SlitCoordinates::Representative { xcoord, .. } => xcoord.len(),
            SlitCoordinates::AllTimes { xcoord, .. } => xcoord.nrows(),
        }
    }

    /// Number of exposure columns; 1 for the representative layout.
    pub fn columns(&self) -> usize {
        match self {
            SlitCoordinates::Representative { .. } => 1,
            SlitCoordinates::AllTimes { xcoord, .. } => xcoord.ncols(),
        }
    }

    /// X and Y of one exposure column.
    pub fn column(&self, index: usize) -> Option<(ArrayView1<'_, f64>, ArrayView1<'_, f64>)> {
        match self {
            SlitCoordinates::Representative { xcoord, ycoord } if index == 0 => {
                Some((xcoord.view(), ycoord.view()))
            }
            SlitCoordinates::Representative { .. } => None,
            SlitCoordinates::AllTimes { xcoord, ycoord } if index < xcoord.ncols() => {
                Some((xcoord.column(index), ycoord.column(index)))
            }
            SlitCoordinates::AllTimes { .. } => None,
        }
    }

    /// Splits a representative result into its X and Y vectors.
    pub fn into_representative(self) -> Option<(Array1<f64>, Array1<f64>)> {
        match self {
            SlitCoordinates::Representative { xcoord, ycoord } => Some((xcoord, ycoord)),
            SlitCoordinates::AllTimes { .. } => None,
        }
    }

    /// Splits an all-times result into its `(ns, nt)` X and Y arrays.
    pub fn into_all_times(self) -> Option<(Array2<f64>, Array2<f64>)> {
        match self {
            SlitCoordinates::AllTimes { xcoord, ycoord } => Some((xcoord, ycoord)),
            SlitCoordinates::Representative { .. } => None,
        }
    }
}
