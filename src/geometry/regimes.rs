//! One pure function per roll regime.

use ndarray::{s, Array1};

use super::{SlitCoordinates, SlitInput};
use crate::units::{roll_radians, Degrees};

/// Unrolled slit: constant X, pixel-centre Y sequence around each centre.
pub fn zero_roll(input: &SlitInput<'_>, all_times: bool) -> SlitCoordinates {
    input.evaluate(all_times, |t| {
        let (xc, yc) = input.centre(t);
        (Array1::from_elem(input.ns(), xc), input.pixel_centres(yc))
    })
}

/// Slit rolled by ±90°: pixel-centre X sequence, constant Y.
///
/// Both axes come out reversed so the slit runs in the same direction as
/// the IDL reference routines. At -90° the X axis is mirrored, so it is
/// reversed once more and ends up in ascending order.
pub fn right_angle_roll(input: &SlitInput<'_>, roll: Degrees, all_times: bool) -> SlitCoordinates {
    let mirrored = roll.value() == -90.0;
    input.evaluate(all_times, |t| {
        let (xc, yc) = input.centre(t);
        let xcoord = input.pixel_centres(xc);
        let ycoord = Array1::from_elem(input.ns(), yc);

        let mut xcoord = reversed(&xcoord);
        let ycoord = reversed(&ycoord);
        if mirrored {
            xcoord = reversed(&xcoord);
        }
        (xcoord, ycoord)
    })
}

/// Slit tilted by `roll` through the pointing centre.
///
/// Positions are spread evenly over the full `fov`, from `-fov/2` to
/// `+fov/2` along the direction `(cos roll, sin roll)`.
pub fn arbitrary_roll(input: &SlitInput<'_>, roll: Degrees, all_times: bool) -> SlitCoordinates {
    let angle = roll_radians(roll).value();
    let fov = input.fov();
    let norm_offsets = Array1::linspace(-0.5, 0.5, input.ns());
    let x_offset = norm_offsets.mapv(|n| n * fov * angle.cos());
    let y_offset = norm_offsets.mapv(|n| n * fov * angle.sin());

    input.evaluate(all_times, |t| {
        let (xc, yc) = input.centre(t);
        (x_offset.mapv(|o| xc + o), y_offset.mapv(|o| yc + o))
    })
}

fn reversed(values: &Array1<f64>) -> Array1<f64> {
    values.slice(s![..;-1]).to_owned()
}
