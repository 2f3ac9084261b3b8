use ndarray::ArrayView1;

/// Relative difference between the expected slit extent and the distance
/// spanned by the computed end positions, `1 - |fov| / distance`.
///
/// Returns `None` for slits with fewer than two positions, where the end
/// positions coincide.
pub fn extent_mismatch(
    xcoord: ArrayView1<'_, f64>,
    ycoord: ArrayView1<'_, f64>,
    fov: f64,
) -> Option<f64> {
    if xcoord.len() < 2 || ycoord.len() < 2 {
        return None;
    }
    let xl = xcoord[0] - xcoord[xcoord.len() - 1];
    let yl = ycoord[0] - ycoord[ycoord.len() - 1];
    let actual = xl.hypot(yl);
    if actual == 0.0 {
        return None;
    }
    Some(1.0 - fov.abs() / actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn matching_extent_is_zero() {
        let x = array![0.0, 1.5, 3.0];
        let y = array![0.0, 2.0, 4.0];
        let mismatch = extent_mismatch(x.view(), y.view(), 5.0).unwrap();
        assert_abs_diff_eq!(mismatch, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_fov_uses_magnitude() {
        let x = array![3.0, 0.0];
        let y = array![4.0, 0.0];
        let mismatch = extent_mismatch(x.view(), y.view(), -5.0).unwrap();
        assert_abs_diff_eq!(mismatch, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn short_slit_reports_mismatch() {
        let x = array![0.0, 4.0];
        let y = array![0.0, 0.0];
        let mismatch = extent_mismatch(x.view(), y.view(), 5.0).unwrap();
        assert_abs_diff_eq!(mismatch, -0.25, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_slits() {
        let single = array![1.0];
        assert!(extent_mismatch(single.view(), single.view(), 1.0).is_none());

        let same = array![2.0, 2.0];
        assert!(extent_mismatch(same.view(), same.view(), 1.0).is_none());
    }
}
