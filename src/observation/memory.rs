//! Provider backed by header cards and a pointing table held in memory.

use std::collections::BTreeMap;

use super::{
    HeaderUnit, HeaderValue, ObservationProvider, ProviderError, CDELT2, NAXIS2, NAXIS3,
    OBS_DESC, SAT_ROT,
};
use crate::config::ResolverConfig;

/// An observation whose metadata has already been decoded.
///
/// Useful for callers that parse files with their own reader, and for tests.
///
/// # Example
///
/// ```
/// use slitxy::observation::{HeaderUnit, InMemoryObservation, ObservationProvider, SAT_ROT};
///
/// let obs = InMemoryObservation::sit_and_stare(45.0, 4, 0.33, &[10.0, 11.0], &[-5.0, -4.0]);
/// assert_eq!(obs.float(HeaderUnit::Primary, SAT_ROT).unwrap(), 45.0);
/// assert_eq!(obs.pointing_column(13).unwrap(), vec![10.0, 11.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InMemoryObservation {
    primary: BTreeMap<String, HeaderValue>,
    spectral_window: BTreeMap<String, HeaderValue>,
    /// Row-major pointing table, one row per exposure.
    pointing: Vec<Vec<f64>>,
}

impl InMemoryObservation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a complete sit-and-stare observation.
    ///
    /// Slit-centre coordinates land in the default pointing columns; the
    /// remaining columns are zero-filled.
    pub fn sit_and_stare(sat_rot: f64, ns: usize, ds: f64, xcen: &[f64], ycen: &[f64]) -> Self {
        let nt = xcen.len().min(ycen.len());
        let width = ResolverConfig::DEFAULT_XCEN_COLUMN
            .max(ResolverConfig::DEFAULT_YCEN_COLUMN)
            + 1;
        let rows = xcen
            .iter()
            .zip(ycen)
            .map(|(&x, &y)| {
                let mut row = vec![0.0; width];
                row[ResolverConfig::DEFAULT_XCEN_COLUMN] = x;
                row[ResolverConfig::DEFAULT_YCEN_COLUMN] = y;
                row
            })
            .collect();

        Self::new()
            .with_header(
                HeaderUnit::Primary,
                OBS_DESC,
                "Medium sit-and-stare 0.3x60 1s  Deep x 8",
            )
            .with_header(HeaderUnit::Primary, SAT_ROT, sat_rot)
            .with_header(HeaderUnit::SpectralWindow, NAXIS2, ns as i64)
            .with_header(HeaderUnit::SpectralWindow, CDELT2, ds)
            .with_header(HeaderUnit::SpectralWindow, NAXIS3, nt as i64)
            .with_pointing_rows(rows)
    }

    /// Sets or replaces a header card.
    pub fn with_header(
        mut self,
        unit: HeaderUnit,
        keyword: impl Into<String>,
        value: impl Into<HeaderValue>,
    ) -> Self {
        self.set_header(unit, keyword, value);
        self
    }

    pub fn set_header(
        &mut self,
        unit: HeaderUnit,
        keyword: impl Into<String>,
        value: impl Into<HeaderValue>,
    ) {
        self.cards_mut(unit).insert(keyword.into(), value.into());
    }

    /// Removes a header card, returning its previous value.
    pub fn remove_header(&mut self, unit: HeaderUnit, keyword: &str) -> Option<HeaderValue> {
        self.cards_mut(unit).remove(keyword)
    }

    pub fn with_pointing_rows(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.pointing = rows;
        self
    }

    pub fn pointing_rows(&self) -> &[Vec<f64>] {
        &self.pointing
    }

    fn cards(&self, unit: HeaderUnit) -> &BTreeMap<String, HeaderValue> {
        match unit {
            HeaderUnit::Primary => &self.primary,
            HeaderUnit::SpectralWindow => &self.spectral_window,
        }
    }

    fn cards_mut(&mut self, unit: HeaderUnit) -> &mut BTreeMap<String, HeaderValue> {
        match unit {
            HeaderUnit::Primary => &mut self.primary,
            HeaderUnit::SpectralWindow => &mut self.spectral_window,
        }
    }
}

impl ObservationProvider for InMemoryObservation {
    fn header(&self, unit: HeaderUnit, keyword: &str) -> Result<HeaderValue, ProviderError> {
        self.cards(unit)
            .get(keyword)
            .cloned()
            .ok_or_else(|| ProviderError::MissingKeyword {
                unit,
                keyword: keyword.to_string(),
            })
    }

    fn pointing_column(&self, column: usize) -> Result<Vec<f64>, ProviderError> {
        self.pointing
            .iter()
            .map(|row| {
                row.get(column)
                    .copied()
                    .ok_or(ProviderError::MissingColumn {
                        column,
                        available: row.len(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sit_and_stare_layout() {
        let obs = InMemoryObservation::sit_and_stare(-90.0, 8, 0.166, &[1.0, 2.0], &[3.0, 4.0]);
        assert_eq!(obs.pointing_rows().len(), 2);
        assert_eq!(obs.pointing_rows()[0].len(), 15);
        assert_eq!(obs.pointing_column(13).unwrap(), vec![1.0, 2.0]);
        assert_eq!(obs.pointing_column(14).unwrap(), vec![3.0, 4.0]);
        assert_eq!(obs.pointing_column(0).unwrap(), vec![0.0, 0.0]);
        assert_eq!(
            obs.header(HeaderUnit::SpectralWindow, NAXIS3).unwrap(),
            HeaderValue::Integer(2)
        );
        assert!(obs
            .text(HeaderUnit::Primary, OBS_DESC)
            .unwrap()
            .contains("sit-and-stare"));
    }

    #[test]
    fn headers_are_scoped_by_unit() {
        let obs = InMemoryObservation::new().with_header(HeaderUnit::Primary, "NAXIS2", 3_i64);
        assert!(obs.header(HeaderUnit::Primary, NAXIS2).is_ok());
        assert_eq!(
            obs.header(HeaderUnit::SpectralWindow, NAXIS2),
            Err(ProviderError::MissingKeyword {
                unit: HeaderUnit::SpectralWindow,
                keyword: NAXIS2.to_string(),
            })
        );
    }

    #[test]
    fn remove_header() {
        let mut obs = InMemoryObservation::sit_and_stare(0.0, 2, 1.0, &[0.0], &[0.0]);
        assert_eq!(
            obs.remove_header(HeaderUnit::Primary, SAT_ROT),
            Some(HeaderValue::Float(0.0))
        );
        assert!(obs.header(HeaderUnit::Primary, SAT_ROT).is_err());
    }

    #[test]
    fn typed_lookups_report_wrong_type() {
        let obs = InMemoryObservation::sit_and_stare(0.0, 2, 1.0, &[0.0], &[0.0]);
        assert!(matches!(
            obs.integer(HeaderUnit::Primary, OBS_DESC),
            Err(ProviderError::WrongType { .. })
        ));
        assert!(matches!(
            obs.text(HeaderUnit::SpectralWindow, CDELT2),
            Err(ProviderError::WrongType { .. })
        ));
        assert_eq!(obs.float(HeaderUnit::SpectralWindow, NAXIS2).unwrap(), 2.0);
    }

    #[test]
    fn short_row_reports_missing_column() {
        let obs = InMemoryObservation::new().with_pointing_rows(vec![vec![0.0; 15], vec![0.0; 3]]);
        assert_eq!(
            obs.pointing_column(14),
            Err(ProviderError::MissingColumn {
                column: 14,
                available: 3,
            })
        );
    }

    #[test]
    fn empty_table_yields_empty_column() {
        let obs = InMemoryObservation::new();
        assert_eq!(obs.pointing_column(13).unwrap(), Vec::<f64>::new());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let obs = InMemoryObservation::sit_and_stare(12.5, 4, 0.33, &[1.0, 2.0], &[3.0, 4.0]);
        let json = serde_json::to_string(&obs).unwrap();
        let back: InMemoryObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);
    }
}
