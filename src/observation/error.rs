use thiserror::Error;

use super::HeaderUnit;

/// Failures reported by an [`ObservationProvider`](super::ObservationProvider).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Keyword {keyword} not found in the {unit} header")]
    MissingKeyword { unit: HeaderUnit, keyword: String },

    #[error("Keyword {keyword} is not {expected}")]
    WrongType {
        keyword: String,
        expected: &'static str,
    },

    #[error("Pointing table has no column {column} (only {available} columns)")]
    MissingColumn { column: usize, available: usize },

    #[error("Observation source unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keyword_display() {
        let e = ProviderError::MissingKeyword {
            unit: HeaderUnit::SpectralWindow,
            keyword: "CDELT2".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Keyword CDELT2 not found in the spectral window header"
        );
    }

    #[test]
    fn wrong_type_display() {
        let e = ProviderError::WrongType {
            keyword: "NAXIS3".to_string(),
            expected: "an integer",
        };
        assert_eq!(e.to_string(), "Keyword NAXIS3 is not an integer");
    }

    #[test]
    fn missing_column_display() {
        let e = ProviderError::MissingColumn {
            column: 14,
            available: 3,
        };
        assert_eq!(
            e.to_string(),
            "Pointing table has no column 14 (only 3 columns)"
        );
    }

    #[test]
    fn unavailable_display() {
        let e = ProviderError::Unavailable("iris_l2_raster.fits".to_string());
        assert!(e.to_string().contains("iris_l2_raster.fits"));
    }
}
