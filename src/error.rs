use thiserror::Error;

use crate::observation::ProviderError;

/// Errors returned by the slit coordinate resolvers.
///
/// Every variant is terminal for the call that produced it: no partial
/// coordinates are ever returned alongside an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SlitError {
    /// The observation source cannot supply usable metadata.
    #[error("Invalid observation input: {0}")]
    InvalidInput(String),

    /// The observation is not a fixed-pointing (sit-and-stare) dataset.
    #[error("Only sit-and-stare observations are supported (OBS_DESC = {obs_desc:?})")]
    UnsupportedMode { obs_desc: String },

    /// The requested geometric model has not been written yet.
    #[error("The {0} coordinate model is not implemented")]
    NotImplemented(&'static str),
}

impl From<ProviderError> for SlitError {
    fn from(err: ProviderError) -> Self {
        SlitError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::HeaderUnit;

    #[test]
    fn invalid_input_display() {
        let e = SlitError::InvalidInput("NAXIS2 must be positive".to_string());
        assert_eq!(
            e.to_string(),
            "Invalid observation input: NAXIS2 must be positive"
        );
    }

    #[test]
    fn unsupported_mode_display() {
        let e = SlitError::UnsupportedMode {
            obs_desc: "Large coarse 8-step raster".to_string(),
        };
        let s = e.to_string();
        assert!(s.contains("sit-and-stare"));
        assert!(s.contains("Large coarse 8-step raster"));
    }

    #[test]
    fn not_implemented_display() {
        let e = SlitError::NotImplemented("raster");
        assert_eq!(e.to_string(), "The raster coordinate model is not implemented");
    }

    #[test]
    fn provider_error_becomes_invalid_input() {
        let e: SlitError = ProviderError::MissingKeyword {
            unit: HeaderUnit::Primary,
            keyword: "SAT_ROT".to_string(),
        }
        .into();
        match e {
            SlitError::InvalidInput(msg) => assert!(msg.contains("SAT_ROT")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
