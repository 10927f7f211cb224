//! Error types for the Topoviz crate.
//!
//! Topology operations on [`TopologyModel`](crate::TopologyModel) never fail.
//! Errors only arise at the edges of the crate: parsing widget configuration,
//! encoding draw commands for a host, and looking up a host drawing surface.

use thiserror::Error;

/// The main error type for Topoviz operations.
#[derive(Error, Debug)]
pub enum TopovizError {
    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration value out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Host drawing surface was missing or unusable
    #[error("Drawing surface unavailable: {0}")]
    Surface(String),
}

/// A specialized `Result` type for Topoviz operations.
pub type Result<T> = std::result::Result<T, TopovizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TopovizError::InvalidParameter("neuron_radius must be >= 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameter: neuron_radius must be >= 0"
        );

        let err = TopovizError::Surface("no canvas with id 'networkCanvas'".to_string());
        assert_eq!(
            err.to_string(),
            "Drawing surface unavailable: no canvas with id 'networkCanvas'"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: TopovizError = parse_err.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
