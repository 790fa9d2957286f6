//! Error types for the landing page

use thiserror::Error;

/// Main error type for landing page operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandingError {
    /// Element id is empty or contains whitespace
    #[error("Invalid element id: {0:?}")]
    InvalidElementId(String),

    /// No element with the given id exists on the page
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Script evaluation in the rendering surface failed
    #[error("Script error: {0}")]
    Script(String),

    /// Startup configuration rejected
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using LandingError
pub type LandingResult<T> = Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LandingError::ElementNotFound("contact".to_string());
        assert_eq!(format!("{}", err), "Element not found: contact");
    }

    #[test]
    fn test_invalid_id_display_is_quoted() {
        let err = LandingError::InvalidElementId("two words".to_string());
        assert_eq!(err.to_string(), "Invalid element id: \"two words\"");
    }
}
