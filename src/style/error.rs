//! Errors raised while resolving themes and tokens.

use std::path::PathBuf;

/// Error returned when a theme or its tokens cannot be resolved.
///
/// Style builders themselves never fail; every variant here originates in the
/// token lookup performed before a builder runs.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A token holds a value no builder can use
    #[error("invalid token '{field}': {reason}")]
    InvalidToken { field: String, reason: String },
    /// A theme file could not be parsed
    #[error("invalid theme configuration: {0}")]
    Config(String),
    /// A theme file could not be read
    #[error("failed to read theme file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A theme file has an extension other than yaml, yml or json
    #[error("unsupported theme file format: '{0}'")]
    UnsupportedFormat(String),
}

impl StyleError {
    pub(crate) fn invalid_token(field: &str, reason: impl Into<String>) -> Self {
        StyleError::InvalidToken {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_error_display() {
        let err = StyleError::invalid_token("controlHeight", "must be positive");
        let msg = err.to_string();
        assert!(msg.contains("controlHeight"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_io_error_display() {
        let err = StyleError::Io {
            path: PathBuf::from("/themes/brand.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/themes/brand.yaml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = StyleError::UnsupportedFormat("toml".into());
        assert!(err.to_string().contains("toml"));
    }
}
