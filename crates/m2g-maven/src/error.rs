//! Errors raised while loading a POM and extracting its dependencies.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MavenError {
    #[error("Failed to parse pom.xml: {message}")]
    ParseError { message: String },

    #[error("Required element '{tag}' not found")]
    MissingField { tag: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MavenError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    pub(crate) fn missing(tag: &str) -> Self {
        Self::MissingField {
            tag: tag.to_string(),
        }
    }

    /// Tag name of the missing element, if this is a [`MavenError::MissingField`].
    pub fn missing_tag(&self) -> Option<&str> {
        match self {
            Self::MissingField { tag } => Some(tag),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MavenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MavenError::MissingField {
            tag: "version".into(),
        };
        assert_eq!(err.to_string(), "Required element 'version' not found");

        let err = MavenError::ParseError {
            message: "unclosed element <dependency>".into(),
        };
        assert!(err.to_string().contains("unclosed element"));
    }

    #[test]
    fn test_missing_tag() {
        assert_eq!(MavenError::missing("groupId").missing_tag(), Some("groupId"));
        assert!(MavenError::parse("bad").missing_tag().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err: MavenError = io_err.into();
        assert!(matches!(err, MavenError::Io(_)));
    }
}
