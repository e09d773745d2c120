//! Errors specific to Gradle conversion.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradleError {
    #[error(transparent)]
    Maven(#[from] m2g_maven::MavenError),

    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GradleError {
    /// Tag of the missing required element, when conversion failed on one.
    pub fn missing_tag(&self) -> Option<&str> {
        match self {
            Self::Maven(e) => e.missing_tag(),
            Self::Open { .. } => None,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Maven(m2g_maven::MavenError::ParseError { .. }))
    }
}

pub type Result<T> = std::result::Result<T, GradleError>;
