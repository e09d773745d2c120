//! Domain types for Maven dependency declarations.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub scope: MavenScope,
    /// Excluded transitive dependencies, in document order.
    pub exclusions: Vec<MavenExclusion>,
}

impl MavenDependency {
    /// "{groupId}:{artifactId}:{version}"
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenExclusion {
    pub group_id: String,
    pub artifact_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MavenScope {
    #[default]
    Compile,
    Test,
    Runtime,
    Provided,
    System,
    Import,
    /// Anything Maven itself would reject; kept verbatim.
    Other(String),
}

impl MavenScope {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Compile => "compile",
            Self::Test => "test",
            Self::Runtime => "runtime",
            Self::Provided => "provided",
            Self::System => "system",
            Self::Import => "import",
            Self::Other(scope) => scope,
        }
    }
}

impl std::str::FromStr for MavenScope {
    type Err = std::convert::Infallible;

    // Case-sensitive: Maven only recognizes the lowercase spellings.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "compile" => Self::Compile,
            "test" => Self::Test,
            "runtime" => Self::Runtime,
            "provided" => Self::Provided,
            "system" => Self::System,
            "import" => Self::Import,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for MavenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
