//! Gradle-side types: output dialect and dependency configuration.

use m2g_maven::MavenScope;
use std::fmt;

/// Build-script dialect to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradleDsl {
    /// `build.gradle`
    #[default]
    Groovy,
    /// `build.gradle.kts`
    Kotlin,
}

impl GradleDsl {
    pub fn from_kts(kts: bool) -> Self {
        if kts { Self::Kotlin } else { Self::Groovy }
    }
}

/// Gradle configuration a Maven scope maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradleConfiguration {
    Implementation,
    CompileOnly,
    TestImplementation,
}

impl GradleConfiguration {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Implementation => "implementation",
            Self::CompileOnly => "compileOnly",
            Self::TestImplementation => "testImplementation",
        }
    }
}

impl From<&MavenScope> for GradleConfiguration {
    fn from(scope: &MavenScope) -> Self {
        match scope {
            MavenScope::Provided => Self::CompileOnly,
            MavenScope::Test => Self::TestImplementation,
            // runtime, system, import and unknown scopes all fall back
            MavenScope::Compile
            | MavenScope::Runtime
            | MavenScope::System
            | MavenScope::Import
            | MavenScope::Other(_) => Self::Implementation,
        }
    }
}

impl fmt::Display for GradleConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
