//! Converter entry points: string, stream, file, or pre-parsed document.

use crate::error::{GradleError, Result};
use crate::formatter::{render_dependencies, wrap_dependencies_block};
use crate::types::GradleDsl;
use m2g_maven::{PomDocument, extract_dependencies};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Converts Maven dependency declarations into a Gradle snippet.
///
/// Holds only the output dialect, so a single value can be shared freely
/// between threads and reused across calls.
///
/// ```
/// use m2g_gradle::Maven2Gradle;
///
/// let gradle = Maven2Gradle::groovy()
///     .convert_str(
///         "<dependency>
///            <groupId>com.samuraism</groupId>
///            <artifactId>webdriver-installer</artifactId>
///            <version>1.4</version>
///          </dependency>",
///     )
///     .unwrap();
/// assert_eq!(gradle, "implementation 'com.samuraism:webdriver-installer:1.4'");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maven2Gradle {
    dsl: GradleDsl,
}

impl Maven2Gradle {
    pub fn new(dsl: GradleDsl) -> Self {
        Self { dsl }
    }

    pub fn groovy() -> Self {
        Self::new(GradleDsl::Groovy)
    }

    pub fn kotlin() -> Self {
        Self::new(GradleDsl::Kotlin)
    }

    pub fn dsl(&self) -> GradleDsl {
        self.dsl
    }

    /// Converts a POM or a bare fragment of `<dependency>` elements.
    pub fn convert_str(&self, xml: &str) -> Result<String> {
        let document = PomDocument::parse(xml)?;
        self.convert_document(&document)
    }

    pub fn convert_reader<R: Read>(&self, reader: R) -> Result<String> {
        let document = PomDocument::from_reader(reader)?;
        self.convert_document(&document)
    }

    pub fn convert_file(&self, path: &Path) -> Result<String> {
        let file = File::open(path).map_err(|source| GradleError::Open {
            path: path.display().to_string(),
            source,
        })?;
        self.convert_reader(BufReader::new(file))
    }

    /// Renders every dependency in `document`, wrapping the result in a
    /// `dependencies { }` block when the document had one.
    pub fn convert_document(&self, document: &PomDocument) -> Result<String> {
        let extracted = extract_dependencies(document)?;
        let statements = render_dependencies(&extracted.dependencies, self.dsl);

        debug!(
            dsl = ?self.dsl,
            dependencies = extracted.dependencies.len(),
            wrapped = extracted.has_dependencies_block,
            "converted pom"
        );

        if extracted.has_dependencies_block {
            Ok(wrap_dependencies_block(&statements))
        } else {
            Ok(statements)
        }
    }
}
