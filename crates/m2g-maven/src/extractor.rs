//! Dependency extraction from a loaded [`PomDocument`].
//!
//! Every lookup is a descendant search by tag name, so dependencies are
//! found no matter how deeply they are nested or which wrapper elements
//! surround them. Required fields use the first matching descendant.

use crate::dom::Element;
use crate::error::{MavenError, Result};
use crate::parser::PomDocument;
use crate::types::{MavenDependency, MavenExclusion, MavenScope};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomDependencies {
    /// All `<dependency>` elements, in document order.
    pub dependencies: Vec<MavenDependency>,
    /// Whether a `<dependencies>` element exists anywhere in the document.
    pub has_dependencies_block: bool,
}

/// Extracts every dependency in `document`.
///
/// Fails on the first dependency or exclusion with a missing required field;
/// nothing is returned for the rest of the document in that case.
pub fn extract_dependencies(document: &PomDocument) -> Result<PomDependencies> {
    let dependencies = document
        .descendants("dependency")
        .map(dependency_from_element)
        .collect::<Result<Vec<_>>>()?;
    let has_dependencies_block = document.descendants("dependencies").next().is_some();

    debug!(
        count = dependencies.len(),
        has_dependencies_block, "extracted dependencies"
    );

    Ok(PomDependencies {
        dependencies,
        has_dependencies_block,
    })
}

pub fn dependency_from_element(element: &Element) -> Result<MavenDependency> {
    let group_id = required_text(element, "groupId")?;
    let artifact_id = required_text(element, "artifactId")?;
    let version = required_text(element, "version")?;
    let scope = element
        .find_text("scope")
        .as_deref()
        .unwrap_or("compile")
        .parse::<MavenScope>()
        .unwrap_or_default();

    // Only the first <exclusions> counts; an empty one behaves as if absent.
    let exclusions = match element.descendants("exclusions").next() {
        Some(exclusions) => exclusions
            .descendants("exclusion")
            .map(exclusion_from_element)
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(MavenDependency {
        group_id,
        artifact_id,
        version,
        scope,
        exclusions,
    })
}

pub fn exclusion_from_element(element: &Element) -> Result<MavenExclusion> {
    Ok(MavenExclusion {
        group_id: required_text(element, "groupId")?,
        artifact_id: required_text(element, "artifactId")?,
    })
}

fn required_text(element: &Element, tag: &str) -> Result<String> {
    element
        .find_text(tag)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| MavenError::missing(tag))
}
