//! pom.xml loading and dependency extraction.
//!
//! This crate turns a Maven POM (or a bare list of `<dependency>` blocks)
//! into an element tree and pulls typed dependency declarations out of it.
//! Rendering to Gradle lives in `m2g-gradle`.

pub mod dom;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod types;

pub use dom::{Descendants, Element, Node};
pub use error::{MavenError, Result};
pub use extractor::{PomDependencies, extract_dependencies};
pub use parser::{PomDocument, SYNTHETIC_ROOT};
pub use types::{MavenDependency, MavenExclusion, MavenScope};
