//! Maven to Gradle dependency conversion.
//!
//! Renders dependencies extracted by `m2g-maven` as Gradle build-script
//! statements, in either dialect:
//! - Groovy DSL (`build.gradle`)
//! - Kotlin DSL (`build.gradle.kts`)

pub mod converter;
pub mod error;
pub mod formatter;
pub mod types;

pub use converter::Maven2Gradle;
pub use error::{GradleError, Result};
pub use formatter::{
    render_dependencies, render_dependency, render_exclusions, wrap_dependencies_block,
};
pub use types::{GradleConfiguration, GradleDsl};
