//! Gradle statement rendering.
//!
//! Each dialect has one literal template per statement kind; the dialect is
//! a plain parameter rather than a formatter type per DSL.

use crate::types::{GradleConfiguration, GradleDsl};
use m2g_maven::{MavenDependency, MavenExclusion};
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

const INDENT: &str = "    ";

/// Matches the start of every line, blank ones included.
static RE_LINE_START: OnceLock<Regex> = OnceLock::new();

fn re_line_start() -> &'static Regex {
    RE_LINE_START.get_or_init(|| Regex::new(r"(?m)^").unwrap())
}

/// Renders one dependency as a single Gradle statement.
///
/// Dependencies with exclusions use the call form followed by an exclusion
/// block; everything else is a one-liner.
pub fn render_dependency(dependency: &MavenDependency, dsl: GradleDsl) -> String {
    let configuration = GradleConfiguration::from(&dependency.scope);
    let coordinate = dependency.coordinate();

    let statement = if dependency.exclusions.is_empty() {
        match dsl {
            GradleDsl::Groovy => format!("{configuration} '{coordinate}'"),
            GradleDsl::Kotlin => format!("{configuration}(\"{coordinate}\")"),
        }
    } else {
        let block = render_exclusions(&dependency.exclusions, dsl);
        match dsl {
            GradleDsl::Groovy => format!("{configuration}('{coordinate}') {block}"),
            GradleDsl::Kotlin => format!("{configuration}(\"{coordinate}\") {block}"),
        }
    };

    trace!(
        %coordinate,
        %configuration,
        exclusions = dependency.exclusions.len(),
        "rendered dependency"
    );
    statement
}

/// Renders the `{ exclude ... }` block for a dependency.
///
/// Returns an empty string when there is nothing to exclude.
pub fn render_exclusions(exclusions: &[MavenExclusion], dsl: GradleDsl) -> String {
    if exclusions.is_empty() {
        return String::new();
    }

    let mut block = String::from("{\n");
    for exclusion in exclusions {
        let line = match dsl {
            GradleDsl::Groovy => format!(
                "exclude group: '{}', module: '{}'",
                exclusion.group_id, exclusion.artifact_id
            ),
            GradleDsl::Kotlin => format!(
                "exclude(group = \"{}\", module = \"{}\")",
                exclusion.group_id, exclusion.artifact_id
            ),
        };
        block.push_str(INDENT);
        block.push_str(&line);
        block.push('\n');
    }
    block.push('}');
    block
}

/// Renders all dependencies, newline-separated with no trailing newline.
pub fn render_dependencies(dependencies: &[MavenDependency], dsl: GradleDsl) -> String {
    dependencies
        .iter()
        .map(|dependency| render_dependency(dependency, dsl))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indents every line of `statements` and wraps them in `dependencies { }`.
pub fn wrap_dependencies_block(statements: &str) -> String {
    let indented = re_line_start().replace_all(statements, INDENT);
    format!("dependencies {{\n{indented}\n}}")
}
