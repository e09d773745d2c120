//! Command-line front end for maven2gradle.
//!
//! Argument handling lives here rather than in `main` so it can be tested
//! without spawning a process.

use anyhow::{Context, Result};
use clap::Parser;
use m2g_gradle::{GradleDsl, Maven2Gradle};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Converted when no existing file is named on the command line.
pub const DEFAULT_POM: &str = "./pom.xml";

#[derive(Parser, Debug)]
#[command(
    name = "maven2gradle",
    version,
    about = "Convert pom.xml dependencies into Gradle dependency statements"
)]
pub struct Cli {
    /// Emit Kotlin DSL (build.gradle.kts) instead of Groovy; `-kts` is accepted too
    #[arg(long)]
    pub kts: bool,

    /// pom.xml to convert; the last one that exists is used (defaults to ./pom.xml)
    #[arg(value_name = "POM", allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Parses arguments, exiting with usage on error like `Parser::parse_from`.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    pub fn try_parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    pub fn dsl(&self) -> GradleDsl {
        GradleDsl::from_kts(self.kts)
    }

    /// The last path argument naming an existing file, else [`DEFAULT_POM`].
    pub fn pom_path(&self) -> PathBuf {
        for path in self.paths.iter().filter(|p| !p.is_file()) {
            warn!(path = %path.display(), "ignoring argument: not an existing file");
        }
        self.paths
            .iter()
            .rev()
            .find(|p| p.is_file())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_POM))
    }
}

/// Rewrites the single-dash `-kts` flag to `--kts` and moves every `--kts`
/// ahead of the path arguments.
///
/// Paths accept hyphen-prefixed values (`-old.xml`, unknown flags), and
/// clap stops recognizing flags once such a value list has started.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next();
    let (flags, rest): (Vec<OsString>, Vec<OsString>) = args
        .map(|arg| {
            if arg.as_os_str() == "-kts" {
                OsString::from("--kts")
            } else {
                arg
            }
        })
        .partition(|arg| arg.as_os_str() == "--kts");

    program.into_iter().chain(flags).chain(rest).collect()
}

/// Converts the selected pom file and returns the Gradle snippet.
pub fn run(cli: &Cli) -> Result<String> {
    let path = cli.pom_path();
    let dsl = cli.dsl();
    debug!(path = %path.display(), ?dsl, "converting pom");

    Maven2Gradle::new(dsl)
        .convert_file(&path)
        .with_context(|| format!("failed to convert {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const POM: &str = "<dependencies><dependency><groupId>g</groupId>\
                       <artifactId>a</artifactId><version>1</version></dependency></dependencies>";

    fn pom_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(POM.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_normalize_args() {
        let args = normalize_args(["maven2gradle", "-kts", "pom.xml", "--kts"]);
        assert_eq!(args, vec!["maven2gradle", "--kts", "--kts", "pom.xml"]);
    }

    #[test]
    fn test_normalize_args_moves_trailing_kts() {
        let args = normalize_args(["maven2gradle", "-old.xml", "pom.xml", "-kts"]);
        assert_eq!(args, vec!["maven2gradle", "--kts", "-old.xml", "pom.xml"]);
    }

    #[test]
    fn test_parse_kts_single_dash() {
        let cli = Cli::try_parse_args(["maven2gradle", "-kts"]).unwrap();
        assert!(cli.kts);
        assert_eq!(cli.dsl(), GradleDsl::Kotlin);
        assert!(cli.paths.is_empty());
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_args(["maven2gradle"]).unwrap();
        assert!(!cli.kts);
        assert_eq!(cli.dsl(), GradleDsl::Groovy);
        assert_eq!(cli.pom_path(), PathBuf::from(DEFAULT_POM));
    }

    #[test]
    fn test_parse_unknown_flag_is_a_path() {
        let cli = Cli::try_parse_args(["maven2gradle", "--bogus"]).unwrap();
        assert!(!cli.kts);
        assert_eq!(cli.paths, vec![PathBuf::from("--bogus")]);
        assert_eq!(cli.pom_path(), PathBuf::from(DEFAULT_POM));
    }

    #[test]
    fn test_parse_hyphen_path_then_kts() {
        let cli = Cli::try_parse_args(["maven2gradle", "-old.xml", "-kts"]).unwrap();
        assert!(cli.kts);
        assert_eq!(cli.paths, vec![PathBuf::from("-old.xml")]);
    }

    #[test]
    fn test_pom_path_skips_missing() {
        let file = pom_file();
        let cli = Cli::try_parse_args([
            OsString::from("maven2gradle"),
            file.path().as_os_str().to_owned(),
            OsString::from("/nonexistent/pom.xml"),
        ])
        .unwrap();
        assert_eq!(cli.pom_path(), file.path());
    }

    #[test]
    fn test_pom_path_last_existing_wins() {
        let first = pom_file();
        let second = pom_file();
        let cli = Cli::try_parse_args([
            OsString::from("maven2gradle"),
            first.path().as_os_str().to_owned(),
            second.path().as_os_str().to_owned(),
        ])
        .unwrap();
        assert_eq!(cli.pom_path(), second.path());
    }

    #[test]
    fn test_pom_path_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_args([
            OsString::from("maven2gradle"),
            dir.path().as_os_str().to_owned(),
        ])
        .unwrap();
        assert_eq!(cli.pom_path(), PathBuf::from(DEFAULT_POM));
    }

    #[test]
    fn test_run_kotlin() {
        let file = pom_file();
        let cli = Cli::try_parse_args([
            OsString::from("maven2gradle"),
            OsString::from("-kts"),
            file.path().as_os_str().to_owned(),
        ])
        .unwrap();
        assert_eq!(
            run(&cli).unwrap(),
            "dependencies {\n    implementation(\"g:a:1\")\n}"
        );
    }

    #[test]
    fn test_run_error_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<dependency><groupId>g</groupId></dependency>")
            .unwrap();
        let cli = Cli {
            kts: false,
            paths: vec![file.path().to_path_buf()],
        };
        let err = run(&cli).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("failed to convert"));
        assert!(message.contains("Required element 'artifactId' not found"));
    }
}
