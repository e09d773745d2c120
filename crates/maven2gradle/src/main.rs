use anyhow::Result;
use maven2gradle::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the converted snippet, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args(std::env::args_os());
    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}
