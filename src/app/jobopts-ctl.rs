use anyhow::{Context, Result};
use clap::Parser;
use jobopts::cmd::ctl::Args;
use jobopts::ResolvedJobOptions;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn display_options(resolved: &ResolvedJobOptions, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(resolved)?
    } else {
        serde_json::to_string(resolved)?
    };
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let span = tracing::info_span!("resolve");
    let resolved = span
        .in_scope(|| args.options.load())
        .context("Failed to resolve job options")?;

    tracing::debug!(
        job_name = resolved.job_name(),
        is_async = resolved.is_async(),
        "Resolved job options"
    );
    display_options(&resolved, args.pretty)
}
