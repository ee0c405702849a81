use clap::Parser;

use crate::JobOptions;

/// Resolve job submission options and print them for a job submission client.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub options: JobOptions,

    /// Pretty-print the resolved options
    #[arg(short, long)]
    pub pretty: bool,
}
