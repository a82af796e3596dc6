mod cli;
mod job_file;
mod report;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    cli::run(cli::Cli::parse()).await
}
