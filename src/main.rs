mod auth;
mod board;
mod cli;
mod config;
mod error;
mod triage;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting docboard - review board filing");
    cli.execute().await?;

    Ok(())
}
