//! dcache - Entry Point
//!
//! Loads configuration, installs logging, builds the configured backend and
//! runs one cache command, printing its result as JSON.

use clap::Parser;
use dcache::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let output = run(cli).await?;
    println!("{output}");
    Ok(())
}
