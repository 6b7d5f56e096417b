//! Binary crate for the weather dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logger setup
//! - Wiring the OpenWeather provider and the S3 store into one pipeline run

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let cmd = cli::Cli::parse();
    cmd.run().await
}
