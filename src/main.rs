//! # Backline Main Entry Point
//!
//! Thin binary shell: parse arguments, initialize tracing, hand off to the
//! application orchestrator.

use anyhow::Result;
use backline::cmd_args::Cli;
use backline::App;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = App::new(cli.base_url.clone())?;
    app.run(cli.command).await
}
