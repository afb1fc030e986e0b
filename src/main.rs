//! cc-includes CLI entrypoint
//! Parses command-line arguments and runs the include-building pipeline.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;

use cc_includes::config::{self, Config, Environment};
use cc_includes::pipeline::Pipeline;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Build creativecommons.org primary site includes (scripts, styles,
/// navigation header, and navigation footer) based on the WordPress REST API
#[derive(Parser)]
#[command(name = "cc-includes", author, version, about, long_about = None)]
struct Cli {
    /// Environment to fetch from
    #[arg(value_enum)]
    env: Environment,

    /// Debug mode: list fetched entries without writing include files
    #[arg(short, long)]
    debug: bool,

    /// HTTP Basic Auth username (required with the stage environment).
    /// The FETCH_USERNAME environment variable may also be used.
    #[arg(short, long)]
    username: Option<String>,

    /// HTTP Basic Auth password (required with the stage environment).
    /// The FETCH_PASSWORD environment variable may also be used.
    #[arg(short, long)]
    password: Option<String>,

    /// Base URL override for the WordPress site
    #[arg(long, hide = true)]
    base_url: Option<Url>,

    /// Directory receiving the rendered include files
    #[arg(long, default_value = "includes")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    // CLI flags win over the environment variable fallbacks
    let username = cli
        .username
        .or_else(|| config::env_non_empty("FETCH_USERNAME"));
    let password = cli
        .password
        .or_else(|| config::env_non_empty("FETCH_PASSWORD"));

    let config = Config::new(
        cli.env,
        cli.base_url,
        username,
        password,
        cli.debug,
        cli.output_dir,
    )
    .context("invalid configuration")?;

    info!(base_url = %config.base_url, "building site includes");
    let pipeline = Pipeline::new(config).context("failed to initialize pipeline")?;
    let summary = pipeline.run().await;

    if !summary.is_success() {
        anyhow::bail!("{} of {} endpoints failed", summary.failed(), summary.total());
    }

    info!("all {} endpoints processed", summary.total());
    Ok(())
}
