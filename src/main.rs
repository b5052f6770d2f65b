use transit_styles::config::BuildConfig;
use transit_styles::ingestion::HttpFetcher;
use transit_styles::output::FileSink;
use transit_styles::pipeline::Pipeline;
use transit_styles::styles::NestedStyleCompiler;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "transit-styles")]
#[command(about = "Build MTA color stylesheets from the published color sheet")]
#[command(version)]
struct Args {
    /// JSON config file (defaults are used for missing keys)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for all four artifacts (overrides the config paths)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Color sheet URL
    #[arg(long)]
    source_url: Option<String>,

    /// Message to log once the build finishes
    #[arg(long)]
    message: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };
    config.apply_env();
    config.apply_overrides(args.source_url, args.out_dir);

    info!("Building from {}", config.source_url);

    let pipeline = Pipeline::new(
        &config,
        Box::new(HttpFetcher::new()),
        Box::new(NestedStyleCompiler::default()),
        Box::new(FileSink::new(config.output.clone())),
    );

    let report = pipeline
        .run(args.message.as_deref())
        .await
        .context("Build failed")?;

    for path in &report.written {
        println!("{}", path.display());
    }

    Ok(())
}
