use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xytx_sprites::{SpriteConfig, SpritePipeline, metadata_json, write_metadata};

#[derive(Parser, Debug)]
#[command(name = "xytx-sprites", version)]
struct Cli {
    /// JSON config file; command-line flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite every character on the gallery page into a PNG.
    Images(ImagesArgs),
    /// Scrape each character's detail page into a JSON document.
    Metadata(MetadataArgs),
}

#[derive(Parser, Debug)]
struct ImagesArgs {
    /// Read the gallery page from this file instead of fetching it.
    #[arg(long)]
    page: Option<PathBuf>,

    /// Output directory for the PNGs.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Characters composited concurrently.
    #[arg(long)]
    jobs: Option<usize>,

    /// Layer images fetched concurrently per character.
    #[arg(long)]
    layer_jobs: Option<usize>,
}

#[derive(Parser, Debug)]
struct MetadataArgs {
    /// Read the gallery page from this file instead of fetching it.
    #[arg(long)]
    page: Option<PathBuf>,

    /// Output JSON path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pause after each detail-page request, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SpriteConfig::from_path(path)?,
        None => SpriteConfig::default(),
    };

    match cli.cmd {
        Command::Images(args) => cmd_images(config, args).await,
        Command::Metadata(args) => cmd_metadata(config, args).await,
    }
}

async fn cmd_images(mut config: SpriteConfig, args: ImagesArgs) -> anyhow::Result<()> {
    if let Some(page) = args.page {
        config.list_page_file = Some(page);
    }
    if let Some(out) = args.out {
        config.output_dir = out;
    }
    if let Some(jobs) = args.jobs {
        config.jobs = jobs;
    }
    if let Some(layer_jobs) = args.layer_jobs {
        config.layer_jobs = layer_jobs;
    }

    let pipeline = SpritePipeline::with_http(config)?;
    let report = pipeline
        .run_images()
        .await
        .context("load character gallery")?;

    tracing::info!(
        written = report.written.len(),
        failed = report.failed.len(),
        layers_skipped = report.layers_skipped,
        "image run finished"
    );
    Ok(())
}

async fn cmd_metadata(mut config: SpriteConfig, args: MetadataArgs) -> anyhow::Result<()> {
    if let Some(page) = args.page {
        config.list_page_file = Some(page);
    }
    if let Some(out) = args.out {
        config.metadata_path = out;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.request_delay_ms = delay_ms;
    }

    let pipeline = SpritePipeline::with_http(config)?;
    let records = pipeline
        .run_metadata()
        .await
        .context("load character gallery")?;
    let json = metadata_json(&records)?;

    let path = &pipeline.config().metadata_path;
    match write_metadata(path, &json).await {
        Ok(()) => tracing::info!(path = %path.display(), records = records.len(), "saved metadata"),
        Err(err) => tracing::error!(path = %path.display(), error = %err, "failed to write metadata"),
    }
    println!("{json}");
    Ok(())
}
