use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use generator::batch::{run_batch, BatchOptions};
use generator::config::Config;
use generator::covers::{CoverStrategy, HttpCoverResolver};
use generator::llm_client::{self, LlmClient};
use generator::recommend::LlmRecommender;

/// Daily book recommendation batch generator.
///
/// Generates one enriched recommendation per calendar day and writes it as
/// `<date>.json` (plus optional `<date>.html`) for a static site to consume.
#[derive(Debug, Parser)]
#[command(name = "generator", version)]
struct Args {
    /// Number of days to generate, one record each
    #[arg(long, default_value_t = 2)]
    days: u32,

    /// First date of the run (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Output directory, overriding the OUTPUT_DIR environment variable
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// HTML template with {{FIELD}} placeholders, rendered alongside each JSON file
    #[arg(long)]
    template: Option<PathBuf>,

    /// Cover lookup strategy
    #[arg(long, value_enum, default_value = "search")]
    cover_strategy: CoverStrategy,

    /// Polite pause between iterations, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration first — a missing API key aborts before any batch work
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting generator v{}", env!("CARGO_PKG_VERSION"));

    // Template loading is the caller's concern; the batch driver only sees content
    let template = args
        .template
        .as_ref()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read template {}", path.display()))
        })
        .transpose()?;

    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let recommender = LlmRecommender::new(llm);
    let covers = HttpCoverResolver::new(args.cover_strategy);

    let opts = BatchOptions {
        days: args.days,
        start_date: args.start_date,
        output_dir: args
            .output_dir
            .unwrap_or_else(|| PathBuf::from(&config.output_dir)),
        affiliate_tag: config.affiliate_tag.clone(),
        template,
        delay: Duration::from_millis(args.delay_ms),
    };

    let summary = run_batch(&opts, &recommender, &covers).await?;

    info!(
        "Done: {} file(s) in {}",
        summary.written.len(),
        opts.output_dir.display()
    );

    Ok(())
}
