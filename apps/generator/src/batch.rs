//! Batch Driver — orchestrates the day-by-day generation pipeline.
//!
//! Flow per iteration: recommend → resolve cover → build link → enrich →
//! persist JSON → (optional) render HTML.
//!
//! Failures are isolated per day: any error inside an iteration is caught at
//! the iteration boundary, logged with the failing date, and the loop moves
//! on. A failed day never aborts the batch and contributes nothing to the
//! exclusion list. Partial batches are an accepted outcome.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Days, Local, NaiveDate};
use tracing::{error, info};

use crate::covers::CoverResolver;
use crate::errors::GeneratorError;
use crate::links::build_buy_link;
use crate::models::BookRecord;
use crate::recommend::Recommender;
use crate::render::render_template;

/// Parameters for one batch invocation.
pub struct BatchOptions {
    /// Number of days to generate, one record each.
    pub days: u32,
    /// First date of the run; `None` means today (local time).
    pub start_date: Option<NaiveDate>,
    /// Directory receiving `<date_id>.json` (and optional `.html`) files.
    pub output_dir: PathBuf,
    /// Affiliate identifier appended to every purchase link.
    pub affiliate_tag: String,
    /// Pre-loaded HTML template content; when present, each record is also
    /// rendered to `<date_id>.html`. Loading the file is the caller's job.
    pub template: Option<String>,
    /// Polite pause between iterations, applied after success and failure
    /// alike but skipped after the final day.
    pub delay: Duration,
}

/// Outcome of a batch run, for the caller's completion banner and for tests.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Date ids whose files were written.
    pub written: Vec<String>,
    /// Date ids whose iteration failed and was skipped.
    pub failed: Vec<String>,
    /// Titles of all successful iterations, in order — the final state of
    /// the exclusion list.
    pub titles: Vec<String>,
}

/// Runs the full batch: one record per calendar day starting at
/// `opts.start_date`, re-running a date silently overwrites its prior file.
pub async fn run_batch(
    opts: &BatchOptions,
    recommender: &dyn Recommender,
    covers: &dyn CoverResolver,
) -> Result<BatchSummary> {
    std::fs::create_dir_all(&opts.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            opts.output_dir.display()
        )
    })?;

    let start = opts.start_date.unwrap_or_else(|| Local::now().date_naive());
    let mut summary = BatchSummary::default();

    info!("Starting batch generation for {} day(s)...", opts.days);

    for i in 0..opts.days {
        let date = start + Days::new(u64::from(i));
        let date_id = format_date_id(date);

        info!("[{}/{}] Generating for {date_id}...", i + 1, opts.days);

        // The exclusion list is threaded through explicitly: only successful
        // days append to it, so a failed day steers nothing.
        let outcome = generate_day(opts, recommender, covers, &summary.titles, date).await;
        match outcome {
            Ok(title) => {
                info!("Saved '{title}' for {date_id}");
                summary.titles.push(title);
                summary.written.push(date_id);
            }
            Err(e) => {
                error!("Error on {date_id}: {e}");
                summary.failed.push(date_id);
            }
        }

        if i + 1 < opts.days {
            tokio::time::sleep(opts.delay).await;
        }
    }

    info!(
        "Batch complete! {} written, {} failed",
        summary.written.len(),
        summary.failed.len()
    );

    Ok(summary)
}

/// One day's pipeline. Returns the generated title on success so the caller
/// can extend the exclusion list.
async fn generate_day(
    opts: &BatchOptions,
    recommender: &dyn Recommender,
    covers: &dyn CoverResolver,
    exclude: &[String],
    date: NaiveDate,
) -> Result<String, GeneratorError> {
    let book = recommender.recommend(exclude).await?;

    let cover_url = covers.resolve(&book).await;
    let buy_link = build_buy_link(&book.title, &book.author, &opts.affiliate_tag);

    let title = book.title.clone();
    let record = BookRecord {
        book,
        cover_url,
        buy_link,
        date_display: format_display_date(date),
        date_id: format_date_id(date),
    };

    persist_json(&opts.output_dir, &record).await?;

    if let Some(template) = &opts.template {
        persist_html(&opts.output_dir, template, &record).await?;
    }

    Ok(title)
}

/// Writes `<output_dir>/<date_id>.json`, pretty-printed UTF-8, direct
/// overwrite. No write-then-rename: a crash mid-write leaves a truncated
/// file, which the contract accepts.
async fn persist_json(output_dir: &Path, record: &BookRecord) -> Result<(), GeneratorError> {
    let path = output_dir.join(format!("{}.json", record.date_id));
    let json = serde_json::to_string_pretty(record)?;

    tokio::fs::write(&path, json)
        .await
        .map_err(|source| GeneratorError::Persistence { path, source })
}

/// Writes the rendered template at the same stem with an `.html` extension.
async fn persist_html(
    output_dir: &Path,
    template: &str,
    record: &BookRecord,
) -> Result<(), GeneratorError> {
    let path = output_dir.join(format!("{}.html", record.date_id));
    let html = render_template(template, record);

    tokio::fs::write(&path, html)
        .await
        .map_err(|source| GeneratorError::Persistence { path, source })
}

/// ISO calendar date — the record's natural key and filename stem.
fn format_date_id(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Long-form date for display fields only.
fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}
