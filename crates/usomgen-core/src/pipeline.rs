//! One generation run: fetch, classify, freeze, write.
//!
//! A run that cannot fetch the feed stops before touching the output
//! directory, so a failed run never leaves partial lists behind.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::classify::{Categories, Category, Classifier, ClassifyStats};
use crate::config::GeneratorConfig;
use crate::fetch::{decode_body, Fetcher, Transport};
use crate::output::{self, WriteReport};
use crate::retry::Sleeper;

#[derive(Debug, Clone)]
pub struct RunReport {
    /// Entries per category after dedup.
    pub counts: Vec<(Category, usize)>,
    pub stats: ClassifyStats,
    pub write: WriteReport,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.write.is_complete()
    }
}

/// Fetch from the configured source and write into `cfg.output_dir`.
///
/// The HTTP handle lives for the duration of this call only.
pub fn run(cfg: &GeneratorConfig) -> Result<RunReport> {
    let mut fetcher = Fetcher::from_config(cfg)?;
    run_with_fetcher(&mut fetcher, &cfg.output_dir)
}

/// Same as [`run`] with a caller-supplied fetcher.
pub fn run_with_fetcher<T: Transport, S: Sleeper>(
    fetcher: &mut Fetcher<T, S>,
    output_dir: &Path,
) -> Result<RunReport> {
    let started = Instant::now();
    tracing::info!("starting generation run");
    let feed = fetcher.fetch().context("could not retrieve the block list")?;
    classify_and_write(feed.as_str(), output_dir, started)
}

/// Generate the lists from a local copy of the feed instead of the network.
pub fn run_offline(input: &Path, output_dir: &Path) -> Result<RunReport> {
    let started = Instant::now();
    let bytes =
        std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let feed = decode_body(&bytes);
    if feed.trim().is_empty() {
        anyhow::bail!("{} is empty", input.display());
    }
    tracing::info!("classifying local feed {}", input.display());
    classify_and_write(&feed, output_dir, started)
}

fn classify_and_write(feed: &str, output_dir: &Path, started: Instant) -> Result<RunReport> {
    let categories: Categories = Classifier::new().classify(feed).freeze();
    let generated_at = Utc::now();

    tracing::info!("writing lists to {}", output_dir.display());
    let write = output::write_all(output_dir, &categories, &generated_at)?;

    let report = RunReport {
        counts: categories.counts(),
        stats: *categories.stats(),
        write,
        elapsed: started.elapsed(),
    };
    if report.is_success() {
        tracing::info!("run completed in {:.1}s", report.elapsed.as_secs_f64());
    } else {
        tracing::error!(
            "run finished with {} unwritten file(s) in {:.1}s",
            report.write.failed.len(),
            report.elapsed.as_secs_f64()
        );
    }
    Ok(report)
}
