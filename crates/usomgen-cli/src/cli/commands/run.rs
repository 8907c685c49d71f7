//! `usomgen run` – fetch the feed and write the lists.

use anyhow::{Context, Result};
use usomgen_core::config::GeneratorConfig;
use usomgen_core::pipeline;

pub async fn run_generate(cfg: GeneratorConfig) -> Result<()> {
    tracing::info!("generating lists from {}", cfg.source_url);
    // curl and the backoff sleeps block; keep them off the async workers.
    let report = tokio::task::spawn_blocking(move || pipeline::run(&cfg))
        .await
        .context("generation task panicked")??;
    super::finish(&report)
}
