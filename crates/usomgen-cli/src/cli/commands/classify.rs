//! `usomgen classify` – generate the lists from a local feed file.

use anyhow::{Context, Result};
use std::path::PathBuf;
use usomgen_core::pipeline;

pub async fn run_classify(path: PathBuf, output_dir: PathBuf) -> Result<()> {
    let report = tokio::task::spawn_blocking(move || pipeline::run_offline(&path, &output_dir))
        .await
        .context("classification task panicked")??;
    super::finish(&report)
}
