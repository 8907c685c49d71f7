//! CLI command handlers, one file per command.

mod classify;
mod config;
mod run;

pub use classify::run_classify;
pub use config::show_config;
pub use run::run_generate;

use anyhow::Result;
use usomgen_core::pipeline::RunReport;

/// Print one line per list and fail when any file was not written.
fn finish(report: &RunReport) -> Result<()> {
    for file in &report.write.written {
        println!("{:<16} {:>7}  {}", file.category.file_name(), file.entries, file.path.display());
    }
    for file in &report.write.failed {
        println!("{:<16} {:>7}  {}", file.category.file_name(), "FAILED", file.error);
    }
    let stats = &report.stats;
    println!(
        "{} lines: {} skipped, {} IP, {} host/URL ({} unparsed)  [{:.1}s]",
        stats.total_lines,
        stats.skipped,
        stats.ips,
        stats.candidates,
        stats.degraded,
        report.elapsed.as_secs_f64()
    );
    if !report.is_success() {
        anyhow::bail!("{} list(s) could not be written", report.write.failed.len());
    }
    Ok(())
}
