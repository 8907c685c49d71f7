//! `usomgen config` – show where the config lives and what is in effect.

use anyhow::Result;
use usomgen_core::config::{self, GeneratorConfig};

pub fn show_config(cfg: &GeneratorConfig) -> Result<()> {
    let policy = cfg.retry_policy();
    println!("config file: {}", config::config_path()?.display());
    println!("source_url:  {}", cfg.source_url);
    println!("user_agent:  {}", cfg.user_agent);
    println!("timeout:     {}s per attempt", cfg.timeout_secs);
    println!("output_dir:  {}", cfg.output_dir.display());
    println!(
        "retry:       {} attempts, {:.2}s base delay",
        policy.max_attempts,
        policy.base_delay.as_secs_f64()
    );
    Ok(())
}
