//! Config command

use anyhow::Result;
use patterns_utils::AppConfig;

pub fn handle(config: &AppConfig) -> Result<()> {
    println!("⚙️  Current Configuration:");
    println!("{}", serde_json::to_string_pretty(config)?);
    println!();
    println!("📍 Singleton logs: {}", config.output_dir.display());

    Ok(())
}
