//! Initialize rating-review in the current directory

use std::fs;

use rating_review::config::Config;
use rating_review::output::{OperationResult, OutputMode};
use rating_review::paths;

/// Write `.ratings.toml` and create the data directory
pub fn init(config: &Config, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = paths::project_config();

    if config_path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to reinitialize.",
                config_path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    config.save_to(&config_path)?;
    fs::create_dir_all(&config.storage.data_dir)?;
    log::info!("initialized at {}", config.storage.data_dir.display());

    OperationResult {
        success: true,
        message: format!(
            "Created {} (data in {})",
            config_path.display(),
            config.storage.data_dir.display()
        ),
    }
    .render(mode);

    Ok(())
}
