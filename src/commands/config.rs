//! Config command - show or edit persistent defaults

use crate::cli::ConfigAction;
use standup_cli::config::GlobalConfig;
use standup_cli::output::{ConfigReport, OperationResult, OutputMode};

/// Show effective defaults, or set/unset one by key
pub fn config_cmd(action: Option<ConfigAction>, output_mode: OutputMode) -> anyhow::Result<()> {
    match action {
        None => {
            let config = GlobalConfig::load();
            let report = ConfigReport {
                days: config.defaults.days,
                author: config.defaults.author,
                path: config.defaults.path,
                copy: config.defaults.copy,
                config_path: GlobalConfig::config_path().display().to_string(),
            };
            report.render(output_mode);
        },
        Some(ConfigAction::Set { key, value }) => {
            let mut config = GlobalConfig::load();
            config.set(&key, &value)?;
            config.save()?;

            OperationResult {
                success: true,
                message: format!("Set {key} = {value}"),
            }
            .render(output_mode);
        },
        Some(ConfigAction::Unset { key }) => {
            let mut config = GlobalConfig::load();
            config.unset(&key)?;
            config.save()?;

            OperationResult {
                success: true,
                message: format!("Unset {key} (restored built-in default)"),
            }
            .render(output_mode);
        },
    }

    Ok(())
}
