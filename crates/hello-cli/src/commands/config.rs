//! `hello config` — read the resolved configuration.

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(&config)?;
            } else {
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.print(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => match &global.config {
            Some(path) => output.print(&path.display().to_string())?,
            None => {
                for path in AppConfig::search_paths() {
                    output.print(&path.display().to_string())?;
                }
            }
        },
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "tour.opening" => Ok(config.tour.opening.clone()),
        "tour.subject" => Ok(config.tour.subject.clone()),
        "tour.greeter" => Ok(config.tour.greeter.clone()),
        "tour.header" => Ok(config.tour.header.clone()),
        "tour.languages" => Ok(config.tour.languages.join(",")),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.to_string()),
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
