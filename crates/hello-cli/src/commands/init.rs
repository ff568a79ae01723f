//! `hello init` — create a default configuration file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create a default configuration file.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(&args, &global);

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    write_default(&config_path)?;
    info!(path = %config_path.display(), "wrote default config");

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

/// `--config` wins, then `--local`, then the user config location.
fn target_path(args: &InitArgs, global: &GlobalArgs) -> PathBuf {
    if let Some(path) = &global.config {
        path.clone()
    } else if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    }
}

fn write_default(config_path: &Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    // Ensure parent directory exists.
    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(config_path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", config_path.display()),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_path_wins() {
        let global = GlobalArgs {
            config: Some(PathBuf::from("/tmp/x.toml")),
            ..GlobalArgs::default()
        };
        let args = InitArgs {
            local: true,
            force: false,
        };
        assert_eq!(target_path(&args, &global), PathBuf::from("/tmp/x.toml"));
    }

    #[test]
    fn local_flag_targets_cwd_file() {
        let args = InitArgs {
            local: true,
            force: false,
        };
        assert_eq!(
            target_path(&args, &GlobalArgs::default()),
            PathBuf::from(LOCAL_CONFIG_FILE)
        );
    }

    #[test]
    fn written_default_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default(&path).unwrap();
        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.tour, AppConfig::default().tour);
    }
}
