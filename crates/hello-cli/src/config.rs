//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it, only the
//! [`TourScript`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `HELLO_<SECTION>__<KEY>`, e.g.
//!    `HELLO_TOUR__SUBJECT=Rust`. Values stay strings; `HELLO_TOUR__LANGUAGES`
//!    is comma-separated and `HELLO_OUTPUT__NO_COLOR` takes `1`/`true`/`yes`
//! 3. Config files: the `--config` file if given, otherwise the user file
//!    ([`AppConfig::config_path`]) overlaid by `.hello.toml` in the CWD
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use hello_core::domain::{
    DEFAULT_GREETER, DEFAULT_HEADER, DEFAULT_LANGUAGES, DEFAULT_OPENING, DEFAULT_SUBJECT, Greeter,
    Roster, TourScript,
};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use tracing::debug;

use crate::cli::OutputFormat;

/// File name of the per-directory config.
pub const LOCAL_CONFIG_FILE: &str = ".hello.toml";

const ENV_PREFIX: &str = "HELLO";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// What the tour prints.
    pub tour: TourConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourConfig {
    pub opening: String,
    pub subject: String,
    pub greeter: String,
    pub header: String,
    #[serde(deserialize_with = "languages_list")]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(deserialize_with = "flag")]
    pub no_color: bool,
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tour: TourConfig {
                opening: DEFAULT_OPENING.into(),
                subject: DEFAULT_SUBJECT.into(),
                greeter: DEFAULT_GREETER.into(),
                header: DEFAULT_HEADER.into(),
                languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            },
            output: OutputConfig {
                no_color: false,
                format: OutputFormat::Auto,
            },
        }
    }
}

impl TourConfig {
    /// The script this configuration describes.
    pub fn script(&self) -> TourScript {
        TourScript {
            opening: self.opening.clone(),
            subject: self.subject.clone(),
            greeter: Greeter::new(self.greeter.as_str()),
            header: self.header.clone(),
            roster: self.roster(),
        }
    }

    pub fn roster(&self) -> Roster {
        Roster::new(self.languages.iter().map(String::as_str))
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file(s), then environment.
    ///
    /// An explicit `config_file` must exist; the implicit user and local
    /// files are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "loading explicit config file");
                builder = builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                for path in Self::search_paths() {
                    debug!(path = %path.display(), "checking config file");
                    builder = builder.add_source(
                        File::from(path.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Configuration has an invalid shape")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.hello.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "hello", "hello")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Implicit config files, lowest priority first.
    pub fn search_paths() -> Vec<PathBuf> {
        let user = Self::config_path();
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if user == local {
            vec![local]
        } else {
            vec![user, local]
        }
    }
}

/// A list of names, or one comma-separated string as the environment gives it.
///
/// The empty string is the empty list.
fn languages_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Languages {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Languages::deserialize(deserializer)? {
        Languages::List(list) => list,
        Languages::Joined(joined) if joined.is_empty() => Vec::new(),
        Languages::Joined(joined) => joined.split(',').map(str::to_owned).collect(),
    })
}

/// A boolean, or its spelling in an environment variable.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "" | "0" | "false" | "no" | "off" => Ok(false),
            other => Err(D::Error::custom(format!(
                "expected true/false, got '{other}'"
            ))),
        },
    }
}
