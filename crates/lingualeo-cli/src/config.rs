//! Configuration management for the CLI
//!
//! Settings come from three places, lowest precedence first:
//! - `lingualeo.conf` / `lingualeo.yml` in the home directory
//! - the same files in the current directory
//! - the file passed with `-c`
//!
//! Later files override earlier ones field by field. Command-line strings
//! win over file values when non-empty; boolean flags are OR-ed together.
//! Files ending in `.yml`/`.yaml` are YAML, everything else is a plain
//! `key = value` INI file.

use crate::cli::Cli;
use crate::error::{Error, Result};
use lingualeo_core::http::{ClientConfig, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names looked up in the home and current directories
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["lingualeo.conf", "lingualeo.yml"];

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Values a single config file may carry; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub email: Option<String>,
    pub password: Option<String>,
    pub player: Option<String>,
    pub add: Option<bool>,
    pub force: Option<bool>,
    pub sound: Option<bool>,
    pub api_url: Option<String>,
    pub timeout: Option<u64>,
}

impl FileSettings {
    /// Read one config file, picking the format by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        if is_yaml(path) {
            let content = std::fs::read_to_string(path)?;
            if content.trim().is_empty() {
                return Ok(Self::default());
            }
            Ok(serde_yaml::from_str(&content)?)
        } else {
            let source = config::Config::builder()
                .add_source(config::File::from(path).format(config::FileFormat::Ini))
                .build()
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
            source
                .try_deserialize()
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
        }
    }

    /// Apply `other` on top of `self`; set fields in `other` win
    pub fn overlay(&mut self, other: FileSettings) {
        overlay_string(&mut self.email, other.email);
        overlay_string(&mut self.password, other.password);
        overlay_string(&mut self.player, other.player);
        overlay_string(&mut self.api_url, other.api_url);
        if other.add.is_some() {
            self.add = other.add;
        }
        if other.force.is_some() {
            self.force = other.force;
        }
        if other.sound.is_some() {
            self.sound = other.sound;
        }
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
    }

    /// Read and layer every file in order
    pub fn load_all(paths: &[PathBuf]) -> Result<Self> {
        let mut merged = Self::default();
        for path in paths {
            tracing::debug!(path = %path.display(), "Reading config file");
            merged.overlay(Self::from_file(path)?);
        }
        Ok(merged)
    }
}

fn overlay_string(target: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *target = Some(value);
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub player: Option<String>,
    pub add: bool,
    pub force: bool,
    pub sound: bool,
    pub api_url: String,
    pub timeout_secs: u64,
    pub words: Vec<String>,
    pub translations: Vec<String>,
    pub config_files: Vec<PathBuf>,
}

impl Settings {
    /// Discover, read and merge config files, then apply the command line
    pub fn load(cli: &Cli) -> Result<Self> {
        if let Some(path) = &cli.config {
            check_config_file(path)?;
        }

        let cwd = std::env::current_dir()?;
        let home = dirs::home_dir();
        let files = discover_config_files(home.as_deref(), &cwd, cli.config.as_deref());
        let file_settings = FileSettings::load_all(&files)?;

        let settings = Self::merge(cli, file_settings, files);
        settings.validate()?;
        Ok(settings)
    }

    /// Field-by-field merge of command line over file settings
    pub fn merge(cli: &Cli, file: FileSettings, config_files: Vec<PathBuf>) -> Self {
        Self {
            email: prefer_cli(cli.email.as_deref(), file.email).unwrap_or_default(),
            password: prefer_cli(cli.password.as_deref(), file.password).unwrap_or_default(),
            player: prefer_cli(cli.player.as_deref(), file.player),
            add: cli.add || file.add.unwrap_or(false),
            force: cli.force || file.force.unwrap_or(false),
            sound: cli.sound || file.sound.unwrap_or(false),
            api_url: file.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout_secs: file.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
            words: cli.clean_words(),
            translations: cli
                .translations
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            config_files,
        }
    }

    /// Check that everything needed for a run is present
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(Error::invalid_args("No email argument has been supplied"));
        }
        if self.password.is_empty() {
            return Err(Error::invalid_args("No password argument has been supplied"));
        }
        if self.words.is_empty() {
            return Err(Error::invalid_args("No words to translate have been supplied"));
        }
        if self.sound && self.player.as_deref().map_or(true, |p| p.trim().is_empty()) {
            return Err(Error::invalid_args(
                "Sound requested but no player has been supplied",
            ));
        }
        Ok(())
    }

    /// HTTP client configuration derived from these settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn prefer_cli(cli: Option<&str>, file: Option<String>) -> Option<String> {
    match cli.filter(|v| !v.is_empty()) {
        Some(value) => Some(value.to_string()),
        None => file.filter(|v| !v.is_empty()),
    }
}

/// The explicit config file must exist and be a regular file
pub fn check_config_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if path.is_dir() {
        return Err(Error::config(format!(
            "Config path is a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// List existing config files in precedence order, without duplicates
pub fn discover_config_files(
    home: Option<&Path>,
    cwd: &Path,
    explicit: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    for name in DEFAULT_CONFIG_FILES {
        if let Some(home) = home {
            candidates.push(home.join(name));
        }
        candidates.push(cwd.join(name));
    }

    let mut files: Vec<PathBuf> = candidates.into_iter().filter(|p| p.is_file()).collect();
    if let Some(path) = explicit {
        files.push(absolute(cwd, path));
    }

    let mut unique = Vec::with_capacity(files.len());
    for file in files {
        if !unique.contains(&file) {
            unique.push(file);
        }
    }
    unique
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
