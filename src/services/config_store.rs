// Configuration Storage Service
// Handles config file read/write and version backup

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_DIR_ENV: &str = "SCHOLARAI_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.json";
const BACKUPS_KEPT: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("config I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub disclosure: DisclosureConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            analysis: AnalysisConfig::default(),
            disclosure: DisclosureConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Uploads above this size are rejected before extraction.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: default_max_file_bytes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureConfig {
    #[serde(default = "default_purpose")]
    pub default_purpose: String,
    #[serde(default)]
    pub default_tools: Vec<String>,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            default_purpose: default_purpose(),
            default_tools: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_logging: bool,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_logging: false,
            log_dir: None,
        }
    }
}

fn default_version() -> String { env!("CARGO_PKG_VERSION").to_string() }
fn default_max_file_bytes() -> u64 { 20 * 1024 * 1024 }
fn default_purpose() -> String { "language editing and proofreading".to_string() }
fn default_true() -> bool { true }
fn default_log_level() -> String { "warn".to_string() }

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join(CONFIG_FILE_NAME);
        Self { config_dir, config_file }
    }

    /// `SCHOLARAI_CONFIG_DIR`, else the platform config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        match std::env::var(CONFIG_DIR_ENV) {
            Ok(p) if !p.trim().is_empty() => Some(PathBuf::from(p)),
            _ => dirs::config_dir().map(|p| p.join("scholarAI")),
        }
    }

    pub fn open_default() -> Result<Self, ConfigError> {
        Self::default_config_dir()
            .map(Self::new)
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })
    }

    /// Load configuration from file, falling back to defaults when absent
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.config_file.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file).map_err(|source| ConfigError::Io {
            path: self.config_file.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.config_file.clone(),
            source,
        })
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.ensure_dir()?;

        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)?;

        fs::write(&self.config_file, content).map_err(|source| ConfigError::Io {
            path: self.config_file.clone(),
            source,
        })
    }

    /// Create a backup of current config
    fn create_backup(&self) -> Result<(), ConfigError> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir).map_err(|source| ConfigError::Io {
            path: backup_dir.clone(),
            source,
        })?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%.3f");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));

        fs::copy(&self.config_file, &backup_file).map_err(|source| ConfigError::Io {
            path: backup_file.clone(),
            source,
        })?;

        self.cleanup_old_backups(&backup_dir, BACKUPS_KEPT)
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &Path, keep: usize) -> Result<(), ConfigError> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)
            .map_err(|source| ConfigError::Io {
                path: backup_dir.to_path_buf(),
                source,
            })?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // Timestamped names sort oldest first
        entries.sort_by_key(|e| e.file_name());

        for entry in entries.iter().take(entries.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }

        Ok(())
    }
}
