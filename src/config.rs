use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_SOURCE: &str = "http://localhost:3000/api/data";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "data_export.csv";
pub const SOURCE_ENV: &str = "DATA_REVIEW_SOURCE";

pub fn project_dirs() -> anyhow::Result<ProjectDirs> {
    ProjectDirs::from("", "data-review", "data-review")
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    source: Option<String>,
    export_dir: Option<PathBuf>,
    export_file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source: String,
    pub export_dir: PathBuf,
    pub export_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            export_dir: PathBuf::from("."),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings: CLI flag, then environment, then config file, then defaults.
    pub fn load(config_file: Option<&Path>, cli_source: Option<&str>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(p) => Some(p.to_path_buf()),
            None => config_path().ok(),
        };

        let mut settings = match path {
            Some(p) if p.exists() => {
                tracing::debug!("Reading config from {}", p.display());
                Self::from_file(&p)?
            }
            _ => Self::default(),
        };

        if let Ok(env_source) = std::env::var(SOURCE_ENV)
            && !env_source.is_empty()
        {
            settings.source = env_source;
        }
        if let Some(src) = cli_source {
            settings.source = src.to_string();
        }

        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    fn from_toml(text: &str) -> Result<Self, AppError> {
        let file: FileConfig =
            toml::from_str(text).map_err(|e| AppError::Config(e.to_string()))?;
        let defaults = Self::default();

        if let Some(name) = &file.export_file_name
            && (name.is_empty() || name.contains(['/', '\\']))
        {
            return Err(AppError::Config(format!(
                "export_file_name must be a bare file name, got '{name}'"
            )));
        }

        Ok(Self {
            source: file.source.unwrap_or(defaults.source),
            export_dir: file.export_dir.unwrap_or(defaults.export_dir),
            export_file_name: file.export_file_name.unwrap_or(defaults.export_file_name),
        })
    }
}
