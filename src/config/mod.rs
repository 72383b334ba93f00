use crate::core::recorder::DEFAULT_FILE_NAME;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File name suggested when creating a new record file.
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
    /// Base directory for relative paths typed at the prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_dir: Option<String>,
    /// Command used to open a record file for viewing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opener: Option<String>,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_file_name: default_file_name(),
            records_dir: None,
            opener: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtimerecorder")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimerecorder")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimerecorder.conf")
    }

    /// Config file in use: the `--config` override or the standard location.
    pub fn resolve_file(custom: Option<&str>) -> PathBuf {
        custom
            .map(crate::utils::path::expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = Self::resolve_file(custom);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::ConfigSave(format!("{}: {}", parent.display(), e)))?;
        }

        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path)
            .map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{}_rtimerecorder.conf", name));
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_conf("missing_file_gives_defaults");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let path = temp_conf("missing_fields_fall_back");
        fs::write(&path, "records_dir: /srv/records\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.default_file_name, "NewTimeRecords.csv");
        assert_eq!(cfg.records_dir.as_deref(), Some("/srv/records"));
        assert_eq!(cfg.opener, None);
    }

    #[test]
    fn malformed_file_is_a_load_error() {
        let path = temp_conf("malformed_file");
        fs::write(&path, "default_file_name: [unclosed\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(AppError::ConfigLoad(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let path = temp_conf("save_then_load");
        let cfg = Config {
            default_file_name: "hours.csv".to_string(),
            records_dir: None,
            opener: Some("true".to_string()),
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }
}
