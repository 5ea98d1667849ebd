use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod check;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the stored data; logs go to `<data_dir>/logs`,
    /// screenshots to `<data_dir>/images`.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_subject_name")]
    pub subject_name: String,
    #[serde(default = "default_label")]
    pub label: String,
    /// X pixel separating inside (left) from outside (right).
    #[serde(default = "default_boundary_x")]
    pub boundary_x: u32,
    #[serde(default = "default_remote_threshold")]
    pub remote_threshold_minutes: i64,
    #[serde(default = "default_visual_threshold")]
    pub visual_threshold_minutes: i64,
    /// e.g. `scrot -u {path}`
    #[serde(default)]
    pub capture_command: Option<String>,
    #[serde(default)]
    pub notify_command: Option<String>,
}

fn default_data_dir() -> String {
    Config::config_dir()
        .join("data")
        .to_string_lossy()
        .to_string()
}
fn default_subject_name() -> String {
    "Sylvester".to_string()
}
fn default_label() -> String {
    "sylvester_face".to_string()
}
fn default_boundary_x() -> u32 {
    250
}
fn default_remote_threshold() -> i64 {
    30
}
fn default_visual_threshold() -> i64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            subject_name: default_subject_name(),
            label: default_label(),
            boundary_x: default_boundary_x(),
            remote_threshold_minutes: default_remote_threshold(),
            visual_threshold_minutes: default_visual_threshold(),
            capture_command: None,
            notify_command: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("catdoor")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".catdoor")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("catdoor.conf")
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_path().join("logs")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.data_path().join("images")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            log::debug!("no config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// The label ends up as one `-`-separated field of every log line.
    pub fn validate(&self) -> AppResult<()> {
        if self.label.is_empty()
            || self.label.contains('-')
            || self.label.chars().any(char::is_whitespace)
        {
            return Err(AppError::Config(format!(
                "label '{}' must be non-empty and contain no '-' or whitespace",
                self.label
            )));
        }
        if self.remote_threshold_minutes < 0 || self.visual_threshold_minutes < 0 {
            return Err(AppError::Config(
                "thresholds must not be negative".to_string(),
            ));
        }
        if self.data_dir.trim().is_empty() {
            return Err(AppError::Config("data_dir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Initialize configuration file and data directories
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };
        if let Some(dir) = custom_data_dir {
            config.data_dir = dir;
        }
        config.validate()?;

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            log::info!("config written to {}", Self::config_file().display());
        }

        fs::create_dir_all(config.logs_dir())?;
        fs::create_dir_all(config.images_dir())?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = Config::from_yaml("data_dir: /srv/catdoor\nboundary_x: 320\n").unwrap();
        assert_eq!(cfg.data_dir, "/srv/catdoor");
        assert_eq!(cfg.boundary_x, 320);
        assert_eq!(cfg.label, "sylvester_face");
        assert_eq!(cfg.remote_threshold_minutes, 30);
        assert_eq!(cfg.visual_threshold_minutes, 10);
        assert_eq!(cfg.logs_dir(), PathBuf::from("/srv/catdoor/logs"));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn hyphenated_label_is_rejected() {
        let err = Config::from_yaml("label: sylvester-face\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        assert!(Config::from_yaml("visual_threshold_minutes: -1\n").is_err());
    }

    #[test]
    fn yaml_round_trip_keeps_commands() {
        let cfg = Config {
            capture_command: Some("scrot -u {path}".to_string()),
            ..Config::default()
        };
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }
}
