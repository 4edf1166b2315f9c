use crate::core::compass::CompassSettings;
use crate::core::compass::session::DEFAULT_MANUAL_STEP;
use crate::core::rotation::{DEFAULT_DAYS_BEFORE, DEFAULT_DAYS_TOTAL, DayBoundary, Rotation};
use crate::errors::{AppError, AppResult};
use crate::models::owner::Roster;
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod check; // use submodule at src/config/check.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_epoch")]
    pub epoch: NaiveDate,
    #[serde(default = "default_owners")]
    pub owners: [String; 2],
    #[serde(default)]
    pub day_boundary: DayBoundary,
    #[serde(default = "default_days_before")]
    pub days_before: u32,
    #[serde(default = "default_days_total")]
    pub days_total: u32,
    #[serde(default = "default_calibration_timeout_ms")]
    pub calibration_timeout_ms: u64,
    #[serde(default = "default_manual_step_deg")]
    pub manual_step_deg: f64,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 17).unwrap_or_default()
}
fn default_owners() -> [String; 2] {
    Roster::default().names().clone()
}
fn default_days_before() -> u32 {
    DEFAULT_DAYS_BEFORE
}
fn default_days_total() -> u32 {
    DEFAULT_DAYS_TOTAL
}
fn default_calibration_timeout_ms() -> u64 {
    4000
}
fn default_manual_step_deg() -> f64 {
    DEFAULT_MANUAL_STEP
}
fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}
fn default_show_weekday() -> String {
    "it".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            owners: default_owners(),
            day_boundary: DayBoundary::default(),
            days_before: default_days_before(),
            days_total: default_days_total(),
            calibration_timeout_ms: default_calibration_timeout_ms(),
            manual_step_deg: default_manual_step_deg(),
            date_format: default_date_format(),
            show_weekday: default_show_weekday(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtorcia")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtorcia")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtorcia.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write a default configuration file at `path`, creating parent dirs.
    /// In test mode nothing is written.
    pub fn init_at(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = Config::default();

        if is_test {
            return Ok(config);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(config)
    }

    pub fn roster(&self) -> Roster {
        Roster::new(self.owners[0].clone(), self.owners[1].clone())
    }

    pub fn rotation(&self) -> Rotation {
        Rotation::new(self.epoch, self.roster(), self.day_boundary)
    }

    /// Compass settings; a step that is not a positive finite number falls
    /// back to the default (`config --check` reports it).
    pub fn compass_settings(&self) -> CompassSettings {
        let manual_step = if self.manual_step_deg.is_finite() && self.manual_step_deg > 0.0 {
            self.manual_step_deg
        } else {
            warn!(
                "manual_step_deg {} is not usable, using {}",
                self.manual_step_deg, DEFAULT_MANUAL_STEP
            );
            DEFAULT_MANUAL_STEP
        };

        CompassSettings {
            calibration_timeout: Duration::from_millis(self.calibration_timeout_ms),
            manual_step,
        }
    }
}
