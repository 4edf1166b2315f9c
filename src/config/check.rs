use super::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::is_valid_format;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys a complete configuration file carries.
pub const KNOWN_KEYS: [&str; 10] = [
    "epoch",
    "owners",
    "day_boundary",
    "days_before",
    "days_total",
    "calibration_timeout_ms",
    "manual_step_deg",
    "date_format",
    "show_weekday",
    "log_level",
];

/// Top-level keys absent from the YAML file at `path`.
/// A missing file reports every key.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(KNOWN_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let missing = match yaml.as_mapping() {
        Some(map) => KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect(),
        None => KNOWN_KEYS.to_vec(),
    };

    Ok(missing)
}

/// Semantic problems with loaded values.
pub fn problems(cfg: &Config) -> Vec<String> {
    let mut out = Vec::new();

    if cfg.days_total == 0 {
        out.push("days_total must be greater than 0".to_string());
    }
    if cfg.days_before >= cfg.days_total {
        out.push(format!(
            "days_before ({}) must be lower than days_total ({}), otherwise today is not shown",
            cfg.days_before, cfg.days_total
        ));
    }
    if cfg.owners[0].trim().is_empty() || cfg.owners[1].trim().is_empty() {
        out.push("owner names must not be empty".to_string());
    }
    if cfg.owners[0].trim().eq_ignore_ascii_case(cfg.owners[1].trim()) {
        out.push("the two owners must have different names".to_string());
    }
    if cfg.calibration_timeout_ms == 0 {
        out.push("calibration_timeout_ms must be greater than 0".to_string());
    }
    if !(cfg.manual_step_deg.is_finite() && cfg.manual_step_deg > 0.0) {
        out.push("manual_step_deg must be a positive number".to_string());
    }
    if !is_valid_format(&cfg.date_format) {
        out.push(format!("date_format '{}' is not a valid pattern", cfg.date_format));
    }
    if !matches!(
        cfg.show_weekday.to_lowercase().as_str(),
        "it" | "en" | "none"
    ) {
        out.push(format!(
            "show_weekday '{}' is not one of: it, en, none",
            cfg.show_weekday
        ));
    }

    out
}

/// Add every missing key with its default value, keeping what is there.
/// Returns the keys that were added.
pub fn fill_missing(path: &Path) -> AppResult<Vec<&'static str>> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let mut yaml: Value = if path.exists() {
        serde_yaml::from_str(&fs::read_to_string(path)?)?
    } else {
        Value::Mapping(Default::default())
    };
    if !yaml.is_mapping() {
        yaml = Value::Mapping(Default::default());
    }

    let defaults = serde_yaml::to_value(Config::default())?;

    if let (Some(map), Some(def)) = (yaml.as_mapping_mut(), defaults.as_mapping()) {
        for key in &missing {
            let k = Value::String(key.to_string());
            if let Some(v) = def.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_yaml::to_string(&yaml)?)?;

    success(format!(
        "Configuration updated: added {}",
        missing.join(", ")
    ));

    Ok(missing)
}
