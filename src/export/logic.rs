// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{CalendarExport, ExportFormat};
use crate::models::calendar_entry::CalendarEntry;
use crate::utils::path::expand_tilde;
use log::debug;

pub struct ExportLogic;

impl ExportLogic {
    pub fn rows(cfg: &Config, entries: &[CalendarEntry]) -> Vec<CalendarExport> {
        let rotation = cfg.rotation();
        entries
            .iter()
            .map(|e| CalendarExport::from_entry(e, &rotation, &cfg.show_weekday))
            .collect()
    }

    pub fn export(
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        entries: &[CalendarEntry],
        force: bool,
    ) -> AppResult<()> {
        if file.trim().is_empty() {
            return Err(AppError::Export("output file path is empty".to_string()));
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let rows = Self::rows(cfg, entries);
        debug!(
            "exporting {} calendar rows as {} to {}",
            rows.len(),
            format.as_str(),
            path.display()
        );

        match format {
            ExportFormat::Csv => export_csv(&rows, &path),
            ExportFormat::Json => export_json(&rows, &path),
        }
    }
}
