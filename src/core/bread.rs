//! Bread availability, read from a single spreadsheet cell.

use log::warn;
use serde::Serialize;

/// Cell values that mean "there is bread".
const AVAILABLE_VALUES: [&str; 7] = ["si", "sì", "yes", "y", "true", "1", "disponibile"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BreadStatus {
    Available,
    Unavailable,
    Errored,
}

impl BreadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreadStatus::Available => "available",
            BreadStatus::Unavailable => "unavailable",
            BreadStatus::Errored => "errored",
        }
    }

    /// Classify a cell value. Empty or missing cells count as no bread.
    pub fn from_cell(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if AVAILABLE_VALUES.contains(&v.as_str()) => BreadStatus::Available,
            _ => BreadStatus::Unavailable,
        }
    }
}

/// Whatever can fetch the cell. `Ok(None)` is an empty cell.
pub trait CellSource {
    fn read_cell(&self) -> Result<Option<String>, String>;
}

/// A cell value already in hand.
#[derive(Debug, Clone)]
pub struct StaticCell(pub Option<String>);

impl CellSource for StaticCell {
    fn read_cell(&self) -> Result<Option<String>, String> {
        Ok(self.0.clone())
    }
}

/// Read and classify; failures degrade to `Errored`.
pub fn check(source: &dyn CellSource) -> BreadStatus {
    match source.read_cell() {
        Ok(value) => BreadStatus::from_cell(value.as_deref()),
        Err(e) => {
            warn!("bread status check failed: {e}");
            BreadStatus::Errored
        }
    }
}
