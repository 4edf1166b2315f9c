//! Formatting utilities used for CLI and export outputs.

use crate::core::compass::classify;

/// `123.4° SE`
pub fn format_heading(heading: f64) -> String {
    format!("{:.1}° {}", heading, classify(heading).code())
}
