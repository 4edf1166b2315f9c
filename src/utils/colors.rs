//! ANSI color helper utilities for terminal output.

use crate::models::owner::Owner;
use ansi_term::Colour;

/// First owner in purple, second in green.
pub fn owner_colour(owner: Owner) -> Colour {
    match owner {
        Owner::First => Colour::Purple,
        Owner::Second => Colour::Green,
    }
}

pub fn paint_owner(owner: Owner, name: &str) -> String {
    owner_colour(owner).bold().paint(name).to_string()
}

/// Highlight for the current day row.
pub fn paint_today(s: &str) -> String {
    Colour::Blue.paint(s).to_string()
}

pub fn paint_dim(s: &str) -> String {
    Colour::Fixed(8).paint(s).to_string()
}
