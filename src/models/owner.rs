use serde::{Deserialize, Serialize};

/// Position of an owner inside the two-party rotation.
///
/// The order matters: day 0 of the rotation belongs to `First`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    First,
    Second,
}

impl Owner {
    /// Owner for a given day offset from the epoch.
    ///
    /// Truncating remainder: `-3 % 2 == -1`, so any odd offset (either sign)
    /// lands on `Second` and any even one on `First`.
    pub fn from_day_offset(days: i64) -> Self {
        if days % 2 == 0 {
            Owner::First
        } else {
            Owner::Second
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Owner::First => 0,
            Owner::Second => 1,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Owner::First => Owner::Second,
            Owner::Second => Owner::First,
        }
    }
}

/// Display names of the two owners, in rotation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: [String; 2],
}

impl Roster {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            names: [first.into(), second.into()],
        }
    }

    pub fn name(&self, owner: Owner) -> &str {
        &self.names[owner.index()]
    }

    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// Reverse lookup, case-insensitive.
    pub fn find(&self, name: &str) -> Option<Owner> {
        [Owner::First, Owner::Second]
            .into_iter()
            .find(|o| self.name(*o).eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new("Bosca", "Mraco")
    }
}
