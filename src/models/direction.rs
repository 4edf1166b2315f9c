use serde::Serialize;

/// Sixteen-point compass rose, Italian abbreviations (O = ovest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSO,
    SO,
    OSO,
    O,
    ONO,
    NO,
    NNO,
}

impl Direction {
    pub fn code(&self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NNE => "NNE",
            Direction::NE => "NE",
            Direction::ENE => "ENE",
            Direction::E => "E",
            Direction::ESE => "ESE",
            Direction::SE => "SE",
            Direction::SSE => "SSE",
            Direction::S => "S",
            Direction::SSO => "SSO",
            Direction::SO => "SO",
            Direction::OSO => "OSO",
            Direction::O => "O",
            Direction::ONO => "ONO",
            Direction::NO => "NO",
            Direction::NNO => "NNO",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        SECTORS
            .iter()
            .map(|s| s.direction)
            .find(|d| d.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Half-open `[min, max)` slice of the compass rose.
#[derive(Debug, Clone, Copy)]
pub struct Sector {
    pub direction: Direction,
    pub min: f64,
    pub max: f64,
}

impl Sector {
    pub fn contains(&self, heading: f64) -> bool {
        heading >= self.min && heading < self.max
    }
}

const fn sector(direction: Direction, min: f64, max: f64) -> Sector {
    Sector {
        direction,
        min,
        max,
    }
}

/// North is split across both ends of the range.
pub const SECTORS: [Sector; 17] = [
    sector(Direction::N, 0.0, 11.25),
    sector(Direction::NNE, 11.25, 33.75),
    sector(Direction::NE, 33.75, 56.25),
    sector(Direction::ENE, 56.25, 78.75),
    sector(Direction::E, 78.75, 101.25),
    sector(Direction::ESE, 101.25, 123.75),
    sector(Direction::SE, 123.75, 146.25),
    sector(Direction::SSE, 146.25, 168.75),
    sector(Direction::S, 168.75, 191.25),
    sector(Direction::SSO, 191.25, 213.75),
    sector(Direction::SO, 213.75, 236.25),
    sector(Direction::OSO, 236.25, 258.75),
    sector(Direction::O, 258.75, 281.25),
    sector(Direction::ONO, 281.25, 303.75),
    sector(Direction::NO, 303.75, 326.25),
    sector(Direction::NNO, 326.25, 348.75),
    sector(Direction::N, 348.75, 360.0),
];
