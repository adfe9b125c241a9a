use serde::{Deserialize, Serialize};
use std::fmt;

/// One stage of the course. The race alternates a running segment with a
/// fixed-station exercise; the running segments are numbered by the order the
/// timing system reports them.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CanonicalStation {
    Run(u8),
    SkiErg,
    SledPush,
    SledPull,
    BurpeeBroadJump,
    Rowing,
    FarmersCarry,
    SandbagCarry,
    WallBalls,
}

/// Substring the timing system uses for every running segment. Raw result rows
/// repeat it verbatim, so occurrences have to be numbered to tell them apart.
pub const RUN_MARKER: &str = "Hlaup";

/// The full course in the order every team runs it. Every normalized station
/// vector has exactly this length and order, no matter how many splits the raw
/// row actually carried.
pub const COURSE: [CanonicalStation; 16] = [
    CanonicalStation::Run(1),
    CanonicalStation::SkiErg,
    CanonicalStation::Run(2),
    CanonicalStation::SledPush,
    CanonicalStation::Run(3),
    CanonicalStation::SledPull,
    CanonicalStation::Run(4),
    CanonicalStation::BurpeeBroadJump,
    CanonicalStation::Run(5),
    CanonicalStation::Rowing,
    CanonicalStation::Run(6),
    CanonicalStation::FarmersCarry,
    CanonicalStation::Run(7),
    CanonicalStation::SandbagCarry,
    CanonicalStation::Run(8),
    CanonicalStation::WallBalls,
];

impl CanonicalStation {
    /// The label the timing system emits for this station, after running
    /// segments have been numbered.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Run(n) => format!("{RUN_MARKER} {n}"),
            Self::SkiErg => "Ski-Erg".to_string(),
            Self::SledPush => "Ýta sleða".to_string(),
            Self::SledPull => "Draga sleða".to_string(),
            Self::BurpeeBroadJump => "Burpee langstökk".to_string(),
            Self::Rowing => "Róður".to_string(),
            Self::FarmersCarry => "Bændaganga".to_string(),
            Self::SandbagCarry => "Dumbell lovers".to_string(),
            Self::WallBalls => "Wall Balls".to_string(),
        }
    }
}

impl fmt::Display for CanonicalStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
