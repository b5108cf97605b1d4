//! Fight entity - The resolved result of a hero/villain fight
//!
//! An outcome is never modified on the client. A new fight produces a new
//! outcome which replaces the previous one as a whole.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::location::Location;

/// Identifier assigned by the fights back-end.
///
/// Depending on the storage behind the service this is either a number or an
/// opaque string, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FightId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for FightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Side a fighter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Heroes,
    Villains,
    /// Any team name the client does not know about
    Unknown,
}

impl Team {
    /// Parse a team from the wire value (case-insensitive)
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "heroes" | "hero" => Self::Heroes,
            "villains" | "villain" => Self::Villains,
            _ => Self::Unknown,
        }
    }
}

/// Result of a fight as returned by the back-end.
///
/// The outcome is posted back as-is for narration, so team names are kept as
/// received and fields this client does not model are carried in `extra`.
/// Use [`FightOutcome::winner_side`] for a typed view of the winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightOutcome {
    pub id: FightId,
    pub fight_date: DateTime<Utc>,
    pub winner_name: String,
    pub winner_level: i32,
    pub winner_picture: String,
    pub winner_powers: String,
    pub winner_team: String,
    pub loser_name: String,
    pub loser_level: i32,
    pub loser_picture: String,
    pub loser_powers: String,
    pub loser_team: String,
    pub location: Location,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FightOutcome {
    pub fn winner_side(&self) -> Team {
        Team::parse(&self.winner_team)
    }
}
