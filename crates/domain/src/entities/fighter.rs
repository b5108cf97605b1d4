//! Fighter entity - A hero or villain picked at random by the back-end

use serde::{Deserialize, Serialize};

/// A single combatant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fighter {
    pub name: String,
    pub level: i32,
    /// Absolute URL of the fighter's portrait
    pub picture: String,
    pub powers: String,
}

/// The hero and villain of the next fight.
///
/// Both sides always arrive in the same response; there is no way to hold
/// one without the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterPair {
    pub hero: Fighter,
    pub villain: Fighter,
}

impl FighterPair {
    pub fn new(hero: Fighter, villain: Fighter) -> Self {
        Self { hero, villain }
    }
}
