//! Fight Source Port - The four back-end operations behind the fight view
//!
//! Every operation resolves to `None` when the back-end is missing or
//! misbehaves. Implementations must not surface transport errors here; the
//! view treats absence as data, never as a failure.

use superheroes_domain::{FightOutcome, FighterPair, Location};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait FightSourcePort: Send + Sync {
    /// Pick a random hero and villain
    async fn random_fighters(&self) -> Option<FighterPair>;

    /// Pick a random location
    async fn random_location(&self) -> Option<Location>;

    /// Resolve a fight between the given fighters
    async fn start_fight(&self, fighters: FighterPair) -> Option<FightOutcome>;

    /// Describe a fight outcome in prose
    async fn narrate_fight(&self, outcome: FightOutcome) -> Option<String>;
}
