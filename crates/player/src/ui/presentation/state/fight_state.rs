//! Fight view state machine
//!
//! `FightState` owns everything the fight view displays: the current fighter
//! pair, location, outcome and narration, plus the initial-load bookkeeping
//! that decides between the normal view and the "back-end unavailable"
//! notice.
//!
//! The state is driven in two halves, reducer style:
//! - [`FightState::request`] turns a user intent into the effects to run and
//!   refuses intents the current state cannot honour;
//! - [`FightState::apply`] folds the result of a finished effect back in.
//!
//! Neither half performs I/O, so the whole lifecycle is testable without a
//! Dioxus runtime.

use superheroes_domain::{FightOutcome, FighterPair, Location};

use crate::ui::presentation::handlers::FightEffect;

/// Display phase of the fight view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FightPhase {
    /// Initial fighters/location requests have not both settled yet
    #[default]
    Loading,
    /// An initial request came back empty. Terminal.
    Unavailable,
    /// Fighters and location are loaded
    Ready,
}

/// Something the user asked the view to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FightIntent {
    /// The view was mounted
    Mount,
    NewFighters,
    NewLocation,
    Fight,
    Narrate,
}

/// Result of a finished effect
#[derive(Clone, Debug, PartialEq)]
pub enum FightEvent {
    FightersLoaded(Option<FighterPair>),
    LocationLoaded(Option<Location>),
    FightResolved(Option<FightOutcome>),
    NarrationLoaded {
        /// Outcome the narration was requested for
        outcome: FightOutcome,
        narration: Option<String>,
    },
}

/// What applying an event did to the state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateChange {
    Unchanged,
    Changed,
    /// A new outcome was committed; the parent must be notified
    FightCompleted,
}

/// Independent request slots. Each slot is last-resolved-wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FightSlot {
    Fighters,
    Location,
    Fight,
    Narration,
}

/// Number of outstanding requests per slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    pub fighters: u32,
    pub location: u32,
    pub fight: u32,
    pub narration: u32,
}

impl InFlight {
    fn counter(&mut self, slot: FightSlot) -> &mut u32 {
        match slot {
            FightSlot::Fighters => &mut self.fighters,
            FightSlot::Location => &mut self.location,
            FightSlot::Fight => &mut self.fight,
            FightSlot::Narration => &mut self.narration,
        }
    }

    pub fn is_busy(&self, slot: FightSlot) -> bool {
        let count = match slot {
            FightSlot::Fighters => self.fighters,
            FightSlot::Location => self.location,
            FightSlot::Fight => self.fight,
            FightSlot::Narration => self.narration,
        };
        count > 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct InitialLoad {
    started: bool,
    fighters_settled: bool,
    location_settled: bool,
}

impl InitialLoad {
    fn settled(&self) -> bool {
        self.fighters_settled && self.location_settled
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FightState {
    phase: FightPhase,
    initial: InitialLoad,
    fighters: Option<FighterPair>,
    location: Option<Location>,
    outcome: Option<FightOutcome>,
    narration: Option<String>,
    in_flight: InFlight,
}

impl FightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FightPhase {
        self.phase
    }

    pub fn fighters(&self) -> Option<&FighterPair> {
        self.fighters.as_ref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn outcome(&self) -> Option<&FightOutcome> {
        self.outcome.as_ref()
    }

    pub fn narration(&self) -> Option<&str> {
        self.narration.as_deref()
    }

    pub fn in_flight(&self) -> InFlight {
        self.in_flight
    }

    /// FIGHT is only offered once a fighter pair is loaded
    pub fn can_fight(&self) -> bool {
        self.phase == FightPhase::Ready && self.fighters.is_some()
    }

    /// Narration is only offered once an outcome exists
    pub fn can_narrate(&self) -> bool {
        self.phase == FightPhase::Ready && self.outcome.is_some()
    }

    /// Translate an intent into the effects to run.
    ///
    /// Returns no effects when the intent is not allowed in the current
    /// state. Every returned effect is counted as in flight until its event
    /// is applied.
    pub fn request(&mut self, intent: FightIntent) -> Vec<FightEffect> {
        let effects = match intent {
            FightIntent::Mount if !self.initial.started => {
                self.initial.started = true;
                vec![FightEffect::LoadFighters, FightEffect::LoadLocation]
            }
            FightIntent::Mount => Vec::new(),
            FightIntent::NewFighters if self.phase == FightPhase::Ready => {
                vec![FightEffect::LoadFighters]
            }
            FightIntent::NewLocation if self.phase == FightPhase::Ready => {
                vec![FightEffect::LoadLocation]
            }
            FightIntent::Fight if self.can_fight() => self
                .fighters
                .clone()
                .map(FightEffect::StartFight)
                .into_iter()
                .collect(),
            FightIntent::Narrate if self.can_narrate() => self
                .outcome
                .clone()
                .map(FightEffect::Narrate)
                .into_iter()
                .collect(),
            FightIntent::NewFighters
            | FightIntent::NewLocation
            | FightIntent::Fight
            | FightIntent::Narrate => {
                tracing::debug!(?intent, phase = ?self.phase, "Ignoring fight intent");
                Vec::new()
            }
        };

        for effect in &effects {
            *self.in_flight.counter(effect.slot()) += 1;
        }
        effects
    }

    /// Fold a finished effect back into the state.
    pub fn apply(&mut self, event: FightEvent) -> StateChange {
        let slot = event.slot();
        let counter = self.in_flight.counter(slot);
        let was_busy = *counter > 0;
        *counter = counter.saturating_sub(1);

        let change = match self.phase {
            FightPhase::Loading => self.apply_initial(event),
            FightPhase::Ready => self.apply_ready(event),
            // Nothing is offered in this phase; late results are dropped.
            FightPhase::Unavailable => StateChange::Unchanged,
        };

        if change == StateChange::Unchanged && was_busy {
            StateChange::Changed
        } else {
            change
        }
    }

    fn apply_initial(&mut self, event: FightEvent) -> StateChange {
        match event {
            FightEvent::FightersLoaded(fighters) => {
                self.initial.fighters_settled = true;
                self.fighters = fighters;
            }
            FightEvent::LocationLoaded(location) => {
                self.initial.location_settled = true;
                self.location = location;
            }
            FightEvent::FightResolved(_) | FightEvent::NarrationLoaded { .. } => {
                return StateChange::Unchanged;
            }
        }

        if self.initial.settled() {
            self.phase = if self.fighters.is_some() && self.location.is_some() {
                FightPhase::Ready
            } else {
                tracing::warn!(
                    fighters = self.fighters.is_some(),
                    location = self.location.is_some(),
                    "Fights back-end unavailable"
                );
                FightPhase::Unavailable
            };
        }
        StateChange::Changed
    }

    fn apply_ready(&mut self, event: FightEvent) -> StateChange {
        match event {
            FightEvent::FightersLoaded(Some(fighters)) => {
                self.fighters = Some(fighters);
                StateChange::Changed
            }
            FightEvent::LocationLoaded(Some(location)) => {
                self.location = Some(location);
                StateChange::Changed
            }
            FightEvent::FightResolved(Some(outcome)) => {
                tracing::info!(
                    winner = %outcome.winner_name,
                    loser = %outcome.loser_name,
                    "Fight resolved"
                );
                self.outcome = Some(outcome);
                self.narration = None;
                StateChange::FightCompleted
            }
            FightEvent::NarrationLoaded {
                outcome,
                narration: Some(narration),
            } => {
                // A narration must never be shown next to a different outcome.
                if self.outcome.as_ref() == Some(&outcome) {
                    self.narration = Some(narration);
                    StateChange::Changed
                } else {
                    tracing::debug!(fight_id = %outcome.id, "Dropping narration for a replaced fight");
                    StateChange::Unchanged
                }
            }
            FightEvent::FightersLoaded(None)
            | FightEvent::LocationLoaded(None)
            | FightEvent::FightResolved(None)
            | FightEvent::NarrationLoaded {
                narration: None, ..
            } => StateChange::Unchanged,
        }
    }
}

impl FightEvent {
    pub fn slot(&self) -> FightSlot {
        match self {
            Self::FightersLoaded(_) => FightSlot::Fighters,
            Self::LocationLoaded(_) => FightSlot::Location,
            Self::FightResolved(_) => FightSlot::Fight,
            Self::NarrationLoaded { .. } => FightSlot::Narration,
        }
    }
}
