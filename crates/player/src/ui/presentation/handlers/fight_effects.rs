//! Fight effects - Back-end calls requested by the fight state machine
//!
//! Each effect maps to exactly one `FightSourcePort` call and produces the
//! `FightEvent` that carries its result back into `FightState`.

use superheroes_domain::{FightOutcome, FighterPair};

use crate::ports::outbound::FightSourcePort;
use crate::ui::presentation::state::{FightEvent, FightSlot};

#[derive(Clone, Debug, PartialEq)]
pub enum FightEffect {
    LoadFighters,
    LoadLocation,
    StartFight(FighterPair),
    Narrate(FightOutcome),
}

impl FightEffect {
    pub fn slot(&self) -> FightSlot {
        match self {
            Self::LoadFighters => FightSlot::Fighters,
            Self::LoadLocation => FightSlot::Location,
            Self::StartFight(_) => FightSlot::Fight,
            Self::Narrate(_) => FightSlot::Narration,
        }
    }
}

/// Run one effect against the back-end
pub async fn run_effect(source: &dyn FightSourcePort, effect: FightEffect) -> FightEvent {
    match effect {
        FightEffect::LoadFighters => FightEvent::FightersLoaded(source.random_fighters().await),
        FightEffect::LoadLocation => FightEvent::LocationLoaded(source.random_location().await),
        FightEffect::StartFight(fighters) => {
            FightEvent::FightResolved(source.start_fight(fighters).await)
        }
        FightEffect::Narrate(outcome) => {
            let narration = source.narrate_fight(outcome.clone()).await;
            FightEvent::NarrationLoaded { outcome, narration }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::{
        fake_fighters, gotham, hero_wins, metropolis, villain_wins, NARRATION,
    };
    use crate::ports::outbound::MockFightSourcePort;
    use crate::ui::presentation::state::{FightIntent, FightPhase, FightState, StateChange};
    use mockall::predicate::eq;
    use mockall::Sequence;

    /// Drives a state the way the view does, counting parent notifications.
    struct Harness {
        source: MockFightSourcePort,
        state: FightState,
        fights_reported: usize,
    }

    impl Harness {
        fn new(source: MockFightSourcePort) -> Self {
            Self {
                source,
                state: FightState::new(),
                fights_reported: 0,
            }
        }

        async fn issue(&mut self, intent: FightIntent) {
            for effect in self.state.request(intent) {
                let event = run_effect(&self.source, effect).await;
                if self.state.apply(event) == StateChange::FightCompleted {
                    self.fights_reported += 1;
                }
            }
        }
    }

    fn available_back_end() -> MockFightSourcePort {
        let mut source = MockFightSourcePort::new();
        source
            .expect_random_fighters()
            .returning(|| Some(fake_fighters()));
        source.expect_random_location().returning(|| Some(gotham()));
        source
    }

    #[tokio::test]
    async fn missing_back_end_never_reaches_a_fight() {
        let mut source = MockFightSourcePort::new();
        source.expect_random_fighters().times(1).returning(|| None);
        source.expect_random_location().times(1).returning(|| None);
        source.expect_start_fight().never();

        let mut harness = Harness::new(source);
        harness.issue(FightIntent::Mount).await;
        harness.issue(FightIntent::Fight).await;

        assert_eq!(harness.state.phase(), FightPhase::Unavailable);
        assert_eq!(harness.fights_reported, 0);
    }

    #[tokio::test]
    async fn fight_sends_the_loaded_pair_and_reports_once() {
        let mut source = available_back_end();
        source
            .expect_start_fight()
            .with(eq(fake_fighters()))
            .times(1)
            .returning(|_| Some(villain_wins()));

        let mut harness = Harness::new(source);
        harness.issue(FightIntent::Mount).await;
        harness.issue(FightIntent::Fight).await;

        assert_eq!(harness.state.outcome(), Some(&villain_wins()));
        assert_eq!(harness.fights_reported, 1);
    }

    #[tokio::test]
    async fn narration_follows_the_latest_outcome() {
        let mut source = available_back_end();
        let mut fights = Sequence::new();
        source
            .expect_start_fight()
            .times(1)
            .in_sequence(&mut fights)
            .returning(|_| Some(villain_wins()));
        source
            .expect_start_fight()
            .times(1)
            .in_sequence(&mut fights)
            .returning(|_| Some(hero_wins()));
        source
            .expect_narrate_fight()
            .with(eq(villain_wins()))
            .times(1)
            .returning(|_| Some(NARRATION.to_string()));
        source
            .expect_narrate_fight()
            .with(eq(hero_wins()))
            .times(1)
            .returning(|_| Some("The hero got lucky.".to_string()));

        let mut harness = Harness::new(source);
        harness.issue(FightIntent::Mount).await;
        harness.issue(FightIntent::Fight).await;
        harness.issue(FightIntent::Narrate).await;
        assert_eq!(harness.state.narration(), Some(NARRATION));

        harness.issue(FightIntent::Fight).await;
        assert!(harness.state.narration().is_none());

        harness.issue(FightIntent::Narrate).await;
        assert_eq!(harness.state.narration(), Some("The hero got lucky."));
        assert_eq!(harness.fights_reported, 2);
    }

    #[tokio::test]
    async fn new_location_replaces_only_the_location() {
        let mut source = MockFightSourcePort::new();
        let mut locations = Sequence::new();
        source
            .expect_random_fighters()
            .returning(|| Some(fake_fighters()));
        source
            .expect_random_location()
            .times(1)
            .in_sequence(&mut locations)
            .returning(|| Some(gotham()));
        source
            .expect_random_location()
            .times(1)
            .in_sequence(&mut locations)
            .returning(|| Some(metropolis()));
        source
            .expect_start_fight()
            .returning(|_| Some(villain_wins()));

        let mut harness = Harness::new(source);
        harness.issue(FightIntent::Mount).await;
        harness.issue(FightIntent::Fight).await;
        harness.issue(FightIntent::NewLocation).await;

        assert_eq!(harness.state.location(), Some(&metropolis()));
        assert_eq!(harness.state.outcome(), Some(&villain_wins()));
    }

    #[tokio::test]
    async fn initial_requests_run_concurrently() {
        let source = available_back_end();
        let mut state = FightState::new();

        let effects = state.request(FightIntent::Mount);
        let (first, second) = tokio::join!(
            run_effect(&source, effects[0].clone()),
            run_effect(&source, effects[1].clone())
        );

        // Apply in reverse to mimic the location answering first.
        state.apply(second);
        assert_eq!(state.phase(), FightPhase::Loading);
        state.apply(first);

        assert_eq!(state.phase(), FightPhase::Ready);
    }
}
