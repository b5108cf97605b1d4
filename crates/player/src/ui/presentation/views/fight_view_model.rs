//! Derived display data for the fight view
//!
//! Everything the fight view renders is computed here from `FightState`, so
//! the component itself only lays out strings and wires buttons.

use superheroes_domain::{FightOutcome, Fighter, FighterPair, Location, Team};

use crate::ui::presentation::state::{FightIntent, FightPhase, FightSlot, FightState};

pub const UNAVAILABLE_MESSAGE: &str =
    "This is embarrassing. The fights back-end is not available; make sure the back-end is running and reachable.";

/// Which side of the fight a card shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FighterRole {
    Hero,
    Villain,
}

impl FighterRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Villain => "Villain",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Hero => "fighter-card fighter-card--hero",
            Self::Villain => "fighter-card fighter-card--villain",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FighterCardModel {
    pub role: FighterRole,
    pub name: String,
    pub level: i32,
    pub powers: String,
    pub picture: String,
}

impl FighterCardModel {
    fn from_fighter(role: FighterRole, fighter: &Fighter) -> Self {
        Self {
            role,
            name: fighter.name.clone(),
            level: fighter.level,
            powers: fighter.powers.clone(),
            picture: fighter.picture.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocationModel {
    /// Rendered as "<name>: " ahead of the description
    pub name_label: String,
    pub picture: String,
    pub description: String,
}

impl From<&Location> for LocationModel {
    fn from(location: &Location) -> Self {
        Self {
            name_label: format!("{}: ", location.name),
            picture: location.picture.clone(),
            description: location.description.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WinnerModel {
    pub name: String,
    pub team_class: &'static str,
    pub location_name: String,
}

impl From<&FightOutcome> for WinnerModel {
    fn from(outcome: &FightOutcome) -> Self {
        let team_class = match outcome.winner_side() {
            Team::Heroes => "winner winner--heroes",
            Team::Villains => "winner winner--villains",
            Team::Unknown => "winner",
        };
        Self {
            name: outcome.winner_name.clone(),
            team_class,
            location_name: outcome.location.name.clone(),
        }
    }
}

/// Button state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlModel {
    /// Intent issued when the button is pressed
    pub intent: FightIntent,
    pub label: &'static str,
    pub enabled: bool,
    /// A request for this control's slot is outstanding
    pub busy: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReadyModel {
    pub fighters: Option<(FighterCardModel, FighterCardModel)>,
    pub location: Option<LocationModel>,
    pub new_fighters: ControlModel,
    pub new_location: ControlModel,
    pub fight: ControlModel,
    pub narrate: ControlModel,
    pub winner: Option<WinnerModel>,
    pub narration: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FightViewModel {
    Loading,
    Unavailable { message: &'static str },
    Ready(Box<ReadyModel>),
}

impl FightViewModel {
    pub fn from_state(state: &FightState) -> Self {
        match state.phase() {
            FightPhase::Loading => Self::Loading,
            FightPhase::Unavailable => Self::Unavailable {
                message: UNAVAILABLE_MESSAGE,
            },
            FightPhase::Ready => Self::Ready(Box::new(ReadyModel::from_state(state))),
        }
    }
}

impl ReadyModel {
    fn from_state(state: &FightState) -> Self {
        let in_flight = state.in_flight();
        let control = |intent: FightIntent, label: &'static str, enabled: bool, slot: FightSlot| {
            ControlModel {
                intent,
                label,
                enabled,
                busy: in_flight.is_busy(slot),
            }
        };

        Self {
            fighters: state.fighters().map(fighter_cards),
            location: state.location().map(LocationModel::from),
            new_fighters: control(
                FightIntent::NewFighters,
                "NEW FIGHTERS",
                true,
                FightSlot::Fighters,
            ),
            new_location: control(
                FightIntent::NewLocation,
                "NEW LOCATION",
                true,
                FightSlot::Location,
            ),
            fight: control(FightIntent::Fight, "FIGHT !", state.can_fight(), FightSlot::Fight),
            narrate: control(
                FightIntent::Narrate,
                "Narrate Fight",
                state.can_narrate(),
                FightSlot::Narration,
            ),
            winner: state.outcome().map(WinnerModel::from),
            narration: state.narration().map(str::to_string),
        }
    }
}

fn fighter_cards(pair: &FighterPair) -> (FighterCardModel, FighterCardModel) {
    (
        FighterCardModel::from_fighter(FighterRole::Hero, &pair.hero),
        FighterCardModel::from_fighter(FighterRole::Villain, &pair.villain),
    )
}
