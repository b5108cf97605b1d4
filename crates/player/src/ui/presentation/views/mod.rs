//! Top-level views

mod fight_view;
mod fight_view_model;

pub use fight_view::{use_fight_controller, FightController, FightView};
pub use fight_view_model::{
    ControlModel, FightViewModel, FighterCardModel, FighterRole, LocationModel, ReadyModel,
    WinnerModel, UNAVAILABLE_MESSAGE,
};
