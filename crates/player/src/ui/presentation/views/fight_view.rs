//! Fight view - pick fighters and a location, fight, narrate
//!
//! The component holds a [`FightState`] in a signal. Button clicks become
//! [`FightIntent`]s; the effects they produce run as background tasks and
//! their results are folded back into the state when they resolve, in
//! whatever order that happens.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::components::{FighterCard, LocationCard};
use crate::presentation::handlers::run_effect;
use crate::presentation::services::use_fight_source;
use crate::presentation::state::{FightIntent, FightState, StateChange};
use crate::presentation::views::{ControlModel, FightViewModel, ReadyModel};

/// Fight state plus the callback that feeds intents into it
#[derive(Clone, Copy)]
pub struct FightController {
    pub state: Signal<FightState>,
    pub issue: Callback<FightIntent>,
}

/// Owns the fight state for one view and runs the effects it requests.
///
/// Issues [`FightIntent::Mount`] after the first render. `on_fight` is
/// called once per successfully resolved fight, right after the new outcome
/// has been stored.
pub fn use_fight_controller(on_fight: Option<EventHandler<()>>) -> FightController {
    let source = use_fight_source();
    let mut state = use_signal(FightState::new);

    let issue = use_callback(move |intent: FightIntent| {
        let effects = state.write().request(intent);
        for effect in effects {
            let source = source.clone();
            spawn_task(async move {
                let event = run_effect(source.as_ref(), effect).await;
                let change = state.write().apply(event);
                if change == StateChange::FightCompleted {
                    if let Some(handler) = on_fight {
                        handler.call(());
                    }
                }
            });
        }
    });

    // The state ignores repeated mounts.
    use_effect(move || issue.call(FightIntent::Mount));

    FightController { state, issue }
}

/// Fight view component
#[component]
pub fn FightView(on_fight: Option<EventHandler<()>>) -> Element {
    let controller = use_fight_controller(on_fight);
    fight_screen(controller)
}

fn fight_screen(controller: FightController) -> Element {
    let model = FightViewModel::from_state(&controller.state.read());

    match model {
        FightViewModel::Loading => rsx! {
            div {
                class: "fight fight--loading",
                "aria-busy": true,
                "Loading fighters…"
            }
        },
        FightViewModel::Unavailable { message } => rsx! {
            div {
                class: "fight fight--unavailable",
                role: "alert",
                "{message}"
            }
        },
        FightViewModel::Ready(ready) => rsx! {
            FightPanel { model: *ready, on_intent: controller.issue }
        },
    }
}

#[component]
fn ControlButton(
    control: ControlModel,
    class: &'static str,
    on_intent: Callback<FightIntent>,
) -> Element {
    rsx! {
        button {
            class,
            disabled: !control.enabled,
            "aria-busy": control.busy,
            onclick: move |_| on_intent.call(control.intent),
            "{control.label}"
        }
    }
}

#[component]
fn FightPanel(model: ReadyModel, on_intent: Callback<FightIntent>) -> Element {
    rsx! {
        div {
            class: "fight",

            div {
                class: "fight__arena",

                if let Some((hero, _)) = model.fighters.clone() {
                    FighterCard { card: hero }
                }

                div {
                    class: "fight__controls",
                    ControlButton { control: model.fight, class: "btn btn--fight", on_intent }
                    ControlButton { control: model.new_fighters, class: "btn", on_intent }
                    ControlButton { control: model.new_location, class: "btn", on_intent }
                }

                if let Some((_, villain)) = model.fighters.clone() {
                    FighterCard { card: villain }
                }
            }

            if let Some(location) = model.location.clone() {
                LocationCard { location }
            }

            if let Some(winner) = model.winner.clone() {
                div {
                    class: "{winner.team_class}",
                    "Winner is "
                    span { class: "winner__name", "{winner.name}" }
                    p { class: "winner__location", "Fought in {winner.location_name}" }
                }
            }

            div {
                class: "fight__narration",
                ControlButton { control: model.narrate, class: "btn btn--narrate", on_intent }
                if let Some(narration) = model.narration.clone() {
                    p { class: "narration", "{narration}" }
                }
            }
        }
    }
}
