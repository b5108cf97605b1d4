use dioxus::prelude::*;

pub mod presentation;

use presentation::views::FightView;

const APP_CSS: &str = include_str!("../../assets/css/fight.css");

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Stands in for the fight history, which only needs to know a fight happened.
    let mut fights_completed = use_signal(|| 0u32);

    rsx! {
        style { {APP_CSS} }

        main {
            class: "app",
            header {
                class: "app__header",
                h1 { "Super Heroes" }
                p {
                    class: "app__counter",
                    "Fights this session: {fights_completed}"
                }
            }
            FightView {
                on_fight: move |_| {
                    fights_completed += 1;
                    tracing::debug!("Fight completed ({} this session)", fights_completed);
                },
            }
        }
    }
}
