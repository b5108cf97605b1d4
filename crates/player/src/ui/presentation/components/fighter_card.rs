//! Fighter card - portrait, name, level and powers of one combatant

use dioxus::prelude::*;

use crate::presentation::views::FighterCardModel;

#[component]
pub fn FighterCard(card: FighterCardModel) -> Element {
    let class = card.role.css_class();
    let role = card.role.label();

    rsx! {
        div {
            class: "{class}",
            img {
                class: "fighter-card__picture",
                src: "{card.picture}",
                alt: "{role}",
            }
            h3 { class: "fighter-card__name", "{card.name}" }
            p {
                class: "fighter-card__level",
                "{role} · level {card.level}"
            }
            p { class: "fighter-card__powers", "{card.powers}" }
        }
    }
}
