//! Location card - where the next fight takes place

use dioxus::prelude::*;

use crate::presentation::views::LocationModel;

#[component]
pub fn LocationCard(location: LocationModel) -> Element {
    rsx! {
        div {
            class: "location",
            img {
                class: "location__picture",
                src: "{location.picture}",
                alt: "Location",
            }
            p {
                class: "location__text",
                span {
                    class: "location__name",
                    "data-testid": "location-name",
                    "{location.name_label}"
                }
                span { class: "location__description", "{location.description}" }
            }
        }
    }
}
