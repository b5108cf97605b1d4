//! Fight Service - Application service for the fights back-end
//!
//! Implements [`FightSourcePort`] on top of the typed HTTP API. Every
//! transport or decoding error is logged and turned into an absent value, so
//! the UI only ever deals with `Option`s.

use superheroes_domain::{FightOutcome, FighterPair, Location};

use crate::ports::outbound::{ApiError, ApiPort, FightSourcePort};

pub const RANDOM_FIGHTERS_PATH: &str = "/api/fights/randomfighters";
pub const RANDOM_LOCATION_PATH: &str = "/api/fights/randomlocation";
pub const FIGHTS_PATH: &str = "/api/fights";
pub const NARRATE_PATH: &str = "/api/fights/narrate";

/// Fight service backed by the fights REST API
#[derive(Clone)]
pub struct FightService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> FightService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl<A: ApiPort> FightSourcePort for FightService<A> {
    async fn random_fighters(&self) -> Option<FighterPair> {
        tracing::debug!("Requesting random fighters");
        absent_on_error(
            "random fighters",
            self.api.get_optional(RANDOM_FIGHTERS_PATH).await,
        )
    }

    async fn random_location(&self) -> Option<Location> {
        tracing::debug!("Requesting random location");
        absent_on_error(
            "random location",
            self.api.get_optional(RANDOM_LOCATION_PATH).await,
        )
    }

    async fn start_fight(&self, fighters: FighterPair) -> Option<FightOutcome> {
        tracing::debug!(
            hero = %fighters.hero.name,
            villain = %fighters.villain.name,
            "Starting fight"
        );
        absent_on_error(
            "fight",
            self.api.post(FIGHTS_PATH, &fighters).await.map(Some),
        )
    }

    async fn narrate_fight(&self, outcome: FightOutcome) -> Option<String> {
        tracing::debug!(fight_id = %outcome.id, "Requesting fight narration");
        absent_on_error(
            "narration",
            self.api.post_for_text(NARRATE_PATH, &outcome).await.map(Some),
        )
    }
}

fn absent_on_error<T>(what: &str, result: Result<Option<T>, ApiError>) -> Option<T> {
    match result {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            tracing::warn!("Back-end returned no {}", what);
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch {}", what);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::infrastructure::testing::fixtures::{
        api_request_failed, fake_fighters, gotham, villain_wins, villain_wins_json, NARRATION,
    };
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;
    use std::sync::Arc;

    fn service(raw: MockRawApiPort) -> FightService<Api> {
        FightService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn random_fighters_reads_the_fighters_endpoint() {
        let mut raw = MockRawApiPort::new();
        let body = serde_json::to_value(fake_fighters()).unwrap();
        raw.expect_get_optional_json()
            .withf(|path| path == RANDOM_FIGHTERS_PATH)
            .times(1)
            .returning(move |_| Ok(Some(body.clone())));

        let fighters = service(raw).random_fighters().await;

        assert_eq!(fighters, Some(fake_fighters()));
    }

    #[tokio::test]
    async fn missing_back_end_yields_no_fighters() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json()
            .returning(|_| Err(api_request_failed("connection refused")));

        assert_eq!(service(raw).random_fighters().await, None);
    }

    #[tokio::test]
    async fn empty_location_response_is_absent() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json()
            .withf(|path| path == RANDOM_LOCATION_PATH)
            .returning(|_| Ok(None));

        assert_eq!(service(raw).random_location().await, None);
    }

    #[tokio::test]
    async fn random_location_decodes_the_document() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_optional_json().returning(|_| {
            Ok(Some(json!({
                "name": "Gotham City",
                "picture": "https://dummyimage.com/240x320/b22222/ffffff&text=Gotham",
                "description": "This is Gotham City"
            })))
        });

        assert_eq!(service(raw).random_location().await, Some(gotham()));
    }

    #[tokio::test]
    async fn start_fight_posts_the_pair() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == FIGHTS_PATH
                    && body["hero"]["name"] == "Fake hero"
                    && body["villain"]["name"] == "Fake villain"
            })
            .times(1)
            .returning(|_, _| Ok(villain_wins_json()));

        let outcome = service(raw).start_fight(fake_fighters()).await;

        assert_eq!(outcome, Some(villain_wins()));
    }

    #[tokio::test]
    async fn server_error_during_fight_is_absent() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().returning(|_, _| {
            Err(ApiError::HttpStatus {
                status: 500,
                message: "boom".to_string(),
            })
        });

        assert_eq!(service(raw).start_fight(fake_fighters()).await, None);
    }

    #[tokio::test]
    async fn narrate_posts_the_outcome_verbatim() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_text()
            .withf(|path, body| {
                path == NARRATE_PATH
                    && body["id"] == 200
                    && body["winnerName"] == "Fake villain"
                    && body["location"]["name"] == "Gotham City"
            })
            .times(1)
            .returning(|_, _| Ok(NARRATION.to_string()));

        let narration = service(raw).narrate_fight(villain_wins()).await;

        assert_eq!(narration.as_deref(), Some(NARRATION));
    }

    #[tokio::test]
    async fn narrate_keeps_fields_the_client_does_not_model() {
        let mut document = villain_wins_json();
        document["winnerTeamColor"] = json!("#b22222");
        let outcome: FightOutcome = serde_json::from_value(document).unwrap();

        let mut raw = MockRawApiPort::new();
        raw.expect_post_text()
            .withf(|_, body| body["winnerTeamColor"] == "#b22222" && body["id"] == 200)
            .times(1)
            .returning(|_, _| Ok(NARRATION.to_string()));

        let narration = service(raw).narrate_fight(outcome).await;

        assert_eq!(narration.as_deref(), Some(NARRATION));
    }
}
