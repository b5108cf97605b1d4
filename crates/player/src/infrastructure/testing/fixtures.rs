//! Simple test fixtures used across unit tests.

use serde_json::{json, Value};
use superheroes_domain::{FightOutcome, Fighter, FighterPair, Location};

use crate::ports::outbound::ApiError;

pub const NARRATION: &str =
    "Ooh, it was a close fight but in the end the villain prevailed by sitting on the hero.";

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn fake_fighters() -> FighterPair {
    FighterPair::new(
        Fighter {
            name: "Fake hero".to_string(),
            level: 1,
            picture: "https://dummyimage.com/240x320/1e8fff/ffffff&text=Fake+Hero".to_string(),
            powers: "Fake hero powers".to_string(),
        },
        Fighter {
            name: "Fake villain".to_string(),
            level: 42,
            picture: "https://dummyimage.com/240x320/b22222/ffffff&text=Fake+Villain".to_string(),
            powers: "Fake villain powers".to_string(),
        },
    )
}

pub fn other_fighters() -> FighterPair {
    FighterPair::new(
        Fighter {
            name: "Other hero".to_string(),
            level: 7,
            picture: "https://dummyimage.com/240x320/1e8fff/ffffff&text=Other+Hero".to_string(),
            powers: "Flight".to_string(),
        },
        Fighter {
            name: "Other villain".to_string(),
            level: 9,
            picture: "https://dummyimage.com/240x320/b22222/ffffff&text=Other+Villain"
                .to_string(),
            powers: "Mind control".to_string(),
        },
    )
}

pub fn gotham() -> Location {
    Location::new(
        "Gotham City",
        "https://dummyimage.com/240x320/b22222/ffffff&text=Gotham",
        "This is Gotham City",
    )
}

pub fn metropolis() -> Location {
    Location::new(
        "Metropolis",
        "https://dummyimage.com/240x320/1e8fff/ffffff&text=Metropolis",
        "Home of the Daily Planet",
    )
}

pub fn villain_wins_json() -> Value {
    json!({
        "fightDate": "2023-10-24T21:34:47.617598Z",
        "id": 200,
        "loserLevel": 1,
        "loserName": "Fake hero",
        "loserPicture": "https://dummyimage.com/240x320/1e8fff/ffffff&text=Mock+Hero",
        "loserPowers": "Being fake",
        "loserTeam": "heroes",
        "winnerLevel": 42,
        "winnerName": "Fake villain",
        "winnerPicture": "https://dummyimage.com/240x320/b22222/ffffff&text=Mock+Villain",
        "winnerPowers": "Dissimulation",
        "winnerTeam": "villains",
        "location": {
            "name": "Gotham City",
            "picture": "https://dummyimage.com/240x320/b22222/ffffff&text=Gotham",
            "description": "This is Gotham City"
        }
    })
}

/// The villain of [`fake_fighters`] beats the hero in Gotham
pub fn villain_wins() -> FightOutcome {
    serde_json::from_value(villain_wins_json()).unwrap_or_else(|e| panic!("bad fixture: {e}"))
}

/// A second, distinct outcome where the hero wins
pub fn hero_wins() -> FightOutcome {
    let mut value = villain_wins_json();
    value["id"] = json!(201);
    value["winnerName"] = json!("Fake hero");
    value["winnerLevel"] = json!(1);
    value["winnerTeam"] = json!("heroes");
    value["loserName"] = json!("Fake villain");
    value["loserLevel"] = json!(42);
    value["loserTeam"] = json!("villains");
    serde_json::from_value(value).unwrap_or_else(|e| panic!("bad fixture: {e}"))
}
