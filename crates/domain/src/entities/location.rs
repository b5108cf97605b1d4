//! Location entity - Where a fight takes place

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    /// Absolute URL of the location picture
    pub picture: String,
    #[serde(default)]
    pub description: String,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        picture: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            picture: picture.into(),
            description: description.into(),
        }
    }
}
