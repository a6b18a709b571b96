use chrono::{DateTime, Utc};
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the upstream service. Unique within one fetched collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Into, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(rename = "_id", alias = "id")]
    pub id: PlayerId,
    pub name: String,
    /// `None` when the upstream omits the field or sends `null`.
    #[serde(default)]
    pub score: Option<Score>,
    pub created_at: DateTime<Utc>,
}
