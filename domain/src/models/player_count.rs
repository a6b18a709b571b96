use derive_more::{Display, From, Into};
use serde::Deserialize;

/// Size of the whole upstream player set, regardless of any local filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, From, Into, Deserialize)]
#[serde(transparent)]
pub struct PlayerCount(u64);
