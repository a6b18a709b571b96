mod date_range;
mod player;
mod player_count;

pub use date_range::DateRange;
pub use player::{Player, PlayerId, Score};
pub use player_count::PlayerCount;
