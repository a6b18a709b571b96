use crate::errors::FetchError;
use crate::models::{Player, PlayerCount};

/// Read access to the upstream player set. Each call is a single request with no retry.
#[async_trait::async_trait]
pub trait PlayerRepository {
    async fn fetch_player_count(&self) -> Result<PlayerCount, FetchError>;

    async fn fetch_all_players(&self) -> Result<Vec<Player>, FetchError>;
}
