use std::time::Duration;

use config::UpstreamConfig;
use domain::errors::FetchError;
use domain::models::{Player, PlayerCount};
use domain::repositories::PlayerRepository;
use serde::Deserialize;

/// Body of the players endpoint. Which optional field matters depends on the caller.
#[derive(Deserialize, Debug)]
struct PlayersPayload {
    success: bool,
    #[serde(default)]
    count: Option<PlayerCount>,
    #[serde(default)]
    players: Option<Vec<Player>>,
}

impl PlayersPayload {
    fn decode(body: &[u8]) -> Result<Self, FetchError> {
        serde_json::from_slice(body).map_err(FetchError::connection)
    }

    fn into_count(self) -> Result<PlayerCount, FetchError> {
        if !self.success {
            return Err(FetchError::ApplicationError);
        }
        self.count
            .ok_or_else(|| FetchError::connection("`count` is missing from a successful response"))
    }

    fn into_players(self) -> Result<Vec<Player>, FetchError> {
        if !self.success {
            return Err(FetchError::ApplicationError);
        }
        self.players.ok_or_else(|| {
            FetchError::connection("`players` is missing from a successful response")
        })
    }
}

#[derive(Debug, Clone)]
pub struct HttpUpstreamRepository {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpUpstreamRepository {
    pub fn try_new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
        })
    }

    /// One GET against the endpoint. The HTTP status is not inspected; the body decides.
    async fn fetch_payload(&self) -> Result<PlayersPayload, FetchError> {
        tracing::debug!(url = %self.endpoint_url, "requesting players endpoint");
        let body = self
            .client
            .get(&self.endpoint_url)
            .send()
            .await
            .map_err(FetchError::connection)?
            .bytes()
            .await
            .map_err(FetchError::connection)?;

        PlayersPayload::decode(&body)
    }
}

#[async_trait::async_trait]
impl PlayerRepository for HttpUpstreamRepository {
    #[tracing::instrument(skip(self))]
    async fn fetch_player_count(&self) -> Result<PlayerCount, FetchError> {
        self.fetch_payload().await?.into_count()
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_all_players(&self) -> Result<Vec<Player>, FetchError> {
        self.fetch_payload().await?.into_players()
    }
}
