use super::fetch_status::{error_message, FetchEvent, FetchStatus};
use crate::models::PlayerCount;
use crate::repositories::PlayerRepository;

pub const LOADING_MESSAGE: &str = "Loading...";
const APPLICATION_ERROR_MESSAGE: &str = "Failed to fetch player count";

/// The "Total Players" card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryScreen {
    status: FetchStatus,
    total_players: PlayerCount,
}

impl SummaryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the screen: one fetch, driven to a terminal state.
    #[tracing::instrument(skip_all)]
    pub async fn load(self, repository: &(impl PlayerRepository + Sync)) -> Self {
        let screen = self.reduce(FetchEvent::FetchStarted);
        let result = repository.fetch_player_count().await;
        if let Err(err) = &result {
            tracing::warn!(%err, "failed to fetch player count");
        }
        screen.reduce(result.into())
    }

    pub fn reduce(self, event: FetchEvent<PlayerCount>) -> Self {
        match event {
            FetchEvent::FetchStarted => Self {
                status: FetchStatus::Loading,
                ..self
            },
            // Results that arrive outside of a pending fetch are stale.
            _ if !self.status.is_loading() => self,
            FetchEvent::FetchSucceeded(total_players) => Self {
                status: FetchStatus::Success,
                total_players,
            },
            FetchEvent::FetchFailed(kind) => Self {
                status: FetchStatus::Error(error_message(kind, APPLICATION_ERROR_MESSAGE)),
                ..self
            },
        }
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn total_players(&self) -> PlayerCount {
        self.total_players
    }

    /// The single line the card displays for the current state.
    pub fn headline(&self) -> String {
        match self.status {
            FetchStatus::Idle | FetchStatus::Loading => LOADING_MESSAGE.to_string(),
            FetchStatus::Error(message) => message.to_string(),
            FetchStatus::Success => self.total_players.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::{FetchError, FetchErrorKind};
    use crate::models::Player;

    struct FixedRepository(Result<PlayerCount, FetchError>);

    #[async_trait::async_trait]
    impl PlayerRepository for FixedRepository {
        async fn fetch_player_count(&self) -> Result<PlayerCount, FetchError> {
            self.0.clone()
        }

        async fn fetch_all_players(&self) -> Result<Vec<Player>, FetchError> {
            unreachable!("the summary screen only reads the count")
        }
    }

    #[test]
    fn starts_idle_and_shows_loading() {
        let screen = SummaryScreen::new();

        assert_eq!(screen.status(), FetchStatus::Idle);
        assert_eq!(screen.headline(), "Loading...");
    }

    #[test]
    fn successful_fetch_shows_the_count() {
        let screen = SummaryScreen::new()
            .reduce(FetchEvent::FetchStarted)
            .reduce(FetchEvent::FetchSucceeded(PlayerCount::from(128)));

        assert_eq!(screen.status(), FetchStatus::Success);
        assert_eq!(screen.headline(), "128");
    }

    #[test]
    fn application_failure_keeps_the_initial_count() {
        let screen = SummaryScreen::new()
            .reduce(FetchEvent::FetchStarted)
            .reduce(FetchEvent::FetchFailed(FetchErrorKind::Application));

        assert_eq!(
            screen.status(),
            FetchStatus::Error("Failed to fetch player count")
        );
        assert_eq!(screen.total_players(), PlayerCount::default());
    }

    #[test]
    fn stale_results_are_discarded() {
        let screen = SummaryScreen::new()
            .reduce(FetchEvent::FetchStarted)
            .reduce(FetchEvent::FetchFailed(FetchErrorKind::Connection))
            .reduce(FetchEvent::FetchSucceeded(PlayerCount::from(5)));

        assert_eq!(screen.status(), FetchStatus::Error("Error connecting to server"));
        assert_eq!(screen.total_players(), PlayerCount::default());
    }

    #[tokio::test]
    async fn load_reaches_a_terminal_state() {
        let ok = SummaryScreen::new()
            .load(&FixedRepository(Ok(PlayerCount::from(7))))
            .await;
        let failed = SummaryScreen::new()
            .load(&FixedRepository(Err(FetchError::connection(
                "connection refused",
            ))))
            .await;

        assert_eq!(ok.headline(), "7");
        assert_eq!(failed.headline(), "Error connecting to server");
    }
}
