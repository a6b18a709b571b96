use chrono::{Local, TimeZone};

use super::fetch_status::{error_message, FetchEvent, FetchStatus};
use crate::errors::FetchErrorKind;
use crate::filtering::filter_by_date_range_in;
use crate::models::{DateRange, Player};
use crate::repositories::PlayerRepository;

pub const LOADING_MESSAGE: &str = "Loading players...";
pub const EMPTY_MESSAGE: &str = "No players found";
const APPLICATION_ERROR_MESSAGE: &str = "Failed to fetch players";

#[derive(Debug, Clone, PartialEq)]
pub enum ListingEvent {
    FetchStarted,
    FetchSucceeded(Vec<Player>),
    FetchFailed(FetchErrorKind),
    RangeChanged(DateRange),
    FiltersCleared,
}

impl From<FetchEvent<Vec<Player>>> for ListingEvent {
    fn from(event: FetchEvent<Vec<Player>>) -> Self {
        match event {
            FetchEvent::FetchStarted => Self::FetchStarted,
            FetchEvent::FetchSucceeded(players) => Self::FetchSucceeded(players),
            FetchEvent::FetchFailed(kind) => Self::FetchFailed(kind),
        }
    }
}

/// The player list with its date filter.
///
/// `filtered` is recomputed from the whole collection whenever the collection
/// or the range changes, so it always equals
/// `filter_by_date_range_in(players, range, tz)`.
#[derive(Debug, Clone)]
pub struct ListingScreen<Tz: TimeZone = Local> {
    status: FetchStatus,
    players: Vec<Player>,
    range: DateRange,
    filtered: Vec<Player>,
    tz: Tz,
}

impl ListingScreen<Local> {
    pub fn new() -> Self {
        Self::with_time_zone(Local)
    }
}

impl Default for ListingScreen<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> ListingScreen<Tz> {
    pub fn with_time_zone(tz: Tz) -> Self {
        Self {
            status: FetchStatus::Idle,
            players: Vec::new(),
            range: DateRange::UNBOUNDED,
            filtered: Vec::new(),
            tz,
        }
    }

    /// Activates the screen: one fetch, driven to a terminal state.
    #[tracing::instrument(skip_all)]
    pub async fn load(self, repository: &(impl PlayerRepository + Sync)) -> Self {
        let screen = self.reduce(ListingEvent::FetchStarted);
        let result = repository.fetch_all_players().await;
        match &result {
            Ok(players) => tracing::info!(players = players.len(), "fetched players"),
            Err(err) => tracing::warn!(%err, "failed to fetch players"),
        }
        screen.reduce(FetchEvent::from(result).into())
    }

    pub fn reduce(self, event: ListingEvent) -> Self {
        match event {
            ListingEvent::FetchStarted => Self {
                status: FetchStatus::Loading,
                ..self
            },
            // Results that arrive outside of a pending fetch are stale.
            ListingEvent::FetchSucceeded(_) | ListingEvent::FetchFailed(_)
                if !self.status.is_loading() =>
            {
                self
            }
            ListingEvent::FetchSucceeded(players) => Self {
                status: FetchStatus::Success,
                players,
                ..self
            }
            .refiltered(),
            ListingEvent::FetchFailed(kind) => Self {
                status: FetchStatus::Error(error_message(kind, APPLICATION_ERROR_MESSAGE)),
                ..self
            },
            ListingEvent::RangeChanged(range) => Self { range, ..self }.refiltered(),
            ListingEvent::FiltersCleared => Self {
                range: DateRange::UNBOUNDED,
                ..self
            }
            .refiltered(),
        }
    }

    fn refiltered(self) -> Self {
        let filtered = filter_by_date_range_in(&self.players, &self.range, &self.tz);
        Self { filtered, ..self }
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn filtered_players(&self) -> &[Player] {
        &self.filtered
    }

    pub fn total_count(&self) -> usize {
        self.players.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_filtered(&self) -> bool {
        !self.range.is_unbounded()
    }

    /// The clear action is offered only while a bound is set.
    pub fn can_clear_filters(&self) -> bool {
        self.is_filtered()
    }

    pub fn status_line(&self) -> String {
        format!(
            "Showing {} of {} players{}",
            self.filtered_count(),
            self.total_count(),
            if self.is_filtered() { " (filtered)" } else { "" }
        )
    }
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::errors::FetchError;
    use crate::models::PlayerCount;

    fn player(id: &str, created_at: &str) -> Player {
        Player {
            id: id.to_string().into(),
            name: id.to_string(),
            score: None,
            created_at: created_at.parse().unwrap(),
        }
    }

    fn loaded(players: Vec<Player>) -> ListingScreen<Utc> {
        ListingScreen::with_time_zone(Utc)
            .reduce(ListingEvent::FetchStarted)
            .reduce(ListingEvent::FetchSucceeded(players))
    }

    fn sample() -> Vec<Player> {
        vec![
            player("Ann", "2024-01-05T10:00:00Z"),
            player("Bo", "2024-02-10T10:00:00Z"),
        ]
    }

    fn names(screen: &ListingScreen<Utc>) -> Vec<&str> {
        screen
            .filtered_players()
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    #[test]
    fn fetched_players_are_shown_unfiltered() {
        let screen = loaded(sample());

        assert_eq!(screen.status(), FetchStatus::Success);
        assert_eq!(names(&screen), vec!["Ann", "Bo"]);
        assert_eq!(screen.status_line(), "Showing 2 of 2 players");
        assert!(!screen.can_clear_filters());
    }

    #[test]
    fn range_change_refilters_the_collection() {
        let screen = loaded(sample()).reduce(ListingEvent::RangeChanged(DateRange::new(
            NaiveDate::from_ymd_opt(2024, 2, 1),
            None,
        )));

        assert_eq!(names(&screen), vec!["Bo"]);
        assert_eq!(screen.total_count(), 2);
        assert_eq!(screen.status_line(), "Showing 1 of 2 players (filtered)");
        assert!(screen.can_clear_filters());
    }

    #[test]
    fn clearing_restores_the_whole_collection() {
        let screen = loaded(sample())
            .reduce(ListingEvent::RangeChanged(DateRange::new(
                NaiveDate::from_ymd_opt(2024, 3, 1),
                NaiveDate::from_ymd_opt(2024, 1, 1),
            )))
            .reduce(ListingEvent::FiltersCleared);

        assert_eq!(screen.range(), DateRange::UNBOUNDED);
        assert_eq!(names(&screen), vec!["Ann", "Bo"]);
    }

    #[test]
    fn range_set_before_the_fetch_applies_to_the_result() {
        let screen = ListingScreen::with_time_zone(Utc)
            .reduce(ListingEvent::RangeChanged(DateRange::new(
                None,
                NaiveDate::from_ymd_opt(2024, 1, 31),
            )))
            .reduce(ListingEvent::FetchStarted)
            .reduce(ListingEvent::FetchSucceeded(sample()));

        assert_eq!(names(&screen), vec!["Ann"]);
    }

    #[test]
    fn application_failure_leaves_the_list_empty() {
        let screen = ListingScreen::with_time_zone(Utc)
            .reduce(ListingEvent::FetchStarted)
            .reduce(ListingEvent::FetchFailed(FetchErrorKind::Application));

        assert_eq!(screen.status(), FetchStatus::Error("Failed to fetch players"));
        assert!(screen.players().is_empty());
        assert_eq!(screen.filtered_count(), 0);
    }

    struct FailingRepository;

    #[async_trait::async_trait]
    impl PlayerRepository for FailingRepository {
        async fn fetch_player_count(&self) -> Result<PlayerCount, FetchError> {
            Err(FetchError::ApplicationError)
        }

        async fn fetch_all_players(&self) -> Result<Vec<Player>, FetchError> {
            Err(FetchError::connection("connection reset"))
        }
    }

    #[tokio::test]
    async fn load_maps_transport_failures_to_the_connection_message() {
        let screen = ListingScreen::with_time_zone(Utc)
            .load(&FailingRepository)
            .await;

        assert_eq!(
            screen.status().error_message(),
            Some("Error connecting to server")
        );
    }
}
