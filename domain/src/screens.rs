//! Per-screen state, advanced only through pure `reduce` transitions.

mod fetch_status;
pub mod listing;
pub mod summary;

pub use fetch_status::{FetchEvent, FetchStatus, CONNECTION_ERROR_MESSAGE};
pub use listing::{ListingEvent, ListingScreen};
pub use summary::SummaryScreen;
