use std::fmt::{Display, Write};

use chrono::TimeZone;
use domain::formatting::{PlayerFormatter, COLUMNS};
use domain::screens::listing::{EMPTY_MESSAGE, LOADING_MESSAGE};
use domain::screens::{FetchStatus, ListingScreen, SummaryScreen};
use prettytable::{Cell, Row, Table};

pub fn summary(screen: &SummaryScreen) -> String {
    format!(
        "Trivia Dashboard\n\nTotal Players\n{}\n\nView players: trivia-dashboard players",
        screen.headline()
    )
}

fn players_table<Tz: TimeZone>(
    screen: &ListingScreen<Tz>,
    formatter: &PlayerFormatter<Tz>,
) -> Table
where
    Tz::Offset: Display,
{
    let header = Row::new(COLUMNS.iter().map(|&column| Cell::new(column)).collect());
    let mut table = Table::init(vec![header]);

    if screen.filtered_players().is_empty() {
        table.add_row(Row::new(vec![Cell::new(EMPTY_MESSAGE).with_hspan(COLUMNS.len())]));
    }

    for player in screen.filtered_players() {
        let [name, score, created_at] = formatter.cells(player);
        table.add_row(prettytable::row![name, score, created_at]);
    }

    table
}

pub fn listing<Tz: TimeZone>(
    screen: &ListingScreen<Tz>,
    formatter: &PlayerFormatter<Tz>,
) -> String
where
    Tz::Offset: Display,
{
    let mut out = String::from("Players List\n\n");

    match screen.status() {
        FetchStatus::Idle | FetchStatus::Loading => out.push_str(LOADING_MESSAGE),
        FetchStatus::Error(message) => out.push_str(message),
        FetchStatus::Success => {
            let range = screen.range();
            let _ = writeln!(
                out,
                "Filter by Date: {} to {}",
                range.start.map_or_else(|| "any".to_string(), |d| d.to_string()),
                range.end.map_or_else(|| "any".to_string(), |d| d.to_string()),
            );
            if screen.can_clear_filters() {
                out.push_str("Clear filters: run without --start/--end\n");
            }
            let _ = writeln!(out, "{}\n", screen.status_line());
            let _ = write!(out, "{}", players_table(screen, formatter));
        }
    }

    out.push_str("\nBack to dashboard: trivia-dashboard summary");
    out
}
