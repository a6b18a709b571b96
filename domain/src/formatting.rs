use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::models::{Player, Score};

pub const SCORE_PLACEHOLDER: &str = "N/A";

pub const COLUMNS: [&str; 3] = ["Name", "Score", "Created At"];

/// en-US medium date with a 12-hour clock, e.g. `Feb 10, 2024, 09:05 AM`.
const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Whether a score of exactly zero is shown as a value or as the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreFormatting {
    pub zero_is_missing: bool,
}

impl Default for ScoreFormatting {
    fn default() -> Self {
        Self {
            zero_is_missing: true,
        }
    }
}

pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    format_timestamp_in(instant, &Local)
}

pub fn format_timestamp_in<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    instant
        .with_timezone(tz)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Formats a raw ISO-8601 string. Input that does not parse is returned as is.
pub fn format_timestamp_str(iso: &str) -> String {
    match iso.parse::<DateTime<Utc>>() {
        Ok(instant) => format_timestamp(&instant),
        Err(_) => iso.to_string(),
    }
}

pub fn format_score(score: Option<Score>) -> String {
    format_score_with(score, ScoreFormatting::default())
}

pub fn format_score_with(score: Option<Score>, formatting: ScoreFormatting) -> String {
    match score {
        Some(score) if !(formatting.zero_is_missing && score.is_zero()) => score.to_string(),
        _ => SCORE_PLACEHOLDER.to_string(),
    }
}

/// Renders players into the three display cells shared by the table and the CSV export.
#[derive(Debug, Clone)]
pub struct PlayerFormatter<Tz: TimeZone> {
    pub tz: Tz,
    pub score_formatting: ScoreFormatting,
}

impl PlayerFormatter<Local> {
    pub fn local(score_formatting: ScoreFormatting) -> Self {
        Self {
            tz: Local,
            score_formatting,
        }
    }
}

impl<Tz: TimeZone> PlayerFormatter<Tz>
where
    Tz::Offset: Display,
{
    pub fn cells(&self, player: &Player) -> [String; 3] {
        [
            player.name.clone(),
            format_score_with(player.score, self.score_formatting),
            format_timestamp_in(&player.created_at, &self.tz),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn timestamp_has_abbreviated_month_day_year_and_clock() {
        assert_eq!(
            format_timestamp_in(&instant("2024-02-10T10:00:00Z"), &Utc),
            "Feb 10, 2024, 10:00 AM"
        );
        assert_eq!(
            format_timestamp_in(&instant("2024-12-01T21:07:30Z"), &Utc),
            "Dec 1, 2024, 09:07 PM"
        );
    }

    #[test]
    fn timestamp_is_shown_in_the_viewer_zone() {
        let new_york = chrono::FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(
            format_timestamp_in(&instant("2024-01-01T03:30:00Z"), &new_york),
            "Dec 31, 2023, 10:30 PM"
        );
    }

    #[test]
    fn unparseable_timestamp_is_passed_through() {
        assert_eq!(format_timestamp_str("yesterday"), "yesterday");
    }

    #[test]
    fn missing_and_zero_scores_use_the_placeholder() {
        assert_eq!(format_score(None), "N/A");
        assert_eq!(format_score(Some(Score::from(0.0))), "N/A");
        assert_eq!(format_score(Some(Score::from(42.0))), "42");
        assert_eq!(format_score(Some(Score::from(10.5))), "10.5");
    }

    #[test]
    fn zero_can_be_shown_as_a_real_score() {
        let presence_only = ScoreFormatting {
            zero_is_missing: false,
        };

        assert_eq!(format_score_with(Some(Score::from(0.0)), presence_only), "0");
        assert_eq!(format_score_with(None, presence_only), "N/A");
    }
}
