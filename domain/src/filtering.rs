use chrono::{Local, TimeZone};

use crate::models::{DateRange, Player};

/// Players created within `range`, with day boundaries taken in the host's local time zone.
pub fn filter_by_date_range(players: &[Player], range: &DateRange) -> Vec<Player> {
    filter_by_date_range_in(players, range, &Local)
}

/// Players created within `range`, with day boundaries taken in `tz`.
///
/// Bounds are inclusive and checked independently. A `start` later than `end`
/// is not rejected; it simply keeps nothing. Surviving players keep their
/// relative order.
pub fn filter_by_date_range_in<Tz: TimeZone>(
    players: &[Player],
    range: &DateRange,
    tz: &Tz,
) -> Vec<Player> {
    if range.is_unbounded() {
        return players.to_vec();
    }

    let lower_bound = range.lower_bound_in(tz);
    let upper_bound = range.upper_bound_in(tz);

    players
        .iter()
        .filter(|player| lower_bound.map_or(true, |bound| player.created_at >= bound))
        .filter(|player| upper_bound.map_or(true, |bound| player.created_at <= bound))
        .cloned()
        .collect()
}
