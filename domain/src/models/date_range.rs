use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// A pair of optional calendar days picked by the operator.
///
/// Each day is interpreted in the viewer's time zone: `start` covers from its
/// first millisecond and `end` up to its last one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn with_start(self, start: Option<NaiveDate>) -> Self {
        Self { start, ..self }
    }

    pub fn with_end(self, end: Option<NaiveDate>) -> Self {
        Self { end, ..self }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive lower bound: 00:00:00.000 of `start` in `tz`, or the first
    /// existing instant of that day when midnight is skipped.
    pub fn lower_bound_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        let start_of_day = self.start?.and_hms_milli_opt(0, 0, 0, 0)?;
        resolve_local(tz, start_of_day, Duration::minutes(1), |local| local.earliest())
    }

    /// Inclusive upper bound: 23:59:59.999 of `end` in `tz`, or the last
    /// existing instant before it when that time is skipped.
    pub fn upper_bound_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        let end_of_day = self.end?.and_hms_milli_opt(23, 59, 59, 999)?;
        resolve_local(tz, end_of_day, Duration::minutes(-1), |local| local.latest())
    }
}

/// Longest clock jump searched across when a bound falls into a gap.
const MAX_GAP_MINUTES: i32 = 24 * 60;

/// Maps a wall-clock time onto an instant.
///
/// Ambiguous times (clocks turned back) are settled by `pick`. A time that
/// falls into a gap (clocks turned forward) walks by `step` until it reaches
/// a wall-clock time that exists, which keeps the bound on the same day.
fn resolve_local<Tz: TimeZone>(
    tz: &Tz,
    wall_clock: NaiveDateTime,
    step: Duration,
    pick: fn(LocalResult<DateTime<Tz>>) -> Option<DateTime<Tz>>,
) -> Option<DateTime<Utc>> {
    (0..=MAX_GAP_MINUTES)
        .find_map(|n| pick(tz.from_local_datetime(&(wall_clock + step * n))))
        .map(|resolved| resolved.with_timezone(&Utc))
}
