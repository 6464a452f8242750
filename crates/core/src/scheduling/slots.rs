use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::{
    errors::{ReservationError, ReservationResult},
    models::{reservation::Occupancy, restaurant::BusinessHours, time_slot::TimeSlot},
};

use super::interval::Interval;

pub const STANDARD_SLOT_MINUTES: i64 = 120;
pub const SLOT_CADENCE_MINUTES: i64 = 30;

/// Length of a displayed slot and the step between consecutive slot starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotConfig {
    slot_duration: Duration,
    cadence: Duration,
}

impl SlotConfig {
    pub fn slot_duration(&self) -> Duration {
        self.slot_duration
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            slot_duration: Duration::minutes(STANDARD_SLOT_MINUTES),
            cadence: Duration::minutes(SLOT_CADENCE_MINUTES),
        }
    }
}

/// Resolves a wall-clock time on `date` in `tz` to an instant.
///
/// Ambiguous times (clocks going back) resolve to the earlier instant. Times
/// inside a spring-forward gap are pushed one hour later.
pub fn localize(tz: Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
    let naive = date.and_time(time);
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// The instants between local midnight of `date` and the following midnight.
pub fn local_day(tz: Tz, date: NaiveDate) -> Option<Interval> {
    let midnight = NaiveTime::from_hms_opt(0, 0, 0)?;
    let start = localize(tz, date, midnight)?;
    let end = localize(tz, date.succ_opt()?, midnight)?;
    Some(Interval::new(start, end))
}

/// Opening and closing instants for `date` under `hours`.
///
/// Hours that do not open strictly before they close are rejected instead of
/// yielding an empty day.
pub fn opening_window(hours: &BusinessHours, date: NaiveDate, tz: Tz) -> ReservationResult<Interval> {
    let invalid = || ReservationError::InvalidBusinessHours {
        restaurant_id: hours.restaurant_id,
        day_of_week: hours.day_of_week,
        open_time: hours.open_time,
        close_time: hours.close_time,
    };

    if hours.open_time >= hours.close_time {
        return Err(invalid());
    }

    let open = localize(tz, date, hours.open_time).ok_or_else(invalid)?;
    let close = localize(tz, date, hours.close_time).ok_or_else(invalid)?;
    Ok(Interval::new(open, close))
}

/// Lazily yields candidate slots for one opening window.
///
/// Starts are bounded by closing time, not ends, so the last slot may run past
/// close. A slot is unavailable when it overlaps any existing occupancy;
/// generated slots never block each other.
#[derive(Debug, Clone)]
pub struct Slots<'a> {
    next_start: DateTime<Utc>,
    close: DateTime<Utc>,
    config: SlotConfig,
    existing: &'a [Occupancy],
}

impl Iterator for Slots<'_> {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<TimeSlot> {
        if self.next_start >= self.close {
            return None;
        }

        let start = self.next_start;
        self.next_start = start + self.config.cadence;

        let candidate = Interval::new(start, start + self.config.slot_duration);
        let available = !self
            .existing
            .iter()
            .any(|occupancy| occupancy.interval().overlaps(&candidate));

        Some(TimeSlot {
            time: start,
            available,
        })
    }
}

pub fn generate_slots(window: Interval, config: SlotConfig, existing: &[Occupancy]) -> Slots<'_> {
    Slots {
        next_start: window.start,
        close: window.end,
        config,
        existing,
    }
}
