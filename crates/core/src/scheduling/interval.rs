use chrono::{DateTime, Duration, Utc};

/// True iff the half-open intervals `[a_start, a_end)` and `[b_start, b_end)`
/// intersect. Intervals that only touch at a boundary do not overlap.
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && a_end > b_start
}

/// A half-open span of time `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn starting_at(start: DateTime<Utc>, minutes: i32) -> Self {
        Self::new(start, start + Duration::minutes(i64::from(minutes)))
    }

    /// Like [`Interval::starting_at`], but `None` when the end is not representable.
    pub fn checked_starting_at(start: DateTime<Utc>, minutes: i32) -> Option<Self> {
        start
            .checked_add_signed(Duration::minutes(i64::from(minutes)))
            .map(|end| Self::new(start, end))
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }
}
