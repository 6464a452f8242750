use uuid::Uuid;

use crate::{
    errors::{ReservationError, ReservationResult},
    models::{reservation::Occupancy, restaurant::Table},
};

use super::interval::Interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRequest {
    pub restaurant_id: Uuid,
    pub party_size: i32,
    pub interval: Interval,
}

/// Whether any occupancy bound to `table_id` overlaps `interval`.
pub fn has_conflict(table_id: Uuid, interval: &Interval, existing: &[Occupancy]) -> bool {
    existing
        .iter()
        .filter(|occupancy| occupancy.table_id == table_id)
        .any(|occupancy| occupancy.interval().overlaps(interval))
}

/// Picks the smallest active table that seats the party and is free for the
/// requested interval.
///
/// The capacity sort is stable, so tables of equal capacity keep the order the
/// store returned them in and the same inputs always pick the same table.
pub fn select_table<'a>(
    request: &TableRequest,
    tables: &'a [Table],
    existing: &[Occupancy],
) -> ReservationResult<&'a Table> {
    let mut candidates: Vec<&Table> = tables
        .iter()
        .filter(|table| table.seats(request.party_size))
        .collect();

    if candidates.is_empty() {
        return Err(ReservationError::NoCapacity {
            restaurant_id: request.restaurant_id,
            party_size: request.party_size,
        });
    }

    candidates.sort_by_key(|table| table.capacity);

    candidates
        .into_iter()
        .find(|table| !has_conflict(table.id, &request.interval, existing))
        .ok_or(ReservationError::NoAvailability {
            restaurant_id: request.restaurant_id,
            party_size: request.party_size,
            start: request.interval.start,
        })
}
