use chrono::Duration;
use tracing::{info, warn};

use crate::{
    errors::{ReservationError, ReservationResult},
    locale,
    models::reservation::{
        CreateReservationRequest, CreateReservationResponse, NewReservation, ReservationStatus,
    },
    scheduling::{select_table, Interval, TableRequest},
    store::{StartWindow, StoreError},
};

use super::{out_of_range, ReservationService};

/// How far before the requested start existing bookings are fetched. Covers the
/// longest permitted reservation with room to spare.
const LOOKBACK_HOURS: i64 = 24;

impl ReservationService {
    /// Assigns the smallest free table that seats the party and stores a
    /// confirmed reservation on it.
    ///
    /// Nothing is written before the final insert, so a failure leaves no state
    /// behind.
    pub async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> ReservationResult<CreateReservationResponse> {
        request.validate()?;

        let restaurant_id = request.restaurant_id;
        let party_size = request.party_size;
        let restaurant = self.active_restaurant(restaurant_id).await?;

        let tables = self
            .store
            .list_eligible_tables(restaurant_id, party_size)
            .await?;
        if tables.is_empty() {
            return Err(ReservationError::NoCapacity {
                restaurant_id,
                party_size,
            });
        }

        let interval =
            Interval::checked_starting_at(request.reservation_date, request.duration_minutes)
                .ok_or_else(|| out_of_range("reservation_date", request.reservation_date))?;
        let window = StartWindow {
            from: interval
                .start
                .checked_sub_signed(Duration::hours(LOOKBACK_HOURS))
                .ok_or_else(|| out_of_range("reservation_date", interval.start))?,
            to: interval.end,
        };
        let table_ids = tables.iter().map(|table| table.id).collect();
        let occupied = self
            .store
            .list_occupying_reservations(restaurant_id, Some(table_ids), window)
            .await?;

        let table_request = TableRequest {
            restaurant_id,
            party_size,
            interval,
        };
        let table = select_table(&table_request, &tables, &occupied)?;

        let new_reservation = NewReservation {
            restaurant_id,
            client_id: request.client_id,
            table_id: table.id,
            reservation_date: request.reservation_date,
            party_size,
            duration_minutes: request.duration_minutes,
            status: ReservationStatus::Confirmed,
        };

        let reservation = match self.store.insert_reservation(new_reservation).await {
            Ok(reservation) => reservation,
            Err(StoreError::Conflict { table_id }) => {
                warn!(
                    "Concurrent booking took table {} in restaurant {} at {}",
                    table_id, restaurant_id, interval.start
                );
                return Err(ReservationError::NoAvailability {
                    restaurant_id,
                    party_size,
                    start: interval.start,
                });
            }
            Err(err) => return Err(err.into()),
        };

        info!(
            "Reservation {} confirmed on table {} for {} guests",
            reservation.id, table.table_number, reservation.party_size
        );

        Ok(CreateReservationResponse {
            reservation_id: reservation.id,
            table_number: table.table_number,
            reservation_date: reservation.reservation_date,
            party_size: reservation.party_size,
            message: locale::confirmation_message(
                reservation.party_size,
                table.table_number,
                reservation.reservation_date,
                restaurant.timezone,
            ),
        })
    }
}
