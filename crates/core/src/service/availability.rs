use chrono::{DateTime, Datelike, Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::{ReservationError, ReservationResult},
    locale,
    models::{
        reservation::{validate_date, MAX_DURATION_MINUTES},
        time_slot::{CheckScheduleResponse, TimeSlot},
    },
    scheduling::{generate_slots, opening_window, slots::local_day},
    store::StartWindow,
};

use super::{out_of_range, ReservationService};

impl ReservationService {
    /// Lists candidate slots for the restaurant-local day containing `date`.
    ///
    /// A closed day is a normal answer (`closed = true`, no slots), not an error.
    pub async fn check_availability(
        &self,
        restaurant_id: Uuid,
        date: DateTime<Utc>,
    ) -> ReservationResult<CheckScheduleResponse> {
        validate_date("date", date)?;
        let restaurant = self.active_restaurant(restaurant_id).await?;
        let tz = restaurant.timezone;

        let local_date = date.with_timezone(&tz).date_naive();
        let day_of_week = local_date.weekday().num_days_from_sunday() as i16;

        let hours = self
            .store
            .get_business_hours(restaurant_id, day_of_week)
            .await?
            .ok_or(ReservationError::BusinessHoursNotFound {
                restaurant_id,
                day_of_week,
            })?;

        if hours.is_closed {
            return Ok(CheckScheduleResponse {
                available: false,
                closed: true,
                time_slots: Vec::new(),
                message: locale::CLOSED_MESSAGE.to_string(),
            });
        }

        let window = opening_window(&hours, local_date, tz)?;

        // The whole local day, widened so bookings spilling in from the previous
        // evening or starting under a late slot's tail are seen too.
        let day = local_day(tz, local_date).unwrap_or(window);
        let lookup = StartWindow {
            from: day
                .start
                .checked_sub_signed(Duration::minutes(i64::from(MAX_DURATION_MINUTES)))
                .ok_or_else(|| out_of_range("date", date))?,
            to: window
                .end
                .checked_add_signed(self.slots.slot_duration())
                .ok_or_else(|| out_of_range("date", date))?
                .max(day.end),
        };

        let occupied = self
            .store
            .list_occupying_reservations(restaurant_id, None, lookup)
            .await?;

        let time_slots: Vec<TimeSlot> = generate_slots(window, self.slots, &occupied).collect();
        let available = time_slots.iter().any(|slot| slot.available);

        debug!(
            "Availability for restaurant {} on {}: {} slots, {} existing reservations",
            restaurant_id,
            local_date,
            time_slots.len(),
            occupied.len()
        );

        Ok(CheckScheduleResponse {
            available,
            closed: false,
            message: locale::availability_summary(&time_slots, tz),
            time_slots,
        })
    }
}
