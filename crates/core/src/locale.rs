//! Customer-facing messages. Times are rendered in the restaurant's zone with
//! Spanish (es-ES) names.

use chrono::{DateTime, Locale, Utc};
use chrono_tz::Tz;

use crate::models::time_slot::TimeSlot;

pub const LOCALE: Locale = Locale::es_ES;

/// Available start times listed in a summary before it is cut short.
pub const SUMMARY_LIMIT: usize = 5;

pub const CLOSED_MESSAGE: &str = "El restaurante está cerrado este día";
pub const NO_SLOTS_MESSAGE: &str = "No hay horarios disponibles para esta fecha";

fn plural(count: i64) -> &'static str {
    if count == 1 { "" } else { "s" }
}

pub fn format_time(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}

/// e.g. "sábado, 20 de enero de 2024, 20:00"
pub fn format_date_time(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format_localized("%A, %-d de %B de %Y, %H:%M", LOCALE)
        .to_string()
}

pub fn availability_summary(slots: &[TimeSlot], tz: Tz) -> String {
    let available: Vec<&TimeSlot> = slots.iter().filter(|slot| slot.available).collect();
    if available.is_empty() {
        return NO_SLOTS_MESSAGE.to_string();
    }

    let count = available.len();
    let times = available
        .iter()
        .take(SUMMARY_LIMIT)
        .map(|slot| format_time(slot.time, tz))
        .collect::<Vec<_>>()
        .join(", ");
    let suffix = if count > SUMMARY_LIMIT { " y más" } else { "" };
    let s = plural(count as i64);

    format!("Encontré {count} horario{s} disponible{s}: {times}{suffix}")
}

pub fn confirmation_message(
    party_size: i32,
    table_number: i32,
    reservation_date: DateTime<Utc>,
    tz: Tz,
) -> String {
    format!(
        "Reserva confirmada para {} persona{} en la mesa {} el {}",
        party_size,
        plural(i64::from(party_size)),
        table_number,
        format_date_time(reservation_date, tz)
    )
}
