pub mod reservation;
pub mod restaurant;
pub mod time_slot;
