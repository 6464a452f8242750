pub mod business_hours;
pub mod reservation;
pub mod restaurant;
pub mod table;
