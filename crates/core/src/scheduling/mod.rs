//! Pure scheduling primitives. Nothing in here touches storage or suspends.

pub mod interval;
pub mod slots;
pub mod tables;

pub use interval::{overlaps, Interval};
pub use slots::{generate_slots, opening_window, SlotConfig, Slots};
pub use tables::{select_table, TableRequest};
