//! # Lumen Core
//!
//! Domain types and the scheduling engine for restaurant reservations:
//! slot generation over business hours, half-open conflict detection and
//! smallest-table-first assignment. Storage is reached only through the
//! [`store::ReservationStore`] trait, injected into [`service::ReservationService`].

pub mod errors;
pub mod locale;
pub mod logging;
pub mod mock;
pub mod models;
pub mod scheduling;
pub mod service;
pub mod store;
