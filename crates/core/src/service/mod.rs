//! Orchestration of store lookups around the pure scheduling primitives.

mod availability;
mod booking;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::{ReservationError, ReservationResult},
    models::restaurant::Restaurant,
    scheduling::SlotConfig,
    store::ReservationStore,
};

/// Entry point for availability queries and reservation commits.
///
/// Holds no mutable state; every call reads a fresh snapshot from the store,
/// so one instance can be shared across concurrent requests.
#[derive(Clone)]
pub struct ReservationService {
    store: Arc<dyn ReservationStore>,
    slots: SlotConfig,
}

impl ReservationService {
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self {
            store,
            slots: SlotConfig::default(),
        }
    }

    pub fn store(&self) -> &Arc<dyn ReservationStore> {
        &self.store
    }

    async fn active_restaurant(&self, restaurant_id: Uuid) -> ReservationResult<Restaurant> {
        let restaurant = self
            .store
            .get_restaurant(restaurant_id)
            .await?
            .ok_or(ReservationError::RestaurantNotFound { restaurant_id })?;

        if !restaurant.is_active {
            debug!("Rejecting request for inactive restaurant {}", restaurant_id);
            return Err(ReservationError::InactiveRestaurant {
                restaurant_id,
                name: restaurant.name,
            });
        }

        Ok(restaurant)
    }
}

fn out_of_range(field: &str, instant: DateTime<Utc>) -> ReservationError {
    ReservationError::Validation(format!(
        "{} is too close to the supported date limits: {}",
        field, instant
    ))
}
