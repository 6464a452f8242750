use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::{
    models::{
        reservation::{NewReservation, Occupancy, Reservation},
        restaurant::{BusinessHours, Restaurant, Table},
    },
    store::{ReservationStore, StartWindow, StoreResult},
};

// Mock store for testing services and handlers
mock! {
    pub Store {}

    #[async_trait]
    impl ReservationStore for Store {
        async fn ping(&self) -> StoreResult<()>;

        async fn get_restaurant(&self, id: Uuid) -> StoreResult<Option<Restaurant>>;

        async fn get_business_hours(
            &self,
            restaurant_id: Uuid,
            day_of_week: i16,
        ) -> StoreResult<Option<BusinessHours>>;

        async fn list_eligible_tables(
            &self,
            restaurant_id: Uuid,
            min_capacity: i32,
        ) -> StoreResult<Vec<Table>>;

        async fn list_occupying_reservations(
            &self,
            restaurant_id: Uuid,
            table_ids: Option<Vec<Uuid>>,
            window: StartWindow,
        ) -> StoreResult<Vec<Occupancy>>;

        async fn insert_reservation(&self, reservation: NewReservation) -> StoreResult<Reservation>;
    }
}
