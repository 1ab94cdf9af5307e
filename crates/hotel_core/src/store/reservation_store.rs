//! Reservation collection store.
//!
//! Reservations are never modified in place; `cancel` removes them.

use super::collection::JsonCollection;
use super::StoreResult;
use crate::model::reservation::{Reservation, ReservationId};
use log::info;
use std::path::{Path, PathBuf};

const MODULE: &str = "reservation_store";

/// Store over one reservation collection file.
#[derive(Debug, Clone)]
pub struct ReservationStore {
    collection: JsonCollection<Reservation>,
}

impl ReservationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path, MODULE),
        }
    }

    pub fn path(&self) -> &Path {
        self.collection.path()
    }

    /// Appends `reservation` and returns it. Customer and hotel ids are not
    /// checked against any other collection.
    pub fn create(&self, reservation: Reservation) -> StoreResult<Reservation> {
        let created = self.collection.append(reservation)?;
        info!(
            "event=reservation_create module={MODULE} status=ok reservation_id={} customer_id={} hotel_id={}",
            created.reservation_id, created.customer_id, created.hotel_id
        );
        Ok(created)
    }

    /// Removes every reservation with `reservation_id`; returns the removed
    /// count.
    pub fn cancel(&self, reservation_id: ReservationId) -> StoreResult<usize> {
        self.collection.remove_all(reservation_id)
    }

    /// Returns the first reservation with `reservation_id` and logs its
    /// description.
    pub fn display(&self, reservation_id: ReservationId) -> Option<Reservation> {
        let found = self.collection.find(reservation_id);
        match &found {
            Some(reservation) => {
                info!("event=reservation_display module={MODULE} status=found {reservation}")
            }
            None => info!(
                "event=reservation_display module={MODULE} status=not_found reservation_id={reservation_id}"
            ),
        }
        found
    }

    pub fn find(&self, reservation_id: ReservationId) -> Option<Reservation> {
        self.collection.find(reservation_id)
    }

    pub fn load(&self) -> Vec<Reservation> {
        self.collection.load()
    }

    pub fn try_load(&self) -> StoreResult<Vec<Reservation>> {
        self.collection.try_load()
    }

    pub fn save(&self, reservations: &[Reservation]) -> StoreResult<()> {
        self.collection.save(reservations)
    }
}
