//! Reservation record.
//!
//! Reservations are created whole and removed whole; they have no partial
//! update. `customer_id` and `hotel_id` are plain values and are not checked
//! against the other collections.

use super::customer::CustomerId;
use super::hotel::HotelId;
use super::Record;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Caller-supplied reservation identifier.
pub type ReservationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
}

impl Reservation {
    pub fn new(reservation_id: ReservationId, customer_id: CustomerId, hotel_id: HotelId) -> Self {
        Self {
            reservation_id,
            customer_id,
            hotel_id,
        }
    }
}

impl Record for Reservation {
    type Id = ReservationId;

    fn id(&self) -> ReservationId {
        self.reservation_id
    }
}

impl Display for Reservation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Customer: {} | Hotel: {}",
            self.reservation_id, self.customer_id, self.hotel_id
        )
    }
}
