//! Collection file layout for callers that keep every collection in one
//! directory.
//!
//! Stores accept any path; this is a convenience, not a requirement.

use crate::service::booking_service::BookingService;
use crate::store::customer_store::CustomerStore;
use crate::store::hotel_store::HotelStore;
use crate::store::reservation_store::ReservationStore;
use std::path::{Path, PathBuf};

pub const CUSTOMERS_FILE: &str = "customers.json";
pub const HOTELS_FILE: &str = "hotels.json";
pub const RESERVATIONS_FILE: &str = "reservations.json";

/// Paths of the three collection files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub customers: PathBuf,
    pub hotels: PathBuf,
    pub reservations: PathBuf,
}

impl DataPaths {
    /// Uses the default file names inside `dir`. The directory is not created.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            customers: dir.join(CUSTOMERS_FILE),
            hotels: dir.join(HOTELS_FILE),
            reservations: dir.join(RESERVATIONS_FILE),
        }
    }

    pub fn customer_store(&self) -> CustomerStore {
        CustomerStore::new(&self.customers)
    }

    pub fn hotel_store(&self) -> HotelStore {
        HotelStore::new(&self.hotels)
    }

    pub fn reservation_store(&self) -> ReservationStore {
        ReservationStore::new(&self.reservations)
    }

    pub fn booking_service(&self) -> BookingService {
        BookingService::new(self.hotel_store(), self.reservation_store())
    }
}

#[cfg(test)]
mod tests {
    use super::DataPaths;
    use std::path::Path;

    #[test]
    fn in_dir_uses_default_file_names() {
        let paths = DataPaths::in_dir("/var/lib/hotels");

        assert_eq!(paths.customers, Path::new("/var/lib/hotels/customers.json"));
        assert_eq!(paths.hotels, Path::new("/var/lib/hotels/hotels.json"));
        assert_eq!(
            paths.reservations,
            Path::new("/var/lib/hotels/reservations.json")
        );
        assert_eq!(paths.hotel_store().path(), paths.hotels.as_path());
    }
}
