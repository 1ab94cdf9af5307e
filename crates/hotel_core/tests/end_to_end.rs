use hotel_core::{Customer, DataPaths, Hotel, HotelPatch, Reservation};
use tempfile::TempDir;

#[test]
fn customer_hotel_reservation_lifecycle() {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::in_dir(dir.path());

    let customers = paths.customer_store();
    let input = Customer::new(101, "Juan Perez", "juan@mail.com");
    customers.create(input.clone()).unwrap();
    assert_eq!(customers.load(), vec![input]);

    let hotels = paths.hotel_store();
    hotels
        .create(Hotel::new(1, "Playa Azul", "Cancun", 10))
        .unwrap();
    hotels
        .modify(1, &HotelPatch::default().rooms(20).name("Modificado"))
        .unwrap();
    assert_eq!(
        hotels.load(),
        vec![Hotel::new(1, "Modificado", "Cancun", 20)]
    );

    let reservations = paths.reservation_store();
    reservations.create(Reservation::new(500, 101, 1)).unwrap();
    reservations.cancel(500).unwrap();
    assert!(reservations.load().is_empty());
}

#[test]
fn collections_are_independent_files() {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::in_dir(dir.path());

    paths
        .customer_store()
        .create(Customer::new(1, "Ana", "ana@mail.com"))
        .unwrap();
    std::fs::write(&paths.hotels, "{ broken").unwrap();

    assert!(paths.hotel_store().load().is_empty());
    assert_eq!(paths.customer_store().load().len(), 1);
    assert!(paths.reservation_store().load().is_empty());
}
