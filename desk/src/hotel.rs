use tracing::{debug, info, warn};

use crate::config::HotelConfig;
use crate::error::{HotelError, HotelResult};
use crate::money::Cents;
use crate::rooms::{Booking, BookingId, Customer, CustomerId, Room, RoomId, StayDates};

/// Rooms, customers and bookings of one hotel.
///
/// Customer and booking ids come from counters owned here, starting at 1.
/// A reserved room stays unavailable for the lifetime of the service; there
/// is no check-out operation.
pub struct HotelService {
    rooms: Vec<Room>,
    customers: Vec<Customer>,
    bookings: Vec<Booking>,
    next_customer_id: u32,
    next_booking_id: u32,
}

impl HotelService {
    /// Creates a hotel with no rooms.
    pub fn new() -> Self {
        Self {
            rooms: Vec::new(),
            customers: Vec::new(),
            bookings: Vec::new(),
            next_customer_id: 1,
            next_booking_id: 1,
        }
    }

    /// Creates a hotel seeded with the configured rooms.
    pub fn with_config(config: HotelConfig) -> Self {
        let mut hotel = Self::new();
        for room in config.rooms {
            hotel.add_room(room);
        }
        hotel
    }

    /// Appends a room. Ids are not checked for duplicates.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Available rooms whose category matches, in insertion order.
    ///
    /// The stay is accepted but does not filter: availability is the room's
    /// flag alone, there is no overlap check against existing bookings.
    pub fn search_available_rooms(&self, category: &str, stay: StayDates) -> Vec<&Room> {
        let found: Vec<&Room> = self
            .rooms
            .iter()
            .filter(|room| room.available && room.matches_category(category))
            .collect();
        debug!(category, %stay, matches = found.len(), "room search");
        found
    }

    /// First room with the given id, if any.
    pub fn find_room_by_id(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Books `room_id` for `customer` and marks the room unavailable.
    ///
    /// Fails without touching any collection if the room is missing or
    /// already taken. The booking starts unpaid.
    pub fn make_reservation(
        &mut self,
        customer: Customer,
        room_id: RoomId,
        stay: StayDates,
    ) -> HotelResult<&Booking> {
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.id == room_id)
            .ok_or(HotelError::RoomNotFound(room_id))?;

        if !room.available {
            warn!(room = %room_id, "reservation rejected, room unavailable");
            return Err(HotelError::RoomUnavailable(room_id));
        }
        if stay.nights() <= 0 {
            warn!(room = %room_id, %stay, "check-out is not after check-in");
        }

        room.available = false;
        let booking = Booking {
            id: BookingId(self.next_booking_id),
            customer: customer.clone(),
            room_id,
            room_category: room.category.clone(),
            price_per_night: room.price_per_night,
            stay,
            paid: false,
        };
        self.next_booking_id += 1;

        info!(
            booking = %booking.id,
            room = %room_id,
            customer = %customer.name,
            %stay,
            "reservation made"
        );
        self.customers.push(customer);

        let idx = self.bookings.len();
        self.bookings.push(booking);
        Ok(&self.bookings[idx])
    }

    /// First booking with the given id, if any.
    pub fn get_booking_details(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|booking| booking.id == id)
    }

    /// Marks the booking paid if `amount` covers its full total.
    ///
    /// Each call is judged on its own; short payments are not accumulated.
    pub fn process_payment(&mut self, id: BookingId, amount: Cents) -> HotelResult<()> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or(HotelError::BookingNotFound(id))?;

        let due = booking.total();
        if amount < due {
            warn!(booking = %id, %due, offered = %amount, "payment rejected");
            return Err(HotelError::InsufficientPayment {
                due,
                offered: amount,
            });
        }

        booking.paid = true;
        info!(booking = %id, %amount, "payment accepted");
        Ok(())
    }

    /// Returns the next customer id and advances the counter.
    pub fn next_customer_id(&mut self) -> CustomerId {
        let id = CustomerId(self.next_customer_id);
        self.next_customer_id += 1;
        id
    }

    /// All rooms in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Customers registered by successful reservations.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Bookings in the order they were made.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

impl Default for HotelService {
    fn default() -> Self {
        Self::with_config(HotelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stay(from: (i32, u32, u32), to: (i32, u32, u32)) -> StayDates {
        StayDates::new(
            NaiveDate::from_ymd_opt(from.0, from.1, from.2).expect("valid date"),
            NaiveDate::from_ymd_opt(to.0, to.1, to.2).expect("valid date"),
        )
    }

    fn jan_stay() -> StayDates {
        stay((2024, 1, 1), (2024, 1, 4))
    }

    fn guest(hotel: &mut HotelService, name: &str) -> Customer {
        let id = hotel.next_customer_id();
        Customer::new(id, name, format!("{name}@example.com"), "555-0100")
    }

    #[test]
    fn seeded_hotel_has_three_rooms() {
        let hotel = HotelService::default();
        let ids: Vec<u32> = hotel.rooms().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![101, 102, 201]);
        assert!(hotel.rooms().iter().all(|r| r.available));
    }

    #[test]
    fn search_matches_category_in_insertion_order() {
        let mut hotel = HotelService::new();
        hotel.add_room(Room::new(301, "Deluxe", Cents::from_dollars(150)));
        hotel.add_room(Room::new(101, "Standard", Cents::from_dollars(100)));
        hotel.add_room(Room::new(102, "deluxe", Cents::from_dollars(160)));

        let found = hotel.search_available_rooms("DELUXE", jan_stay());
        let ids: Vec<u32> = found.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![301, 102]);

        assert!(hotel.search_available_rooms("Penthouse", jan_stay()).is_empty());
    }

    #[test]
    fn search_ignores_requested_dates() {
        let hotel = HotelService::default();
        let far_future = stay((2030, 6, 1), (2030, 6, 2));
        assert_eq!(hotel.search_available_rooms("suite", far_future).len(), 1);
        assert_eq!(hotel.search_available_rooms("suite", jan_stay()).len(), 1);
    }

    #[test]
    fn reservation_takes_room_off_the_market() {
        let mut hotel = HotelService::default();
        let customer = guest(&mut hotel, "ada");

        let booking = hotel
            .make_reservation(customer, RoomId(101), jan_stay())
            .expect("room is free");
        assert_eq!(booking.id, BookingId(1));
        assert!(!booking.paid);
        assert_eq!(booking.total(), Cents(30_000));

        let room = hotel.find_room_by_id(RoomId(101)).expect("room exists");
        assert!(!room.available);
        // No later stay brings it back.
        let later = stay((2025, 1, 1), (2025, 1, 2));
        assert!(hotel.search_available_rooms("Standard", later).is_empty());
        assert_eq!(hotel.customers().len(), 1);
    }

    #[test]
    fn reserving_taken_room_fails_without_mutation() {
        let mut hotel = HotelService::default();
        let first = guest(&mut hotel, "ada");
        hotel
            .make_reservation(first, RoomId(102), jan_stay())
            .expect("room is free");

        let second = guest(&mut hotel, "bob");
        let err = hotel
            .make_reservation(second, RoomId(102), jan_stay())
            .unwrap_err();
        assert_eq!(err, HotelError::RoomUnavailable(RoomId(102)));
        assert_eq!(hotel.bookings().len(), 1);
        assert_eq!(hotel.customers().len(), 1);
    }

    #[test]
    fn reserving_missing_room_is_not_found() {
        let mut hotel = HotelService::default();
        let customer = guest(&mut hotel, "ada");
        let err = hotel
            .make_reservation(customer, RoomId(999), jan_stay())
            .unwrap_err();
        assert_eq!(err, HotelError::RoomNotFound(RoomId(999)));
        assert!(hotel.bookings().is_empty());
    }

    #[test]
    fn booking_ids_increase_monotonically() {
        let mut hotel = HotelService::default();
        let mut ids = Vec::new();
        for room in [101, 102, 201] {
            let customer = guest(&mut hotel, "guest");
            let booking = hotel
                .make_reservation(customer, RoomId(room), jan_stay())
                .expect("room is free");
            ids.push(booking.id.0);
        }
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn failed_reservation_does_not_consume_booking_id() {
        let mut hotel = HotelService::default();
        let ada = guest(&mut hotel, "ada");
        hotel
            .make_reservation(ada, RoomId(101), jan_stay())
            .expect("room is free");
        let bob = guest(&mut hotel, "bob");
        assert!(hotel.make_reservation(bob.clone(), RoomId(101), jan_stay()).is_err());

        let booking = hotel
            .make_reservation(bob, RoomId(201), jan_stay())
            .expect("room is free");
        assert_eq!(booking.id, BookingId(2));
    }

    #[test]
    fn customer_ids_start_at_one() {
        let mut hotel = HotelService::new();
        assert_eq!(hotel.next_customer_id(), CustomerId(1));
        assert_eq!(hotel.next_customer_id(), CustomerId(2));
        assert_eq!(hotel.next_customer_id(), CustomerId(3));
    }

    #[test]
    fn exact_payment_succeeds() {
        let mut hotel = HotelService::default();
        let customer = guest(&mut hotel, "ada");
        let id = hotel
            .make_reservation(customer, RoomId(101), jan_stay())
            .expect("room is free")
            .id;

        hotel
            .process_payment(id, Cents(30_000))
            .expect("exact amount covers the total");
        assert!(hotel.get_booking_details(id).expect("booking exists").is_paid());
    }

    #[test]
    fn one_cent_short_fails_and_stays_pending() {
        let mut hotel = HotelService::default();
        let customer = guest(&mut hotel, "ada");
        let id = hotel
            .make_reservation(customer, RoomId(101), jan_stay())
            .expect("room is free")
            .id;

        let err = hotel.process_payment(id, Cents(29_999)).unwrap_err();
        assert_eq!(
            err,
            HotelError::InsufficientPayment {
                due: Cents(30_000),
                offered: Cents(29_999),
            }
        );
        assert!(!hotel.get_booking_details(id).expect("booking exists").paid);

        // Partial payments do not add up.
        assert!(hotel.process_payment(id, Cents(1)).is_err());
        assert!(!hotel.get_booking_details(id).expect("booking exists").paid);
    }

    #[test]
    fn overpayment_is_accepted() {
        let mut hotel = HotelService::default();
        let customer = guest(&mut hotel, "ada");
        let id = hotel
            .make_reservation(customer, RoomId(201), jan_stay())
            .expect("room is free")
            .id;
        assert!(hotel.process_payment(id, Cents::from_dollars(1_000)).is_ok());
    }

    #[test]
    fn unknown_booking_lookups() {
        let mut hotel = HotelService::default();
        assert!(hotel.get_booking_details(BookingId(7)).is_none());
        assert_eq!(
            hotel.process_payment(BookingId(7), Cents(100)),
            Err(HotelError::BookingNotFound(BookingId(7)))
        );
        assert!(hotel.find_room_by_id(RoomId(404)).is_none());
    }
}
