//! Menu-driven front end for the hotel reservation tracker.

use desk::{BookingId, Cents, Customer, HotelError, HotelService, RoomId, StayDates};
use std::io::{self, BufRead, Write};

use crate::console::{drive, Console, Flow, PromptResult};

pub fn run<R: BufRead, W: Write>(
    hotel: &mut HotelService,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    drive(console, |console| {
        print_menu(console.out())?;
        let choice: u32 = console.read_parsed("Select option: ", "option")?;
        match choice {
            1 => search_rooms(hotel, console)?,
            2 => make_reservation(hotel, console)?,
            3 => view_booking_details(hotel, console)?,
            4 => process_payment(hotel, console)?,
            5 => {
                writeln!(console.out(), "Exiting system...")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(console.out(), "Invalid option!")?,
        }
        Ok(Flow::Continue)
    })
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Hotel Reservation System ===")?;
    writeln!(out, "1. Search Available Rooms")?;
    writeln!(out, "2. Make Reservation")?;
    writeln!(out, "3. View Booking Details")?;
    writeln!(out, "4. Process Payment")?;
    writeln!(out, "5. Exit")
}

fn read_stay<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    check_in_label: &str,
    check_out_label: &str,
) -> PromptResult<StayDates> {
    let check_in = console.read_date(check_in_label)?;
    let check_out = console.read_date(check_out_label)?;
    Ok(StayDates::new(check_in, check_out))
}

fn search_rooms<R: BufRead, W: Write>(
    hotel: &HotelService,
    console: &mut Console<R, W>,
) -> PromptResult<()> {
    let stay = read_stay(
        console,
        "Enter check-in date (YYYY-MM-DD): ",
        "Enter check-out date (YYYY-MM-DD): ",
    )?;
    let category = console.read_line("Enter room category (Standard/Deluxe/Suite): ")?;

    let rooms = hotel.search_available_rooms(&category, stay);
    let out = console.out();
    writeln!(out, "\nAvailable Rooms:")?;
    for room in rooms {
        writeln!(
            out,
            "Room {} ({}) - {}/night",
            room.id, room.category, room.price_per_night
        )?;
    }
    Ok(())
}

fn make_reservation<R: BufRead, W: Write>(
    hotel: &mut HotelService,
    console: &mut Console<R, W>,
) -> PromptResult<()> {
    let room_id = RoomId(console.read_parsed("Enter room ID: ", "room ID")?);
    if !hotel.find_room_by_id(room_id).is_some_and(|room| room.available) {
        writeln!(console.out(), "Invalid or unavailable room!")?;
        return Ok(());
    }

    writeln!(console.out(), "Enter customer details:")?;
    let name = console.read_line("Name: ")?;
    let email = console.read_line("Email: ")?;
    let phone = console.read_line("Phone: ")?;
    let stay = read_stay(
        console,
        "Check-in date (YYYY-MM-DD): ",
        "Check-out date (YYYY-MM-DD): ",
    )?;

    let customer = Customer::new(hotel.next_customer_id(), name, email, phone);
    let booking_id = match hotel.make_reservation(customer, room_id, stay) {
        Ok(booking) => booking.id,
        Err(_) => {
            writeln!(console.out(), "Reservation failed!")?;
            return Ok(());
        }
    };
    writeln!(console.out(), "Reservation successful! Booking ID: {booking_id}")?;

    pay_for_booking(hotel, console, booking_id)
}

fn pay_for_booking<R: BufRead, W: Write>(
    hotel: &mut HotelService,
    console: &mut Console<R, W>,
    booking_id: BookingId,
) -> PromptResult<()> {
    let Some(booking) = hotel.get_booking_details(booking_id) else {
        writeln!(console.out(), "Booking not found!")?;
        return Ok(());
    };
    writeln!(console.out(), "Total amount due: {}", booking.total())?;

    let amount: Cents = console.read_parsed("Enter payment amount: ", "amount")?;
    match hotel.process_payment(booking_id, amount) {
        Ok(()) => writeln!(console.out(), "Payment successful!")?,
        Err(HotelError::InsufficientPayment { .. }) => {
            writeln!(console.out(), "Payment failed! Insufficient amount.")?
        }
        Err(err) => writeln!(console.out(), "Payment failed! {err}")?,
    }
    Ok(())
}

fn view_booking_details<R: BufRead, W: Write>(
    hotel: &HotelService,
    console: &mut Console<R, W>,
) -> PromptResult<()> {
    let booking_id = BookingId(console.read_parsed("Enter booking ID: ", "booking ID")?);
    let out = console.out();
    let Some(booking) = hotel.get_booking_details(booking_id) else {
        writeln!(out, "Booking not found!")?;
        return Ok(());
    };

    writeln!(out, "\nBooking Details:")?;
    writeln!(out, "ID: {}", booking.id)?;
    writeln!(out, "Room: {} (ID: {})", booking.room_category, booking.room_id)?;
    writeln!(out, "Dates: {}", booking.stay)?;
    writeln!(out, "Customer: {}", booking.customer.name)?;
    writeln!(out, "Payment Status: {}", booking.payment_status())?;
    Ok(())
}

fn process_payment<R: BufRead, W: Write>(
    hotel: &mut HotelService,
    console: &mut Console<R, W>,
) -> PromptResult<()> {
    let booking_id = BookingId(console.read_parsed("Enter booking ID: ", "booking ID")?);
    pay_for_booking(hotel, console, booking_id)
}
