//! Front desk walkthrough
//!
//! Runs a scripted session against both services with the sample data:
//! a reservation with a short and then a full payment, followed by a few
//! market cycles with a buy and a sell.

use chrono::NaiveDate;
use desk::{
    Cents, Customer, HotelConfig, HotelService, MarketConfig, MarketService, RoomId, StayDates,
};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset; keeps the walkthrough output clean.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Main entry point - runs both demos.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Front Desk Walkthrough ===");

    println!("\n=== Hotel Demo ===");
    run_hotel_demo()?;

    println!("\n=== Trading Demo ===");
    run_trading_demo()?;

    Ok(())
}

/// Books the standard room for three nights and pays for it.
fn run_hotel_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut hotel = HotelService::with_config(HotelConfig::default());

    let stay = StayDates::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad check-in date")?,
        NaiveDate::from_ymd_opt(2024, 1, 4).ok_or("bad check-out date")?,
    );

    println!("Standard rooms free for {stay}:");
    for room in hotel.search_available_rooms("standard", stay) {
        println!("  Room {} ({}) - {}/night", room.id, room.category, room.price_per_night);
    }

    let customer = Customer::new(
        hotel.next_customer_id(),
        "Ada Lovelace",
        "ada@example.com",
        "555-0100",
    );
    let booking = hotel.make_reservation(customer, RoomId(101), stay)?;
    let (booking_id, total) = (booking.id, booking.total());
    println!("Reserved booking {booking_id}, total due {total}");

    // Same room again is refused
    let walk_in = Customer::new(hotel.next_customer_id(), "Bob", "bob@example.com", "555-0101");
    if let Err(err) = hotel.make_reservation(walk_in, RoomId(101), stay) {
        println!("Second reservation refused: {err}");
    }

    let short = total.checked_sub(Cents(1)).ok_or("total out of range")?;
    if let Err(err) = hotel.process_payment(booking_id, short) {
        println!("Payment of {short} refused: {err}");
    }
    hotel.process_payment(booking_id, total)?;

    let booking = hotel
        .get_booking_details(booking_id)
        .ok_or("booking disappeared")?;
    println!("Booking after payment:");
    println!("{}", serde_json::to_string_pretty(booking)?);

    Ok(())
}

/// Trades AAPL across a few seeded market cycles.
fn run_trading_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut market = MarketService::seeded(MarketConfig::default(), 2024);

    println!("Opening prices:");
    for stock in market.market().iter() {
        println!("  {stock}");
    }

    market.update_prices();
    let fill = market.buy_at_market("AAPL", 10)?;
    println!("Bought {} {} at {} ({})", fill.shares, fill.symbol, fill.price, fill.amount);

    if let Err(err) = market.buy_at_market("AMZN", 5) {
        println!("Order refused: {err}");
    }

    for _ in 0..3 {
        market.update_prices();
    }
    println!("Portfolio value after three cycles: {}", market.portfolio_value());

    let fill = market.sell_at_market("AAPL", 10)?;
    println!("Sold {} {} at {} ({})", fill.shares, fill.symbol, fill.price, fill.amount);

    println!("Closing portfolio:");
    println!("{}", serde_json::to_string_pretty(market.portfolio())?);

    Ok(())
}
