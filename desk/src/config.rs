//! Startup configuration for both services.
//!
//! Defaults reproduce the sample hotel and market the console drivers start
//! with; callers override individual fields (the CLI does so from flags).

use crate::money::Cents;
use crate::rooms::Room;
use crate::stocks::Stock;

/// Rooms the hotel opens with.
#[derive(Clone, Debug)]
pub struct HotelConfig {
    pub rooms: Vec<Room>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            rooms: vec![
                Room::new(101, "Standard", Cents::from_dollars(100)),
                Room::new(102, "Deluxe", Cents::from_dollars(150)),
                Room::new(201, "Suite", Cents::from_dollars(250)),
            ],
        }
    }
}

/// Market listings, starting cash and price-walk bounds.
#[derive(Clone, Debug)]
pub struct MarketConfig {
    pub initial_cash: Cents,
    /// Largest fractional move per update, applied in both directions.
    pub max_move: f64,
    /// Prices never drop below this after an update.
    pub price_floor: Cents,
    pub listings: Vec<Stock>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            initial_cash: Cents::from_dollars(10_000),
            max_move: 0.05,
            price_floor: Cents::from_dollars(1),
            listings: vec![
                Stock::new("AAPL", "Apple Inc.", Cents::from_dollars(170)),
                Stock::new("GOOG", "Alphabet Inc.", Cents::from_dollars(2_800)),
                Stock::new("TSLA", "Tesla Inc.", Cents::from_dollars(700)),
                Stock::new("AMZN", "Amazon.com Inc.", Cents::from_dollars(3_300)),
                Stock::new("NFLX", "Netflix Inc.", Cents::from_dollars(350)),
            ],
        }
    }
}

impl MarketConfig {
    pub fn with_initial_cash(mut self, cash: Cents) -> Self {
        self.initial_cash = cash;
        self
    }
}
