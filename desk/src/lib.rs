//! In-memory front desk for two small simulations.
//!
//! Core features:
//! - Hotel reservations: room search by category, reservation, payment
//! - Stock trading: randomized price walk, buy/sell against a cash portfolio
//! - Integer cent arithmetic for every monetary amount
//!
//! Both services own their state outright and never touch a console, so they
//! can be driven from tests or from the `desk-cli` menus alike. The two
//! domains do not depend on each other.

pub mod config;
pub mod error;
pub mod money;

pub mod rooms;
pub use rooms::{Booking, BookingId, Customer, CustomerId, Room, RoomId, StayDates};
pub mod hotel;
pub use hotel::HotelService;

pub mod stocks;
pub use stocks::{Market, Stock};
pub mod portfolio;
pub use portfolio::{Fill, HoldingView, Portfolio};
pub mod market;
pub use market::{MarketService, PriceWalk, RandomWalk};

pub use config::{HotelConfig, MarketConfig};
pub use error::{HotelError, HotelResult, ParseCentsError, TradeError, TradeResult};
pub use money::Cents;
