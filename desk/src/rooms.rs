use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Cents;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookingId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId, // assigned by whoever seeds the hotel
    pub category: String,
    pub price_per_night: Cents,
    pub available: bool,
}

impl Room {
    /// Creates an available room.
    pub fn new(id: u32, category: impl Into<String>, price_per_night: Cents) -> Self {
        Self {
            id: RoomId(id),
            category: category.into(),
            price_per_night,
            available: true,
        }
    }

    /// Case-insensitive category match ("suite" matches "Suite").
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Check-in and check-out dates of a stay. Ordering is not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayDates {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Calendar days between check-in and check-out; negative if reversed.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

impl fmt::Display for StayDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.check_in, self.check_out)
    }
}

/// A reservation of one room by one customer.
///
/// The room's id, category and nightly rate are captured when the booking
/// is made; rooms are owned by the hotel service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub customer: Customer,
    pub room_id: RoomId,
    pub room_category: String,
    pub price_per_night: Cents,
    pub stay: StayDates,
    pub paid: bool,
}

impl Booking {
    pub fn nights(&self) -> i64 {
        self.stay.nights()
    }

    /// Nights times the nightly rate.
    pub fn total(&self) -> Cents {
        Cents(self.price_per_night.0.saturating_mul(self.nights()))
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    pub fn payment_status(&self) -> &'static str {
        if self.paid {
            "Paid"
        } else {
            "Pending"
        }
    }
}
