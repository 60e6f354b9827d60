use thiserror::Error;

use crate::money::Cents;
use crate::rooms::{BookingId, RoomId};

/// Rejections from the hotel service. None of them mutate state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotelError {
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    #[error("room {0} is not available")]
    RoomUnavailable(RoomId),

    #[error("booking {0} not found")]
    BookingNotFound(BookingId),

    #[error("insufficient payment: {offered} offered, {due} due")]
    InsufficientPayment { due: Cents, offered: Cents },
}

/// Rejections from the portfolio and market service. None of them mutate state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("share count must be positive")]
    InvalidShares,

    #[error("insufficient funds: {cost} needed, {cash} available")]
    InsufficientFunds { cost: Cents, cash: Cents },

    #[error("not enough {symbol} shares: {requested} requested, {held} held")]
    InsufficientShares {
        symbol: String,
        requested: u32,
        held: u32,
    },

    #[error("amount out of range")]
    AmountOverflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    #[error("empty amount")]
    Empty,

    #[error("invalid amount: {0}")]
    Invalid(String),

    #[error("amount has more than two decimals: {0}")]
    TooPrecise(String),
}

pub type HotelResult<T> = Result<T, HotelError>;
pub type TradeResult<T> = Result<T, TradeError>;
