use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::money::Cents;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub price: Cents,
}

impl Stock {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price: Cents) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
        }
    }

    /// Scales the price by `1 + change`, rounds to the cent and clamps at
    /// `floor`. Returns the new price.
    pub fn apply_change(&mut self, change: f64, floor: Cents) -> Cents {
        let moved = (self.price.0 as f64 * (1.0 + change)).round() as i64;
        self.price = Cents(moved).max(floor);
        self.price
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.symbol, self.name, self.price)
    }
}

/// Tradable stocks keyed by symbol, iterated in symbol order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    stocks: BTreeMap<String, Stock>,
}

impl Market {
    /// Creates an empty market.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a market from listings; a repeated symbol replaces the earlier one.
    pub fn from_listings(listings: impl IntoIterator<Item = Stock>) -> Self {
        let mut market = Self::new();
        for stock in listings {
            market.list(stock);
        }
        market
    }

    /// Adds a stock, replacing any listing with the same symbol.
    pub fn list(&mut self, stock: Stock) {
        self.stocks.insert(stock.symbol.clone(), stock);
    }

    /// Stock listed under `symbol`, if any.
    pub fn get(&self, symbol: &str) -> Option<&Stock> {
        self.stocks.get(symbol)
    }

    /// Mutable access to the stock listed under `symbol`.
    pub fn get_mut(&mut self, symbol: &str) -> Option<&mut Stock> {
        self.stocks.get_mut(symbol)
    }

    /// Current price of `symbol`, if listed.
    pub fn price_of(&self, symbol: &str) -> Option<Cents> {
        self.get(symbol).map(|stock| stock.price)
    }

    /// Stocks in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &Stock> {
        self.stocks.values()
    }

    /// Mutable stocks in symbol order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Stock> {
        self.stocks.values_mut()
    }

    /// Number of listed stocks.
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}
