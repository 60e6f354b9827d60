use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::error::{TradeError, TradeResult};
use crate::money::Cents;
use crate::stocks::Market;

/// Cash plus share counts per symbol.
///
/// A symbol is present in `holdings` only while its count is above zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    cash: Cents,
    holdings: BTreeMap<String, u32>,
}

/// An executed buy or sell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub symbol: String,
    pub shares: u32,
    pub price: Cents,
    pub amount: Cents, // shares * price
}

/// One holding priced against the market; price is zero for unlisted symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingView {
    pub symbol: String,
    pub shares: u32,
    pub price: Cents,
}

impl Portfolio {
    pub fn new(initial_cash: Cents) -> Self {
        Self {
            cash: initial_cash,
            holdings: BTreeMap::new(),
        }
    }

    pub fn cash(&self) -> Cents {
        self.cash
    }

    pub fn holdings(&self) -> &BTreeMap<String, u32> {
        &self.holdings
    }

    pub fn shares_of(&self, symbol: &str) -> u32 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Buys `shares` at `price`, rejecting the order if cash does not cover it.
    pub fn buy(&mut self, symbol: &str, shares: u32, price: Cents) -> TradeResult<Fill> {
        if shares == 0 {
            return Err(TradeError::InvalidShares);
        }
        let cost = price
            .checked_mul(i64::from(shares))
            .ok_or(TradeError::AmountOverflow)?;
        if cost > self.cash {
            warn!(symbol, shares, %cost, cash = %self.cash, "buy rejected, insufficient funds");
            return Err(TradeError::InsufficientFunds {
                cost,
                cash: self.cash,
            });
        }
        let held = self
            .shares_of(symbol)
            .checked_add(shares)
            .ok_or(TradeError::AmountOverflow)?;

        self.cash = Cents(self.cash.0 - cost.0);
        self.holdings.insert(symbol.to_string(), held);
        info!(symbol, shares, %price, cash = %self.cash, "bought");

        Ok(Fill {
            symbol: symbol.to_string(),
            shares,
            price,
            amount: cost,
        })
    }

    /// Sells `shares` at `price`; the symbol is dropped once none are left.
    pub fn sell(&mut self, symbol: &str, shares: u32, price: Cents) -> TradeResult<Fill> {
        if shares == 0 {
            return Err(TradeError::InvalidShares);
        }
        let held = self.shares_of(symbol);
        if shares > held {
            warn!(symbol, shares, held, "sell rejected, not enough shares");
            return Err(TradeError::InsufficientShares {
                symbol: symbol.to_string(),
                requested: shares,
                held,
            });
        }
        let proceeds = price
            .checked_mul(i64::from(shares))
            .ok_or(TradeError::AmountOverflow)?;
        let cash = self
            .cash
            .checked_add(proceeds)
            .ok_or(TradeError::AmountOverflow)?;

        self.cash = cash;
        let remaining = held - shares;
        if remaining == 0 {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.to_string(), remaining);
        }
        info!(symbol, shares, %price, cash = %self.cash, "sold");

        Ok(Fill {
            symbol: symbol.to_string(),
            shares,
            price,
            amount: proceeds,
        })
    }

    /// Cash plus every holding at its current market price. Symbols missing
    /// from the market contribute nothing.
    pub fn value(&self, market: &Market) -> Cents {
        self.holdings
            .iter()
            .filter_map(|(symbol, &shares)| {
                market
                    .price_of(symbol)
                    .map(|price| Cents(price.0.saturating_mul(i64::from(shares))))
            })
            .fold(self.cash, Cents::saturating_add)
    }

    /// Holdings in symbol order, priced against `market`.
    pub fn holdings_view(&self, market: &Market) -> Vec<HoldingView> {
        self.holdings
            .iter()
            .map(|(symbol, &shares)| HoldingView {
                symbol: symbol.clone(),
                shares,
                price: market.price_of(symbol).unwrap_or(Cents::ZERO),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stocks::Stock;

    const AAPL: Cents = Cents(17_000);

    #[test]
    fn buy_then_sell_round_trip() {
        let mut p = Portfolio::new(Cents::from_dollars(10_000));

        let fill = p.buy("AAPL", 10, AAPL).expect("affordable");
        assert_eq!(fill.amount, Cents::from_dollars(1_700));
        assert_eq!(p.cash(), Cents::from_dollars(8_300));
        assert_eq!(p.shares_of("AAPL"), 10);

        p.sell("AAPL", 10, AAPL).expect("shares held");
        assert_eq!(p.cash(), Cents::from_dollars(10_000));
        assert!(p.holdings().is_empty());
    }

    #[test]
    fn buy_rejected_when_cost_exceeds_cash() {
        let mut p = Portfolio::new(Cents::from_dollars(100));
        let err = p.buy("AAPL", 1, AAPL).unwrap_err();
        assert_eq!(
            err,
            TradeError::InsufficientFunds {
                cost: AAPL,
                cash: Cents::from_dollars(100),
            }
        );
        assert_eq!(p.cash(), Cents::from_dollars(100));
        assert!(!p.holdings().contains_key("AAPL"));
    }

    #[test]
    fn buy_exactly_all_cash() {
        let mut p = Portfolio::new(Cents(34_000));
        p.buy("AAPL", 2, AAPL).expect("cost equals cash");
        assert_eq!(p.cash(), Cents::ZERO);
    }

    #[test]
    fn buys_accumulate() {
        let mut p = Portfolio::new(Cents::from_dollars(10_000));
        p.buy("TSLA", 2, Cents::from_dollars(700)).expect("affordable");
        p.buy("TSLA", 3, Cents::from_dollars(710)).expect("affordable");
        assert_eq!(p.shares_of("TSLA"), 5);
        assert_eq!(p.cash(), Cents::from_dollars(10_000 - 1_400 - 2_130));
    }

    #[test]
    fn partial_sell_keeps_entry() {
        let mut p = Portfolio::new(Cents::from_dollars(10_000));
        p.buy("NFLX", 4, Cents::from_dollars(350)).expect("affordable");
        p.sell("NFLX", 1, Cents::from_dollars(360)).expect("shares held");
        assert_eq!(p.shares_of("NFLX"), 3);
        assert_eq!(p.cash(), Cents::from_dollars(10_000 - 1_400 + 360));
    }

    #[test]
    fn oversell_rejected_without_mutation() {
        let mut p = Portfolio::new(Cents::from_dollars(10_000));
        p.buy("AAPL", 2, AAPL).expect("affordable");
        let before = p.clone();

        let err = p.sell("AAPL", 3, AAPL).unwrap_err();
        assert_eq!(
            err,
            TradeError::InsufficientShares {
                symbol: "AAPL".into(),
                requested: 3,
                held: 2,
            }
        );
        assert_eq!(p, before);

        assert!(p.sell("GOOG", 1, Cents::from_dollars(2_800)).is_err());
        assert_eq!(p, before);
    }

    #[test]
    fn zero_shares_rejected() {
        let mut p = Portfolio::new(Cents::from_dollars(10_000));
        assert_eq!(p.buy("AAPL", 0, AAPL), Err(TradeError::InvalidShares));
        assert_eq!(p.sell("AAPL", 0, AAPL), Err(TradeError::InvalidShares));
        assert!(p.holdings().is_empty());
    }

    #[test]
    fn overflowing_cost_rejected() {
        let mut p = Portfolio::new(Cents(i64::MAX));
        assert_eq!(
            p.buy("AAPL", u32::MAX, Cents(i64::MAX / 2)),
            Err(TradeError::AmountOverflow)
        );
        assert_eq!(p.cash(), Cents(i64::MAX));
    }

    #[test]
    fn value_uses_market_prices() {
        let mut market = Market::from_listings(vec![
            Stock::new("AAPL", "Apple Inc.", AAPL),
            Stock::new("TSLA", "Tesla Inc.", Cents::from_dollars(700)),
        ]);
        let mut p = Portfolio::new(Cents::from_dollars(10_000));
        p.buy("AAPL", 10, AAPL).expect("affordable");
        p.buy("GONE", 1, Cents::from_dollars(5)).expect("affordable");
        assert_eq!(p.value(&market), Cents::from_dollars(8_295 + 1_700));

        if let Some(stock) = market.get_mut("AAPL") {
            stock.price = Cents::from_dollars(200);
        }
        assert_eq!(p.value(&market), Cents::from_dollars(8_295 + 2_000));

        let view = p.holdings_view(&market);
        assert_eq!(
            view,
            vec![
                HoldingView {
                    symbol: "AAPL".into(),
                    shares: 10,
                    price: Cents::from_dollars(200),
                },
                HoldingView {
                    symbol: "GONE".into(),
                    shares: 1,
                    price: Cents::ZERO,
                },
            ]
        );
    }
}
