//! Simulated market: a randomized price walk over the listed stocks and a
//! single portfolio trading against current prices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::config::MarketConfig;
use crate::error::{TradeError, TradeResult};
use crate::money::Cents;
use crate::portfolio::{Fill, HoldingView, Portfolio};
use crate::stocks::{Market, Stock};

/// Source of per-update price changes.
pub trait PriceWalk {
    /// Returns a fractional change within `[-max_move, max_move]`.
    fn next_change(&mut self, max_move: f64) -> f64;
}

/// Uniform price walk backed by a `rand` generator.
pub struct RandomWalk<R = StdRng> {
    rng: R,
}

impl RandomWalk<StdRng> {
    /// Reproducible walk: the same seed yields the same sequence of moves.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomWalk<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PriceWalk for RandomWalk<R> {
    fn next_change(&mut self, max_move: f64) -> f64 {
        let bound = max_move.abs();
        if !bound.is_finite() {
            return 0.0;
        }
        self.rng.random_range(-bound..=bound)
    }
}

/// Applies one walk step to `stock`, never letting the price fall below `floor`.
///
/// The walk's change is clamped to `[-max_move, max_move]`; a non-finite
/// change leaves the price where it is.
pub fn update_price<W: PriceWalk + ?Sized>(
    stock: &mut Stock,
    walk: &mut W,
    max_move: f64,
    floor: Cents,
) -> Cents {
    let bound = max_move.abs();
    let raw = walk.next_change(bound);
    let change = if raw.is_finite() {
        raw.clamp(-bound, bound)
    } else {
        0.0
    };
    let before = stock.price;
    let after = stock.apply_change(change, floor);
    debug!(symbol = %stock.symbol, %before, %after, change, "price update");
    after
}

/// The market and the portfolio trading against it.
pub struct MarketService<W = RandomWalk> {
    market: Market,
    portfolio: Portfolio,
    walk: W,
    max_move: f64,
    price_floor: Cents,
}

impl MarketService<RandomWalk> {
    /// Market driven by OS entropy.
    pub fn new(config: MarketConfig) -> Self {
        Self::with_walk(config, RandomWalk::from_entropy())
    }

    pub fn seeded(config: MarketConfig, seed: u64) -> Self {
        Self::with_walk(config, RandomWalk::seeded(seed))
    }
}

impl<W: PriceWalk> MarketService<W> {
    /// Builds the service around `walk`. A `max_move` that is not a finite
    /// number falls back to the default bound.
    pub fn with_walk(config: MarketConfig, walk: W) -> Self {
        let max_move = if config.max_move.is_finite() {
            config.max_move.abs()
        } else {
            let fallback = MarketConfig::default().max_move;
            warn!(max_move = config.max_move, fallback, "invalid max move, using default");
            fallback
        };
        Self {
            market: Market::from_listings(config.listings),
            portfolio: Portfolio::new(config.initial_cash),
            walk,
            max_move,
            price_floor: config.price_floor,
        }
    }

    /// Moves a single stock's price. `None` if the symbol is not listed.
    pub fn update_price(&mut self, symbol: &str) -> Option<Cents> {
        let stock = self.market.get_mut(symbol)?;
        Some(update_price(
            stock,
            &mut self.walk,
            self.max_move,
            self.price_floor,
        ))
    }

    /// One market cycle: every stock moves once, in symbol order.
    pub fn update_prices(&mut self) {
        for stock in self.market.iter_mut() {
            update_price(stock, &mut self.walk, self.max_move, self.price_floor);
        }
    }

    /// Current listing for `symbol`, if any.
    pub fn quote(&self, symbol: &str) -> Option<&Stock> {
        self.market.get(symbol)
    }

    /// Buys at the symbol's current price.
    pub fn buy_at_market(&mut self, symbol: &str, shares: u32) -> TradeResult<Fill> {
        let price = self.current_price(symbol)?;
        self.portfolio.buy(symbol, shares, price)
    }

    /// Sells at the symbol's current price.
    pub fn sell_at_market(&mut self, symbol: &str, shares: u32) -> TradeResult<Fill> {
        let price = self.current_price(symbol)?;
        self.portfolio.sell(symbol, shares, price)
    }

    /// Cash plus holdings at current prices.
    pub fn portfolio_value(&self) -> Cents {
        self.portfolio.value(&self.market)
    }

    /// Holdings priced at current market prices.
    pub fn holdings_view(&self) -> Vec<HoldingView> {
        self.portfolio.holdings_view(&self.market)
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    fn current_price(&self, symbol: &str) -> TradeResult<Cents> {
        self.market
            .price_of(symbol)
            .ok_or_else(|| TradeError::UnknownSymbol(symbol.to_string()))
    }
}
