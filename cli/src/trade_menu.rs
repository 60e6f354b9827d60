//! Menu-driven front end for the trading simulator.

use desk::{MarketService, PriceWalk, TradeError};
use std::io::{self, BufRead, Write};

use crate::console::{drive, Console, Flow, PromptResult};

#[derive(Clone, Copy)]
enum Side {
    Buy,
    Sell,
}

impl Side {
    fn verb(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

/// Runs the trading menu. Prices move once per cycle, before the menu shows.
pub fn run<P: PriceWalk, R: BufRead, W: Write>(
    svc: &mut MarketService<P>,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    drive(console, |console| {
        svc.update_prices();
        print_menu(console.out())?;
        let choice: u32 = console.read_parsed("Select option: ", "option")?;
        match choice {
            1 => view_market_data(svc, console.out())?,
            2 => trade(svc, console, Side::Buy)?,
            3 => trade(svc, console, Side::Sell)?,
            4 => view_portfolio(svc, console.out())?,
            5 => return Ok(Flow::Exit),
            _ => writeln!(console.out(), "Invalid option.")?,
        }
        Ok(Flow::Continue)
    })
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Stock Trading Platform ---")?;
    writeln!(out, "1. View Market Data")?;
    writeln!(out, "2. Buy Stock")?;
    writeln!(out, "3. Sell Stock")?;
    writeln!(out, "4. View Portfolio")?;
    writeln!(out, "5. Exit")
}

fn view_market_data<P: PriceWalk, W: Write>(
    svc: &MarketService<P>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Market Data:")?;
    for stock in svc.market().iter() {
        writeln!(out, "{stock}")?;
    }
    Ok(())
}

fn trade<P: PriceWalk, R: BufRead, W: Write>(
    svc: &mut MarketService<P>,
    console: &mut Console<R, W>,
    side: Side,
) -> PromptResult<()> {
    let verb = side.verb();
    let symbol = console
        .read_line(&format!("Enter stock symbol to {verb}: "))?
        .to_uppercase();
    if svc.quote(&symbol).is_none() {
        writeln!(console.out(), "Stock not found.")?;
        return Ok(());
    }

    let shares: i64 = console.read_parsed(
        &format!("Enter number of shares to {verb}: "),
        "number of shares",
    )?;
    let Some(shares) = u32::try_from(shares).ok().filter(|&n| n > 0) else {
        writeln!(console.out(), "Invalid number of shares.")?;
        return Ok(());
    };

    let result = match side {
        Side::Buy => svc.buy_at_market(&symbol, shares),
        Side::Sell => svc.sell_at_market(&symbol, shares),
    };
    let out = console.out();
    match result {
        Ok(fill) => {
            let past = match side {
                Side::Buy => "Bought",
                Side::Sell => "Sold",
            };
            writeln!(out, "{past} {} shares of {} at {}", fill.shares, fill.symbol, fill.price)?
        }
        Err(TradeError::InsufficientFunds { .. }) => writeln!(out, "Insufficient funds.")?,
        Err(TradeError::InsufficientShares { .. }) => {
            writeln!(out, "Not enough shares to sell.")?
        }
        Err(err) => writeln!(out, "Trade rejected: {err}")?,
    }
    Ok(())
}

fn view_portfolio<P: PriceWalk, W: Write>(
    svc: &MarketService<P>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Cash balance: {}", svc.portfolio().cash())?;
    writeln!(out, "Holdings:")?;
    let holdings = svc.holdings_view();
    if holdings.is_empty() {
        writeln!(out, "  None")?;
    }
    for holding in holdings {
        writeln!(
            out,
            "  {}: {} shares (Current price: {})",
            holding.symbol, holding.shares, holding.price
        )?;
    }
    writeln!(out, "Total portfolio value: {}", svc.portfolio_value())
}
