//! Market-data API clients

pub mod yahoo;

pub use yahoo::{ChartInterval, QuoteError, YahooClient};
