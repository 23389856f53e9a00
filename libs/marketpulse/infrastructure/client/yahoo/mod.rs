//! Yahoo Finance chart API client and types
//!
//! The v8 chart endpoint serves the closing-price series the dashboard
//! plots. Requests block the caller; the monitor loop is synchronous.

pub mod client;
pub mod types;

pub use client::{QuoteError, Result, YahooClient};
pub use types::{ChartInterval, ChartResponse};
