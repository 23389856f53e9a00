//! MarketPulse Monitor
//!
//! Terminal dashboard for live market quotes: periodic fetches, line charts
//! and a scrolling ticker tape.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod utils;

// Re-export commonly used items
pub use application::monitor::{ui, App};
pub use domain::{Instrument, PricePoint, QuoteSeries};
pub use infrastructure::{
    client::yahoo::{ChartInterval, QuoteError, YahooClient},
    config::{ConfigError, MonitorConfig},
    init_tracing, init_tracing_to_file, init_tracing_with_level,
};
pub use utils::FetchThrottle;
