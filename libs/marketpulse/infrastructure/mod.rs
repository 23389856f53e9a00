//! Infrastructure Layer
//!
//! Contains implementations of external interfaces (API clients, configuration, logging).
//! This layer depends on the domain layer but not on the application layer.

pub mod client;
pub mod config;
pub mod logging;

// Re-export commonly used types from client
pub use client::yahoo::{ChartInterval, QuoteError, YahooClient};

// Re-export config types
pub use config::{ConfigError, MonitorConfig};

// Re-export logging initializers
pub use logging::{init_tracing, init_tracing_to_file, init_tracing_with_level};
