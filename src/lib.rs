//! MarketPulse Monitor - Main Library
//!
//! Presentation-layer crate for the market monitor: re-exports the core
//! library and carries the helpers shared by binary executables.
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use marketpulse_monitor::bin_common::{load_config_from_env, ConfigType};
//! use marketpulse_monitor::marketpulse::MonitorConfig;
//! ```

// Re-export the workspace library for convenience
pub use marketpulse;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, ConfigType};
}
