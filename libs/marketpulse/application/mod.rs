//! Application Layer
//!
//! Contains use cases and application services.
//! This layer depends on domain and infrastructure layers.

pub mod monitor;

// Re-export the monitor app for binaries
pub use monitor::App;
