//! Domain Layer
//!
//! Contains pure business entities and domain models.
//! This layer has no dependencies on infrastructure or application layers.

pub mod models;

// Re-export domain models
pub use models::{format_price, Instrument, PricePoint, QuoteSeries};
