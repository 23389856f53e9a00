//! Market monitor
//!
//! Terminal UI that refreshes quotes on a coarse interval and redraws
//! charts and a scrolling ticker tape every tick.

pub mod app;
pub mod state;
pub mod ui;

pub use app::App;
pub use state::{TapePhase, TickerTape};
