//! Common utilities for the monitor

mod throttle;

pub use throttle::FetchThrottle;
