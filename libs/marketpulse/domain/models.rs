use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An instrument being monitored: display name plus provider symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
    pub symbol: String,
}

impl Instrument {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// A single closing price observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// Cached quote series for one instrument.
///
/// Empty until the first successful fetch; after that it always holds
/// exactly the point set returned by the most recent successful fetch.
/// Replacement is the only mutation, so a failed fetch leaves the series
/// untouched and the stale data stays on screen.
#[derive(Debug, Clone, Default)]
pub struct QuoteSeries {
    points: Vec<PricePoint>,
}

impl QuoteSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Replace the entire series with a fresh fetch result
    pub fn replace(&mut self, points: Vec<PricePoint>) {
        self.points = points;
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Most recent close, if any data has arrived
    pub fn last_price(&self) -> Option<f64> {
        self.points.last().map(|p| p.price)
    }

    /// (low, high) over all closes
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        for p in &self.points {
            low = low.min(p.price);
            high = high.max(p.price);
        }
        Some((low, high))
    }

    /// Chart y-limits: price bounds padded by 10% of the day's range so the
    /// line never sits on the frame edge. A flat series gets a small
    /// proportional pad instead of a zero-height window.
    pub fn padded_bounds(&self) -> Option<(f64, f64)> {
        let (low, high) = self.price_bounds()?;
        let pad = if high > low {
            (high - low) * 0.1
        } else {
            high.abs().max(1.0) * 0.01
        };
        Some((low - pad, high + pad))
    }

    /// (first, last) timestamps for the x-axis
    pub fn time_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.points.first()?.timestamp;
        let last = self.points.last()?.timestamp;
        Some((first, last))
    }

    /// Series as (unix seconds, price) pairs for chart datasets
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.timestamp.timestamp() as f64, p.price))
            .collect()
    }
}

/// Format a price with thousands separators and two decimals (1234.5 -> "1,234.50")
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, dec_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(secs: i64, price: f64) -> PricePoint {
        PricePoint::new(Utc.timestamp_opt(secs, 0).unwrap(), price)
    }

    #[test]
    fn test_series_empty_until_replaced() {
        let series = QuoteSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.last_price(), None);
        assert_eq!(series.price_bounds(), None);
        assert_eq!(series.time_bounds(), None);
        assert!(series.chart_points().is_empty());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut series = QuoteSeries::new();
        series.replace(vec![point(100, 1.0), point(160, 2.0), point(220, 3.0)]);
        assert_eq!(series.len(), 3);

        // A shorter fresh fetch drops points the new result does not contain
        series.replace(vec![point(400, 9.0)]);
        assert_eq!(series.len(), 1);
        assert_eq!(series.last_price(), Some(9.0));
        assert_eq!(series.points()[0].price, 9.0);
    }

    #[test]
    fn test_price_bounds() {
        let mut series = QuoteSeries::new();
        series.replace(vec![point(0, 5.0), point(60, 2.0), point(120, 8.0)]);
        assert_eq!(series.price_bounds(), Some((2.0, 8.0)));
    }

    #[test]
    fn test_padded_bounds_ten_percent_of_range() {
        let mut series = QuoteSeries::new();
        series.replace(vec![point(0, 100.0), point(60, 200.0)]);
        let (lo, hi) = series.padded_bounds().unwrap();
        assert!((lo - 90.0).abs() < 1e-9);
        assert!((hi - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_padded_bounds_flat_series() {
        let mut series = QuoteSeries::new();
        series.replace(vec![point(0, 5.43), point(60, 5.43)]);
        let (lo, hi) = series.padded_bounds().unwrap();
        assert!(lo < 5.43);
        assert!(hi > 5.43);
    }

    #[test]
    fn test_time_bounds_and_chart_points() {
        let mut series = QuoteSeries::new();
        series.replace(vec![point(1000, 1.5), point(1060, 2.5)]);
        let (first, last) = series.time_bounds().unwrap();
        assert_eq!(first.timestamp(), 1000);
        assert_eq!(last.timestamp(), 1060);
        assert_eq!(series.chart_points(), vec![(1000.0, 1.5), (1060.0, 2.5)]);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1234.5), "1,234.50");
        assert_eq!(format_price(130275.0), "130,275.00");
        assert_eq!(format_price(5.4321), "5.43");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(1_000_000.0), "1,000,000.00");
        assert_eq!(format_price(-1234.56), "-1,234.56");
    }
}
