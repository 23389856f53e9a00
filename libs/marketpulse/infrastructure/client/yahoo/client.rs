use std::time::Duration;

use chrono::DateTime;
use thiserror::Error;
use tracing::debug;

use super::types::{ChartInterval, ChartResponse, ChartResult};
use crate::domain::PricePoint;

/// Yahoo rejects bare clients, so requests carry a browser-ish User-Agent
const USER_AGENT: &str = "Mozilla/5.0 (compatible; marketpulse-monitor/0.1)";

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] Box<ureq::Error>),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No quote data returned for {0}")]
    NoData(String),
}

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Yahoo Finance chart API client
pub struct YahooClient {
    base_url: String,
    timeout: Duration,
}

impl YahooClient {
    /// Create new chart API client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Fetch the closing-price series for one symbol.
    ///
    /// An empty-but-successful response is reported as `NoData` so the
    /// caller's keep-stale-cache rule applies on every failure path.
    pub fn fetch_series(
        &self,
        symbol: &str,
        range: &str,
        interval: ChartInterval,
    ) -> Result<Vec<PricePoint>> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);

        debug!(
            "Fetching chart data: symbol={} range={} interval={}",
            symbol, range, interval
        );

        let response = ureq::get(&url)
            .query("range", range)
            .query("interval", interval.as_str())
            .set("User-Agent", USER_AGENT)
            .timeout(self.timeout)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(404, _) => QuoteError::SymbolNotFound(symbol.to_string()),
                ureq::Error::Status(429, _) => QuoteError::RateLimitExceeded,
                ureq::Error::Status(code, resp) => {
                    QuoteError::ApiError(format!("HTTP {} {}", code, resp.status_text()))
                }
                other => QuoteError::RequestFailed(Box::new(other)),
            })?;

        let chart: ChartResponse = response
            .into_json()
            .map_err(|e| QuoteError::DeserializeFailed(e.to_string()))?;

        if let Some(error) = chart.chart.error {
            return Err(QuoteError::ApiError(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        let result = chart
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| QuoteError::NoData(symbol.to_string()))?;

        let points = Self::to_points(&result);
        if points.is_empty() {
            return Err(QuoteError::NoData(symbol.to_string()));
        }

        debug!("Got {} points for {}", points.len(), symbol);
        Ok(points)
    }

    /// Zip timestamps with closes, skipping candles that came through null
    fn to_points(result: &ChartResult) -> Vec<PricePoint> {
        let closes = match result.indicators.quote.first() {
            Some(quote) => &quote.close,
            None => return Vec::new(),
        };

        let mut points: Vec<PricePoint> = result
            .timestamp
            .iter()
            .zip(closes.iter())
            .filter_map(|(&ts, close)| {
                let price = (*close)?;
                let timestamp = DateTime::from_timestamp(ts, 0)?;
                Some(PricePoint::new(timestamp, price))
            })
            .collect();

        // Chart x-values must be ascending
        points.sort_by_key(|p| p.timestamp);
        points
    }
}
