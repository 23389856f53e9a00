//! Yahoo Finance v8 chart API types

use serde::Deserialize;
use std::fmt;

/// Candle interval for the chart endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartInterval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
}

impl ChartInterval {
    /// Pick the candle interval that matches a refresh cadence: sub-minute
    /// refreshes get 1m candles, sub-5-minute refreshes 5m, everything
    /// slower 15m.
    pub fn for_refresh_secs(seconds: u64) -> Self {
        if seconds < 60 {
            ChartInterval::OneMinute
        } else if seconds < 300 {
            ChartInterval::FiveMinutes
        } else {
            ChartInterval::FifteenMinutes
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartInterval::OneMinute => "1m",
            ChartInterval::FiveMinutes => "5m",
            ChartInterval::FifteenMinutes => "15m",
        }
    }
}

impl fmt::Display for ChartInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level chart API response
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartApiError>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: ChartMeta,
    /// Unix seconds, parallel to the indicator arrays
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(default)]
    pub indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub exchange_timezone_name: Option<String>,
    #[serde(default)]
    pub regular_market_price: Option<f64>,
    #[serde(default)]
    pub chart_previous_close: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

/// OHLCV arrays parallel to `timestamp`; candles with no trades come
/// through as nulls
#[derive(Debug, Default, Deserialize)]
pub struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "chart": {
            "result": [{
                "meta": {
                    "currency": "BRL",
                    "symbol": "^BVSP",
                    "exchangeTimezoneName": "America/Sao_Paulo",
                    "regularMarketPrice": 130275.0,
                    "chartPreviousClose": 129896.0
                },
                "timestamp": [1724418000, 1724418300, 1724418600],
                "indicators": {
                    "quote": [{
                        "open": [130000.0, 130100.0, null],
                        "high": [130200.0, 130300.0, null],
                        "low": [129900.0, 130000.0, null],
                        "close": [130100.0, 130250.0, null],
                        "volume": [0, 0, null]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    const ERROR_RESPONSE: &str = r#"{
        "chart": {
            "result": null,
            "error": {
                "code": "Not Found",
                "description": "No data found, symbol may be delisted"
            }
        }
    }"#;

    #[test]
    fn test_deserialize_chart_response() {
        let response: ChartResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        assert!(response.chart.error.is_none());

        let results = response.chart.result.unwrap();
        let result = &results[0];
        assert_eq!(result.meta.symbol, "^BVSP");
        assert_eq!(result.meta.currency.as_deref(), Some("BRL"));
        assert_eq!(result.meta.regular_market_price, Some(130275.0));
        assert_eq!(result.timestamp.len(), 3);

        let quote = &result.indicators.quote[0];
        assert_eq!(quote.close[0], Some(130100.0));
        assert_eq!(quote.close[2], None);
    }

    #[test]
    fn test_deserialize_error_response() {
        let response: ChartResponse = serde_json::from_str(ERROR_RESPONSE).unwrap();
        assert!(response.chart.result.is_none());

        let error = response.chart.error.unwrap();
        assert_eq!(error.code, "Not Found");
        assert!(error.description.contains("delisted"));
    }

    #[test]
    fn test_interval_for_refresh_secs() {
        assert_eq!(ChartInterval::for_refresh_secs(0), ChartInterval::OneMinute);
        assert_eq!(ChartInterval::for_refresh_secs(59), ChartInterval::OneMinute);
        assert_eq!(ChartInterval::for_refresh_secs(60), ChartInterval::FiveMinutes);
        assert_eq!(ChartInterval::for_refresh_secs(299), ChartInterval::FiveMinutes);
        assert_eq!(ChartInterval::for_refresh_secs(300), ChartInterval::FifteenMinutes);
        assert_eq!(ChartInterval::for_refresh_secs(3600), ChartInterval::FifteenMinutes);
    }

    #[test]
    fn test_interval_as_str() {
        assert_eq!(ChartInterval::OneMinute.as_str(), "1m");
        assert_eq!(ChartInterval::FiveMinutes.as_str(), "5m");
        assert_eq!(ChartInterval::FifteenMinutes.as_str(), "15m");
    }
}
