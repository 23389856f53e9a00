//! Main application state and logic for the monitor

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::domain::{format_price, Instrument, PricePoint, QuoteSeries};
use crate::infrastructure::client::yahoo::{ChartInterval, QuoteError, YahooClient};
use crate::infrastructure::config::MonitorConfig;
use crate::utils::FetchThrottle;

use super::state::TickerTape;

/// Separator between tape segments
const TAPE_SEPARATOR: &str = "  •  ";

/// Main application state
pub struct App {
    /// Instruments in configured order (charts top-to-bottom, tape left-to-right)
    pub instruments: Vec<Instrument>,
    /// One cached series per instrument, same order
    pub series: Vec<QuoteSeries>,
    /// Scrolling tape state
    pub tape: TickerTape,
    /// Clock text for the header
    pub clock_text: String,
    /// Wall-clock time of the last fetch pass
    pub last_fetch_at: Option<DateTime<Local>>,
    /// Whether to quit
    pub should_quit: bool,
    /// Status message to show in footer
    pub status_message: Option<String>,
    /// Chart API client
    client: YahooClient,
    /// Chart API range parameter
    range: String,
    /// Candle interval derived from the refresh cadence
    interval: ChartInterval,
    /// Gate for the fetch pass
    throttle: FetchThrottle,
}

impl App {
    pub fn new(config: &MonitorConfig) -> Self {
        let client = YahooClient::new(
            config.provider.base_url.clone(),
            Duration::from_secs(config.fetch.timeout_secs),
        );
        let interval = ChartInterval::for_refresh_secs(config.fetch.interval_secs);
        let instruments = config.instruments.clone();
        let series = vec![QuoteSeries::new(); instruments.len()];

        Self {
            instruments,
            series,
            tape: TickerTape::new(
                config.tape.step_cols,
                Duration::from_secs(config.tape.wait_secs),
            ),
            clock_text: String::new(),
            last_fetch_at: None,
            should_quit: false,
            status_message: None,
            client,
            range: config.fetch.range.clone(),
            interval,
            throttle: FetchThrottle::new(Duration::from_secs(config.fetch.interval_secs)),
        }
    }

    /// Per-frame update: clock, tape, fetch gate.
    ///
    /// `tape_viewport` is the tape strip width in columns. The gate is
    /// marked before fetching, so a slow or failing provider is retried on
    /// the next interval rather than on every tick.
    pub fn on_tick(&mut self, now: Instant, tape_viewport: u16) {
        self.clock_text = Local::now().format("%Y-%m-%d %I:%M:%S %p").to_string();

        let text_width = self.tape_text().chars().count();
        self.tape.tick(now, tape_viewport, text_width);

        if self.throttle.is_due(now) {
            self.throttle.mark(now);
            self.fetch_all();
        }
    }

    /// Manual refresh, bound to the `r` key
    pub fn refresh_now(&mut self, now: Instant) {
        self.throttle.mark(now);
        self.fetch_all();
    }

    /// Fetch every instrument in order.
    ///
    /// One instrument failing never aborts the pass; its cached series is
    /// left untouched and the remaining instruments are still fetched.
    fn fetch_all(&mut self) {
        info!(
            "Fetching market data for {} instruments",
            self.instruments.len()
        );

        let mut failures = 0;
        for index in 0..self.instruments.len() {
            let result = self.client.fetch_series(
                &self.instruments[index].symbol,
                &self.range,
                self.interval,
            );
            if !self.apply_fetch_result(index, result) {
                failures += 1;
            }
        }

        let fetched_at = Local::now();
        self.status_message = if failures == 0 {
            Some(format!("quotes updated {}", fetched_at.format("%H:%M:%S")))
        } else {
            Some(format!(
                "{} of {} fetches failed",
                failures,
                self.instruments.len()
            ))
        };
        self.last_fetch_at = Some(fetched_at);

        info!(
            "Data fetch complete ({} ok, {} failed)",
            self.instruments.len() - failures,
            failures
        );
    }

    /// Apply one fetch outcome: success replaces the cached series
    /// wholesale, failure logs and keeps it. Returns whether it applied.
    fn apply_fetch_result(
        &mut self,
        index: usize,
        result: Result<Vec<PricePoint>, QuoteError>,
    ) -> bool {
        match result {
            Ok(points) => {
                self.series[index].replace(points);
                true
            }
            Err(e) => {
                warn!(
                    "Could not fetch data for {}: {}",
                    self.instruments[index].name, e
                );
                false
            }
        }
    }

    /// Tape content built fresh from the cache: one "name: price" segment
    /// per instrument, `--` before its first data
    pub fn tape_text(&self) -> String {
        let segments: Vec<String> = self
            .instruments
            .iter()
            .zip(self.series.iter())
            .map(|(instrument, series)| match series.last_price() {
                Some(price) => format!("{}: {}", instrument.name, format_price(price)),
                None => format!("{}: --", instrument.name),
            })
            .collect();

        segments.join(TAPE_SEPARATOR)
    }
}
