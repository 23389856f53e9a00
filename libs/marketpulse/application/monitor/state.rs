//! Ticker tape state machine

use std::time::{Duration, Instant};

/// Phase of the tape cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapePhase {
    /// Text is moving left across the strip
    Scrolling,
    /// Text has fully left the viewport; the strip stays blank until the
    /// wait elapses
    Waiting,
}

/// Scrolling ticker state.
///
/// The offset is the column where the tape text begins, relative to the
/// left edge of the strip (negative once the head has scrolled past it).
/// It starts at the viewport width, so the text enters from the right and
/// exits left; when the whole text is gone (`offset <= -text_width`) the
/// tape hides, waits, then resets and scrolls again.
#[derive(Debug)]
pub struct TickerTape {
    offset: Option<i64>,
    phase: TapePhase,
    wait_started: Option<Instant>,
    step: u16,
    wait: Duration,
}

impl TickerTape {
    pub fn new(step: u16, wait: Duration) -> Self {
        Self {
            offset: None,
            phase: TapePhase::Scrolling,
            wait_started: None,
            step,
            wait,
        }
    }

    /// Advance the machine by one UI tick.
    ///
    /// `viewport_width` is the strip width in columns, `text_width` the tape
    /// text length in characters. Both may change between ticks (terminal
    /// resize, new prices); the machine re-clamps on reset and never panics.
    pub fn tick(&mut self, now: Instant, viewport_width: u16, text_width: usize) {
        match self.phase {
            TapePhase::Scrolling => {
                let offset = self.offset.get_or_insert(viewport_width as i64);
                *offset -= self.step as i64;

                if *offset <= -(text_width as i64) {
                    self.phase = TapePhase::Waiting;
                    self.wait_started = Some(now);
                }
            }
            TapePhase::Waiting => {
                let started = self.wait_started.get_or_insert(now);
                if now.duration_since(*started) >= self.wait {
                    self.offset = Some(viewport_width as i64);
                    self.phase = TapePhase::Scrolling;
                    self.wait_started = None;
                }
            }
        }
    }

    pub fn phase(&self) -> TapePhase {
        self.phase
    }

    /// Current offset; `None` before the first tick
    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    /// Column where the text begins, only while the tape is showing
    pub fn visible_offset(&self) -> Option<i64> {
        match self.phase {
            TapePhase::Scrolling => self.offset,
            TapePhase::Waiting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: u16 = 80;
    const TEXT: usize = 40;

    fn tape() -> TickerTape {
        TickerTape::new(2, Duration::from_secs(2))
    }

    #[test]
    fn test_offset_strictly_decreases_while_scrolling() {
        let mut tape = tape();
        let start = Instant::now();

        let mut offsets = Vec::new();
        for i in 0..10 {
            tape.tick(start + Duration::from_millis(50 * i), WIDTH, TEXT);
            offsets.push(tape.offset().unwrap());
        }

        for pair in offsets.windows(2) {
            assert!(pair[1] < pair[0], "offset must decrease: {:?}", offsets);
        }
        assert_eq!(tape.phase(), TapePhase::Scrolling);
    }

    #[test]
    fn test_enters_waiting_once_fully_off_screen() {
        let mut tape = tape();
        let start = Instant::now();

        // (width + text) / step ticks takes the text past the left edge
        for i in 0..=((WIDTH as u64 + TEXT as u64) / 2) {
            tape.tick(start + Duration::from_millis(50 * i), WIDTH, TEXT);
        }

        assert_eq!(tape.phase(), TapePhase::Waiting);
        assert_eq!(tape.visible_offset(), None);
    }

    /// Drive a fresh tape until it enters `Waiting`; returns the instant of
    /// the transition tick (the wait is measured from there)
    fn scroll_until_waiting(tape: &mut TickerTape, start: Instant) -> Instant {
        let mut i = 0;
        loop {
            let now = start + Duration::from_millis(50 * i);
            tape.tick(now, WIDTH, TEXT);
            if tape.phase() == TapePhase::Waiting {
                return now;
            }
            i += 1;
            assert!(i < 10_000, "tape never left the viewport");
        }
    }

    #[test]
    fn test_offset_frozen_and_hidden_while_waiting() {
        let mut tape = tape();
        let entered = scroll_until_waiting(&mut tape, Instant::now());

        let frozen = tape.offset();
        for i in 1..10 {
            // Stays inside the 2s wait window
            tape.tick(entered + Duration::from_millis(50 * i), WIDTH, TEXT);
            assert_eq!(tape.phase(), TapePhase::Waiting);
            assert_eq!(tape.offset(), frozen);
            assert_eq!(tape.visible_offset(), None);
        }
    }

    #[test]
    fn test_resets_and_resumes_after_wait() {
        let mut tape = tape();
        let entered = scroll_until_waiting(&mut tape, Instant::now());

        // Wait elapses: offset snaps back to the right edge and scrolling resumes
        tape.tick(entered + Duration::from_secs(2), WIDTH, TEXT);
        assert_eq!(tape.phase(), TapePhase::Scrolling);
        assert_eq!(tape.offset(), Some(WIDTH as i64));

        tape.tick(entered + Duration::from_secs(3), WIDTH, TEXT);
        assert_eq!(tape.offset(), Some(WIDTH as i64 - 2));
    }

    #[test]
    fn test_reset_uses_current_viewport_width() {
        let mut tape = tape();
        let entered = scroll_until_waiting(&mut tape, Instant::now());

        // Terminal shrank while the tape was hidden
        tape.tick(entered + Duration::from_secs(2), 24, TEXT);
        assert_eq!(tape.offset(), Some(24));
    }
}
