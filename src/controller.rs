use crate::counter::BoundedCounter;
use crate::scanner::{DigitScanner, DisplaySink};

/// Owns the shared counter and the scan cursor.
///
/// The two tick handlers in the firmware binary borrow this through one
/// critical-section guarded static instead of touching free globals; on the
/// host the tick methods are called directly by the tests. The two tick
/// sources stay asynchronous to each other: a scan simply reads whatever the
/// counter holds at that instant.
pub struct DisplayController {
    counter: BoundedCounter,
    scanner: DigitScanner,
}

impl DisplayController {
    pub const fn new() -> Self {
        Self {
            counter: BoundedCounter::new(),
            scanner: DigitScanner::new(),
        }
    }

    /// Counter tick: advance the displayed value by one.
    pub fn on_count_tick(&mut self) {
        self.counter.tick();
    }

    /// Scan tick: refresh the next digit position from the current value.
    pub fn on_scan_tick(&mut self, sink: &mut impl DisplaySink) {
        self.scanner.tick(self.counter.value(), sink);
    }

    pub fn value(&self) -> u16 {
        self.counter.value()
    }

    pub fn set_value(&mut self, value: u16) {
        self.counter.set(value);
    }
}

impl Default for DisplayController {
    fn default() -> Self {
        Self::new()
    }
}
