use crate::config::COUNTER_MAX;

/// Free-running decimal counter bounded to the range shown on the display.
///
/// A single tick source increments it; everyone else only reads. On the AVR
/// target the increment runs inside an interrupt handler, so accesses are
/// serialized through a critical section in the firmware binary.
pub struct BoundedCounter {
    value: u16,
}

impl BoundedCounter {
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Increment by one, wrapping past `COUNTER_MAX` back to 0.
    pub fn tick(&mut self) {
        self.value += 1;
        if self.value > COUNTER_MAX {
            self.value = 0;
        }
        debug_assert!(self.value <= COUNTER_MAX);
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn set(&mut self, value: u16) {
        debug_assert!(value <= COUNTER_MAX);
        self.value = value;
    }
}

impl Default for BoundedCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(BoundedCounter::new().value(), 0);
    }

    #[test]
    fn tick_increments_by_one() {
        let mut counter = BoundedCounter::new();
        counter.tick();
        counter.tick();
        counter.tick();
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn wraps_past_max_to_zero() {
        let mut counter = BoundedCounter::new();
        counter.set(COUNTER_MAX);
        counter.tick();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn stays_in_range_over_full_period() {
        let mut counter = BoundedCounter::new();
        for _ in 0..=COUNTER_MAX {
            counter.tick();
            assert!(counter.value() <= COUNTER_MAX);
        }
        // 10000 ticks bring it back to the start
        assert_eq!(counter.value(), 0);
    }
}
