use crate::scanner::DisplaySink;
use embedded_hal::digital::v2::OutputPin;

/// Segment patterns for digits 0-9, common anode (a segment lights when its
/// bit is low). Bit 0 is segment A, bit 6 is G, bit 7 the decimal point.
pub const DIGIT_FONT: [u8; 10] = [
    0xC0, // 0
    0xF9, // 1
    0xA4, // 2
    0xB0, // 3
    0x99, // 4
    0x92, // 5
    0x82, // 6
    0xF8, // 7
    0x80, // 8
    0x90, // 9
];

/// Common-anode select bit for each digit position, 0 = ones.
pub const POSITION_SELECT: [u8; 4] = [0x10, 0x20, 0x40, 0x80];

/// 4-digit 7-segment module behind two daisy-chained 74HC595s.
///
/// One refresh shifts 16 bits MSB-first (segment byte, then position byte)
/// and pulses the latch, lighting exactly one digit position. Generic over
/// the pin implementation so it can run against mocked pins on the host.
pub struct SegmentDisplay<DATA, CLK, LATCH> {
    data: DATA,
    clock: CLK,
    latch: LATCH,
}

impl<DATA, CLK, LATCH, E> SegmentDisplay<DATA, CLK, LATCH>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    pub fn new(data: DATA, clock: CLK, latch: LATCH) -> Self {
        Self { data, clock, latch }
    }

    fn shift_out(&mut self, byte: u8) -> Result<(), E> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            // 74HC595 samples on the rising clock edge
            self.clock.set_high()?;
            self.clock.set_low()?;
        }
        Ok(())
    }

    fn latch_pulse(&mut self) -> Result<(), E> {
        self.latch.set_high()?;
        self.latch.set_low()?;
        Ok(())
    }

    /// Show `digit` at `position` (0 = ones, 3 = thousands).
    pub fn write(&mut self, digit: u8, position: u8) -> Result<(), E> {
        debug_assert!(digit <= 9);
        debug_assert!(position <= 3);
        self.shift_out(DIGIT_FONT[digit as usize % DIGIT_FONT.len()])?;
        self.shift_out(POSITION_SELECT[position as usize % POSITION_SELECT.len()])?;
        self.latch_pulse()
    }

    /// Turn every segment off (no position selected).
    pub fn blank(&mut self) -> Result<(), E> {
        self.shift_out(0xFF)?;
        self.shift_out(0x00)?;
        self.latch_pulse()
    }

    /// Release the pins.
    pub fn free(self) -> (DATA, CLK, LATCH) {
        (self.data, self.clock, self.latch)
    }
}

impl<DATA, CLK, LATCH, E> DisplaySink for SegmentDisplay<DATA, CLK, LATCH>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    fn write_digit(&mut self, digit: u8, position: u8) {
        // Fire and forget: a failed refresh is repaired on the next cycle
        self.write(digit, position).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

    fn data_expectations(bytes: &[u8]) -> Vec<PinTransaction> {
        bytes
            .iter()
            .flat_map(|&byte| {
                (0..8).rev().map(move |bit| {
                    if byte & (1 << bit) != 0 {
                        PinTransaction::set(PinState::High)
                    } else {
                        PinTransaction::set(PinState::Low)
                    }
                })
            })
            .collect()
    }

    fn clock_expectations(bits: usize) -> Vec<PinTransaction> {
        (0..bits)
            .flat_map(|_| {
                [
                    PinTransaction::set(PinState::High),
                    PinTransaction::set(PinState::Low),
                ]
            })
            .collect()
    }

    fn latch_expectations() -> Vec<PinTransaction> {
        vec![
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]
    }

    #[test]
    fn write_shifts_font_then_position() {
        let data = PinMock::new(&data_expectations(&[DIGIT_FONT[3], 0x20]));
        let clock = PinMock::new(&clock_expectations(16));
        let latch = PinMock::new(&latch_expectations());

        let mut display = SegmentDisplay::new(data, clock, latch);
        display.write(3, 1).unwrap();

        let (mut data, mut clock, mut latch) = display.free();
        data.done();
        clock.done();
        latch.done();
    }

    #[test]
    fn blank_clears_segments_and_positions() {
        let data = PinMock::new(&data_expectations(&[0xFF, 0x00]));
        let clock = PinMock::new(&clock_expectations(16));
        let latch = PinMock::new(&latch_expectations());

        let mut display = SegmentDisplay::new(data, clock, latch);
        display.blank().unwrap();

        let (mut data, mut clock, mut latch) = display.free();
        data.done();
        clock.done();
        latch.done();
    }

    #[test]
    fn sink_writes_through() {
        let data = PinMock::new(&data_expectations(&[DIGIT_FONT[0], 0x10]));
        let clock = PinMock::new(&clock_expectations(16));
        let latch = PinMock::new(&latch_expectations());

        let mut display = SegmentDisplay::new(data, clock, latch);
        DisplaySink::write_digit(&mut display, 0, 0);

        let (mut data, mut clock, mut latch) = display.free();
        data.done();
        clock.done();
        latch.done();
    }

    #[test]
    fn font_covers_all_digits_uniquely() {
        for (i, &a) in DIGIT_FONT.iter().enumerate() {
            for &b in &DIGIT_FONT[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
