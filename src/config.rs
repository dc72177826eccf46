//! Configuration constants for the segment counter firmware

use crate::hal::timer::Prescaler;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Highest value shown on the 4-digit display; the counter wraps past it
pub const COUNTER_MAX: u16 = 9999;

/// Number of multiplexed digit positions
pub const DIGIT_COUNT: u8 = 4;

/// Timer0 prescaler for the digit scan tick. Independent of the counter
/// rate; change one without touching the other.
pub const SCAN_PRESCALER: Prescaler = Prescaler::Div256;

/// Timer1 prescaler for the counter increment tick
pub const COUNT_PRESCALER: Prescaler = Prescaler::Div8;
