use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// Type-state GPIO pin; the mode parameter keeps direction changes explicit.
#[derive(Debug)]
pub struct Pin<PORT, const PIN: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE> Default for Pin<PORT, P, MODE> {
    fn default() -> Self {
        Self {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

/// Raw register access for one port, implemented on the peripheral types.
pub trait PortOps {
    fn set_ddr_bits(mask: u8);
    fn clear_ddr_bits(mask: u8);
    fn set_out_bits(mask: u8);
    fn clear_out_bits(mask: u8);
    fn toggle_out_bits(mask: u8);
    fn read_in_bits() -> u8;
}

macro_rules! impl_port_ops {
    ($PORT:ident, $ddr:ident, $out:ident, $in:ident) => {
        impl PortOps for $PORT {
            fn set_ddr_bits(mask: u8) {
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() | mask));
                }
            }

            fn clear_ddr_bits(mask: u8) {
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() & !mask));
                }
            }

            fn set_out_bits(mask: u8) {
                unsafe {
                    (*$PORT::ptr()).$out.modify(|r, w| w.bits(r.bits() | mask));
                }
            }

            fn clear_out_bits(mask: u8) {
                unsafe {
                    (*$PORT::ptr()).$out.modify(|r, w| w.bits(r.bits() & !mask));
                }
            }

            fn toggle_out_bits(mask: u8) {
                unsafe {
                    (*$PORT::ptr()).$out.modify(|r, w| w.bits(r.bits() ^ mask));
                }
            }

            fn read_in_bits() -> u8 {
                unsafe { (*$PORT::ptr()).$in.read().bits() }
            }
        }
    };
}

impl_port_ops!(PORTB, ddrb, portb, pinb);
impl_port_ops!(PORTC, ddrc, portc, pinc);
impl_port_ops!(PORTD, ddrd, portd, pind);

impl<PORT: PortOps, const P: u8, MODE: PinMode> Pin<PORT, P, MODE> {
    pub fn into_output(self) -> Pin<PORT, P, Output> {
        PORT::set_ddr_bits(1 << P);
        Pin::default()
    }

    /// Input with the pull-up enabled (buttons are active low).
    pub fn into_input(self) -> Pin<PORT, P, Input> {
        PORT::clear_ddr_bits(1 << P);
        PORT::set_out_bits(1 << P);
        Pin::default()
    }
}

impl<PORT: PortOps, const P: u8> Pin<PORT, P, Output> {
    #[inline]
    pub fn set_high(&mut self) {
        PORT::set_out_bits(1 << P);
    }

    #[inline]
    pub fn set_low(&mut self) {
        PORT::clear_out_bits(1 << P);
    }

    #[inline]
    pub fn toggle(&mut self) {
        PORT::toggle_out_bits(1 << P);
    }
}

impl<PORT: PortOps, const P: u8> Pin<PORT, P, Input> {
    #[inline]
    pub fn is_high(&self) -> bool {
        PORT::read_in_bits() & (1 << P) != 0
    }

    #[inline]
    pub fn is_low(&self) -> bool {
        !self.is_high()
    }
}

// embedded-hal pin traits, so drivers stay generic over the pin
// implementation and can be tested against mocked pins on the host.
impl<PORT: PortOps, const P: u8> embedded_hal::digital::v2::OutputPin for Pin<PORT, P, Output> {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        Pin::set_high(self);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        Pin::set_low(self);
        Ok(())
    }
}

impl<PORT: PortOps, const P: u8> embedded_hal::digital::v2::InputPin for Pin<PORT, P, Input> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(Pin::is_high(self))
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(Pin::is_low(self))
    }
}

// Board wiring, following the reference kit
pub mod board {
    use super::*;

    // 74HC595 shift-register interface of the 7-segment module
    pub type SegmentData = Pin<PORTB, 0, Output>;
    pub type SegmentClock = Pin<PORTD, 7, Output>;
    pub type SegmentLatch = Pin<PORTD, 4, Output>;

    // Status LED (Arduino pin 13)
    pub type StatusLed = Pin<PORTB, 5, Output>;

    // User button on PCINT9
    pub type UserButton = Pin<PORTC, 1, Input>;
}
