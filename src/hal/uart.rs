use crate::config::{CPU_FREQ_HZ, UART_BAUD};
use avr_device::atmega328p::USART0;
use core::convert::Infallible;
use embedded_hal::serial;

/// Polled USART0 driver, 8N1.
///
/// Only the serial console uses it, so there is no interrupt-driven
/// buffering; writes busy-wait through `nb::block!` at the call site.
pub struct Uart {
    usart: USART0,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        let ubrr = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;
        usart.ubrr0.write(|w| unsafe { w.bits(ubrr) });
        usart.ucsr0c.write(|w| w.ucsz0().chr8());
        usart
            .ucsr0b
            .write(|w| w.rxen0().set_bit().txen0().set_bit());
        Self { usart }
    }
}

impl serial::Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.usart.ucsr0a.read().udre0().bit_is_clear() {
            return Err(nb::Error::WouldBlock);
        }
        self.usart.udr0.write(|w| unsafe { w.bits(byte) });
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.usart.ucsr0a.read().udre0().bit_is_clear() {
            return Err(nb::Error::WouldBlock);
        }
        Ok(())
    }
}

impl serial::Read<u8> for Uart {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u8, Infallible> {
        if self.usart.ucsr0a.read().rxc0().bit_is_clear() {
            return Err(nb::Error::WouldBlock);
        }
        Ok(self.usart.udr0.read().bits())
    }
}
