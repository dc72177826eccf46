use crate::hal::Uart;
use core::convert::Infallible;
use embedded_hal::serial::Write;

/// Startup banner and debug output over USART0.
pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new(uart: Uart) -> Self {
        Self { uart }
    }

    pub fn write_byte(&mut self, byte: u8) {
        // Infallible once the data register is free
        nb::block!(self.uart.write(byte)).ok();
    }

    pub fn write_line(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        self.write_byte(b'\r');
        self.write_byte(b'\n');
    }
}

impl ufmt::uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
