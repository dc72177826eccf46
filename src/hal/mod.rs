pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use gpio::board;
pub use gpio::{Input, Output, Pin};
pub use timer::{Prescaler, Timer0, Timer1};
pub use uart::Uart;
