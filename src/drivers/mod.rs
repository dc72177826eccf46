pub mod segment_display;
pub mod serial_console;

pub use segment_display::SegmentDisplay;
pub use serial_console::SerialConsole;
