#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
mod firmware {
    use core::cell::RefCell;

    use avr_device::atmega328p::Peripherals;
    use avr_device::interrupt::{self, Mutex};

    use segment_counter_firmware::config::{COUNTER_MAX, COUNT_PRESCALER, SCAN_PRESCALER};
    use segment_counter_firmware::controller::DisplayController;
    use segment_counter_firmware::drivers::{SegmentDisplay, SerialConsole};
    use segment_counter_firmware::hal::board::{
        SegmentClock, SegmentData, SegmentLatch, StatusLed, UserButton,
    };
    use segment_counter_firmware::hal::{Timer0, Timer1, Uart};

    type BoardDisplay = SegmentDisplay<SegmentData, SegmentClock, SegmentLatch>;

    // Shared between the tick handlers; borrowed only inside critical
    // sections, and handlers run to completion with interrupts masked.
    static CONTROLLER: Mutex<RefCell<DisplayController>> =
        Mutex::new(RefCell::new(DisplayController::new()));
    static DISPLAY: Mutex<RefCell<Option<BoardDisplay>>> = Mutex::new(RefCell::new(None));

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();

        let mut console = SerialConsole::new(Uart::new(dp.USART0));

        let data = SegmentData::default().into_output();
        let clock = SegmentClock::default().into_output();
        let latch = SegmentLatch::default().into_output();
        let mut display = SegmentDisplay::new(data, clock, latch);
        display.blank().ok();
        interrupt::free(|cs| {
            DISPLAY.borrow(cs).replace(Some(display));
        });

        let mut led = StatusLed::default().into_output();
        led.set_low();
        let _button = UserButton::default().into_input();

        // Pin-change interrupt for the user button (PCINT9)
        dp.EXINT.pcicr.modify(|r, w| unsafe { w.bits(r.bits() | 0x02) });
        dp.EXINT.pcmsk1.modify(|r, w| unsafe { w.bits(r.bits() | 0x02) });

        // The two tick rates are configured independently; the counter is
        // not synchronized to the scan cycle.
        let mut scan_timer = Timer0::new(dp.TC0);
        let mut count_timer = Timer1::new(dp.TC1);
        scan_timer.start_ticking(SCAN_PRESCALER);
        count_timer.start_ticking(COUNT_PRESCALER);

        unsafe { interrupt::enable() };

        console.write_line("Segment Counter Firmware v0.1.0");
        ufmt::uwriteln!(&mut console, "counting 0..={}", COUNTER_MAX).ok();

        // Everything happens in the tick handlers
        #[allow(clippy::empty_loop)]
        loop {}
    }

    /// Scan tick: refresh the next digit position.
    #[avr_device::interrupt(atmega328p)]
    fn TIMER0_OVF() {
        interrupt::free(|cs| {
            if let Some(display) = DISPLAY.borrow(cs).borrow_mut().as_mut() {
                CONTROLLER.borrow(cs).borrow_mut().on_scan_tick(display);
            }
        });
    }

    /// Count tick: advance the displayed value.
    #[avr_device::interrupt(atmega328p)]
    fn TIMER1_OVF() {
        interrupt::free(|cs| {
            CONTROLLER.borrow(cs).borrow_mut().on_count_tick();
        });
    }

    /// Any edge on the user button toggles the status LED.
    #[avr_device::interrupt(atmega328p)]
    fn PCINT1() {
        let mut led = StatusLed::default();
        led.toggle();
    }
}

// The firmware image only makes sense on the AVR target; host builds get a
// stub so `cargo build`/`cargo test` work off-target.
#[cfg(not(target_arch = "avr"))]
fn main() {}
