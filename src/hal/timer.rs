use avr_device::atmega328p::{TC0, TC1};

/// Clock-select values for the timer prescaler.
///
/// The tick period is the overflow period of the timer at the selected
/// division. This is the full set of valid selections, so there is no
/// invalid-configuration error path.
#[derive(Clone, Copy)]
pub enum Prescaler {
    Stop,
    Direct,
    Div8,
    Div64,
    Div256,
    Div1024,
}

macro_rules! impl_tick_timer {
    ($(#[$doc:meta])* $Timer:ident, $TC:ident, $tccra:ident, $tccrb:ident, $cs:ident, $tcnt:ident, $timsk:ident, $toie:ident) => {
        $(#[$doc])*
        pub struct $Timer {
            timer: $TC,
        }

        impl $Timer {
            /// Take ownership of the peripheral and put it in normal mode
            /// with the prescaler stopped.
            pub fn new(timer: $TC) -> Self {
                timer.$tccra.reset();
                timer.$tccrb.write(|w| w.$cs().no_clock());
                timer.$tcnt.reset();
                Self { timer }
            }

            pub fn start(&mut self, prescaler: Prescaler) {
                self.timer.$tccrb.write(|w| match prescaler {
                    Prescaler::Stop => w.$cs().no_clock(),
                    Prescaler::Direct => w.$cs().direct(),
                    Prescaler::Div8 => w.$cs().prescale_8(),
                    Prescaler::Div64 => w.$cs().prescale_64(),
                    Prescaler::Div256 => w.$cs().prescale_256(),
                    Prescaler::Div1024 => w.$cs().prescale_1024(),
                });
            }

            pub fn stop(&mut self) {
                self.timer.$tccrb.write(|w| w.$cs().no_clock());
            }

            pub fn enable_overflow_interrupt(&mut self) {
                self.timer.$timsk.modify(|_, w| w.$toie().set_bit());
            }

            pub fn disable_overflow_interrupt(&mut self) {
                self.timer.$timsk.modify(|_, w| w.$toie().clear_bit());
            }

            /// Arm the periodic tick: overflow interrupt on, counting at
            /// `prescaler`. The handler bound to the overflow vector in
            /// `main.rs` then runs once per timer period.
            pub fn start_ticking(&mut self, prescaler: Prescaler) {
                self.enable_overflow_interrupt();
                self.start(prescaler);
            }
        }
    };
}

impl_tick_timer!(
    /// 8-bit Timer/Counter0, the digit scan tick source.
    Timer0, TC0, tccr0a, tccr0b, cs0, tcnt0, timsk0, toie0
);

impl_tick_timer!(
    /// 16-bit Timer/Counter1, the counter increment tick source.
    Timer1, TC1, tccr1a, tccr1b, cs1, tcnt1, timsk1, toie1
);
