#![no_std]
#![doc = include_str!("../README.md")]
#![allow(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate std;

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod macros;

#[cfg(feature = "unstable-pac")]
pub mod pac;
#[cfg(not(feature = "unstable-pac"))]
pub(crate) mod pac;

pub mod cp0;
pub mod interrupt;
pub mod osc;

pub mod coretimer;
pub mod delay;
pub mod gpio;
pub mod time;
pub mod timer;
pub mod usart;

// Reexports
pub use delay::{blocking_delay_ms, blocking_delay_us, micros, millis, ticks, Delay};
pub use embassy_hal_internal::{into_ref, Peripheral, PeripheralRef};

embassy_hal_internal::peripherals! {
    // I/O ports
    PA0, PA1, PA2, PA3, PA4,
    PB0, PB1, PB2, PB3, PB4, PB5, PB6, PB7,
    PB8, PB9, PB10, PB11, PB12, PB13, PB14, PB15,
    // Type B timers
    TMR2, TMR3, TMR4, TMR5,
    // UARTs
    UART1, UART2,
}

/// HAL configuration for the PIC32MX1xx/2xx family
pub mod config {
    use crate::{interrupt, osc};

    /// HAL configuration passed when initializing.
    #[non_exhaustive]
    pub struct Config {
        /// Clock tree programming applied during init.
        pub osc: osc::Config,
        /// Priority for the tick source interrupt (core timer compare, or
        /// the TMR2 rollover with the `tick-tmr2` feature).
        pub tick_priority: interrupt::Priority,
        /// Gate every peripheral module off during init. Drivers ungate the
        /// modules they claim, so anything left gated draws no bus clock.
        pub gate_unused_modules: bool,
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                osc: osc::Config::default(),
                tick_priority: interrupt::Priority::P2,
                gate_unused_modules: true,
            }
        }
    }
}
pub use config::Config;

/// Initialize the HAL with the provided configuration.
///
/// This returns the peripheral singletons that can be used for creating
/// drivers.
///
/// This should only be called once at startup, otherwise it panics.
pub fn init(config: Config) -> Peripherals {
    // Do this first, so that it panics if user is calling `init` a second
    // time before doing anything important.
    let p = Peripherals::take();

    critical_section::with(|_| {
        interrupt::enable_multi_vectored();
        coretimer::init(config.tick_priority);

        if config.gate_unused_modules {
            for n in 0..6 {
                pac::CFG.pmd(n).write_set_value(0xffff_ffff);
            }
        }

        // Every pin digital until a driver claims it otherwise.
        pac::GPIOA.ansel().write_value(0);
        pac::GPIOB.ansel().write_value(0);

        // Programs the bus dividers and resolves the clock tree, switching
        // the oscillator source first when the config asks for one.
        unsafe { osc::init(config.osc) };

        #[cfg(feature = "tick-tmr2")]
        timer::systick::init(config.tick_priority);
    });

    // SAFETY: the bring-up critical section above has been released.
    unsafe { cp0::enable_interrupts() };

    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pac::sim;
    use crate::time::Hertz;

    #[test]
    fn init_brings_up_the_board() {
        let _guard = sim::lock();
        sim::reset();
        cp0::sim::reset();

        let _p = init(Config::default());

        // Multi-vectored interrupts on.
        assert!(pac::INT.intcon().read().mvec());
        // All pins digital.
        assert_eq!(pac::GPIOA.ansel().read(), 0);
        assert_eq!(pac::GPIOB.ansel().read(), 0);
        // Unused modules gated.
        assert_eq!(pac::CFG.pmd(0).read(), 0xffff_ffff);
        // FRC with the bus reprogrammed from 1:8 to the 1:1 default.
        assert_eq!(osc::clocks().sysclk, Hertz(8_000_000));
        assert_eq!(osc::clocks().pbclk, Hertz(8_000_000));
        // Interrupts running.
        assert!(cp0::interrupts_enabled());
    }
}
