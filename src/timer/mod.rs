//! Type B 16-bit timers (TMR2..TMR5).

use embassy_hal_internal::Peripheral;

use crate::interrupt::Interrupt;
use crate::osc::SealedPmdDisable;
use crate::pac;
use crate::peripherals;

pub mod low_level;
pub mod systick;

pub use low_level::{prescale_for, Timer};

trait SealedInstance: SealedPmdDisable + Peripheral<P = Self> {}

/// Type B timer instance.
#[allow(private_bounds)]
pub trait Instance: SealedInstance + crate::osc::PmdDisable + 'static {
    /// Period match interrupt for this timer.
    const INTERRUPT: Interrupt;

    /// Registers for this timer.
    fn regs() -> pac::Timer;
}

impl SealedPmdDisable for peripherals::TMR2 {
    const PMD: (usize, u32) = (3, 1);
}
impl crate::osc::PmdDisable for peripherals::TMR2 {}
impl SealedInstance for peripherals::TMR2 {}
impl Instance for peripherals::TMR2 {
    const INTERRUPT: Interrupt = Interrupt::Timer2;
    fn regs() -> pac::Timer {
        pac::TMR2
    }
}

impl SealedPmdDisable for peripherals::TMR3 {
    const PMD: (usize, u32) = (3, 2);
}
impl crate::osc::PmdDisable for peripherals::TMR3 {}
impl SealedInstance for peripherals::TMR3 {}
impl Instance for peripherals::TMR3 {
    const INTERRUPT: Interrupt = Interrupt::Timer3;
    fn regs() -> pac::Timer {
        pac::TMR3
    }
}

impl SealedPmdDisable for peripherals::TMR4 {
    const PMD: (usize, u32) = (3, 3);
}
impl crate::osc::PmdDisable for peripherals::TMR4 {}
impl SealedInstance for peripherals::TMR4 {}
impl Instance for peripherals::TMR4 {
    const INTERRUPT: Interrupt = Interrupt::Timer4;
    fn regs() -> pac::Timer {
        pac::TMR4
    }
}

impl SealedPmdDisable for peripherals::TMR5 {
    const PMD: (usize, u32) = (3, 4);
}
impl crate::osc::PmdDisable for peripherals::TMR5 {}
impl SealedInstance for peripherals::TMR5 {}
impl Instance for peripherals::TMR5 {
    const INTERRUPT: Interrupt = Interrupt::Timer5;
    fn regs() -> pac::Timer {
        pac::TMR5
    }
}
