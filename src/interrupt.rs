//! Interrupt controller plumbing: flag/enable/priority helpers for the
//! sources this HAL drives, multi-vectored mode setup and the optional
//! `critical-section` implementation.
//!
//! The HAL does not own the vector table. Applications place the per-driver
//! `on_interrupt()` functions in their vector stubs; everything here is the
//! register access those handlers and the drivers share.

use crate::pac;

/// Interrupt sources used by this HAL.
///
/// `irq` is the bit index in the IFSx/IECx register pair, `vector` the
/// natural vector number that selects the IPCx priority field.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interrupt {
    CoreTimer,
    Timer2,
    Timer3,
    Timer4,
    Timer5,
    Uart1Error,
    Uart1Rx,
    Uart1Tx,
    Uart2Error,
    Uart2Rx,
    Uart2Tx,
}

impl Interrupt {
    pub const fn irq(self) -> usize {
        match self {
            Interrupt::CoreTimer => 0,
            Interrupt::Timer2 => 9,
            Interrupt::Timer3 => 14,
            Interrupt::Timer4 => 19,
            Interrupt::Timer5 => 24,
            Interrupt::Uart1Error => 39,
            Interrupt::Uart1Rx => 40,
            Interrupt::Uart1Tx => 41,
            Interrupt::Uart2Error => 53,
            Interrupt::Uart2Rx => 54,
            Interrupt::Uart2Tx => 55,
        }
    }

    pub const fn vector(self) -> usize {
        match self {
            Interrupt::CoreTimer => 0,
            Interrupt::Timer2 => 8,
            Interrupt::Timer3 => 12,
            Interrupt::Timer4 => 16,
            Interrupt::Timer5 => 20,
            Interrupt::Uart1Error | Interrupt::Uart1Rx | Interrupt::Uart1Tx => 32,
            Interrupt::Uart2Error | Interrupt::Uart2Rx | Interrupt::Uart2Tx => 37,
        }
    }

    const fn flag(self) -> (usize, u32) {
        let irq = self.irq();
        (irq / 32, 1 << (irq % 32))
    }
}

/// Interrupt priority. P0 keeps the source disabled regardless of its enable
/// bit.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Priority {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
    P4 = 4,
    P5 = 5,
    P6 = 6,
    P7 = 7,
}

impl Priority {
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

/// Returns whether the source's flag is raised.
#[inline]
pub fn is_pending(interrupt: Interrupt) -> bool {
    let (n, mask) = interrupt.flag();
    pac::INT.ifs(n).read() & mask != 0
}

/// Clear the source's flag.
#[inline]
pub fn unpend(interrupt: Interrupt) {
    let (n, mask) = interrupt.flag();
    pac::INT.ifs(n).write_clr_value(mask);
}

/// Raise the source's flag in software.
#[inline]
pub fn pend(interrupt: Interrupt) {
    let (n, mask) = interrupt.flag();
    pac::INT.ifs(n).write_set_value(mask);
}

/// Enable the source.
#[inline]
pub fn enable(interrupt: Interrupt) {
    let (n, mask) = interrupt.flag();
    pac::INT.iec(n).write_set_value(mask);
}

/// Disable the source.
#[inline]
pub fn disable(interrupt: Interrupt) {
    let (n, mask) = interrupt.flag();
    pac::INT.iec(n).write_clr_value(mask);
}

/// Returns whether the source is enabled.
#[inline]
pub fn is_enabled(interrupt: Interrupt) -> bool {
    let (n, mask) = interrupt.flag();
    pac::INT.iec(n).read() & mask != 0
}

/// Program the source's group priority and sub-priority.
pub fn set_priority(interrupt: Interrupt, priority: Priority, subpriority: u8) {
    debug_assert!(subpriority <= 3);
    let vec = interrupt.vector();
    let reg = pac::INT.ipc(vec / 4);
    let shift = (vec % 4) * 8;
    let mask = 0x1f << shift;
    let val = (((priority.to_bits() as u32) << 2) | (subpriority as u32 & 0x03)) << shift;
    critical_section::with(|_| {
        reg.modify(|w| *w = (*w & !mask) | val);
    });
}

/// Switch the controller to multi-vectored mode. Required once during boot
/// before any source is enabled.
pub fn enable_multi_vectored() {
    pac::INT.intcon().modify(|w| w.set_mvec(true));
}

#[cfg(all(target_arch = "mips", feature = "critical-section-single-core"))]
mod cs_impl {
    use critical_section::{set_impl, Impl, RawRestoreState};

    struct SingleCore;
    set_impl!(SingleCore);

    unsafe impl Impl for SingleCore {
        unsafe fn acquire() -> RawRestoreState {
            crate::cp0::disable_interrupts()
        }

        unsafe fn release(was_enabled: RawRestoreState) {
            if was_enabled {
                crate::cp0::enable_interrupts()
            }
        }
    }
}
