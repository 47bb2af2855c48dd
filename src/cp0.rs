//! CP0 core register access: the COUNT/COMPARE core timer and the Status
//! register interrupt-enable bit.
//!
//! COUNT increments once every two CPU cycles, free-running from reset, and
//! cannot be stopped.

#[cfg(target_arch = "mips")]
mod imp {
    use core::arch::asm;

    #[inline(always)]
    pub fn count() -> u32 {
        let val: u32;
        unsafe { asm!("mfc0 {0}, $9", out(reg) val, options(nomem, nostack)) };
        val
    }

    #[inline(always)]
    pub fn compare() -> u32 {
        let val: u32;
        unsafe { asm!("mfc0 {0}, $11", out(reg) val, options(nomem, nostack)) };
        val
    }

    #[inline(always)]
    pub fn set_compare(val: u32) {
        unsafe { asm!("mtc0 {0}, $11", "ehb", in(reg) val, options(nomem, nostack)) };
    }

    /// Globally mask interrupts. Returns whether they were enabled before.
    #[inline(always)]
    pub fn disable_interrupts() -> bool {
        let prev: u32;
        // di deposits the pre-modification Status value in rt; IE is bit 0.
        unsafe { asm!("di {0}", "ehb", out(reg) prev, options(nomem, nostack)) };
        prev & 0x01 != 0
    }

    /// Globally unmask interrupts.
    ///
    /// # Safety
    ///
    /// Must not be called inside a critical section.
    #[inline(always)]
    pub unsafe fn enable_interrupts() {
        asm!("ei", "ehb", options(nomem, nostack));
    }

    #[inline(always)]
    pub fn interrupts_enabled() -> bool {
        let status: u32;
        unsafe { asm!("mfc0 {0}, $12", out(reg) status, options(nomem, nostack)) };
        status & 0x01 != 0
    }
}

#[cfg(not(target_arch = "mips"))]
mod imp {
    use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    pub(super) static COUNT: AtomicU32 = AtomicU32::new(0);
    pub(super) static COMPARE: AtomicU32 = AtomicU32::new(0);
    pub(super) static IE: AtomicBool = AtomicBool::new(false);

    #[inline(always)]
    pub fn count() -> u32 {
        COUNT.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn compare() -> u32 {
        COMPARE.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn set_compare(val: u32) {
        COMPARE.store(val, Ordering::Relaxed);
    }

    /// Globally mask interrupts. Returns whether they were enabled before.
    #[inline(always)]
    pub fn disable_interrupts() -> bool {
        IE.swap(false, Ordering::Relaxed)
    }

    /// Globally unmask interrupts.
    ///
    /// # Safety
    ///
    /// Must not be called inside a critical section.
    #[inline(always)]
    pub unsafe fn enable_interrupts() {
        IE.store(true, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn interrupts_enabled() -> bool {
        IE.load(Ordering::Relaxed)
    }
}

pub use imp::*;

/// Test manipulators for the simulated COUNT/COMPARE pair.
#[cfg(all(test, not(target_arch = "mips")))]
pub(crate) mod sim {
    use core::sync::atomic::Ordering;

    use super::imp;

    pub(crate) fn reset() {
        imp::COUNT.store(0, Ordering::Relaxed);
        imp::COMPARE.store(0, Ordering::Relaxed);
        imp::IE.store(false, Ordering::Relaxed);
    }

    pub(crate) fn set_count(val: u32) {
        imp::COUNT.store(val, Ordering::Relaxed);
    }

    pub(crate) fn advance_count(ticks: u32) {
        imp::COUNT.fetch_add(ticks, Ordering::Relaxed);
    }
}
