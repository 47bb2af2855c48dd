//! Software-extended tick counter on TMR2.
//!
//! TMR2 free-runs at 1:1 off PBCLK with a full 0xFFFF period; every rollover
//! interrupt adds `1 << 16` to a software high word. Reads splice the high
//! word onto the live 16-bit count, so the visible counter is 32 bits of
//! PBCLK ticks.
//!
//! While this tick source is active TMR2 belongs to it: do not also drive
//! the TMR2 singleton through [`Timer`](super::Timer).

use core::sync::atomic::{AtomicU32, Ordering};

use crate::interrupt::{self, Interrupt, Priority};
use crate::{osc, pac, peripherals};

/// Software extension, held in bits 31:16. The rollover handler is the only
/// writer.
static HIGH: AtomicU32 = AtomicU32::new(0);

/// Configure TMR2 as the tick source: 1:1 prescale, full-range period,
/// rollover interrupt enabled, counter running.
///
/// [`init`](crate::init) calls this when the `tick-tmr2` feature selects
/// this tick source; there is no need to call it again.
pub fn init(priority: Priority) {
    osc::enable::<peripherals::TMR2>();

    let regs = pac::TMR2;
    regs.tcon().write(|_| {});
    regs.tmr().write_value(0);
    regs.pr().write_value(0xffff);
    HIGH.store(0, Ordering::Relaxed);

    interrupt::set_priority(Interrupt::Timer2, priority, 0);
    interrupt::unpend(Interrupt::Timer2);
    interrupt::enable(Interrupt::Timer2);

    regs.tcon().write_set(|w| w.set_on(true));
}

/// Current tick count in PBCLK cycles. Wraps every 2^32 ticks; compare
/// instants with wrapping arithmetic.
pub fn ticks() -> u32 {
    read_extended(
        || HIGH.load(Ordering::Relaxed),
        || pac::TMR2.tmr().read() as u16,
    )
}

/// Splice a software high word onto a live low word.
///
/// The low word can roll over (bumping the high word from interrupt context)
/// between any two reads here, so the high word is read on both sides of the
/// low read and the whole thing retried until it held still. Without the
/// retry a read straddling a rollover can be off by a full 0x10000.
pub(crate) fn read_extended(high: impl Fn() -> u32, low: impl Fn() -> u16) -> u32 {
    loop {
        let msw = high();
        let lsw = low();
        if high() == msw {
            return msw | lsw as u32;
        }
    }
}

/// TMR2 rollover handler: call from the timer 2 vector.
pub fn on_interrupt() {
    interrupt::unpend(Interrupt::Timer2);
    HIGH.fetch_add(1 << 16, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::pac::sim;
    use crate::pac::vals::Tckps;

    #[test]
    fn init_sets_up_a_free_running_full_range_timer() {
        let _guard = sim::lock();
        sim::reset();

        init(Priority::P2);

        let tcon = pac::TMR2.tcon().read();
        assert!(tcon.on());
        assert_eq!(tcon.tckps(), Tckps::DIV1);
        assert_eq!(pac::TMR2.pr().read(), 0xffff);
        assert!(interrupt::is_enabled(Interrupt::Timer2));
        // TMR2 ungated: T2MD clear.
        assert_eq!(pac::CFG.pmd(3).read() & (1 << 1), 0);
    }

    #[test]
    fn rollover_adds_a_full_low_word_range() {
        let _guard = sim::lock();
        sim::reset();

        init(Priority::P2);
        assert_eq!(ticks(), 0);

        sim::poke(pac::TMR2.tmr().addr(), 0x1234);
        assert_eq!(ticks(), 0x1234);

        // Counter wrapped: hardware raises the rollover interrupt.
        sim::poke(pac::TMR2.tmr().addr(), 0x0002);
        on_interrupt();
        assert_eq!(ticks(), 0x0001_0002);
        assert!(!interrupt::is_pending(Interrupt::Timer2));
    }

    #[test]
    fn straddled_rollover_returns_the_post_wrap_value() {
        // The counter rolls 0xffff -> 0 right before the low read, and the
        // handler's high word bump lands between the first high read and its
        // confirmation re-read. A single read pair would splice the stale
        // high word onto the wrapped low word and come out 0x10000 short.
        let high_reads = Cell::new(0u32);

        let value = read_extended(
            || {
                let n = high_reads.get();
                high_reads.set(n + 1);
                if n == 0 {
                    0
                } else {
                    0x0001_0000
                }
            },
            || 0,
        );

        assert_eq!(value, 0x0001_0000);
        // One torn pass detected and retried, one clean pass.
        assert_eq!(high_reads.get(), 4);
    }

    #[test]
    fn stable_high_word_needs_no_retry() {
        let reads = Cell::new(0u32);
        let value = read_extended(
            || {
                reads.set(reads.get() + 1);
                0x0005_0000
            },
            || 0x00ff,
        );
        assert_eq!(value, 0x0005_00ff);
        assert_eq!(reads.get(), 2);
    }
}
