//! Core timer: the CP0 cycle counter used as the default tick source and as
//! a periodic interrupt.
//!
//! COUNT increments once every two CPU cycles and can never be stopped, so
//! [`ticks`] needs no setup at all. The compare facility is optional: give it
//! a period with [`set_period`], then [`attach`] a callback to start taking
//! interrupts.

use core::cell::Cell;
use core::sync::atomic::{AtomicU32, Ordering};

use critical_section::Mutex;

use crate::interrupt::{self, Interrupt, Priority};
use crate::cp0;

/// Compare period in COUNT units (half the period in CPU cycles).
static PERIOD: AtomicU32 = AtomicU32::new(0);

/// Installed compare callback. Starts out as a no-op so a match that slips
/// in around `attach` is harmless.
static CALLBACK: Mutex<Cell<fn()>> = Mutex::new(Cell::new(noop));

fn noop() {}

/// Current tick count in CPU cycles.
///
/// COUNT advances every second cycle, so the raw register is scaled by two.
/// Wraps every 2^32 cycles (about 107 seconds at 40 MHz); compare instants
/// with wrapping arithmetic.
#[inline]
pub fn ticks() -> u32 {
    cp0::count() << 1
}

/// Set the compare period to `period` CPU cycles.
///
/// Records the period for the handler to re-arm with and advances COMPARE by
/// one period from its current value, so back-to-back reprogramming keeps
/// the match grid anchored to the old threshold rather than to whenever this
/// was called. Call this before [`attach`]; an armed compare with a zero
/// period re-matches immediately, which starves the main context.
pub fn set_period(period: u32) {
    let counts = period / 2;
    PERIOD.store(counts, Ordering::Relaxed);
    cp0::set_compare(cp0::compare().wrapping_add(counts));
}

/// Install `callback` to run on every compare match and enable the core
/// timer interrupt.
///
/// There is one callback slot: attaching replaces whatever was installed
/// before, last writer wins. The pending period is untouched. There is no
/// detach; install a no-op instead.
pub fn attach(callback: fn()) {
    critical_section::with(|cs| CALLBACK.borrow(cs).set(callback));
    interrupt::unpend(Interrupt::CoreTimer);
    interrupt::enable(Interrupt::CoreTimer);
}

/// Core timer compare handler: call from the core timer vector.
///
/// Clears the match flag, advances COMPARE by one period from where it was
/// (keeping match instants drift-free even when handling is late), then runs
/// the attached callback.
pub fn on_interrupt() {
    interrupt::unpend(Interrupt::CoreTimer);
    let period = PERIOD.load(Ordering::Relaxed);
    cp0::set_compare(cp0::compare().wrapping_add(period));

    let callback = critical_section::with(|cs| CALLBACK.borrow(cs).get());
    callback();
}

/// Reset the callback slot and program the interrupt priority. The interrupt
/// stays disabled until the first [`attach`].
pub(crate) fn init(priority: Priority) {
    critical_section::with(|cs| CALLBACK.borrow(cs).set(noop));
    interrupt::disable(Interrupt::CoreTimer);
    interrupt::set_priority(Interrupt::CoreTimer, priority, 0);
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::pac::sim;

    static FIRED: AtomicU32 = AtomicU32::new(0);
    static REPLACED: AtomicU32 = AtomicU32::new(0);

    fn bump() {
        FIRED.fetch_add(1, Ordering::Relaxed);
    }

    fn bump_replacement() {
        REPLACED.fetch_add(1, Ordering::Relaxed);
    }

    #[test]
    fn match_fires_once_and_rearms_by_one_period() {
        let _guard = sim::lock();
        sim::reset();
        cp0::sim::reset();
        FIRED.store(0, Ordering::Relaxed);

        init(Priority::P2);

        // 2_000 CPU cycles is 1_000 COUNT units, advanced from COMPARE = 0.
        set_period(2_000);
        assert_eq!(cp0::compare(), 1_000);

        attach(bump);
        assert!(interrupt::is_enabled(Interrupt::CoreTimer));

        cp0::sim::set_count(1_000);
        on_interrupt();

        assert_eq!(FIRED.load(Ordering::Relaxed), 1);
        // Advanced from the old threshold, not restarted from COUNT or zero.
        assert_eq!(cp0::compare(), 2_000);
        assert!(!interrupt::is_pending(Interrupt::CoreTimer));
    }

    #[test]
    fn set_period_advances_from_the_compare_threshold() {
        let _guard = sim::lock();
        sim::reset();
        cp0::sim::reset();

        // COUNT and COMPARE disagree; the new match instant must be anchored
        // to COMPARE, not to COUNT.
        cp0::set_compare(5_000);
        cp0::sim::set_count(1_000);

        set_period(2_000);
        assert_eq!(cp0::compare(), 6_000);
    }

    #[test]
    fn attach_replaces_the_previous_callback() {
        let _guard = sim::lock();
        sim::reset();
        cp0::sim::reset();
        FIRED.store(0, Ordering::Relaxed);
        REPLACED.store(0, Ordering::Relaxed);

        init(Priority::P2);
        set_period(2_000);
        attach(bump);
        attach(bump_replacement);

        on_interrupt();

        assert_eq!(FIRED.load(Ordering::Relaxed), 0);
        assert_eq!(REPLACED.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn init_resets_the_slot_to_a_no_op() {
        let _guard = sim::lock();
        sim::reset();
        cp0::sim::reset();
        FIRED.store(0, Ordering::Relaxed);

        set_period(2_000);
        attach(bump);
        init(Priority::P2);

        // The old callback must be gone and the interrupt left disabled.
        on_interrupt();
        assert_eq!(FIRED.load(Ordering::Relaxed), 0);
        assert!(!interrupt::is_enabled(Interrupt::CoreTimer));
    }

    #[test]
    fn ticks_scales_count_by_two() {
        let _guard = sim::lock();
        cp0::sim::reset();

        cp0::sim::set_count(0);
        assert_eq!(ticks(), 0);
        cp0::sim::set_count(21);
        assert_eq!(ticks(), 42);
    }
}
