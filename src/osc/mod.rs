//! Oscillator control: clock resolution, the SYSKEY-guarded clock switch,
//! and the peripheral module disable (PMD) gates.

mod clock;
pub use clock::*;

mod clock_config;
pub use clock_config::*;

mod clock_read;
pub use clock_read::update;
pub(crate) use clock_read::{pbclk_hz, read_clocks_from_hw, sysclk_hz};

// Re-export the PAC clock enums
pub use crate::pac::vals::{Fpllidiv, Frcdiv, Pbdiv, Pllmult, Pllodiv};

use crate::pac;

/// PMD register index and bit position for a peripheral.
pub(crate) trait SealedPmdDisable {
    /// (register, bit) in the PMD1..PMD6 bank, register counted from zero.
    const PMD: (usize, u32);

    fn pmd_clear() {
        pac::CFG.pmd(Self::PMD.0).write_clr_value(1 << Self::PMD.1);
    }

    fn pmd_set() {
        pac::CFG.pmd(Self::PMD.0).write_set_value(1 << Self::PMD.1);
    }
}

/// Peripheral with a module disable gate.
#[allow(private_bounds)]
pub trait PmdDisable: SealedPmdDisable + 'static {}

/// Enables peripheral `T` by clearing its module disable bit.
///
/// All modules come out of reset enabled, so this only matters after a
/// [`disable`].
pub fn enable<T: PmdDisable>() {
    T::pmd_clear();
}

/// Disables peripheral `T`.
///
/// The module stops drawing its bus clock. Its registers read zero and
/// writes to them are ignored until the module is enabled again.
///
/// # Safety
///
/// Peripheral must not be in use.
// TODO: should this be `unsafe`?
pub fn disable<T: PmdDisable>() {
    T::pmd_set();
}

#[cfg(test)]
mod tests;
