//! Decode of the running clock tree from OSCCON and the DEVCFG2 fuses.
//!
//! All decode helpers are pure functions over register values so the tables
//! can be checked without hardware. Only [`read_clocks_from_hw`] touches
//! registers.

use crate::pac;
use crate::pac::regs::{Devcfg2, Osccon};
use crate::pac::vals::{Cosc, Fpllidiv, Frcdiv, Pbdiv, Pllmult, Pllodiv};
use crate::time::Hertz;

use super::{set_freqs, Clocks, FRC_FREQ, LPRC_FREQ, POSC_FREQ, SOSC_FREQ};

/// Divider ratio selected by the FPLLIDIV fuse. Not a power-of-two series.
pub(crate) const fn pll_input_div(idiv: Fpllidiv) -> u32 {
    match idiv {
        Fpllidiv::DIV1 => 1,
        Fpllidiv::DIV2 => 2,
        Fpllidiv::DIV3 => 3,
        Fpllidiv::DIV4 => 4,
        Fpllidiv::DIV5 => 5,
        Fpllidiv::DIV6 => 6,
        Fpllidiv::DIV10 => 10,
        Fpllidiv::DIV12 => 12,
    }
}

/// Multiplier selected by OSCCON.PLLMULT.
pub(crate) const fn pll_mult(mult: Pllmult) -> u32 {
    match mult {
        Pllmult::MUL15 => 15,
        Pllmult::MUL16 => 16,
        Pllmult::MUL17 => 17,
        Pllmult::MUL18 => 18,
        Pllmult::MUL19 => 19,
        Pllmult::MUL20 => 20,
        Pllmult::MUL21 => 21,
        Pllmult::MUL24 => 24,
    }
}

/// Divider ratio selected by OSCCON.PLLODIV. Powers of two except that the
/// top code skips 128 and selects 256.
pub(crate) const fn pll_output_div(odiv: Pllodiv) -> u32 {
    match odiv {
        Pllodiv::DIV1 => 1,
        Pllodiv::DIV2 => 2,
        Pllodiv::DIV4 => 4,
        Pllodiv::DIV8 => 8,
        Pllodiv::DIV16 => 16,
        Pllodiv::DIV32 => 32,
        Pllodiv::DIV64 => 64,
        Pllodiv::DIV256 => 256,
    }
}

/// Divider ratio selected by OSCCON.FRCDIV. Same series as PLLODIV.
pub(crate) const fn frc_div(frcdiv: Frcdiv) -> u32 {
    match frcdiv {
        Frcdiv::DIV1 => 1,
        Frcdiv::DIV2 => 2,
        Frcdiv::DIV4 => 4,
        Frcdiv::DIV8 => 8,
        Frcdiv::DIV16 => 16,
        Frcdiv::DIV32 => 32,
        Frcdiv::DIV64 => 64,
        Frcdiv::DIV256 => 256,
    }
}

/// Divider ratio selected by OSCCON.PBDIV.
pub(crate) const fn pb_div(pbdiv: Pbdiv) -> u32 {
    match pbdiv {
        Pbdiv::DIV1 => 1,
        Pbdiv::DIV2 => 2,
        Pbdiv::DIV4 => 4,
        Pbdiv::DIV8 => 8,
    }
}

/// PLL output for the given reference. The input divider comes from the
/// DEVCFG2 fuses, multiplier and output divider from OSCCON.
///
/// Evaluated as divide, multiply, divide in that order. The intermediate
/// products stay well inside `u32` for every reachable combination (worst
/// case 20 MHz * 24 = 480 MHz).
pub(crate) const fn pll_output_hz(reference: Hertz, osccon: Osccon, devcfg2: Devcfg2) -> u32 {
    reference.0 / pll_input_div(devcfg2.fpllidiv()) * pll_mult(osccon.pllmult())
        / pll_output_div(osccon.pllodiv())
}

/// System clock frequency for a given OSCCON/DEVCFG2 pair.
///
/// The match is exhaustive over COSC. All eight selector codes name a real
/// source on this family, so there is no failure case.
pub(crate) const fn sysclk_hz(osccon: Osccon, devcfg2: Devcfg2) -> u32 {
    match osccon.cosc() {
        Cosc::FRC => FRC_FREQ.0,
        Cosc::FRCPLL => pll_output_hz(FRC_FREQ, osccon, devcfg2),
        Cosc::POSC => POSC_FREQ.0,
        Cosc::POSCPLL => pll_output_hz(POSC_FREQ, osccon, devcfg2),
        Cosc::SOSC => SOSC_FREQ.0,
        Cosc::LPRC => LPRC_FREQ.0,
        Cosc::FRCDIV16 => FRC_FREQ.0 / 16,
        Cosc::FRCDIV => FRC_FREQ.0 / frc_div(osccon.frcdiv()),
    }
}

/// Peripheral bus clock derived from SYSCLK and OSCCON.PBDIV.
pub(crate) const fn pbclk_hz(sysclk: u32, osccon: Osccon) -> u32 {
    sysclk / pb_div(osccon.pbdiv())
}

/// Decode the full clock state out of live registers.
pub(crate) fn read_clocks_from_hw() -> Clocks {
    let osccon = pac::OSC.osccon().read();
    let devcfg2 = pac::DEVCFG.devcfg2().read();

    let sysclk = sysclk_hz(osccon, devcfg2);
    Clocks {
        sysclk: Hertz(sysclk),
        pbclk: Hertz(pbclk_hz(sysclk, osccon)),
    }
}

/// Re-resolve the clock tree from hardware and refresh the cached
/// frequencies.
///
/// Call this after anything that may retarget the system clock behind the
/// HAL's back (a bootloader handoff, direct OSCCON writes). Reading the
/// selector and divider fields is side-effect free, so calling this twice in
/// a row returns the same frequencies and leaves the same cache.
pub fn update() -> Hertz {
    let freqs = read_clocks_from_hw();
    set_freqs(freqs);
    freqs.sysclk
}
