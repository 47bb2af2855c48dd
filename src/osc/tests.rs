use super::clock_read::{pbclk_hz, sysclk_hz};
use super::*;
use crate::pac;
use crate::pac::regs::{Devcfg2, Osccon};
use crate::pac::sim;
use crate::pac::vals::{Cosc, Fpllidiv, Frcdiv, Pbdiv, Pllmult, Pllodiv};
use crate::time::Hertz;

fn osccon_with(cosc: Cosc, mult: Pllmult, odiv: Pllodiv, frcdiv: Frcdiv, pbdiv: Pbdiv) -> Osccon {
    let mut w = Osccon(0);
    w.set_cosc(cosc);
    w.set_pllmult(mult);
    w.set_pllodiv(odiv);
    w.set_frcdiv(frcdiv);
    w.set_pbdiv(pbdiv);
    w
}

fn devcfg2_with(idiv: Fpllidiv) -> Devcfg2 {
    let mut w = Devcfg2(0);
    w.set_fpllidiv(idiv);
    w
}

#[test]
fn decode_every_source_selector() {
    // PLL path set to /2 *16 /4, FRC postscaler to 1:8.
    let devcfg2 = devcfg2_with(Fpllidiv::DIV2);
    let decode = |cosc| {
        let osccon = osccon_with(cosc, Pllmult::MUL16, Pllodiv::DIV4, Frcdiv::DIV8, Pbdiv::DIV1);
        sysclk_hz(osccon, devcfg2)
    };

    assert_eq!(decode(Cosc::FRC), 8_000_000);
    assert_eq!(decode(Cosc::FRCPLL), 16_000_000);
    assert_eq!(decode(Cosc::POSC), 20_000_000);
    assert_eq!(decode(Cosc::POSCPLL), 40_000_000);
    assert_eq!(decode(Cosc::SOSC), 32_768);
    assert_eq!(decode(Cosc::LPRC), 31_250);
    assert_eq!(decode(Cosc::FRCDIV16), 500_000);
    assert_eq!(decode(Cosc::FRCDIV), 1_000_000);
}

#[test]
fn primary_pll_example_hits_40_mhz() {
    // 20 MHz crystal / 2 = 10 MHz, * 16 = 160 MHz, / 4 = 40 MHz.
    let osccon = osccon_with(
        Cosc::POSCPLL,
        Pllmult::MUL16,
        Pllodiv::DIV4,
        Frcdiv::DIV2,
        Pbdiv::DIV1,
    );
    assert_eq!(sysclk_hz(osccon, devcfg2_with(Fpllidiv::DIV2)), 40_000_000);
}

#[test]
fn pll_grid_matches_reference_math() {
    let idiv_ratio: [u64; 8] = [1, 2, 3, 4, 5, 6, 10, 12];
    let mult: [u64; 8] = [15, 16, 17, 18, 19, 20, 21, 24];
    let odiv_ratio: [u64; 8] = [1, 2, 4, 8, 16, 32, 64, 256];

    for i in 0u8..8 {
        let devcfg2 = devcfg2_with(Fpllidiv::from_bits(i));
        for m in 0u8..8 {
            for o in 0u8..8 {
                let stage = |cosc| {
                    osccon_with(
                        cosc,
                        Pllmult::from_bits(m),
                        Pllodiv::from_bits(o),
                        Frcdiv::DIV1,
                        Pbdiv::DIV1,
                    )
                };
                let expected = |base: u64| {
                    (base / idiv_ratio[i as usize] * mult[m as usize] / odiv_ratio[o as usize])
                        as u32
                };

                assert_eq!(
                    sysclk_hz(stage(Cosc::POSCPLL), devcfg2),
                    expected(20_000_000),
                    "POSC PLL idiv={} mult={} odiv={}",
                    i,
                    m,
                    o
                );
                assert_eq!(
                    sysclk_hz(stage(Cosc::FRCPLL), devcfg2),
                    expected(8_000_000),
                    "FRC PLL idiv={} mult={} odiv={}",
                    i,
                    m,
                    o
                );
            }
        }
    }
}

#[test]
fn frc_postscaler_covers_all_codes() {
    let devcfg2 = devcfg2_with(Fpllidiv::DIV1);
    let expected: [u32; 8] = [
        8_000_000, 4_000_000, 2_000_000, 1_000_000, 500_000, 250_000, 125_000, 31_250,
    ];
    for (code, hz) in expected.into_iter().enumerate() {
        let osccon = osccon_with(
            Cosc::FRCDIV,
            Pllmult::MUL15,
            Pllodiv::DIV1,
            Frcdiv::from_bits(code as u8),
            Pbdiv::DIV1,
        );
        assert_eq!(sysclk_hz(osccon, devcfg2), hz, "FRCDIV code {}", code);
    }
}

#[test]
fn peripheral_bus_follows_pbdiv() {
    let stage = |pbdiv| osccon_with(Cosc::POSC, Pllmult::MUL15, Pllodiv::DIV1, Frcdiv::DIV1, pbdiv);

    assert_eq!(pbclk_hz(40_000_000, stage(Pbdiv::DIV1)), 40_000_000);
    assert_eq!(pbclk_hz(40_000_000, stage(Pbdiv::DIV2)), 20_000_000);
    assert_eq!(pbclk_hz(40_000_000, stage(Pbdiv::DIV4)), 10_000_000);
    assert_eq!(pbclk_hz(40_000_000, stage(Pbdiv::DIV8)), 5_000_000);
    // Power-on state: FRC with the bus at 1:8.
    assert_eq!(pbclk_hz(8_000_000, stage(Pbdiv::DIV8)), 1_000_000);
}

#[test]
fn power_on_cache_matches_reset_dividers() {
    assert_eq!(Clocks::POWER_ON.sysclk, Hertz(8_000_000));
    assert_eq!(Clocks::POWER_ON.pbclk, Hertz(1_000_000));
}

#[test]
fn update_resolves_live_registers_and_is_idempotent() {
    let _guard = sim::lock();
    sim::reset();

    let osccon = osccon_with(
        Cosc::POSCPLL,
        Pllmult::MUL16,
        Pllodiv::DIV4,
        Frcdiv::DIV2,
        Pbdiv::DIV2,
    );
    sim::poke(pac::OSC.osccon().addr(), osccon.0);
    sim::poke(pac::DEVCFG.devcfg2().addr(), devcfg2_with(Fpllidiv::DIV2).0);

    let first = update();
    assert_eq!(first, Hertz(40_000_000));
    assert_eq!(
        clocks(),
        Clocks {
            sysclk: Hertz(40_000_000),
            pbclk: Hertz(20_000_000),
        }
    );

    // Reading the selector fields has no side effects, so resolving again
    // must report the identical state.
    let second = update();
    assert_eq!(second, first);
    assert_eq!(clocks().sysclk, first);
}

#[test]
fn switch_completes_and_reresolves() {
    let _guard = sim::lock();
    sim::reset();

    // PLL dividers staged ahead of the switch request, bus at 1:1.
    let osccon = osccon_with(
        Cosc::FRC,
        Pllmult::MUL16,
        Pllodiv::DIV4,
        Frcdiv::DIV2,
        Pbdiv::DIV1,
    );
    sim::poke(pac::OSC.osccon().addr(), osccon.0);
    sim::poke(pac::DEVCFG.devcfg2().addr(), devcfg2_with(Fpllidiv::DIV2).0);

    let hz = switch(ClockSource::POSCPLL);

    assert_eq!(hz, Hertz(40_000_000));
    let osccon = pac::OSC.osccon().read();
    assert_eq!(osccon.cosc(), Cosc::POSCPLL);
    assert!(!osccon.oswen());
    assert_eq!(clocks().sysclk, hz);
    assert_eq!(clocks().pbclk, Hertz(40_000_000));
}

#[test]
fn locked_osccon_writes_are_discarded() {
    let _guard = sim::lock();
    sim::reset();

    let before = pac::OSC.osccon().read();
    assert_eq!(before.pbdiv(), Pbdiv::DIV8);

    // No unlock: the write must bounce off.
    pac::OSC.osccon().modify(|w| w.set_pbdiv(Pbdiv::DIV1));
    assert_eq!(pac::OSC.osccon().read().pbdiv(), Pbdiv::DIV8);

    syskey_unlock();
    pac::OSC.osccon().modify(|w| w.set_pbdiv(Pbdiv::DIV1));
    assert_eq!(pac::OSC.osccon().read().pbdiv(), Pbdiv::DIV1);

    syskey_lock();
    pac::OSC.osccon().modify(|w| w.set_pbdiv(Pbdiv::DIV4));
    assert_eq!(pac::OSC.osccon().read().pbdiv(), Pbdiv::DIV1);
}

#[test]
fn unlock_needs_both_keys_in_order() {
    let _guard = sim::lock();
    sim::reset();

    // Second key alone.
    pac::CFG.syskey().write_value(0x5566_99aa);
    pac::OSC.osccon().modify(|w| w.set_pbdiv(Pbdiv::DIV1));
    assert_eq!(pac::OSC.osccon().read().pbdiv(), Pbdiv::DIV8);

    // First key followed by garbage relocks.
    pac::CFG.syskey().write_value(0xaa99_6655);
    pac::CFG.syskey().write_value(0xdead_beef);
    pac::CFG.syskey().write_value(0x5566_99aa);
    pac::OSC.osccon().modify(|w| w.set_pbdiv(Pbdiv::DIV1));
    assert_eq!(pac::OSC.osccon().read().pbdiv(), Pbdiv::DIV8);

    // The real sequence.
    pac::CFG.syskey().write_value(0xaa99_6655);
    pac::CFG.syskey().write_value(0x5566_99aa);
    pac::OSC.osccon().modify(|w| w.set_pbdiv(Pbdiv::DIV1));
    assert_eq!(pac::OSC.osccon().read().pbdiv(), Pbdiv::DIV1);
}

#[test]
fn boot_config_programs_dividers_and_cache() {
    let _guard = sim::lock();
    sim::reset();

    unsafe { init(Config::new().with_pbdiv(Pbdiv::DIV1)) };

    let osccon = pac::OSC.osccon().read();
    assert_eq!(osccon.pbdiv(), Pbdiv::DIV1);
    assert_eq!(osccon.frcdiv(), Frcdiv::DIV2);
    assert!(!osccon.soscen());
    assert_eq!(
        clocks(),
        Clocks {
            sysclk: Hertz(8_000_000),
            pbclk: Hertz(8_000_000),
        }
    );
}

#[test]
fn boot_config_can_retarget_the_source() {
    let _guard = sim::lock();
    sim::reset();

    unsafe { init(Config::new().with_frcdiv(Frcdiv::DIV16).with_source(ClockSource::FRCDIV)) };

    assert_eq!(pac::OSC.osccon().read().cosc(), Cosc::FRCDIV);
    assert_eq!(clocks().sysclk, Hertz(500_000));
}
