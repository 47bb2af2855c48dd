//! Simulated special function register file.
//!
//! Backs the `pac` accessors when the crate is built for anything other than
//! the real MIPS target, keeping all register sequencing logic runnable under
//! `cargo test` on the host. The simulation also models the little hardware
//! behavior the clock code depends on: the SYSKEY lock state machine (OSCCON
//! writes are ignored while locked) and the oscillator switch completing by
//! copying NOSC into COSC and clearing OSWEN.

use core::sync::atomic::{AtomicU32, Ordering};

const W1_BASE: u32 = 0xbf80_0000;
const W2_BASE: u32 = 0xbf88_0000;
const W_SIZE: u32 = 0x1_0000;
const BOOT_BASE: u32 = 0xbfc0_2000;
const BOOT_SIZE: u32 = 0x1000;

const OSCCON: u32 = 0xbf80_f000;
const SYSKEY: u32 = 0xbf80_f230;
// The PPS mapping registers sit on a packed 4-byte stride without shadows,
// as do the boot flash configuration words.
const PPS_FIRST: u32 = 0xbf80_fa00;
const PPS_LAST: u32 = 0xbf80_fbff;

const ZERO: AtomicU32 = AtomicU32::new(0);
static W1: [AtomicU32; (W_SIZE / 4) as usize] = [ZERO; (W_SIZE / 4) as usize];
static W2: [AtomicU32; (W_SIZE / 4) as usize] = [ZERO; (W_SIZE / 4) as usize];
static BOOT: [AtomicU32; (BOOT_SIZE / 4) as usize] = [ZERO; (BOOT_SIZE / 4) as usize];

// 0 = locked, 1 = first key accepted, 2 = unlocked.
static SYSKEY_STATE: AtomicU32 = AtomicU32::new(0);

fn cell(addr: u32) -> &'static AtomicU32 {
    let (arr, base): (&'static [AtomicU32], u32) = if addr >= W1_BASE && addr < W1_BASE + W_SIZE {
        (&W1, W1_BASE)
    } else if addr >= W2_BASE && addr < W2_BASE + W_SIZE {
        (&W2, W2_BASE)
    } else if addr >= BOOT_BASE && addr < BOOT_BASE + BOOT_SIZE {
        (&BOOT, BOOT_BASE)
    } else {
        panic!("sim: access to unmapped SFR address {:#010x}", addr)
    };
    &arr[((addr - base) / 4) as usize]
}

fn is_flat(addr: u32) -> bool {
    (addr >= PPS_FIRST && addr <= PPS_LAST) || addr >= BOOT_BASE
}

pub(crate) fn read32(addr: u32) -> u32 {
    let base = if is_flat(addr) { addr } else { addr & !0xf };
    cell(base).load(Ordering::Relaxed)
}

pub(crate) fn write32(addr: u32, val: u32) {
    if addr == SYSKEY {
        let next = match (SYSKEY_STATE.load(Ordering::Relaxed), val) {
            (_, 0xaa99_6655) => 1,
            (1, 0x5566_99aa) => 2,
            _ => 0,
        };
        SYSKEY_STATE.store(next, Ordering::Relaxed);
        return;
    }

    let (base, op) = if is_flat(addr) {
        (addr, 0)
    } else {
        (addr & !0xf, addr & 0xf)
    };

    // The hardware discards OSCCON writes while the system lock is engaged.
    if base == OSCCON && SYSKEY_STATE.load(Ordering::Relaxed) != 2 {
        return;
    }

    let cell = cell(base);
    let old = cell.load(Ordering::Relaxed);
    let new = match op {
        0x0 => val,
        0x4 => old & !val,
        0x8 => old | val,
        0xc => old ^ val,
        _ => panic!("sim: misaligned SFR write to {:#010x}", addr),
    };
    cell.store(new, Ordering::Relaxed);

    if base == OSCCON && new & 0x01 != 0 {
        // Complete the requested switch: COSC := NOSC, OSWEN := 0.
        let nosc = (new >> 8) & 0x07;
        let done = (new & !(0x07 << 12) & !0x01) | (nosc << 12);
        cell.store(done, Ordering::Relaxed);
    }
}

/// Restore every simulated register to its power-on value.
#[cfg(test)]
pub(crate) fn reset() {
    for c in W1.iter().chain(W2.iter()).chain(BOOT.iter()) {
        c.store(0, Ordering::Relaxed);
    }
    SYSKEY_STATE.store(0, Ordering::Relaxed);
    // FRC selected, PBDIV at its 1:8 reset value.
    cell(OSCCON).store(0x0018_0000, Ordering::Relaxed);
    // Boot flash configuration words read erased.
    cell(0xbfc0_2ff4).store(0xffff_ffff, Ordering::Relaxed);
}

/// Store a register value directly, bypassing the lock model and the write
/// shadows. Lets tests stage arbitrary hardware state.
#[cfg(test)]
pub(crate) fn poke(addr: u32, val: u32) {
    let base = if is_flat(addr) { addr } else { addr & !0xf };
    cell(base).store(val, Ordering::Relaxed);
}

/// Serializes tests that touch the shared register file.
#[cfg(test)]
pub(crate) fn lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
