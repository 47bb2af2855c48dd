//! Register definitions for the PIC32MX1xx/2xx peripheral set used by this
//! HAL.
//!
//! All addresses are KSEG1 (uncached) virtual addresses. On MIPS targets the
//! accessors are volatile MMIO; everywhere else they are backed by a
//! simulated register file (see [`sim`]) so register-level logic can be
//! exercised in host tests.

pub mod common;
pub mod regs;
pub mod vals;

#[cfg(not(target_arch = "mips"))]
pub(crate) mod sim;

use common::{Reg, R, RW};

#[cfg(target_arch = "mips")]
#[inline(always)]
pub(crate) fn read32(addr: u32) -> u32 {
    unsafe { (addr as *const u32).read_volatile() }
}

#[cfg(target_arch = "mips")]
#[inline(always)]
pub(crate) fn write32(addr: u32, val: u32) {
    unsafe { (addr as *mut u32).write_volatile(val) }
}

#[cfg(not(target_arch = "mips"))]
pub(crate) use sim::{read32, write32};

/// Oscillator configuration block.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Osc(u32);
impl Osc {
    #[inline(always)]
    pub const fn osccon(self) -> Reg<regs::Osccon, RW> {
        unsafe { Reg::from_addr(self.0) }
    }
    /// FRC trim register.
    #[inline(always)]
    pub const fn osctun(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x10) }
    }
}

/// System configuration block: CFGCON, DEVID, SYSKEY and the peripheral
/// module disable registers.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Cfg(u32);
impl Cfg {
    #[inline(always)]
    pub const fn cfgcon(self) -> Reg<regs::Cfgcon, RW> {
        unsafe { Reg::from_addr(self.0) }
    }
    #[inline(always)]
    pub const fn devid(self) -> Reg<u32, R> {
        unsafe { Reg::from_addr(self.0 + 0x20) }
    }
    /// Lock/unlock key register guarding OSCCON and the PMD/PPS locks.
    #[inline(always)]
    pub const fn syskey(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x30) }
    }
    /// Peripheral module disable register `n` (PMD1..PMD6 as 0..5).
    #[inline(always)]
    pub const fn pmd(self, n: usize) -> Reg<u32, RW> {
        assert!(n < 6usize);
        unsafe { Reg::from_addr(self.0 + 0x40 + (n as u32) * 0x10) }
    }
}

/// Device configuration words in boot flash.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DevCfg(u32);
impl DevCfg {
    #[inline(always)]
    pub const fn devcfg2(self) -> Reg<regs::Devcfg2, R> {
        unsafe { Reg::from_addr(self.0 + 0x04) }
    }
}

/// Interrupt controller block.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Int(u32);
impl Int {
    #[inline(always)]
    pub const fn intcon(self) -> Reg<regs::Intcon, RW> {
        unsafe { Reg::from_addr(self.0) }
    }
    #[inline(always)]
    pub const fn intstat(self) -> Reg<regs::Intstat, R> {
        unsafe { Reg::from_addr(self.0 + 0x10) }
    }
    #[inline(always)]
    pub const fn iptmr(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x20) }
    }
    /// Interrupt flag status register `n`.
    #[inline(always)]
    pub const fn ifs(self, n: usize) -> Reg<u32, RW> {
        assert!(n < 2usize);
        unsafe { Reg::from_addr(self.0 + 0x30 + (n as u32) * 0x10) }
    }
    /// Interrupt enable control register `n`.
    #[inline(always)]
    pub const fn iec(self, n: usize) -> Reg<u32, RW> {
        assert!(n < 2usize);
        unsafe { Reg::from_addr(self.0 + 0x60 + (n as u32) * 0x10) }
    }
    /// Interrupt priority control register `n`.
    #[inline(always)]
    pub const fn ipc(self, n: usize) -> Reg<u32, RW> {
        assert!(n < 11usize);
        unsafe { Reg::from_addr(self.0 + 0x90 + (n as u32) * 0x10) }
    }
}

/// Type B 16-bit timer block (TMR2..TMR5).
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Timer(u32);
impl Timer {
    #[inline(always)]
    pub const fn tcon(self) -> Reg<regs::Tcon, RW> {
        unsafe { Reg::from_addr(self.0) }
    }
    /// Current count. Only the low 16 bits are significant.
    #[inline(always)]
    pub const fn tmr(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x10) }
    }
    /// Period register.
    #[inline(always)]
    pub const fn pr(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x20) }
    }
}

/// UART block.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Uart(u32);
impl Uart {
    #[inline(always)]
    pub const fn uxmode(self) -> Reg<regs::Uxmode, RW> {
        unsafe { Reg::from_addr(self.0) }
    }
    #[inline(always)]
    pub const fn uxsta(self) -> Reg<regs::Uxsta, RW> {
        unsafe { Reg::from_addr(self.0 + 0x10) }
    }
    #[inline(always)]
    pub const fn uxtxreg(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x20) }
    }
    #[inline(always)]
    pub const fn uxrxreg(self) -> Reg<u32, R> {
        unsafe { Reg::from_addr(self.0 + 0x30) }
    }
    /// Baud rate divisor.
    #[inline(always)]
    pub const fn uxbrg(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x40) }
    }
}

/// I/O port block. The per-pin registers are plain bit masks.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Gpio(u32);
impl Gpio {
    /// Analog select. A set bit disconnects the digital input buffer.
    #[inline(always)]
    pub const fn ansel(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0) }
    }
    /// Direction: 1 = input, 0 = output.
    #[inline(always)]
    pub const fn tris(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x10) }
    }
    /// Synchronized input levels.
    #[inline(always)]
    pub const fn port(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x20) }
    }
    /// Output latch.
    #[inline(always)]
    pub const fn lat(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x30) }
    }
    /// Open-drain enable.
    #[inline(always)]
    pub const fn odc(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x40) }
    }
    /// Weak pull-up enable.
    #[inline(always)]
    pub const fn cnpu(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x50) }
    }
    /// Weak pull-down enable.
    #[inline(always)]
    pub const fn cnpd(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x60) }
    }
    #[inline(always)]
    pub const fn cncon(self) -> Reg<regs::Cncon, RW> {
        unsafe { Reg::from_addr(self.0 + 0x70) }
    }
    /// Change notice enable.
    #[inline(always)]
    pub const fn cnen(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x80) }
    }
    /// Change notice status.
    #[inline(always)]
    pub const fn cnstat(self) -> Reg<u32, R> {
        unsafe { Reg::from_addr(self.0 + 0x90) }
    }
}

/// Peripheral pin select registers. These sit on a packed 4-byte stride and
/// have no CLR/SET/INV shadows.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Pps(u32);
impl Pps {
    /// UART1 RX input mapping.
    #[inline(always)]
    pub const fn u1rxr(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x50) }
    }
    /// UART2 RX input mapping.
    #[inline(always)]
    pub const fn u2rxr(self) -> Reg<u32, RW> {
        unsafe { Reg::from_addr(self.0 + 0x58) }
    }
    /// Output mapping register RPxnR for pin `pin` of port `port`
    /// (0 = A, 1 = B).
    #[inline(always)]
    pub const fn rpr(self, port: usize, pin: usize) -> Reg<u32, RW> {
        assert!(port < 2usize);
        let base = match port {
            0 => {
                assert!(pin < 5usize);
                self.0 + 0x100
            }
            _ => {
                assert!(pin < 16usize);
                self.0 + 0x12c
            }
        };
        unsafe { Reg::from_addr(base + (pin as u32) * 0x04) }
    }
}

pub const OSC: Osc = Osc(0xbf80_f000);
pub const CFG: Cfg = Cfg(0xbf80_f200);
pub const DEVCFG: DevCfg = DevCfg(0xbfc0_2ff0);
pub const INT: Int = Int(0xbf88_1000);
pub const TMR2: Timer = Timer(0xbf80_0800);
pub const TMR3: Timer = Timer(0xbf80_0a00);
pub const TMR4: Timer = Timer(0xbf80_0c00);
pub const TMR5: Timer = Timer(0xbf80_0e00);
pub const UART1: Uart = Uart(0xbf80_6000);
pub const UART2: Uart = Uart(0xbf80_6200);
pub const GPIOA: Gpio = Gpio(0xbf88_6000);
pub const GPIOB: Gpio = Gpio(0xbf88_6100);
pub const PPS: Pps = Pps(0xbf80_fa00);
