use super::vals;

macro_rules! reg_word {
    ($t:ty) => {
        impl From<u32> for $t {
            #[inline(always)]
            fn from(val: u32) -> Self {
                Self(val)
            }
        }
        impl From<$t> for u32 {
            #[inline(always)]
            fn from(val: $t) -> u32 {
                val.0
            }
        }
    };
}

/// Oscillator control register.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Osccon(pub u32);
impl Osccon {
    /// Oscillator switch enable. Set to request a switch to NOSC; cleared by
    /// hardware once the switch completed.
    #[inline(always)]
    pub const fn oswen(&self) -> bool {
        let val = self.0 & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_oswen(&mut self, val: bool) {
        self.0 = (self.0 & !0x01) | (val as u32);
    }
    /// Secondary oscillator enable.
    #[inline(always)]
    pub const fn soscen(&self) -> bool {
        let val = (self.0 >> 1usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_soscen(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 1usize)) | ((val as u32) << 1usize);
    }
    /// Clock fail detect.
    #[inline(always)]
    pub const fn cf(&self) -> bool {
        let val = (self.0 >> 3usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_cf(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 3usize)) | ((val as u32) << 3usize);
    }
    /// Sleep mode enable.
    #[inline(always)]
    pub const fn slpen(&self) -> bool {
        let val = (self.0 >> 4usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_slpen(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 4usize)) | ((val as u32) << 4usize);
    }
    /// Sleep mode lock status.
    #[inline(always)]
    pub const fn slock(&self) -> bool {
        let val = (self.0 >> 5usize) & 0x01;
        val != 0
    }
    /// USB PLL lock status.
    #[inline(always)]
    pub const fn ulock(&self) -> bool {
        let val = (self.0 >> 6usize) & 0x01;
        val != 0
    }
    /// Clock selection lock.
    #[inline(always)]
    pub const fn clklock(&self) -> bool {
        let val = (self.0 >> 7usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_clklock(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 7usize)) | ((val as u32) << 7usize);
    }
    /// New oscillator source selection.
    #[inline(always)]
    pub const fn nosc(&self) -> vals::Cosc {
        let val = (self.0 >> 8usize) & 0x07;
        vals::Cosc::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_nosc(&mut self, val: vals::Cosc) {
        self.0 = (self.0 & !(0x07 << 8usize)) | ((val.to_bits() as u32) << 8usize);
    }
    /// Current oscillator source (read-only status).
    #[inline(always)]
    pub const fn cosc(&self) -> vals::Cosc {
        let val = (self.0 >> 12usize) & 0x07;
        vals::Cosc::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_cosc(&mut self, val: vals::Cosc) {
        self.0 = (self.0 & !(0x07 << 12usize)) | ((val.to_bits() as u32) << 12usize);
    }
    /// PLL multiplier.
    #[inline(always)]
    pub const fn pllmult(&self) -> vals::Pllmult {
        let val = (self.0 >> 16usize) & 0x07;
        vals::Pllmult::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_pllmult(&mut self, val: vals::Pllmult) {
        self.0 = (self.0 & !(0x07 << 16usize)) | ((val.to_bits() as u32) << 16usize);
    }
    /// Peripheral bus clock divisor.
    #[inline(always)]
    pub const fn pbdiv(&self) -> vals::Pbdiv {
        let val = (self.0 >> 19usize) & 0x03;
        vals::Pbdiv::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_pbdiv(&mut self, val: vals::Pbdiv) {
        self.0 = (self.0 & !(0x03 << 19usize)) | ((val.to_bits() as u32) << 19usize);
    }
    /// Secondary oscillator ready.
    #[inline(always)]
    pub const fn soscrdy(&self) -> bool {
        let val = (self.0 >> 22usize) & 0x01;
        val != 0
    }
    /// FRC post-divider.
    #[inline(always)]
    pub const fn frcdiv(&self) -> vals::Frcdiv {
        let val = (self.0 >> 24usize) & 0x07;
        vals::Frcdiv::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_frcdiv(&mut self, val: vals::Frcdiv) {
        self.0 = (self.0 & !(0x07 << 24usize)) | ((val.to_bits() as u32) << 24usize);
    }
    /// PLL output post-divider.
    #[inline(always)]
    pub const fn pllodiv(&self) -> vals::Pllodiv {
        let val = (self.0 >> 27usize) & 0x07;
        vals::Pllodiv::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_pllodiv(&mut self, val: vals::Pllodiv) {
        self.0 = (self.0 & !(0x07 << 27usize)) | ((val.to_bits() as u32) << 27usize);
    }
}
impl Default for Osccon {
    #[inline(always)]
    fn default() -> Osccon {
        Osccon(0)
    }
}
reg_word!(Osccon);

/// Device configuration word 2 (PLL fuses). Lives in boot flash and is
/// read-only at run time.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Devcfg2(pub u32);
impl Devcfg2 {
    /// PLL input divider.
    #[inline(always)]
    pub const fn fpllidiv(&self) -> vals::Fpllidiv {
        let val = self.0 & 0x07;
        vals::Fpllidiv::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_fpllidiv(&mut self, val: vals::Fpllidiv) {
        self.0 = (self.0 & !0x07) | (val.to_bits() as u32);
    }
    /// Initial PLL multiplier, copied into OSCCON.PLLMULT at reset.
    #[inline(always)]
    pub const fn fpllmul(&self) -> vals::Pllmult {
        let val = (self.0 >> 4usize) & 0x07;
        vals::Pllmult::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_fpllmul(&mut self, val: vals::Pllmult) {
        self.0 = (self.0 & !(0x07 << 4usize)) | ((val.to_bits() as u32) << 4usize);
    }
    /// USB PLL input divider.
    #[inline(always)]
    pub const fn upllidiv(&self) -> vals::Fpllidiv {
        let val = (self.0 >> 8usize) & 0x07;
        vals::Fpllidiv::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_upllidiv(&mut self, val: vals::Fpllidiv) {
        self.0 = (self.0 & !(0x07 << 8usize)) | ((val.to_bits() as u32) << 8usize);
    }
    /// USB PLL disable.
    #[inline(always)]
    pub const fn fuplldis(&self) -> bool {
        let val = (self.0 >> 15usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_fuplldis(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 15usize)) | ((val as u32) << 15usize);
    }
    /// Initial PLL output divider, copied into OSCCON.PLLODIV at reset.
    #[inline(always)]
    pub const fn fpllodiv(&self) -> vals::Pllodiv {
        let val = (self.0 >> 16usize) & 0x07;
        vals::Pllodiv::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_fpllodiv(&mut self, val: vals::Pllodiv) {
        self.0 = (self.0 & !(0x07 << 16usize)) | ((val.to_bits() as u32) << 16usize);
    }
}
impl Default for Devcfg2 {
    #[inline(always)]
    fn default() -> Devcfg2 {
        Devcfg2(0)
    }
}
reg_word!(Devcfg2);

/// System configuration control.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Cfgcon(pub u32);
impl Cfgcon {
    /// TDO enable.
    #[inline(always)]
    pub const fn tdoen(&self) -> bool {
        let val = self.0 & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_tdoen(&mut self, val: bool) {
        self.0 = (self.0 & !0x01) | (val as u32);
    }
    /// JTAG port enable.
    #[inline(always)]
    pub const fn jtagen(&self) -> bool {
        let val = (self.0 >> 3usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_jtagen(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 3usize)) | ((val as u32) << 3usize);
    }
    /// Peripheral module disable lock.
    #[inline(always)]
    pub const fn pmdlock(&self) -> bool {
        let val = (self.0 >> 12usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_pmdlock(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 12usize)) | ((val as u32) << 12usize);
    }
    /// Peripheral pin select lock.
    #[inline(always)]
    pub const fn iolock(&self) -> bool {
        let val = (self.0 >> 13usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_iolock(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 13usize)) | ((val as u32) << 13usize);
    }
}
impl Default for Cfgcon {
    #[inline(always)]
    fn default() -> Cfgcon {
        Cfgcon(0)
    }
}
reg_word!(Cfgcon);

/// Interrupt controller control register.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Intcon(pub u32);
impl Intcon {
    /// External interrupt edge polarity, one bit per INTx pin.
    #[inline(always)]
    pub const fn intep(&self, n: usize) -> bool {
        assert!(n < 5usize);
        let val = (self.0 >> n) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_intep(&mut self, n: usize, val: bool) {
        assert!(n < 5usize);
        self.0 = (self.0 & !(0x01 << n)) | ((val as u32) << n);
    }
    /// Temporal proximity interrupt coalescing priority.
    #[inline(always)]
    pub const fn tpc(&self) -> u8 {
        let val = (self.0 >> 8usize) & 0x07;
        val as u8
    }
    #[inline(always)]
    pub fn set_tpc(&mut self, val: u8) {
        self.0 = (self.0 & !(0x07 << 8usize)) | (((val as u32) & 0x07) << 8usize);
    }
    /// Multi-vectored interrupt mode.
    #[inline(always)]
    pub const fn mvec(&self) -> bool {
        let val = (self.0 >> 12usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_mvec(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 12usize)) | ((val as u32) << 12usize);
    }
}
impl Default for Intcon {
    #[inline(always)]
    fn default() -> Intcon {
        Intcon(0)
    }
}
reg_word!(Intcon);

/// Interrupt controller status register.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Intstat(pub u32);
impl Intstat {
    /// Vector number of the latest accepted interrupt.
    #[inline(always)]
    pub const fn vec(&self) -> u8 {
        let val = self.0 & 0x3f;
        val as u8
    }
    /// Priority of the latest accepted interrupt.
    #[inline(always)]
    pub const fn srips(&self) -> u8 {
        let val = (self.0 >> 8usize) & 0x07;
        val as u8
    }
}
impl Default for Intstat {
    #[inline(always)]
    fn default() -> Intstat {
        Intstat(0)
    }
}
reg_word!(Intstat);

/// Type B timer control register.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Tcon(pub u32);
impl Tcon {
    /// Clock source: false = PBCLK, true = external TxCK pin.
    #[inline(always)]
    pub const fn tcs(&self) -> bool {
        let val = (self.0 >> 1usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_tcs(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 1usize)) | ((val as u32) << 1usize);
    }
    /// 32-bit mode: pairs this even timer with the next odd one.
    #[inline(always)]
    pub const fn t32(&self) -> bool {
        let val = (self.0 >> 3usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_t32(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 3usize)) | ((val as u32) << 3usize);
    }
    /// Input clock prescale.
    #[inline(always)]
    pub const fn tckps(&self) -> vals::Tckps {
        let val = (self.0 >> 4usize) & 0x07;
        vals::Tckps::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_tckps(&mut self, val: vals::Tckps) {
        self.0 = (self.0 & !(0x07 << 4usize)) | ((val.to_bits() as u32) << 4usize);
    }
    /// Gated time accumulation enable.
    #[inline(always)]
    pub const fn tgate(&self) -> bool {
        let val = (self.0 >> 7usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_tgate(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 7usize)) | ((val as u32) << 7usize);
    }
    /// Stop in idle mode.
    #[inline(always)]
    pub const fn sidl(&self) -> bool {
        let val = (self.0 >> 13usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_sidl(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 13usize)) | ((val as u32) << 13usize);
    }
    /// Timer on.
    #[inline(always)]
    pub const fn on(&self) -> bool {
        let val = (self.0 >> 15usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_on(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 15usize)) | ((val as u32) << 15usize);
    }
}
impl Default for Tcon {
    #[inline(always)]
    fn default() -> Tcon {
        Tcon(0)
    }
}
reg_word!(Tcon);

/// UART mode register.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Uxmode(pub u32);
impl Uxmode {
    /// Stop bit selection.
    #[inline(always)]
    pub const fn stsel(&self) -> vals::Stsel {
        let val = self.0 & 0x01;
        vals::Stsel::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_stsel(&mut self, val: vals::Stsel) {
        self.0 = (self.0 & !0x01) | (val.to_bits() as u32);
    }
    /// Data and parity selection.
    #[inline(always)]
    pub const fn pdsel(&self) -> vals::Pdsel {
        let val = (self.0 >> 1usize) & 0x03;
        vals::Pdsel::from_bits(val as u8)
    }
    #[inline(always)]
    pub fn set_pdsel(&mut self, val: vals::Pdsel) {
        self.0 = (self.0 & !(0x03 << 1usize)) | ((val.to_bits() as u32) << 1usize);
    }
    /// High-speed baud mode (divide by 4 instead of 16).
    #[inline(always)]
    pub const fn brgh(&self) -> bool {
        let val = (self.0 >> 3usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_brgh(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 3usize)) | ((val as u32) << 3usize);
    }
    /// Receive polarity inversion.
    #[inline(always)]
    pub const fn rxinv(&self) -> bool {
        let val = (self.0 >> 4usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_rxinv(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 4usize)) | ((val as u32) << 4usize);
    }
    /// Auto-baud enable.
    #[inline(always)]
    pub const fn abaud(&self) -> bool {
        let val = (self.0 >> 5usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_abaud(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 5usize)) | ((val as u32) << 5usize);
    }
    /// Loopback mode.
    #[inline(always)]
    pub const fn lpback(&self) -> bool {
        let val = (self.0 >> 6usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_lpback(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 6usize)) | ((val as u32) << 6usize);
    }
    /// Wake on start bit during sleep.
    #[inline(always)]
    pub const fn wake(&self) -> bool {
        let val = (self.0 >> 7usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_wake(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 7usize)) | ((val as u32) << 7usize);
    }
    /// UxTX/UxRX/UxCTS/UxRTS pin usage.
    #[inline(always)]
    pub const fn uen(&self) -> u8 {
        let val = (self.0 >> 8usize) & 0x03;
        val as u8
    }
    #[inline(always)]
    pub fn set_uen(&mut self, val: u8) {
        self.0 = (self.0 & !(0x03 << 8usize)) | (((val as u32) & 0x03) << 8usize);
    }
    /// RTS mode.
    #[inline(always)]
    pub const fn rtsmd(&self) -> bool {
        let val = (self.0 >> 11usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_rtsmd(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 11usize)) | ((val as u32) << 11usize);
    }
    /// IrDA encoder/decoder enable.
    #[inline(always)]
    pub const fn iren(&self) -> bool {
        let val = (self.0 >> 12usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_iren(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 12usize)) | ((val as u32) << 12usize);
    }
    /// Stop in idle mode.
    #[inline(always)]
    pub const fn sidl(&self) -> bool {
        let val = (self.0 >> 13usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_sidl(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 13usize)) | ((val as u32) << 13usize);
    }
    /// UART enable.
    #[inline(always)]
    pub const fn on(&self) -> bool {
        let val = (self.0 >> 15usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_on(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 15usize)) | ((val as u32) << 15usize);
    }
}
impl Default for Uxmode {
    #[inline(always)]
    fn default() -> Uxmode {
        Uxmode(0)
    }
}
reg_word!(Uxmode);

/// UART status and control register.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Uxsta(pub u32);
impl Uxsta {
    /// Receive buffer has data.
    #[inline(always)]
    pub const fn urxda(&self) -> bool {
        let val = self.0 & 0x01;
        val != 0
    }
    /// Receive buffer overrun. Must be cleared in software to restart
    /// reception.
    #[inline(always)]
    pub const fn oerr(&self) -> bool {
        let val = (self.0 >> 1usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_oerr(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 1usize)) | ((val as u32) << 1usize);
    }
    /// Framing error on the character at the top of the FIFO.
    #[inline(always)]
    pub const fn ferr(&self) -> bool {
        let val = (self.0 >> 2usize) & 0x01;
        val != 0
    }
    /// Parity error on the character at the top of the FIFO.
    #[inline(always)]
    pub const fn perr(&self) -> bool {
        let val = (self.0 >> 3usize) & 0x01;
        val != 0
    }
    /// Receiver idle.
    #[inline(always)]
    pub const fn ridle(&self) -> bool {
        let val = (self.0 >> 4usize) & 0x01;
        val != 0
    }
    /// Address character detect enable.
    #[inline(always)]
    pub const fn adden(&self) -> bool {
        let val = (self.0 >> 5usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_adden(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 5usize)) | ((val as u32) << 5usize);
    }
    /// Receive interrupt mode.
    #[inline(always)]
    pub const fn urxisel(&self) -> u8 {
        let val = (self.0 >> 6usize) & 0x03;
        val as u8
    }
    #[inline(always)]
    pub fn set_urxisel(&mut self, val: u8) {
        self.0 = (self.0 & !(0x03 << 6usize)) | (((val as u32) & 0x03) << 6usize);
    }
    /// Transmit shift register empty (all queued characters sent).
    #[inline(always)]
    pub const fn trmt(&self) -> bool {
        let val = (self.0 >> 8usize) & 0x01;
        val != 0
    }
    /// Transmit buffer full.
    #[inline(always)]
    pub const fn utxbf(&self) -> bool {
        let val = (self.0 >> 9usize) & 0x01;
        val != 0
    }
    /// Transmitter enable.
    #[inline(always)]
    pub const fn utxen(&self) -> bool {
        let val = (self.0 >> 10usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_utxen(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 10usize)) | ((val as u32) << 10usize);
    }
    /// Transmit break.
    #[inline(always)]
    pub const fn utxbrk(&self) -> bool {
        let val = (self.0 >> 11usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_utxbrk(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 11usize)) | ((val as u32) << 11usize);
    }
    /// Receiver enable.
    #[inline(always)]
    pub const fn urxen(&self) -> bool {
        let val = (self.0 >> 12usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_urxen(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 12usize)) | ((val as u32) << 12usize);
    }
    /// Transmit polarity inversion.
    #[inline(always)]
    pub const fn utxinv(&self) -> bool {
        let val = (self.0 >> 13usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_utxinv(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 13usize)) | ((val as u32) << 13usize);
    }
    /// Transmit interrupt mode.
    #[inline(always)]
    pub const fn utxisel(&self) -> u8 {
        let val = (self.0 >> 14usize) & 0x03;
        val as u8
    }
    #[inline(always)]
    pub fn set_utxisel(&mut self, val: u8) {
        self.0 = (self.0 & !(0x03 << 14usize)) | (((val as u32) & 0x03) << 14usize);
    }
}
impl Default for Uxsta {
    #[inline(always)]
    fn default() -> Uxsta {
        Uxsta(0)
    }
}
reg_word!(Uxsta);

/// Change notice control register, one per port.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Cncon(pub u32);
impl Cncon {
    /// Stop in idle mode.
    #[inline(always)]
    pub const fn sidl(&self) -> bool {
        let val = (self.0 >> 13usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_sidl(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 13usize)) | ((val as u32) << 13usize);
    }
    /// Change notice module enable.
    #[inline(always)]
    pub const fn on(&self) -> bool {
        let val = (self.0 >> 15usize) & 0x01;
        val != 0
    }
    #[inline(always)]
    pub fn set_on(&mut self, val: bool) {
        self.0 = (self.0 & !(0x01 << 15usize)) | ((val as u32) << 15usize);
    }
}
impl Default for Cncon {
    #[inline(always)]
    fn default() -> Cncon {
        Cncon(0)
    }
}
reg_word!(Cncon);
