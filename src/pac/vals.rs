#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cosc {
    /// Fast RC oscillator
    FRC = 0x0,
    /// Fast RC oscillator through the PLL
    FRCPLL = 0x01,
    /// Primary oscillator (XT, HS, EC)
    POSC = 0x02,
    /// Primary oscillator through the PLL
    POSCPLL = 0x03,
    /// Secondary oscillator
    SOSC = 0x04,
    /// Low-power RC oscillator
    LPRC = 0x05,
    /// Fast RC oscillator divided by 16
    FRCDIV16 = 0x06,
    /// Fast RC oscillator divided by FRCDIV
    FRCDIV = 0x07,
}

impl Cosc {
    #[inline(always)]
    pub const fn from_bits(val: u8) -> Cosc {
        unsafe { core::mem::transmute(val & 0x07) }
    }
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Cosc {
    #[inline(always)]
    fn from(val: u8) -> Cosc {
        Cosc::from_bits(val)
    }
}

impl From<Cosc> for u8 {
    #[inline(always)]
    fn from(val: Cosc) -> u8 {
        Cosc::to_bits(val)
    }
}

/// PLL input divider, programmed by the FPLLIDIV configuration fuse.
/// The divide ratios are not a power-of-two table.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fpllidiv {
    DIV1 = 0x0,
    DIV2 = 0x01,
    DIV3 = 0x02,
    DIV4 = 0x03,
    DIV5 = 0x04,
    DIV6 = 0x05,
    DIV10 = 0x06,
    DIV12 = 0x07,
}

impl Fpllidiv {
    #[inline(always)]
    pub const fn from_bits(val: u8) -> Fpllidiv {
        unsafe { core::mem::transmute(val & 0x07) }
    }
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Fpllidiv {
    #[inline(always)]
    fn from(val: u8) -> Fpllidiv {
        Fpllidiv::from_bits(val)
    }
}

impl From<Fpllidiv> for u8 {
    #[inline(always)]
    fn from(val: Fpllidiv) -> u8 {
        Fpllidiv::to_bits(val)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pllmult {
    MUL15 = 0x0,
    MUL16 = 0x01,
    MUL17 = 0x02,
    MUL18 = 0x03,
    MUL19 = 0x04,
    MUL20 = 0x05,
    MUL21 = 0x06,
    MUL24 = 0x07,
}

impl Pllmult {
    #[inline(always)]
    pub const fn from_bits(val: u8) -> Pllmult {
        unsafe { core::mem::transmute(val & 0x07) }
    }
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Pllmult {
    #[inline(always)]
    fn from(val: u8) -> Pllmult {
        Pllmult::from_bits(val)
    }
}

impl From<Pllmult> for u8 {
    #[inline(always)]
    fn from(val: Pllmult) -> u8 {
        Pllmult::to_bits(val)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pllodiv {
    DIV1 = 0x0,
    DIV2 = 0x01,
    DIV4 = 0x02,
    DIV8 = 0x03,
    DIV16 = 0x04,
    DIV32 = 0x05,
    DIV64 = 0x06,
    DIV256 = 0x07,
}

impl Pllodiv {
    #[inline(always)]
    pub const fn from_bits(val: u8) -> Pllodiv {
        unsafe { core::mem::transmute(val & 0x07) }
    }
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Pllodiv {
    #[inline(always)]
    fn from(val: u8) -> Pllodiv {
        Pllodiv::from_bits(val)
    }
}

impl From<Pllodiv> for u8 {
    #[inline(always)]
    fn from(val: Pllodiv) -> u8 {
        Pllodiv::to_bits(val)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frcdiv {
    DIV1 = 0x0,
    DIV2 = 0x01,
    DIV4 = 0x02,
    DIV8 = 0x03,
    DIV16 = 0x04,
    DIV32 = 0x05,
    DIV64 = 0x06,
    DIV256 = 0x07,
}

impl Frcdiv {
    #[inline(always)]
    pub const fn from_bits(val: u8) -> Frcdiv {
        unsafe { core::mem::transmute(val & 0x07) }
    }
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Frcdiv {
    #[inline(always)]
    fn from(val: u8) -> Frcdiv {
        Frcdiv::from_bits(val)
    }
}

impl From<Frcdiv> for u8 {
    #[inline(always)]
    fn from(val: Frcdiv) -> u8 {
        Frcdiv::to_bits(val)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pbdiv {
    DIV1 = 0x0,
    DIV2 = 0x01,
    DIV4 = 0x02,
    DIV8 = 0x03,
}

impl Pbdiv {
    #[inline(always)]
    pub const fn from_bits(val: u8) -> Pbdiv {
        unsafe { core::mem::transmute(val & 0x03) }
    }
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Pbdiv {
    #[inline(always)]
    fn from(val: u8) -> Pbdiv {
        Pbdiv::from_bits(val)
    }
}

impl From<Pbdiv> for u8 {
    #[inline(always)]
    fn from(val: Pbdiv) -> u8 {
        Pbdiv::to_bits(val)
    }
}

/// Type B timer input prescale.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tckps {
    DIV1 = 0x0,
    DIV2 = 0x01,
    DIV4 = 0x02,
    DIV8 = 0x03,
    DIV16 = 0x04,
    DIV32 = 0x05,
    DIV64 = 0x06,
    DIV256 = 0x07,
}

impl Tckps {
    #[inline(always)]
    pub const fn from_bits(val: u8) -> Tckps {
        unsafe { core::mem::transmute(val & 0x07) }
    }
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Tckps {
    #[inline(always)]
    fn from(val: u8) -> Tckps {
        Tckps::from_bits(val)
    }
}

impl From<Tckps> for u8 {
    #[inline(always)]
    fn from(val: Tckps) -> u8 {
        Tckps::to_bits(val)
    }
}

/// UART data and parity selection.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pdsel {
    /// 8-bit data, no parity
    DATA8_NONE = 0x0,
    /// 8-bit data, even parity
    DATA8_EVEN = 0x01,
    /// 8-bit data, odd parity
    DATA8_ODD = 0x02,
    /// 9-bit data, no parity
    DATA9_NONE = 0x03,
}

impl Pdsel {
    #[inline(always)]
    pub const fn from_bits(val: u8) -> Pdsel {
        unsafe { core::mem::transmute(val & 0x03) }
    }
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Pdsel {
    #[inline(always)]
    fn from(val: u8) -> Pdsel {
        Pdsel::from_bits(val)
    }
}

impl From<Pdsel> for u8 {
    #[inline(always)]
    fn from(val: Pdsel) -> u8 {
        Pdsel::to_bits(val)
    }
}

/// UART stop bit selection.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stsel {
    STOP1 = 0x0,
    STOP2 = 0x01,
}

impl Stsel {
    #[inline(always)]
    pub const fn from_bits(val: u8) -> Stsel {
        unsafe { core::mem::transmute(val & 0x01) }
    }
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Stsel {
    #[inline(always)]
    fn from(val: u8) -> Stsel {
        Stsel::from_bits(val)
    }
}

impl From<Stsel> for u8 {
    #[inline(always)]
    fn from(val: Stsel) -> u8 {
        Stsel::to_bits(val)
    }
}
