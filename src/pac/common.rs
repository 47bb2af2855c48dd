use core::marker::PhantomData;

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct RW;
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct R;
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct W;

mod sealed {
    pub trait Access {}
    impl Access for super::R {}
    impl Access for super::W {}
    impl Access for super::RW {}
}

pub trait Access: sealed::Access {}
impl Access for R {}
impl Access for W {}
impl Access for RW {}

pub trait Read: Access {}
impl Read for RW {}
impl Read for R {}

pub trait Write: Access {}
impl Write for RW {}
impl Write for W {}

/// Typed handle to a 32-bit special function register, identified by its
/// KSEG1 virtual address.
///
/// Off-target the accesses are redirected to a simulated register file, so
/// register-level code stays host-testable.
pub struct Reg<T: Copy, A: Access> {
    addr: u32,
    phantom: PhantomData<*mut (T, A)>,
}

unsafe impl<T: Copy, A: Access> Send for Reg<T, A> {}
unsafe impl<T: Copy, A: Access> Sync for Reg<T, A> {}

impl<T: Copy, A: Access> Copy for Reg<T, A> {}
impl<T: Copy, A: Access> Clone for Reg<T, A> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, A: Access> Reg<T, A> {
    /// # Safety
    ///
    /// `addr` must be the address of a register of type `T` with access `A`.
    #[inline(always)]
    pub const unsafe fn from_addr(addr: u32) -> Self {
        Self {
            addr,
            phantom: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn addr(&self) -> u32 {
        self.addr
    }
}

impl<T: Copy + From<u32>, A: Read> Reg<T, A> {
    #[inline(always)]
    pub fn read(&self) -> T {
        T::from(super::read32(self.addr))
    }
}

impl<T: Copy + Into<u32>, A: Write> Reg<T, A> {
    #[inline(always)]
    pub fn write_value(&self, val: T) {
        super::write32(self.addr, val.into())
    }
}

impl<T: Default + Copy + Into<u32>, A: Write> Reg<T, A> {
    #[inline(always)]
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut val = Default::default();
        let res = f(&mut val);
        self.write_value(val);
        res
    }
}

impl<T: Copy + From<u32> + Into<u32>, A: Read + Write> Reg<T, A> {
    #[inline(always)]
    pub fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut val = self.read();
        let res = f(&mut val);
        self.write_value(val);
        res
    }
}

// Most PIC32 SFRs live on a 16-byte stride with CLR, SET and INV shadows at
// offsets 4, 8 and 12. Writing a mask there clears, sets or toggles the
// masked bits of the base register in a single bus cycle, so these are the
// interrupt-safe way to do read-modify-write.
impl<T: Copy + Into<u32>, A: Read + Write> Reg<T, A> {
    /// Clear the bits set in `val` via the CLR shadow register.
    #[inline(always)]
    pub fn write_clr_value(&self, val: T) {
        super::write32(self.addr + 0x04, val.into())
    }

    /// Set the bits set in `val` via the SET shadow register.
    #[inline(always)]
    pub fn write_set_value(&self, val: T) {
        super::write32(self.addr + 0x08, val.into())
    }

    /// Toggle the bits set in `val` via the INV shadow register.
    #[inline(always)]
    pub fn write_inv_value(&self, val: T) {
        super::write32(self.addr + 0x0c, val.into())
    }
}

impl<T: Default + Copy + Into<u32>, A: Read + Write> Reg<T, A> {
    /// Build a mask from the all-zeroes value and write it to the CLR shadow.
    #[inline(always)]
    pub fn write_clr(&self, f: impl FnOnce(&mut T)) {
        let mut val = Default::default();
        f(&mut val);
        self.write_clr_value(val);
    }

    /// Build a mask from the all-zeroes value and write it to the SET shadow.
    #[inline(always)]
    pub fn write_set(&self, f: impl FnOnce(&mut T)) {
        let mut val = Default::default();
        f(&mut val);
        self.write_set_value(val);
    }

    /// Build a mask from the all-zeroes value and write it to the INV shadow.
    #[inline(always)]
    pub fn write_inv(&self, f: impl FnOnce(&mut T)) {
        let mut val = Default::default();
        f(&mut val);
        self.write_inv_value(val);
    }
}
