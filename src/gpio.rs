//! General purpose input/output (GPIO) driver.
//!
//! Pin state lives in the TRIS (direction), LAT (output latch), PORT (input
//! sample), ODC (open drain), ANSEL (analog select) and CNPU/CNPD (weak
//! pull) registers. All bit manipulation goes through the hardware CLR, SET
//! and INV shadows so no read-modify-write can race an interrupt handler.

use core::convert::Infallible;

use embassy_hal_internal::{impl_peripheral, into_ref, Peripheral, PeripheralRef};

use crate::pac;
use crate::peripherals;

/// Digital input or output level.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logical low.
    Low,
    /// Logical high.
    High,
}

impl From<bool> for Level {
    fn from(val: bool) -> Self {
        match val {
            true => Self::High,
            false => Self::Low,
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> bool {
        level == Level::High
    }
}

/// Weak pull setting for an input pin.
///
/// The pulls ride on the change notice cells, one per pin.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No pull.
    None,
    /// Internal pull-up.
    Up,
    /// Internal pull-down.
    Down,
}

/// GPIO flexible pin.
///
/// This pin can be either an input or output pin. The direction and level
/// can be changed at runtime; on drop the pin returns to a plain input with
/// the pulls released.
pub struct Flex<'d> {
    pub(crate) pin: PeripheralRef<'d, AnyPin>,
}

impl<'d> Flex<'d> {
    /// Wrap the pin in a `Flex`, taking it out of analog mode.
    ///
    /// The pin remains disconnected (an input) until
    /// [`set_as_input`](Self::set_as_input) or
    /// [`set_as_output`](Self::set_as_output) is called.
    #[inline]
    pub fn new(pin: impl Peripheral<P = impl Pin> + 'd) -> Self {
        into_ref!(pin);
        let pin = pin.map_into();
        pin.block().ansel().write_clr_value(pin.bit());
        Self { pin }
    }

    /// Put the pin into input mode with the given pull.
    #[inline]
    pub fn set_as_input(&mut self, pull: Pull) {
        self.pin.block().tris().write_set_value(self.pin.bit());
        self.set_pull(pull);
    }

    /// Put the pin into push-pull output mode at the given level.
    #[inline]
    pub fn set_as_output(&mut self, level: Level) {
        self.set_level(level);
        let block = self.pin.block();
        block.odc().write_clr_value(self.pin.bit());
        block.tris().write_clr_value(self.pin.bit());
    }

    /// Put the pin into open-drain output mode at the given level. A high
    /// level releases the line, so an external pull-up is expected.
    #[inline]
    pub fn set_as_output_open_drain(&mut self, level: Level) {
        self.set_level(level);
        let block = self.pin.block();
        block.odc().write_set_value(self.pin.bit());
        block.tris().write_clr_value(self.pin.bit());
    }

    /// Change the weak pull.
    #[inline]
    pub fn set_pull(&mut self, pull: Pull) {
        let block = self.pin.block();
        let bit = self.pin.bit();
        match pull {
            Pull::None => {
                block.cnpu().write_clr_value(bit);
                block.cnpd().write_clr_value(bit);
            }
            Pull::Up => {
                block.cnpd().write_clr_value(bit);
                block.cnpu().write_set_value(bit);
            }
            Pull::Down => {
                block.cnpu().write_clr_value(bit);
                block.cnpd().write_set_value(bit);
            }
        }
    }

    /// Get whether the input level is high.
    #[inline]
    pub fn is_high(&self) -> bool {
        !self.is_low()
    }

    /// Get whether the input level is low.
    #[inline]
    pub fn is_low(&self) -> bool {
        self.pin.block().port().read() & self.pin.bit() == 0
    }

    /// Get the current input level.
    #[inline]
    pub fn get_level(&self) -> Level {
        self.is_high().into()
    }

    /// Set the output latch high.
    #[inline]
    pub fn set_high(&mut self) {
        self.pin.block().lat().write_set_value(self.pin.bit());
    }

    /// Set the output latch low.
    #[inline]
    pub fn set_low(&mut self) {
        self.pin.block().lat().write_clr_value(self.pin.bit());
    }

    /// Set the output level.
    #[inline]
    pub fn set_level(&mut self, level: Level) {
        match level {
            Level::Low => self.set_low(),
            Level::High => self.set_high(),
        }
    }

    /// Get whether the output latch is set high.
    #[inline]
    pub fn is_set_high(&self) -> bool {
        !self.is_set_low()
    }

    /// Get whether the output latch is set low.
    #[inline]
    pub fn is_set_low(&self) -> bool {
        self.pin.block().lat().read() & self.pin.bit() == 0
    }

    /// Get the output latch level.
    #[inline]
    pub fn get_output_level(&self) -> Level {
        self.is_set_high().into()
    }

    /// Toggle the output latch through the INV shadow, a single write.
    #[inline]
    pub fn toggle(&mut self) {
        self.pin.block().lat().write_inv_value(self.pin.bit());
    }
}

impl<'d> Drop for Flex<'d> {
    fn drop(&mut self) {
        self.pin.set_as_disconnected();
    }
}

/// GPIO input driver.
pub struct Input<'d> {
    pub(crate) pin: Flex<'d>,
}

impl<'d> Input<'d> {
    /// Create the input driver.
    #[inline]
    pub fn new(pin: impl Peripheral<P = impl Pin> + 'd, pull: Pull) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_as_input(pull);
        Self { pin }
    }

    /// Change the weak pull.
    #[inline]
    pub fn set_pull(&mut self, pull: Pull) {
        self.pin.set_pull(pull);
    }

    /// Get whether the input level is high.
    #[inline]
    pub fn is_high(&self) -> bool {
        self.pin.is_high()
    }

    /// Get whether the input level is low.
    #[inline]
    pub fn is_low(&self) -> bool {
        self.pin.is_low()
    }

    /// Get the current input level.
    #[inline]
    pub fn get_level(&self) -> Level {
        self.pin.get_level()
    }
}

/// GPIO output driver.
pub struct Output<'d> {
    pub(crate) pin: Flex<'d>,
}

impl<'d> Output<'d> {
    /// Create the output driver, driving the given initial level.
    #[inline]
    pub fn new(pin: impl Peripheral<P = impl Pin> + 'd, initial: Level) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_as_output(initial);
        Self { pin }
    }

    /// Create the driver in open-drain mode. A high level releases the
    /// line.
    #[inline]
    pub fn new_open_drain(pin: impl Peripheral<P = impl Pin> + 'd, initial: Level) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_as_output_open_drain(initial);
        Self { pin }
    }

    /// Set the output high.
    #[inline]
    pub fn set_high(&mut self) {
        self.pin.set_high();
    }

    /// Set the output low.
    #[inline]
    pub fn set_low(&mut self) {
        self.pin.set_low();
    }

    /// Set the output level.
    #[inline]
    pub fn set_level(&mut self, level: Level) {
        self.pin.set_level(level);
    }

    /// Get whether the output latch is set high.
    #[inline]
    pub fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }

    /// Get whether the output latch is set low.
    #[inline]
    pub fn is_set_low(&self) -> bool {
        self.pin.is_set_low()
    }

    /// Get the output latch level.
    #[inline]
    pub fn get_output_level(&self) -> Level {
        self.pin.get_output_level()
    }

    /// Toggle the output.
    #[inline]
    pub fn toggle(&mut self) {
        self.pin.toggle();
    }
}

pub(crate) trait SealedPin: Sized {
    /// Port index in the high nibble, pin index in the low.
    fn pin_port(&self) -> u8;

    #[inline]
    fn _pin(&self) -> u8 {
        self.pin_port() % 16
    }

    #[inline]
    fn _port(&self) -> u8 {
        self.pin_port() / 16
    }

    #[inline]
    fn bit(&self) -> u32 {
        1 << self._pin()
    }

    #[inline]
    fn block(&self) -> pac::Gpio {
        match self._port() {
            0 => pac::GPIOA,
            _ => pac::GPIOB,
        }
    }

    /// Return the pin to a plain digital input with the pulls released.
    #[inline]
    fn set_as_disconnected(&self) {
        let block = self.block();
        let bit = 1 << self._pin();
        block.tris().write_set_value(bit);
        block.cnpu().write_clr_value(bit);
        block.cnpd().write_clr_value(bit);
    }

    /// Hand the pin to a PPS-routed peripheral: digital, input direction.
    /// A mapped output function overrides TRIS, so this is right for both
    /// signal directions.
    #[inline]
    fn set_as_peripheral(&self) {
        let block = self.block();
        let bit = 1 << self._pin();
        block.ansel().write_clr_value(bit);
        block.tris().write_set_value(bit);
    }
}

/// Interface for a Pin that can be configured by an [Input] or [Output]
/// driver, or converted to an [AnyPin].
#[allow(private_bounds)]
pub trait Pin: Peripheral<P = Self> + Into<AnyPin> + SealedPin + Sized + 'static {
    /// Number of the pin within the port (0..16).
    #[inline]
    fn pin(&self) -> u8 {
        self._pin()
    }

    /// Port of the pin (0 for A, 1 for B).
    #[inline]
    fn port(&self) -> u8 {
        self._port()
    }

    /// Type-erase (degrade) this pin into an `AnyPin`.
    ///
    /// This converts pin singletons (`PA0`, `PB12`, ...) into `AnyPin`,
    /// which is useful for storing pins in arrays.
    #[inline]
    fn degrade(self) -> AnyPin {
        AnyPin {
            pin_port: self.pin_port(),
        }
    }
}

/// Type-erased GPIO pin.
pub struct AnyPin {
    pin_port: u8,
}

impl AnyPin {
    /// Unsafely create an `AnyPin` from a port and pin number.
    ///
    /// # Safety
    ///
    /// You must ensure that you're only using one instance of this pin at a
    /// time.
    pub unsafe fn steal(port: u8, pin: u8) -> Self {
        Self {
            pin_port: port * 16 + pin,
        }
    }
}

impl_peripheral!(AnyPin);

impl Pin for AnyPin {}
impl SealedPin for AnyPin {
    #[inline]
    fn pin_port(&self) -> u8 {
        self.pin_port
    }
}

macro_rules! impl_pin {
    ($name:ident, $port:expr, $pin:expr) => {
        impl Pin for peripherals::$name {}
        impl SealedPin for peripherals::$name {
            #[inline]
            fn pin_port(&self) -> u8 {
                $port * 16 + $pin
            }
        }

        impl From<peripherals::$name> for AnyPin {
            fn from(val: peripherals::$name) -> Self {
                Pin::degrade(val)
            }
        }
    };
}

impl_pin!(PA0, 0, 0);
impl_pin!(PA1, 0, 1);
impl_pin!(PA2, 0, 2);
impl_pin!(PA3, 0, 3);
impl_pin!(PA4, 0, 4);
impl_pin!(PB0, 1, 0);
impl_pin!(PB1, 1, 1);
impl_pin!(PB2, 1, 2);
impl_pin!(PB3, 1, 3);
impl_pin!(PB4, 1, 4);
impl_pin!(PB5, 1, 5);
impl_pin!(PB6, 1, 6);
impl_pin!(PB7, 1, 7);
impl_pin!(PB8, 1, 8);
impl_pin!(PB9, 1, 9);
impl_pin!(PB10, 1, 10);
impl_pin!(PB11, 1, 11);
impl_pin!(PB12, 1, 12);
impl_pin!(PB13, 1, 13);
impl_pin!(PB14, 1, 14);
impl_pin!(PB15, 1, 15);

// ====================

impl<'d> embedded_hal_02::digital::v2::InputPin for Input<'d> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.is_high())
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.is_low())
    }
}

impl<'d> embedded_hal_02::digital::v2::OutputPin for Output<'d> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_high();
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_low();
        Ok(())
    }
}

impl<'d> embedded_hal_02::digital::v2::StatefulOutputPin for Output<'d> {
    #[inline]
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(self.is_set_high())
    }

    #[inline]
    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(self.is_set_low())
    }
}

impl<'d> embedded_hal_02::digital::v2::ToggleableOutputPin for Output<'d> {
    type Error = Infallible;

    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.toggle();
        Ok(())
    }
}

impl<'d> embedded_hal_02::digital::v2::InputPin for Flex<'d> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.is_high())
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.is_low())
    }
}

impl<'d> embedded_hal_02::digital::v2::OutputPin for Flex<'d> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_high();
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_low();
        Ok(())
    }
}

impl<'d> embedded_hal_02::digital::v2::StatefulOutputPin for Flex<'d> {
    #[inline]
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(self.is_set_high())
    }

    #[inline]
    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(self.is_set_low())
    }
}

impl<'d> embedded_hal_02::digital::v2::ToggleableOutputPin for Flex<'d> {
    type Error = Infallible;

    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.toggle();
        Ok(())
    }
}

impl<'d> embedded_hal_1::digital::ErrorType for Input<'d> {
    type Error = Infallible;
}

impl<'d> embedded_hal_1::digital::InputPin for Input<'d> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_high())
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_low())
    }
}

impl<'d> embedded_hal_1::digital::ErrorType for Output<'d> {
    type Error = Infallible;
}

impl<'d> embedded_hal_1::digital::OutputPin for Output<'d> {
    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_high();
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_low();
        Ok(())
    }
}

impl<'d> embedded_hal_1::digital::StatefulOutputPin for Output<'d> {
    #[inline]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_set_high())
    }

    #[inline]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_set_low())
    }

    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        (*self).toggle();
        Ok(())
    }
}

impl<'d> embedded_hal_1::digital::ErrorType for Flex<'d> {
    type Error = Infallible;
}

impl<'d> embedded_hal_1::digital::InputPin for Flex<'d> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_high())
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_low())
    }
}

impl<'d> embedded_hal_1::digital::OutputPin for Flex<'d> {
    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_high();
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_low();
        Ok(())
    }
}

impl<'d> embedded_hal_1::digital::StatefulOutputPin for Flex<'d> {
    #[inline]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_set_high())
    }

    #[inline]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok((*self).is_set_low())
    }

    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        (*self).toggle();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pac::sim;

    #[test]
    fn output_drives_the_latch_through_the_shadows() {
        let _guard = sim::lock();
        sim::reset();
        // Analog-capable pin starts in analog mode.
        sim::poke(pac::GPIOB.ansel().addr(), 1 << 2);
        sim::poke(pac::GPIOB.tris().addr(), 0xffff);

        let pin = unsafe { AnyPin::steal(1, 2) };
        let mut out = Output::new(pin, Level::High);

        assert_eq!(pac::GPIOB.ansel().read() & (1 << 2), 0);
        assert_eq!(pac::GPIOB.tris().read() & (1 << 2), 0);
        assert!(out.is_set_high());

        out.set_low();
        assert!(out.is_set_low());

        out.toggle();
        assert!(out.is_set_high());
        // Only this pin's latch bit moved.
        assert_eq!(pac::GPIOB.lat().read(), 1 << 2);
    }

    #[test]
    fn input_reads_port_and_programs_pulls() {
        let _guard = sim::lock();
        sim::reset();
        sim::poke(pac::GPIOA.tris().addr(), 0x001f);

        let pin = unsafe { AnyPin::steal(0, 3) };
        let input = Input::new(pin, Pull::Up);

        assert_ne!(pac::GPIOA.tris().read() & (1 << 3), 0);
        assert_ne!(pac::GPIOA.cnpu().read() & (1 << 3), 0);
        assert_eq!(pac::GPIOA.cnpd().read() & (1 << 3), 0);

        assert!(input.is_low());
        sim::poke(pac::GPIOA.port().addr(), 1 << 3);
        assert!(input.is_high());
        assert_eq!(input.get_level(), Level::High);
    }

    #[test]
    fn drop_releases_pin_to_input_without_pulls() {
        let _guard = sim::lock();
        sim::reset();

        let pin = unsafe { AnyPin::steal(1, 7) };
        {
            let mut flex = Flex::new(pin);
            flex.set_as_output(Level::High);
            flex.set_pull(Pull::Down);
            assert_eq!(pac::GPIOB.tris().read() & (1 << 7), 0);
        }

        assert_ne!(pac::GPIOB.tris().read() & (1 << 7), 0);
        assert_eq!(pac::GPIOB.cnpu().read() & (1 << 7), 0);
        assert_eq!(pac::GPIOB.cnpd().read() & (1 << 7), 0);
    }

    #[test]
    fn open_drain_sets_the_odc_bit() {
        let _guard = sim::lock();
        sim::reset();

        let pin = unsafe { AnyPin::steal(1, 9) };
        let _out = Output::new_open_drain(pin, Level::High);
        assert_ne!(pac::GPIOB.odc().read() & (1 << 9), 0);
    }
}
