//! Universal Asynchronous Receiver Transmitter (UART1, UART2)
//!
//! Blocking driver. The baud generator runs in high-speed mode (BRGH = 1,
//! 4 clocks per bit) off the peripheral bus clock, so the divisor is
//! `pbclk / 4 / baud - 1`. TX and RX are routed through peripheral pin
//! select: the RX pin feeds the UxRXR input mux, the TX function code is
//! written to the pin's RPxR output mux.
#![macro_use]

use core::marker::PhantomData;

use embassy_hal_internal::{into_ref, Peripheral, PeripheralRef};

use crate::gpio::{AnyPin, SealedPin as _};
use crate::interrupt::{self, Interrupt};
use crate::osc::{self, SealedPmdDisable};
use crate::pac;
use crate::pac::common::{Reg, RW};
use crate::pac::vals::{Pdsel, Stsel};
use crate::peripherals;

/// Number of data bits
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    /// 8 Data Bits
    DataBits8,
    /// 9 Data Bits
    DataBits9,
}

/// Parity
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    /// No parity
    ParityNone,
    /// Even Parity
    ParityEven,
    /// Odd Parity
    ParityOdd,
}

/// Number of stop bits
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    #[doc = "1 stop bit"]
    STOP1,
    #[doc = "2 stop bits"]
    STOP2,
}

/// Config Error
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum ConfigError {
    /// Baudrate too low: the divisor does not fit the 16-bit BRG register
    BaudrateTooLow,
    /// Baudrate too high: above `pbclk / 4`
    BaudrateTooHigh,
    /// Data bits and parity combination not supported (9-bit frames carry
    /// no parity on this hardware)
    DataParityNotSupported,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::BaudrateTooLow => write!(f, "baudrate too low"),
            ConfigError::BaudrateTooHigh => write!(f, "baudrate too high"),
            ConfigError::DataParityNotSupported => {
                write!(f, "data bits and parity combination not supported")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// UART config
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct Config {
    /// Baud rate
    pub baudrate: u32,
    /// Number of data bits
    pub data_bits: DataBits,
    /// Number of stop bits
    pub stop_bits: StopBits,
    /// Parity type
    pub parity: Parity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::DataBits8,
            stop_bits: StopBits::STOP1,
            parity: Parity::ParityNone,
        }
    }
}

impl Config {
    fn pdsel(&self) -> Result<Pdsel, ConfigError> {
        match (self.data_bits, self.parity) {
            (DataBits::DataBits8, Parity::ParityNone) => Ok(Pdsel::DATA8_NONE),
            (DataBits::DataBits8, Parity::ParityEven) => Ok(Pdsel::DATA8_EVEN),
            (DataBits::DataBits8, Parity::ParityOdd) => Ok(Pdsel::DATA8_ODD),
            (DataBits::DataBits9, Parity::ParityNone) => Ok(Pdsel::DATA9_NONE),
            (DataBits::DataBits9, _) => Err(ConfigError::DataParityNotSupported),
        }
    }

    fn stsel(&self) -> Stsel {
        match self.stop_bits {
            StopBits::STOP1 => Stsel::STOP1,
            StopBits::STOP2 => Stsel::STOP2,
        }
    }
}

/// Serial error
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// RX buffer overrun
    Overrun,
    /// Framing error
    Framing,
    /// Parity check error
    Parity,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Overrun => write!(f, "RX buffer overrun"),
            Error::Framing => write!(f, "framing error"),
            Error::Parity => write!(f, "parity check error"),
        }
    }
}

impl core::error::Error for Error {}

/// BRG divisor for `baudrate` in the high-speed (BRGH = 1) mode.
pub(crate) fn brg_for(pbclk: u32, baudrate: u32) -> Result<u16, ConfigError> {
    if baudrate == 0 {
        return Err(ConfigError::BaudrateTooLow);
    }
    let div = pbclk / 4 / baudrate;
    let brg = div.checked_sub(1).ok_or(ConfigError::BaudrateTooHigh)?;
    if brg > 0xffff {
        return Err(ConfigError::BaudrateTooLow);
    }
    Ok(brg as u16)
}

/// Bidirectional UART Driver, which acts as a combination of [`UartTx`] and
/// [`UartRx`].
pub struct Uart<'d, T: Instance> {
    tx: UartTx<'d, T>,
    rx: UartRx<'d, T>,
}

/// Tx-only UART Driver.
///
/// Can be obtained from [`Uart::split`], or can be constructed independently,
/// if you do not need the receiving half of the driver.
pub struct UartTx<'d, T: Instance> {
    _tx: Option<PeripheralRef<'d, AnyPin>>,
    _phantom: PhantomData<T>,
}

/// Rx-only UART Driver.
///
/// Can be obtained from [`Uart::split`], or can be constructed independently,
/// if you do not need the transmitting half of the driver.
///
/// The hardware FIFO is 4 characters deep and there is no software buffer
/// behind it; data that arrives while it is full is lost and reported as
/// [`Error::Overrun`] on the next read.
pub struct UartRx<'d, T: Instance> {
    _rx: Option<PeripheralRef<'d, AnyPin>>,
    _phantom: PhantomData<T>,
}

impl<'d, T: Instance> Uart<'d, T> {
    /// Create a new blocking bidirectional UART.
    pub fn new_blocking(
        peri: impl Peripheral<P = T> + 'd,
        rx: impl Peripheral<P = impl RxPin<T>> + 'd,
        tx: impl Peripheral<P = impl TxPin<T>> + 'd,
        config: Config,
    ) -> Result<Self, ConfigError> {
        into_ref!(peri, rx, tx);
        let _ = peri;

        let rx_sel = rx.pps_code();
        let tx_code = tx.pps_code();
        let rx = rx.map_into();
        let tx = tx.map_into();
        new_inner::<T>(Some((&rx, rx_sel)), Some((&tx, tx_code)), config)?;

        Ok(Self {
            tx: UartTx {
                _tx: Some(tx),
                _phantom: PhantomData,
            },
            rx: UartRx {
                _rx: Some(rx),
                _phantom: PhantomData,
            },
        })
    }

    /// Reconfigure the UART in place. Waits for any transmission in progress
    /// to drain first.
    pub fn set_config(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.tx.blocking_flush().ok();
        reconfigure::<T>(config)
    }

    /// Perform a blocking write. See [`UartTx::blocking_write`].
    pub fn blocking_write(&mut self, buffer: &[u8]) -> Result<(), Error> {
        self.tx.blocking_write(buffer)
    }

    /// Block until transmission complete. See [`UartTx::blocking_flush`].
    pub fn blocking_flush(&mut self) -> Result<(), Error> {
        self.tx.blocking_flush()
    }

    /// Perform a blocking read into `buffer`. See [`UartRx::blocking_read`].
    pub fn blocking_read(&mut self, buffer: &mut [u8]) -> Result<(), Error> {
        self.rx.blocking_read(buffer)
    }

    /// Read a single received byte without blocking.
    pub fn nb_read(&mut self) -> Result<u8, nb::Error<Error>> {
        self.rx.nb_read()
    }

    /// Split the Uart into a transmitter and receiver, which is particularly
    /// useful when having two tasks correlating to transmitting and receiving.
    pub fn split(self) -> (UartTx<'d, T>, UartRx<'d, T>) {
        (self.tx, self.rx)
    }

    /// Split the Uart into a transmitter and receiver by mutable reference,
    /// which is useful when the ownership of the Uart must be kept.
    pub fn split_ref(&mut self) -> (&mut UartTx<'d, T>, &mut UartRx<'d, T>) {
        (&mut self.tx, &mut self.rx)
    }
}

impl<'d, T: Instance> UartTx<'d, T> {
    /// Create a new tx-only UART.
    pub fn new_blocking(
        peri: impl Peripheral<P = T> + 'd,
        tx: impl Peripheral<P = impl TxPin<T>> + 'd,
        config: Config,
    ) -> Result<Self, ConfigError> {
        into_ref!(peri, tx);
        let _ = peri;

        let tx_code = tx.pps_code();
        let tx = tx.map_into();
        new_inner::<T>(None, Some((&tx, tx_code)), config)?;

        Ok(Self {
            _tx: Some(tx),
            _phantom: PhantomData,
        })
    }

    /// Reconfigure the UART in place. Waits for any transmission in progress
    /// to drain first.
    pub fn set_config(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.blocking_flush().ok();
        reconfigure::<T>(config)
    }

    /// Write all bytes in `buffer`.
    ///
    /// Blocks while the 4-deep hardware transmit FIFO is full, no timeout.
    /// Returns once the last byte has been queued, not once it is on the
    /// wire; use [`blocking_flush`](Self::blocking_flush) for that.
    pub fn blocking_write(&mut self, buffer: &[u8]) -> Result<(), Error> {
        let r = T::regs();
        for &b in buffer {
            while r.uxsta().read().utxbf() {}
            r.uxtxreg().write_value(b as u32);
        }
        Ok(())
    }

    /// Block until the transmit shift register runs empty, no timeout.
    pub fn blocking_flush(&mut self) -> Result<(), Error> {
        let r = T::regs();
        while !r.uxsta().read().trmt() {}
        Ok(())
    }
}

impl<'d, T: Instance> UartRx<'d, T> {
    /// Create a new rx-only UART.
    pub fn new_blocking(
        peri: impl Peripheral<P = T> + 'd,
        rx: impl Peripheral<P = impl RxPin<T>> + 'd,
        config: Config,
    ) -> Result<Self, ConfigError> {
        into_ref!(peri, rx);
        let _ = peri;

        let rx_sel = rx.pps_code();
        let rx = rx.map_into();
        new_inner::<T>(Some((&rx, rx_sel)), None, config)?;

        Ok(Self {
            _rx: Some(rx),
            _phantom: PhantomData,
        })
    }

    /// Reconfigure the UART in place.
    pub fn set_config(&mut self, config: &Config) -> Result<(), ConfigError> {
        reconfigure::<T>(config)
    }

    /// Read a single received byte without blocking.
    ///
    /// Error flags apply to the character at the top of the receive FIFO, so
    /// they are checked before the data register is popped. An overrun stops
    /// the receiver until its flag is cleared; clearing it here resets the
    /// FIFO, dropping whatever was in it.
    pub fn nb_read(&mut self) -> Result<u8, nb::Error<Error>> {
        let r = T::regs();
        let sta = r.uxsta().read();

        if sta.oerr() {
            r.uxsta().write_clr(|w| w.set_oerr(true));
            return Err(nb::Error::Other(Error::Overrun));
        }
        if !sta.urxda() {
            return Err(nb::Error::WouldBlock);
        }
        if sta.ferr() {
            let _ = r.uxrxreg().read();
            return Err(nb::Error::Other(Error::Framing));
        }
        if sta.perr() {
            let _ = r.uxrxreg().read();
            return Err(nb::Error::Other(Error::Parity));
        }

        Ok(r.uxrxreg().read() as u8)
    }

    /// Fill `buffer` with received bytes.
    ///
    /// Blocks until the whole buffer is full, no timeout.
    pub fn blocking_read(&mut self, buffer: &mut [u8]) -> Result<(), Error> {
        for b in buffer {
            *b = nb::block!(self.nb_read())?;
        }
        Ok(())
    }
}

fn new_inner<T: Instance>(
    rx: Option<(&PeripheralRef<'_, AnyPin>, u8)>,
    tx: Option<(&PeripheralRef<'_, AnyPin>, u8)>,
    config: Config,
) -> Result<(), ConfigError> {
    osc::enable::<T>();

    let r = T::regs();
    r.uxmode().write(|_| {});

    // The blocking driver polls UxSTA; leave all three sources quiet.
    interrupt::disable(T::IRQ_ERR);
    interrupt::disable(T::IRQ_RX);
    interrupt::disable(T::IRQ_TX);
    interrupt::unpend(T::IRQ_ERR);
    interrupt::unpend(T::IRQ_RX);
    interrupt::unpend(T::IRQ_TX);

    if let Some((pin, sel)) = rx {
        pin.set_as_peripheral();
        T::rxr().write_value(sel as u32);
    }
    if let Some((pin, code)) = tx {
        pin.set_as_peripheral();
        pac::PPS
            .rpr(pin._port() as usize, pin._pin() as usize)
            .write_value(code as u32);
    }

    configure::<T>(&config)?;

    r.uxsta().write(|w| {
        w.set_utxen(tx.is_some());
        w.set_urxen(rx.is_some());
        // Interrupt mode bits are don't-care while polling, keep the reset
        // "any character" selection.
        w.set_urxisel(0);
    });
    r.uxmode().modify(|w| w.set_on(true));

    Ok(())
}

/// Program baud rate and framing. The module must be off or drained.
fn configure<T: Instance>(config: &Config) -> Result<(), ConfigError> {
    let pdsel = config.pdsel()?;
    let brg = brg_for(osc::pbclk().0, config.baudrate)?;

    let r = T::regs();
    r.uxbrg().write_value(brg as u32);
    r.uxmode().modify(|w| {
        w.set_brgh(true);
        w.set_pdsel(pdsel);
        w.set_stsel(config.stsel());
    });
    Ok(())
}

fn reconfigure<T: Instance>(config: &Config) -> Result<(), ConfigError> {
    let r = T::regs();
    r.uxmode().modify(|w| w.set_on(false));
    configure::<T>(config)?;
    r.uxmode().modify(|w| w.set_on(true));
    Ok(())
}

impl<'d, T: Instance> embedded_hal_02::serial::Read<u8> for UartRx<'d, T> {
    type Error = Error;
    fn read(&mut self) -> Result<u8, nb::Error<Self::Error>> {
        self.nb_read()
    }
}

impl<'d, T: Instance> embedded_hal_02::blocking::serial::Write<u8> for UartTx<'d, T> {
    type Error = Error;
    fn bwrite_all(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        self.blocking_write(buffer)
    }
    fn bflush(&mut self) -> Result<(), Self::Error> {
        self.blocking_flush()
    }
}

impl<'d, T: Instance> embedded_hal_02::serial::Read<u8> for Uart<'d, T> {
    type Error = Error;
    fn read(&mut self) -> Result<u8, nb::Error<Self::Error>> {
        self.nb_read()
    }
}

impl<'d, T: Instance> embedded_hal_02::blocking::serial::Write<u8> for Uart<'d, T> {
    type Error = Error;
    fn bwrite_all(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        self.blocking_write(buffer)
    }
    fn bflush(&mut self) -> Result<(), Self::Error> {
        self.blocking_flush()
    }
}

impl embedded_hal_nb::serial::Error for Error {
    fn kind(&self) -> embedded_hal_nb::serial::ErrorKind {
        match *self {
            Self::Overrun => embedded_hal_nb::serial::ErrorKind::Overrun,
            Self::Framing => embedded_hal_nb::serial::ErrorKind::FrameFormat,
            Self::Parity => embedded_hal_nb::serial::ErrorKind::Parity,
        }
    }
}

impl<'d, T: Instance> embedded_hal_nb::serial::ErrorType for Uart<'d, T> {
    type Error = Error;
}

impl<'d, T: Instance> embedded_hal_nb::serial::ErrorType for UartTx<'d, T> {
    type Error = Error;
}

impl<'d, T: Instance> embedded_hal_nb::serial::ErrorType for UartRx<'d, T> {
    type Error = Error;
}

impl<'d, T: Instance> embedded_hal_nb::serial::Read for UartRx<'d, T> {
    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        self.nb_read()
    }
}

impl<'d, T: Instance> embedded_hal_nb::serial::Write for UartTx<'d, T> {
    fn write(&mut self, char: u8) -> nb::Result<(), Self::Error> {
        self.blocking_write(&[char]).map_err(nb::Error::Other)
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.blocking_flush().map_err(nb::Error::Other)
    }
}

impl<'d, T: Instance> embedded_hal_nb::serial::Read for Uart<'d, T> {
    fn read(&mut self) -> Result<u8, nb::Error<Self::Error>> {
        self.nb_read()
    }
}

impl<'d, T: Instance> embedded_hal_nb::serial::Write for Uart<'d, T> {
    fn write(&mut self, char: u8) -> nb::Result<(), Self::Error> {
        self.blocking_write(&[char]).map_err(nb::Error::Other)
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.blocking_flush().map_err(nb::Error::Other)
    }
}

impl embedded_io::Error for Error {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

impl<T: Instance> embedded_io::ErrorType for Uart<'_, T> {
    type Error = Error;
}

impl<T: Instance> embedded_io::ErrorType for UartTx<'_, T> {
    type Error = Error;
}

impl<T: Instance> embedded_io::Write for Uart<'_, T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.blocking_write(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.blocking_flush()
    }
}

impl<T: Instance> embedded_io::Write for UartTx<'_, T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.blocking_write(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.blocking_flush()
    }
}

pub(crate) trait SealedInstance: SealedPmdDisable {
    const IRQ_ERR: Interrupt;
    const IRQ_RX: Interrupt;
    const IRQ_TX: Interrupt;

    fn regs() -> pac::Uart;
    /// RX peripheral pin select input mux for this UART.
    fn rxr() -> Reg<u32, RW>;
}

/// UART peripheral instance trait.
#[allow(private_bounds)]
pub trait Instance: Peripheral<P = Self> + SealedInstance + crate::osc::PmdDisable + 'static {}

pin_trait!(TxPin, Instance);
pin_trait!(RxPin, Instance);

macro_rules! impl_uart {
    ($inst:ident, $rxr:ident, $pmd_bit:expr, $err:ident, $rx:ident, $tx:ident) => {
        impl SealedPmdDisable for peripherals::$inst {
            const PMD: (usize, u32) = (4, $pmd_bit);
        }
        impl crate::osc::PmdDisable for peripherals::$inst {}

        impl SealedInstance for peripherals::$inst {
            const IRQ_ERR: Interrupt = Interrupt::$err;
            const IRQ_RX: Interrupt = Interrupt::$rx;
            const IRQ_TX: Interrupt = Interrupt::$tx;

            fn regs() -> pac::Uart {
                pac::$inst
            }

            fn rxr() -> Reg<u32, RW> {
                pac::PPS.$rxr()
            }
        }

        impl Instance for peripherals::$inst {}
    };
}

impl_uart!(UART1, u1rxr, 0, Uart1Error, Uart1Rx, Uart1Tx);
impl_uart!(UART2, u2rxr, 1, Uart2Error, Uart2Rx, Uart2Tx);

// Remappable pin assignments. The RX code is the UxRXR input select value,
// the TX code is the output function number written to the pin's RPxR.
pin_trait_impl!(crate::usart::RxPin, UART1, PA2, 0);
pin_trait_impl!(crate::usart::RxPin, UART1, PB6, 1);
pin_trait_impl!(crate::usart::RxPin, UART1, PA4, 2);
pin_trait_impl!(crate::usart::RxPin, UART1, PB13, 3);
pin_trait_impl!(crate::usart::RxPin, UART1, PB2, 4);
pin_trait_impl!(crate::usart::TxPin, UART1, PA0, 1);
pin_trait_impl!(crate::usart::TxPin, UART1, PB3, 1);
pin_trait_impl!(crate::usart::TxPin, UART1, PB4, 1);
pin_trait_impl!(crate::usart::TxPin, UART1, PB15, 1);
pin_trait_impl!(crate::usart::TxPin, UART1, PB7, 1);

pin_trait_impl!(crate::usart::RxPin, UART2, PA1, 0);
pin_trait_impl!(crate::usart::RxPin, UART2, PB5, 1);
pin_trait_impl!(crate::usart::RxPin, UART2, PB1, 2);
pin_trait_impl!(crate::usart::RxPin, UART2, PB11, 3);
pin_trait_impl!(crate::usart::RxPin, UART2, PB8, 4);
pin_trait_impl!(crate::usart::TxPin, UART2, PA3, 2);
pin_trait_impl!(crate::usart::TxPin, UART2, PB14, 2);
pin_trait_impl!(crate::usart::TxPin, UART2, PB0, 2);
pin_trait_impl!(crate::usart::TxPin, UART2, PB10, 2);
pin_trait_impl!(crate::usart::TxPin, UART2, PB9, 2);

#[cfg(test)]
mod tests;
