use super::*;
use crate::osc;
use crate::pac::regs::Osccon;
use crate::pac::sim;
use crate::pac::vals::{Cosc, Pbdiv};

/// Stage a 20 MHz POSC system clock with the bus at 1:1 and refresh the
/// cached frequencies.
fn stage_20mhz_bus() {
    sim::reset();
    let mut osccon = Osccon(0);
    osccon.set_cosc(Cosc::POSC);
    osccon.set_pbdiv(Pbdiv::DIV1);
    sim::poke(pac::OSC.osccon().addr(), osccon.0);
    osc::update();
}

#[test]
fn brg_divisor_math() {
    // 20 MHz / 4 / 115200 = 43, minus one.
    assert_eq!(brg_for(20_000_000, 115_200), Ok(42));
    assert_eq!(brg_for(8_000_000, 115_200), Ok(16));
    // 40 MHz / 4 / 9600 truncates to 1041, minus one.
    assert_eq!(brg_for(40_000_000, 9_600), Ok(1_040));
    // Exact fit at the register ceiling.
    assert_eq!(brg_for(26_214_400, 100), Ok(0xffff));
}

#[test]
fn brg_divisor_range_errors() {
    // Faster than pbclk / 4: the divider underflows.
    assert_eq!(brg_for(1_000_000, 500_000), Err(ConfigError::BaudrateTooHigh));
    // Slower than the 16-bit divisor can reach.
    assert_eq!(brg_for(40_000_000, 100), Err(ConfigError::BaudrateTooLow));
    assert_eq!(brg_for(20_000_000, 0), Err(ConfigError::BaudrateTooLow));
}

#[test]
fn frame_encoding_matches_the_mode_register() {
    let mut config = Config::default();
    assert_eq!(config.pdsel(), Ok(Pdsel::DATA8_NONE));
    assert_eq!(config.stsel(), Stsel::STOP1);

    config.parity = Parity::ParityEven;
    assert_eq!(config.pdsel(), Ok(Pdsel::DATA8_EVEN));
    config.parity = Parity::ParityOdd;
    assert_eq!(config.pdsel(), Ok(Pdsel::DATA8_ODD));

    config.parity = Parity::ParityNone;
    config.data_bits = DataBits::DataBits9;
    config.stop_bits = StopBits::STOP2;
    assert_eq!(config.pdsel(), Ok(Pdsel::DATA9_NONE));
    assert_eq!(config.stsel(), Stsel::STOP2);

    // The hardware has no 9-bit-with-parity encoding.
    config.parity = Parity::ParityOdd;
    assert_eq!(config.pdsel(), Err(ConfigError::DataParityNotSupported));
}

#[test]
fn new_blocking_programs_baud_framing_and_pps() {
    let _guard = sim::lock();
    stage_20mhz_bus();

    let (uart, rx, tx) = unsafe {
        (
            peripherals::UART1::steal(),
            peripherals::PA2::steal(),
            peripherals::PB3::steal(),
        )
    };
    let _uart = Uart::new_blocking(uart, rx, tx, Config::default()).unwrap();

    let mode = pac::UART1.uxmode().read();
    assert!(mode.on());
    assert!(mode.brgh());
    assert_eq!(mode.pdsel(), Pdsel::DATA8_NONE);
    assert_eq!(mode.stsel(), Stsel::STOP1);
    assert_eq!(pac::UART1.uxbrg().read(), 42);

    let sta = pac::UART1.uxsta().read();
    assert!(sta.utxen());
    assert!(sta.urxen());

    // RX mux selects RPA2, TX function 1 (U1TX) mapped onto RPB3.
    assert_eq!(pac::PPS.u1rxr().read(), 0);
    assert_eq!(pac::PPS.rpr(1, 3).read(), 1);
    // Both pins handed over as digital inputs.
    assert_eq!(pac::GPIOA.ansel().read() & (1 << 2), 0);
    assert_ne!(pac::GPIOB.tris().read() & (1 << 3), 0);
    // U1MD clear: module ungated.
    assert_eq!(pac::CFG.pmd(4).read() & 0x01, 0);
}

#[test]
fn tx_only_leaves_the_receiver_disabled() {
    let _guard = sim::lock();
    stage_20mhz_bus();

    let (uart, tx) = unsafe { (peripherals::UART2::steal(), peripherals::PB0::steal()) };
    let mut tx = UartTx::new_blocking(uart, tx, Config::default()).unwrap();

    let sta = pac::UART2.uxsta().read();
    assert!(sta.utxen());
    assert!(!sta.urxen());
    // U2TX is output function 2.
    assert_eq!(pac::PPS.rpr(1, 0).read(), 2);

    tx.blocking_write(b"ok").unwrap();
    assert_eq!(pac::UART2.uxtxreg().read(), b'k' as u32);
}

#[test]
fn nb_read_pops_data_and_surfaces_errors() {
    let _guard = sim::lock();
    stage_20mhz_bus();

    let (uart, rx) = unsafe { (peripherals::UART1::steal(), peripherals::PB6::steal()) };
    let mut rx = UartRx::new_blocking(uart, rx, Config::default()).unwrap();
    assert_eq!(pac::PPS.u1rxr().read(), 1);

    // Empty FIFO.
    assert_eq!(rx.nb_read(), Err(nb::Error::WouldBlock));

    // One byte available.
    sim::poke(pac::UART1.uxsta().addr(), 0x0000_1001); // urxen | urxda
    sim::poke(pac::UART1.uxrxreg().addr(), 0x41);
    assert_eq!(rx.nb_read(), Ok(0x41));

    // Framing error flagged for the character at the top of the FIFO.
    sim::poke(pac::UART1.uxsta().addr(), 0x0000_1005); // urxen | ferr | urxda
    assert_eq!(rx.nb_read(), Err(nb::Error::Other(Error::Framing)));

    // Overrun wins over everything and is cleared to restart reception.
    sim::poke(pac::UART1.uxsta().addr(), 0x0000_1003); // urxen | oerr | urxda
    assert_eq!(rx.nb_read(), Err(nb::Error::Other(Error::Overrun)));
    assert!(!pac::UART1.uxsta().read().oerr());
}

#[test]
fn set_config_rejects_an_unreachable_baudrate() {
    let _guard = sim::lock();
    stage_20mhz_bus();

    let (uart, rx, tx) = unsafe {
        (
            peripherals::UART2::steal(),
            peripherals::PB5::steal(),
            peripherals::PB14::steal(),
        )
    };
    let mut uart = Uart::new_blocking(uart, rx, tx, Config::default()).unwrap();

    // Unblock the flush that precedes reconfiguration.
    sim::poke(
        pac::UART2.uxsta().addr(),
        pac::UART2.uxsta().read().0 | 0x0000_0100, // trmt
    );

    let mut config = Config::default();
    config.baudrate = 50;
    assert_eq!(uart.set_config(&config), Err(ConfigError::BaudrateTooLow));
}
