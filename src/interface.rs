//! Command/data channel to the display controller.
//!
//! [`DisplayInterface`] is the narrow seam the driver core depends on;
//! [`SpiInterface`] is the production implementation over an SPI byte
//! exchange plus the data/command, chip-select and reset lines.

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal_nb::spi::FullDuplex;
use nb::Error::WouldBlock;

/// Byte clocked out when only the returned byte matters.
pub const DUMMY: u8 = 0xFF;

/// Default number of ready-flag polls allowed per byte exchange.
pub const DEFAULT_SPIN_LIMIT: u32 = 100_000;

/// Byte-oriented channel to the display controller.
///
/// One logical transaction is `select`, any number of command/data bytes,
/// `deselect`. Implementations toggle the data/command line per byte and
/// must not touch chip-select outside `select`/`deselect`.
pub trait DisplayInterface {
    /// Channel error type
    type Error: Debug;

    /// Assert the chip-select line, addressing the controller.
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Deassert the chip-select line, ending the transaction.
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// Send one byte with the data/command line signalling "command".
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send one byte with the data/command line signalling "data".
    fn write_data(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Clock out a dummy byte and return the byte the controller shifted
    /// back.
    fn read_data(&mut self) -> Result<u8, Self::Error>;

    /// Pulse the hardware reset line.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;
}

/// Errors produced by [`SpiInterface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceError<S, P> {
    /// The SPI peripheral reported a bus error
    Spi(S),
    /// One of the DC/CS/RST lines reported an error
    Pin(P),
    /// A ready flag never asserted within the spin limit
    Timeout,
}

/// SPI transport with data/command, chip-select and reset lines.
///
/// Each byte exchange busy-polls the peripheral's transmit and receive
/// flags, but with a bounded spin count: a wedged bus surfaces as
/// [`InterfaceError::Timeout`] instead of hanging the caller. The limit is
/// generous enough that it is never reached on a healthy bus.
pub struct SpiInterface<SPI, DC, CS, RST> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
    spin_limit: u32,
}

impl<SPI, DC, CS, RST, PinE> SpiInterface<SPI, DC, CS, RST>
where
    SPI: FullDuplex<u8>,
    DC: OutputPin<Error = PinE>,
    CS: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    /// Create an interface from the bus and control lines.
    ///
    /// The caller should leave CS and RST high (both are active low) before
    /// starting; `Ili9341::init` pulses reset and drives CS itself.
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        SpiInterface {
            spi,
            dc,
            cs,
            rst,
            spin_limit: DEFAULT_SPIN_LIMIT,
        }
    }

    /// Replace the default spin limit per byte exchange.
    pub fn spin_limit(mut self, limit: u32) -> Self {
        self.spin_limit = limit;
        self
    }

    /// Release the bus and control lines.
    pub fn release(self) -> (SPI, DC, CS, RST) {
        (self.spi, self.dc, self.cs, self.rst)
    }

    /// Full-duplex byte exchange with a bounded busy-wait on each flag.
    fn exchange(&mut self, byte: u8) -> Result<u8, InterfaceError<SPI::Error, PinE>> {
        let mut spins = 0;
        loop {
            match self.spi.write(byte) {
                Ok(()) => break,
                Err(WouldBlock) => {
                    spins += 1;
                    if spins > self.spin_limit {
                        return Err(InterfaceError::Timeout);
                    }
                }
                Err(nb::Error::Other(e)) => return Err(InterfaceError::Spi(e)),
            }
        }
        let mut spins = 0;
        loop {
            match self.spi.read() {
                Ok(byte) => return Ok(byte),
                Err(WouldBlock) => {
                    spins += 1;
                    if spins > self.spin_limit {
                        return Err(InterfaceError::Timeout);
                    }
                }
                Err(nb::Error::Other(e)) => return Err(InterfaceError::Spi(e)),
            }
        }
    }
}

impl<SPI, DC, CS, RST, PinE> DisplayInterface for SpiInterface<SPI, DC, CS, RST>
where
    SPI: FullDuplex<u8>,
    DC: OutputPin<Error = PinE>,
    CS: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
    PinE: Debug,
{
    type Error = InterfaceError<SPI::Error, PinE>;

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(InterfaceError::Pin)
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(InterfaceError::Pin)
    }

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.exchange(command)?;
        Ok(())
    }

    fn write_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.exchange(byte)?;
        // Park the line in command state between data bytes.
        self.dc.set_low().map_err(InterfaceError::Pin)
    }

    fn read_data(&mut self) -> Result<u8, Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        let byte = self.exchange(DUMMY)?;
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        Ok(byte)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(15);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(15);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::NoopDelay;
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Event {
        CsLow,
        CsHigh,
        DcLow,
        DcHigh,
        RstLow,
        RstHigh,
        Byte(u8),
    }

    type Trace = Rc<RefCell<Vec<Event>>>;

    struct EchoSpi {
        trace: Trace,
        shifted: Option<u8>,
    }

    impl embedded_hal::spi::ErrorType for EchoSpi {
        type Error = Infallible;
    }

    impl FullDuplex<u8> for EchoSpi {
        fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
            self.trace.borrow_mut().push(Event::Byte(word));
            self.shifted = Some(word);
            Ok(())
        }

        fn read(&mut self) -> nb::Result<u8, Infallible> {
            match self.shifted.take() {
                Some(byte) => Ok(byte),
                None => Err(WouldBlock),
            }
        }
    }

    /// Transmit flag never asserts.
    struct StuckSpi;

    impl embedded_hal::spi::ErrorType for StuckSpi {
        type Error = Infallible;
    }

    impl FullDuplex<u8> for StuckSpi {
        fn write(&mut self, _word: u8) -> nb::Result<(), Infallible> {
            Err(WouldBlock)
        }

        fn read(&mut self) -> nb::Result<u8, Infallible> {
            Err(WouldBlock)
        }
    }

    struct TracePin {
        trace: Trace,
        low: Event,
        high: Event,
    }

    impl embedded_hal::digital::ErrorType for TracePin {
        type Error = Infallible;
    }

    impl OutputPin for TracePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.trace.borrow_mut().push(self.low);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.trace.borrow_mut().push(self.high);
            Ok(())
        }
    }

    struct NoPin;

    impl embedded_hal::digital::ErrorType for NoPin {
        type Error = Infallible;
    }

    impl OutputPin for NoPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    fn traced() -> (Trace, SpiInterface<EchoSpi, TracePin, TracePin, TracePin>) {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let spi = EchoSpi {
            trace: Rc::clone(&trace),
            shifted: None,
        };
        let pin = |low, high| TracePin {
            trace: Rc::clone(&trace),
            low,
            high,
        };
        let iface = SpiInterface::new(
            spi,
            pin(Event::DcLow, Event::DcHigh),
            pin(Event::CsLow, Event::CsHigh),
            pin(Event::RstLow, Event::RstHigh),
        );
        (trace, iface)
    }

    #[test]
    fn command_byte_sent_with_dc_low() {
        let (trace, mut iface) = traced();
        iface.write_command(0x2A).unwrap();
        assert_eq!(*trace.borrow(), [Event::DcLow, Event::Byte(0x2A)]);
    }

    #[test]
    fn data_byte_toggles_dc_around_transfer() {
        let (trace, mut iface) = traced();
        iface.write_data(0x55).unwrap();
        assert_eq!(
            *trace.borrow(),
            [Event::DcHigh, Event::Byte(0x55), Event::DcLow]
        );
    }

    #[test]
    fn read_clocks_dummy_byte() {
        let (trace, mut iface) = traced();
        let byte = iface.read_data().unwrap();
        assert_eq!(byte, DUMMY);
        assert_eq!(
            *trace.borrow(),
            [Event::DcHigh, Event::Byte(DUMMY), Event::DcLow]
        );
    }

    #[test]
    fn select_and_deselect_drive_chip_select() {
        let (trace, mut iface) = traced();
        iface.select().unwrap();
        iface.deselect().unwrap();
        assert_eq!(*trace.borrow(), [Event::CsLow, Event::CsHigh]);
    }

    #[test]
    fn reset_pulses_the_line() {
        let (trace, mut iface) = traced();
        iface.reset(&mut NoopDelay).unwrap();
        assert_eq!(*trace.borrow(), [Event::RstLow, Event::RstHigh]);
    }

    #[test]
    fn wedged_bus_times_out() {
        let mut iface = SpiInterface::new(StuckSpi, NoPin, NoPin, NoPin).spin_limit(16);
        assert_eq!(iface.write_command(0x2A), Err(InterfaceError::Timeout));
    }
}
