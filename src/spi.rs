//! embedded-hal SPI implementation over the eUSCI peripherals.
//!
//! The bus object exposes the non-blocking [`FullDuplex`] interface: the
//! TXIFG/RXIFG ready flags surface as `WouldBlock`, and the display
//! channel layers its bounded busy-wait on top.

use core::convert::Infallible;
use core::marker::PhantomData;

use crate::clock::Smclk;
use crate::gpio::{Alternate1, Pin, Pin1, Pin2, Pin3, Pin5, Pin6, Pin7, Port1, Port4};
use crate::hw_traits::eusci::{EusciSpi, UcxSpiCtlw0, Ucssel};
use embedded_hal::spi::{ErrorType, Mode, Phase, Polarity};
use embedded_hal_nb::spi::FullDuplex;
use msp430fr2355 as pac;
use nb::Error::WouldBlock;

/// Marks an eUSCI instance usable as an SPI bus and names its pins.
pub trait SpiUsci: EusciSpi {
    /// Master-out slave-in pin (SIMO in the datasheet)
    type Mosi;
    /// Master-in slave-out pin (SOMI in the datasheet)
    type Miso;
    /// Serial clock pin
    type Sclk;
}

impl SpiUsci for pac::E_USCI_B0 {
    type Mosi = UsciB0MosiPin;
    type Miso = UsciB0MisoPin;
    type Sclk = UsciB0SclkPin;
}

impl SpiUsci for pac::E_USCI_B1 {
    type Mosi = UsciB1MosiPin;
    type Miso = UsciB1MisoPin;
    type Sclk = UsciB1SclkPin;
}

// Allows the corresponding GPIO pin to witness an SPI pin assignment
macro_rules! impl_spi_pin {
    ($struct_name:ident, $port:ty, $pin:ty) => {
        impl From<Pin<$port, $pin, Alternate1>> for $struct_name {
            #[inline(always)]
            fn from(_pin: Pin<$port, $pin, Alternate1>) -> Self {
                $struct_name
            }
        }
    };
}

/// SPI MOSI pin for eUSCI B0
pub struct UsciB0MosiPin;
impl_spi_pin!(UsciB0MosiPin, Port1, Pin2);

/// SPI MISO pin for eUSCI B0
pub struct UsciB0MisoPin;
impl_spi_pin!(UsciB0MisoPin, Port1, Pin3);

/// SPI SCLK pin for eUSCI B0
pub struct UsciB0SclkPin;
impl_spi_pin!(UsciB0SclkPin, Port1, Pin1);

/// SPI MOSI pin for eUSCI B1
pub struct UsciB1MosiPin;
impl_spi_pin!(UsciB1MosiPin, Port4, Pin6);

/// SPI MISO pin for eUSCI B1
pub struct UsciB1MisoPin;
impl_spi_pin!(UsciB1MisoPin, Port4, Pin7);

/// SPI SCLK pin for eUSCI B1
pub struct UsciB1SclkPin;
impl_spi_pin!(UsciB1SclkPin, Port4, Pin5);

/// Configuration builder for an eUSCI peripheral in 3-pin SPI master mode.
///
/// Chip-select is software-driven GPIO, so `UCSTEM` stays clear and any
/// number of devices can share the bus.
pub struct SpiConfig<USCI: SpiUsci> {
    usci: USCI,
    ctlw0: UcxSpiCtlw0,
    prescaler: u16,
}

impl<USCI: SpiUsci> SpiConfig<USCI> {
    /// Start configuring a peripheral for the given SPI mode and bit order.
    pub fn new(usci: USCI, mode: Mode, msb_first: bool) -> Self {
        let ctlw0 = UcxSpiCtlw0 {
            ucckph: match mode.phase {
                Phase::CaptureOnFirstTransition => true,
                Phase::CaptureOnSecondTransition => false,
            },
            ucckpl: match mode.polarity {
                Polarity::IdleLow => false,
                Polarity::IdleHigh => true,
            },
            ucmsb: msb_first,
            uc7bit: false,
            ucmst: true,
            ucsync: true,
            ucstem: false,
            ucswrst: true,
            ucssel: Ucssel::Smclk,
        };

        SpiConfig {
            usci,
            ctlw0,
            prescaler: 1,
        }
    }

    /// Source the bit clock from SMCLK with the given divisor.
    #[inline]
    pub fn use_smclk(mut self, _smclk: &Smclk, clk_divisor: u16) -> Self {
        self.ctlw0.ucssel = Ucssel::Smclk;
        self.prescaler = clk_divisor;
        self
    }

    /// Claim the bus pins, apply the hardware configuration and produce
    /// the SPI bus object.
    pub fn pins<MO: Into<USCI::Mosi>, MI: Into<USCI::Miso>, CLK: Into<USCI::Sclk>>(
        self,
        _mosi: MO,
        _miso: MI,
        _sclk: CLK,
    ) -> SpiPins<USCI> {
        self.configure_hw();
        SpiPins(PhantomData)
    }

    #[inline]
    fn configure_hw(&self) {
        self.usci.ctlw0_rst_set();
        self.usci.ctlw0_wr(&self.ctlw0);
        self.usci.brw_wr(self.prescaler);
        self.usci.ie_clear();
        self.usci.ctlw0_rst_clear();
    }
}

/// A group of pins configured for SPI communication.
pub struct SpiPins<USCI: SpiUsci>(PhantomData<USCI>);

impl<USCI: SpiUsci> ErrorType for SpiPins<USCI> {
    type Error = Infallible;
}

impl<USCI: SpiUsci> FullDuplex<u8> for SpiPins<USCI> {
    fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
        let usci = unsafe { USCI::steal() };
        if usci.txifg_rd() {
            usci.txbuf_wr(word);
            Ok(())
        } else {
            Err(WouldBlock)
        }
    }

    fn read(&mut self) -> nb::Result<u8, Infallible> {
        let usci = unsafe { USCI::steal() };
        if usci.rxifg_rd() {
            Ok(usci.rxbuf_rd())
        } else {
            Err(WouldBlock)
        }
    }
}
