use super::Steal;
use msp430fr2355 as pac;

/// Bit clock source select.
#[derive(Clone, Copy)]
pub enum Ucssel {
    Uclk = 0,
    Aclk = 1,
    Smclk = 2,
}

/// UCxCTLW0 contents for SPI operation, assembled as a raw word so the same
/// writer serves the A and B flavored register blocks.
pub struct UcxSpiCtlw0 {
    pub ucckph: bool,
    pub ucckpl: bool,
    pub ucmsb: bool,
    pub uc7bit: bool,
    pub ucmst: bool,
    pub ucsync: bool,
    pub ucstem: bool,
    pub ucswrst: bool,
    pub ucssel: Ucssel,
}

impl UcxSpiCtlw0 {
    // Bit layout per the eUSCI SPI chapter of the family user's guide.
    // UCMODE stays 00 (3-pin SPI).
    fn bits(&self) -> u16 {
        (self.ucckph as u16) << 15
            | (self.ucckpl as u16) << 14
            | (self.ucmsb as u16) << 13
            | (self.uc7bit as u16) << 12
            | (self.ucmst as u16) << 11
            | (self.ucsync as u16) << 8
            | (self.ucssel as u16) << 6
            | (self.ucstem as u16) << 1
            | self.ucswrst as u16
    }
}

const UCSWRST: u16 = 1 << 0;
const UCRXIFG: u16 = 1 << 0;
const UCTXIFG: u16 = 1 << 1;

pub trait EusciSpi: Steal {
    fn ctlw0_rst_set(&self);
    fn ctlw0_rst_clear(&self);

    // only call while in the reset state
    fn ctlw0_wr(&self, reg: &UcxSpiCtlw0);
    fn brw_wr(&self, prescale: u16);
    fn ie_clear(&self);

    fn txifg_rd(&self) -> bool;
    fn rxifg_rd(&self) -> bool;
    fn txbuf_wr(&self, val: u8);
    fn rxbuf_rd(&self) -> u8;
}

macro_rules! eusci_spi_impl {
    ($EUsci:ident, $ctlw0:ident, $brw:ident, $rxbuf:ident, $txbuf:ident, $ie:ident, $ifg:ident) => {
        impl Steal for pac::$EUsci {
            #[inline(always)]
            unsafe fn steal() -> Self {
                pac::Peripherals::conjure().$EUsci
            }
        }

        impl EusciSpi for pac::$EUsci {
            #[inline(always)]
            fn ctlw0_rst_set(&self) {
                unsafe { self.$ctlw0.set_bits(|w| w.bits(UCSWRST)) }
            }

            #[inline(always)]
            fn ctlw0_rst_clear(&self) {
                unsafe { self.$ctlw0.clear_bits(|w| w.bits(UCSWRST)) }
            }

            #[inline(always)]
            fn ctlw0_wr(&self, reg: &UcxSpiCtlw0) {
                self.$ctlw0.write(|w| unsafe { w.bits(reg.bits()) });
            }

            #[inline(always)]
            fn brw_wr(&self, prescale: u16) {
                self.$brw.write(|w| unsafe { w.bits(prescale) });
            }

            #[inline(always)]
            fn ie_clear(&self) {
                self.$ie.write(|w| unsafe { w.bits(0) });
            }

            #[inline(always)]
            fn txifg_rd(&self) -> bool {
                self.$ifg.read().bits() & UCTXIFG != 0
            }

            #[inline(always)]
            fn rxifg_rd(&self) -> bool {
                self.$ifg.read().bits() & UCRXIFG != 0
            }

            #[inline(always)]
            fn txbuf_wr(&self, val: u8) {
                self.$txbuf.write(|w| unsafe { w.bits(val as u16) });
            }

            #[inline(always)]
            fn rxbuf_rd(&self) -> u8 {
                self.$rxbuf.read().bits() as u8
            }
        }
    };
}

eusci_spi_impl!(E_USCI_A0, uca0ctlw0, uca0brw, uca0rxbuf, uca0txbuf, uca0ie, uca0ifg);
eusci_spi_impl!(E_USCI_A1, uca1ctlw0, uca1brw, uca1rxbuf, uca1txbuf, uca1ie, uca1ifg);
eusci_spi_impl!(E_USCI_B0, ucb0ctlw0, ucb0brw, ucb0rxbuf, ucb0txbuf, ucb0ie, ucb0ifg);
eusci_spi_impl!(E_USCI_B1, ucb1ctlw0, ucb1brw, ucb1rxbuf, ucb1txbuf, ucb1ie, ucb1ifg);
