//! Clock system configuration.
//!
//! MCLK runs off REFOCLK or off the DCO locked by the FLL; SMCLK divides
//! MCLK and feeds the eUSCI bit clock; ACLK takes REFOCLK or VLOCLK.
//! Configuration is a builder consumed by [`ClockConfig::freeze`], after
//! which the returned clock objects are the only proof of the configured
//! frequencies.

use msp430fr2355 as pac;
use pac::cs::csctl1::DCORSEL_A;
use pac::cs::csctl4::{SELA_A, SELMS_A};
pub use pac::cs::csctl5::{DIVM_A as MclkDiv, DIVS_A as SmclkDiv};

/// REFOCLK frequency
pub const REFOCLK: u16 = 32768;
/// VLOCLK frequency
pub const VLOCLK: u16 = 10000;

const FLL_MAX_MUL: u16 = 732;

enum MclkSel {
    Refoclk,
    Dcoclk { flln: u16, range: DCORSEL_A },
}

impl MclkSel {
    fn selms(&self) -> SELMS_A {
        match self {
            MclkSel::Refoclk => SELMS_A::REFOCLK,
            MclkSel::Dcoclk { .. } => SELMS_A::DCOCLKDIV,
        }
    }

    fn freq(&self) -> u32 {
        match self {
            MclkSel::Refoclk => REFOCLK as u32,
            MclkSel::Dcoclk { flln, range: _ } => (REFOCLK as u32) * (*flln as u32 + 1),
        }
    }
}

#[derive(Clone, Copy)]
enum AclkSel {
    Vloclk,
    Refoclk,
}

impl AclkSel {
    fn sela(self) -> SELA_A {
        match self {
            AclkSel::Vloclk => SELA_A::VLOCLK,
            AclkSel::Refoclk => SELA_A::REFOCLK,
        }
    }

    fn freq(self) -> u16 {
        match self {
            AclkSel::Vloclk => VLOCLK,
            AclkSel::Refoclk => REFOCLK,
        }
    }
}

/// Builder for the system clock configuration.
///
/// Defaults match the microcontroller reset state: everything on REFOCLK
/// with no division.
pub struct ClockConfig {
    periph: pac::CS,
    mclk_sel: MclkSel,
    mclk_div: MclkDiv,
    smclk_div: SmclkDiv,
    aclk_sel: AclkSel,
}

impl ClockConfig {
    /// Convert the CS peripheral into a clock configuration builder.
    pub fn new(cs: pac::CS) -> Self {
        ClockConfig {
            periph: cs,
            mclk_sel: MclkSel::Refoclk,
            mclk_div: MclkDiv::_1,
            smclk_div: SmclkDiv::_1,
            aclk_sel: AclkSel::Refoclk,
        }
    }

    /// Select REFOCLK for MCLK with the given divider.
    pub fn mclk_refoclk(mut self, mclk_div: MclkDiv) -> Self {
        self.mclk_sel = MclkSel::Refoclk;
        self.mclk_div = mclk_div;
        self
    }

    /// Select the FLL-stabilized DCO for MCLK. Frequency is
    /// `32768 * multiplier / mclk_div` Hz; the multiplier is clamped to
    /// 1..=732, which tops out around 24 MHz.
    pub fn mclk_dcoclk(mut self, mut multiplier: u16, mclk_div: MclkDiv) -> Self {
        if multiplier < 1 {
            multiplier = 1;
        } else if multiplier > FLL_MAX_MUL {
            multiplier = FLL_MAX_MUL;
        }
        let flln = multiplier - 1;

        let range = if multiplier < 32 {
            DCORSEL_A::DCORSEL_0
        } else if multiplier < 64 {
            DCORSEL_A::DCORSEL_1
        } else if multiplier < 128 {
            DCORSEL_A::DCORSEL_2
        } else if multiplier < 256 {
            DCORSEL_A::DCORSEL_3
        } else if multiplier < 384 {
            DCORSEL_A::DCORSEL_4
        } else if multiplier < 512 {
            DCORSEL_A::DCORSEL_5
        } else if multiplier < 640 {
            DCORSEL_A::DCORSEL_6
        } else {
            DCORSEL_A::DCORSEL_7
        };

        self.mclk_sel = MclkSel::Dcoclk { flln, range };
        self.mclk_div = mclk_div;
        self
    }

    /// Set the SMCLK divider applied on top of MCLK.
    pub fn smclk_div(mut self, div: SmclkDiv) -> Self {
        self.smclk_div = div;
        self
    }

    /// Select VLOCLK for ACLK.
    pub fn aclk_vloclk(mut self) -> Self {
        self.aclk_sel = AclkSel::Vloclk;
        self
    }

    /// Select REFOCLK for ACLK.
    pub fn aclk_refoclk(mut self) -> Self {
        self.aclk_sel = AclkSel::Refoclk;
        self
    }

    fn configure_periph(&self) {
        // FLL configuration procedure from the user's guide
        if let MclkSel::Dcoclk { flln, range } = self.mclk_sel {
            self.periph.csctl3.write(|w| w.selref().refoclk());
            self.periph.csctl0.write(|w| unsafe { w.bits(0) });
            self.periph.csctl1.write(|w| w.dcorsel().variant(range));
            self.periph
                .csctl2
                .write(|w| unsafe { w.flln().bits(flln) }.flld()._1());

            msp430::asm::nop();
            msp430::asm::nop();
            msp430::asm::nop();
            while !self.periph.csctl7.read().fllunlock().is_fllunlock_0() {}
        }

        self.periph.csctl4.write(|w| {
            w.sela()
                .variant(self.aclk_sel.sela())
                .selms()
                .variant(self.mclk_sel.selms())
        });

        self.periph.csctl5.write(|w| {
            w.vloautooff()
                .set_bit()
                .divm()
                .variant(self.mclk_div)
                .divs()
                .variant(self.smclk_div)
        });
    }

    /// Apply the configuration and return the clock objects.
    pub fn freeze(self) -> (Mclk, Smclk, Aclk) {
        self.configure_periph();
        // Divider enums are ordered so their numeric values are the log2 of
        // the divisor.
        let mclk_freq = self.mclk_sel.freq() >> (self.mclk_div as u32);
        (
            Mclk(mclk_freq),
            Smclk(mclk_freq >> (self.smclk_div as u32)),
            Aclk(self.aclk_sel.freq()),
        )
    }
}

/// MCLK clock object.
pub struct Mclk(u32);

impl Mclk {
    /// MCLK frequency in Hz. 32 bits because the DCO reaches 24 MHz.
    pub fn freq(&self) -> u32 {
        self.0
    }
}

/// SMCLK clock object, the eUSCI bit clock source.
pub struct Smclk(u32);

impl Smclk {
    /// SMCLK frequency in Hz.
    pub fn freq(&self) -> u32 {
        self.0
    }
}

/// ACLK clock object.
pub struct Aclk(u16);

impl Aclk {
    /// ACLK frequency in Hz.
    pub fn freq(&self) -> u16 {
        self.0
    }
}
