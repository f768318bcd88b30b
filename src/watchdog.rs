//! Watchdog hold.
//!
//! **Note**: MSP430 devices reset roughly 32 ms after bootup if the
//! watchdog is not stopped, so constrain it first thing in `main`.

use msp430fr2355 as pac;

const PASSWORD: u8 = 0x5A;

/// Watchdog handle; constructing it stops the timer.
pub struct Wdt {
    _periph: pac::WDT_A,
}

impl Wdt {
    /// Stop the watchdog and take ownership of the peripheral.
    pub fn constrain(wdt: pac::WDT_A) -> Self {
        wdt.wdtctl
            .write(|w| unsafe { w.wdtpw().bits(PASSWORD) }.wdthold().hold());
        Wdt { _periph: wdt }
    }
}
