//! Busy-wait delay provider.

use crate::clock::Mclk;
use embedded_hal::delay::DelayNs;
use msp430::asm;

/// Delay provider timed off MCLK.
///
/// Spins on `nop`, so accuracy is coarse; long enough is what the display
/// timing needs, never shorter than asked.
pub struct Delay {
    cycles_per_us: u32,
}

impl Delay {
    /// Delay provider for the frozen MCLK.
    pub fn new(mclk: &Mclk) -> Self {
        Delay {
            // At least one cycle per microsecond even on slow clocks.
            cycles_per_us: (mclk.freq() / 1_000_000).max(1),
        }
    }
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        // One loop iteration costs a handful of cycles; divide by four and
        // round up so short delays still land on the long side.
        let mut loops = (ns / 1000).saturating_mul(self.cycles_per_us) / 4 + 1;
        while loops > 0 {
            asm::nop();
            loops -= 1;
        }
    }
}
