//! Power management module.

use msp430fr2355 as pac;

/// PMM handle. Holding one proves the LOCKLPM5 latch has been released.
pub struct Pmm(pac::PMM);

impl Pmm {
    /// Clear LOCKLPM5 and take ownership of the PMM.
    ///
    /// Until the latch is cleared, GPIO register writes do not reach the
    /// pads after a cold start.
    pub fn new(pmm: pac::PMM) -> Pmm {
        pmm.pm5ctl0.write(|w| w.locklpm5().locklpm5_0());
        Pmm(pmm)
    }
}
