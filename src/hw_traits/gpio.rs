use super::Steal;
use msp430fr2355 as pac;

pub trait GpioPeriph: Steal {
    fn pxout_set(&self, bits: u8);
    fn pxout_clear(&self, bits: u8);
    fn pxout_rd(&self) -> u8;

    fn pxdir_set(&self, bits: u8);
    fn pxdir_clear(&self, bits: u8);

    fn pxren_clear(&self, bits: u8);

    fn pxsel0_set(&self, bits: u8);
    fn pxsel0_clear(&self, bits: u8);
    fn pxsel1_clear(&self, bits: u8);
}

macro_rules! reg_set_clear {
    ($reg:ident, $set:ident, $clear:ident) => {
        #[inline(always)]
        fn $set(&self, bits: u8) {
            unsafe { self.$reg.set_bits(|w| w.bits(bits)) }
        }

        #[inline(always)]
        fn $clear(&self, bits: u8) {
            unsafe { self.$reg.clear_bits(|w| w.bits(bits)) }
        }
    };
}

macro_rules! gpio_impl {
    ($px:ident: $Px:ident => $pxout:ident, $pxdir:ident, $pxren:ident, $pxsel0:ident, $pxsel1:ident) => {
        mod $px {
            use super::*;

            impl Steal for pac::$Px {
                #[inline(always)]
                unsafe fn steal() -> Self {
                    pac::Peripherals::conjure().$Px
                }
            }

            impl GpioPeriph for pac::$Px {
                #[inline(always)]
                fn pxout_rd(&self) -> u8 {
                    self.$pxout.read().bits()
                }

                #[inline(always)]
                fn pxren_clear(&self, bits: u8) {
                    unsafe { self.$pxren.clear_bits(|w| w.bits(bits)) }
                }

                #[inline(always)]
                fn pxsel1_clear(&self, bits: u8) {
                    unsafe { self.$pxsel1.clear_bits(|w| w.bits(bits)) }
                }

                reg_set_clear!($pxout, pxout_set, pxout_clear);
                reg_set_clear!($pxdir, pxdir_set, pxdir_clear);
                reg_set_clear!($pxsel0, pxsel0_set, pxsel0_clear);
            }
        }
    };
}

gpio_impl!(p1: P1 => p1out, p1dir, p1ren, p1sel0, p1sel1);
gpio_impl!(p2: P2 => p2out, p2dir, p2ren, p2sel0, p2sel1);
gpio_impl!(p3: P3 => p3out, p3dir, p3ren, p3sel0, p3sel1);
gpio_impl!(p4: P4 => p4out, p4dir, p4ren, p4sel0, p4sel1);
gpio_impl!(p5: P5 => p5out, p5dir, p5ren, p5sel0, p5sel1);
gpio_impl!(p6: P6 => p6out, p6dir, p6ren, p6sel0, p6sel1);
