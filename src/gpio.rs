//! Typestate GPIO pins, trimmed to what the display wiring needs:
//! push-pull outputs for the DC/CS/RST/backlight lines and
//! primary-function pins for the eUSCI bus.

use crate::hw_traits::gpio::GpioPeriph;
use crate::hw_traits::Steal;
use crate::pmm::Pmm;
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use msp430fr2355 as pac;

/// Pin number token.
pub trait PinNum {
    #[doc(hidden)]
    fn num() -> u8;
}

macro_rules! pin_num {
    ($Pin:ident, $num:literal) => {
        /// Pin number token
        pub struct $Pin;

        impl PinNum for $Pin {
            #[inline(always)]
            fn num() -> u8 {
                $num
            }
        }
    };
}

pin_num!(Pin0, 0);
pin_num!(Pin1, 1);
pin_num!(Pin2, 2);
pin_num!(Pin3, 3);
pin_num!(Pin4, 4);
pin_num!(Pin5, 5);
pin_num!(Pin6, 6);
pin_num!(Pin7, 7);

/// Port token tying a pin to its register block.
pub trait PortNum {
    #[doc(hidden)]
    type Periph: GpioPeriph;
}

/// State of a pin fresh out of [`GpioExt::split`].
pub struct Unknown;
/// Push-pull output.
pub struct Output;
/// Primary module function (SEL0 set), as used by the eUSCI pins.
pub struct Alternate1;

/// One GPIO pin in a given direction state.
pub struct Pin<PORT: PortNum, PIN: PinNum, DIR> {
    _port: PhantomData<PORT>,
    _pin: PhantomData<PIN>,
    _dir: PhantomData<DIR>,
}

macro_rules! make_pin {
    () => {
        Pin {
            _port: PhantomData,
            _pin: PhantomData,
            _dir: PhantomData,
        }
    };
}

impl<PORT: PortNum, PIN: PinNum, DIR> Pin<PORT, PIN, DIR> {
    #[inline(always)]
    fn mask() -> u8 {
        1 << PIN::num()
    }

    /// Configure the pin as a push-pull GPIO output.
    pub fn to_output(self) -> Pin<PORT, PIN, Output> {
        let p = unsafe { PORT::Periph::steal() };
        p.pxsel0_clear(Self::mask());
        p.pxsel1_clear(Self::mask());
        p.pxren_clear(Self::mask());
        p.pxdir_set(Self::mask());
        make_pin!()
    }

    /// Hand the pin to its primary peripheral function.
    pub fn to_alternate1(self) -> Pin<PORT, PIN, Alternate1> {
        let p = unsafe { PORT::Periph::steal() };
        p.pxsel1_clear(Self::mask());
        p.pxsel0_set(Self::mask());
        make_pin!()
    }
}

impl<PORT: PortNum, PIN: PinNum> ErrorType for Pin<PORT, PIN, Output> {
    type Error = Infallible;
}

impl<PORT: PortNum, PIN: PinNum> OutputPin for Pin<PORT, PIN, Output> {
    #[inline(always)]
    fn set_low(&mut self) -> Result<(), Infallible> {
        let p = unsafe { PORT::Periph::steal() };
        p.pxout_clear(Self::mask());
        Ok(())
    }

    #[inline(always)]
    fn set_high(&mut self) -> Result<(), Infallible> {
        let p = unsafe { PORT::Periph::steal() };
        p.pxout_set(Self::mask());
        Ok(())
    }
}

impl<PORT: PortNum, PIN: PinNum> StatefulOutputPin for Pin<PORT, PIN, Output> {
    #[inline(always)]
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        let p = unsafe { PORT::Periph::steal() };
        Ok(p.pxout_rd() & Self::mask() != 0)
    }

    #[inline(always)]
    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        self.is_set_high().map(|high| !high)
    }
}

/// Splits a port peripheral into its pins.
///
/// Taking a [`Pmm`] guarantees the LOCKLPM5 latch has been released, so
/// pin configuration actually reaches the pads.
pub trait GpioExt {
    /// Set of pins produced by the split
    type Parts;

    /// Consume the port and hand out its pins.
    fn split(self, pmm: &Pmm) -> Self::Parts;
}

macro_rules! impl_gpio_ext {
    ($Px:ident, $PxParts:ident, $Portx:ident) => {
        /// Port token tying a pin to its register block
        pub struct $Portx;

        impl PortNum for $Portx {
            type Periph = pac::$Px;
        }

        /// Pins of one port
        pub struct $PxParts {
            /// Pin 0
            pub pin0: Pin<$Portx, Pin0, Unknown>,
            /// Pin 1
            pub pin1: Pin<$Portx, Pin1, Unknown>,
            /// Pin 2
            pub pin2: Pin<$Portx, Pin2, Unknown>,
            /// Pin 3
            pub pin3: Pin<$Portx, Pin3, Unknown>,
            /// Pin 4
            pub pin4: Pin<$Portx, Pin4, Unknown>,
            /// Pin 5
            pub pin5: Pin<$Portx, Pin5, Unknown>,
            /// Pin 6
            pub pin6: Pin<$Portx, Pin6, Unknown>,
            /// Pin 7
            pub pin7: Pin<$Portx, Pin7, Unknown>,
        }

        impl GpioExt for pac::$Px {
            type Parts = $PxParts;

            fn split(self, _pmm: &Pmm) -> Self::Parts {
                $PxParts {
                    pin0: make_pin!(),
                    pin1: make_pin!(),
                    pin2: make_pin!(),
                    pin3: make_pin!(),
                    pin4: make_pin!(),
                    pin5: make_pin!(),
                    pin6: make_pin!(),
                    pin7: make_pin!(),
                }
            }
        }
    };
}

impl_gpio_ext!(P1, P1Parts, Port1);
impl_gpio_ext!(P2, P2Parts, Port2);
impl_gpio_ext!(P3, P3Parts, Port3);
impl_gpio_ext!(P4, P4Parts, Port4);
impl_gpio_ext!(P5, P5Parts, Port5);
impl_gpio_ext!(P6, P6Parts, Port6);
