//! Driver for ILI9341-based SPI TFT panels with built-in bitmap font
//! rendering, written for MSP430 microcontrollers but usable on top of any
//! [`embedded_hal`] implementation. Here is the [`controller datasheet`] for
//! reference.
//!
//! The driver core ([`Ili9341`]) talks to the panel through the narrow
//! [`DisplayInterface`] seam, so it builds and tests on a host machine with a
//! recording test double. [`SpiInterface`] is the production channel: an SPI
//! byte exchange plus the data/command, chip-select and reset lines.
//!
//! [`embedded_hal`]: https://github.com/rust-embedded/embedded-hal
//! [`controller datasheet`]: https://cdn-shop.adafruit.com/datasheets/ILI9341.pdf
//!
//! # Usage
//!
//! Wire the panel's SCLK/SDI/SDO to an SPI bus and hand the driver the DC,
//! CS and RST lines as `OutputPin`s:
//!
//! 1. build a `SpiInterface` from the bus and the three pins,
//! 2. wrap it in `Ili9341` and call [`Ili9341::init`] once at boot,
//! 3. draw with [`Ili9341::clear`], [`Ili9341::fill_rect`],
//!    [`Ili9341::draw_string`] and friends.
//!
//! With the `msp430fr2355` feature enabled the crate also provides the
//! on-chip side of the equation (eUSCI SPI, GPIO, clock and delay), and
//! `demos/color_cycle.rs` shows the full bring-up on a LaunchPad.

#![no_std]
#![deny(missing_docs)]

pub mod color;
pub mod command;
pub mod display;
pub mod font;
pub mod fonts;
pub mod interface;

#[cfg(feature = "msp430fr2355")]
pub mod clock;
#[cfg(feature = "msp430fr2355")]
pub mod delay;
#[cfg(feature = "msp430fr2355")]
pub mod gpio;
#[cfg(feature = "msp430fr2355")]
pub mod pmm;
#[cfg(feature = "msp430fr2355")]
pub mod spi;
#[cfg(feature = "msp430fr2355")]
pub mod watchdog;

#[cfg(feature = "msp430fr2355")]
mod hw_traits;

#[cfg(feature = "msp430fr2355")]
pub use msp430fr2355 as pac;

pub use color::Rgb;
pub use command::{Command, Madctl};
pub use display::{Ili9341, Orientation};
pub use font::{BitmapFont, Font20x28, Font5x7, GlyphPixels};
pub use interface::{DisplayInterface, InterfaceError, SpiInterface};

#[cfg(test)]
extern crate std;

#[cfg(test)]
pub(crate) mod testutil;
