//! ILI9341 driver core: initialization, window addressing, fills and
//! pixels.
//!
//! The controller owns the current write window and its auto-incrementing
//! cursor; the driver programs a window, streams R,G,B byte triplets into
//! it and lets the hardware do the positioning. Every public operation
//! brackets its byte stream in one chip-select assertion, so sequential
//! calls can never interleave on the bus.

use embedded_hal::delay::DelayNs;

use crate::color::Rgb;
use crate::command::{Command, Madctl};
use crate::interface::DisplayInterface;

/// Logical canvas selection for full-screen operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// 240 wide by 320 tall
    Portrait,
    /// 320 wide by 240 tall
    Landscape,
}

impl Orientation {
    /// Canvas size as `(width, height)`.
    pub const fn size(self) -> (u16, u16) {
        match self {
            Orientation::Portrait => (240, 320),
            Orientation::Landscape => (320, 240),
        }
    }
}

/// ILI9341 display driver over a [`DisplayInterface`].
pub struct Ili9341<IF> {
    iface: IF,
}

impl<IF: DisplayInterface> Ili9341<IF> {
    /// Wrap a channel. The panel is untouched until [`Ili9341::init`].
    pub fn new(iface: IF) -> Self {
        Ili9341 { iface }
    }

    /// Release the underlying channel.
    pub fn release(self) -> IF {
        self.iface
    }

    /// Reset the panel and run the vendor initialization sequence.
    ///
    /// The byte values are the module vendor's; they must go out exactly as
    /// written for the panel to come up.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), IF::Error> {
        self.iface.reset(delay)?;
        self.iface.select()?;
        let res = self.init_sequence(delay);
        let deselect = self.iface.deselect();
        res?;
        deselect
    }

    fn init_sequence<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), IF::Error> {
        self.command(Command::PowerControlA, &[0x39, 0x2C, 0x00, 0x34, 0x02])?;
        self.command(Command::PowerControlB, &[0x00, 0xC1, 0x30])?;
        self.command(Command::DriverTimingA, &[0x85, 0x00, 0x78])?;
        self.command(Command::DriverTimingB, &[0x00, 0x00])?;
        self.command(Command::PowerOnSequence, &[0x64, 0x03, 0x12, 0x81])?;
        self.command(Command::PumpRatio, &[0x20])?;
        self.command(Command::PowerControl1, &[0x23])?; // VRH = 4.60 V
        self.command(Command::PowerControl2, &[0x10])?;
        self.command(Command::VcomControl1, &[0x3E, 0x28])?;
        self.command(Command::VcomControl2, &[0x86])?;
        self.command(
            Command::MemoryAccessControl,
            &[(Madctl::MV | Madctl::BGR).bits()],
        )?;
        self.command(Command::PixelFormat, &[0x66])?; // 18-bit, one byte per channel
        self.command(Command::FrameRateControl, &[0x00, 0x18])?;
        self.command(Command::DisplayFunction, &[0x08, 0x82, 0x27])?;
        self.command(Command::SleepOut, &[])?;
        delay.delay_ms(120);
        self.command(Command::DisplayOn, &[])?;
        self.command(Command::MemoryWrite, &[])
    }

    /// Issue a command and its parameter bytes as one chip-selected
    /// transaction.
    pub fn write_register(&mut self, command: Command, params: &[u8]) -> Result<(), IF::Error> {
        self.guarded(|d| d.command(command, params))
    }

    /// Issue a command, clock one dummy byte, then read `reply.len()`
    /// bytes back.
    pub fn read_register(&mut self, command: Command, reply: &mut [u8]) -> Result<(), IF::Error> {
        self.guarded(|d| {
            d.iface.write_command(command as u8)?;
            d.iface.read_data()?; // dummy cycle before the first real byte
            for byte in reply.iter_mut() {
                *byte = d.iface.read_data()?;
            }
            Ok(())
        })
    }

    /// Fill the whole canvas with one color.
    pub fn clear(&mut self, color: Rgb, orientation: Orientation) -> Result<(), IF::Error> {
        let (width, height) = orientation.size();
        self.guarded(|d| {
            d.set_window(0, 0, width, height)?;
            for _ in 0..width {
                for _ in 0..height {
                    d.push_pixel(color)?;
                }
            }
            Ok(())
        })
    }

    /// Fill the rectangle spanned by `(x1, y1)` and `(x2, y2)` with one
    /// color.
    pub fn fill_rect(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb,
    ) -> Result<(), IF::Error> {
        self.guarded(|d| {
            d.set_window(x1, y1, x2, y2)?;
            for _ in x1..x2 {
                for _ in y1..y2 {
                    d.push_pixel(color)?;
                }
            }
            Ok(())
        })
    }

    /// Write one pixel at `(x, y)`.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb) -> Result<(), IF::Error> {
        self.guarded(|d| {
            d.set_window(x, y, x, y)?;
            d.push_pixel(color)
        })
    }

    /// Run `op` with chip-select asserted, deasserting afterwards even when
    /// the operation fails.
    fn guarded<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, IF::Error>,
    ) -> Result<T, IF::Error> {
        self.iface.select()?;
        let res = op(self);
        let deselect = self.iface.deselect();
        let val = res?;
        deselect?;
        Ok(val)
    }

    fn command(&mut self, command: Command, params: &[u8]) -> Result<(), IF::Error> {
        self.iface.write_command(command as u8)?;
        for &param in params {
            self.iface.write_data(param)?;
        }
        Ok(())
    }

    /// Program the write window and leave the controller expecting pixel
    /// data. Must precede every pixel stream; the window stays in effect
    /// until the next command.
    fn set_window(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) -> Result<(), IF::Error> {
        self.iface.write_command(Command::ColumnAddressSet as u8)?;
        self.iface.write_data((x1 >> 8) as u8)?;
        self.iface.write_data(x1 as u8)?;
        self.iface.write_data((x2 >> 8) as u8)?;
        self.iface.write_data(x2 as u8)?;
        self.iface.write_command(Command::PageAddressSet as u8)?;
        self.iface.write_data((y1 >> 8) as u8)?;
        self.iface.write_data(y1 as u8)?;
        self.iface.write_data((y2 >> 8) as u8)?;
        self.iface.write_data(y2 as u8)?;
        self.iface.write_command(Command::MemoryWrite as u8)
    }

    /// One R,G,B triplet into the open window; the controller advances its
    /// own cursor in raster order.
    fn push_pixel(&mut self, color: Rgb) -> Result<(), IF::Error> {
        self.iface.write_data(color.r)?;
        self.iface.write_data(color.g)?;
        self.iface.write_data(color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{windows, NoopDelay, Op, RecordingInterface};
    use std::vec;
    use std::vec::Vec;

    fn display() -> Ili9341<RecordingInterface> {
        Ili9341::new(RecordingInterface::new())
    }

    #[test]
    fn init_emits_the_vendor_sequence_byte_for_byte() {
        let mut lcd = display();
        lcd.init(&mut NoopDelay).unwrap();
        let ops = lcd.release().ops;

        let sequence: &[(u8, &[u8])] = &[
            (0xCB, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
            (0xCF, &[0x00, 0xC1, 0x30]),
            (0xE8, &[0x85, 0x00, 0x78]),
            (0xEA, &[0x00, 0x00]),
            (0xED, &[0x64, 0x03, 0x12, 0x81]),
            (0xF7, &[0x20]),
            (0xC0, &[0x23]),
            (0xC1, &[0x10]),
            (0xC5, &[0x3E, 0x28]),
            (0xC7, &[0x86]),
            (0x36, &[0x28]),
            (0x3A, &[0x66]),
            (0xB1, &[0x00, 0x18]),
            (0xB6, &[0x08, 0x82, 0x27]),
            (0x11, &[]),
            (0x29, &[]),
            (0x2C, &[]),
        ];
        let mut want = vec![Op::Reset, Op::Select];
        for (cmd, params) in sequence {
            want.push(Op::Command(*cmd));
            for &param in *params {
                want.push(Op::Data(param));
            }
        }
        want.push(Op::Deselect);
        assert_eq!(ops, want);
    }

    #[test]
    fn draw_pixel_addresses_a_one_by_one_window() {
        let mut lcd = display();
        lcd.draw_pixel(300, 7, Rgb::new(1, 2, 3)).unwrap();
        let ops = lcd.release().ops;
        assert_eq!(
            ops,
            vec![
                Op::Select,
                Op::Command(0x2A),
                Op::Data(0x01),
                Op::Data(0x2C),
                Op::Data(0x01),
                Op::Data(0x2C),
                Op::Command(0x2B),
                Op::Data(0x00),
                Op::Data(0x07),
                Op::Data(0x00),
                Op::Data(0x07),
                Op::Command(0x2C),
                Op::Data(1),
                Op::Data(2),
                Op::Data(3),
                Op::Deselect,
            ]
        );
    }

    fn pixel_bytes(ops: &[Op]) -> Vec<u8> {
        let start = ops
            .iter()
            .position(|op| *op == Op::Command(0x2C))
            .unwrap();
        ops[start + 1..]
            .iter()
            .filter_map(|op| match op {
                Op::Data(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn clear_portrait_fills_the_full_canvas() {
        let mut lcd = display();
        lcd.clear(Rgb::new(9, 8, 7), Orientation::Portrait).unwrap();
        let ops = lcd.release().ops;

        assert_eq!(windows(&ops), vec![(0, 0, 240, 320)]);
        let bytes = pixel_bytes(&ops);
        assert_eq!(bytes.len(), 240 * 320 * 3);
        assert!(bytes.chunks(3).all(|px| px == [9, 8, 7]));
    }

    #[test]
    fn clear_landscape_swaps_the_canvas() {
        let mut lcd = display();
        lcd.clear(Rgb::BLUE, Orientation::Landscape).unwrap();
        let ops = lcd.release().ops;

        assert_eq!(windows(&ops), vec![(0, 0, 320, 240)]);
        assert_eq!(pixel_bytes(&ops).len(), 320 * 240 * 3);
    }

    #[test]
    fn fill_rect_streams_span_times_span_pixels() {
        let mut lcd = display();
        lcd.fill_rect(10, 10, 20, 20, Rgb::WHITE).unwrap();
        let ops = lcd.release().ops;

        assert_eq!(windows(&ops), vec![(10, 10, 20, 20)]);
        assert_eq!(pixel_bytes(&ops).len(), 10 * 10 * 3);
    }

    #[test]
    fn every_operation_is_chip_select_bracketed() {
        let mut lcd = display();
        lcd.draw_pixel(0, 0, Rgb::BLACK).unwrap();
        lcd.fill_rect(0, 0, 2, 2, Rgb::BLACK).unwrap();
        lcd.write_register(Command::DisplayOn, &[]).unwrap();
        let ops = lcd.release().ops;

        let selects = ops.iter().filter(|op| **op == Op::Select).count();
        let deselects = ops.iter().filter(|op| **op == Op::Deselect).count();
        assert_eq!(selects, 3);
        assert_eq!(deselects, 3);
        // No byte leaves the bus outside a select/deselect bracket.
        let mut depth = 0;
        for op in &ops {
            match op {
                Op::Select => depth += 1,
                Op::Deselect => depth -= 1,
                _ => assert!(depth > 0),
            }
        }
    }

    #[test]
    fn read_register_inserts_a_dummy_cycle() {
        let mut iface = RecordingInterface::new();
        iface.read_queue = vec![0xAA, 0x12, 0x34];
        let mut lcd = Ili9341::new(iface);
        let mut reply = [0u8; 2];
        lcd.read_register(Command::ReadDisplayId, &mut reply).unwrap();
        // First byte clocked back is the dummy; the reply starts after it.
        assert_eq!(reply, [0x12, 0x34]);
        let ops = lcd.release().ops;
        assert_eq!(ops[1], Op::Command(0x04));
        assert_eq!(ops[2..5], [Op::Read, Op::Read, Op::Read]);
    }
}
