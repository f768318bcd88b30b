//! ILI9341 command bytes and register fields.

use bitflags::bitflags;

/// Controller commands exercised by this driver. Discriminants are the
/// opcodes on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Read Display Identification (04h)
    ReadDisplayId = 0x04,
    /// Read Display Status (09h)
    ReadDisplayStatus = 0x09,
    /// Exit sleep mode (11h)
    SleepOut = 0x11,
    /// Turn the panel output on (29h)
    DisplayOn = 0x29,
    /// Column address range of the write window (2Ah)
    ColumnAddressSet = 0x2A,
    /// Row address range of the write window (2Bh)
    PageAddressSet = 0x2B,
    /// Begin a frame-memory write at the window origin (2Ch)
    MemoryWrite = 0x2C,
    /// Memory access control: scan order and subpixel order (36h)
    MemoryAccessControl = 0x36,
    /// Pixel format set (3Ah)
    PixelFormat = 0x3A,
    /// Frame rate control, normal mode (B1h)
    FrameRateControl = 0xB1,
    /// Display function control (B6h)
    DisplayFunction = 0xB6,
    /// Power control 1: GVDD level (C0h)
    PowerControl1 = 0xC0,
    /// Power control 2: step-up factor (C1h)
    PowerControl2 = 0xC1,
    /// VCOM control 1 (C5h)
    VcomControl1 = 0xC5,
    /// VCOM control 2 (C7h)
    VcomControl2 = 0xC7,
    /// Power control A, vendor extension (CBh)
    PowerControlA = 0xCB,
    /// Power control B, vendor extension (CFh)
    PowerControlB = 0xCF,
    /// Driver timing control A (E8h)
    DriverTimingA = 0xE8,
    /// Driver timing control B (EAh)
    DriverTimingB = 0xEA,
    /// Power-on sequence control (EDh)
    PowerOnSequence = 0xED,
    /// Pump ratio control (F7h)
    PumpRatio = 0xF7,
}

bitflags! {
    /// Fields of the Memory Access Control register (36h).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Madctl: u8 {
        /// Row address order
        const MY = 0x80;
        /// Column address order
        const MX = 0x40;
        /// Row/column exchange (the landscape flip)
        const MV = 0x20;
        /// Vertical refresh order
        const ML = 0x10;
        /// BGR subpixel order
        const BGR = 0x08;
        /// Horizontal refresh order
        const MH = 0x04;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_flip_byte_matches_init_sequence() {
        assert_eq!((Madctl::MV | Madctl::BGR).bits(), 0x28);
    }

    #[test]
    fn window_opcodes() {
        assert_eq!(Command::ColumnAddressSet as u8, 0x2A);
        assert_eq!(Command::PageAddressSet as u8, 0x2B);
        assert_eq!(Command::MemoryWrite as u8, 0x2C);
    }
}
