//! Recording test doubles shared by the driver tests.

use crate::interface::DisplayInterface;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use std::vec::Vec;

/// One observable action on the command/data channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Select,
    Deselect,
    Command(u8),
    Data(u8),
    Read,
    Reset,
}

/// Channel double that records the byte stream instead of driving hardware.
pub struct RecordingInterface {
    pub ops: Vec<Op>,
    /// Bytes handed back by `read_data`, front first; empty yields 0x00.
    pub read_queue: Vec<u8>,
}

impl RecordingInterface {
    pub fn new() -> Self {
        RecordingInterface {
            ops: Vec::new(),
            read_queue: Vec::new(),
        }
    }
}

impl DisplayInterface for RecordingInterface {
    type Error = Infallible;

    fn select(&mut self) -> Result<(), Infallible> {
        self.ops.push(Op::Select);
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Infallible> {
        self.ops.push(Op::Deselect);
        Ok(())
    }

    fn write_command(&mut self, command: u8) -> Result<(), Infallible> {
        self.ops.push(Op::Command(command));
        Ok(())
    }

    fn write_data(&mut self, byte: u8) -> Result<(), Infallible> {
        self.ops.push(Op::Data(byte));
        Ok(())
    }

    fn read_data(&mut self) -> Result<u8, Infallible> {
        self.ops.push(Op::Read);
        if self.read_queue.is_empty() {
            Ok(0x00)
        } else {
            Ok(self.read_queue.remove(0))
        }
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Infallible> {
        self.ops.push(Op::Reset);
        Ok(())
    }
}

/// Delay double for host tests.
pub struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Decode every window programmed in `ops` as `(x1, y1, x2, y2)`.
///
/// Expects the driver's fixed 2A/2B/2C pattern; anything else panics the
/// test.
pub fn windows(ops: &[Op]) -> Vec<(u16, u16, u16, u16)> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < ops.len() {
        if ops[i] == Op::Command(0x2A) {
            let byte = |k: usize| match ops[i + k] {
                Op::Data(b) => b as u16,
                other => panic!("expected data byte, got {:?}", other),
            };
            let x1 = byte(1) << 8 | byte(2);
            let x2 = byte(3) << 8 | byte(4);
            assert_eq!(ops[i + 5], Op::Command(0x2B));
            let y1 = byte(6) << 8 | byte(7);
            let y2 = byte(8) << 8 | byte(9);
            assert_eq!(ops[i + 10], Op::Command(0x2C));
            out.push((x1, y1, x2, y2));
            i += 11;
        } else {
            i += 1;
        }
    }
    out
}
