//! Color values.

/// One display pixel: red, green and blue, one byte per channel.
///
/// The panel is configured for 18-bit pixels and takes each channel as its
/// own byte on the wire, so 8 bits per channel is the full usable width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// All channels off.
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    /// All channels full on.
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    /// Full red.
    pub const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    /// Full green.
    pub const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
    /// Full blue.
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);

    /// Construct a color from its channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}
