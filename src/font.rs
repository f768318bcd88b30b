//! Glyph rasterization and fixed-pitch string layout.
//!
//! Glyphs are column-major bitmaps: each table entry is one vertical column
//! of the glyph, bit `n` set meaning the pixel in row `n` is foreground.
//! Rendering issues one pixel write per set bit, re-addressing the panel
//! each time; cheap and simple, which is all a status display needs.

use core::marker::PhantomData;

use crate::color::Rgb;
use crate::display::Ili9341;
use crate::fonts::{FONT_20X28, FONT_5X7};
use crate::interface::DisplayInterface;

/// A column-major bitmap font covering all 256 character codes.
///
/// The character code is the table index, always. Lookup is total: any
/// `u8` resolves to a glyph (possibly blank), so rendering cannot fail on
/// the character itself.
pub trait BitmapFont {
    /// Glyph width in columns.
    const COLUMNS: u16;
    /// Glyph height in rows.
    const ROWS: u16;
    /// Cursor advance per glyph in pixels.
    const ADVANCE: u16;

    /// Column `index` of the glyph for `code`.
    fn column(code: u8, index: u16) -> u32;
}

/// The 5x7 system font; advance 6, five columns plus one blank.
pub struct Font5x7;

impl BitmapFont for Font5x7 {
    const COLUMNS: u16 = 5;
    const ROWS: u16 = 7;
    const ADVANCE: u16 = 6;

    fn column(code: u8, index: u16) -> u32 {
        FONT_5X7[code as usize][index as usize] as u32
    }
}

/// The 20x28 large font.
pub struct Font20x28;

impl BitmapFont for Font20x28 {
    const COLUMNS: u16 = 20;
    const ROWS: u16 = 28;
    const ADVANCE: u16 = 10;

    fn column(code: u8, index: u16) -> u32 {
        FONT_20X28[code as usize][index as usize]
    }
}

/// Iterator over the set pixels of one glyph, column-major, yielding
/// `(column, row)` offsets from the glyph origin.
pub struct GlyphPixels<F> {
    code: u8,
    column: u16,
    row: u16,
    _font: PhantomData<F>,
}

impl<F: BitmapFont> GlyphPixels<F> {
    /// Set pixels of the glyph for `code`.
    pub fn new(code: u8) -> Self {
        GlyphPixels {
            code,
            column: 0,
            row: 0,
            _font: PhantomData,
        }
    }
}

impl<F: BitmapFont> Iterator for GlyphPixels<F> {
    type Item = (u16, u16);

    fn next(&mut self) -> Option<(u16, u16)> {
        while self.column < F::COLUMNS {
            let bits = F::column(self.code, self.column);
            while self.row < F::ROWS {
                let row = self.row;
                self.row += 1;
                if bits & (1 << row) != 0 {
                    return Some((self.column, row));
                }
            }
            self.row = 0;
            self.column += 1;
        }
        None
    }
}

impl<IF: DisplayInterface> Ili9341<IF> {
    /// Rasterize one 5x7 glyph with its origin at `(x, y)`.
    pub fn draw_char(&mut self, x: u16, y: u16, code: u8, color: Rgb) -> Result<(), IF::Error> {
        self.draw_glyph::<Font5x7>(x, y, code, color)
    }

    /// Rasterize one 20x28 glyph with its origin at `(x, y)`.
    pub fn draw_char_large(
        &mut self,
        x: u16,
        y: u16,
        code: u8,
        color: Rgb,
    ) -> Result<(), IF::Error> {
        self.draw_glyph::<Font20x28>(x, y, code, color)
    }

    /// Draw `text` left to right in the 5x7 font starting at `(x, y)`.
    ///
    /// The cursor advances 6 pixels per character; `y` is constant for the
    /// whole string and there is no wrapping. Returns the cursor x after
    /// the last advance.
    pub fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &[u8],
        color: Rgb,
    ) -> Result<u16, IF::Error> {
        self.draw_text::<Font5x7>(x, y, text, color)
    }

    /// Draw `text` in the large font, advancing 10 pixels per character.
    pub fn draw_string_large(
        &mut self,
        x: u16,
        y: u16,
        text: &[u8],
        color: Rgb,
    ) -> Result<u16, IF::Error> {
        self.draw_text::<Font20x28>(x, y, text, color)
    }

    fn draw_glyph<F: BitmapFont>(
        &mut self,
        x: u16,
        y: u16,
        code: u8,
        color: Rgb,
    ) -> Result<(), IF::Error> {
        for (column, row) in GlyphPixels::<F>::new(code) {
            self.draw_pixel(x + column, y + row, color)?;
        }
        Ok(())
    }

    fn draw_text<F: BitmapFont>(
        &mut self,
        x: u16,
        y: u16,
        text: &[u8],
        color: Rgb,
    ) -> Result<u16, IF::Error> {
        let mut cursor = x;
        for &code in text {
            self.draw_glyph::<F>(cursor, y, code, color)?;
            cursor += F::ADVANCE;
        }
        Ok(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{windows, Op, RecordingInterface};
    use std::vec;
    use std::vec::Vec;

    fn display() -> Ili9341<RecordingInterface> {
        Ili9341::new(RecordingInterface::new())
    }

    fn narrow_popcount(code: u8) -> usize {
        FONT_5X7[code as usize]
            .iter()
            .map(|col| col.count_ones() as usize)
            .sum()
    }

    fn large_popcount(code: u8) -> usize {
        FONT_20X28[code as usize]
            .iter()
            .map(|col| col.count_ones() as usize)
            .sum()
    }

    /// Reference decoder: set pixels of a narrow glyph drawn at `(x, y)`.
    fn narrow_reference(x: u16, y: u16, code: u8) -> Vec<(u16, u16)> {
        let mut out = Vec::new();
        for (col, &bits) in FONT_5X7[code as usize].iter().enumerate() {
            for row in 0..7u16 {
                if bits & (1 << row) != 0 {
                    out.push((x + col as u16, y + row));
                }
            }
        }
        // The rasterizer scans column-major too, so order matches as well.
        out.sort();
        out
    }

    #[test]
    fn glyph_pixels_decode_the_capital_a_bitmap() {
        // 'A' is {0x7C, 0x12, 0x11, 0x12, 0x7C}: column 0 sets rows 2..=6,
        // column 1 rows 1 and 4, and so on.
        let pixels: Vec<_> = GlyphPixels::<Font5x7>::new(0x41).collect();
        assert_eq!(
            pixels,
            vec![
                (0, 2),
                (0, 3),
                (0, 4),
                (0, 5),
                (0, 6),
                (1, 1),
                (1, 4),
                (2, 0),
                (2, 4),
                (3, 1),
                (3, 4),
                (4, 2),
                (4, 3),
                (4, 4),
                (4, 5),
                (4, 6),
            ]
        );
    }

    #[test]
    fn glyph_pixel_count_matches_popcount_for_every_code() {
        for code in 0..=255u8 {
            assert_eq!(
                GlyphPixels::<Font5x7>::new(code).count(),
                narrow_popcount(code),
                "code {:#04x}",
                code
            );
            assert_eq!(
                GlyphPixels::<Font20x28>::new(code).count(),
                large_popcount(code),
                "code {:#04x}",
                code
            );
        }
    }

    #[test]
    fn draw_char_issues_one_pixel_write_per_set_bit() {
        let mut lcd = display();
        lcd.draw_char(3, 4, 0x41, Rgb::WHITE).unwrap();
        let ops = lcd.release().ops;

        let strokes = ops.iter().filter(|op| **op == Op::Command(0x2C)).count();
        assert_eq!(strokes, narrow_popcount(0x41));

        let drawn: Vec<_> = windows(&ops)
            .into_iter()
            .map(|(x1, y1, x2, y2)| {
                assert_eq!((x1, y1), (x2, y2)); // per-pixel 1x1 windows
                (x1, y1)
            })
            .collect();
        assert_eq!(drawn, narrow_reference(3, 4, 0x41));
    }

    #[test]
    fn draw_string_advances_six_per_character() {
        let mut lcd = display();
        let cursor = lcd.draw_string(5, 5, b"AB", Rgb::BLACK).unwrap();
        assert_eq!(cursor, 5 + 2 * 6);

        let ops = lcd.release().ops;
        let mut expected = narrow_reference(5, 5, b'A');
        expected.extend(narrow_reference(11, 5, b'B'));
        let drawn: Vec<_> = windows(&ops)
            .into_iter()
            .map(|(x1, y1, _, _)| (x1, y1))
            .collect();
        assert_eq!(drawn.len(), expected.len());
        // Glyph order is preserved; within a glyph the scan is column-major.
        assert_eq!(drawn[..narrow_popcount(b'A')], expected[..narrow_popcount(b'A')]);
        // Every 'B' pixel sits at x >= 11 and the same baseline.
        for &(x, y) in &drawn[narrow_popcount(b'A')..] {
            assert!(x >= 11 && x < 11 + 5);
            assert!(y >= 5 && y < 5 + 7);
        }
    }

    #[test]
    fn draw_string_large_advances_ten_per_character() {
        let mut lcd = display();
        let cursor = lcd.draw_string_large(0, 0, b"HI", Rgb::WHITE).unwrap();
        assert_eq!(cursor, 2 * 10);
    }

    #[test]
    fn large_font_selects_the_glyph_by_character_code() {
        // Each character must index its own table entry; a fixed entry for
        // every code would make these counts collide.
        let mut a = display();
        a.draw_char_large(0, 0, b'A', Rgb::WHITE).unwrap();
        let a_strokes = a
            .release()
            .ops
            .iter()
            .filter(|op| **op == Op::Command(0x2C))
            .count();
        assert_eq!(a_strokes, large_popcount(b'A'));

        let mut l = display();
        l.draw_char_large(0, 0, b'L', Rgb::WHITE).unwrap();
        let l_strokes = l
            .release()
            .ops
            .iter()
            .filter(|op| **op == Op::Command(0x2C))
            .count();
        assert_eq!(l_strokes, large_popcount(b'L'));
        assert_ne!(a_strokes, l_strokes);
    }

    #[test]
    fn blank_codes_draw_nothing() {
        let mut lcd = display();
        lcd.draw_char(0, 0, b' ', Rgb::WHITE).unwrap();
        assert!(lcd.release().ops.is_empty());
    }
}
