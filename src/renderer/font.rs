//! Built-in 5x7 bitmap font
//!
//! Each glyph row is 5 bits, most significant bit on the left. Lower case
//! letters share the upper case glyphs.

use glam::Vec2;

use super::shapes::push_rect;
use super::vertex::Vertex;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Glyph width plus one column of spacing
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Text sizes used by the screens, as pixel multiples of the glyph cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Title,
    Normal,
    Small,
}

impl FontSize {
    pub fn scale(&self) -> f32 {
        match self {
            FontSize::Title => 7.0,
            FontSize::Normal => 3.0,
            FontSize::Small => 2.0,
        }
    }

    /// Rendered line height in pixels
    pub fn line_height(&self) -> f32 {
        GLYPH_HEIGHT as f32 * self.scale()
    }
}

/// Width in pixels of `text` rendered at `size`
pub fn text_width(text: &str, size: FontSize) -> f32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0.0;
    }
    (count * GLYPH_ADVANCE - 1) as f32 * size.scale()
}

/// Append quads for `text` with its top-left corner at `origin`
pub fn draw_text(
    vertices: &mut Vec<Vertex>,
    origin: Vec2,
    text: &str,
    size: FontSize,
    color: [f32; 4],
) {
    let s = size.scale();
    let mut cursor_x = origin.x;

    for ch in text.chars() {
        let rows = glyph(ch);
        for (row, bits) in rows.iter().enumerate() {
            // Merge horizontal runs so a solid row is one quad
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if bit_set(*bits, col) {
                    let start = col;
                    while col < GLYPH_WIDTH && bit_set(*bits, col) {
                        col += 1;
                    }
                    push_rect(
                        vertices,
                        Vec2::new(cursor_x + start as f32 * s, origin.y + row as f32 * s),
                        Vec2::new((col - start) as f32 * s, s),
                        color,
                    );
                } else {
                    col += 1;
                }
            }
        }
        cursor_x += GLYPH_ADVANCE as f32 * s;
    }
}

/// Append `text` horizontally centered on `center_x`
pub fn draw_text_centered(
    vertices: &mut Vec<Vertex>,
    center_x: f32,
    y: f32,
    text: &str,
    size: FontSize,
    color: [f32; 4],
) {
    let x = (center_x - text_width(text, size) / 2.0).floor();
    draw_text(vertices, Vec2::new(x, y), text, size, color);
}

#[inline]
fn bit_set(bits: u8, col: u32) -> bool {
    (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1
}

/// Row bitmap for a character
pub fn glyph(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        ' ' => [0; 7],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '\'' => [0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        // Anything else renders as a question mark
        _ => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_lowercase_shares_glyphs() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
        assert_ne!(glyph('A'), glyph('B'));
    }

    #[test]
    fn test_glyphs_fit_cell() {
        for ch in (' '..='~').chain('a'..='z') {
            for row in glyph(ch) {
                assert!(row < (1 << GLYPH_WIDTH), "glyph {ch:?} too wide");
            }
        }
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", FontSize::Small), 0.0);
        assert_eq!(text_width("A", FontSize::Small), 10.0);
        assert_eq!(text_width("AB", FontSize::Normal), 33.0);
    }

    #[test]
    fn test_space_emits_nothing() {
        let mut verts = Vec::new();
        draw_text(&mut verts, Vec2::ZERO, "   ", FontSize::Normal, WHITE);
        assert!(verts.is_empty());
    }

    #[test]
    fn test_text_stays_within_measured_box() {
        let mut verts = Vec::new();
        let text = "Score: 1234";
        let origin = Vec2::new(20.0, 20.0);
        draw_text(&mut verts, origin, text, FontSize::Normal, WHITE);
        assert!(!verts.is_empty());

        let width = text_width(text, FontSize::Normal);
        let height = FontSize::Normal.line_height();
        for v in &verts {
            assert!(v.position[0] >= origin.x && v.position[0] <= origin.x + width);
            assert!(v.position[1] >= origin.y && v.position[1] <= origin.y + height);
        }
    }

    #[test]
    fn test_solid_row_is_one_quad() {
        // 'T' top row is solid, remaining six rows are a single center pixel
        let mut verts = Vec::new();
        draw_text(&mut verts, Vec2::ZERO, "T", FontSize::Small, WHITE);
        assert_eq!(verts.len(), 7 * 6);
    }

    #[test]
    fn test_centered_text() {
        let mut verts = Vec::new();
        draw_text_centered(&mut verts, 400.0, 0.0, "HI", FontSize::Small, WHITE);
        let min_x = verts.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = verts.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!(((min_x + max_x) / 2.0 - 400.0).abs() <= 1.0);
    }
}
