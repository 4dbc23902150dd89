//! Large block-glyph text for the score and title.
//!
//! Glyphs are 3×5 bitmaps. Each lit pixel becomes one or more `█` cells;
//! unlit pixels leave the buffer untouched so the scene shows through.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const GLYPH_WIDTH: u16 = 3;
const GLYPH_HEIGHT: u16 = 5;
const GLYPH_SPACING: u16 = 1;

fn glyph(c: char) -> Option<[&'static str; 5]> {
    let rows = match c {
        '0' => ["###", "#.#", "#.#", "#.#", "###"],
        '1' => [".#.", "##.", ".#.", ".#.", "###"],
        '2' => ["###", "..#", "###", "#..", "###"],
        '3' => ["###", "..#", ".##", "..#", "###"],
        '4' => ["#.#", "#.#", "###", "..#", "..#"],
        '5' => ["###", "#..", "###", "..#", "###"],
        '6' => ["###", "#..", "###", "#.#", "###"],
        '7' => ["###", "..#", ".#.", ".#.", ".#."],
        '8' => ["###", "#.#", "###", "#.#", "###"],
        '9' => ["###", "#.#", "###", "..#", "###"],
        'A' => [".#.", "#.#", "###", "#.#", "#.#"],
        'E' => ["###", "#..", "##.", "#..", "###"],
        'G' => ["###", "#..", "#.#", "#.#", "###"],
        'M' => ["#.#", "###", "###", "#.#", "#.#"],
        'O' => ["###", "#.#", "#.#", "#.#", "###"],
        'R' => ["##.", "#.#", "##.", "#.#", "#.#"],
        'V' => ["#.#", "#.#", "#.#", "#.#", ".#."],
        ' ' => ["...", "...", "...", "...", "..."],
        _ => return None,
    };
    Some(rows)
}

/// A string drawn with the block font at a horizontal scale.
pub struct BigText<'a> {
    text: &'a str,
    color: Color,
    scale: u16,
}

impl<'a> BigText<'a> {
    /// Largest scale (2 then 1) at which `text` fits `max_width` columns.
    /// `None` when a character has no glyph or nothing fits.
    pub fn fit(text: &'a str, color: Color, max_width: u16) -> Option<Self> {
        if !text.chars().all(|c| glyph(c).is_some()) {
            return None;
        }
        [2, 1]
            .into_iter()
            .map(|scale| Self { text, color, scale })
            .find(|big| big.width() <= max_width)
    }

    /// Width in cells.
    pub fn width(&self) -> u16 {
        let count = self.text.chars().count() as u16;
        if count == 0 {
            return 0;
        }
        count * GLYPH_WIDTH * self.scale + (count - 1) * GLYPH_SPACING * self.scale
    }

    pub fn height(&self) -> u16 {
        GLYPH_HEIGHT
    }
}

impl Widget for BigText<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let advance = (GLYPH_WIDTH + GLYPH_SPACING) * self.scale;
        for (i, rows) in self.text.chars().filter_map(glyph).enumerate() {
            let origin_x = area.x + i as u16 * advance;
            for (dy, row) in rows.iter().enumerate() {
                let y = area.y + dy as u16;
                if y >= area.bottom() {
                    break;
                }
                for (dx, pixel) in row.chars().enumerate() {
                    if pixel != '#' {
                        continue;
                    }
                    for s in 0..self.scale {
                        let x = origin_x + dx as u16 * self.scale + s;
                        if x < area.right() {
                            buf.get_mut(x, y).set_char('█').set_fg(self.color);
                        }
                    }
                }
            }
        }
    }
}
