//! RGBA framebuffer presented as half-block terminal cells.
//!
//! One terminal cell holds two vertically stacked pixels: the upper one
//! as the foreground of `▀`, the lower one as the background.

use crate::game::PlayArea;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Largest cell rectangle inside `area` that keeps the play area's aspect
/// ratio (with square half-block pixels), centered.
pub fn fit_canvas(area: Rect, play: PlayArea) -> Rect {
    if area.width == 0 || area.height == 0 || play.width == 0 || play.height == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }

    let max_width = area.width as u32;
    let mut height_px = area.height as u32 * 2;
    let mut width = (height_px * play.width + play.height / 2) / play.height;
    if width > max_width {
        width = max_width;
        height_px = (width * play.height + play.width / 2) / play.width;
    }
    let width = width.max(1) as u16;
    let rows = height_px.div_ceil(2).max(1) as u16;

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - rows) / 2,
        width,
        rows,
    )
}

/// Framebuffer at terminal resolution with a world-to-pixel mapping.
pub struct PixelCanvas {
    image: RgbaImage,
    scale_x: f64,
    scale_y: f64,
}

impl PixelCanvas {
    /// Canvas for `cells`, mapping the whole play area onto it.
    pub fn new(cells: Rect, play: PlayArea) -> Self {
        let width = cells.width as u32;
        let height = cells.height as u32 * 2;
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])),
            scale_x: width as f64 / play.width.max(1) as f64,
            scale_y: height as f64 / play.height.max(1) as f64,
        }
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// World x to canvas pixel x.
    pub fn to_px_x(&self, x: f64) -> i64 {
        (x * self.scale_x).round() as i64
    }

    /// World y to canvas pixel y.
    pub fn to_px_y(&self, y: f64) -> i64 {
        (y * self.scale_y).round() as i64
    }

    /// World size to canvas size, never below one pixel for a non-empty
    /// extent.
    pub fn to_px_size(&self, width: f64, height: f64) -> (u32, u32) {
        let px = |len: f64, scale: f64| {
            if len <= 0.0 {
                0
            } else {
                ((len * scale).round() as u32).max(1)
            }
        };
        (px(width, self.scale_x), px(height, self.scale_y))
    }

    /// Alpha-blend an already scaled image at a pixel offset. Parts outside
    /// the canvas are clipped.
    pub fn blit(&mut self, img: &RgbaImage, px: i64, py: i64) {
        imageops::overlay(&mut self.image, img, px, py);
    }

    /// Scale `sprite` to a world-space rectangle and blend it in.
    pub fn draw_sprite(&mut self, sprite: &RgbaImage, x: f64, y: f64, width: f64, height: f64) {
        let (w, h) = self.to_px_size(width, height);
        if w == 0 || h == 0 {
            return;
        }
        let scaled = scale_image(sprite, w, h);
        self.blit(&scaled, self.to_px_x(x), self.to_px_y(y));
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }
}

/// Resize with smoothing. Returns the input unchanged when it already
/// has the requested size.
pub fn scale_image(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    imageops::resize(img, width, height, FilterType::Triangle)
}

fn to_color(pixel: Rgba<u8>) -> Color {
    let [r, g, b, _] = pixel.0;
    Color::Rgb(r, g, b)
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.image.dimensions();
        for row in 0..area.height {
            let upper_y = row as u32 * 2;
            if upper_y >= height {
                break;
            }
            for col in 0..area.width.min(width as u16) {
                let x = col as u32;
                let upper = self.pixel(x, upper_y);
                let lower = if upper_y + 1 < height {
                    self.pixel(x, upper_y + 1)
                } else {
                    upper
                };
                buf.get_mut(area.x + col, area.y + row)
                    .set_char('▀')
                    .set_fg(to_color(upper))
                    .set_bg(to_color(lower));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_canvas_tall_terminal_limits_width() {
        // 480x800 is 0.6 wide per tall pixel: 40 rows -> 80px high -> 48 wide
        let cells = fit_canvas(Rect::new(0, 0, 100, 40), PlayArea::MAX);
        assert_eq!(cells.width, 48);
        assert_eq!(cells.height, 40);
        assert_eq!(cells.x, 26);
        assert_eq!(cells.y, 0);
    }

    #[test]
    fn test_fit_canvas_narrow_terminal_limits_height() {
        let cells = fit_canvas(Rect::new(0, 0, 30, 40), PlayArea::MAX);
        assert_eq!(cells.width, 30);
        // 30 wide -> 50px high -> 25 rows
        assert_eq!(cells.height, 25);
        assert_eq!(cells.y, 7);
    }

    #[test]
    fn test_fit_canvas_empty_area() {
        let cells = fit_canvas(Rect::new(3, 4, 0, 10), PlayArea::MAX);
        assert_eq!(cells.width, 0);
        assert_eq!(cells.height, 0);
    }

    #[test]
    fn test_world_to_pixel_mapping() {
        let canvas = PixelCanvas::new(Rect::new(0, 0, 48, 40), PlayArea::MAX);
        assert_eq!(canvas.pixel_size(), (48, 80));
        assert_eq!(canvas.to_px_x(240.0), 24);
        assert_eq!(canvas.to_px_y(400.0), 40);
        assert_eq!(canvas.to_px_size(70.0, 160.0), (7, 16));
        assert_eq!(canvas.to_px_size(1.0, 0.0), (1, 0));
    }

    #[test]
    fn test_draw_sprite_clips_offscreen() {
        let mut canvas = PixelCanvas::new(Rect::new(0, 0, 48, 40), PlayArea::MAX);
        let red = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        canvas.draw_sprite(&red, -40.0, 0.0, 70.0, 100.0);
        assert_eq!(canvas.pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(3, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_transparent_sprite_keeps_background() {
        let mut canvas = PixelCanvas::new(Rect::new(0, 0, 10, 10), PlayArea::MAX);
        let clear = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0]));
        canvas.blit(&clear, 0, 0);
        assert_eq!(canvas.pixel(0, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_render_half_blocks() {
        let mut canvas = PixelCanvas::new(Rect::new(0, 0, 1, 1), PlayArea::MAX);
        let mut top = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 255]));
        canvas.blit(&top, 0, 0);
        top.put_pixel(0, 0, Rgba([40, 50, 60, 255]));
        canvas.blit(&top, 0, 1);

        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        (&canvas).render(area, &mut buf);
        let cell = buf.get(0, 0);
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(10, 20, 30));
        assert_eq!(cell.bg, Color::Rgb(40, 50, 60));
    }
}
