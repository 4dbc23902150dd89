//! UI rendering for the Flappy Bird game.

use super::big_text::BigText;
use super::pixel_canvas::{fit_canvas, scale_image, PixelCanvas};
use crate::assets::Assets;
use crate::constants::PIPE_WIDTH;
use crate::game::{GameState, Phase, Pipe, PlayArea};
use image::imageops;
use image::RgbaImage;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

const SCORE_COLOR: Color = Color::Rgb(255, 255, 255);
const TITLE_COLOR: Color = Color::Rgb(255, 100, 100);
const PROMPT_COLOR: Color = Color::Rgb(255, 255, 255);

const START_PROMPT: &str = "Tap or press SPACE to start";
const GAME_OVER_TITLE: &str = "GAME OVER";
const RESTART_PROMPT: &str = "Tap or SPACE to Restart";

/// Sprites scaled for one canvas size.
struct ScaledSprites {
    canvas: (u32, u32),
    background: RgbaImage,
    bird: RgbaImage,
}

/// Draws the game each frame. Holds the decoded sprites and a cache of
/// the ones whose scaled size only depends on the terminal size.
pub struct FlappyRenderer {
    assets: Assets,
    /// Pipe sprite flipped upside down, for the top segment.
    pipe_flipped: RgbaImage,
    scaled: Option<ScaledSprites>,
}

impl FlappyRenderer {
    pub fn new(assets: Assets) -> Self {
        let pipe_flipped = imageops::flip_vertical(&assets.pipe);
        Self {
            assets,
            pipe_flipped,
            scaled: None,
        }
    }

    /// Render the full scene. Reads the game state only.
    pub fn render(&mut self, frame: &mut Frame, game: &GameState) {
        let area = frame.size();
        frame.render_widget(Clear, area);

        let cells = fit_canvas(area, game.area);
        if cells.width == 0 || cells.height == 0 {
            return;
        }

        let canvas = self.paint(cells, game);
        frame.render_widget(&canvas, cells);

        render_score(frame, cells, game.score);
        match game.phase {
            Phase::Idle => render_start_prompt(frame, cells),
            Phase::GameOver => render_game_over(frame, cells),
            Phase::Running => {}
        }
    }

    /// Background, pipes and bird, back to front.
    fn paint(&mut self, cells: Rect, game: &GameState) -> PixelCanvas {
        let mut canvas = PixelCanvas::new(cells, game.area);
        self.refresh_scaled(&canvas, game);
        let Some(sprites) = self.scaled.as_ref() else {
            return canvas;
        };
        canvas.blit(&sprites.background, 0, 0);

        for pipe in &game.pipes {
            draw_pipe(&mut canvas, &self.assets.pipe, &self.pipe_flipped, pipe, game.area);
        }

        let bird_x = canvas.to_px_x(game.bird.x);
        let bird_y = canvas.to_px_y(game.bird.y);
        canvas.blit(&sprites.bird, bird_x, bird_y);
        canvas
    }

    /// Rescale the background and bird when the canvas size changed.
    fn refresh_scaled(&mut self, canvas: &PixelCanvas, game: &GameState) {
        let size = canvas.pixel_size();
        if self.scaled.as_ref().is_some_and(|s| s.canvas == size) {
            return;
        }
        let (bird_w, bird_h) = canvas.to_px_size(game.bird.width, game.bird.height);
        tracing::debug!(width = size.0, height = size.1, "rescaling sprites");
        self.scaled = Some(ScaledSprites {
            canvas: size,
            background: scale_image(&self.assets.background, size.0, size.1),
            bird: scale_image(&self.assets.bird, bird_w.max(1), bird_h.max(1)),
        });
    }
}

/// Top segment (flipped sprite) from the area top to the gap, bottom
/// segment from the end of the gap to the ground band. Each is scaled
/// on its own.
fn draw_pipe(
    canvas: &mut PixelCanvas,
    sprite: &RgbaImage,
    flipped: &RgbaImage,
    pipe: &Pipe,
    area: PlayArea,
) {
    let top = pipe.top_rect();
    canvas.draw_sprite(flipped, top.left, top.top, PIPE_WIDTH, top.bottom - top.top);

    let bottom = pipe.bottom_rect(area);
    canvas.draw_sprite(
        sprite,
        bottom.left,
        bottom.top,
        PIPE_WIDTH,
        bottom.bottom - bottom.top,
    );
}

/// Score, centered in large text near the top.
fn render_score(frame: &mut Frame, cells: Rect, score: u32) {
    let text = score.to_string();
    let row = Rect { height: 1, ..cells };
    if !render_big_centered(frame, cells, cells.y + 1, &text, SCORE_COLOR) {
        render_text_line(frame, row, &text, SCORE_COLOR, true);
    }
}

fn render_start_prompt(frame: &mut Frame, cells: Rect) {
    let row = Rect {
        y: cells.y + cells.height / 2,
        height: 1,
        ..cells
    };
    render_text_line(frame, row, START_PROMPT, PROMPT_COLOR, false);
}

fn render_game_over(frame: &mut Frame, cells: Rect) {
    let mid = cells.y + cells.height / 2;
    let title_y = mid.saturating_sub(6).max(cells.y);
    if !render_big_centered(frame, cells, title_y, GAME_OVER_TITLE, TITLE_COLOR) {
        let row = Rect {
            y: mid.saturating_sub(2).max(cells.y),
            height: 1,
            ..cells
        };
        render_text_line(frame, row, GAME_OVER_TITLE, TITLE_COLOR, true);
    }

    let row = Rect {
        y: (mid + 1).min(cells.bottom().saturating_sub(1)),
        height: 1,
        ..cells
    };
    render_text_line(frame, row, RESTART_PROMPT, PROMPT_COLOR, false);
}

/// Draw block-glyph text centered horizontally at `y`. Returns false when
/// it doesn't fit, so the caller can fall back to plain text.
fn render_big_centered(frame: &mut Frame, cells: Rect, y: u16, text: &str, color: Color) -> bool {
    let Some(big) = BigText::fit(text, color, cells.width) else {
        return false;
    };
    if y + big.height() > cells.bottom() {
        return false;
    }
    let width = big.width();
    let target = Rect::new(
        cells.x + (cells.width - width) / 2,
        y,
        width,
        big.height(),
    );
    frame.render_widget(big, target);
    true
}

/// Plain text centered in `row`. Only the cells under the text are
/// touched, so the canvas around it keeps its colors.
fn render_text_line(frame: &mut Frame, row: Rect, text: &str, color: Color, bold: bool) {
    let mut style = Style::default().fg(color);
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    let width = (text.chars().count() as u16).min(row.width);
    let target = Rect {
        x: row.x + (row.width - width) / 2,
        width,
        height: 1,
        ..row
    };
    let paragraph = Paragraph::new(Line::from(text))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, target);
}
