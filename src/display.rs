//! Display detection.

use crate::game::PlayArea;
use crossterm::terminal;

/// Pick the play area from the terminal's reported pixel size.
///
/// Terminals that do not report pixel dimensions (or report zero) get
/// the full 480×800 area.
pub fn detect_play_area() -> PlayArea {
    let pixels = terminal::window_size()
        .ok()
        .map(|size| (size.width, size.height));
    let area = play_area_for(pixels);
    tracing::info!(?pixels, width = area.width, height = area.height, "play area");
    area
}

/// Play area for a screen of `pixels` (width, height), if known.
pub fn play_area_for(pixels: Option<(u16, u16)>) -> PlayArea {
    match pixels {
        Some((width, height)) if width > 0 && height > 0 => {
            PlayArea::fit_to_screen(width as u32, height as u32)
        }
        _ => PlayArea::MAX,
    }
}
