pub mod score;

use ratatui::prelude::*;

pub const GOLD: Color = Color::Rgb(255, 220, 80);
pub const ACCENT: Color = Color::Rgb(80, 200, 255);
pub const DIM: Color = Color::Rgb(100, 100, 130);
pub const BACKGROUND: Color = Color::Rgb(15, 15, 25);

/// A `w` x `h` box in the middle of `area`, shrunk to fit.
pub fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(4));
    let h = h.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
