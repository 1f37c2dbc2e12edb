//! Dither overlays for pressed and hovered widgets.
//!
//! A sparse checkerboard keeps the widget fill visible underneath, so a
//! hovered button reads as "lit" without changing its color.

use egui::{Color32, Painter, Pos2, Rect, Vec2};

/// Draw a checkerboard of 1px dots over `rect`.
/// `density` is the dot spacing: 1 = every other pixel, higher = sparser.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let step = density.max(1) as i32;

    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x as i32;
    let y1 = rect.max.y as i32;

    let mut y = y0;
    while y < y1 {
        let row = (y - y0) / step;
        let mut x = x0 + if row % 2 == 0 { 0 } else { step };
        while x < x1 {
            painter.rect_filled(
                Rect::from_min_size(Pos2::new(x as f32, y as f32), Vec2::splat(1.0)),
                0.0,
                color,
            );
            x += step * 2;
        }
        y += step;
    }
}

/// Light dots for hover.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::from_white_alpha(140), 2);
}

/// Dark dots while the pointer is held down.
pub fn draw_dither_pressed(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::from_black_alpha(120), 1);
}
