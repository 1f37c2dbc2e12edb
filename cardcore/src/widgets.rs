//! Custom widgets: navigation buttons, the story card and the progress bar

use crate::dither;
use crate::theme::CardColors;
use egui::{Response, Rounding, Sense, Shape, Stroke, TextStyle, Ui, Widget};

const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_ROUNDING: f32 = 5.0;
const CARD_ROUNDING: f32 = 15.0;

/// A full-width green button. Disabled buttons are muted and ignore clicks.
pub struct NavButton<'a> {
    text: &'a str,
    enabled: bool,
}

impl<'a> NavButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, enabled: true }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl<'a> Widget for NavButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), BUTTON_HEIGHT), sense);

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let fill = if self.enabled { CardColors::ACCENT } else { CardColors::ACCENT_MUTED };
            painter.rect_filled(rect, BUTTON_ROUNDING, fill);

            if self.enabled {
                let inner = rect.shrink(BUTTON_ROUNDING);
                if response.is_pointer_button_down_on() {
                    dither::draw_dither_pressed(painter, inner);
                } else if response.hovered() {
                    dither::draw_dither_hover(painter, inner);
                }
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                TextStyle::Button.resolve(ui.style()),
                CardColors::WHITE,
            );
        }

        response
    }
}

/// Horizontal bar filled to `fraction` (clamped to `0..=1`).
pub struct ProgressBar {
    fraction: f32,
    height: f32,
}

impl ProgressBar {
    pub fn new(fraction: f32) -> Self {
        Self { fraction: fraction.clamp(0.0, 1.0), height: 10.0 }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

impl Widget for ProgressBar {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), self.height), Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let rounding = Rounding::same(self.height / 2.0);
            painter.rect_filled(rect, rounding, CardColors::TRACK);

            if self.fraction > 0.0 {
                let mut filled = rect;
                filled.set_width(rect.width() * self.fraction);
                painter.rect_filled(filled, rounding, CardColors::ACCENT);
            }
        }

        response
    }
}

/// White rounded card with a soft drop shadow around `add_contents`.
pub fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    // Reserve a slot below the card so the shadow is painted first.
    let shadow_slot = ui.painter().add(Shape::Noop);

    let inner = egui::Frame::none()
        .fill(CardColors::WHITE)
        .rounding(CARD_ROUNDING)
        .stroke(Stroke::new(1.0, CardColors::BORDER))
        .inner_margin(egui::Margin::same(20.0))
        .outer_margin(egui::Margin::symmetric(0.0, 20.0))
        .show(ui, add_contents);

    let shadow = inner.response.rect.shrink2(egui::vec2(0.0, 20.0)).translate(egui::vec2(0.0, 4.0));
    ui.painter().set(shadow_slot, Shape::rect_filled(shadow.expand(2.0), CARD_ROUNDING, CardColors::SHADOW));

    inner.inner
}

/// Status bar: white bg, thin top border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(CardColors::WHITE)
        .stroke(Stroke::new(1.0, CardColors::BORDER))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.small(text);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_clamps_fraction() {
        let bar = ProgressBar::new(1.5).height(12.0);
        assert_eq!(bar.fraction, 1.0);
        assert_eq!(bar.height, 12.0);
        assert_eq!(ProgressBar::new(-0.2).fraction, 0.0);
    }
}
