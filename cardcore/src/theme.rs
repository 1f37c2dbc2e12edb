//! Card news theme
//!
//! Light page, white rounded cards, green buttons, blue chapter titles.
//! Story text is Korean, so a font with Hangul coverage is installed as a
//! fallback behind egui's default fonts.

use crate::storage::Preferences;
use egui::{Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::path::{Path, PathBuf};

/// The palette used by every panel and widget.
pub struct CardColors;

impl CardColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const PAGE: Color32 = Color32::from_rgb(246, 247, 249);
    pub const TEXT: Color32 = Color32::from_rgb(38, 39, 48);
    pub const ACCENT: Color32 = Color32::from_rgb(76, 175, 80);
    pub const ACCENT_MUTED: Color32 = Color32::from_rgb(190, 222, 192);
    pub const CHAPTER_TITLE: Color32 = Color32::from_rgb(30, 136, 229);
    pub const TRACK: Color32 = Color32::from_rgb(224, 226, 230);
    pub const BORDER: Color32 = Color32::from_rgb(228, 230, 235);
    pub const SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 26);
}

/// System fonts known to cover Hangul, probed in order.
const HANGUL_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

const HANGUL_FONT_KEY: &str = "Hangul";

/// Theme configuration for the viewer
pub struct CardTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_button: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
    pub font_path: Option<PathBuf>,
}

impl CardTheme {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            font_size_body: prefs.body_font_size,
            font_size_heading: prefs.heading_font_size,
            font_size_button: 16.0,
            font_size_small: 12.0,
            window_padding: 12.0,
            item_spacing: 8.0,
            font_path: prefs.font_path.clone(),
        }
    }

    /// Apply fonts and visuals to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut fonts = FontDefinitions::default();
        match find_hangul_font(self.font_path.as_deref()) {
            Some((path, bytes)) => {
                log::info!("using {} for Hangul text", path.display());
                fonts.font_data.insert(HANGUL_FONT_KEY.to_owned(), FontData::from_owned(bytes));
                for family in [FontFamily::Proportional, FontFamily::Monospace] {
                    fonts.families.entry(family).or_default().push(HANGUL_FONT_KEY.to_owned());
                }
            }
            None => log::warn!("no Hangul font found; set font_path in preferences.json"),
        }
        ctx.set_fonts(fonts);

        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.override_text_color = Some(CardColors::TEXT);
        visuals.window_fill = CardColors::WHITE;
        visuals.panel_fill = CardColors::PAGE;
        visuals.window_rounding = Rounding::same(8.0);
        visuals.menu_rounding = Rounding::same(5.0);
        visuals.window_stroke = Stroke::new(1.0, CardColors::BORDER);
        visuals.selection.bg_fill = CardColors::ACCENT_MUTED;
        visuals.selection.stroke = Stroke::new(1.0, CardColors::ACCENT);
        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);

        ctx.set_style(style);
    }
}

/// First readable font among `preferred` and the known system locations.
fn find_hangul_font(preferred: Option<&Path>) -> Option<(PathBuf, Vec<u8>)> {
    let candidates = preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(HANGUL_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        match std::fs::read(&path) {
            Ok(bytes) => return Some((path, bytes)),
            Err(e) => log::debug!("font {} unavailable: {}", path.display(), e),
        }
    }
    None
}

/// Menu bar styling helper
pub fn menu_bar(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(CardColors::WHITE)
        .stroke(Stroke::new(1.0, CardColors::BORDER))
        .inner_margin(egui::Margin::symmetric(6.0, 3.0))
        .show(ui, |ui| {
            ui.horizontal(add_contents);
        });
}

/// Drop Tab focus cycling and Cmd+/Cmd- zoom so arrow keys and space stay
/// with the viewer. Call at the start of `update()`.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|e| match e {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. }
                if modifiers.command && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals) => false,
            _ => true,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_font_is_tried_first() {
        let path = std::env::temp_dir().join(format!("cardcore-font-{}.ttf", std::process::id()));
        std::fs::write(&path, b"not really a font").unwrap();

        let (found, bytes) = find_hangul_font(Some(&path)).unwrap();
        assert_eq!(found, path);
        assert_eq!(bytes, b"not really a font");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_theme_follows_preferences() {
        let prefs = Preferences { body_font_size: 17.0, heading_font_size: 30.0, ..Preferences::default() };
        let theme = CardTheme::from_preferences(&prefs);
        assert_eq!(theme.font_size_body, 17.0);
        assert_eq!(theme.font_size_heading, 30.0);
        assert!(theme.font_path.is_none());
    }
}
