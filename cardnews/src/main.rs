//! cardnews - the PE quality incident as an illustrated slideshow
//!
//! Page through the story with the two buttons or the arrow keys.

mod app;

use app::CardNewsApp;
use cardcore::{CardTheme, Preferences};
use cardnews::Story;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    cardcore::logging::init();

    let prefs = Preferences::load_or_default();
    let story = Story::builtin();
    log::info!(
        "starting \"{}\": {} chapters, {} scenes",
        story.title(),
        story.chapter_count(),
        story.total_scenes()
    );

    let title = story.title().to_string();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(prefs.window_size)
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            CardTheme::from_preferences(&prefs).apply(&cc.egui_ctx);
            Box::new(CardNewsApp::new(story, &prefs))
        }),
    )
}
