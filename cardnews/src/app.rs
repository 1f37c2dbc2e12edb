//! CardNews - the slideshow window
//! Illustration on the left, the story card on the right, navigation below.

use cardcore::theme::{consume_special_keys, menu_bar, CardColors};
use cardcore::widgets::{card, status_bar, NavButton, ProgressBar};
use cardcore::Preferences;
use cardnews::illustration::{self, IllustrationTag};
use cardnews::{NavigationState, Story};
use egui::{Context, Key, RichText, TextureHandle, TextureOptions};

/// Share of the content width given to the illustration column.
const ILLUSTRATION_SHARE: f32 = 0.4;

const PROGRESS_HEIGHT: f32 = 12.0;

pub struct CardNewsApp {
    story: Story,
    nav: NavigationState,
    illustration_size: [u32; 2],
    body_font_size: f32,
    heading_font_size: f32,
    /// Texture for the scene on screen, re-uploaded when the tag changes.
    texture: Option<(IllustrationTag, TextureHandle)>,
    show_about: bool,
}

impl CardNewsApp {
    pub fn new(story: Story, prefs: &Preferences) -> Self {
        let [w, h] = prefs.illustration_size;
        Self {
            story,
            nav: NavigationState::start(),
            illustration_size: illustration::clamp_size([w.max(1), h.max(1)]),
            body_font_size: prefs.body_font_size,
            heading_font_size: prefs.heading_font_size,
            texture: None,
            show_about: false,
        }
    }

    fn next(&mut self) {
        if self.nav.advance(&self.story) {
            log::debug!("advanced to chapter {} scene {}", self.nav.chapter(), self.nav.scene());
        }
    }

    fn previous(&mut self) {
        if self.nav.retreat(&self.story) {
            log::debug!("went back to chapter {} scene {}", self.nav.chapter(), self.nav.scene());
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);
        let (forward, back) = ctx.input(|i| {
            (
                i.key_pressed(Key::ArrowRight) || i.key_pressed(Key::Space) || i.key_pressed(Key::PageDown),
                i.key_pressed(Key::ArrowLeft) || i.key_pressed(Key::PageUp),
            )
        });
        if forward {
            self.next();
        }
        if back {
            self.previous();
        }
    }

    fn illustration_texture(&mut self, ctx: &Context, tag: IllustrationTag) -> TextureHandle {
        if let Some((shown, texture)) = &self.texture {
            if *shown == tag {
                return texture.clone();
            }
        }

        let image = illustration::render(tag, self.illustration_size);
        log::debug!("uploading {} illustration ({}x{})", tag.name(), image.width(), image.height());
        let texture = ctx.load_texture(
            format!("illustration_{}", tag.name()),
            image.to_color_image(),
            TextureOptions::LINEAR,
        );
        self.texture = Some((tag, texture.clone()));
        texture
    }

    fn render_illustration(&mut self, ui: &mut egui::Ui, tag: IllustrationTag) {
        let texture = self.illustration_texture(ui.ctx(), tag);
        let size = texture.size_vec2();
        let scale = ui.available_width() / size.x.max(1.0);
        ui.add_space(20.0);
        ui.add(egui::Image::new(egui::load::SizedTexture::new(texture.id(), size * scale)));
    }

    fn render_card(&self, ui: &mut egui::Ui) {
        let (Some(chapter), Some(scene)) = (self.nav.current_chapter(&self.story), self.nav.current_scene(&self.story)) else {
            return;
        };

        card(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&chapter.title)
                        .size(self.heading_font_size)
                        .strong()
                        .color(CardColors::CHAPTER_TITLE),
                );
            });
            ui.add_space(20.0);
            ui.label(RichText::new(&scene.title).size(self.heading_font_size * 0.8).strong());

            // Roughly 1.8 line height between dialogue lines.
            let gap = self.body_font_size * 0.8;
            for line in &scene.content {
                ui.add_space(gap);
                ui.label(RichText::new(line).size(self.body_font_size));
            }
            ui.add_space(gap);
        });
    }

    fn render_navigation(&mut self, ui: &mut egui::Ui) {
        let at_start = self.nav.is_at_start();
        let at_end = self.nav.is_at_end(&self.story);
        let (mut back, mut forward) = (false, false);

        ui.columns(3, |cols| {
            back = cols[0].add(NavButton::new("◀ 이전").enabled(!at_start)).clicked();
            forward = cols[2].add(NavButton::new("다음 ▶").enabled(!at_end)).clicked();
        });

        if back {
            self.previous();
        }
        if forward {
            self.next();
        }

        let progress = self.nav.progress(&self.story);
        ui.add_space(12.0);
        ui.add(ProgressBar::new(progress.fraction()).height(PROGRESS_HEIGHT));
        ui.label(format!("진행 상황: {} / {}", progress.current, progress.total));
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about cardnews")
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(self.story.title());
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                });
                ui.add_space(8.0);
                ui.separator();
                ui.label(format!(
                    "{} chapters, {} scenes",
                    self.story.chapter_count(),
                    self.story.total_scenes()
                ));
                ui.add_space(4.0);
                ui.label("keys:");
                ui.label("  → / space / page down   next scene");
                ui.label("  ← / page up             previous scene");
                ui.add_space(4.0);
                ui.label("frameworks:");
                ui.label("  egui/eframe (MIT), tiny-skia (BSD)");
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for CardNewsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("go", |ui| {
                    if ui.button("next        →").clicked() {
                        self.next();
                        ui.close_menu();
                    }
                    if ui.button("previous    ←").clicked() {
                        self.previous();
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar(ui, &format!(
                "{}  |  chapter {} of {}  |  ← → to navigate",
                self.story.title(),
                self.nav.chapter() + 1,
                self.story.chapter_count()
            ));
        });

        let tag = self.nav.current_scene(&self.story).map_or(IllustrationTag::Blank, |s| s.illustration);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let width = ui.available_width();
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(width * ILLUSTRATION_SHARE);
                        self.render_illustration(ui, tag);
                    });
                    ui.add_space(16.0);
                    ui.vertical(|ui| {
                        ui.set_width(ui.available_width());
                        self.render_card(ui);
                    });
                });
                ui.add_space(8.0);
                self.render_navigation(ui);
            });
        });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}
