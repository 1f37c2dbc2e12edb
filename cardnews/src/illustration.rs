//! Scene illustrations
//!
//! Each scene names an [`IllustrationTag`]; the tag selects a routine that
//! draws a handful of flat shapes onto a white canvas. Coordinates are fixed
//! for an 800×500 canvas and simply clip on smaller ones.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Canvas size the drawing coordinates are laid out for.
pub const REFERENCE_SIZE: [u32; 2] = [800, 500];

/// Largest canvas side [`render`] will produce; larger requests are clamped.
pub const MAX_CANVAS_SIDE: u32 = 4096;

const BACKGROUND: [u8; 3] = [255, 255, 255];

// Named colors, as in CSS.
const BLACK: [u8; 3] = [0, 0, 0];
const LIGHT_BLUE: [u8; 3] = [173, 216, 230];
const BROWN: [u8; 3] = [165, 42, 42];
const BEIGE: [u8; 3] = [245, 245, 220];
const LIGHT_GRAY: [u8; 3] = [211, 211, 211];
const GRAY: [u8; 3] = [128, 128, 128];
const GREEN: [u8; 3] = [0, 128, 0];
const GOLD: [u8; 3] = [255, 215, 0];
const RED: [u8; 3] = [255, 0, 0];
const YELLOW: [u8; 3] = [255, 255, 0];

/// Which drawing represents a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllustrationTag {
    Contract,
    Office,
    Factory,
    Court,
    Money,
    Lesson,
    /// Fallback: background only.
    Blank,
}

impl IllustrationTag {
    /// Every tag that draws something.
    pub const DRAWN: [IllustrationTag; 6] = [
        IllustrationTag::Contract,
        IllustrationTag::Office,
        IllustrationTag::Factory,
        IllustrationTag::Court,
        IllustrationTag::Money,
        IllustrationTag::Lesson,
    ];

    /// Case-insensitive lookup. Unknown names map to [`IllustrationTag::Blank`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "contract" => Self::Contract,
            "office" => Self::Office,
            "factory" => Self::Factory,
            "court" => Self::Court,
            "money" => Self::Money,
            "lesson" => Self::Lesson,
            _ => Self::Blank,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Office => "office",
            Self::Factory => "factory",
            Self::Court => "court",
            Self::Money => "money",
            Self::Lesson => "lesson",
            Self::Blank => "blank",
        }
    }

    fn drawing(self) -> fn(&mut Pixmap) {
        match self {
            Self::Contract => draw_contract,
            Self::Office => draw_office,
            Self::Factory => draw_factory,
            Self::Court => draw_court,
            Self::Money => draw_money,
            Self::Lesson => draw_lesson,
            Self::Blank => draw_nothing,
        }
    }
}

/// An opaque RGBA raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Illustration {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Illustration {
    fn blank(width: u32, height: u32) -> Self {
        let rgba = BACKGROUND
            .iter()
            .copied()
            .chain(std::iter::once(255))
            .cycle()
            .take(byte_len(width, height).unwrap_or(0))
            .collect();
        Self { width, height, rgba }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba.get(i..i + 4).and_then(|p| p.try_into().ok())
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_premultiplied([self.width as usize, self.height as usize], &self.rgba)
    }
}

fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)?.checked_mul(4)
}

/// Clamp each side of `size` to [`MAX_CANVAS_SIDE`].
pub fn clamp_size(size: [u32; 2]) -> [u32; 2] {
    size.map(|side| side.min(MAX_CANVAS_SIDE))
}

/// Draw the illustration for `tag` on a fresh canvas of `size` (width, height).
/// Sides beyond [`MAX_CANVAS_SIDE`] are clamped.
pub fn render(tag: IllustrationTag, size: [u32; 2]) -> Illustration {
    let [width, height] = clamp_size(size);
    // Pixmap refuses empty canvases; those still get a plain background.
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return Illustration::blank(width, height);
    };
    pixmap.fill(tiny_skia::Color::from_rgba8(BACKGROUND[0], BACKGROUND[1], BACKGROUND[2], 255));
    (tag.drawing())(&mut pixmap);

    Illustration { width, height, rgba: pixmap.take() }
}

/// [`render`] for a tag given by name.
pub fn render_named(name: &str, size: [u32; 2]) -> Illustration {
    render(IllustrationTag::from_name(name), size)
}

fn draw_contract(pixmap: &mut Pixmap) {
    fill_box(pixmap, [300.0, 200.0, 500.0, 300.0], LIGHT_BLUE); // document
    stroke_polyline(pixmap, &[(350.0, 250.0), (450.0, 250.0)], 3.0, BLACK); // signature
    fill_box(pixmap, [200.0, 150.0, 250.0, 200.0], BROWN); // seal
}

fn draw_office(pixmap: &mut Pixmap) {
    fill_box(pixmap, [100.0, 200.0, 700.0, 400.0], BEIGE); // desk
    fill_box(pixmap, [300.0, 100.0, 500.0, 180.0], LIGHT_GRAY); // monitor
    fill_box(pixmap, [380.0, 180.0, 420.0, 200.0], GRAY); // stand
}

fn draw_factory(pixmap: &mut Pixmap) {
    fill_polygon(pixmap, &[(300.0, 100.0), (500.0, 100.0), (600.0, 200.0), (200.0, 200.0)], GRAY); // roof
    fill_box(pixmap, [200.0, 200.0, 600.0, 400.0], LIGHT_GRAY); // building
    fill_box(pixmap, [350.0, 300.0, 450.0, 400.0], BROWN); // door
}

fn draw_court(pixmap: &mut Pixmap) {
    fill_box(pixmap, [300.0, 100.0, 500.0, 200.0], BROWN); // bench
    fill_ellipse(pixmap, [380.0, 50.0, 420.0, 90.0], BLACK); // judge's head
    fill_box(pixmap, [350.0, 90.0, 450.0, 150.0], BLACK); // robe
}

fn draw_money(pixmap: &mut Pixmap) {
    fill_box(pixmap, [200.0, 200.0, 300.0, 250.0], GREEN); // banknote
    draw_dollar_mark(pixmap, (220.0, 215.0));
    stroke_polyline(pixmap, &[(400.0, 150.0), (350.0, 250.0)], 3.0, RED); // falling graph
}

fn draw_lesson(pixmap: &mut Pixmap) {
    fill_ellipse(pixmap, [350.0, 150.0, 450.0, 250.0], YELLOW); // bulb
    fill_box(pixmap, [390.0, 250.0, 410.0, 300.0], GRAY); // base
}

fn draw_nothing(_pixmap: &mut Pixmap) {}

/// A small "$" with its top-left corner at `origin`, about 8×14 px.
fn draw_dollar_mark(pixmap: &mut Pixmap, origin: (f32, f32)) {
    let (x, y) = origin;
    let s = [
        (7.0, 1.0),
        (2.0, 1.0),
        (1.0, 2.5),
        (1.0, 5.0),
        (2.0, 6.5),
        (6.0, 6.5),
        (7.0, 8.0),
        (7.0, 10.5),
        (6.0, 12.0),
        (1.0, 12.0),
    ]
    .map(|(dx, dy)| (x + dx, y + dy));
    stroke_polyline(pixmap, &s, 1.5, GOLD);
    stroke_polyline(pixmap, &[(x + 4.0, y - 1.0), (x + 4.0, y + 14.0)], 1.5, GOLD);
}

fn solid(color: [u8; 3]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], 255);
    paint.anti_alias = false;
    paint
}

/// `[x0, y0, x1, y1]` with both corners inside the box.
fn box_rect(b: [f32; 4]) -> Option<Rect> {
    Rect::from_ltrb(b[0], b[1], b[2] + 1.0, b[3] + 1.0)
}

fn fill_box(pixmap: &mut Pixmap, b: [f32; 4], color: [u8; 3]) {
    if let Some(rect) = box_rect(b) {
        pixmap.fill_rect(rect, &solid(color), Transform::identity(), None);
    }
}

fn fill_ellipse(pixmap: &mut Pixmap, b: [f32; 4], color: [u8; 3]) {
    if let Some(path) = box_rect(b).and_then(PathBuilder::from_oval) {
        pixmap.fill_path(&path, &solid(color), FillRule::Winding, Transform::identity(), None);
    }
}

fn fill_polygon(pixmap: &mut Pixmap, points: &[(f32, f32)], color: [u8; 3]) {
    let Some((&(x, y), rest)) = points.split_first() else { return };
    let mut pb = PathBuilder::new();
    pb.move_to(x, y);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    pb.close();
    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, &solid(color), FillRule::Winding, Transform::identity(), None);
    }
}

fn stroke_polyline(pixmap: &mut Pixmap, points: &[(f32, f32)], width: f32, color: [u8; 3]) {
    let Some((&(x, y), rest)) = points.split_first() else { return };
    let mut pb = PathBuilder::new();
    pb.move_to(x, y);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    if let Some(path) = pb.finish() {
        let stroke = Stroke { width, ..Stroke::default() };
        pixmap.stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    }
}
