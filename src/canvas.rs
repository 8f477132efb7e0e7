use springbez::{Rgba, Stroke, Surface, Vec2};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};
use std::fmt::Display;

/// SDL2_gfx reads the packed color in the opposite byte order.
fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

fn to_sdl(color: Rgba) -> Color {
    Color::RGBA(color.r, color.g, color.b, color.a)
}

fn to_px(v: Vec2) -> (i16, i16) {
    (v.x.round() as i16, v.y.round() as i16)
}

/// Drawing failures are reported and the frame carries on.
fn report<E: Display>(what: &str, result: Result<(), E>) {
    if let Err(e) = result {
        log::debug!("{what} failed: {e}");
    }
}

/// Window canvas backed by SDL2_gfx primitives and SDL2_ttf labels.
pub struct SdlCanvas<'ttf> {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    font: Option<Font<'ttf, 'static>>,
    background: Color,
}

impl<'ttf> SdlCanvas<'ttf> {
    /// Without a font the labels are skipped.
    pub fn new(canvas: Canvas<Window>, font: Option<Font<'ttf, 'static>>, background: Rgba) -> SdlCanvas<'ttf> {
        let texture_creator = canvas.texture_creator();
        SdlCanvas {
            canvas,
            texture_creator,
            font,
            background: to_sdl(background),
        }
    }

    fn line(&mut self, a: Vec2, b: Vec2, stroke: Stroke) {
        let (x1, y1) = to_px(a);
        let (x2, y2) = to_px(b);
        let color = to_abgr(to_sdl(stroke.color));
        if stroke.width <= 1.0 {
            report("aa_line", self.canvas.aa_line(x1, y1, x2, y2, color));
        } else {
            let width = stroke.width.round().clamp(1.0, u8::MAX as f32) as u8;
            report("thick_line", self.canvas.thick_line(x1, y1, x2, y2, width, color));
        }
    }
}

impl Surface for SdlCanvas<'_> {
    fn width(&self) -> u32 {
        self.canvas.window().size().0
    }

    fn height(&self) -> u32 {
        self.canvas.window().size().1
    }

    fn clear(&mut self) {
        self.canvas.set_draw_color(self.background);
        self.canvas.clear();
    }

    fn stroke_line(&mut self, a: Vec2, b: Vec2, stroke: Stroke) {
        self.line(a, b, stroke);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        for segment in points.windows(2) {
            self.line(segment[0], segment[1], stroke);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (x, y) = to_px(center);
        let rad = radius.round() as i16;
        let color = to_abgr(to_sdl(color));
        report("filled_circle", self.canvas.filled_circle(x, y, rad, color));
        report("aa_circle", self.canvas.aa_circle(x, y, rad, color));
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Rgba) {
        let Some(font) = &self.font else {
            return;
        };
        let text_surface = match font.render(text).blended(to_sdl(color)) {
            Ok(surface) => surface,
            Err(e) => {
                log::debug!("rendering label {text:?} failed: {e}");
                return;
            }
        };
        let text_texture = match self.texture_creator.create_texture_from_surface(&text_surface) {
            Ok(texture) => texture,
            Err(e) => {
                log::debug!("uploading label {text:?} failed: {e}");
                return;
            }
        };
        let query = text_texture.query();
        // `position` is the text baseline, SDL places the top-left corner.
        let x = position.x.round() as i32;
        let y = position.y.round() as i32 - font.ascent();
        let target_rect = Rect::new(x, y, query.width, query.height);
        report("copy", self.canvas.copy(&text_texture, None, Some(target_rect)));
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
