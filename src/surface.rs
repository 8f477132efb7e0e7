//! Contracts with the host: something to draw on, a frame clock and a pointer.

use serde::{Deserialize, Serialize};

use crate::vector::Vec2;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Rgba {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Color and width of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Drawing target for one frame.
///
/// Calls are infallible from the caller's side. Implementations handle
/// (and log) their own drawing failures.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Wipes the previous frame.
    fn clear(&mut self);

    /// Straight segment from `a` to `b`.
    fn stroke_line(&mut self, a: Vec2, b: Vec2, stroke: Stroke);

    /// Connected segments through `points` in order. Fewer than two points draw nothing.
    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Single line of text with its baseline starting at `position`.
    ///
    /// # Arguments
    ///
    /// * `text` - Label to draw
    /// * `position` - Left end of the baseline
    /// * `color` - Text color
    fn draw_text(&mut self, text: &str, position: Vec2, color: Rgba);

    /// Ends the frame. Surfaces that draw straight to the screen need nothing here.
    fn present(&mut self) {}
}

/// Paces the render loop.
pub trait FrameScheduler {
    /// Waits for the next refresh slot.
    ///
    /// Returns `false` once the host has been torn down. A caller that
    /// falls behind is handed the next slot, missed slots are not replayed.
    fn request_next_frame(&mut self) -> bool;
}

/// Pointer positions in surface coordinates.
pub trait PointerSource {
    /// Next pending pointer sample, oldest first.
    fn poll_pointer(&mut self) -> Option<Vec2>;
}
