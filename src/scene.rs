//! Frame state: the four control points and everything needed to draw them.

use crate::bezier::CubicBezier;
use crate::config::{Config, LayoutConfig, SamplingConfig, StyleConfig};
use crate::interaction::map_pointer;
use crate::spring::{SpringParams, SpringPoint};
use crate::surface::{Rgba, Surface};
use crate::vector::Vec2;

/// Fixed endpoints P0/P3, spring-driven P1/P2, and how to draw them.
#[derive(Debug, Clone)]
pub struct Scene {
    p0: Vec2,
    p1: SpringPoint,
    p2: SpringPoint,
    p3: Vec2,
    spring: SpringParams,
    sampling: SamplingConfig,
    style: StyleConfig,
}

/// Resting positions of P0..P3 for a surface of the given size.
///
/// All four sit on the horizontal center line; P0/P3 inset by the endpoint
/// margin, P1/P2 spread either side of the center.
pub fn resting_layout(width: u32, height: u32, layout: &LayoutConfig) -> [Vec2; 4] {
    let w = width as f32;
    let mid_y = height as f32 / 2.0;
    let mid_x = w / 2.0;
    [
        Vec2::new(layout.endpoint_margin, mid_y),
        Vec2::new(mid_x - layout.handle_spread, mid_y),
        Vec2::new(mid_x + layout.handle_spread, mid_y),
        Vec2::new(w - layout.endpoint_margin, mid_y),
    ]
}

impl Scene {
    /// Lays out the control points for a surface and leaves P1/P2 at rest.
    ///
    /// # Arguments
    ///
    /// * `width` - Surface width in pixels, read once at startup
    /// * `height` - Surface height in pixels
    /// * `config` - Spring constants, sampling, layout and style
    pub fn new(width: u32, height: u32, config: &Config) -> Scene {
        let [p0, p1, p2, p3] = resting_layout(width, height, &config.layout);
        Scene {
            p0,
            p1: SpringPoint::at_rest(p1),
            p2: SpringPoint::at_rest(p2),
            p3,
            spring: config.spring,
            sampling: config.sampling,
            style: config.style.clone(),
        }
    }

    /// Fixed start point.
    pub fn p0(&self) -> Vec2 {
        self.p0
    }

    /// First dynamic control point, pulled toward the P0/pointer midpoint.
    pub fn p1(&self) -> &SpringPoint {
        &self.p1
    }

    /// Second dynamic control point, pulled toward the P3/pointer midpoint.
    pub fn p2(&self) -> &SpringPoint {
        &self.p2
    }

    /// Fixed end point.
    pub fn p3(&self) -> Vec2 {
        self.p3
    }

    /// The curve through the current control point positions.
    pub fn curve(&self) -> CubicBezier {
        CubicBezier::new(self.p0, self.p1.position, self.p2.position, self.p3)
    }

    /// Clear color the surface should use.
    pub fn background(&self) -> Rgba {
        self.style.background
    }

    /// Retargets P1 and P2 from a pointer sample. Takes effect on the next [`Scene::advance`].
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        let targets = map_pointer(self.p0, self.p3, pointer);
        self.p1.set_target(targets.p1);
        self.p2.set_target(targets.p2);
    }

    /// One spring step for each dynamic control point.
    pub fn advance(&mut self) {
        self.p1.step(&self.spring);
        self.p2.step(&self.spring);
    }

    /// Handles, curve, tangent markers, then the labelled control points.
    ///
    /// # Arguments
    ///
    /// * `surface` - Target of every draw call for this frame
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let style = &self.style;
        let curve = self.curve();

        surface.stroke_line(self.p0, self.p1.position, style.handle);
        surface.stroke_line(self.p2.position, self.p3, style.handle);

        surface.stroke_polyline(&curve.polyline(self.sampling.curve_step), style.curve);

        for (start, end) in curve.tangent_markers(self.sampling.tangent_step, self.sampling.tangent_length) {
            surface.stroke_line(start, end, style.tangent);
        }

        let points = [
            (self.p0, style.fixed_point),
            (self.p1.position, style.dynamic_point),
            (self.p2.position, style.dynamic_point),
            (self.p3, style.fixed_point),
        ];
        let offset = Vec2::new(style.label_offset[0], style.label_offset[1]);
        for ((point, color), label) in points.into_iter().zip(&style.labels) {
            surface.fill_circle(point, style.point_radius, color);
            surface.draw_text(label, point + offset, style.label);
        }
    }

    /// A full frame: clear, step the springs, draw, present.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();
        self.advance();
        self.draw(surface);
        surface.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn scene() -> Scene {
        Scene::new(880, 600, &Config::default())
    }

    #[test]
    fn test_resting_layout() {
        let [p0, p1, p2, p3] = resting_layout(880, 600, &LayoutConfig::default());
        assert_eq!(p0, Vec2::new(120.0, 300.0));
        assert_eq!(p1, Vec2::new(260.0, 300.0));
        assert_eq!(p2, Vec2::new(620.0, 300.0));
        assert_eq!(p3, Vec2::new(760.0, 300.0));
    }

    #[test]
    fn test_starts_at_rest() {
        let scene = scene();
        assert_eq!(scene.p1().velocity, Vec2::ZERO);
        assert_eq!(scene.p1().target, scene.p1().position);
        assert_eq!(scene.p2().target, scene.p2().position);
    }

    #[test]
    fn test_static_without_pointer() {
        let mut scene = scene();
        let before = scene.curve();
        for _ in 0..100 {
            scene.advance();
        }
        assert_eq!(scene.curve(), before);
    }

    #[test]
    fn test_pointer_sets_midpoint_targets() {
        let mut scene = scene();
        scene.pointer_moved(Vec2::new(440.0, 300.0));
        assert_eq!(scene.p1().target, Vec2::new(280.0, 300.0));
        assert_eq!(scene.p2().target, Vec2::new(600.0, 300.0));
        // Targets only; positions move on the next step.
        assert_eq!(scene.p1().position, Vec2::new(260.0, 300.0));
    }

    #[test]
    fn test_only_latest_pointer_counts() {
        let mut a = scene();
        let mut b = scene();
        a.pointer_moved(Vec2::new(10.0, 10.0));
        a.pointer_moved(Vec2::new(500.0, 100.0));
        b.pointer_moved(Vec2::new(500.0, 100.0));
        for _ in 0..30 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.curve(), b.curve());
    }

    #[test]
    fn test_control_points_follow_pointer() {
        let mut scene = scene();
        let pointer = Vec2::new(440.0, 100.0);
        scene.pointer_moved(pointer);
        for _ in 0..500 {
            scene.advance();
        }
        let p1 = scene.p1().position;
        let p2 = scene.p2().position;
        assert_abs_diff_eq!(p1.x, 280.0, epsilon = 0.01);
        assert_abs_diff_eq!(p1.y, 200.0, epsilon = 0.01);
        assert_abs_diff_eq!(p2.x, 600.0, epsilon = 0.01);
        assert_abs_diff_eq!(p2.y, 200.0, epsilon = 0.01);
        assert_eq!(scene.p0(), Vec2::new(120.0, 300.0));
        assert_eq!(scene.p3(), Vec2::new(760.0, 300.0));
    }
}
