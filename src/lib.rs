//! Spring-driven cubic Bézier curve.
//!
//! The two interior control points chase targets derived from the pointer
//! under a damped spring, while the endpoints stay fixed. Everything here is
//! pure and headless; drawing, frame pacing and pointer input come from the
//! host through the traits in [`surface`].

pub mod bezier;
pub mod config;
pub mod interaction;
pub mod render_loop;
pub mod scene;
pub mod spring;
pub mod surface;
pub mod vector;

pub use bezier::{CubicBezier, evaluate_position, evaluate_tangent};
pub use config::{Config, ConfigError};
pub use interaction::{SpringTargets, map_pointer};
pub use render_loop::{LoopState, RenderLoop};
pub use scene::Scene;
pub use spring::{SpringParams, SpringPoint, SpringStep, spring_step};
pub use surface::{FrameScheduler, PointerSource, Rgba, Stroke, Surface};
pub use vector::Vec2;
