//! Interactive spring-driven Bézier curve.
//!
//! Move the mouse over the window: the two interior control points chase the
//! midpoints between the fixed endpoints and the pointer, and the curve,
//! its control handles and sampled tangents are redrawn every frame.

mod canvas;
mod host;

use crate::canvas::SdlCanvas;
use crate::host::SdlHost;
use anyhow::Context;
use springbez::{Config, RenderLoop, Scene, Surface};

/// Initializes SDL2, opens the window and runs the render loop until the
/// window is closed.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("springbez v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = Config::default_path();
    let config = Config::load(&config_path)
        .with_context(|| format!("invalid configuration in {}", config_path.display()))?;

    // Initialize SDL2 subsystems
    let sdl_context = sdl2::init().map_err(anyhow::Error::msg)?;
    let video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;
    let ttf_context = sdl2::ttf::init()
        .map_err(anyhow::Error::msg)
        .context("failed to initialize SDL2_ttf")?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()
        .context("failed to create window")?;
    let canvas = window.into_canvas().build().context("failed to create canvas")?;

    let font = match ttf_context.load_font(&config.font.path, config.font.size) {
        Ok(font) => Some(font),
        Err(e) => {
            log::warn!("Could not load font {}, labels disabled: {}", config.font.path.display(), e);
            None
        }
    };

    let mut surface = SdlCanvas::new(canvas, font, config.style.background);
    surface.clear();
    surface.present();

    // Layout is taken from the surface once, at startup
    let scene = Scene::new(surface.width(), surface.height(), &config);

    let event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;
    let mut host = SdlHost::new(event_pump, config.window.frame_rate);

    RenderLoop::new(scene).run(&mut surface, &mut host);
    Ok(())
}
