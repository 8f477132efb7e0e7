use crate::scene::Scene;
use crate::surface::{FrameScheduler, PointerSource, Surface};

/// `Idle` until [`RenderLoop::run`] is called, `Running` from then on.
/// There is no stopped state; a loop handed back by `run` stays `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Drives a [`Scene`] once per frame for as long as the host keeps granting frames.
///
/// The loop owns the scene and borrows the surface and host mutably, so frame
/// ticks and pointer updates never touch the state at the same time. A host
/// that dispatches from several threads has to funnel its events through the
/// `PointerSource` it hands in here.
pub struct RenderLoop {
    scene: Scene,
    state: LoopState,
    frames: u64,
}

impl RenderLoop {
    /// Wraps a scene in an idle loop. Nothing is drawn until [`RenderLoop::run`].
    pub fn new(scene: Scene) -> RenderLoop {
        RenderLoop {
            scene,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Runs until the host stops granting frames.
    ///
    /// Pointer samples that arrived since the previous frame are applied
    /// before the frame is drawn. Nothing inside the loop stops it; only the
    /// host tearing down does. The loop is handed back afterwards, still
    /// `Running`, so its scene and frame count can be inspected.
    ///
    /// # Arguments
    ///
    /// * `surface` - Where every frame is drawn
    /// * `host` - Frame clock and pointer feed
    pub fn run<S, H>(mut self, surface: &mut S, host: &mut H) -> RenderLoop
    where
        S: Surface,
        H: FrameScheduler + PointerSource,
    {
        self.state = LoopState::Running;
        log::info!("Render loop running on a {}x{} surface", surface.width(), surface.height());

        while host.request_next_frame() {
            while let Some(pointer) = host.poll_pointer() {
                self.scene.pointer_moved(pointer);
            }
            self.scene.frame(surface);
            self.frames += 1;
        }

        log::info!("Host closed after {} frames", self.frames);
        self
    }
}
