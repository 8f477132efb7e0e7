use springbez::{FrameScheduler, PointerSource, Vec2};
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frame clock and pointer feed on top of the SDL event pump.
///
/// Frames are paced to a fixed interval by sleeping. A frame that starts
/// late resets the clock instead of trying to catch up.
pub struct SdlHost {
    event_pump: EventPump,
    frame_interval: Duration,
    last_frame: Option<Instant>,
    pending: VecDeque<Vec2>,
    closed: bool,
}

impl SdlHost {
    pub fn new(event_pump: EventPump, frame_rate: u32) -> SdlHost {
        SdlHost {
            event_pump,
            frame_interval: Duration::from_secs(1) / frame_rate.max(1),
            last_frame: None,
            pending: VecDeque::new(),
            closed: false,
        }
    }

    /// Quit on Escape or window close, queue mouse motion.
    fn pump_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                    self.closed = true;
                }
                Event::MouseMotion { x, y, .. } => {
                    self.pending.push_back(Vec2::new(x as f32, y as f32));
                }
                _ => {}
            }
        }
    }
}

impl FrameScheduler for SdlHost {
    fn request_next_frame(&mut self) -> bool {
        if let Some(last) = self.last_frame {
            let due = last + self.frame_interval;
            let now = Instant::now();
            if due > now {
                ::std::thread::sleep(due - now);
            }
        }
        self.last_frame = Some(Instant::now());
        self.pump_events();
        if self.closed {
            log::info!("Window closed");
        }
        !self.closed
    }
}

impl PointerSource for SdlHost {
    fn poll_pointer(&mut self) -> Option<Vec2> {
        self.pending.pop_front()
    }
}
