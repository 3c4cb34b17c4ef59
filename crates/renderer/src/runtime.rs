use std::time::{Duration, Instant};

/// Render loop lifecycle. There is no way back from `Terminating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Terminating,
}

/// Tracks close requests and applies them only at iteration boundaries, so
/// a frame that has already started always finishes.
#[derive(Debug, Default)]
pub struct FrameLoop {
    state: LoopState,
    close_requested: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Records a close request (exit key, window close).
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Called at the top of every iteration; returns the state the iteration
    /// runs in.
    pub fn begin_iteration(&mut self) -> LoopState {
        if self.close_requested {
            self.state = LoopState::Terminating;
        }
        self.state
    }
}

/// Update cadence while the surface is minimised and nothing is presented.
pub(crate) const MINIMISED_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// How the event loop waits after an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pacing {
    /// Redraw immediately; presentation blocks on vsync.
    Continuous,
    /// Nothing to present: sleep until the deadline, then advance state.
    Throttled(Instant),
}

impl Pacing {
    pub(crate) fn for_surface(drawable: bool, now: Instant) -> Self {
        if drawable {
            Pacing::Continuous
        } else {
            Pacing::Throttled(now + MINIMISED_FRAME_INTERVAL)
        }
    }
}

/// Frame-rate statistics refreshed once per second.
#[derive(Debug, Clone)]
pub struct FrameStats {
    frames_per_second: f32,
    frames_since_last_update: u32,
    last_update: Instant,
    frame_count: u64,
}

impl FrameStats {
    const UPDATE_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(now: Instant) -> Self {
        Self {
            frames_per_second: 0.0,
            frames_since_last_update: 0,
            last_update: now,
            frame_count: 0,
        }
    }

    /// Counts one presented frame. Returns true when the FPS estimate was
    /// refreshed.
    pub fn record_frame(&mut self, now: Instant) -> bool {
        self.frame_count += 1;
        self.frames_since_last_update += 1;
        let elapsed = now.saturating_duration_since(self.last_update);
        if elapsed < Self::UPDATE_INTERVAL {
            return false;
        }
        self.frames_per_second = self.frames_since_last_update as f32 / elapsed.as_secs_f32();
        self.frames_since_last_update = 0;
        self.last_update = now;
        true
    }

    pub fn frames_per_second(&self) -> f32 {
        self.frames_per_second
    }

    /// Average frame time in milliseconds; zero until the first estimate.
    pub fn frame_time_ms(&self) -> f32 {
        if self.frames_per_second > 0.0 {
            1000.0 / self.frames_per_second
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
