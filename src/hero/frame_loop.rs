//! Start/stop lifecycle for the hero animation loop.
//!
//! eframe repaints when asked to; the loop only asks while it is running.
//! Stopping clears the schedule, so no further frames are requested.

use std::time::Duration;
use web_time::Instant;

/// Lifecycle state of the animation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopState {
    Stopped,
    Running { started_at: Instant },
}

#[derive(Debug, Clone)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
            frames: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Starts the loop. Starting a running loop keeps its original clock.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        log::info!("Hero animation loop started");
        self.state = LoopState::Running { started_at: now };
        self.frames = 0;
    }

    /// Stops the loop; subsequent ticks return `None` until restarted.
    pub fn stop(&mut self) {
        if let LoopState::Running { .. } = self.state {
            log::info!("Hero animation loop stopped after {} frames", self.frames());
        }
        self.state = LoopState::Stopped;
    }

    /// Advances one frame, returning the elapsed time since start.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let LoopState::Running { started_at } = self.state else {
            return None;
        };
        self.frames += 1;
        Some(now.saturating_duration_since(started_at))
    }

    /// Frames ticked since the last start.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
