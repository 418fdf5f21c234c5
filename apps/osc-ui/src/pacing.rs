//! Fixed-rate frame pacing.
//!
//! egui repaints whenever input arrives, so repaints are not frames. The
//! pacer decides when a repaint should also advance the simulation, keeping
//! physics at one step per `1/fps` seconds of wall-clock time.

use std::time::{Duration, Instant};

/// Smoothing weight of the newest frame time in the running average.
const SMOOTHING: f64 = 0.1;

pub struct FramePacer {
    interval: Duration,
    last_frame: Option<Instant>,
    /// Exponentially smoothed frame time in seconds.
    average_s: Option<f64>,
}

impl FramePacer {
    pub fn new(fps: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps),
            last_frame: None,
            average_s: None,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.last_frame
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// How long to wait before the next frame is due.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        match self.last_frame {
            Some(last) => (last + self.interval).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    /// Record that a frame ran at `now`.
    pub fn mark(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            let elapsed = now.saturating_duration_since(last).as_secs_f64();
            self.average_s = Some(match self.average_s {
                Some(avg) => avg + SMOOTHING * (elapsed - avg),
                None => elapsed,
            });
        }
        self.last_frame = Some(now);
    }

    /// Measured frames per second, once two frames have run.
    pub fn measured_fps(&self) -> Option<f64> {
        self.average_s.filter(|s| *s > 0.0).map(|s| 1.0 / s)
    }
}
