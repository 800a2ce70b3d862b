/// FrameStats - frames-per-second accounting for the render loop.
///
/// Counts presented frames and re-evaluates the rate once at least a full
/// second has elapsed, so the reported numbers stay readable instead of
/// jittering every frame. Time is injected by the caller, which keeps the
/// arithmetic testable.

use std::time::Instant;

/// One per-second measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub fps: f64,
    pub frame_ms: f64,
}

/// Frame counter with once-per-second rate evaluation
pub struct FrameStats {
    frame_count: u32,
    window_start: Instant,
    fps: f64,
    frame_ms: f64,
}

impl FrameStats {
    /// Start counting from `now`
    pub fn new(now: Instant) -> Self {
        Self {
            frame_count: 0,
            window_start: now,
            fps: 0.0,
            frame_ms: 0.0,
        }
    }

    /// Record one presented frame.
    ///
    /// Returns a report when a measurement window (>= 1 second) closed with
    /// this frame; the counter then restarts from `now`.
    pub fn frame_presented(&mut self, now: Instant) -> Option<FrameReport> {
        let delta = now.duration_since(self.window_start).as_secs_f64();

        let mut report = None;
        if delta >= 1.0 {
            self.fps = self.frame_count as f64 / delta;
            self.frame_ms = if self.fps > 0.0 { 1000.0 / self.fps } else { 0.0 };
            report = Some(FrameReport {
                fps: self.fps,
                frame_ms: self.frame_ms,
            });

            // reset
            self.frame_count = 0;
            self.window_start = now;
        }
        self.frame_count += 1;

        report
    }

    /// Last evaluated frames per second (0 before the first window closes)
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Last evaluated frame time in milliseconds
    pub fn frame_ms(&self) -> f64 {
        self.frame_ms
    }
}

#[cfg(test)]
#[path = "frame_stats_tests.rs"]
mod tests;
