/// Number of instantaneous fps samples averaged into one reading.
pub const FPS_WINDOW: usize = 60;

/// Delta times at or below this (seconds) produce no fps sample.
const MIN_SAMPLE_DT: f64 = 1e-6;

/// Frame clock.
/// Turns a stream of absolute timestamps into per-frame delta time and a
/// smoothed frames-per-second reading.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Last timestamp seen, in milliseconds.
    current_time: f64,
    /// Seconds between the last two timestamps.
    delta_time: f64,
    /// Ring of the most recent instantaneous fps values.
    samples: [f64; FPS_WINDOW],
    /// Next write position in `samples`.
    index: usize,
    /// Truncated mean of `samples`, refreshed once per full ring.
    fps: i32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            current_time: 0.0,
            delta_time: 0.0,
            samples: [FPS_WINDOW as f64; FPS_WINDOW],
            index: 0,
            fps: FPS_WINDOW as i32,
        }
    }

    /// Advance to `elapsed_ms` (a host timestamp in milliseconds).
    pub fn tick(&mut self, elapsed_ms: f64) {
        self.delta_time = (elapsed_ms - self.current_time) / 1000.0;
        self.current_time = elapsed_ms;
    }

    /// Record `round(1 / delta_time)` and, every `FPS_WINDOW` samples,
    /// recompute the smoothed fps. Returns true when the reading changed.
    ///
    /// Duplicate or backwards timestamps leave a zero or negative delta;
    /// those frames are not sampled.
    pub fn sample_fps(&mut self) -> bool {
        if !self.delta_time.is_finite() || self.delta_time <= MIN_SAMPLE_DT {
            log::trace!("clock: skipping fps sample, dt = {}", self.delta_time);
            return false;
        }

        self.samples[self.index] = (1.0 / self.delta_time).round();
        self.index = (self.index + 1) % FPS_WINDOW;
        if self.index != 0 {
            return false;
        }

        let mean = self.samples.iter().sum::<f64>() / FPS_WINDOW as f64;
        self.fps = mean.trunc() as i32;
        true
    }

    /// Seconds elapsed between the last two ticks.
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Timestamp of the last tick in milliseconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn fps(&self) -> i32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
