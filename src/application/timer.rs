/// Fixed-interval step timer driven by frame deltas.
///
/// The frame loop feeds elapsed time through `advance`; the timer reports
/// when an interval has passed. Disarming drops any partial interval.
#[derive(Clone, Debug, PartialEq)]
pub struct StepTimer {
    interval: f32,
    elapsed: f32,
    armed: bool,
}

impl StepTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            armed: false,
        }
    }

    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start counting from zero
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed = 0.0;
    }

    /// Stop counting and forget the partial interval
    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed = 0.0;
    }

    /// Advance by `delta_time` seconds. Returns true if the timer fired.
    /// Fires at most once per call; the carried remainder stays below one
    /// interval so a long frame cannot queue up a burst of firings.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        if !self.armed {
            return false;
        }

        self.elapsed += delta_time.max(0.0);
        if self.elapsed < self.interval {
            return false;
        }

        self.elapsed = (self.elapsed - self.interval).min(self.interval * 0.999);
        true
    }
}
