use std::time::Instant;

/// Control surface for the per-frame animation clock.
///
/// The host owns the cadence: while the clock is running it calls
/// `KineticScroller::on_tick` once per frame with the elapsed
/// milliseconds. `start` and `stop` only arm and disarm that delivery;
/// a stopped clock must deliver no further ticks.
pub trait FrameClock {
    /// Arm the clock. With `looping` set it keeps firing until `stop`.
    fn start(&mut self, looping: bool);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Flag-only clock for hosts that poll each frame.
///
/// Hosts using this check `KineticScroller::is_decaying` in their redraw
/// handler and feed `on_tick` while it holds.
#[derive(Debug, Default)]
pub struct ManualClock {
    running: bool,
    looping: bool,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl FrameClock for ManualClock {
    fn start(&mut self, looping: bool) {
        self.running = true;
        self.looping = looping;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

/// Measures elapsed milliseconds between frames, clamped so a stall (hidden
/// window, debugger pause) does not land as one giant step.
#[derive(Debug)]
pub struct FrameTimer {
    last: Instant,
    max_delta_ms: f32,
}

impl FrameTimer {
    pub fn new(max_delta_ms: f32) -> Self {
        Self {
            last: Instant::now(),
            max_delta_ms,
        }
    }

    /// Milliseconds since the previous call, at most `max_delta_ms`.
    pub fn delta_ms(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32() * 1000.0;
        self.last = now;
        delta.min(self.max_delta_ms)
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_and_stops() {
        let mut clock = ManualClock::new();
        assert!(!clock.is_running());
        clock.start(true);
        assert!(clock.is_running());
        assert!(clock.is_looping());
        clock.stop();
        assert!(!clock.is_running());
    }

    #[test]
    fn restart_after_stop() {
        let mut clock = ManualClock::new();
        clock.start(false);
        clock.stop();
        clock.start(true);
        assert!(clock.is_running());
    }

    #[test]
    fn frame_timer_clamps_to_max() {
        let mut timer = FrameTimer::new(0.0);
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(timer.delta_ms() <= 0.0 + f32::EPSILON);
    }

    #[test]
    fn frame_timer_measures_forward() {
        let mut timer = FrameTimer::default();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let delta = timer.delta_ms();
        assert!(delta > 0.0);
        assert!(delta <= 50.0);
    }
}
