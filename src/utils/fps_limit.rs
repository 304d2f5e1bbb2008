use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Sleeps at the end of a frame to keep the frame rate under a limit.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        let mut limiter = Self {
            target_frametime: Duration::ZERO,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        };
        limiter.set_max_fps(max_fps);
        limiter
    }

    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    pub fn set_max_fps(&mut self, max_fps: f64) {
        self.target_frametime = if max_fps > 0. {
            Duration::from_secs_f64(1. / max_fps)
        } else {
            Duration::ZERO
        };
    }

    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}

/// Tells when the next generation is due at a given rate.
pub struct TickTimer {
    last_tick: Instant,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }
}

impl TickTimer {
    /// Returns `true` and restarts the timer if at least `1 / ticks_per_second` passed.
    pub fn is_due(&mut self, ticks_per_second: f64) -> bool {
        if ticks_per_second <= 0. {
            return false;
        }
        let period = Duration::from_secs_f64(1. / ticks_per_second);
        if self.last_tick.elapsed() < period {
            return false;
        }
        self.last_tick = Instant::now();
        true
    }

    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}
