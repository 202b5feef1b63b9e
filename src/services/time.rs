//! Fixed-timestep clock.
//!
//! The clock separates *render* time from *simulation* time. Every rendered
//! frame calls [`Clock::tick`] once, which paces the frame to the target
//! framerate and accumulates the measured real elapsed time as lag. The
//! engine loop then drains the lag in fixed-size steps via
//! [`Clock::is_update`], so simulation speed is independent of render speed.
//!
//! The raw interpolation fraction (`lag / interval`) is recomputed on every
//! mutation and may transiently exceed 1.0; drawing code clamps it at the
//! point of consumption.

use std::time::{Duration, Instant};

use log::info;

/// Frame pacing strategy, chosen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingMode {
    /// Best-effort `thread::sleep` pacing. Low CPU use, coarser timing.
    Sleep,
    /// Busy-spin until the frame deadline. Precise timing, high CPU use.
    Stable,
}

/// Fixed-update accumulator and frame pacer.
///
/// State machine over two variables, `lag` and `elapsed`: `tick()` adds real
/// time to `lag`, `is_update()` subtracts exactly one fixed interval per
/// `true` result. After any number of ticks summing to `S`, the number of
/// consumed updates is `floor(S / interval)` and `lag` ends in
/// `[0, interval)`.
pub struct Clock {
    framerate: u32,
    update_interval_ms: f64,
    lag_ms: f64,
    elapsed_ms: f64,
    now_ms: f64,
    interpolation: f64,
    pacing: PacingMode,
    last: Instant,
}

impl Clock {
    /// Create a clock.
    ///
    /// `framerate` is the pacing target in frames per second; 0 disables
    /// pacing entirely (uncapped). `update_interval_ms` is the fixed
    /// simulation step in milliseconds.
    pub fn new(framerate: u32, update_interval_ms: f64, pacing: PacingMode) -> Self {
        info!(
            "Initialising clock: framerate {} fps, fixed update interval {} ms, pacing {:?}.",
            framerate, update_interval_ms, pacing
        );
        Self {
            framerate,
            update_interval_ms,
            lag_ms: 0.0,
            elapsed_ms: 0.0,
            now_ms: 0.0,
            interpolation: 0.0,
            pacing,
            last: Instant::now(),
        }
    }

    /// Advance the clock by one rendered frame.
    ///
    /// Blocks until the frame deadline when a target framerate is set, then
    /// measures the real elapsed time since the previous tick and feeds it
    /// to [`advance`](Self::advance).
    pub fn tick(&mut self) {
        self.wait_for_frame();
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f64() * 1000.0;
        self.last = now;
        self.advance(elapsed);
    }

    /// Accumulate an externally measured elapsed time, in milliseconds.
    ///
    /// `tick()` calls this with wall-clock measurements; tests call it
    /// directly to drive the accumulator deterministically.
    pub fn advance(&mut self, elapsed_ms: f64) {
        self.elapsed_ms = elapsed_ms;
        self.now_ms += elapsed_ms;
        self.lag_ms += elapsed_ms;
        self.interpolation = self.lag_ms / self.update_interval_ms;
    }

    /// Consume one pending fixed update, if any.
    ///
    /// Returns `true` and subtracts exactly one fixed interval from the lag
    /// when `lag >= interval`. The caller loops on this after each `tick()`
    /// to run zero, one, or several catch-up updates. The clock itself does
    /// not bound catch-up; the engine loop caps steps per frame and calls
    /// [`discard_lag`](Self::discard_lag) when the cap is hit.
    pub fn is_update(&mut self) -> bool {
        if self.lag_ms >= self.update_interval_ms {
            self.lag_ms -= self.update_interval_ms;
            self.interpolation = self.lag_ms / self.update_interval_ms;
            return true;
        }
        false
    }

    /// Drop whole pending intervals from the lag, keeping the sub-interval
    /// remainder. Returns the number of milliseconds discarded.
    pub fn discard_lag(&mut self) -> f64 {
        let whole = (self.lag_ms / self.update_interval_ms).floor() * self.update_interval_ms;
        if whole > 0.0 {
            self.lag_ms -= whole;
            self.interpolation = self.lag_ms / self.update_interval_ms;
        }
        whole
    }

    /// Raw interpolation fraction, `lag / interval`.
    ///
    /// Not clamped here: the value may exceed 1.0 between `tick()` and the
    /// catch-up loop. Drawing code clamps to `[0, 1]` when consuming it.
    pub fn interpolation(&self) -> f32 {
        self.interpolation as f32
    }

    /// Fixed simulation step in seconds, for rate-based movement.
    pub fn fixed_delta_seconds(&self) -> f32 {
        (self.update_interval_ms / 1000.0) as f32
    }

    /// Fixed simulation step in milliseconds.
    pub fn update_interval_ms(&self) -> f64 {
        self.update_interval_ms
    }

    /// Pending lag in milliseconds.
    pub fn lag_ms(&self) -> f64 {
        self.lag_ms
    }

    /// Real elapsed time of the last frame, in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Cumulative real time observed by the clock, in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Target framerate in frames per second (0 = uncapped).
    pub fn framerate(&self) -> u32 {
        self.framerate
    }

    /// Switch the pacing strategy.
    pub fn set_pacing(&mut self, pacing: PacingMode) {
        info!("Clock pacing set to {:?}.", pacing);
        self.pacing = pacing;
    }

    fn wait_for_frame(&self) {
        if self.framerate == 0 {
            return;
        }
        let frame = Duration::from_secs_f64(1.0 / self.framerate as f64);
        let deadline = self.last + frame;
        match self.pacing {
            PacingMode::Sleep => {
                let now = Instant::now();
                if now < deadline {
                    std::thread::sleep(deadline - now);
                }
            }
            PacingMode::Stable => {
                while Instant::now() < deadline {
                    std::hint::spin_loop();
                }
            }
        }
    }
}
