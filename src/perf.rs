//! Performance monitoring
//!
//! Tracks frame timing with a paint/present breakdown.
//! In release builds, all timing methods compile to no-ops for zero overhead.

#[cfg(debug_assertions)]
use std::collections::VecDeque;
#[cfg(debug_assertions)]
use std::time::{Duration, Instant};

#[cfg(debug_assertions)]
pub const PERF_HISTORY_SIZE: usize = 60;

/// How many frames between periodic debug summaries
pub const SUMMARY_INTERVAL: u64 = 300;

#[cfg(debug_assertions)]
#[derive(Default)]
pub struct PerfStats {
    pub frame_start: Option<Instant>,
    pub last_frame_time: Duration,
    pub frame_times: VecDeque<Duration>,

    /// Clear + grid + rasterize
    pub paint_time: Duration,
    /// Composite + surface present
    pub present_time: Duration,

    pub paint_history: VecDeque<Duration>,
    pub present_history: VecDeque<Duration>,

    pub frames: u64,
}

#[cfg(not(debug_assertions))]
#[derive(Default)]
pub struct PerfStats;

/// Timer guard that records elapsed time when dropped (debug only)
#[cfg(debug_assertions)]
pub struct TimerGuard<'a> {
    start: Instant,
    target: &'a mut Duration,
}

#[cfg(not(debug_assertions))]
pub struct TimerGuard;

#[cfg(debug_assertions)]
impl<'a> TimerGuard<'a> {
    fn new(target: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            target,
        }
    }
}

#[cfg(debug_assertions)]
impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        *self.target = self.start.elapsed();
    }
}

#[cfg(debug_assertions)]
fn push_history(history: &mut VecDeque<Duration>, value: Duration) {
    history.push_back(value);
    if history.len() > PERF_HISTORY_SIZE {
        history.pop_front();
    }
}

#[cfg(debug_assertions)]
impl PerfStats {
    #[inline(always)]
    pub fn start_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Close the current frame. Returns true every [`SUMMARY_INTERVAL`] frames.
    #[inline(always)]
    pub fn record_frame_time(&mut self) -> bool {
        let Some(start) = self.frame_start.take() else {
            return false;
        };
        self.last_frame_time = start.elapsed();
        push_history(&mut self.frame_times, self.last_frame_time);
        push_history(&mut self.paint_history, self.paint_time);
        push_history(&mut self.present_history, self.present_time);
        self.frames += 1;
        self.frames % SUMMARY_INTERVAL == 0
    }

    #[inline(always)]
    pub fn time_paint(&mut self) -> TimerGuard<'_> {
        TimerGuard::new(&mut self.paint_time)
    }

    #[inline(always)]
    pub fn time_present(&mut self) -> TimerGuard<'_> {
        TimerGuard::new(&mut self.present_time)
    }

    pub fn avg_frame_time(&self) -> Duration {
        average(&self.frame_times)
    }

    pub fn fps(&self) -> f64 {
        let avg = self.avg_frame_time();
        if avg.as_secs_f64() > 0.0 {
            1.0 / avg.as_secs_f64()
        } else {
            0.0
        }
    }

    /// One-line summary for the log
    pub fn summary(&self) -> String {
        format!(
            "frames={} avg={:.2}ms (paint {:.2}ms, present {:.2}ms) fps={:.0}",
            self.frames,
            self.avg_frame_time().as_secs_f64() * 1000.0,
            average(&self.paint_history).as_secs_f64() * 1000.0,
            average(&self.present_history).as_secs_f64() * 1000.0,
            self.fps()
        )
    }
}

#[cfg(debug_assertions)]
fn average(history: &VecDeque<Duration>) -> Duration {
    if history.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = history.iter().sum();
    total / history.len() as u32
}

#[cfg(not(debug_assertions))]
impl PerfStats {
    #[inline(always)]
    pub fn start_frame(&mut self) {}

    #[inline(always)]
    pub fn record_frame_time(&mut self) -> bool {
        false
    }

    #[inline(always)]
    pub fn time_paint(&mut self) -> TimerGuard {
        TimerGuard
    }

    #[inline(always)]
    pub fn time_present(&mut self) -> TimerGuard {
        TimerGuard
    }

    pub fn summary(&self) -> String {
        String::new()
    }
}
