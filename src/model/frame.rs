//! Frame driver state: redraw coalescing between refresh opportunities

/// Whether a repaint is waiting for the next refresh opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameState {
    #[default]
    Idle,
    RedrawScheduled,
}

/// Surface changes collected while a repaint was pending
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScheduledFrame {
    /// Latest reported surface size, if a resize happened
    pub size: Option<(u32, u32)>,
    /// Latest reported density scale, if it changed
    pub scale: Option<f64>,
}

impl ScheduledFrame {
    pub fn resizes(&self) -> bool {
        self.size.is_some() || self.scale.is_some()
    }
}

/// Coalesces redraw triggers into at most one pending repaint
///
/// Triggers arriving while a repaint is scheduled only overwrite the pending
/// values; the repaint reads whatever is current when it runs.
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    state: FrameState,
    pending: ScheduledFrame,
    repaints: u64,
    last_dot_count: usize,
}

impl FrameDriver {
    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn is_scheduled(&self) -> bool {
        self.state == FrameState::RedrawScheduled
    }

    /// Request a repaint. Returns true only on the Idle -> RedrawScheduled
    /// transition, i.e. when the host must be asked for a refresh.
    pub fn request(&mut self) -> bool {
        let was_idle = self.state == FrameState::Idle;
        self.state = FrameState::RedrawScheduled;
        was_idle
    }

    pub fn request_resize(&mut self, width: u32, height: u32) -> bool {
        self.pending.size = Some((width, height));
        self.request()
    }

    pub fn request_scale(&mut self, scale: f64) -> bool {
        self.pending.scale = Some(scale);
        self.request()
    }

    /// Consume the scheduled repaint, returning to Idle.
    /// Returns `None` when nothing was scheduled.
    pub fn begin_frame(&mut self) -> Option<ScheduledFrame> {
        if self.state == FrameState::Idle {
            return None;
        }
        self.state = FrameState::Idle;
        Some(std::mem::take(&mut self.pending))
    }

    pub(crate) fn record_repaint(&mut self, dots: usize) {
        self.repaints += 1;
        self.last_dot_count = dots;
    }

    /// Total full-pattern repaints since startup
    pub fn repaints(&self) -> u64 {
        self.repaints
    }

    /// Dots painted by the most recent repaint
    pub fn last_dot_count(&self) -> usize {
        self.last_dot_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_request_schedules() {
        let mut driver = FrameDriver::default();
        assert!(driver.request());
        assert!(!driver.request());
        assert!(!driver.request_resize(10, 10));
        assert_eq!(driver.state(), FrameState::RedrawScheduled);
    }

    #[test]
    fn test_begin_frame_returns_latest_values() {
        let mut driver = FrameDriver::default();
        driver.request_resize(10, 10);
        driver.request_resize(20, 30);
        driver.request_scale(2.0);

        let frame = driver.begin_frame().unwrap();
        assert_eq!(frame.size, Some((20, 30)));
        assert_eq!(frame.scale, Some(2.0));
        assert_eq!(driver.state(), FrameState::Idle);
        assert!(driver.begin_frame().is_none());
    }

    #[test]
    fn test_pending_values_do_not_leak_into_next_frame() {
        let mut driver = FrameDriver::default();
        driver.request_resize(5, 5);
        driver.begin_frame();

        driver.request();
        let frame = driver.begin_frame().unwrap();
        assert!(!frame.resizes());
    }
}
