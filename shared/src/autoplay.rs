use crate::scheduler::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutoplayError {
    #[error("Autoplay is already running")]
    AlreadyRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayState {
    Stopped,
    Running,
}

/// Periodic tick owner. At most one live timer at a time.
pub struct AutoplayController<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> AutoplayController<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            handle: None,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn state(&self) -> AutoplayState {
        if self.handle.is_some() {
            AutoplayState::Running
        } else {
            AutoplayState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Arm the timer. The first tick lands a full period from now.
    pub fn start(&mut self, on_tick: impl FnMut() + 'static) -> Result<(), AutoplayError> {
        if self.handle.is_some() {
            log::warn!("autoplay start rejected: timer already live");
            return Err(AutoplayError::AlreadyRunning);
        }
        self.handle = Some(self.scheduler.every(self.period_ms, Box::new(on_tick)));
        log::debug!("autoplay started ({}ms)", self.period_ms);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel(handle);
            log::debug!("autoplay stopped");
        }
    }
}

impl<S: Scheduler> Drop for AutoplayController<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_double_start_rejected() {
        let scheduler = ManualScheduler::new();
        let mut autoplay = AutoplayController::new(scheduler.clone(), 5000);
        assert!(autoplay.start(|| {}).is_ok());
        assert_eq!(autoplay.start(|| {}), Err(AutoplayError::AlreadyRunning));
        assert_eq!(scheduler.live_timers(), 1);
    }

    #[test]
    fn test_restart_after_stop() {
        let scheduler = ManualScheduler::new();
        let mut autoplay = AutoplayController::new(scheduler.clone(), 5000);
        autoplay.start(|| {}).unwrap();
        autoplay.stop();
        assert_eq!(autoplay.state(), AutoplayState::Stopped);
        assert_eq!(scheduler.live_timers(), 0);
        assert!(autoplay.start(|| {}).is_ok());
        assert_eq!(autoplay.state(), AutoplayState::Running);
    }

    #[test]
    fn test_stop_when_stopped_is_noop() {
        let scheduler = ManualScheduler::new();
        let mut autoplay = AutoplayController::new(scheduler.clone(), 5000);
        autoplay.stop();
        assert!(!autoplay.is_running());
    }

    #[test]
    fn test_ticks_every_period() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let mut autoplay = AutoplayController::new(scheduler.clone(), 5000);
        autoplay.start(move || counter.set(counter.get() + 1)).unwrap();
        scheduler.advance(15_000);
        assert_eq!(ticks.get(), 3);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let scheduler = ManualScheduler::new();
        {
            let mut autoplay = AutoplayController::new(scheduler.clone(), 5000);
            autoplay.start(|| {}).unwrap();
        }
        assert_eq!(scheduler.live_timers(), 0);
    }
}
