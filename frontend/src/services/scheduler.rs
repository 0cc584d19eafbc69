use gloo::timers::callback::{Interval, Timeout};
use shared::Scheduler;

/// `Scheduler` on top of browser timers
#[derive(Clone, Copy, Default, PartialEq)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }

    fn cancel(&self, handle: Interval) {
        drop(handle);
    }

    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
