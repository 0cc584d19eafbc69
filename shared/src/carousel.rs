//! Testimonial carousel: a cyclic index advanced by autoplay.

use std::cell::RefCell;
use std::rc::Rc;

use crate::autoplay::{AutoplayController, AutoplayError};
use crate::cyclic_index::{CyclicIndex, NavigationError};
use crate::scheduler::Scheduler;

pub struct Carousel<S: Scheduler> {
    index: Rc<RefCell<CyclicIndex>>,
    autoplay: AutoplayController<S>,
    on_change: Rc<dyn Fn(usize)>,
}

impl<S: Scheduler> Carousel<S> {
    /// `on_change` receives every new slide index, from autoplay or selection
    pub fn new(
        slides: usize,
        scheduler: S,
        period_ms: u32,
        on_change: impl Fn(usize) + 'static,
    ) -> Result<Self, NavigationError> {
        Ok(Self {
            index: Rc::new(RefCell::new(CyclicIndex::new(slides)?)),
            autoplay: AutoplayController::new(scheduler, period_ms),
            on_change: Rc::new(on_change),
        })
    }

    pub fn current(&self) -> usize {
        self.index.borrow().current()
    }

    pub fn slides(&self) -> usize {
        self.index.borrow().size()
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn start(&mut self) -> Result<(), AutoplayError> {
        let index = self.index.clone();
        let on_change = self.on_change.clone();
        self.autoplay.start(move || {
            let current = index.borrow_mut().advance();
            on_change(current);
        })
    }

    pub fn stop(&mut self) {
        self.autoplay.stop();
    }

    /// Hover pauses
    pub fn pointer_enter(&mut self) {
        self.stop();
    }

    pub fn pointer_leave(&mut self) -> Result<(), AutoplayError> {
        self.start()
    }

    /// Manual jump. Restarts autoplay so the next tick is a full period away.
    pub fn select(&mut self, target: usize) -> Result<usize, NavigationError> {
        let size = self.slides();
        if target >= size {
            log::warn!("carousel select {} ignored, {} slides", target, size);
            return Err(NavigationError::IndexOutOfRange { index: target, size });
        }

        self.stop();
        let current = self.index.borrow_mut().jump_to(target)?;
        (self.on_change)(current);
        if let Err(e) = self.start() {
            log::warn!("carousel restart after select failed: {}", e);
        }
        Ok(current)
    }
}
