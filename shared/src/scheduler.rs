//! Timer abstraction for the single-threaded UI loop.
//!
//! The browser build backs this with `gloo` timers. `ManualScheduler` runs on
//! a virtual clock so timer-driven behavior can be tested without waiting.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub trait Scheduler {
    /// Live repeating timer; passing it to `cancel` disarms it
    type Handle;

    /// Arm a repeating timer firing `tick` every `period_ms`
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);

    /// Fire-and-forget one-shot; cannot be cancelled
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ManualTimerId(u64);

struct RepeatingTimer {
    period_ms: u64,
    next_due: u64,
    // Taken out while the tick runs so it may call back into the scheduler
    tick: Option<Box<dyn FnMut()>>,
}

#[derive(Default)]
struct ManualState {
    now_ms: u64,
    next_id: u64,
    repeating: BTreeMap<u64, RepeatingTimer>,
    one_shots: BTreeMap<u64, (u64, Box<dyn FnOnce()>)>,
}

enum Due {
    Repeating(u64, u64),
    OneShot(u64, u64),
}

/// Deterministic scheduler driven by `advance`
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of armed repeating timers
    pub fn live_timers(&self) -> usize {
        self.state.borrow().repeating.len()
    }

    pub fn pending_one_shots(&self) -> usize {
        self.state.borrow().one_shots.len()
    }

    /// Move the clock forward, firing every timer that falls due in order
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now_ms + ms;
        while let Some(due) = self.next_due(target) {
            match due {
                Due::Repeating(id, at) => self.fire_repeating(id, at),
                Due::OneShot(id, at) => self.fire_one_shot(id, at),
            }
        }
        self.state.borrow_mut().now_ms = target;
    }

    fn next_due(&self, target: u64) -> Option<Due> {
        let state = self.state.borrow();
        let repeating = state
            .repeating
            .iter()
            .filter(|(_, timer)| timer.tick.is_some())
            .map(|(id, timer)| (timer.next_due, *id))
            .min();
        let one_shot = state
            .one_shots
            .iter()
            .map(|(id, (due, _))| (*due, *id))
            .min();

        match (repeating, one_shot) {
            (Some(r), Some(o)) if r <= o && r.0 <= target => Some(Due::Repeating(r.1, r.0)),
            (_, Some(o)) if o.0 <= target => Some(Due::OneShot(o.1, o.0)),
            (Some(r), _) if r.0 <= target => Some(Due::Repeating(r.1, r.0)),
            _ => None,
        }
    }

    fn fire_repeating(&self, id: u64, at: u64) {
        let tick = {
            let mut state = self.state.borrow_mut();
            state.now_ms = at;
            state.repeating.get_mut(&id).and_then(|timer| timer.tick.take())
        };
        let Some(mut tick) = tick else { return };
        tick();

        let mut state = self.state.borrow_mut();
        // Cancelled from inside its own tick: drop it
        if let Some(timer) = state.repeating.get_mut(&id) {
            timer.next_due = at + timer.period_ms;
            timer.tick = Some(tick);
        }
    }

    fn fire_one_shot(&self, id: u64, at: u64) {
        let task = {
            let mut state = self.state.borrow_mut();
            state.now_ms = at;
            state.one_shots.remove(&id)
        };
        if let Some((_, task)) = task {
            task();
        }
    }

    fn allocate_id(state: &mut ManualState) -> u64 {
        let id = state.next_id;
        state.next_id += 1;
        id
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimerId;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualTimerId {
        let mut state = self.state.borrow_mut();
        let id = Self::allocate_id(&mut state);
        let period_ms = u64::from(period_ms.max(1));
        let next_due = state.now_ms + period_ms;
        state.repeating.insert(
            id,
            RepeatingTimer {
                period_ms,
                next_due,
                tick: Some(tick),
            },
        );
        ManualTimerId(id)
    }

    fn cancel(&self, handle: ManualTimerId) {
        self.state.borrow_mut().repeating.remove(&handle.0);
    }

    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut state = self.state.borrow_mut();
        let id = Self::allocate_id(&mut state);
        let due = state.now_ms + u64::from(delay_ms);
        state.one_shots.insert(id, (due, task));
    }
}
