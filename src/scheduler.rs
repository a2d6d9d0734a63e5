//! Repeating-timer primitives the countdown runs on.
//!
//! A [`Scheduler`] hands out a handle per tick stream; dropping the handle
//! cancels the stream. [`IntervalScheduler`] drives ticks from the browser's
//! `setInterval`, [`ManualScheduler`] from an explicit clock that callers
//! advance themselves.

use gloo_timers::callback::Interval;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked once per tick.
pub type Tick = Box<dyn FnMut()>;

/// Something that can call a closure repeatedly at a fixed interval.
pub trait Scheduler {
    /// Keeps the tick stream alive. Dropping it cancels the stream.
    type Handle;

    /// Call `tick` every `interval_ms` milliseconds until the handle is dropped.
    fn every(&self, interval_ms: u32, tick: Tick) -> Self::Handle;
}

/// `setInterval`-backed scheduler for the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, interval_ms: u32, tick: Tick) -> Interval {
        Interval::new(interval_ms, tick)
    }
}

struct Entry {
    id: u64,
    interval_ms: u64,
    next_due: u64,
    tick: Option<Tick>,
    cancelled: bool,
}

#[derive(Default)]
struct Clock {
    now: Cell<u64>,
    next_id: Cell<u64>,
    entries: RefCell<Vec<Rc<RefCell<Entry>>>>,
}

/// Fake clock: ticks fire only when [`ManualScheduler::advance`] is called.
///
/// Clones share the same clock, so a test can keep one clone and hand the
/// other to the code under test.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<Clock>,
}

/// Handle for a tick stream on a [`ManualScheduler`].
pub struct ManualTimer {
    entry: Rc<RefCell<Entry>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        // The tick may be running right now (it is taken out of the entry
        // while it runs), so only flag the entry and drop what is there.
        let tick = {
            let mut entry = self.entry.borrow_mut();
            entry.cancelled = true;
            entry.tick.take()
        };
        drop(tick);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on this clock.
    pub fn now(&self) -> u64 {
        self.clock.now.get()
    }

    /// Number of tick streams that have not been cancelled.
    pub fn active(&self) -> usize {
        self.clock
            .entries
            .borrow()
            .iter()
            .filter(|e| !e.borrow().cancelled)
            .count()
    }

    /// Move the clock forward by `ms`, firing every tick that falls due on
    /// the way in time order. Ticks scheduled for the same instant fire in
    /// registration order.
    pub fn advance(&self, ms: u64) {
        let until = self.now() + ms;

        while let Some(entry) = self.next_due(until) {
            let (due, tick) = {
                let mut e = entry.borrow_mut();
                let due = e.next_due;
                e.next_due += e.interval_ms;
                (due, e.tick.take())
            };
            self.clock.now.set(due);

            if let Some(mut tick) = tick {
                tick();
                let mut e = entry.borrow_mut();
                if !e.cancelled {
                    e.tick = Some(tick);
                }
            }
        }

        self.clock.now.set(until);
        self.clock
            .entries
            .borrow_mut()
            .retain(|e| !e.borrow().cancelled);
    }

    fn next_due(&self, until: u64) -> Option<Rc<RefCell<Entry>>> {
        self.clock
            .entries
            .borrow()
            .iter()
            .filter(|e| {
                let e = e.borrow();
                !e.cancelled && e.next_due <= until
            })
            .min_by_key(|e| {
                let e = e.borrow();
                (e.next_due, e.id)
            })
            .cloned()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn every(&self, interval_ms: u32, tick: Tick) -> ManualTimer {
        // A zero interval would never let `advance` make progress.
        let interval_ms = u64::from(interval_ms.max(1));
        let id = self.clock.next_id.get();
        self.clock.next_id.set(id + 1);

        let entry = Rc::new(RefCell::new(Entry {
            id,
            interval_ms,
            next_due: self.now() + interval_ms,
            tick: Some(tick),
            cancelled: false,
        }));
        self.clock.entries.borrow_mut().push(entry.clone());
        ManualTimer { entry }
    }
}
