//! Countdown timer with update and end callbacks.
//!
//! A [`Countdown`] counts down from a configured number of seconds, one
//! second per tick of its [`Scheduler`]. Every tick reports the new remaining
//! count through `on_update`; reaching zero stops the timer and then fires
//! `on_end` exactly once.
//!
//! # State machine
//! - `Idle -> Running` on [`Countdown::start`]
//! - `Running -> Running` on each tick while remaining > 0
//! - `Running -> Idle` on [`Countdown::stop`], or on reaching zero (before
//!   `on_end` fires)
//!
//! Callbacks are invoked with no internal borrow held, so they may call back
//! into the countdown (`start`, `stop`, `reset`).

use crate::config::{DEFAULT_INTERVAL_MS, DEFAULT_SECONDS};
use crate::scheduler::Scheduler;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Countdown configuration as accepted from JavaScript
/// (`{ seconds, intervalUpdate }`).
///
/// Missing or zero values fall back to [`DEFAULT_SECONDS`] and
/// [`DEFAULT_INTERVAL_MS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountdownOptions {
    pub seconds: Option<u32>,
    pub interval_update: Option<u32>,
}

impl CountdownOptions {
    pub fn new(seconds: u32, interval_ms: u32) -> Self {
        Self {
            seconds: Some(seconds),
            interval_update: Some(interval_ms),
        }
    }

    /// Countdown length in seconds.
    pub fn seconds(&self) -> u32 {
        self.seconds.filter(|&s| s > 0).unwrap_or(DEFAULT_SECONDS)
    }

    /// Tick interval in milliseconds.
    pub fn interval_ms(&self) -> u32 {
        self.interval_update
            .filter(|&ms| ms > 0)
            .unwrap_or(DEFAULT_INTERVAL_MS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Idle,
    Running,
}

struct Inner<H> {
    seconds: u32,
    interval_ms: u32,
    remaining: u32,
    timer: Option<H>,
    /// Bumped on every start so ticks from a replaced stream are ignored.
    run: u64,
    on_update: Rc<dyn Fn(u32)>,
    on_end: Rc<dyn Fn()>,
}

pub struct Countdown<S: Scheduler> {
    scheduler: S,
    inner: Rc<RefCell<Inner<S::Handle>>>,
}

impl<S> Countdown<S>
where
    S: Scheduler,
    S::Handle: 'static,
{
    /// Create an idle countdown with no-op callbacks.
    pub fn new(options: CountdownOptions, scheduler: S) -> Self {
        let seconds = options.seconds();
        Self {
            scheduler,
            inner: Rc::new(RefCell::new(Inner {
                seconds,
                interval_ms: options.interval_ms(),
                remaining: seconds,
                timer: None,
                run: 0,
                on_update: Rc::new(|_| {}),
                on_end: Rc::new(|| {}),
            })),
        }
    }

    /// Called after every tick with the new remaining count.
    pub fn on_update(self, f: impl Fn(u32) + 'static) -> Self {
        self.inner.borrow_mut().on_update = Rc::new(f);
        self
    }

    /// Called once when the count reaches zero.
    pub fn on_end(self, f: impl Fn() + 'static) -> Self {
        self.inner.borrow_mut().on_end = Rc::new(f);
        self
    }

    /// Start ticking, replacing any tick stream already running.
    ///
    /// A restart keeps the remaining count. A countdown that already reached
    /// zero is rewound to its full length first.
    pub fn start(&self) {
        let (interval_ms, run, previous) = {
            let mut inner = self.inner.borrow_mut();
            if inner.remaining == 0 {
                inner.remaining = inner.seconds;
            }
            inner.run += 1;
            debug!(
                "countdown start: {}s remaining, every {}ms",
                inner.remaining, inner.interval_ms
            );
            (inner.interval_ms, inner.run, inner.timer.take())
        };
        drop(previous);

        let weak = Rc::downgrade(&self.inner);
        let handle = self
            .scheduler
            .every(interval_ms, Box::new(move || tick(&weak, run)));
        self.inner.borrow_mut().timer = Some(handle);
    }

    /// Cancel the tick stream. Does nothing when already stopped.
    pub fn stop(&self) {
        let timer = self.inner.borrow_mut().timer.take();
        if timer.is_some() {
            debug!("countdown stopped with {}s remaining", self.remaining());
        }
        drop(timer);
    }

    /// Stop and rewind to the configured length.
    pub fn reset(&self) {
        self.stop();
        let mut inner = self.inner.borrow_mut();
        inner.remaining = inner.seconds;
    }

    pub fn remaining(&self) -> u32 {
        self.inner.borrow().remaining
    }

    pub fn seconds(&self) -> u32 {
        self.inner.borrow().seconds
    }

    pub fn interval_ms(&self) -> u32 {
        self.inner.borrow().interval_ms
    }

    /// Whether this countdown was built from options equivalent to `options`.
    pub fn matches(&self, options: &CountdownOptions) -> bool {
        let inner = self.inner.borrow();
        inner.seconds == options.seconds() && inner.interval_ms == options.interval_ms()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().timer.is_some()
    }

    pub fn state(&self) -> CountdownState {
        if self.is_running() {
            CountdownState::Running
        } else {
            CountdownState::Idle
        }
    }
}

fn tick<H>(weak: &Weak<RefCell<Inner<H>>>, run: u64) {
    let Some(inner) = weak.upgrade() else {
        return;
    };

    let (remaining, on_update, on_end, finished) = {
        let mut state = inner.borrow_mut();
        if state.run != run || state.timer.is_none() {
            return;
        }
        state.remaining = state.remaining.saturating_sub(1);
        let finished = if state.remaining == 0 {
            state.timer.take()
        } else {
            None
        };
        (
            state.remaining,
            state.on_update.clone(),
            state.on_end.clone(),
            finished,
        )
    };

    on_update(remaining);

    if let Some(timer) = finished {
        drop(timer);
        debug!("countdown finished");
        on_end();
    }
}
