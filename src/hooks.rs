use crate::countdown::{Countdown, CountdownOptions};
use crate::scheduler::IntervalScheduler;
use yew::prelude::*;

/// State and controls of a countdown driven by [`use_countdown`].
#[derive(Clone, PartialEq)]
pub struct UseCountdownHandle {
    /// Seconds left, updated on every tick.
    pub remaining: u32,
    /// Whether the countdown is currently ticking.
    pub running: bool,
    /// Start or resume; a finished countdown starts over.
    pub start: Callback<()>,
    pub stop: Callback<()>,
    /// Stop and rewind to the full length.
    pub reset: Callback<()>,
}

fn build_countdown(
    options: CountdownOptions,
    remaining: UseStateSetter<u32>,
    running: UseStateSetter<bool>,
) -> Countdown<IntervalScheduler> {
    Countdown::new(options, IntervalScheduler)
        .on_update(move |rem| remaining.set(rem))
        .on_end(move || running.set(false))
}

/// Custom hook owning a browser-timer countdown for the component's lifetime.
///
/// When `options` change to a different length or interval the countdown is
/// replaced by an idle one at full length; the old timer is cancelled. The
/// timer is also cancelled when the component unmounts.
#[hook]
pub fn use_countdown(options: CountdownOptions) -> UseCountdownHandle {
    let remaining = use_state(|| options.seconds());
    let running = use_state(|| false);

    let countdown = {
        let remaining = remaining.setter();
        let running = running.setter();
        use_mut_ref(move || build_countdown(options, remaining, running))
    };

    {
        let countdown = countdown.clone();
        let remaining = remaining.setter();
        let running = running.setter();
        use_effect_with(options, move |options| {
            if !countdown.borrow().matches(options) {
                let replacement = build_countdown(*options, remaining.clone(), running.clone());
                remaining.set(replacement.remaining());
                running.set(false);
                // Dropping the old countdown cancels its timer.
                *countdown.borrow_mut() = replacement;
            }
        });
    }

    let start = {
        let countdown = countdown.clone();
        let remaining = remaining.setter();
        let running = running.setter();
        Callback::from(move |_| {
            let countdown = countdown.borrow();
            countdown.start();
            // Starting a finished countdown rewinds it.
            remaining.set(countdown.remaining());
            running.set(true);
        })
    };

    let stop = {
        let countdown = countdown.clone();
        let running = running.setter();
        Callback::from(move |_| {
            countdown.borrow().stop();
            running.set(false);
        })
    };

    let reset = {
        let countdown = countdown.clone();
        let remaining = remaining.setter();
        let running = running.setter();
        Callback::from(move |_| {
            let countdown = countdown.borrow();
            countdown.reset();
            remaining.set(countdown.remaining());
            running.set(false);
        })
    };

    UseCountdownHandle {
        remaining: *remaining,
        running: *running,
        start,
        stop,
        reset,
    }
}
