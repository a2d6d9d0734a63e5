//! Small browser UI helpers compiled to WebAssembly: a click "ink" ripple for
//! elements marked with `ripplelink`, and a countdown timer with update and
//! end callbacks.
//!
//! Both are usable from JavaScript (see [`bindings`]) and from Yew (see
//! [`hooks`] and [`components`]). The countdown and the ripple algorithm
//! are host-agnostic: they run against the [`scheduler::Scheduler`] and
//! [`ripple::RippleSurface`] traits, so tests drive them with a manual
//! clock and an in-memory element.

pub mod bindings;
pub mod components;
pub mod config;
pub mod countdown;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod ripple;
pub mod scheduler;

pub use countdown::{Countdown, CountdownOptions, CountdownState};
pub use error::WidgetError;
pub use ripple::{ripple, InkLayout, Point};
pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler};
