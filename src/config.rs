//! Widget-level configuration constants.

// Ripple markup
pub const RIPPLE_SELECTOR: &str = ".ripplelink";
pub const RIPPLE_HOST_CLASS: &str = "ripplelink";
pub const INK_CLASS: &str = "ink";
pub const INK_SELECTOR: &str = ".ink";
pub const ANIMATE_CLASS: &str = "animate";

// Countdown defaults, used when an option is missing or zero
pub const DEFAULT_SECONDS: u32 = 10;
pub const DEFAULT_INTERVAL_MS: u32 = 1000;
