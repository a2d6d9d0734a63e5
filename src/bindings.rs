//! JavaScript entry points.
//!
//! ```js
//! import init, { Countdown, bindRipples } from "./material_widgets.js";
//! await init();
//! bindRipples();
//! const c = new Countdown({
//!     seconds: 30,
//!     intervalUpdate: 1000,
//!     onUpdate: (remaining) => label.textContent = remaining,
//!     onEnd: () => form.submit(),
//! });
//! c.start();
//! ```

use crate::config::RIPPLE_SELECTOR;
use crate::countdown::{Countdown, CountdownOptions};
use crate::dom::bind_ripples;
use crate::error::WidgetError;
use crate::scheduler::IntervalScheduler;
use js_sys::{Function, Reflect};
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Look up an optional callback property on the options object.
fn callback(options: &JsValue, name: &'static str) -> Result<Option<Function>, WidgetError> {
    let value = Reflect::get(options, &JsValue::from_str(name)).map_err(WidgetError::dom)?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    value
        .dyn_into::<Function>()
        .map(Some)
        .map_err(|_| WidgetError::NotAFunction(name))
}

fn parse_options(
    options: &JsValue,
) -> Result<(CountdownOptions, Option<Function>, Option<Function>), WidgetError> {
    if options.is_undefined() || options.is_null() {
        return Ok((CountdownOptions::default(), None, None));
    }
    let parsed: CountdownOptions = serde_wasm_bindgen::from_value(options.clone())?;
    Ok((
        parsed,
        callback(options, "onUpdate")?,
        callback(options, "onEnd")?,
    ))
}

/// `Countdown` as seen from JavaScript.
#[wasm_bindgen(js_name = Countdown)]
pub struct JsCountdown {
    inner: Countdown<IntervalScheduler>,
}

#[wasm_bindgen(js_class = Countdown)]
impl JsCountdown {
    /// `new Countdown({ seconds, intervalUpdate, onUpdate, onEnd })`
    ///
    /// An exception thrown by `onUpdate` or `onEnd` is logged and swallowed
    /// instead of unwinding through the timer. The tick carries on as if the
    /// callback had returned, so a throwing `onUpdate(0)` still stops the
    /// countdown and fires `onEnd`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<JsCountdown, JsValue> {
        console_error_panic_hook::set_once();

        let (options, on_update, on_end) = parse_options(&options)?;
        let mut inner = Countdown::new(options, IntervalScheduler);

        if let Some(f) = on_update {
            inner = inner.on_update(move |remaining| {
                if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from(remaining)) {
                    error!("onUpdate threw: {:?}", e);
                }
            });
        }
        if let Some(f) = on_end {
            inner = inner.on_end(move || {
                if let Err(e) = f.call0(&JsValue::NULL) {
                    error!("onEnd threw: {:?}", e);
                }
            });
        }

        Ok(JsCountdown { inner })
    }

    pub fn start(&self) {
        self.inner.start();
    }

    pub fn stop(&self) {
        self.inner.stop();
    }

    pub fn reset(&self) {
        self.inner.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn remaining(&self) -> u32 {
        self.inner.remaining()
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner.is_running()
    }
}

/// Bind the ripple to every element matching `selector` (default
/// `.ripplelink`) for the life of the page. Returns how many were bound.
#[wasm_bindgen(js_name = bindRipples)]
pub fn bind_ripples_js(selector: Option<String>) -> Result<u32, JsValue> {
    console_error_panic_hook::set_once();

    let selector = selector.as_deref().unwrap_or(RIPPLE_SELECTOR);
    let binding = bind_ripples(&gloo_utils::document(), selector)?;
    let count = binding.len() as u32;
    binding.forget();

    info!("ripple bound to {} element(s)", count);
    Ok(count)
}
