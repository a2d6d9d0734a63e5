//! Yew components wrapping the ripple and the countdown.

use crate::config::{DEFAULT_INTERVAL_MS, DEFAULT_SECONDS, RIPPLE_HOST_CLASS};
use crate::countdown::CountdownOptions;
use crate::dom::ripple_on_click;
use crate::hooks::use_countdown;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Format seconds as `m:ss`.
pub fn format_remaining(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Properties, PartialEq)]
pub struct RippleLinkProps {
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// `<a class="ripplelink">` that plays the ink ripple on every click before
/// forwarding the event to `onclick`.
#[function_component(RippleLink)]
pub fn ripple_link(props: &RippleLinkProps) -> Html {
    let node = use_node_ref();

    let onclick = {
        let node = node.clone();
        let forward = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(host) = node.cast::<HtmlElement>() {
                ripple_on_click(&host, &e);
            }
            forward.emit(e);
        })
    };

    html! {
        <a ref={node}
            class={classes!(RIPPLE_HOST_CLASS, props.class.clone())}
            href={props.href.clone()}
            {onclick}
        >
            { props.children.clone() }
        </a>
    }
}

/// Changing `seconds` or `interval_ms` replaces the running countdown with a
/// fresh, stopped one.
#[derive(Properties, PartialEq)]
pub struct CountdownBadgeProps {
    #[prop_or(DEFAULT_SECONDS)]
    pub seconds: u32,
    #[prop_or(DEFAULT_INTERVAL_MS)]
    pub interval_ms: u32,
}

/// Remaining time plus start/stop and reset controls.
#[function_component(CountdownBadge)]
pub fn countdown_badge(props: &CountdownBadgeProps) -> Html {
    let countdown = use_countdown(CountdownOptions::new(props.seconds, props.interval_ms));

    let toggle = if countdown.running {
        html! {
            <RippleLink class="countdown-stop" onclick={countdown.stop.reform(|_: MouseEvent| ())}>
                { "Stop" }
            </RippleLink>
        }
    } else {
        html! {
            <RippleLink class="countdown-start" onclick={countdown.start.reform(|_: MouseEvent| ())}>
                { "Start" }
            </RippleLink>
        }
    };

    html! {
        <div class={classes!("countdown", countdown.running.then_some("running"))}>
            <span class="countdown-remaining">{ format_remaining(countdown.remaining) }</span>
            { toggle }
            <RippleLink class="countdown-reset" onclick={countdown.reset.reform(|_: MouseEvent| ())}>
                { "Reset" }
            </RippleLink>
        </div>
    }
}
