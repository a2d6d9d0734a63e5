//! Demo page for the widgets using Yew.
//! Renders a few ripple links and a countdown badge.

use log::info;
use material_widgets::components::{CountdownBadge, RippleLink};
use yew::prelude::*;

/// Demo component showing both widgets side by side.
#[function_component]
pub fn App() -> Html {
    let clicks = use_state(|| 0u32);

    let onclick = {
        let clicks = clicks.clone();
        Callback::from(move |_: MouseEvent| {
            info!("ripple link clicked");
            clicks.set(*clicks + 1);
        })
    };

    html! {
        <div class="container">
            <h1>{ "Material widgets" }</h1>

            <section class="ripple-demo">
                <h2>{ "Ripple" }</h2>
                <RippleLink class="button" onclick={onclick.clone()}>{ "Click me" }</RippleLink>
                <RippleLink class="button wide" onclick={onclick}>{ "Or this wider one" }</RippleLink>
                <p>{ format!("Clicked {} time(s)", *clicks) }</p>
            </section>

            <section class="countdown-demo">
                <h2>{ "Countdown" }</h2>
                <CountdownBadge seconds={10} />
                <CountdownBadge seconds={90} interval_ms={250} />
            </section>
        </div>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
