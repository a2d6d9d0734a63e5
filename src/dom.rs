//! Browser host for the ripple: `web-sys` implementations of
//! [`RippleSurface`] and [`InkElement`], and click-listener binding for
//! every element carrying the ripple class.

use crate::config::{INK_CLASS, INK_SELECTOR};
use crate::error::WidgetError;
use crate::ripple::{ripple, Bounds, InkElement, Point, RippleSurface, Size};
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

/// A clicked ripple host element.
pub struct DomSurface {
    host: HtmlElement,
}

impl DomSurface {
    pub fn new(host: HtmlElement) -> Self {
        Self { host }
    }
}

impl RippleSurface for DomSurface {
    type Ink = DomInk;

    fn find_ink(&self) -> Result<Option<DomInk>, WidgetError> {
        let found = self
            .host
            .query_selector(INK_SELECTOR)
            .map_err(WidgetError::dom)?;
        Ok(found
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomInk))
    }

    fn prepend_ink(&self) -> Result<DomInk, WidgetError> {
        let document = self.host.owner_document().ok_or(WidgetError::NoDocument)?;
        let ink = document
            .create_element("span")
            .map_err(WidgetError::dom)?
            .dyn_into::<HtmlElement>()
            .map_err(|el| WidgetError::dom(el.into()))?;
        ink.set_class_name(INK_CLASS);
        self.host.prepend_with_node_1(&ink).map_err(WidgetError::dom)?;
        Ok(DomInk(ink))
    }

    fn bounds(&self) -> Bounds {
        let rect = self.host.get_bounding_client_rect();
        Bounds {
            left: rect.left(),
            top: rect.top(),
            width: f64::from(self.host.offset_width()),
            height: f64::from(self.host.offset_height()),
        }
    }
}

/// The `<span class="ink">` child.
pub struct DomInk(HtmlElement);

impl DomInk {
    fn set_px(&self, property: &str, value: f64) -> Result<(), WidgetError> {
        self.0
            .style()
            .set_property(property, &format!("{}px", value))
            .map_err(WidgetError::dom)
    }
}

impl InkElement for DomInk {
    fn add_class(&self, class: &str) -> Result<(), WidgetError> {
        self.0.class_list().add_1(class).map_err(WidgetError::dom)
    }

    fn remove_class(&self, class: &str) -> Result<(), WidgetError> {
        self.0.class_list().remove_1(class).map_err(WidgetError::dom)
    }

    // Layout size, so a running scale animation does not count as a size.
    fn size(&self) -> Size {
        Size {
            width: f64::from(self.0.offset_width()),
            height: f64::from(self.0.offset_height()),
        }
    }

    fn set_size(&self, size: Size) -> Result<(), WidgetError> {
        self.set_px("width", size.width)?;
        self.set_px("height", size.height)
    }

    fn set_origin(&self, origin: Point) -> Result<(), WidgetError> {
        self.set_px("top", origin.y)?;
        self.set_px("left", origin.x)
    }
}

/// Run the ripple for a mouse event on `host`. Failures are logged and
/// otherwise ignored.
pub fn ripple_on_click(host: &HtmlElement, event: &MouseEvent) {
    let click = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    if let Err(e) = ripple(&DomSurface::new(host.clone()), click) {
        warn!("ripple failed: {}", e);
    }
}

type ClickListener = Closure<dyn FnMut(MouseEvent)>;

/// Click listeners installed by [`bind_ripples`]. Dropping the binding
/// removes them again.
pub struct RippleBinding {
    listeners: Vec<(HtmlElement, ClickListener)>,
}

impl RippleBinding {
    /// Number of elements bound.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Keep the listeners installed for the rest of the page's life.
    pub fn forget(mut self) {
        for (_, listener) in self.listeners.drain(..) {
            listener.forget();
        }
    }
}

impl Drop for RippleBinding {
    fn drop(&mut self) {
        for (element, listener) in self.listeners.drain(..) {
            if let Err(e) = element
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            {
                warn!("failed to remove ripple listener: {}", WidgetError::dom(e));
            }
        }
    }
}

/// Attach the ripple click handler to every element under `document`
/// matching `selector`.
pub fn bind_ripples(document: &Document, selector: &str) -> Result<RippleBinding, WidgetError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(WidgetError::dom)?;

    let mut binding = RippleBinding {
        listeners: Vec::with_capacity(nodes.length() as usize),
    };

    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };

        let host = element.clone();
        let listener = ClickListener::new(move |event: MouseEvent| ripple_on_click(&host, &event));
        element
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(WidgetError::dom)?;
        binding.listeners.push((element, listener));
    }

    debug!("bound ripple to {} element(s) matching {}", binding.len(), selector);
    Ok(binding)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::config::RIPPLE_SELECTOR;
    use wasm_bindgen_test::*;
    use web_sys::MouseEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Fixed-position `.ripplelink` host at (left, top) with the given size.
    fn host(document: &Document, left: i32, top: i32, width: i32, height: i32) -> HtmlElement {
        let el = document
            .create_element("a")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        el.set_class_name("ripplelink");
        el.set_attribute(
            "style",
            &format!(
                "position: fixed; display: block; left: {}px; top: {}px; width: {}px; height: {}px; margin: 0; padding: 0; border: 0;",
                left, top, width, height
            ),
        )
        .unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    fn click(el: &HtmlElement, x: i32, y: i32) {
        let init = MouseEventInit::new();
        init.set_client_x(x);
        init.set_client_y(y);
        let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
        el.dispatch_event(&event).unwrap();
    }

    fn ink_count(el: &HtmlElement) -> u32 {
        el.query_selector_all(INK_SELECTOR).unwrap().length()
    }

    #[wasm_bindgen_test]
    fn binds_every_match_and_reuses_ink() {
        let document = gloo_utils::document();
        let a = host(&document, 0, 0, 50, 20);
        let b = host(&document, 0, 100, 50, 20);

        let binding = bind_ripples(&document, RIPPLE_SELECTOR).unwrap();
        assert_eq!(binding.len(), 2);

        click(&a, 10, 10);
        click(&a, 20, 10);
        assert_eq!(ink_count(&a), 1);
        assert_eq!(ink_count(&b), 0);

        let ink = a.query_selector(INK_SELECTOR).unwrap().unwrap();
        assert!(ink.class_list().contains(crate::config::ANIMATE_CLASS));

        drop(binding);
        click(&b, 10, 110);
        assert_eq!(ink_count(&b), 0);

        a.remove();
        b.remove();
    }

    #[wasm_bindgen_test]
    fn centres_ink_on_client_point() {
        let document = gloo_utils::document();
        let el = host(&document, 100, 50, 200, 40);

        let binding = bind_ripples(&document, RIPPLE_SELECTOR).unwrap();
        click(&el, 150, 60);

        let ink = el
            .query_selector(INK_SELECTOR)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        let style = ink.style();
        assert_eq!(style.get_property_value("width").unwrap(), "200px");
        assert_eq!(style.get_property_value("left").unwrap(), "-50px");
        assert_eq!(style.get_property_value("top").unwrap(), "-90px");

        drop(binding);
        el.remove();
    }
}
