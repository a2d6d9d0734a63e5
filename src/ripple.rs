//! Click ripple ("ink") feedback.
//!
//! The algorithm is written against two small traits so it can run on any
//! host: [`RippleSurface`] is the clicked element, [`InkElement`] the single
//! child that gets animated. `crate::dom` implements both for the browser.

use crate::config::ANIMATE_CLASS;
use crate::error::WidgetError;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Host element geometry: top-left corner in the same coordinate space as
/// the click point, plus its outer (border-box) size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Width and height of the ink element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Where the ink ended up for one click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkLayout {
    pub size: Size,
    /// Top-left offset of the ink inside the host.
    pub origin: Point,
    /// `true` if this click created the ink element.
    pub created: bool,
}

/// The element a ripple plays on.
pub trait RippleSurface {
    type Ink: InkElement;

    /// The existing ink child, if any.
    fn find_ink(&self) -> Result<Option<Self::Ink>, WidgetError>;

    /// Insert a new ink element as the first child.
    fn prepend_ink(&self) -> Result<Self::Ink, WidgetError>;

    fn bounds(&self) -> Bounds;
}

/// The animated child element.
pub trait InkElement {
    fn add_class(&self, class: &str) -> Result<(), WidgetError>;
    fn remove_class(&self, class: &str) -> Result<(), WidgetError>;
    fn size(&self) -> Size;
    fn set_size(&self, size: Size) -> Result<(), WidgetError>;
    fn set_origin(&self, origin: Point) -> Result<(), WidgetError>;
}

/// Diameter for a fresh ink: the larger side of the host, so the circle
/// covers it wherever the click lands.
pub fn ink_diameter(bounds: &Bounds) -> f64 {
    bounds.width.max(bounds.height)
}

/// Top-left offset that centres an ink of `ink` size on `click`.
pub fn ink_origin(bounds: &Bounds, click: Point, ink: Size) -> Point {
    Point {
        x: click.x - bounds.left - ink.width / 2.0,
        y: click.y - bounds.top - ink.height / 2.0,
    }
}

/// Play the ripple for a click at `click` on `surface`.
///
/// Reuses the existing ink child or creates one, restarts its animation and
/// centres it under the pointer. An ink that already has a size keeps it.
pub fn ripple<S: RippleSurface>(surface: &S, click: Point) -> Result<InkLayout, WidgetError> {
    let (ink, created) = match surface.find_ink()? {
        Some(ink) => (ink, false),
        None => (surface.prepend_ink()?, true),
    };

    ink.remove_class(ANIMATE_CLASS)?;

    let bounds = surface.bounds();
    let mut size = ink.size();
    if size.is_empty() {
        size = Size::square(ink_diameter(&bounds));
        ink.set_size(size)?;
    }

    let origin = ink_origin(&bounds, click, size);
    ink.set_origin(origin)?;
    ink.add_class(ANIMATE_CLASS)?;

    Ok(InkLayout {
        size,
        origin,
        created,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeInk {
        classes: Vec<String>,
        size: Size,
        origin: Option<Point>,
        // Every class change in order, to check the animation restart.
        history: Vec<String>,
    }

    #[derive(Clone)]
    struct InkRef(Rc<RefCell<FakeInk>>);

    impl InkElement for InkRef {
        fn add_class(&self, class: &str) -> Result<(), WidgetError> {
            let mut ink = self.0.borrow_mut();
            if !ink.classes.iter().any(|c| c == class) {
                ink.classes.push(class.to_string());
            }
            ink.history.push(format!("+{}", class));
            Ok(())
        }

        fn remove_class(&self, class: &str) -> Result<(), WidgetError> {
            let mut ink = self.0.borrow_mut();
            ink.classes.retain(|c| c != class);
            ink.history.push(format!("-{}", class));
            Ok(())
        }

        fn size(&self) -> Size {
            self.0.borrow().size
        }

        fn set_size(&self, size: Size) -> Result<(), WidgetError> {
            self.0.borrow_mut().size = size;
            Ok(())
        }

        fn set_origin(&self, origin: Point) -> Result<(), WidgetError> {
            self.0.borrow_mut().origin = Some(origin);
            Ok(())
        }
    }

    struct FakeHost {
        bounds: Bounds,
        children: RefCell<Vec<InkRef>>,
    }

    impl FakeHost {
        fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
            Self {
                bounds: Bounds {
                    left,
                    top,
                    width,
                    height,
                },
                children: RefCell::new(Vec::new()),
            }
        }
    }

    impl RippleSurface for FakeHost {
        type Ink = InkRef;

        fn find_ink(&self) -> Result<Option<InkRef>, WidgetError> {
            Ok(self.children.borrow().first().cloned())
        }

        fn prepend_ink(&self) -> Result<InkRef, WidgetError> {
            let ink = InkRef(Rc::new(RefCell::new(FakeInk::default())));
            self.children.borrow_mut().insert(0, ink.clone());
            Ok(ink)
        }

        fn bounds(&self) -> Bounds {
            self.bounds
        }
    }

    #[test]
    fn first_click_creates_one_ink() {
        let host = FakeHost::new(100.0, 50.0, 200.0, 40.0);
        let layout = ripple(&host, Point::new(150.0, 60.0)).unwrap();

        assert!(layout.created);
        assert_eq!(host.children.borrow().len(), 1);
        assert_eq!(layout.size, Size::square(200.0));
        // Centre lands on the click: 50 - 100, 10 - 100.
        assert_eq!(layout.origin, Point::new(-50.0, -90.0));

        let ink = host.children.borrow()[0].clone();
        assert_eq!(ink.0.borrow().classes, vec![ANIMATE_CLASS.to_string()]);
        assert_eq!(ink.0.borrow().origin, Some(Point::new(-50.0, -90.0)));
    }

    #[test]
    fn second_click_reuses_and_restarts_animation() {
        let host = FakeHost::new(0.0, 0.0, 80.0, 120.0);
        ripple(&host, Point::new(10.0, 10.0)).unwrap();
        let layout = ripple(&host, Point::new(70.0, 100.0)).unwrap();

        assert!(!layout.created);
        assert_eq!(host.children.borrow().len(), 1);

        let ink = host.children.borrow()[0].clone();
        let history = ink.0.borrow().history.clone();
        assert_eq!(history, vec!["-animate", "+animate", "-animate", "+animate"]);
        assert_eq!(layout.origin, Point::new(10.0, 40.0));
    }

    #[test]
    fn sized_ink_keeps_its_size() {
        let host = FakeHost::new(0.0, 0.0, 100.0, 100.0);
        ripple(&host, Point::new(50.0, 50.0)).unwrap();

        let host = FakeHost {
            bounds: Bounds {
                width: 300.0,
                ..host.bounds
            },
            children: host.children,
        };
        let layout = ripple(&host, Point::new(50.0, 50.0)).unwrap();
        assert_eq!(layout.size, Size::square(100.0));
    }

    #[test]
    fn diameter_is_larger_side() {
        let tall = Bounds {
            width: 30.0,
            height: 90.0,
            ..Default::default()
        };
        assert_eq!(ink_diameter(&tall), 90.0);
        assert_eq!(
            ink_origin(&tall, Point::new(15.0, 45.0), Size::square(90.0)),
            Point::new(-30.0, 0.0)
        );
    }
}
