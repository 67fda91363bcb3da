/// Horizontal position of the pointer over a dock, shared by all its icons.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pointer {
    /// The pointer isn't over the dock, every icon is infinitely far from it.
    #[default]
    Away,
    /// Page x coordinate of the pointer.
    At(f64),
}

/// Horizontal extent of an icon, in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconGeometry {
    pub left: f64,
    pub width: f64,
}

impl IconGeometry {
    /// `None` until the icon has actually been laid out.
    pub fn new(left: f64, width: f64) -> Option<Self> {
        if left.is_finite() && width.is_finite() && width > 0.0 {
            Some(Self { left, width })
        } else {
            None
        }
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Measure `element`'s bounding box, converted from viewport to page
    /// coordinates to match the pointer events.
    pub fn measure(element: &web_sys::Element) -> Option<Self> {
        let rect = element.get_bounding_client_rect();
        let scroll_x = web_sys::window()
            .and_then(|window| window.scroll_x().ok())
            .unwrap_or(0.0);
        Self::new(rect.left() + scroll_x, rect.width())
    }
}

impl Pointer {
    /// Signed distance from the pointer to the center of an icon.
    ///
    /// The pointer being away, or the icon not being measurable yet, both put
    /// the icon infinitely far.
    pub fn distance_to(&self, icon: Option<IconGeometry>) -> f64 {
        match (self, icon) {
            (Pointer::At(x), Some(icon)) if x.is_finite() => x - icon.center(),
            _ => f64::INFINITY,
        }
    }
}
