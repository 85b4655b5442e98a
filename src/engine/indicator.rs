//! Geometry for the gliding underline under the active nav label.

/// Axis-aligned box in client coordinates (what `getBoundingClientRect`
/// reports).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Presentation parameters written to the nav list as CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Underline {
    pub left: f64,
    pub width: f64,
    pub opacity: f64,
}

impl Underline {
    /// Place the underline under `item`, relative to its `container`.
    pub fn under(item: Rect, container: Rect) -> Self {
        Self {
            left: item.left - container.left,
            width: item.width,
            opacity: 1.0,
        }
    }

    /// `(property, value)` pairs ready for `style.setProperty`.
    pub fn css_properties(&self) -> [(&'static str, String); 3] {
        [
            ("--underline-left", format!("{}px", self.left)),
            ("--underline-width", format!("{}px", self.width)),
            ("--underline-opacity", format!("{}", self.opacity)),
        ]
    }
}
