//! Cell measurement and rendering strategies.

use arraygrid_core::{Canvas, Rect};

/// Narrowest label width hint.
pub const LABEL_WIDTH_MIN: f32 = 40.0;
/// Widest label width hint.
pub const LABEL_WIDTH_MAX: f32 = 85.0;

/// Reports the natural content height of an element.
///
/// Any `Fn(&T) -> f32` closure is a measure:
///
/// ```
/// use arraygrid_layout::CellMeasure;
///
/// let measure = |s: &String| if s.contains('\n') { 36.0 } else { 18.0 };
/// assert_eq!(measure.natural_height(&"a\nb".to_string()), 36.0);
/// ```
pub trait CellMeasure<T: ?Sized> {
    /// Height the element's content needs, excluding cell padding.
    fn natural_height(&self, element: &T) -> f32;
}

impl<T: ?Sized, F> CellMeasure<T> for F
where
    F: Fn(&T) -> f32 + ?Sized,
{
    fn natural_height(&self, element: &T) -> f32 {
        self(element)
    }
}

/// Where and how a cell's content is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct CellContent {
    /// Linear index of the element
    pub index: usize,
    /// Padded content rectangle, indented for nested content
    pub rect: Rect,
    /// Label for nested content; `None` draws the value bare
    pub label: Option<String>,
    /// Suggested width for `label`
    pub label_width: f32,
}

/// Draws one element into its cell.
pub trait CellRender<T: ?Sized> {
    /// Label for elements that contain nested fields, `None` otherwise.
    fn nested_label(&self, element: &T) -> Option<String> {
        let _ = element;
        None
    }

    /// Draw `element`, possibly editing it in place.
    fn render(&mut self, element: &mut T, content: &CellContent, canvas: &mut dyn Canvas);
}

/// Label width hint for a content rectangle `content_width` wide.
#[must_use]
pub fn label_width(content_width: f32) -> f32 {
    (content_width * 0.5).clamp(LABEL_WIDTH_MIN, LABEL_WIDTH_MAX)
}
