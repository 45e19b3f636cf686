//! Colors and text styles for grid chrome.

use arraygrid_core::{Color, FontWeight, TextStyle};

/// Appearance of everything the grid paints itself.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    /// Cell background
    pub cell_background: Color,
    /// Extra fill on even rows
    pub band: Color,
    /// Cell and header outlines
    pub border: Color,
    /// Header box fill
    pub header_background: Color,
    /// Header column numbers
    pub header_text: TextStyle,
    /// Bar over the boundary being dragged
    pub resize_highlight: Color,
    /// Append button fill
    pub append_button: Color,
    /// Append button "+" label
    pub append_text: TextStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            cell_background: Color::rgb(0.76, 0.76, 0.76),
            band: Color::BLACK.with_alpha(0.06),
            border: Color::rgb(0.6, 0.6, 0.6),
            header_background: Color::rgb(0.84, 0.84, 0.84),
            header_text: TextStyle {
                size: 11.0,
                color: Color::BLACK,
                weight: FontWeight::Bold,
            },
            resize_highlight: Color::rgb(0.3, 0.57, 0.71),
            append_button: Color::rgb(0.9, 0.9, 0.9),
            append_text: TextStyle {
                size: 10.0,
                ..TextStyle::default()
            },
        }
    }
}
