//! Callout positioning and rendering utilities.
//!
//! A callout is a floating panel anchored to another element — here, the
//! dropdown list under a combo box's text field. These helpers compute the
//! anchored rect and clear/paint the overlay area, the same pattern any
//! floating composition over a ratatui frame uses.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

/// Compute a rect directly below `anchor`, clamped to `bounds`.
///
/// The callout takes the anchor's full width and starts on the row after the
/// anchor's first row (the anchor is assumed to be one row tall — a text
/// field). `height` is the desired content height; the result is clamped to
/// the vertical space remaining in `bounds`. Returns a zero-height rect when
/// the anchor sits on the last row.
pub fn anchored_below(anchor: Rect, bounds: Rect, height: u16) -> Rect {
    let y = anchor.y.saturating_add(1);
    let available = bounds.bottom().saturating_sub(y);
    Rect {
        x: anchor.x,
        y,
        width: anchor.width.min(bounds.right().saturating_sub(anchor.x)),
        height: height.min(available),
    }
}

/// Clear the callout area and optionally render a block border.
///
/// Returns the inner area (after block padding, if any). This is the typical
/// pattern for overlay widgets: clear background, draw border, get inner area.
pub fn render_callout(frame: &mut Frame, area: Rect, block: Option<&Block>) -> Rect {
    frame.render_widget(Clear, area);
    if let Some(block) = block {
        let inner = block.inner(area);
        frame.render_widget(block.clone(), area);
        inner
    } else {
        area
    }
}
