//! Fullscreen accessory shrink, applied after whichever strategy ran.
//!
//! When the tab strip is on loan to the title bar as an accessory and that
//! accessory overlaps the content area (fullscreen, or on the way there),
//! the strip covers the top of the tab view without being part of any
//! decoration sum. The tab view gives up `tab_bar_height` at its top edge.
//!
//! This one rule covers steady-state fullscreen, fullscreen entry, and the
//! tab-count transition where the strip is about to be hidden, so there is
//! no separate transitional path.

use tracing::trace;

use crate::geometry::Rect;
use crate::inputs::{LayoutInputs, TabPosition};

/// True when the accessory strip overlaps content and the tab view must
/// give up `tab_bar_height` at its top.
///
/// * Not on loan: the base pass already reserved whatever was needed.
/// * Flashing: the strip is an overlay; shrinking too would under-size content.
/// * Only a top strip can be a title-bar accessory.
pub fn should_shrink_for_full_screen_tab_bar(inputs: &LayoutInputs) -> bool {
    inputs.tab_bar_on_loan
        && inputs.tab_bar_should_be_accessory
        && inputs.tab_bar_accessory_overlaps_content
        && inputs.tab_position == TabPosition::Top
        && inputs.is_fullscreen_or_entering()
        && !inputs.tab_bar_flashing
}

/// Returns `frame` with its height reduced by `tab_bar_height` when the
/// shrink applies, otherwise `frame` unchanged. The origin never moves.
pub fn tab_view_frame_by_shrinking_for_full_screen_tab_bar(
    frame: Rect,
    inputs: &LayoutInputs,
) -> Rect {
    if !should_shrink_for_full_screen_tab_bar(inputs) {
        return frame;
    }
    trace!(
        target: "layout.fullscreen",
        amount = inputs.tab_bar_height,
        in_fullscreen = inputs.in_fullscreen,
        entering_fullscreen = inputs.entering_fullscreen,
        tab_bar_visible = inputs.tab_bar_visible,
        "tab_view_shrunk_for_accessory"
    );
    frame.shrunk_from_top(inputs.tab_bar_height)
}
