use tracing::trace;

use crate::fullscreen::tab_view_frame_by_shrinking_for_full_screen_tab_bar;
use crate::inputs::LayoutInputs;
use crate::outputs::LayoutOutputs;
use crate::strategy::TabBarStrategy;

/// Compute every frame for one layout pass.
///
/// Picks exactly one strategy, then runs the fullscreen accessory shrink on
/// the tab view regardless of which strategy ran (it can fire with the strip
/// reported hidden while it is still on loan).
pub fn calculate_layout(inputs: &LayoutInputs) -> LayoutOutputs {
    let strategy = TabBarStrategy::select(inputs);
    let mut outputs = strategy.layout(inputs);
    outputs.tab_view_frame =
        tab_view_frame_by_shrinking_for_full_screen_tab_bar(outputs.tab_view_frame, inputs);
    trace!(
        target: "layout",
        strategy = strategy.name(),
        width = inputs.content_view_width,
        height = inputs.content_view_height,
        decoration_top = outputs.decoration_height_top,
        decoration_bottom = outputs.decoration_height_bottom,
        "layout_calculated"
    );
    outputs
}
