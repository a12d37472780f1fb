use crate::geometry::Rect;
use crate::inputs::LayoutInputs;

/// Right-edge column for the toolbelt, independent of the tab strip
/// strategy. `Rect::ZERO` when the toolbelt is not shown.
///
/// While a transitional empty area is kept at the top, the toolbelt stops
/// at that area's lower edge instead of running under it.
pub fn toolbelt_frame(inputs: &LayoutInputs) -> Rect {
    if !inputs.should_show_toolbelt {
        return Rect::ZERO;
    }
    let mut height = inputs.content_view_height;
    if inputs.should_leave_empty_area_at_top {
        height -= inputs.tab_bar_height;
    }
    Rect::new(
        inputs.content_view_width - inputs.toolbelt_width,
        0.0,
        inputs.toolbelt_width,
        height,
    )
}
