//! Tab strip layout strategies.
//!
//! Exactly one strategy runs per layout pass. Each one is a decision table
//! over `LayoutInputs` that accumulates the chrome reserved above and below
//! the tab view, then derives frames from those two sums:
//!
//! | strategy        | top decoration                                  | bottom decoration        |
//! |-----------------|-------------------------------------------------|--------------------------|
//! | hidden          | notch, title gap (once), top status bar         | bottom status bar        |
//! | visible top     | notch, strip*, top status bar, division view    | bottom status bar        |
//! | visible bottom  | notch, top status bar, division view            | strip*, bottom status bar|
//! | visible left    | notch, top status bar, division view            | bottom status bar        |
//!
//! `*` the strip reserves nothing while flashing (drawn as an overlay) or on
//! loan (hosted by the title bar; the fullscreen shrink pass owns that case).
//!
//! In every strategy `tab_view_frame.height == content_view_height - top -
//! bottom`; only the fullscreen post-pass may make it smaller.

use crate::geometry::Rect;
use crate::inputs::{LayoutInputs, TabPosition};
use crate::outputs::LayoutOutputs;
use crate::toolbelt::toolbelt_frame;

/// Which decision table applies to a set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabBarStrategy {
    Hidden,
    VisibleTop,
    VisibleBottom,
    VisibleLeft,
}

impl TabBarStrategy {
    /// Exclusive selection: visibility first, then position.
    pub fn select(inputs: &LayoutInputs) -> Self {
        if !inputs.tab_bar_visible {
            return TabBarStrategy::Hidden;
        }
        match inputs.tab_position {
            TabPosition::Top => TabBarStrategy::VisibleTop,
            TabPosition::Bottom => TabBarStrategy::VisibleBottom,
            TabPosition::Left => TabBarStrategy::VisibleLeft,
        }
    }

    /// Base layout for this strategy, before the fullscreen shrink pass.
    pub fn layout(self, inputs: &LayoutInputs) -> LayoutOutputs {
        match self {
            TabBarStrategy::Hidden => calculate_layout_with_hidden_tab_bar(inputs),
            TabBarStrategy::VisibleTop => calculate_layout_with_visible_top_tab_bar(inputs),
            TabBarStrategy::VisibleBottom => calculate_layout_with_visible_bottom_tab_bar(inputs),
            TabBarStrategy::VisibleLeft => calculate_layout_with_visible_left_tab_bar(inputs),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TabBarStrategy::Hidden => "hidden",
            TabBarStrategy::VisibleTop => "visible_top",
            TabBarStrategy::VisibleBottom => "visible_bottom",
            TabBarStrategy::VisibleLeft => "visible_left",
        }
    }
}

/// Tab strip is not in the content view.
///
/// A tab-strip-high gap is kept at the top when either the transitional
/// empty-area flag or the compact-window title flag asks for it. The two
/// triggers reserve the same space, never twice.
pub fn calculate_layout_with_hidden_tab_bar(inputs: &LayoutInputs) -> LayoutOutputs {
    let title_gap = if inputs.should_leave_empty_area_at_top
        || inputs.draw_window_title_in_place_of_tab_bar
    {
        inputs.tab_bar_height
    } else {
        0.0
    };
    let above_status = inputs.notch_inset + title_gap;

    let top = above_status + top_status_bar_height(inputs);
    let bottom = bottom_status_bar_height(inputs);

    LayoutOutputs {
        tab_view_frame: Rect::new(
            0.0,
            bottom,
            inputs.width_excluding_toolbelt(),
            inputs.content_view_height - top - bottom,
        ),
        status_bar_frame: status_bar_frame(inputs, above_status, 0.0),
        toolbelt_frame: toolbelt_frame(inputs),
        tab_bar_frame: Rect::ZERO,
        decoration_height_top: top,
        decoration_height_bottom: bottom,
    }
}

/// Tab strip attached at the top of the content view.
///
/// The strip frame is always laid out directly below the notch, even when it
/// reserves no space (flashing overlay or on loan).
pub fn calculate_layout_with_visible_top_tab_bar(inputs: &LayoutInputs) -> LayoutOutputs {
    let above_status = inputs.notch_inset + reserved_strip_height(inputs);

    let top = above_status + top_status_bar_height(inputs) + division_view_height(inputs);
    let bottom = bottom_status_bar_height(inputs);

    let strip_y = inputs.content_view_height - inputs.notch_inset - inputs.tab_bar_height;

    LayoutOutputs {
        tab_view_frame: Rect::new(
            0.0,
            bottom,
            inputs.width_excluding_toolbelt(),
            inputs.content_view_height - top - bottom,
        ),
        status_bar_frame: status_bar_frame(inputs, above_status, 0.0),
        toolbelt_frame: toolbelt_frame(inputs),
        tab_bar_frame: Rect::new(0.0, strip_y, inputs.content_view_width, inputs.tab_bar_height),
        decoration_height_top: top,
        decoration_height_bottom: bottom,
    }
}

/// Tab strip attached at the bottom edge (`y == 0`). Its height counts
/// towards the bottom decoration, never the top one.
pub fn calculate_layout_with_visible_bottom_tab_bar(inputs: &LayoutInputs) -> LayoutOutputs {
    let strip = reserved_strip_height(inputs);

    let top = inputs.notch_inset + top_status_bar_height(inputs) + division_view_height(inputs);
    let bottom = strip + bottom_status_bar_height(inputs);

    LayoutOutputs {
        tab_view_frame: Rect::new(
            0.0,
            bottom,
            inputs.width_excluding_toolbelt(),
            inputs.content_view_height - top - bottom,
        ),
        // A bottom status bar sits on top of the strip.
        status_bar_frame: status_bar_frame(inputs, inputs.notch_inset, strip),
        toolbelt_frame: toolbelt_frame(inputs),
        tab_bar_frame: Rect::new(0.0, 0.0, inputs.content_view_width, inputs.tab_bar_height),
        decoration_height_top: top,
        decoration_height_bottom: bottom,
    }
}

/// Vertical tab strip on the left edge. It takes width, not height, so it
/// adds nothing to either decoration sum.
pub fn calculate_layout_with_visible_left_tab_bar(inputs: &LayoutInputs) -> LayoutOutputs {
    let top = inputs.notch_inset + top_status_bar_height(inputs) + division_view_height(inputs);
    let bottom = bottom_status_bar_height(inputs);
    let content_height = inputs.content_view_height - top - bottom;
    let strip_width = inputs.left_tab_bar_width;

    LayoutOutputs {
        tab_view_frame: Rect::new(
            strip_width,
            bottom,
            inputs.width_excluding_toolbelt() - strip_width,
            content_height,
        ),
        status_bar_frame: status_bar_frame(inputs, inputs.notch_inset, 0.0),
        toolbelt_frame: toolbelt_frame(inputs),
        tab_bar_frame: Rect::new(0.0, bottom, strip_width, content_height),
        decoration_height_top: top,
        decoration_height_bottom: bottom,
    }
}

fn reserved_strip_height(inputs: &LayoutInputs) -> f64 {
    if inputs.tab_bar_flashing || inputs.tab_bar_on_loan {
        0.0
    } else {
        inputs.tab_bar_height
    }
}

fn top_status_bar_height(inputs: &LayoutInputs) -> f64 {
    if inputs.has_top_status_bar() {
        inputs.status_bar_height
    } else {
        0.0
    }
}

fn bottom_status_bar_height(inputs: &LayoutInputs) -> f64 {
    if inputs.has_bottom_status_bar() {
        inputs.status_bar_height
    } else {
        0.0
    }
}

fn division_view_height(inputs: &LayoutInputs) -> f64 {
    if inputs.division_view_visible {
        inputs.division_view_height
    } else {
        0.0
    }
}

/// Full-width status bar frame. On top it hangs `top_offset` below the top
/// edge; at the bottom it sits `bottom_offset` above `y == 0`.
fn status_bar_frame(inputs: &LayoutInputs, top_offset: f64, bottom_offset: f64) -> Rect {
    if !inputs.has_status_bar {
        return Rect::ZERO;
    }
    let y = if inputs.status_bar_on_top {
        inputs.content_view_height - top_offset - inputs.status_bar_height
    } else {
        bottom_offset
    };
    Rect::new(0.0, y, inputs.content_view_width, inputs.status_bar_height)
}
