#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_layout::{LayoutInputs, TabPosition};

/// 800x600 window with a visible top strip and nothing else turned on.
pub fn default_inputs() -> LayoutInputs {
    LayoutInputs {
        content_view_width: 800.0,
        content_view_height: 600.0,
        tab_bar_height: 28.0,
        left_tab_bar_width: 200.0,
        toolbelt_width: 200.0,
        should_show_toolbelt: false,
        status_bar_height: 21.0,
        has_status_bar: false,
        status_bar_on_top: true,
        tab_bar_visible: true,
        tab_bar_on_loan: false,
        tab_bar_flashing: false,
        tab_bar_should_be_accessory: false,
        tab_bar_accessory_overlaps_content: false,
        entering_fullscreen: false,
        in_fullscreen: false,
        tab_position: TabPosition::Top,
        division_view_visible: false,
        division_view_height: 1.0,
        notch_inset: 0.0,
        should_leave_empty_area_at_top: false,
        draw_window_title_in_place_of_tab_bar: false,
    }
}

/// Strip on loan to the title bar as an accessory overlapping content, in fullscreen.
pub fn fullscreen_accessory_inputs() -> LayoutInputs {
    LayoutInputs {
        tab_bar_on_loan: true,
        tab_bar_should_be_accessory: true,
        tab_bar_accessory_overlaps_content: true,
        in_fullscreen: true,
        ..default_inputs()
    }
}
