//! Property-based checks over arbitrary flag combinations.

mod common;

use common::default_inputs;
use core_layout::{
    LayoutInputs, TabBarStrategy, TabPosition, calculate_layout,
    should_shrink_for_full_screen_tab_bar,
};
use proptest::prelude::*;

fn tab_position() -> impl Strategy<Value = TabPosition> {
    prop_oneof![
        Just(TabPosition::Top),
        Just(TabPosition::Bottom),
        Just(TabPosition::Left),
    ]
}

prop_compose! {
    // Integral point values keep f64 sums exact so equalities can be asserted.
    fn layout_inputs()(
        width in 400u32..2000,
        height in 300u32..1600,
        tab_bar_height in 0u32..40,
        status_bar_height in 0u32..30,
        notch_inset in prop_oneof![Just(0u32), 1u32..40],
        division_view_height in 0u32..3,
        flags in proptest::collection::vec(any::<bool>(), 13),
        tab_position in tab_position(),
    ) -> LayoutInputs {
        LayoutInputs {
            content_view_width: f64::from(width),
            content_view_height: f64::from(height),
            tab_bar_height: f64::from(tab_bar_height),
            status_bar_height: f64::from(status_bar_height),
            notch_inset: f64::from(notch_inset),
            division_view_height: f64::from(division_view_height),
            should_show_toolbelt: flags[0],
            has_status_bar: flags[1],
            status_bar_on_top: flags[2],
            tab_bar_visible: flags[3],
            tab_bar_on_loan: flags[4],
            tab_bar_flashing: flags[5],
            tab_bar_should_be_accessory: flags[6],
            tab_bar_accessory_overlaps_content: flags[7],
            entering_fullscreen: flags[8],
            in_fullscreen: flags[9],
            division_view_visible: flags[10],
            should_leave_empty_area_at_top: flags[11],
            draw_window_title_in_place_of_tab_bar: flags[12],
            tab_position,
            ..default_inputs()
        }
    }
}

proptest! {
    // Same inputs always produce identical outputs.
    #[test]
    fn layout_is_pure(inputs in layout_inputs()) {
        prop_assert_eq!(calculate_layout(&inputs), calculate_layout(&inputs));
    }

    // Decorations plus tab view fill the height exactly unless the shrink fired.
    #[test]
    fn decorations_and_tab_view_fill_height(inputs in layout_inputs()) {
        let out = calculate_layout(&inputs);
        let used = out.decoration_height_top + out.decoration_height_bottom + out.tab_view_frame.height();
        if should_shrink_for_full_screen_tab_bar(&inputs) {
            prop_assert_eq!(used, inputs.content_view_height - inputs.tab_bar_height);
        } else {
            prop_assert_eq!(used, inputs.content_view_height);
        }
        prop_assert!(used <= inputs.content_view_height);
    }

    // The toolbelt column is carved out of the tab view for horizontal or hidden strips.
    #[test]
    fn toolbelt_width_is_excluded(inputs in layout_inputs()) {
        prop_assume!(!(inputs.tab_bar_visible && inputs.tab_position == TabPosition::Left));
        let out = calculate_layout(&inputs);
        if inputs.should_show_toolbelt {
            prop_assert_eq!(out.tab_view_frame.width(), inputs.content_view_width - inputs.toolbelt_width);
        } else {
            prop_assert_eq!(out.tab_view_frame.width(), inputs.content_view_width);
        }
    }

    // Left strips also give up their own width, never more than the window.
    #[test]
    fn left_strip_width_is_excluded(inputs in layout_inputs()) {
        let inputs = LayoutInputs { tab_bar_visible: true, tab_position: TabPosition::Left, ..inputs };
        let out = calculate_layout(&inputs);
        let expected = inputs.width_excluding_toolbelt() - inputs.left_tab_bar_width;
        prop_assert_eq!(out.tab_view_frame.width(), expected);
        prop_assert!(out.tab_view_frame.width() <= inputs.content_view_width);
        prop_assert_eq!(out.tab_bar_frame.height(), out.tab_view_frame.height());
    }

    // Bottom and left strips never touch the top decoration beyond notch, status bar and division view.
    #[test]
    fn non_top_strips_skip_top_strip_reservation(inputs in layout_inputs()) {
        prop_assume!(inputs.tab_bar_visible && inputs.tab_position != TabPosition::Top);
        let out = calculate_layout(&inputs);
        let mut expected = inputs.notch_inset;
        if inputs.has_status_bar && inputs.status_bar_on_top {
            expected += inputs.status_bar_height;
        }
        if inputs.division_view_visible {
            expected += inputs.division_view_height;
        }
        prop_assert_eq!(out.decoration_height_top, expected);
        if inputs.tab_position == TabPosition::Bottom {
            prop_assert_eq!(out.tab_bar_frame.min_y(), 0.0);
        }
    }

    // Frames stay non-negative when the window is large enough for its chrome.
    #[test]
    fn frames_are_non_negative(inputs in layout_inputs()) {
        let out = calculate_layout(&inputs);
        for frame in [out.tab_view_frame, out.tab_bar_frame, out.status_bar_frame, out.toolbelt_frame] {
            prop_assert!(frame.width() >= 0.0 && frame.height() >= 0.0, "{:?}", frame);
        }
    }

    // Hidden strips never get a frame; visible ones always do.
    #[test]
    fn tab_bar_frame_follows_strategy(inputs in layout_inputs()) {
        let out = calculate_layout(&inputs);
        match TabBarStrategy::select(&inputs) {
            TabBarStrategy::Hidden => prop_assert!(out.tab_bar_frame == core_layout::Rect::ZERO),
            TabBarStrategy::VisibleTop | TabBarStrategy::VisibleBottom => {
                prop_assert_eq!(out.tab_bar_frame.height(), inputs.tab_bar_height);
                prop_assert_eq!(out.tab_bar_frame.width(), inputs.content_view_width);
            }
            TabBarStrategy::VisibleLeft => {
                prop_assert_eq!(out.tab_bar_frame.width(), inputs.left_tab_bar_width);
            }
        }
    }
}
