//! Window chrome layout.
//!
//! Pure geometry for a terminal window's content view: given a flat
//! `LayoutInputs` record describing the window size and the host's UI mode
//! decisions, produce the frames of the tab strip, status bar, tab view and
//! toolbelt, plus the chrome heights above and below the tab view.
//!
//! Pipeline:
//! 1. `TabBarStrategy::select` picks one decision table (hidden, or visible
//!    top/bottom/left tab strip).
//! 2. The strategy accumulates top/bottom decoration and derives frames.
//! 3. The fullscreen accessory shrink adjusts the tab view when the strip is
//!    on loan to the title bar and overlaps content.
//!
//! Invariants (all inputs):
//! * `decoration_height_top + decoration_height_bottom + tab_view_frame.height`
//!   equals `content_view_height` unless step 3 fired, in which case it is
//!   `tab_bar_height` less.
//! * With the toolbelt shown and a horizontal or hidden strip,
//!   `tab_view_frame.width == content_view_width - toolbelt_width`.
//! * Same inputs, same outputs: nothing is cached between calls.
//!
//! Coordinates have their origin at the bottom-left (see `geometry`).
//! Oversubscribed inputs are not clamped; negative heights come back as-is.

pub mod calculator;
pub mod error;
pub mod fullscreen;
pub mod geometry;
pub mod inputs;
pub mod outputs;
pub mod strategy;
pub mod toolbelt;

pub use calculator::calculate_layout;
pub use error::LayoutError;
pub use fullscreen::{
    should_shrink_for_full_screen_tab_bar, tab_view_frame_by_shrinking_for_full_screen_tab_bar,
};
pub use geometry::{Point, Rect, Size};
pub use inputs::{LayoutInputs, TabPosition};
pub use outputs::LayoutOutputs;
pub use strategy::{
    TabBarStrategy, calculate_layout_with_hidden_tab_bar,
    calculate_layout_with_visible_bottom_tab_bar, calculate_layout_with_visible_left_tab_bar,
    calculate_layout_with_visible_top_tab_bar,
};
pub use toolbelt::toolbelt_frame;
