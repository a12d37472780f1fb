use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Frames produced by one layout pass, in content-view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOutputs {
    /// Main content area (the tab view).
    pub tab_view_frame: Rect,
    /// `Rect::ZERO` when the host has no status bar.
    pub status_bar_frame: Rect,
    /// `Rect::ZERO` when the toolbelt is not shown.
    pub toolbelt_frame: Rect,
    /// `Rect::ZERO` when the tab strip is hidden.
    pub tab_bar_frame: Rect,

    /// Vertical space taken by chrome above the tab view (notch, tab strip,
    /// status bar, division view). Hosts use it beyond frame placement, e.g.
    /// for centering.
    pub decoration_height_top: f64,
    /// Vertical space taken by chrome below the tab view.
    pub decoration_height_bottom: f64,
}

impl LayoutOutputs {
    pub fn total_decoration_height(&self) -> f64 {
        self.decoration_height_top + self.decoration_height_bottom
    }
}
