//! Layout inputs: the flat record a host assembles for every layout pass.
//!
//! The host owns every policy decision (is the tab strip visible, is it on
//! loan, is the window fullscreen). This record only carries those decisions
//! plus the fixed chrome dimensions; nothing here is defaulted by the core.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Where the tab strip is attached.
///
/// Integer codes match the host tab control: top = 0, bottom = 1, left = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPosition {
    Top,
    Bottom,
    Left,
}

impl TabPosition {
    pub const fn code(self) -> i32 {
        match self {
            TabPosition::Top => 0,
            TabPosition::Bottom => 1,
            TabPosition::Left => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TabPosition::Top => "top",
            TabPosition::Bottom => "bottom",
            TabPosition::Left => "left",
        }
    }
}

impl TryFrom<i32> for TabPosition {
    type Error = LayoutError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TabPosition::Top),
            1 => Ok(TabPosition::Bottom),
            2 => Ok(TabPosition::Left),
            other => Err(LayoutError::UnknownTabPosition(other)),
        }
    }
}

impl FromStr for TabPosition {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(TabPosition::Top),
            "bottom" => Ok(TabPosition::Bottom),
            "left" => Ok(TabPosition::Left),
            _ => Err(LayoutError::UnknownTabPositionName(s.to_string())),
        }
    }
}

impl fmt::Display for TabPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a single layout pass depends on. All dimensions are points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInputs {
    /// Size of the window's content view.
    pub content_view_width: f64,
    pub content_view_height: f64,

    /// Height of a horizontal (top/bottom) tab strip.
    pub tab_bar_height: f64,
    /// Width of a vertical (left) tab strip.
    pub left_tab_bar_width: f64,

    pub toolbelt_width: f64,
    pub should_show_toolbelt: bool,

    pub status_bar_height: f64,
    pub has_status_bar: bool,
    /// `true` for top, `false` for bottom.
    pub status_bar_on_top: bool,

    /// The tab strip occupies space in the content view.
    pub tab_bar_visible: bool,
    /// The tab strip view is temporarily hosted elsewhere (e.g. the title
    /// bar) instead of being removed.
    pub tab_bar_on_loan: bool,
    /// The tab strip is drawn as a transient overlay on top of content.
    pub tab_bar_flashing: bool,
    /// The tab strip should render as a title-bar accessory.
    pub tab_bar_should_be_accessory: bool,
    /// That accessory overlaps the content area instead of sitting above it.
    pub tab_bar_accessory_overlaps_content: bool,

    pub entering_fullscreen: bool,
    pub in_fullscreen: bool,

    pub tab_position: TabPosition,

    /// Thin separator rendered above content.
    pub division_view_visible: bool,
    pub division_view_height: f64,

    /// Extra top inset avoiding a display cutout. Hosts pass 0 outside fullscreen.
    pub notch_inset: f64,

    /// Transitional request to keep a tab-strip-high gap at the top while
    /// the strip itself is not in the content view.
    pub should_leave_empty_area_at_top: bool,

    /// Compact windows draw a synthetic title where the tab strip would be.
    pub draw_window_title_in_place_of_tab_bar: bool,
}

impl LayoutInputs {
    pub fn is_fullscreen_or_entering(&self) -> bool {
        self.in_fullscreen || self.entering_fullscreen
    }

    pub fn has_top_status_bar(&self) -> bool {
        self.has_status_bar && self.status_bar_on_top
    }

    pub fn has_bottom_status_bar(&self) -> bool {
        self.has_status_bar && !self.status_bar_on_top
    }

    /// Width left for the tab view once the toolbelt takes its column.
    pub fn width_excluding_toolbelt(&self) -> f64 {
        if self.should_show_toolbelt {
            self.content_view_width - self.toolbelt_width
        } else {
            self.content_view_width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_position_codes_round_trip() {
        for pos in [TabPosition::Top, TabPosition::Bottom, TabPosition::Left] {
            assert_eq!(TabPosition::try_from(pos.code()), Ok(pos));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(TabPosition::try_from(7), Err(LayoutError::UnknownTabPosition(7)));
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Bottom".parse::<TabPosition>(), Ok(TabPosition::Bottom));
        assert_eq!(" left ".parse::<TabPosition>(), Ok(TabPosition::Left));
        let err = "right".parse::<TabPosition>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown tab position name `right` (expected top, bottom or left)"
        );
    }

    #[test]
    fn display_matches_serde_name() {
        let json = serde_json::to_string(&TabPosition::Left).unwrap();
        assert_eq!(json, format!("\"{}\"", TabPosition::Left));
    }
}
