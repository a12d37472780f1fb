//! Scenario files: a window size plus the host's mode decisions for one pass.
//!
//! ```toml
//! width = 800
//! height = 600
//! tab_position = "top"        # or 0 / 1 / 2
//! tab_bar_visible = true
//! in_fullscreen = true
//! tab_bar_on_loan = true
//! tab_bar_should_be_accessory = true
//! tab_bar_accessory_overlaps_content = true
//!
//! [metrics]                   # optional, overrides chrome.toml
//! tab_bar_height = 30
//! ```
//!
//! Every flag defaults to `false`, except `tab_bar_visible` which defaults to
//! `true`. Dimensions not given under `[metrics]` come from the loaded config.

use anyhow::{Context, Result};
use core_config::ChromeMetrics;
use core_layout::{LayoutInputs, TabPosition};
use serde::Deserialize;
use std::path::Path;

/// Tab position as written in a scenario: a name or the host's integer code.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TabPositionValue {
    Code(i32),
    Name(String),
}

impl TabPositionValue {
    pub fn resolve(&self) -> Result<TabPosition> {
        let position = match self {
            TabPositionValue::Code(code) => TabPosition::try_from(*code)?,
            TabPositionValue::Name(name) => name.parse()?,
        };
        Ok(position)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MetricOverrides {
    pub tab_bar_height: Option<f64>,
    pub left_tab_bar_width: Option<f64>,
    pub toolbelt_width: Option<f64>,
    pub status_bar_height: Option<f64>,
    pub division_view_height: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub metrics: MetricOverrides,
    pub tab_position: Option<TabPositionValue>,
    #[serde(default)]
    pub notch_inset: f64,
    #[serde(default)]
    pub should_show_toolbelt: bool,
    #[serde(default)]
    pub has_status_bar: bool,
    /// Overrides the configured status bar placement.
    pub status_bar_on_top: Option<bool>,
    #[serde(default = "default_tab_bar_visible")]
    pub tab_bar_visible: bool,
    #[serde(default)]
    pub tab_bar_on_loan: bool,
    #[serde(default)]
    pub tab_bar_flashing: bool,
    #[serde(default)]
    pub tab_bar_should_be_accessory: bool,
    #[serde(default)]
    pub tab_bar_accessory_overlaps_content: bool,
    #[serde(default)]
    pub entering_fullscreen: bool,
    #[serde(default)]
    pub in_fullscreen: bool,
    #[serde(default)]
    pub division_view_visible: bool,
    #[serde(default)]
    pub should_leave_empty_area_at_top: bool,
    #[serde(default)]
    pub draw_window_title_in_place_of_tab_bar: bool,
}

const fn default_tab_bar_visible() -> bool {
    true
}

impl Scenario {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("parsing scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Merge this scenario over the configured chrome metrics.
    pub fn to_inputs(&self, metrics: &ChromeMetrics) -> Result<LayoutInputs> {
        let tab_position = match &self.tab_position {
            Some(value) => value.resolve().context("invalid tab_position")?,
            None => TabPosition::Top,
        };
        let o = &self.metrics;
        Ok(LayoutInputs {
            content_view_width: self.width,
            content_view_height: self.height,
            tab_bar_height: o.tab_bar_height.unwrap_or(metrics.tab_bar_height),
            left_tab_bar_width: o.left_tab_bar_width.unwrap_or(metrics.left_tab_bar_width),
            toolbelt_width: o.toolbelt_width.unwrap_or(metrics.toolbelt_width),
            should_show_toolbelt: self.should_show_toolbelt,
            status_bar_height: o.status_bar_height.unwrap_or(metrics.status_bar_height),
            has_status_bar: self.has_status_bar,
            status_bar_on_top: self.status_bar_on_top.unwrap_or(metrics.status_bar_on_top),
            tab_bar_visible: self.tab_bar_visible,
            tab_bar_on_loan: self.tab_bar_on_loan,
            tab_bar_flashing: self.tab_bar_flashing,
            tab_bar_should_be_accessory: self.tab_bar_should_be_accessory,
            tab_bar_accessory_overlaps_content: self.tab_bar_accessory_overlaps_content,
            entering_fullscreen: self.entering_fullscreen,
            in_fullscreen: self.in_fullscreen,
            tab_position,
            division_view_visible: self.division_view_visible,
            division_view_height: o
                .division_view_height
                .unwrap_or(metrics.division_view_height),
            notch_inset: self.notch_inset,
            should_leave_empty_area_at_top: self.should_leave_empty_area_at_top,
            draw_window_title_in_place_of_tab_bar: self.draw_window_title_in_place_of_tab_bar,
        })
    }
}
