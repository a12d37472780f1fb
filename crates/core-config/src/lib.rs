//! Chrome metrics configuration.
//!
//! Parses `chrome.toml` (or an override path provided by the binary) into the
//! fixed dimensions a layout pass needs: tab strip height and left width,
//! status bar height and placement, toolbelt width and division view height.
//! Window size and every mode flag still come from the host per pass; this
//! file only seeds the static part of `LayoutInputs`.
//!
//! Resilience rules:
//! * Missing file: defaults, silently.
//! * Parse error: defaults, logged at `warn` (target `config`).
//! * Negative or non-finite metric: that metric falls back to its default and
//!   the rejection is logged at `info`.
//!
//! Unknown fields are ignored so the file can grow without warnings.

use anyhow::{Context, Result};
use core_layout::{LayoutInputs, TabPosition};
use serde::Deserialize;
use std::{fs, io, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "chrome.toml";
const APP_DIR: &str = "chrome-layout";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBarPosition {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TabBarConfig {
    #[serde(default = "TabBarConfig::default_height")]
    pub height: f64,
    #[serde(default = "TabBarConfig::default_left_width")]
    pub left_width: f64,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            height: Self::default_height(),
            left_width: Self::default_left_width(),
        }
    }
}

impl TabBarConfig {
    const fn default_height() -> f64 {
        28.0
    }
    const fn default_left_width() -> f64 {
        200.0
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StatusBarConfig {
    #[serde(default = "StatusBarConfig::default_height")]
    pub height: f64,
    #[serde(default)]
    pub position: StatusBarPosition,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            height: Self::default_height(),
            position: StatusBarPosition::default(),
        }
    }
}

impl StatusBarConfig {
    const fn default_height() -> f64 {
        21.0
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToolbeltConfig {
    #[serde(default = "ToolbeltConfig::default_width")]
    pub width: f64,
}

impl Default for ToolbeltConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
        }
    }
}

impl ToolbeltConfig {
    const fn default_width() -> f64 {
        200.0
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DivisionConfig {
    #[serde(default = "DivisionConfig::default_height")]
    pub height: f64,
}

impl Default for DivisionConfig {
    fn default() -> Self {
        Self {
            height: Self::default_height(),
        }
    }
}

impl DivisionConfig {
    const fn default_height() -> f64 {
        1.0
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub tab_bar: TabBarConfig,
    #[serde(default)]
    pub status_bar: StatusBarConfig,
    #[serde(default)]
    pub toolbelt: ToolbeltConfig,
    #[serde(default)]
    pub division: DivisionConfig,
}

/// Validated chrome dimensions, ready to seed `LayoutInputs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeMetrics {
    pub tab_bar_height: f64,
    pub left_tab_bar_width: f64,
    pub status_bar_height: f64,
    pub status_bar_on_top: bool,
    pub toolbelt_width: f64,
    pub division_view_height: f64,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        ChromeMetrics::from_file(&ConfigFile::default())
    }
}

impl ChromeMetrics {
    /// Validate parsed values; each rejected metric falls back to its default.
    pub fn from_file(file: &ConfigFile) -> Self {
        Self {
            tab_bar_height: checked_metric(
                "tab_bar.height",
                file.tab_bar.height,
                TabBarConfig::default_height(),
            ),
            left_tab_bar_width: checked_metric(
                "tab_bar.left_width",
                file.tab_bar.left_width,
                TabBarConfig::default_left_width(),
            ),
            status_bar_height: checked_metric(
                "status_bar.height",
                file.status_bar.height,
                StatusBarConfig::default_height(),
            ),
            status_bar_on_top: file.status_bar.position == StatusBarPosition::Top,
            toolbelt_width: checked_metric(
                "toolbelt.width",
                file.toolbelt.width,
                ToolbeltConfig::default_width(),
            ),
            division_view_height: checked_metric(
                "division.height",
                file.division.height,
                DivisionConfig::default_height(),
            ),
        }
    }

    /// Inputs for a `width` x `height` content view with these metrics, a
    /// visible top tab strip and every other mode flag off. Callers flip the
    /// flags that match their window state.
    pub fn inputs_for(&self, width: f64, height: f64) -> LayoutInputs {
        LayoutInputs {
            content_view_width: width,
            content_view_height: height,
            tab_bar_height: self.tab_bar_height,
            left_tab_bar_width: self.left_tab_bar_width,
            toolbelt_width: self.toolbelt_width,
            should_show_toolbelt: false,
            status_bar_height: self.status_bar_height,
            has_status_bar: false,
            status_bar_on_top: self.status_bar_on_top,
            tab_bar_visible: true,
            tab_bar_on_loan: false,
            tab_bar_flashing: false,
            tab_bar_should_be_accessory: false,
            tab_bar_accessory_overlaps_content: false,
            entering_fullscreen: false,
            in_fullscreen: false,
            tab_position: TabPosition::Top,
            division_view_visible: false,
            division_view_height: self.division_view_height,
            notch_inset: 0.0,
            should_leave_empty_area_at_top: false,
            draw_window_title_in_place_of_tab_bar: false,
        }
    }
}

fn checked_metric(name: &'static str, raw: f64, default: f64) -> f64 {
    if raw.is_finite() && raw >= 0.0 {
        return raw;
    }
    info!(
        target: "config",
        metric = name,
        raw,
        fallback = default,
        "chrome_metric_rejected"
    );
    default
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>,     // original file string (optional)
    pub source: Option<PathBuf>, // path the file was read from
    pub file: ConfigFile,        // parsed (or default) data
}

impl Config {
    pub fn metrics(&self) -> ChromeMetrics {
        ChromeMetrics::from_file(&self.file)
    }
}

/// Best-effort config path: working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join(APP_DIR).join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("reading config {}", path.display()));
        }
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            raw: Some(content),
            source: Some(path),
            file,
        }),
        Err(e) => {
            warn!(
                target: "config",
                path = %path.display(),
                error = %e,
                "config_parse_failed_using_defaults"
            );
            Ok(Config::default())
        }
    }
}
