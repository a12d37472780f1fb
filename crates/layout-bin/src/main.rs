//! chrome-layout entrypoint: run one layout pass for a scenario file.
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use core_config::{ChromeMetrics, load_from};
use core_layout::{
    LayoutInputs, LayoutOutputs, Rect, TabBarStrategy, calculate_layout,
    should_shrink_for_full_screen_tab_bar,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

mod scenario;

use scenario::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "chrome-layout", version, about = "Window chrome layout calculator")]
struct Args {
    /// Scenario file (TOML) describing the window size and mode flags.
    pub scenario: PathBuf,
    /// Optional configuration file path (overrides discovery of `chrome.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Everything printed for one pass.
#[derive(Debug, Serialize)]
struct LayoutReport {
    strategy: &'static str,
    fullscreen_shrink: bool,
    inputs: LayoutInputs,
    outputs: LayoutOutputs,
}

impl LayoutReport {
    fn compute(inputs: LayoutInputs) -> Self {
        Self {
            strategy: TabBarStrategy::select(&inputs).name(),
            fullscreen_shrink: should_shrink_for_full_screen_tab_bar(&inputs),
            outputs: calculate_layout(&inputs),
            inputs,
        }
    }

    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("serializing layout report")
            }
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let o = &self.outputs;
        let pos = self.inputs.tab_position;
        let mut out = String::new();
        let _ = writeln!(out, "strategy           {}", self.strategy);
        let _ = writeln!(out, "tab position       {pos} ({})", pos.code());
        let _ = writeln!(out, "fullscreen shrink  {}", self.fullscreen_shrink);
        let _ = writeln!(out, "decoration top     {}", o.decoration_height_top);
        let _ = writeln!(out, "decoration bottom  {}", o.decoration_height_bottom);
        for (name, frame) in [
            ("tab view", o.tab_view_frame),
            ("tab bar", o.tab_bar_frame),
            ("status bar", o.status_bar_frame),
            ("toolbelt", o.toolbelt_frame),
        ] {
            let _ = writeln!(out, "{name:<18} {}", format_rect(&frame));
        }
        out
    }
}

/// `-` for an absent frame; degenerate frames are still printed, marked `empty`.
fn format_rect(r: &Rect) -> String {
    if *r == Rect::ZERO {
        return "-".to_string();
    }
    let text = format!("x={} y={} w={} h={}", r.min_x(), r.min_y(), r.width(), r.height());
    if r.is_empty() {
        format!("{text} empty")
    } else {
        text
    }
}

fn configure_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let (writer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let dir = dir.unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log file path has no file name: {}", path.display()))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name.to_string_lossy())
                .build(dir)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_appender::non_blocking(appender)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .try_init()
    {
        Ok(_) => Ok(Some(guard)),
        // Global tracing subscriber already installed; drop guard so writer shuts down.
        Err(_err) => Ok(None),
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn load_metrics(config: Option<PathBuf>) -> Result<ChromeMetrics> {
    let config_override = config.is_some();
    let config = load_from(config)?;
    let source = config.source.as_ref().map(|p| p.display().to_string());
    info!(
        target: "runtime.startup",
        config_override,
        source = source.as_deref(),
        "config_loaded"
    );
    Ok(config.metrics())
}

fn run(args: Args) -> Result<()> {
    let metrics = load_metrics(args.config)?;
    let scenario = Scenario::load(&args.scenario)?;
    let inputs = scenario.to_inputs(&metrics)?;
    debug!(target: "runtime", ?inputs, "scenario_inputs");

    let report = LayoutReport::compute(inputs);
    info!(
        target: "runtime",
        strategy = report.strategy,
        fullscreen_shrink = report.fullscreen_shrink,
        "layout_complete"
    );
    println!("{}", report.render(args.format)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging(args.log_file.as_deref())?;
    install_panic_hook();
    info!(target: "runtime", "startup");
    run(args)
}
