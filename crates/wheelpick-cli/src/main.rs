//! Wheelpick CLI - preview and check wheel configurations.

#![allow(clippy::needless_pass_by_value, clippy::doc_markdown)]

use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use wheelpick::prelude::*;
use wheelpick::widgets::wheel::{center_gap, font_size_for_gap, raw_index};
use wheelpick::widgets::Result;
use wheelpick::{Constraints, RecordingCanvas};

/// Width offered to `fill` wheels.
const PREVIEW_WIDTH: f32 = 320.0;

type ChangeLog = Arc<Mutex<Vec<SelectionChanged>>>;

#[derive(Parser)]
#[command(name = "wheelpick")]
#[command(about = "Preview and check wheel picker configurations")]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the wheel as it sits at an offset or selection
    Preview {
        /// Path to config file
        #[arg(default_value = "wheel.toml")]
        config: PathBuf,

        /// Centre-line scroll offset to settle at
        #[arg(long, conflicts_with = "select")]
        offset: Option<f32>,

        /// Item index to select as the controlling host would
        #[arg(long)]
        select: Option<usize>,
    },

    /// Validate a config and print its derived layout
    Check {
        /// Path to config file
        #[arg(default_value = "wheel.toml")]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Preview {
            config,
            offset,
            select,
        } => preview(&config, offset, select),
        Commands::Check { config } => check(&config),
    };

    match result {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn mount(config: &WheelConfig) -> Result<(WheelPicker, ChangeLog)> {
    let changes: ChangeLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let mut picker = WheelPicker::from_config(config)?.on_change(move |change| {
        sink.lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(change.clone());
    });
    let size = picker.measure(Constraints::loose(Size::new(PREVIEW_WIDTH, f32::INFINITY)));
    picker.layout(Rect::from_size(size));
    Ok((picker, changes))
}

fn preview(path: &Path, offset: Option<f32>, select: Option<usize>) -> Result<String> {
    let config = WheelConfig::from_path(path)?;
    let (mut picker, changes) = mount(&config)?;

    if let Some(index) = select {
        let len = picker.item_list().len();
        if index >= len {
            return Err(WheelError::IndexOutOfRange { index, len });
        }
        picker.set_selected_index(Some(index));
    }
    if let Some(y) = offset {
        picker.on_scroll_offset(y);
    }

    let mut out = render_preview(&picker);
    let changes = changes
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    for change in changes.iter() {
        let _ = writeln!(out, "changed -> {} ({})", change.index, change.item.label);
    }
    Ok(out)
}

fn check(path: &Path) -> Result<String> {
    let config = WheelConfig::from_path(path)?;
    let (picker, _) = mount(&config)?;
    Ok(render_check(&picker))
}

/// One line per display row: marker, label, gap and font size.
fn render_preview(picker: &WheelPicker) -> String {
    let mut out = String::new();
    let rows = picker.display_sequence();
    if rows.is_empty() {
        out.push_str("(no items)\n");
        return out;
    }

    let h = picker.row_height();
    let base = h / 2.0;
    let selected = picker.selected_index_value();
    let centred = raw_index(picker.scroll_offset(), h);

    for (position, row) in rows.iter().enumerate() {
        let marker = if i64::try_from(position).ok() == Some(centred) {
            '>'
        } else {
            ' '
        };
        let label = if row.is_sentinel() { "·" } else { row.label() };
        let gap = center_gap(position, selected);
        let _ = writeln!(
            out,
            "{marker} {position:>3}  {label:<16} gap {gap:<2} font {:>5.2}",
            font_size_for_gap(base, gap)
        );
    }
    let _ = writeln!(
        out,
        "offset {:.1}  selected {} ({})",
        picker.scroll_offset(),
        selected,
        picker.selected_item().map_or("", |item| item.label.as_str())
    );
    out
}

/// Layout summary plus the render self-check.
fn render_check(picker: &WheelPicker) -> String {
    let mut out = String::new();
    let verification = picker.verify();
    let mut canvas = RecordingCanvas::new();
    picker.paint(&mut canvas);

    let _ = writeln!(out, "Config valid!");
    let _ = writeln!(out, "  Items: {}", picker.item_list().len());
    let _ = writeln!(out, "  Display rows: {}", picker.display_sequence().len());
    let _ = writeln!(out, "  Row height: {}", picker.row_height());
    let _ = writeln!(out, "  Viewport: {}", picker.viewport_height());
    let _ = writeln!(out, "  Foreground: {}", picker.foreground().to_hex());
    let _ = writeln!(out, "  Draw commands: {}", canvas.command_count());
    let _ = writeln!(
        out,
        "  Brick checks: {}/{} passed",
        verification.passed.len(),
        verification.passed.len() + verification.failed.len()
    );
    for (assertion, reason) in &verification.failed {
        let _ = writeln!(out, "    failed {assertion:?}: {reason}");
    }
    let _ = writeln!(
        out,
        "  Renderable: {}",
        if picker.can_render() { "yes" } else { "no" }
    );
    out
}
