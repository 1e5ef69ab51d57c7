use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};
use colored::Colorize;

use super::OutputMode;

/// Spinner in human mode; nothing when printing JSON.
pub fn start(mode: OutputMode, msg: &str) -> Option<ProgressBar> {
    match mode {
        OutputMode::Human => Some(create(msg)),
        OutputMode::Json => None,
    }
}

pub fn create(msg: &str) -> ProgressBar {
    let sp = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan.bold} {msg}") {
        sp.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]));
    }
    sp.set_message(msg.to_string());
    sp.enable_steady_tick(Duration::from_millis(80));
    sp
}

pub fn finish_ok(sp: Option<ProgressBar>, msg: &str) {
    finish_with(sp, format!("{} {}", "✓".green().bold(), msg));
}

pub fn finish_err(sp: Option<ProgressBar>, msg: &str) {
    finish_with(sp, format!("{} {}", "✗".red().bold(), msg));
}

pub fn finish_clear(sp: Option<ProgressBar>) {
    if let Some(sp) = sp {
        sp.finish_and_clear();
    }
}

fn finish_with(sp: Option<ProgressBar>, line: String) {
    if let Some(sp) = sp {
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            sp.set_style(style);
        }
        sp.finish_with_message(line);
    }
}
