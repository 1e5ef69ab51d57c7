use anyhow::Result;
use signalfx_common::time::millis_to_secs;
use signalfx_provider::ResourceData;
use std::path::Path;

use crate::output::{filters_table, print_json, theme, OutputMode};
use crate::state;

pub fn execute(mode: OutputMode, opts: &crate::Opts) -> Result<()> {
    let state = state::load(Path::new(&opts.state))?;

    match (mode, state.tracked()) {
        (OutputMode::Json, _) => print_json(&state)?,
        (OutputMode::Human, Some(data)) => render(data, mode)?,
        (OutputMode::Human, None) => theme::print_dim("no alert muting rule tracked"),
    }
    Ok(())
}

pub fn render(data: &ResourceData, mode: OutputMode) -> Result<()> {
    if mode == OutputMode::Json {
        return print_json(data);
    }

    let cfg = &data.config;
    theme::print_section("Alert muting rule");
    theme::print_kv("ID", data.id().unwrap_or("-"));
    theme::print_kv("Description", &cfg.description);
    theme::print_kv("Start time", &cfg.start_time.to_string());
    let stop = if cfg.stop_time == 0 {
        "none".to_string()
    } else {
        cfg.stop_time.to_string()
    };
    theme::print_kv("Stop time", &stop);
    let effective = match data.effective_start_time {
        Some(ms) => format!("{} ({ms} ms)", millis_to_secs(ms)),
        None => "-".to_string(),
    };
    theme::print_kv("Effective start time", &effective);

    if !cfg.filter.is_empty() || !cfg.detectors.is_empty() {
        println!();
        println!("{}", filters_table(&cfg.filter, &cfg.detectors));
    }
    Ok(())
}
