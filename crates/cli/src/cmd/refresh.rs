use anyhow::{Context, Result};
use serde_json::json;
use signalfx_provider::Resource;
use std::path::Path;

use super::{helpers, show};
use crate::output::{print_json, spinner, theme, OutputMode};
use crate::state;

pub async fn execute(mode: OutputMode, opts: &crate::Opts) -> Result<()> {
    let state_path = Path::new(&opts.state);
    let mut state = state::load(state_path)?;
    let Some(mut data) = state.tracked().cloned() else {
        match mode {
            OutputMode::Json => print_json(&json!({ "tracked": false }))?,
            OutputMode::Human => theme::print_dim("no alert muting rule tracked"),
        }
        return Ok(());
    };
    let id = data.id().unwrap_or_default().to_string();

    let ctx = helpers::context(opts)?;
    let sp = spinner::start(mode, "Refreshing...");
    if let Err(e) = ctx.alert_muting_rule().read(&mut data).await {
        spinner::finish_err(sp, "Refresh failed");
        return Err(e).context("reading rule");
    }
    spinner::finish_clear(sp);

    if data.id().is_none() {
        state.resource = None;
        state::save(state_path, &state)?;
        tracing::info!(%id, "rule vanished remotely, dropped from state");
        match mode {
            OutputMode::Json => print_json(&json!({ "tracked": false, "dropped": id }))?,
            OutputMode::Human => theme::print_warning(&format!(
                "rule {id} no longer exists remotely and was dropped from state"
            )),
        }
        return Ok(());
    }

    state.resource = Some(data);
    state::save(state_path, &state)?;
    if let Some(data) = state.tracked() {
        show::render(data, mode)?;
    }
    Ok(())
}
