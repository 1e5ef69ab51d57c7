use anyhow::{Context, Result};
use serde_json::json;
use signalfx_provider::Resource;
use std::path::Path;

use super::helpers;
use crate::output::{confirm, print_json, print_success, spinner, theme, OutputMode};
use crate::state;

#[derive(clap::Args)]
pub struct DestroyArgs {
    #[arg(long, help = "Skip confirmation prompt")]
    yes: bool,
}

pub async fn execute(args: &DestroyArgs, mode: OutputMode, opts: &crate::Opts) -> Result<()> {
    let state_path = Path::new(&opts.state);
    let mut state = state::load(state_path)?;
    let Some(data) = state.tracked().cloned() else {
        match mode {
            OutputMode::Json => print_json(&json!({ "destroyed": null }))?,
            OutputMode::Human => theme::print_dim("nothing to destroy"),
        }
        return Ok(());
    };
    let id = data.id().unwrap_or_default().to_string();

    if !args.yes && mode == OutputMode::Human {
        let prompt = format!("Delete alert muting rule {id} ({})?", data.config.description);
        if !confirm::confirm_action(&prompt) {
            theme::print_warning("Aborted");
            return Ok(());
        }
    }

    let ctx = helpers::context(opts)?;
    let sp = spinner::start(mode, "Deleting...");
    if let Err(e) = ctx.alert_muting_rule().delete(&data).await {
        spinner::finish_err(sp, "Delete failed");
        return Err(e).context("deleting rule");
    }
    spinner::finish_clear(sp);

    state.resource = None;
    state::save(state_path, &state)?;

    match mode {
        OutputMode::Json => print_json(&json!({ "destroyed": id }))?,
        OutputMode::Human => print_success(&format!("Rule {id} deleted")),
    }
    Ok(())
}
