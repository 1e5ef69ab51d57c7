use anyhow::{Context, Result};
use signalfx_provider::Resource;
use std::path::{Path, PathBuf};

use super::{helpers, show};
use crate::output::{print_success, spinner, theme, OutputMode};
use crate::state::{self, StateFile};

#[derive(clap::Args)]
pub struct ImportArgs {
    #[arg(help = "Remote rule id")]
    id: String,
    #[arg(
        short = 'f',
        long,
        help = "Declaration to seed declared attributes (start_time is never read back)"
    )]
    file: Option<PathBuf>,
}

pub async fn execute(args: &ImportArgs, mode: OutputMode, opts: &crate::Opts) -> Result<()> {
    let state_path = Path::new(&opts.state);
    let existing = state::load(state_path)?;
    if let Some(current) = existing.tracked().and_then(|d| d.id()) {
        if current != args.id {
            anyhow::bail!(
                "{} already tracks rule {current}; destroy it or pass another --state",
                state_path.display()
            );
        }
    }

    let ctx = helpers::context(opts)?;
    let resource = ctx.alert_muting_rule();
    let mut data = resource.import(&args.id);
    if let Some(file) = &args.file {
        data.config = helpers::load_declaration(file)?;
    }

    let sp = spinner::start(mode, "Importing...");
    if let Err(e) = resource.read(&mut data).await {
        spinner::finish_err(sp, "Import failed");
        return Err(e).context("reading imported rule");
    }
    spinner::finish_clear(sp);

    if data.id().is_none() {
        anyhow::bail!("alert muting rule {} not found", args.id);
    }

    state::save(state_path, &StateFile::with_resource(data.clone()))
        .context("saving imported state")?;

    show::render(&data, mode)?;
    if mode == OutputMode::Human {
        if args.file.is_none() {
            theme::print_warning("start_time is not tracked remotely; pass -f to seed it");
        }
        print_success(&format!("Imported rule {}", args.id));
    }
    Ok(())
}
