pub(crate) mod apply;
mod destroy;
pub(crate) mod helpers;
mod import;
mod refresh;
pub(crate) mod show;
mod version;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create or converge the rule declared in a YAML file
    Apply(apply::ApplyArgs),
    /// Re-read the tracked rule from the platform
    Refresh,
    /// Print the tracked rule
    Show,
    /// Delete the tracked rule
    Destroy(destroy::DestroyArgs),
    /// Start tracking an existing rule by id
    Import(import::ImportArgs),
    Version,
}

pub async fn run(opts: crate::Opts) -> Result<()> {
    let mode = opts.output_mode();
    match &opts.cmd {
        Commands::Apply(args) => apply::execute(args, mode, &opts).await,
        Commands::Refresh => refresh::execute(mode, &opts).await,
        Commands::Show => show::execute(mode, &opts),
        Commands::Destroy(args) => destroy::execute(args, mode, &opts).await,
        Commands::Import(args) => import::execute(args, mode, &opts).await,
        Commands::Version => {
            version::execute(mode, &opts);
            Ok(())
        }
    }
}
