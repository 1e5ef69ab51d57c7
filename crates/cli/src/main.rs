mod cmd;
mod output;
mod state;
#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use cmd::Commands;
use output::OutputMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sfx", version, about = "SignalFx alert muting rule provider")]
pub struct Opts {
    #[clap(subcommand)]
    cmd: Commands,

    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(long, global = true, env = "SFX_API_URL", help = "API base URL (overrides config)")]
    api_url: Option<String>,

    #[arg(
        long,
        global = true,
        env = "SFX_AUTH_TOKEN",
        hide_env_values = true,
        help = "API token (overrides config)"
    )]
    token: Option<String>,

    #[arg(long, global = true, help = "Path to provider config file")]
    config: Option<String>,

    #[arg(
        long,
        global = true,
        default_value = "signalfx.state.json",
        help = "Path to the state file"
    )]
    state: String,

    #[arg(short, long, global = true, help = "Log request payloads")]
    verbose: bool,
}

impl Opts {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "signalfx=debug,sfx=debug"
        } else {
            "warn"
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(opts.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    cmd::run(opts).await
}
