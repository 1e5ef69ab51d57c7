use crate::output::{banner, print_json, OutputMode};
use serde::Serialize;

use super::helpers;

#[derive(Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    resource: &'static str,
    api_url: String,
    arch: &'static str,
    os: &'static str,
}

pub fn execute(mode: OutputMode, opts: &crate::Opts) {
    let api_url = helpers::resolve_config(opts.api_url.as_deref(), None, opts.config.as_deref())
        .map(|cfg| cfg.api_url)
        .unwrap_or_else(|_| "-".to_string());

    let info = VersionInfo {
        name: "sfx",
        version: env!("CARGO_PKG_VERSION"),
        resource: signalfx_provider::alert_muting::TYPE_NAME,
        api_url,
        arch: std::env::consts::ARCH,
        os: std::env::consts::OS,
    };

    match mode {
        OutputMode::Json => {
            let _ = print_json(&info);
        }
        OutputMode::Human => banner::print_version_block(info.version, &info.api_url),
    }
}
