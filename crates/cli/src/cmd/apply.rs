use anyhow::{Context, Result};
use serde::Serialize;
use signalfx_provider::alert_muting::schema::{attribute, changed_attributes, requires_replacement};
use signalfx_provider::{AlertMutingRuleConfig, Resource, ResourceData};
use std::path::{Path, PathBuf};

use super::{helpers, show};
use crate::output::{spinner, theme, print_json, print_success, OutputMode};
use crate::state::{self, StateFile};

#[derive(clap::Args)]
pub struct ApplyArgs {
    #[arg(short = 'f', long, help = "Rule declaration (YAML)")]
    file: PathBuf,
    #[arg(long, help = "Show the plan without changing anything")]
    dry_run: bool,
}

/// What apply will do to reach the declared rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "changed", rename_all = "snake_case")]
pub enum Plan {
    Create,
    Replace(Vec<&'static str>),
    Update(Vec<&'static str>),
    NoChanges,
}

impl Plan {
    pub fn for_change(prior: Option<&ResourceData>, next: &AlertMutingRuleConfig) -> Self {
        let Some(prior) = prior.filter(|p| p.id().is_some()) else {
            return Self::Create;
        };
        let changed = changed_attributes(&prior.config, next);
        if changed.is_empty() {
            Self::NoChanges
        } else if requires_replacement(prior, next) {
            Self::Replace(changed)
        } else {
            Self::Update(changed)
        }
    }

    fn print(&self) {
        match self {
            Self::Create => theme::print_dim("+ alert muting rule will be created"),
            Self::NoChanges => theme::print_dim("no changes, rule is up to date"),
            Self::Replace(changed) | Self::Update(changed) => {
                for name in changed {
                    let forces_new = attribute(name).is_some_and(|a| a.force_new);
                    theme::print_change(name, forces_new);
                }
            }
        }
    }
}

#[derive(Serialize)]
struct ApplyReport<'a> {
    plan: &'a Plan,
    applied: bool,
    resource: Option<&'a ResourceData>,
}

pub async fn execute(args: &ApplyArgs, mode: OutputMode, opts: &crate::Opts) -> Result<()> {
    let declared = helpers::load_declaration(&args.file)?;
    let state_path = Path::new(&opts.state);
    let state = state::load(state_path)?;
    let ctx = helpers::context(opts)?;
    let resource = ctx.alert_muting_rule();

    let sp = state
        .tracked()
        .and_then(|_| spinner::start(mode, "Refreshing tracked rule..."));
    let prior = refresh_tracked(&resource, state.tracked()).await;
    spinner::finish_clear(sp);
    let prior = prior?;
    if let Some(notice) = vanished_notice(mode, prior.as_ref()) {
        theme::print_warning(notice);
    }

    let plan = Plan::for_change(prior.as_ref(), &declared);
    tracing::debug!(?plan, "planned");

    if mode == OutputMode::Human {
        theme::print_section("Plan");
        plan.print();
    }

    if args.dry_run || plan == Plan::NoChanges {
        let resource = prior.as_ref().filter(|p| p.id().is_some());
        if let (false, Some(refreshed)) = (args.dry_run, resource) {
            state::save(state_path, &StateFile::with_resource(refreshed.clone()))?;
        }
        if mode == OutputMode::Json {
            print_json(&ApplyReport { plan: &plan, applied: false, resource })?;
        }
        return Ok(());
    }

    let sp = spinner::start(mode, "Applying...");
    let data = match apply_plan(&resource, &plan, prior, declared, state_path).await {
        Ok(data) => {
            spinner::finish_ok(sp, "Applied");
            data
        }
        Err(e) => {
            spinner::finish_err(sp, "Apply failed");
            return Err(e);
        }
    };

    match mode {
        OutputMode::Json => print_json(&ApplyReport {
            plan: &plan,
            applied: true,
            resource: Some(&data),
        })?,
        OutputMode::Human => {
            show::render(&data, mode)?;
            print_success(&format!("state written to {}", state_path.display()));
        }
    }
    Ok(())
}

/// Re-reads the tracked rule. A rule that vanished remotely comes back with
/// its id cleared, which plans a create.
pub(crate) async fn refresh_tracked<R>(
    resource: &R,
    tracked: Option<&ResourceData>,
) -> Result<Option<ResourceData>>
where
    R: Resource<Data = ResourceData>,
{
    let Some(tracked) = tracked else {
        return Ok(None);
    };
    let mut data = tracked.clone();
    resource.read(&mut data).await.context("refreshing tracked rule")?;
    Ok(Some(data))
}

/// Human-only notice for a tracked rule that vanished remotely; JSON output
/// must stay a single document on stdout.
pub(crate) fn vanished_notice(
    mode: OutputMode,
    refreshed: Option<&ResourceData>,
) -> Option<&'static str> {
    match (mode, refreshed) {
        (OutputMode::Human, Some(data)) if data.id().is_none() => {
            Some("tracked rule no longer exists remotely, it will be created")
        }
        _ => None,
    }
}

/// Converges the remote rule and records the result. State is only written
/// once every remote call succeeded.
pub(crate) async fn apply_plan<R>(
    resource: &R,
    plan: &Plan,
    prior: Option<ResourceData>,
    declared: AlertMutingRuleConfig,
    state_path: &Path,
) -> Result<ResourceData>
where
    R: Resource<Data = ResourceData>,
{
    let data = converge(resource, plan, prior, declared).await?;
    state::save(state_path, &StateFile::with_resource(data.clone()))?;
    Ok(data)
}

async fn converge<R>(
    resource: &R,
    plan: &Plan,
    prior: Option<ResourceData>,
    declared: AlertMutingRuleConfig,
) -> Result<ResourceData>
where
    R: Resource<Data = ResourceData>,
{
    match (plan, prior) {
        (Plan::Update(_), Some(mut data)) => {
            data.config = declared;
            resource.update(&mut data).await.context("updating rule")?;
            Ok(data)
        }
        (Plan::Replace(_), Some(old)) => {
            resource.delete(&old).await.context("deleting rule for replacement")?;
            tracing::info!(id = ?old.id(), "rule deleted for replacement");
            create(resource, declared).await
        }
        _ => create(resource, declared).await,
    }
}

async fn create<R>(resource: &R, declared: AlertMutingRuleConfig) -> Result<ResourceData>
where
    R: Resource<Data = ResourceData>,
{
    let mut data = ResourceData::new(declared);
    resource.create(&mut data).await.context("creating rule")?;
    Ok(data)
}
