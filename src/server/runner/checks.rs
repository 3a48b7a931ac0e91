use anyhow::{Context, Result};
use askama::Template;
use chrono::{SecondsFormat, Utc};
use octocrab::{
    params::checks::{CheckRunConclusion, CheckRunOutput, CheckRunStatus},
    Octocrab,
};
use serde::{Deserialize, Serialize};

use crate::constants::CHECK_RUN_NAME;
use crate::event::PullRequest;
use crate::title_policy::{is_wip, WipToggle, WIP_MARKERS};

const READY_TITLE: &str = "🤖 This PR is not Work-in-progress: Good to go";
const WIP_TITLE: &str = "🤖 This PR is Work-in-progress: It is incomplete";

#[derive(Serialize)]
struct CreateCheckRun<'a> {
    name: &'a str,
    head_branch: &'a str,
    head_sha: &'a str,
    status: CheckRunStatus,
    started_at: String,
}

#[derive(Serialize)]
struct UpdateCheckRun<'a> {
    name: &'a str,
    status: CheckRunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    conclusion: Option<CheckRunConclusion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<CheckRunOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    actions: Vec<CheckRunAction>,
}

/// A button shown on the completed check run.
#[derive(Serialize)]
struct CheckRunAction {
    label: &'static str,
    description: &'static str,
    identifier: &'static str,
}

impl From<WipToggle> for CheckRunAction {
    fn from(toggle: WipToggle) -> Self {
        CheckRunAction {
            label: toggle.label(),
            description: toggle.description(),
            identifier: toggle.identifier(),
        }
    }
}

#[derive(Deserialize)]
struct CheckRunCreated {
    id: u64,
}

#[derive(Template)]
#[template(path = "check_summary.md.j2", escape = "none")]
struct Summary {
    is_wip: bool,
}

#[derive(Template)]
#[template(path = "check_text.md.j2", escape = "none")]
struct DebugInfo<'a> {
    is_wip: bool,
    title: &'a str,
    markers: &'a [&'a str],
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Report whether the PR is WIP through a check run on its head commit.
///
/// Creates the run, moves it to in progress, then completes it. A failing call aborts
/// the sequence and leaves the run where the last successful call put it.
pub(super) async fn check_wip(github: &Octocrab, pr: &PullRequest) -> Result<()> {
    let check_runs_url = format!("{}/check-runs", pr.head.repo.url);
    let created: CheckRunCreated = github
        .post(
            &check_runs_url,
            Some(&CreateCheckRun {
                name: CHECK_RUN_NAME,
                head_branch: &pr.head.ref_field,
                head_sha: &pr.head.sha,
                status: CheckRunStatus::Queued,
                started_at: now(),
            }),
        )
        .await
        .context("failed to create check run")?;
    let check_run_url = format!("{check_runs_url}/{}", created.id);
    tracing::info!("Created check run {check_run_url}");

    let _: serde_json::Value = github
        .patch(
            &check_run_url,
            Some(&UpdateCheckRun {
                name: CHECK_RUN_NAME,
                status: CheckRunStatus::InProgress,
                conclusion: None,
                completed_at: None,
                output: None,
                actions: vec![],
            }),
        )
        .await
        .context("failed to start check run")?;

    let is_wip = is_wip(&pr.title);
    let _: serde_json::Value = github
        .patch(&check_run_url, Some(&completion(&pr.title, is_wip)?))
        .await
        .context("failed to complete check run")?;
    tracing::info!("Completed check run {check_run_url} (WIP: {is_wip})");
    Ok(())
}

fn completion(title: &str, is_wip: bool) -> Result<UpdateCheckRun<'static>> {
    let output = CheckRunOutput {
        title: if is_wip { WIP_TITLE } else { READY_TITLE }.to_owned(),
        summary: Summary { is_wip }.render()?,
        text: Some(
            DebugInfo {
                is_wip,
                title: &title.to_lowercase(),
                markers: &WIP_MARKERS,
            }
            .render()?,
        ),
        annotations: vec![],
        images: vec![],
    };
    Ok(UpdateCheckRun {
        name: CHECK_RUN_NAME,
        status: CheckRunStatus::Completed,
        conclusion: Some(if is_wip {
            CheckRunConclusion::Neutral
        } else {
            CheckRunConclusion::Success
        }),
        completed_at: Some(now()),
        output: Some(output),
        actions: vec![WipToggle::offered(is_wip).into()],
    })
}
