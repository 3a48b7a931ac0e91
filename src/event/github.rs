//! Stripped down versions of [`octocrab::models::webhook_events`] payloads, holding only
//! the fields the bot reads. Missing fields make a delivery fail to decode instead of
//! reaching a handler.

use octocrab::models::InstallationId;
use serde::Deserialize;

/// The `action` of any event. Decoded before the full payload, which only handled
/// actions must match.
#[derive(Deserialize, Debug, Clone, Copy)]
pub(crate) struct ActionOnly<A> {
    pub action: A,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Installation {
    pub id: InstallationId,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum IssuesEventAction {
    Opened,
    #[serde(other)]
    Other,
}

/// `issues` event
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct IssuesEvent {
    pub issue: Issue,
    pub installation: Option<Installation>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Issue {
    /// API endpoint listing (and creating) the issue’s comments
    pub comments_url: String,
    pub user: User,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct User {
    pub login: String,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum IssueCommentEventAction {
    Created,
    #[serde(other)]
    Other,
}

/// `issue_comment` event
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct IssueCommentEvent {
    pub comment: Comment,
    pub installation: Option<Installation>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Comment {
    /// API URL of the comment itself
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PullRequestEventAction {
    Opened,
    Edited,
    #[serde(other)]
    Other,
}

/// `pull_request` event
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct PullRequestEvent {
    pub pull_request: PullRequest,
    pub installation: Option<Installation>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct PullRequest {
    pub title: String,
    pub head: Head,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Head {
    #[serde(rename = "ref")]
    pub ref_field: String,
    pub sha: String,
    pub repo: Repo,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Repo {
    /// API URL of the head repository
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CheckRunEventAction {
    RequestedAction,
    #[serde(other)]
    Other,
}

/// `check_run` event
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct CheckRunEvent {
    pub check_run: CheckRun,
    /// Only present for `requested_action`
    pub requested_action: Option<RequestedAction>,
    pub installation: Option<Installation>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckRun {
    pub pull_requests: Vec<PullRequestRef>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct PullRequestRef {
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestedAction {
    pub identifier: String,
}
