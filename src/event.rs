use octocrab::models::InstallationId;
use serde::{de::DeserializeOwned, Deserialize};
use std::fmt::Display;

mod github;

pub(crate) use github::{Comment, Issue, PullRequest};
use github::{
    ActionOnly, CheckRunEvent, CheckRunEventAction, IssueCommentEvent, IssueCommentEventAction,
    IssuesEvent, IssuesEventAction, PullRequestEvent, PullRequestEventAction,
};

use crate::title_policy::WipToggle;

/// Something the bot reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    /// An issue was opened
    IssueOpened(Issue),
    /// A comment was posted on an issue or PR
    CommentCreated(Comment),
    /// A PR was opened or edited
    PullRequestChanged(PullRequest),
    /// The WIP button on the check run was clicked
    ToggleRequested { pr_url: String, toggle: WipToggle },
}

impl Event {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Event::IssueOpened(_) => "issue_opened",
            Event::CommentCreated(_) => "comment_created",
            Event::PullRequestChanged(_) => "pull_request_changed",
            Event::ToggleRequested { .. } => "toggle_requested",
        }
    }
}

/// A decoded webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Delivery {
    /// App installation the delivery was sent for. Absent when not sent to a GitHub App.
    pub installation: Option<InstallationId>,
    pub event: Event,
}

impl Delivery {
    /// Decode a webhook body given its `X-GitHub-Event` kind.
    /// Returns `Ok(None)` for deliveries the bot does not react to.
    pub(crate) fn decode(
        kind: &str,
        payload: serde_json::Value,
    ) -> Result<Option<Self>, serde_json::Error> {
        let delivery = match kind {
            "issues" => {
                if action::<IssuesEventAction>(&payload)? != IssuesEventAction::Opened {
                    return Ok(None);
                }
                let e: IssuesEvent = parse(payload)?;
                Some(Self::new(e.installation, Event::IssueOpened(e.issue)))
            }
            "issue_comment" => {
                if action::<IssueCommentEventAction>(&payload)? != IssueCommentEventAction::Created {
                    return Ok(None);
                }
                let e: IssueCommentEvent = parse(payload)?;
                Some(Self::new(e.installation, Event::CommentCreated(e.comment)))
            }
            "pull_request" => {
                if !matches!(
                    action(&payload)?,
                    PullRequestEventAction::Opened | PullRequestEventAction::Edited
                ) {
                    return Ok(None);
                }
                let e: PullRequestEvent = parse(payload)?;
                Some(Self::new(e.installation, Event::PullRequestChanged(e.pull_request)))
            }
            "check_run" => {
                if action::<CheckRunEventAction>(&payload)? != CheckRunEventAction::RequestedAction {
                    return Ok(None);
                }
                let e: CheckRunEvent = parse(payload)?;
                decode_requested_action(e)
            }
            _ => None,
        };
        Ok(delivery)
    }

    fn new(installation: Option<github::Installation>, event: Event) -> Self {
        Self {
            installation: installation.map(|i| i.id),
            event,
        }
    }
}

fn action<A: DeserializeOwned>(payload: &serde_json::Value) -> Result<A, serde_json::Error> {
    ActionOnly::<A>::deserialize(payload).map(|only| only.action)
}

fn parse<T: DeserializeOwned>(payload: serde_json::Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(payload)
}

fn decode_requested_action(e: CheckRunEvent) -> Option<Delivery> {
    let identifier = e.requested_action?.identifier;
    let Ok(toggle) = identifier.parse::<WipToggle>() else {
        tracing::info!("Ignoring requested action {identifier:?}");
        return None;
    };
    let Some(pr) = e.check_run.pull_requests.into_iter().next() else {
        tracing::info!("Check run has no pull request to toggle");
        return None;
    };
    Some(Delivery::new(
        e.installation,
        Event::ToggleRequested {
            pr_url: pr.url,
            toggle,
        },
    ))
}

impl Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.event.name())?;
        if let Some(installation) = &self.installation {
            write!(f, " (installation {})", installation.0)?;
        }
        Ok(())
    }
}
