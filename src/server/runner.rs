use anyhow::Result;
use futures::{channel::mpsc::Receiver, StreamExt};
use tokio::task::JoinSet;
use tracing::Instrument;

use crate::event::{Delivery, Event};
use crate::octocrab_utils::GitHubApp;

mod checks;
mod comment;
mod toggle;

/// Handle deliveries concurrently, one task each, until the sender disconnects
/// and every task has finished.
pub(crate) async fn runner(mut receiver: Receiver<Delivery>, github: GitHubApp) {
    let mut tasks = JoinSet::new();
    loop {
        tokio::select! {
            Some(delivery) = receiver.next() => {
                let span = tracing::info_span!("handle_delivery", event = delivery.event.name());
                tasks.spawn(handle_delivery(github.clone(), delivery).instrument(span));
            }
            Some(res) = tasks.join_next() => match res {
                Ok(Ok(())) => {}
                Ok(Err(error)) => tracing::error!("{error:#}"),
                Err(error) => tracing::error!("Delivery handler panicked: {error}"),
            },
            else => break,
        }
    }
}

async fn handle_delivery(github: GitHubApp, delivery: Delivery) -> Result<()> {
    tracing::info!("Handling {delivery}");
    let github = github.client_for(delivery.installation)?;
    match delivery.event {
        Event::IssueOpened(issue) => comment::greet(&github, &issue).await?,
        Event::CommentCreated(new_comment) => comment::react(&github, &new_comment).await?,
        Event::PullRequestChanged(pr) => checks::check_wip(&github, &pr).await?,
        Event::ToggleRequested { pr_url, toggle } => {
            toggle::toggle_wip(&github, &pr_url, toggle).await?;
        }
    }
    Ok(())
}
