use anyhow::{Context, Result};
use octocrab::Octocrab;
use serde::Serialize;

use crate::constants::{COMMENT_REACTION, GREETING};
use crate::event::{Comment, Issue};

#[derive(Serialize)]
struct NewComment {
    body: String,
}

#[derive(Serialize)]
struct NewReaction<'a> {
    content: &'a str,
}

fn greeting(issue: &Issue) -> String {
    format!("Thanks for the report @{}! {GREETING}", issue.user.login)
}

/// Thank the author of a new issue.
pub(super) async fn greet(github: &Octocrab, issue: &Issue) -> Result<()> {
    let comment: serde_json::Value = github
        .post(
            &issue.comments_url,
            Some(&NewComment {
                body: greeting(issue),
            }),
        )
        .await
        .context("failed to post greeting")?;
    tracing::info!(
        "Greeted @{} at {}",
        issue.user.login,
        comment["html_url"].as_str().unwrap_or(&issue.comments_url)
    );
    Ok(())
}

/// Like a new comment.
pub(super) async fn react(github: &Octocrab, comment: &Comment) -> Result<()> {
    let reactions_url = format!("{}/reactions", comment.url);
    let _: serde_json::Value = github
        .post(
            &reactions_url,
            Some(&NewReaction {
                content: COMMENT_REACTION,
            }),
        )
        .await
        .context("failed to react to comment")?;
    tracing::info!("Reacted to {}", comment.url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, ResponseTemplate,
    };

    use super::*;
    use crate::event::{Delivery, Event};
    use crate::fixtures::{COMMENT_CREATED, ISSUE_OPENED};
    use crate::server::mock_github;

    #[tokio::test]
    async fn test_greet() {
        let (server, github) = mock_github::setup().await;
        Mock::given(method("POST"))
            .and(path("/repos/octo-org/hello-world/issues/3/comments"))
            .and(body_json(json!({
                "body": "Thanks for the report @octocat! I will look into it ASAP! (I'm a bot 🤖).",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 1,
                "html_url": "https://github.com/octo-org/hello-world/issues/3#issuecomment-1",
            })))
            .expect(1)
            .mount(&server)
            .await;
        let mut payload: serde_json::Value = serde_json::from_str(ISSUE_OPENED).unwrap();
        payload["issue"]["comments_url"] = json!(format!(
            "{}/repos/octo-org/hello-world/issues/3/comments",
            server.uri()
        ));
        let Some(Delivery {
            event: Event::IssueOpened(issue),
            ..
        }) = Delivery::decode("issues", payload).unwrap()
        else {
            panic!("expected an opened issue");
        };
        greet(&github, &issue).await.unwrap();
    }

    #[test]
    fn test_greeting() {
        let issue: Issue = serde_json::from_value(json!({
            "comments_url": "https://api.github.com/repos/octo-org/hello-world/issues/3/comments",
            "user": { "login": "hubot" },
        }))
        .unwrap();
        assert_eq!(
            greeting(&issue),
            "Thanks for the report @hubot! I will look into it ASAP! (I'm a bot 🤖)."
        );
    }

    #[tokio::test]
    async fn test_react() {
        let (server, github) = mock_github::setup().await;
        Mock::given(method("POST"))
            .and(path("/repos/octo-org/hello-world/issues/comments/1/reactions"))
            .and(body_json(json!({ "content": "+1" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1, "content": "+1" })))
            .expect(1)
            .mount(&server)
            .await;
        let mut payload: serde_json::Value = serde_json::from_str(COMMENT_CREATED).unwrap();
        payload["comment"]["url"] = json!(format!(
            "{}/repos/octo-org/hello-world/issues/comments/1",
            server.uri()
        ));
        let Some(Delivery {
            event: Event::CommentCreated(comment),
            ..
        }) = Delivery::decode("issue_comment", payload).unwrap()
        else {
            panic!("expected a created comment");
        };
        react(&github, &comment).await.unwrap();
        mock_github::assert_previews_requested(&server).await;
    }
}
