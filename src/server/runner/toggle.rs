use anyhow::{Context, Result};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

use crate::title_policy::WipToggle;

#[derive(Deserialize)]
struct PullRequestTitle {
    title: String,
}

#[derive(Serialize)]
struct EditTitle<'a> {
    title: &'a str,
}

/// Add or strip the WIP marker in the title of the PR at `pr_url`.
/// Returns the title that was written.
pub(super) async fn toggle_wip(
    github: &Octocrab,
    pr_url: &str,
    toggle: WipToggle,
) -> Result<String> {
    let pr: PullRequestTitle = github
        .get(pr_url, None::<&()>)
        .await
        .with_context(|| format!("failed to fetch {pr_url}"))?;
    let title = toggle.apply(&pr.title);
    tracing::info!("{toggle}: {:?} → {title:?}", pr.title);
    let _: serde_json::Value = github
        .patch(pr_url, Some(&EditTitle { title: &title }))
        .await
        .with_context(|| format!("failed to update title of {pr_url}"))?;
    Ok(title)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::server::mock_github;

    const PR: &str = "/repos/octo-org/hello-world/pulls/7";

    async fn expect_title_change(server: &MockServer, before: &str, after: &str) {
        Mock::given(method("GET"))
            .and(path(PR))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "number": 7, "title": before })),
            )
            .expect(1)
            .mount(server)
            .await;
        Mock::given(method("PATCH"))
            .and(path(PR))
            .and(body_json(json!({ "title": after })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "number": 7, "title": after })),
            )
            .expect(1)
            .mount(server)
            .await;
        mock_github::setup_error_handler(server, &format!("GET on {PR} was not received")).await;
    }

    #[tokio::test]
    async fn test_unwip() {
        let (server, github) = mock_github::setup().await;
        expect_title_change(&server, "WIP: add feature", "add feature").await;
        let title = toggle_wip(&github, &format!("{}{PR}", server.uri()), WipToggle::Unwip)
            .await
            .unwrap();
        assert_eq!(title, "add feature");
    }

    #[tokio::test]
    async fn test_wip() {
        let (server, github) = mock_github::setup().await;
        expect_title_change(&server, "Fix login", "WIP: Fix login").await;
        let title = toggle_wip(&github, &format!("{}{PR}", server.uri()), WipToggle::Wip)
            .await
            .unwrap();
        assert_eq!(title, "WIP: Fix login");
    }

    #[tokio::test]
    async fn test_wip_twice_double_prefixes() {
        let (server, github) = mock_github::setup().await;
        expect_title_change(&server, "WIP: Fix login", "WIP: WIP: Fix login").await;
        toggle_wip(&github, &format!("{}{PR}", server.uri()), WipToggle::Wip)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_patch() {
        let (server, github) = mock_github::setup().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        mock_github::setup_error_handler(&server, "Not Found").await;
        let err = toggle_wip(&github, &format!("{}{PR}", server.uri()), WipToggle::Unwip)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to fetch "), "{err}");
    }
}
