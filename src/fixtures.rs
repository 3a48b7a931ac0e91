//! Webhook bodies as GitHub sends them, trimmed to a readable size.

pub(crate) const PR_OPENED: &str = include_str!("fixtures/pull_request_opened.json");
pub(crate) const ISSUE_OPENED: &str = include_str!("fixtures/issue_opened.json");
pub(crate) const COMMENT_CREATED: &str = include_str!("fixtures/issue_comment_created.json");
pub(crate) const CHECK_RUN_REQUESTED_ACTION: &str =
    include_str!("fixtures/check_run_requested_action.json");
/// Throwaway RSA key, only used to build App clients in tests.
pub(crate) const APP_KEY: &str = include_str!("fixtures/test_app_key.pem");
