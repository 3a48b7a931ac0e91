pub(crate) const CHECK_RUN_NAME: &str = "Work-in-progress state 🤖";
pub(crate) const COMMENT_REACTION: &str = "+1";

/// Preview media types for reactions and the checks API.
pub(crate) const API_PREVIEWS: [&str; 2] = ["squirrel-girl", "antiope"];

/// Greeting posted on new issues, after thanking their author.
pub(crate) const GREETING: &str = "I will look into it ASAP! (I'm a bot 🤖).";
