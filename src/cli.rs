mod octocrab_utils;
mod parser;
mod tracing;

pub(crate) use parser::{AuthArgs, ClassifyArgs, Cli, Commands, ServeArgs};
pub(crate) use tracing::init as init_tracing;
