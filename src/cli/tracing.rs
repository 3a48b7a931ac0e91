use tracing::Level;
use tracing_subscriber::prelude::*;

/// Log INFO and up; with `verbose`, also HTTP request spans, octocrab calls and
/// the bot's own debug events.
pub(crate) fn init(verbose: bool) {
    let detail = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = ["tower_http::trace", "octocrab", env!("CARGO_CRATE_NAME")]
        .into_iter()
        .fold(tracing_subscriber::filter::Targets::new(), |targets, target| {
            targets.with_target(target, detail)
        })
        .with_default(Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(verbose))
        .with(filter)
        .init();
}
