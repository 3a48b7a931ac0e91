#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;

mod cli;
mod constants;
mod event;
#[cfg(test)]
mod fixtures;
mod octocrab_utils;
mod server;
mod title_policy;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Serve(args) => {
            cli::init_tracing(cli.verbose);
            server::serve(args).await?;
        }
        cli::Commands::Classify(args) => classify(&args),
    }
    Ok(())
}

fn classify(args: &cli::ClassifyArgs) {
    let is_wip = title_policy::is_wip(&args.title);
    println!("{}", if is_wip { "wip" } else { "ready" });
    if let Some(toggle) = args.toggle {
        println!("{}", toggle.apply(&args.title));
    }
}
