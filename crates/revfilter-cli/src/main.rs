//! revfilter: filter git history by change sets and sign-offs
//!
//! This binary crate lists the files a commit changed (merge-aware) and
//! walks history keeping commits that pass sign-off, message and path
//! filters.

use anyhow::Result;
use clap::Parser;
use revfilter_cli::commands;
use revfilter_cli::config::Config;
use tracing::debug;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Starting revfilter");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&config, &mut out)
}
