//! Map validated CLI arguments to an [`Action`].

use crate::api::handlers::auth::StatusPolicy;
use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{ARG_PORT, ARG_PUBLIC_DIR, ARG_STATUS_CODES, store};
use anyhow::Result;
use std::path::PathBuf;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);

    let public_dir = matches
        .get_one::<String>(ARG_PUBLIC_DIR)
        .map_or_else(|| PathBuf::from("public"), PathBuf::from);

    let status_policy = matches
        .get_one::<String>(ARG_STATUS_CODES)
        .map(|value| value.parse::<StatusPolicy>())
        .transpose()?
        .unwrap_or_default();

    let store_opts = store::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        dsn: store_opts.dsn,
        max_connections: store_opts.max_connections,
        public_dir,
        status_policy,
    }))
}
