use crate::{
    api::{self, handlers::auth::AuthState, handlers::auth::StatusPolicy},
    password::BcryptHasher,
    store::{CredentialStore, MemoryCredentialStore, PgCredentialStore},
};
use anyhow::{Context, Result, anyhow};
use std::{path::PathBuf, sync::Arc};
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub max_connections: u32,
    pub public_dir: PathBuf,
    pub status_policy: StatusPolicy,
}

/// Backend selected by the DSN scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl StoreKind {
    /// # Errors
    /// Returns an error if the DSN is not a URL or uses an unsupported scheme.
    pub fn from_dsn(dsn: &str) -> Result<Self> {
        let url = Url::parse(dsn).context("invalid DSN")?;
        match url.scheme() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow!("unsupported DSN scheme: {other}")),
        }
    }
}

/// DSN safe to log: password replaced.
#[must_use]
pub fn redact_dsn(dsn: &str) -> String {
    match Url::parse(dsn) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => "<invalid dsn>".to_string(),
    }
}

/// Execute the server action.
/// # Errors
/// Returns an error if the store cannot be opened or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let store: Arc<dyn CredentialStore> = match StoreKind::from_dsn(&args.dsn)? {
        StoreKind::Postgres => {
            debug!("connecting to {}", redact_dsn(&args.dsn));
            Arc::new(PgCredentialStore::connect(&args.dsn, args.max_connections).await?)
        }
        StoreKind::Memory => {
            warn!("Using in-memory credential store, accounts are lost on exit");
            Arc::new(MemoryCredentialStore::new())
        }
    };

    if !args.public_dir.is_dir() {
        warn!(
            "Public directory {} does not exist, static files will 404",
            args.public_dir.display()
        );
    }

    info!("Status code policy: {}", args.status_policy);

    let state = AuthState::new(store, Arc::new(BcryptHasher::new()))
        .with_status_policy(args.status_policy);

    api::new(args.port, state, &args.public_dir).await
}
