use crate::{password::PasswordHasher, store::CredentialStore};
use anyhow::{Result, anyhow};
use std::{fmt, str::FromStr, sync::Arc};

/// How domain outcomes map onto HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Every outcome is a `200` with a text body.
    #[default]
    Compat,
    /// `201` created, `409` taken, `404` unknown user, `401` wrong password.
    Strict,
}

impl StatusPolicy {
    pub const VALUES: [&'static str; 2] = ["compat", "strict"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compat => "compat",
            Self::Strict => "strict",
        }
    }
}

impl FromStr for StatusPolicy {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "compat" => Ok(Self::Compat),
            "strict" => Ok(Self::Strict),
            other => Err(anyhow!("invalid status code policy: {other}")),
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the auth handlers need, built once at startup and shared via
/// an `Extension` layer.
#[derive(Clone)]
pub struct AuthState {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    status_policy: StatusPolicy,
}

impl AuthState {
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            store,
            hasher,
            status_policy: StatusPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    #[must_use]
    pub fn hasher(&self) -> &Arc<dyn PasswordHasher> {
        &self.hasher
    }

    #[must_use]
    pub const fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("status_policy", &self.status_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_policy_parses_case_insensitively() {
        assert_eq!("compat".parse::<StatusPolicy>().unwrap(), StatusPolicy::Compat);
        assert_eq!(" STRICT ".parse::<StatusPolicy>().unwrap(), StatusPolicy::Strict);
        assert!("teapot".parse::<StatusPolicy>().is_err());
    }

    #[test]
    fn status_policy_defaults_to_compat() {
        assert_eq!(StatusPolicy::default(), StatusPolicy::Compat);
        assert_eq!(StatusPolicy::Strict.to_string(), "strict");
    }
}
