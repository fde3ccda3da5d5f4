//! Signup and login.
//!
//! The service functions (`create_account`, `authenticate`) return an
//! [`Outcome`] for every expected branch and an error only for store or hashing
//! failures. The axum handlers turn both into responses according to the
//! configured [`StatusPolicy`].

pub mod credentials;
pub mod login;
pub mod signup;
pub mod state;


pub use self::state::{AuthState, StatusPolicy};

use crate::{
    password::fits,
    store::{InsertOutcome, NewUser},
    views::View,
};
use anyhow::{Context, Result};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error};

pub const SERVER_ERROR: &str = "Server error.";

/// Named result of a signup or login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    AlreadyExists,
    /// Signup password longer than bcrypt can hash without truncation.
    PasswordTooLong,
    Authenticated,
    NotFound,
    WrongPassword,
}

impl Outcome {
    /// Plain-text body, `None` for `Authenticated` which renders the home view.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Created => Some("User registered successfully."),
            Self::AlreadyExists => Some("User already exists. Please choose another username."),
            Self::PasswordTooLong => Some("Password is too long."),
            Self::NotFound => Some("User not found."),
            Self::WrongPassword => Some("Wrong password."),
            Self::Authenticated => None,
        }
    }

    #[must_use]
    pub const fn status(self, policy: StatusPolicy) -> StatusCode {
        match (policy, self) {
            (StatusPolicy::Compat, _) | (StatusPolicy::Strict, Self::Authenticated) => {
                StatusCode::OK
            }
            (StatusPolicy::Strict, Self::Created) => StatusCode::CREATED,
            (StatusPolicy::Strict, Self::AlreadyExists) => StatusCode::CONFLICT,
            (StatusPolicy::Strict, Self::PasswordTooLong) => StatusCode::BAD_REQUEST,
            (StatusPolicy::Strict, Self::NotFound) => StatusCode::NOT_FOUND,
            (StatusPolicy::Strict, Self::WrongPassword) => StatusCode::UNAUTHORIZED,
        }
    }

    #[must_use]
    pub fn to_response(self, policy: StatusPolicy) -> Response {
        let status = self.status(policy);
        match self.message() {
            Some(text) => (status, text).into_response(),
            None => (status, View::Home).into_response(),
        }
    }
}

/// Map a service result to a response; errors become a generic `500`.
pub(crate) fn respond(policy: StatusPolicy, result: Result<Outcome>, action: &str) -> Response {
    match result {
        Ok(outcome) => {
            debug!("{action} outcome: {outcome:?}");
            outcome.to_response(policy)
        }
        Err(e) => {
            error!("Error during {action}: {e:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR).into_response()
        }
    }
}

/// Register `username` unless the name is taken or the password does not fit
/// in a bcrypt hash.
///
/// # Errors
/// Returns an error if the store or the hasher fails.
pub async fn create_account(
    state: &AuthState,
    username: &str,
    password: SecretString,
) -> Result<Outcome> {
    if state.store().find_by_name(username).await?.is_some() {
        return Ok(Outcome::AlreadyExists);
    }

    if !fits(password.expose_secret()) {
        return Ok(Outcome::PasswordTooLong);
    }

    let hasher = state.hasher().clone();
    let hash = tokio::task::spawn_blocking(move || hasher.hash(password.expose_secret()))
        .await
        .context("password hashing task failed")??;

    // the unique constraint catches signups that raced past the lookup
    match state.store().insert(NewUser::new(username, hash)).await? {
        InsertOutcome::Created => Ok(Outcome::Created),
        InsertOutcome::Conflict => Ok(Outcome::AlreadyExists),
    }
}

/// Check `password` against the stored hash for `username`.
///
/// # Errors
/// Returns an error if the store fails or the stored hash is malformed.
pub async fn authenticate(
    state: &AuthState,
    username: &str,
    password: SecretString,
) -> Result<Outcome> {
    let Some(user) = state.store().find_by_name(username).await? else {
        return Ok(Outcome::NotFound);
    };

    let hasher = state.hasher().clone();
    let matches =
        tokio::task::spawn_blocking(move || hasher.verify(password.expose_secret(), &user.password))
            .await
            .context("password verification task failed")??;

    if matches {
        Ok(Outcome::Authenticated)
    } else {
        Ok(Outcome::WrongPassword)
    }
}
