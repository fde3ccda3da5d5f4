//! # Kindred (community volunteer portal)
//!
//! `kindred` serves a small set of server-rendered pages (news, volunteer,
//! thank-you) and lets visitors create an account and log in.
//!
//! ## Credentials
//!
//! Passwords are hashed with `bcrypt` (cost 10) before they reach the store and
//! verified with bcrypt's own comparison on login. The plaintext only lives in a
//! `SecretString` for the duration of the request.
//!
//! ## Uniqueness
//!
//! User names are unique per store. The store enforces it atomically (unique
//! constraint in PostgreSQL, insert-if-absent in memory) so two concurrent
//! signups for the same name cannot both succeed.
//!
//! ## Status codes
//!
//! By default every domain outcome (`User not found.`, `Wrong password.`, ...)
//! is a `200` with a text body. `--status-codes strict` maps them to
//! `201`/`409`/`404`/`401` instead.

pub mod api;
pub mod cli;
pub mod password;
pub mod store;
pub mod views;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
