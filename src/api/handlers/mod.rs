//! Route handlers: auth (signup/login), health and the static pages.

pub mod auth;
pub mod health;
pub mod pages;
