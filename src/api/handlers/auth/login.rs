use super::{AuthState, authenticate, credentials::Credentials, respond};
use axum::{extract::Extension, response::Response};
use std::sync::Arc;
use tracing::instrument;

#[utoipa::path(
    post,
    path = "/login",
    request_body(
        content = super::credentials::CredentialsBody,
        content_type = "application/x-www-form-urlencoded",
        description = "Also accepted as application/json"
    ),
    responses(
        (status = 200, description = "Home page on success; plain text for unknown user or wrong password (compat policy)", body = String, content_type = "text/html"),
        (status = 401, description = "Wrong password (strict policy)", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found (strict policy)", body = String, content_type = "text/plain"),
        (status = 500, description = "Server error", body = String, content_type = "text/plain"),
    ),
    tag = "auth"
)]
// axum handler for login
#[instrument(skip_all, fields(username = %credentials.username))]
pub async fn login(state: Extension<Arc<AuthState>>, credentials: Credentials) -> Response {
    let Credentials { username, password } = credentials;

    let result = authenticate(&state, &username, password).await;

    respond(state.status_policy(), result, "login")
}
