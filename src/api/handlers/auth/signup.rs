use super::{AuthState, create_account, credentials::Credentials, respond};
use axum::{extract::Extension, response::Response};
use std::sync::Arc;
use tracing::instrument;

#[utoipa::path(
    post,
    path = "/signup",
    request_body(
        content = super::credentials::CredentialsBody,
        content_type = "application/x-www-form-urlencoded",
        description = "Also accepted as application/json"
    ),
    responses(
        (status = 200, description = "User registered, name already taken, or password too long (compat policy)", body = String, content_type = "text/plain"),
        (status = 201, description = "User registered (strict policy)", body = String, content_type = "text/plain"),
        (status = 400, description = "Password longer than 72 bytes (strict policy)", body = String, content_type = "text/plain"),
        (status = 409, description = "Name already taken (strict policy)", body = String, content_type = "text/plain"),
        (status = 500, description = "Server error", body = String, content_type = "text/plain"),
    ),
    tag = "auth"
)]
// axum handler for signup
#[instrument(skip_all, fields(username = %credentials.username))]
pub async fn signup(state: Extension<Arc<AuthState>>, credentials: Credentials) -> Response {
    let Credentials { username, password } = credentials;

    let result = create_account(&state, &username, password).await;

    respond(state.status_policy(), result, "signup")
}
