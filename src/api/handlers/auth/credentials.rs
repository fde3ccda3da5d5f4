use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `/signup` and `/login`, form-encoded or JSON.
#[derive(ToSchema, Deserialize)]
pub struct CredentialsBody {
    username: String,
    password: String,
}

/// Extracted credentials. The plaintext password never shows up in `Debug`.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl From<CredentialsBody> for Credentials {
    fn from(body: CredentialsBody) -> Self {
        Self {
            username: body.username,
            password: SecretString::from(body.password),
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with("application/json"))
}

impl<S> FromRequest<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = if is_json(&req) {
            let Json(body) = Json::<CredentialsBody>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            body
        } else {
            let Form(body) = Form::<CredentialsBody>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            body
        };

        Ok(body.into())
    }
}
