//! Server-rendered pages. Templates are embedded at compile time and carry no
//! per-request data.

use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Signup,
    Home,
    News,
    Volunteer,
    ThankYou,
}

impl View {
    #[cfg(test)]
    pub const ALL: [Self; 6] = [
        Self::Login,
        Self::Signup,
        Self::Home,
        Self::News,
        Self::Volunteer,
        Self::ThankYou,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Home => "home",
            Self::News => "news",
            Self::Volunteer => "volunteer",
            Self::ThankYou => "thankyou",
        }
    }

    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Login => include_str!("../views/login.html"),
            Self::Signup => include_str!("../views/signup.html"),
            Self::Home => include_str!("../views/home.html"),
            Self::News => include_str!("../views/news.html"),
            Self::Volunteer => include_str!("../views/volunteer.html"),
            Self::ThankYou => include_str!("../views/thankyou.html"),
        }
    }
}

#[must_use]
pub fn render(view: View) -> Html<&'static str> {
    Html(view.template())
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        debug!("rendering {} view", self.name());
        render(self).into_response()
    }
}
