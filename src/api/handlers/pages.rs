use crate::views::View;

pub async fn login() -> View {
    View::Login
}

pub async fn signup() -> View {
    View::Signup
}

pub async fn news() -> View {
    View::News
}

pub async fn volunteer() -> View {
    View::Volunteer
}

pub async fn thankyou() -> View {
    View::ThankYou
}
