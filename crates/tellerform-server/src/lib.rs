// tellerform-server - axum routes that validate banking form submissions
// Accepted forms answer 200 with the cleaned data, rejected forms 422 with
// field errors and the submitted values.

pub mod error;
pub mod extract;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tellerform::{
    DepositForm, LoginForm, RegistrationForm, ResetPasswordForm, ResetPasswordRequestForm,
    UserStore,
};
use tower_http::trace::TraceLayer;

pub use error::ErrorResponse;
pub use extract::Submission;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: impl UserStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/login", post(routes::validate::<LoginForm>))
        .route("/register", post(routes::validate::<RegistrationForm>))
        .route("/transfer", post(routes::transfer))
        .route("/transfer/confirm", post(routes::confirm_transfer))
        .route("/deposit", post(routes::validate::<DepositForm>))
        .route(
            "/reset_password_request",
            post(routes::validate::<ResetPasswordRequestForm>),
        )
        .route("/reset_password", post(routes::validate::<ResetPasswordForm>))
        .route("/users/:id/edit", post(routes::edit_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
