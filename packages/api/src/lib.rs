//! # API crate — shared fullstack server functions for the partner portal
//!
//! Defines the Dioxus server functions the web frontend calls, plus the
//! domain models they exchange.
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! compiled twice: once with the server logic (behind the `server` feature)
//! and once as a thin client stub that forwards the call over HTTP.
//!
//! - [`register_restaurant`] — receives a validated [`SignUpRequest`]
//! - [`send_authentication_link`] — requests a sign-in link for an email
//!
//! Neither function persists anything yet. Both log the received payload so
//! the onboarding pipeline can be wired in behind the same signatures later.

use dioxus::prelude::*;

pub mod models;

pub use models::{SignUpError, SignUpRequest};

/// Register a new restaurant partner.
///
/// The request is re-validated server-side; client-side validation is not
/// trusted. There is no registration store yet, so the accepted payload is
/// logged and acknowledged.
#[server]
pub async fn register_restaurant(request: SignUpRequest) -> Result<(), ServerFnError> {
    request
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(
        email = %request.email,
        restaurant = %request.restaurant_name,
        phone = %request.phone,
        manager = %request.manager_name,
        "new restaurant sign-up received"
    );

    Ok(())
}

/// Request an authentication link for an existing partner.
///
/// Mail delivery is not wired in; the request is logged and acknowledged.
#[server]
pub async fn send_authentication_link(email: String) -> Result<(), ServerFnError> {
    use validator::ValidateEmail;

    let email = email.trim().to_string();
    if !email.validate_email() {
        return Err(ServerFnError::new(SignUpError::InvalidEmail.to_string()));
    }

    tracing::info!(email = %email, "authentication link requested");

    Ok(())
}
