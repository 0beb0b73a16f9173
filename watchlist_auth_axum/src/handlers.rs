use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use watchlist_auth::{CoordinationError, RegistrationErrors, RegistrationForm};

use super::config::AUTH_REDIRECT_USER;
use super::error::{IntoResponseError, status_for};
use super::middleware::found;
use super::pages::{login_form, register_form};
use super::state::AuthState;

#[derive(Deserialize, Default)]
#[serde(default)]
pub(super) struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(super) struct RegisterRequest {
    username: String,
    password: String,
    verify: String,
}

pub(super) async fn login_page(State(state): State<AuthState>) -> Html<String> {
    login_form(state.login_path(), None)
}

pub(super) async fn login(
    State(state): State<AuthState>,
    Form(form): Form<LoginRequest>,
) -> Result<Response, (StatusCode, String)> {
    let result = state.service().login(&form.username, &form.password).await;

    // Bad credentials re-render the form, nothing is issued
    if let Err(e @ (CoordinationError::InvalidUsername | CoordinationError::InvalidPassword)) =
        &result
    {
        let form = login_form(state.login_path(), Some(&e.to_string()));
        return Ok((status_for(e), form).into_response());
    }

    let outcome = result.into_response_error()?;
    tracing::debug!("Redirecting to {}", AUTH_REDIRECT_USER.as_str());
    Ok((outcome.headers, found(&AUTH_REDIRECT_USER)).into_response())
}

pub(super) async fn register_page() -> Html<String> {
    register_form(&RegistrationErrors::default())
}

pub(super) async fn register(
    State(state): State<AuthState>,
    Form(form): Form<RegisterRequest>,
) -> Result<Response, (StatusCode, String)> {
    let form = RegistrationForm {
        username: form.username,
        password: form.password,
        verify: form.verify,
    };
    let result = state.service().register(&form).await;

    if let Err(e @ CoordinationError::Registration(errors)) = &result {
        return Ok((status_for(e), register_form(errors)).into_response());
    }

    let outcome = result.into_response_error()?;
    Ok((outcome.headers, found(&AUTH_REDIRECT_USER)).into_response())
}

pub(super) async fn logout(State(state): State<AuthState>) -> Result<Response, (StatusCode, String)> {
    let headers = state.service().logout().into_response_error()?;
    Ok((headers, found(state.login_path())).into_response())
}
