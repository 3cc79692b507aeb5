//! Authentication and profile endpoints

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, patch, post},
};
use serde::Deserialize;

use palco_core::{Account, AccountPatch, NewAccount};

use crate::routes::{ApiError, read_lock, write_lock};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
        .route("/auth/profile", patch(update_profile))
}

/// Request body for signup. The password travels with the form but is never
/// stored or verified anywhere.
#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(flatten)]
    pub account: NewAccount,
    #[allow(dead_code)]
    pub password: Option<String>,
}

/// POST /auth/signup - Register a new account and sign it in
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<Account>, ApiError> {
    let mut accounts = write_lock(&state.accounts)?;
    let account = accounts.register(req.account)?;
    Ok(Json(account))
}

/// Credentials for POST /auth/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login - Sign in by email
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Account>, ApiError> {
    let mut accounts = write_lock(&state.accounts)?;
    let account = accounts.authenticate(&req.email, &req.password)?;
    Ok(Json(account))
}

/// POST /auth/logout - Clear the session (a no-op when anonymous)
async fn logout(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    write_lock(&state.accounts)?.logout();
    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/session - The signed-in account, or null
async fn session(State(state): State<AppState>) -> Result<Json<Option<Account>>, ApiError> {
    let accounts = read_lock(&state.accounts)?;
    Ok(Json(accounts.session().cloned()))
}

/// PATCH /auth/profile - Merge fields into the signed-in account
async fn update_profile(
    State(state): State<AppState>,
    Json(patch): Json<AccountPatch>,
) -> Result<Json<Account>, ApiError> {
    let mut accounts = write_lock(&state.accounts)?;
    let account = accounts.update_profile(patch)?;
    Ok(Json(account))
}
