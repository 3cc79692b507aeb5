pub mod auth;
pub mod events;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use palco_core::{Account, AccountKind, AccountStore, PalcoError, ScheduleError};

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A business or infrastructure error rendered as an HTTP response.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::FORBIDDEN,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<PalcoError> for ApiError {
    fn from(err: PalcoError) -> Self {
        let status = match &err {
            PalcoError::DuplicateEmail(_) => StatusCode::CONFLICT,
            PalcoError::InvalidCredentials | PalcoError::NoActiveSession => {
                StatusCode::UNAUTHORIZED
            }
            PalcoError::EventNotFound(_) => StatusCode::NOT_FOUND,
            PalcoError::Storage(_) | PalcoError::Config(_) | PalcoError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

impl From<ScheduleError> for ApiError {
    fn from(err: ScheduleError) -> Self {
        ApiError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: err.to_string(),
        }
    }
}

pub fn read_lock<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, ApiError> {
    lock.read()
        .map_err(|_| ApiError::internal("state lock poisoned"))
}

pub fn write_lock<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, ApiError> {
    lock.write()
        .map_err(|_| ApiError::internal("state lock poisoned"))
}

/// Reject anonymous callers. Same behavior as the route guard in the GUI.
pub fn require_session(accounts: &AccountStore) -> Result<Account, ApiError> {
    accounts
        .session()
        .cloned()
        .ok_or_else(|| ApiError::from(PalcoError::NoActiveSession))
}

/// Reject callers that are not signed in as an organizer.
pub fn require_organizer(accounts: &AccountStore) -> Result<Account, ApiError> {
    let account = require_session(accounts)?;
    if account.kind != AccountKind::Organizer {
        return Err(ApiError::forbidden(
            "This operation requires an organizer account",
        ));
    }
    Ok(account)
}
