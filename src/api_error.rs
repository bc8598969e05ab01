use rocket::http::{Status, StatusClass};
use rocket::response::{self, Responder};
use rocket::serde::json::{self, Json};
use rocket::{catch, Request};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::sync::PoisonError;

/// Failure of a single API operation.
///
/// Every variant is scoped to the request that raised it; no store state is
/// mutated before one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Generic internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(what: impl Into<String>) -> ApiError {
        ApiError::Validation(what.into())
    }

    pub fn not_found(what: impl Into<String>) -> ApiError {
        ApiError::NotFound(what.into())
    }

    pub fn conflict(what: impl Into<String>) -> ApiError {
        ApiError::Conflict(what.into())
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Conflict(_) => Status::Conflict,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl<T> From<PoisonError<T>> for ApiError {
    fn from(e: PoisonError<T>) -> ApiError {
        ApiError::Internal(e.to_string())
    }
}

impl<'a> From<json::Error<'a>> for ApiError {
    fn from(e: json::Error<'a>) -> ApiError {
        match e {
            json::Error::Io(e) => ApiError::Validation(format!("Unreadable request body: {}", e)),
            json::Error::Parse(_, e) => ApiError::Validation(format!("Malformed request body: {}", e)),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();

        if status.class() == StatusClass::ServerError {
            tracing::error!(method = %request.method(), uri = %request.uri(), error = %self, "request failed");
        } else {
            tracing::warn!(method = %request.method(), uri = %request.uri(), status = status.code, error = %self, "request rejected");
        }

        (status, Json(ErrorBody { error: self.to_string() })).respond_to(request)
    }
}

#[catch(404)]
pub fn not_found(request: &Request<'_>) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: format!("No route for {} {}", request.method(), request.uri()),
    })
}

#[catch(422)]
pub fn unprocessable(_request: &Request<'_>) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: String::from("Request could not be processed"),
    })
}

#[catch(500)]
pub fn internal(_request: &Request<'_>) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: String::from("Internal server error"),
    })
}
