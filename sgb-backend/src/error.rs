use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sgb_types::ApiResponse;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::Role;

/// The only error a client ever sees. Rendered as HTTP 500.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Email and password do not match a student or a teacher")]
    UnknownCredentials,

    #[error("Authentification error, token do not match current logged in {0}")]
    TokenMismatch(Role),
}

impl ResponseError for AuthenticationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::err(format!("Error: {}", self)))
    }
}

/// Failure to load reference data at startup
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
