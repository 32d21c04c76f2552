pub mod auth;
pub mod health;
pub mod notes;
pub mod reference;


use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::models::Identity;
use crate::AppState;

pub const API_PREFIX: &str = "/api/v1/sgb";

/// Request header carrying the login token
pub const TOKEN_HEADER: &str = "token";

/// Register every route of the service
pub fn config(cfg: &mut web::ServiceConfig) {
    health::config(cfg);
    cfg.service(
        web::scope(API_PREFIX)
            .configure(auth::config)
            .configure(reference::config)
            .configure(notes::config),
    );
}

/// Decoded query pairs, in order. Never rejects a query string, so a
/// malformed or repeated parameter cannot short-circuit the token check.
pub(crate) fn query_pairs(req: &HttpRequest) -> Vec<(String, String)> {
    web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default()
}

fn token_from_request(req: &HttpRequest) -> Option<&str> {
    req.headers().get(TOKEN_HEADER).and_then(|h| h.to_str().ok())
}

/// Validate the request token against the logged in student
pub(crate) fn require_student_from_request(
    state: &web::Data<AppState>,
    req: &HttpRequest,
) -> Result<Identity, HttpResponse> {
    state
        .sessions
        .require_student(token_from_request(req))
        .map_err(|e| e.error_response())
}

/// Validate the request token against the logged in teacher
pub(crate) fn require_teacher_from_request(
    state: &web::Data<AppState>,
    req: &HttpRequest,
) -> Result<Identity, HttpResponse> {
    state
        .sessions
        .require_teacher(token_from_request(req))
        .map_err(|e| e.error_response())
}
