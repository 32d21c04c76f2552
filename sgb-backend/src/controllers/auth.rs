use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use sgb_types::{LoginQuery, LoginResponse};

use super::query_pairs;
use crate::AppState;

/// Log a student or teacher in and hand back their token
async fn login(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let query = LoginQuery::from_pairs(&query_pairs(&req));
    match data.sessions.login(&query.email, &query.password) {
        Ok(token) => HttpResponse::Ok().json(LoginResponse { token }),
        Err(e) => e.error_response(),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::get().to(login));
}
