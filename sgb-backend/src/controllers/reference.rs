//! Read-only listings of the reference data, for teachers.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sgb_types::ApiResponse;

use super::require_teacher_from_request;
use crate::AppState;

async fn list_courses(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_teacher_from_request(&data, &req) {
        return resp;
    }

    HttpResponse::Ok().json(ApiResponse::ok(data.directory.courses()))
}

async fn list_students(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_teacher_from_request(&data, &req) {
        return resp;
    }

    HttpResponse::Ok().json(ApiResponse::ok(data.directory.students()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/courses", web::get().to(list_courses))
        .route("/students", web::get().to(list_students));
}
