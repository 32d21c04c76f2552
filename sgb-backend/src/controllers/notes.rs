//! Notes API. Every route is a GET, mutations included.
//!
//! Students submit and list their own notes; teachers list notes per course
//! and can wipe the store.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sgb_types::{ApiResponse, NoteQuery};

use super::{query_pairs, require_student_from_request, require_teacher_from_request};
use crate::AppState;

/// Record a note for the logged in student
async fn submit_note(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let student = match require_student_from_request(&data, &req) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    let query = NoteQuery::from_pairs(&query_pairs(&req));

    data.notes.add_note(
        &student.id,
        &query.course,
        &query.kind,
        &query.type_id,
        &query.note,
    );

    HttpResponse::Ok().json(ApiResponse::empty())
}

/// Notes of the logged in student
async fn student_notes(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let student = match require_student_from_request(&data, &req) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    HttpResponse::Ok().json(ApiResponse::ok(data.notes.notes_for_student(&student.id)))
}

async fn course_notes(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = require_teacher_from_request(&data, &req) {
        return resp;
    }

    let course = path.into_inner();
    HttpResponse::Ok().json(ApiResponse::ok(data.notes.notes_for_course(&course)))
}

async fn clear_notes(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let teacher = match require_teacher_from_request(&data, &req) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    log::info!("[Notes] Clear requested by teacher {}", teacher.email);
    data.notes.clear_all();

    HttpResponse::Ok().json(ApiResponse::empty())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/student/note", web::get().to(submit_note))
        .route("/student/notes", web::get().to(student_notes))
        .route("/student/notes/", web::get().to(student_notes))
        .route("/course/{id}/notes", web::get().to(course_notes))
        .route("/notes/clear", web::get().to(clear_notes));
}
