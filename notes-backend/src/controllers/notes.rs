//! Notes REST API: save a translated note, list every note newest first.
//!
//! Any failure (unparseable body, missing key, store error) is reported the
//! same way: HTTP 500 with `{"status": "error", "message": ...}`.

use actix_web::{web, HttpResponse, Responder};

use crate::models::{SaveNoteRequest, StatusResponse};
use crate::AppState;

pub const SAVED_MESSAGE: &str = "Note saved successfully!";

/// Mounted under the `/api` scope
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/save_note").route(web::post().to(save_note)))
        .service(web::resource("/get_notes").route(web::get().to(get_notes)));
}

fn error_response(message: impl ToString) -> HttpResponse {
    HttpResponse::InternalServerError().json(StatusResponse::error(message.to_string()))
}

/// Save a note. The body is parsed by hand so a missing key takes the
/// 500 path instead of the extractor's 400.
async fn save_note(
    data: web::Data<AppState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> impl Responder {
    let body = match body {
        Ok(b) => b,
        Err(e) => {
            log::warn!("[NOTES] Failed to read save_note body: {}", e);
            return error_response(e);
        }
    };

    let request: SaveNoteRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("[NOTES] Rejected save_note body: {}", e);
            return error_response(e);
        }
    };

    match data.db.insert_note(
        &request.english_note,
        &request.translated_note,
        &request.language,
    ) {
        Ok(id) => {
            log::info!("[NOTES] Saved note {} ({})", id, request.language);
            HttpResponse::Created().json(StatusResponse::success(SAVED_MESSAGE))
        }
        Err(e) => {
            log::error!("[NOTES] Failed to save note: {}", e);
            error_response(e)
        }
    }
}

/// List every note, newest first. Query parameters are ignored.
async fn get_notes(data: web::Data<AppState>) -> impl Responder {
    match data.db.list_notes() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => {
            log::error!("[NOTES] Failed to list notes: {}", e);
            error_response(e)
        }
    }
}
