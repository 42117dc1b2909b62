use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{Error, HttpResponse, web};
use futures::{StreamExt, TryStreamExt};
use log::{error, info};
use serde::Deserialize;
use std::path::PathBuf;

use crate::classifier::ClassifierService;
use crate::classifier::preprocess;
use crate::config::{AppConfig, MAX_UPLOAD_BYTES};
use crate::render;
use crate::storage::TransientStore;
use crate::upload;

pub fn configure_routes(cfg: &mut web::ServiceConfig, static_dir: PathBuf) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(
            web::resource("/predict")
                .route(web::get().to(predict_form))
                .route(web::post().to(predict_submit)),
        )
        .service(Files::new("/static", static_dir));
}

async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/predict"))
        .finish()
}

#[derive(Deserialize)]
struct FormQuery {
    notice: Option<String>,
}

async fn predict_form(
    config: web::Data<AppConfig>,
    query: web::Query<FormQuery>,
) -> HttpResponse {
    let css = render::static_href(&config.static_dir, "style.css");
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(render::form_page(query.notice.as_deref(), &css))
}

/// Flash-style rejection: back to the form with a notice, nothing
/// written to disk.
fn notice_redirect(notice: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((
            header::LOCATION,
            format!("/predict?notice={}", urlencoding::encode(notice)),
        ))
        .finish()
}

enum UploadOutcome {
    File { filename: String, bytes: Vec<u8> },
    Missing,
    TooLarge,
}

/// Pulls the `file` field out of the multipart body, capping the
/// streamed size at the 1 MiB limit so an oversized body is rejected
/// before anything reaches the pipeline.
async fn read_upload(payload: &mut Multipart) -> Result<UploadOutcome, Error> {
    while let Ok(Some(mut field)) = payload.try_next().await {
        let Some(disposition) = field.content_disposition() else {
            continue;
        };
        if disposition.get_name() != Some("file") {
            continue;
        }
        let Some(filename) = disposition.get_filename().map(str::to_string) else {
            return Ok(UploadOutcome::Missing);
        };
        if filename.is_empty() {
            return Ok(UploadOutcome::Missing);
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            if bytes.len() + data.len() > MAX_UPLOAD_BYTES {
                return Ok(UploadOutcome::TooLarge);
            }
            bytes.extend_from_slice(&data);
        }
        if bytes.is_empty() {
            return Ok(UploadOutcome::Missing);
        }
        return Ok(UploadOutcome::File { filename, bytes });
    }
    Ok(UploadOutcome::Missing)
}

/// The request pipeline: validate, persist transiently, decode and
/// resize, classify, rank, clean up, render. Every step is a blocking
/// call inline in the handler; the transient file never outlives the
/// request.
async fn predict_submit(
    service: web::Data<ClassifierService>,
    store: web::Data<TransientStore>,
    config: web::Data<AppConfig>,
    mut payload: Multipart,
) -> Result<HttpResponse, Error> {
    let (filename, bytes) = match read_upload(&mut payload).await? {
        UploadOutcome::File { filename, bytes } => (filename, bytes),
        UploadOutcome::Missing => return Ok(notice_redirect("No file.")),
        UploadOutcome::TooLarge => {
            return Ok(
                HttpResponse::PayloadTooLarge().body("Upload exceeds the 1 MiB limit.")
            );
        }
    };

    let extension = match upload::validate(&filename) {
        Ok(extension) => extension,
        Err(err) => {
            info!("rejected upload: {}", err);
            return Ok(notice_redirect("No file."));
        }
    };

    let path = match store.save(&bytes, &extension) {
        Ok(path) => path,
        Err(err) => {
            error!("failed to store upload: {}", err);
            return Ok(HttpResponse::InternalServerError().body("Could not store the upload."));
        }
    };

    // Decode, then delete right away; the file is only needed on disk
    // for the duration of the decode.
    let decoded = preprocess::decode_image(&path);
    store.remove(&path);

    let image = match decoded {
        Ok(image) => image,
        Err(err) => {
            info!("rejected undecodable upload {:?}: {}", filename, err);
            return Ok(notice_redirect("Could not read that image. Try a PNG or JPEG."));
        }
    };

    let tensor = preprocess::to_input_tensor(&image);
    match service.classify(&tensor) {
        Ok(predictions) => {
            if let Some(best) = predictions.first() {
                info!("top-1 for {:?}: {} ({}%)", filename, best.label, best.score);
            }
            let css = render::static_href(&config.static_dir, "style.css");
            Ok(HttpResponse::Ok()
                .content_type(header::ContentType::html())
                .body(render::result_page(&predictions, &css)))
        }
        Err(err) => {
            error!("inference failed for {:?}: {}", filename, err);
            Ok(HttpResponse::InternalServerError().body("Prediction failed."))
        }
    }
}
