// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::analysis::{AnalysisResult, AnalyzeRequest};
use crate::config::ApiConfig;
use crate::export::ExportRow;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::NamedFile;
use rocket::http::{Header, Status};
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/")]
pub async fn index() -> Option<NamedFile> {
    NamedFile::open("static/index.html").await.ok()
}

#[post("/analyze", data = "<request>")]
pub async fn analyze_cvs(
    request: Json<AnalyzeRequest>,
    config: &State<ApiConfig>,
) -> Result<Json<Vec<AnalysisResult>>, status::Custom<Json<ErrorResponse>>> {
    handlers::analyze_cvs_handler(request, config).await
}

#[post("/download_excel", data = "<request>")]
pub async fn download_excel(
    request: Json<Vec<ExportRow>>,
) -> Result<ExcelResponse, status::Custom<Json<ErrorResponse>>> {
    handlers::download_excel_handler(request).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers. Rocket answers malformed JSON bodies with 400 or 422
// depending on whether reading or deserialization failed; both get the same
// error body.
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Permintaan tidak valid, data tidak lengkap.".to_string(),
        "BAD_REQUEST".to_string(),
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Permintaan tidak valid, data tidak lengkap.".to_string(),
        "BAD_REQUEST".to_string(),
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
    ))
}

/// Assemble the Rocket instance; kept apart from launch so tests can drive
/// it with Rocket's local client
pub fn build_rocket(config: ApiConfig) -> Rocket<Build> {
    rocket::build()
        .attach(Cors)
        .manage(config)
        .register("/api", catchers![bad_request, unprocessable, internal_error])
        .mount("/", routes![index])
        .mount("/api", routes![analyze_cvs, download_excel, options])
}

// Main server start function
pub async fn start_web_server(config: ApiConfig) -> Result<()> {
    info!("Starting Synapsis CV screening API server");

    build_rocket(config).launch().await?;

    Ok(())
}
