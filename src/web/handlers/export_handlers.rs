// src/web/handlers/export_handlers.rs

use crate::export::{self, ExportRow};
use crate::web::types::{ErrorResponse, ExcelResponse};
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use tracing::{error, info};

pub async fn download_excel_handler(
    request: Json<Vec<ExportRow>>,
) -> Result<ExcelResponse, status::Custom<Json<ErrorResponse>>> {
    let rows = request.into_inner();

    if rows.is_empty() {
        return Err(status::Custom(
            Status::BadRequest,
            Json(ErrorResponse::new(
                "Tidak ada data untuk diekspor.".to_string(),
                "EMPTY_EXPORT".to_string(),
            )),
        ));
    }

    info!("Exporting {} screening rows to xlsx", rows.len());

    match export::build_report(&rows) {
        Ok(buffer) => Ok(ExcelResponse::new(buffer)),
        Err(e) => {
            error!("Failed to build xlsx report: {:#}", e);
            Err(status::Custom(
                Status::InternalServerError,
                Json(ErrorResponse::new(
                    "Failed to build spreadsheet".to_string(),
                    "EXPORT_ERROR".to_string(),
                )),
            ))
        }
    }
}
