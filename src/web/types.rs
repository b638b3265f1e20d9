// src/web/types.rs

use crate::export::EXPORT_FILE_NAME;
use rocket::http::ContentType;
use rocket::response::{self, Responder};
use rocket::serde::Serialize;
use rocket::{Request, Response};

/// Spreadsheet attachment with the fixed download filename
pub struct ExcelResponse {
    pub data: Vec<u8>,
}

impl ExcelResponse {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl<'r> Responder<'r, 'static> for ExcelResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::new(
                "application",
                "vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ))
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            )
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .ok()
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error: String, error_code: String) -> Self {
        Self {
            success: false,
            error,
            error_code,
        }
    }
}
