// src/web/handlers/analysis_handlers.rs

use crate::analysis::{AnalysisResult, AnalyzeRequest, CvAnalyzer};
use crate::config::ApiConfig;
use crate::web::types::ErrorResponse;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn analyze_cvs_handler(
    request: Json<AnalyzeRequest>,
    config: &State<ApiConfig>,
) -> Result<Json<Vec<AnalysisResult>>, status::Custom<Json<ErrorResponse>>> {
    info!(
        "Screening {} CVs against a {}-char job description",
        request.cv_data.len(),
        request.jd_text.len()
    );

    let analyzer = match CvAnalyzer::new(config.inner()) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            error!("Failed to initialize CV analyzer: {:#}", e);
            return Err(status::Custom(
                Status::InternalServerError,
                Json(ErrorResponse::new(
                    "Service configuration error".to_string(),
                    "SERVICE_CONFIG_ERROR".to_string(),
                )),
            ));
        }
    };

    let results = analyzer
        .analyze_batch(&request.jd_text, &request.cv_data)
        .await;

    info!("Completed screening of {} CVs", results.len());

    Ok(Json(results))
}
