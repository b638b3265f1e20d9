// src/analysis/mod.rs
use serde::{Deserialize, Serialize};

pub mod analyzer;
pub mod client;
pub(crate) mod types;

pub use analyzer::CvAnalyzer;
pub use client::CompletionClient;

/// One résumé submitted for screening
#[derive(Debug, Clone, Deserialize)]
pub struct CvEntry {
    pub filename: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "jdText")]
    pub jd_text: String,
    #[serde(rename = "cvData")]
    pub cv_data: Vec<CvEntry>,
}

/// Verdict object the completion service is required to return for one CV.
///
/// Field names are the wire contract shared with the frontend; they stay in
/// Indonesian like the prompt that produces them.
#[derive(Debug, Clone, Deserialize)]
pub struct AiAnalysis {
    pub nama_kandidat: String,
    pub skor_kecocokan: u32,
    #[serde(default)]
    pub bahasa_terdeteksi: String,
    #[serde(default)]
    pub ringkasan_positif: String,
    #[serde(default)]
    pub poin_kunci_cocok: Vec<String>,
    #[serde(default)]
    pub poin_perhatian: Vec<String>,
}

/// Per-CV screening result returned to the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub nama_kandidat: String,
    pub skor_kecocokan: u32,
    #[serde(default)]
    pub bahasa_terdeteksi: String,
    #[serde(default)]
    pub ringkasan_positif: String,
    #[serde(default)]
    pub poin_kunci_cocok: Vec<String>,
    #[serde(default)]
    pub poin_perhatian: Vec<String>,
    pub original_filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Attach the bookkeeping filename to a parsed completion verdict
    pub fn from_analysis(analysis: AiAnalysis, filename: &str) -> Self {
        Self {
            nama_kandidat: analysis.nama_kandidat,
            skor_kecocokan: analysis.skor_kecocokan,
            bahasa_terdeteksi: analysis.bahasa_terdeteksi,
            ringkasan_positif: analysis.ringkasan_positif,
            poin_kunci_cocok: analysis.poin_kunci_cocok,
            poin_perhatian: analysis.poin_perhatian,
            original_filename: filename.to_string(),
            error: None,
        }
    }

    /// Fallback record for a CV whose completion call failed
    pub fn degraded(filename: &str, message: &str) -> Self {
        Self {
            nama_kandidat: filename.to_string(),
            skor_kecocokan: 0,
            bahasa_terdeteksi: String::new(),
            ringkasan_positif: format!("Terjadi kesalahan internal: {}", message),
            poin_kunci_cocok: Vec::new(),
            poin_perhatian: Vec::new(),
            original_filename: filename.to_string(),
            error: Some(message.to_string()),
        }
    }
}
