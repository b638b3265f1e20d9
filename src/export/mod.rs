// src/export/mod.rs
use serde::Deserialize;

pub mod excel;

pub use excel::build_report;

pub const EXPORT_FILE_NAME: &str = "hasil_penyaringan_synapsis_ai.xlsx";

/// Row shape for spreadsheet export.
///
/// The frontend posts the analysis JSON back as-is, so every field is
/// tolerated as missing and the point lists may arrive as plain text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportRow {
    #[serde(default)]
    pub nama_kandidat: String,
    #[serde(default)]
    pub skor_kecocokan: f64,
    #[serde(default)]
    pub ringkasan_positif: String,
    #[serde(default)]
    pub poin_kunci_cocok: BulletField,
    #[serde(default)]
    pub poin_perhatian: BulletField,
    #[serde(default)]
    pub bahasa_terdeteksi: String,
    #[serde(default)]
    pub original_filename: String,
}

/// A field that is usually a list of points but may arrive as plain text
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BulletField {
    List(Vec<String>),
    Text(String),
}

impl Default for BulletField {
    fn default() -> Self {
        BulletField::List(Vec::new())
    }
}

impl BulletField {
    /// Render list entries as bullet lines; plain text passes through unchanged
    pub fn bullet_text(&self) -> String {
        match self {
            BulletField::List(items) => items
                .iter()
                .map(|item| format!("• {}", item))
                .collect::<Vec<_>>()
                .join("\n"),
            BulletField::Text(text) => text.clone(),
        }
    }
}
