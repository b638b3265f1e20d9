// src/analysis/client.rs
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat};
use super::AiAnalysis;
use crate::config::ApiConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::error;

const SYSTEM_PROMPT: &str = "You are a multilingual HR assistant that only outputs valid JSON.";

pub struct CompletionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl CompletionClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Score one CV against the job description.
    ///
    /// The service is instructed to answer with a single JSON object; anything
    /// else (bad status, empty choices, non-JSON content) is an error.
    pub async fn analyze_cv(&self, jd_text: &str, cv_text: &str) -> Result<AiAnalysis> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(jd_text, cv_text),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to completion API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Completion API error {}: {}", status, error_text);
            anyhow::bail!("Completion API returned error {}: {}", status, error_text);
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse completion API response")?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| anyhow::anyhow!("Completion API returned no choices"))?;

        serde_json::from_str(content).context("Completion content is not the expected JSON object")
    }
}

fn build_prompt(jd_text: &str, cv_text: &str) -> String {
    format!(
        r#"Anda adalah seorang asisten HR virtual multilingual yang sangat ahli dalam menyaring CV.

TUGAS ANDA:
1. Deteksi bahasa utama yang digunakan dalam CV (misalnya: "Indonesia" atau "English").
2. Analisis CV kandidat berdasarkan Deskripsi Pekerjaan (JD).
3. Berikan respons HANYA dalam format JSON yang valid, TANPA teks tambahan di luar JSON. Gunakan bahasa yang sama dengan yang Anda deteksi di CV untuk mengisi nilai-nilai dalam JSON.

--- DESKRIPSI PEKERJAAN ---
{}
---

--- CV KANDIDAT ---
{}
---

Berikan analisis dalam format JSON berikut:
{{
    "nama_kandidat": "Ekstrak nama lengkap kandidat dari CV",
    "skor_kecocokan": <Angka 0-100 yang merepresentasikan kecocokan CV dengan JD>,
    "bahasa_terdeteksi": "Bahasa yang Anda deteksi dari CV (contoh: 'Indonesia' atau 'English')",
    "ringkasan_positif": "Jelaskan dalam 2-3 kalimat mengapa kandidat ini berpotensi cocok, berdasarkan kesesuaian pengalaman dan skill utama.",
    "poin_kunci_cocok": [
        "Sebutkan skill atau pengalaman spesifik pertama dari CV yang paling cocok dengan JD.",
        "Sebutkan skill atau pengalaman spesifik kedua dari CV yang cocok dengan JD.",
        "Sebutkan poin relevan ketiga jika ada."
    ],
    "poin_perhatian": [
        "Sebutkan kualifikasi pertama dari JD yang tidak ditemukan atau kurang cocok di CV.",
        "Sebutkan kualifikasi kedua dari JD yang tidak ditemukan atau kurang cocok di CV."
    ]
}}"#,
        jd_text, cv_text
    )
}
