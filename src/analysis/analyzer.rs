use super::client::CompletionClient;
use super::{AnalysisResult, CvEntry};
use crate::config::ApiConfig;
use anyhow::Result;
use tracing::{error, info};

/// Screens a batch of CVs against one job description
pub struct CvAnalyzer {
    client: CompletionClient,
}

impl CvAnalyzer {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: CompletionClient::new(config)?,
        })
    }

    /// Score every CV against the job description and rank the batch.
    ///
    /// A failed completion call never aborts the batch: the affected CV gets
    /// a fallback record with score 0 and the error message, and processing
    /// continues with the next entry.
    pub async fn analyze_batch(&self, jd_text: &str, cvs: &[CvEntry]) -> Vec<AnalysisResult> {
        let mut results = Vec::with_capacity(cvs.len());

        for cv in cvs {
            info!("Analyzing CV: {}", cv.filename);

            let result = match self.client.analyze_cv(jd_text, &cv.text).await {
                Ok(analysis) => AnalysisResult::from_analysis(analysis, &cv.filename),
                Err(e) => {
                    error!("Failed to analyze CV {}: {:#}", cv.filename, e);
                    AnalysisResult::degraded(&cv.filename, &format!("{:#}", e))
                }
            };

            results.push(result);
        }

        sort_by_score(&mut results);
        results
    }
}

// Ranking is defined here, not by completion arrival order. sort_by is
// stable, so equal scores keep their input order.
pub(crate) fn sort_by_score(results: &mut [AnalysisResult]) {
    results.sort_by(|a, b| b.skor_kecocokan.cmp(&a.skor_kecocokan));
}
