//! Ranks resumes against a job description.
//!
//! The job description is embedded once per request. Each resume is decoded,
//! embedded, scored and run through field extraction; unreadable resumes are
//! dropped. The result is sorted by score, highest first, keeping upload order
//! among equal scores.

use tracing::{debug, info};

use crate::documents::decode_upload;
use crate::embedding::{cosine_similarity, Embedder};
use crate::errors::AppError;
use crate::extraction::extract_resume_details;
use crate::ranking::models::{RankedCandidate, ResumeUpload};

pub async fn rank_resumes(
    job_description: &str,
    uploads: Vec<ResumeUpload>,
    embedder: &dyn Embedder,
) -> Result<Vec<RankedCandidate>, AppError> {
    let jd_embedding = embedder
        .encode(job_description)
        .await
        .map_err(|e| AppError::Embedding(format!("Failed to process job description: {e}")))?;

    let total = uploads.len();
    let mut candidates = Vec::with_capacity(total);

    for upload in uploads {
        let text = decode_upload(upload.content, &upload.filename).await;
        if text.trim().is_empty() {
            info!("Skipping {}: no text could be extracted", upload.filename);
            continue;
        }

        let resume_embedding = embedder.encode(&text).await.map_err(|e| {
            AppError::Embedding(format!("Failed to process resume {}: {e}", upload.filename))
        })?;
        let similarity = cosine_similarity(&resume_embedding, &jd_embedding).map_err(|e| {
            AppError::Embedding(format!("Failed to score resume {}: {e}", upload.filename))
        })?;

        let score = score_percent(similarity);
        debug!("Scored {}: similarity={similarity:.4} score={score}", upload.filename);

        candidates.push(RankedCandidate {
            filename: upload.filename,
            score,
            details: extract_resume_details(&text),
        });
    }

    sort_by_score(&mut candidates);

    info!(
        "Ranked {} of {} resumes with {} backend",
        candidates.len(),
        total,
        embedder.backend()
    );

    Ok(candidates)
}

/// Negative similarity counts as zero; scaled to 0–100, rounded to 2 decimals.
pub fn score_percent(similarity: f32) -> f64 {
    let clamped = f64::from(similarity).max(0.0);
    (clamped * 100.0 * 100.0).round() / 100.0
}

/// Descending by score. `sort_by` is stable, so ties keep upload order.
pub fn sort_by_score(candidates: &mut [RankedCandidate]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::docx::tests::build_docx;
    use crate::embedding::{EmbeddingError, HashingEmbedder};
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn docx_upload(filename: &str, lines: &[&str]) -> ResumeUpload {
        ResumeUpload {
            filename: filename.to_string(),
            content: Bytes::from(build_docx(lines)),
        }
    }

    /// Returns a fixed vector per exact input text and counts calls.
    struct TableEmbedder {
        vectors: HashMap<String, Vec<f32>>,
        calls: AtomicUsize,
    }

    impl TableEmbedder {
        fn new(entries: &[(&str, [f32; 2])]) -> Self {
            Self {
                vectors: entries
                    .iter()
                    .map(|(text, v)| (text.to_string(), v.to_vec()))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Embedder for TableEmbedder {
        async fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.vectors
                .get(text)
                .cloned()
                .ok_or(EmbeddingError::EmptyResponse)
        }

        fn backend(&self) -> &str {
            "table"
        }
    }

    struct FailingEmbedder;

    #[async_trait]
    impl Embedder for FailingEmbedder {
        async fn encode(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
            Err(EmbeddingError::Api {
                status: 503,
                message: "model unavailable".to_string(),
            })
        }

        fn backend(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_score_percent_scales_and_rounds() {
        assert_eq!(score_percent(0.5), 50.0);
        assert_eq!(score_percent(0.123456), 12.35);
        assert_eq!(score_percent(1.0), 100.0);
    }

    #[test]
    fn test_score_percent_clamps_negative() {
        assert_eq!(score_percent(-0.4), 0.0);
    }

    #[tokio::test]
    async fn test_python_resume_ranks_first() {
        let uploads = vec![
            docx_upload("chef.docx", &["Marco Rossi", "Pastry chef, French desserts and bread"]),
            docx_upload(
                "dev.docx",
                &["Ana Lima", "Python developer", "Built Python services and Python tooling"],
            ),
        ];

        let ranked = rank_resumes("Python developer", uploads, &HashingEmbedder::new(384))
            .await
            .unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].filename, "dev.docx");
        assert!(ranked[0].score >= ranked[1].score);
        assert!(ranked[0].details.skills.contains("Python"));
        assert!(ranked.iter().all(|c| (0.0..=100.0).contains(&c.score)));
    }

    #[tokio::test]
    async fn test_ties_keep_upload_order_and_jd_encoded_once() {
        let embedder = TableEmbedder::new(&[
            ("jd", [1.0, 0.0]),
            ("first", [1.0, 1.0]),
            ("second", [0.0, 1.0]),
            ("third", [1.0, 1.0]),
        ]);
        let uploads = vec![
            docx_upload("a.docx", &["first"]),
            docx_upload("b.docx", &["second"]),
            docx_upload("c.docx", &["third"]),
        ];

        let ranked = rank_resumes("jd", uploads, &embedder).await.unwrap();

        let order: Vec<&str> = ranked.iter().map(|c| c.filename.as_str()).collect();
        assert_eq!(order, vec!["a.docx", "c.docx", "b.docx"]);
        assert_eq!(ranked[0].score, 70.71);
        assert_eq!(ranked[2].score, 0.0);
        // one call for the job description, one per resume
        assert_eq!(embedder.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_negative_similarity_scores_zero() {
        let embedder = TableEmbedder::new(&[("jd", [1.0, 0.0]), ("opposite", [-1.0, 0.0])]);
        let ranked = rank_resumes("jd", vec![docx_upload("x.docx", &["opposite"])], &embedder)
            .await
            .unwrap();
        assert_eq!(ranked[0].score, 0.0);
    }

    #[tokio::test]
    async fn test_undecodable_resumes_are_skipped() {
        let uploads = vec![
            ResumeUpload {
                filename: "notes.txt".to_string(),
                content: Bytes::from_static(b"Python developer"),
            },
            ResumeUpload {
                filename: "broken.pdf".to_string(),
                content: Bytes::from_static(b"%PDF-1.7 truncated"),
            },
            docx_upload("blank.docx", &["   "]),
            docx_upload("ok.docx", &["Python developer"]),
        ];

        let ranked = rank_resumes("Python developer", uploads, &HashingEmbedder::new(64))
            .await
            .unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].filename, "ok.docx");
    }

    #[tokio::test]
    async fn test_job_description_failure_is_embedding_error() {
        let err = rank_resumes("jd", vec![docx_upload("a.docx", &["x"])], &FailingEmbedder)
            .await
            .unwrap_err();
        match err {
            AppError::Embedding(msg) => {
                assert!(msg.starts_with("Failed to process job description"));
                assert!(msg.contains("model unavailable"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_uploads_is_empty_list() {
        let ranked = rank_resumes("jd", vec![], &HashingEmbedder::new(8)).await.unwrap();
        assert!(ranked.is_empty());
    }
}
