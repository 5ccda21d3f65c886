use bytes::Bytes;
use serde::Serialize;

use crate::extraction::ResumeDetails;

/// One uploaded resume file, as received.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub content: Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub filename: String,
    /// Similarity to the job description, 0–100, two decimals.
    pub score: f64,
    pub details: ResumeDetails,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub candidates: Vec<RankedCandidate>,
}
