pub mod feasibility;
pub mod pairing;
pub mod pipeline;
pub mod scoring;
pub mod weights;

use crate::Job;

/// 採用されたマッチに付く説明。却下されたジョブには付かない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInsight {
    pub title: String,
    pub detail: String,
}

impl MatchInsight {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// マッチング結果（単独なら jobs は1件、ペアなら2件）。
/// クエリごとに新しく構築され、以後変更されない。永続化もしない。
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub jobs: Vec<Job>,
    pub total_hours: u32,
    pub total_pay: f64,
    pub insights: Vec<MatchInsight>,
    pub score: f64,
}
