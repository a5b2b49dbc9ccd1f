use serde::{Deserialize, Serialize};

use crate::{
    matching::{MatchInsight, MatchResult},
    schedule::TimeBlock,
    Job,
};

/// 下流（会話層・GUI）向けのマッチ結果レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResultDto {
    pub jobs: Vec<MatchedJobDto>,
    pub total_hours: u32,
    pub total_pay: f64,
    pub score: f64,
    pub insights: Vec<InsightDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedJobDto {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub hourly_rate: f64,
    pub hours_per_week: u32,
    pub weekly_pay: f64,
    pub currency: String,
    /// "Mon 09:00-18:00" 形式の整形済みシフト
    pub schedule: Vec<String>,
    pub apply_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightDto {
    pub title: String,
    pub detail: String,
}

impl From<&MatchInsight> for InsightDto {
    fn from(insight: &MatchInsight) -> Self {
        Self {
            title: insight.title.clone(),
            detail: insight.detail.clone(),
        }
    }
}

impl From<&Job> for MatchedJobDto {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            hourly_rate: job.hourly_rate,
            hours_per_week: job.hours_per_week,
            weekly_pay: job.weekly_pay(),
            currency: job.currency.clone(),
            schedule: job.schedule_blocks.iter().map(TimeBlock::render).collect(),
            apply_link: job.apply_link.clone(),
        }
    }
}

impl From<&MatchResult> for MatchResultDto {
    fn from(result: &MatchResult) -> Self {
        Self {
            jobs: result.jobs.iter().map(MatchedJobDto::from).collect(),
            total_hours: result.total_hours,
            total_pay: result.total_pay,
            score: result.score,
            insights: result.insights.iter().map(InsightDto::from).collect(),
        }
    }
}
