use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 区間端点。Discovery 側は分数、会話層は "HH:MM" を送ってくるので両方受ける。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TimePoint {
    Minutes(u16),
    Clock(String),
}

/// 求人フィードからの1シフト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBlockPayload {
    pub day: String,
    pub start_minutes: TimePoint,
    pub end_minutes: TimePoint,
}

/// Discovery コラボレータからの求人1件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPayload {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    pub hourly_rate: f64,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub hours_per_week: u32,
    #[serde(default)]
    pub schedule_blocks: Vec<TimeBlockPayload>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub apply_link: String,
}

/// 会話/プロフィールコラボレータからのユーザープロフィール
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePayload {
    #[serde(default)]
    pub location: String,
    pub min_hourly_rate: f64,
    pub max_hours_per_week: u32,
    #[serde(default)]
    pub desired_hours_per_week: Option<u32>,
    #[serde(default = "default_true")]
    pub remote_ok: bool,
    #[serde(default = "default_true")]
    pub onsite_ok: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    /// 曜日 → [start, end] のリスト
    #[serde(default)]
    pub busy_schedule: HashMap<String, Vec<(TimePoint, TimePoint)>>,
    /// 学業など固定予定。busy_schedule にマージされる。
    #[serde(default)]
    pub study_commitments: HashMap<String, Vec<(TimePoint, TimePoint)>>,
    #[serde(default)]
    pub preferences: HashMap<String, String>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_true() -> bool {
    true
}
