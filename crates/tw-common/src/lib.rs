pub mod api;
pub mod inference;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod schedule;

use std::collections::{HashMap, HashSet};

use normalize::normalize_skill_set;
use schedule::{BusyCalendar, TimeBlock};

// Commonly used data models for matching functions.

/// 求人1件。検索結果から一度構築されたら、マッチング計算の間は不変。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub location: String,
    pub hourly_rate: f64,
    pub required_skills: Vec<String>,
    pub hours_per_week: u32,
    pub schedule_blocks: Vec<TimeBlock>,
    pub currency: String,
    pub company: String,
    /// 取得元フィード（"jsearch", "adzuna" など）
    pub source: String,
    pub apply_link: String,
}

impl Job {
    pub fn weekly_pay(&self) -> f64 {
        self.hourly_rate * f64::from(self.hours_per_week)
    }

    /// 勤務地文字列に "remote" を含むかどうかで判定する。
    /// フィード側に構造化されたリモートフラグは無い。
    pub fn is_remote(&self) -> bool {
        self.location.to_lowercase().contains("remote")
    }

    /// CLI や会話層で使う1行サマリ
    pub fn summary(&self) -> String {
        let shifts: Vec<String> = self.schedule_blocks.iter().map(TimeBlock::render).collect();
        let shifts = if shifts.is_empty() {
            "flexible".to_string()
        } else {
            shifts.join(", ")
        };
        format!(
            "{} @ {} | {}h/week | {:.0} {}/hr | Shifts: {}",
            self.title, self.location, self.hours_per_week, self.hourly_rate, self.currency, shifts
        )
    }
}

/// 求職者プロフィール。busy カレンダーは構築時に確定済み。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub location: String,
    pub min_hourly_rate: f64,
    pub max_hours_per_week: u32,
    pub desired_hours_per_week: Option<u32>,
    pub remote_ok: bool,
    pub onsite_ok: bool,
    pub skills: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub preferences: HashMap<String, String>,
    pub currency: String,
    /// 週次の不可用時間（固定予定 + 学業をマージ済み）
    pub busy: BusyCalendar,
}

impl UserProfile {
    pub fn skill_set(&self) -> HashSet<String> {
        normalize_skill_set(&self.skills)
    }

    /// スコアリングで使う目標労働時間（希望がなければ上限）
    pub fn hours_target(&self) -> u32 {
        self.desired_hours_per_week
            .unwrap_or(self.max_hours_per_week)
    }

    /// 起床時間を1日12時間と仮定した週あたりの空き時間の見積もり。
    /// あくまで会話層向けの目安で、マッチング判定には使わない。
    pub fn available_hours_per_week(&self) -> u32 {
        const WAKING_MINUTES_PER_WEEK: u32 = 12 * 60 * 7;
        WAKING_MINUTES_PER_WEEK.saturating_sub(self.busy.busy_minutes()) / 60
    }
}
