use std::collections::HashSet;

use super::MatchInsight;
use crate::{normalize::normalize_skill_set, Job, UserProfile};

/// ジョブ1件の適合判定結果。
/// Reject の reason は診断ログ用で、ユーザー向け insight は採用時のみ作る。
#[derive(Debug, Clone, PartialEq)]
pub enum FitDecision {
    Accept { insights: Vec<MatchInsight> },
    Reject { reason: String },
}

impl FitDecision {
    pub fn is_accept(&self) -> bool {
        matches!(self, FitDecision::Accept { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            FitDecision::Reject { reason } => Some(reason),
            FitDecision::Accept { .. } => None,
        }
    }

    pub fn into_insights(self) -> Vec<MatchInsight> {
        match self {
            FitDecision::Accept { insights } => insights,
            FitDecision::Reject { .. } => Vec::new(),
        }
    }
}

/// ハード条件（時給・時間上限・勤務地・スケジュール）を全て満たすか判定する。
/// スキルはソフト条件: フィードの大半が構造化スキルを持たないため、
/// 不一致でも却下せず insight に記録するだけにしている。
pub fn job_fits_user(job: &Job, user: &UserProfile) -> FitDecision {
    if job.hourly_rate < user.min_hourly_rate {
        return FitDecision::Reject {
            reason: format!(
                "rate_below_minimum: {:.1}/hr < {:.1}/hr",
                job.hourly_rate, user.min_hourly_rate
            ),
        };
    }

    if job.hours_per_week > user.max_hours_per_week {
        return FitDecision::Reject {
            reason: format!(
                "hours_over_cap: {}h > {}h",
                job.hours_per_week, user.max_hours_per_week
            ),
        };
    }

    let skills_detail = skills_insight_detail(job, &user.skill_set());

    if !location_ok(job, user) {
        return FitDecision::Reject {
            reason: format!(
                "location_mismatch: job={:?} user={:?} remote_ok={} onsite_ok={}",
                job.location, user.location, user.remote_ok, user.onsite_ok
            ),
        };
    }

    if let Some(block) = job
        .schedule_blocks
        .iter()
        .find(|block| user.busy.conflicts(block))
    {
        return FitDecision::Reject {
            reason: format!("schedule_conflict: {} overlaps busy time", block.render()),
        };
    }

    let income_detail = if job.currency.is_empty() {
        format!("Pays {:.0} per hour.", job.hourly_rate)
    } else {
        format!("Pays {:.0} {} per hour.", job.hourly_rate, job.currency)
    };

    FitDecision::Accept {
        insights: vec![
            MatchInsight::new("Skills", skills_detail),
            MatchInsight::new("Schedule", "Fits within free time blocks."),
            MatchInsight::new("Location", "Matches location preference."),
            MatchInsight::new("Income", income_detail),
        ],
    }
}

fn skills_insight_detail(job: &Job, user_skills: &HashSet<String>) -> String {
    let required = normalize_skill_set(&job.required_skills);
    if required.is_empty() {
        return "Skills match or not specified.".to_string();
    }

    let matched = required.intersection(user_skills).count();
    if matched == 0 {
        "Required skills not covered; treated as a soft requirement.".to_string()
    } else {
        format!("{}/{} required skills covered.", matched, required.len())
    }
}

fn location_ok(job: &Job, user: &UserProfile) -> bool {
    let is_remote = job.is_remote();

    if is_remote && user.remote_ok {
        return true;
    }

    if !is_remote && user.onsite_ok {
        let job_loc = job.location.to_lowercase();
        let user_loc = user.location.to_lowercase();

        if !user_loc.is_empty() && (job_loc.contains(&user_loc) || user_loc.contains(&job_loc)) {
            return true;
        }

        let mut preferred: HashSet<String> = user
            .preferred_locations
            .iter()
            .map(|loc| loc.to_lowercase())
            .collect();
        if !user_loc.is_empty() {
            preferred.insert(user_loc);
        }
        if preferred.contains(&job_loc) {
            return true;
        }
    }

    false
}
