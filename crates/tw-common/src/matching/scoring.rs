use super::weights::SCORE_WEIGHTS;
use crate::{Job, UserProfile};

/// 単独ジョブのスコア内訳
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    pub total: f64,
    pub pay: f64,
    pub hours_alignment: f64,
    pub preference_bonus: f64,
}

/// ランキング用ヒューリスティック。正しさの保証ではなく順位付けにのみ使う。
///
/// total = 時給 * pay重み + 時間整合度 * hours重み + 環境嗜好ボーナス
pub fn score_job(job: &Job, user: &UserProfile) -> MatchScore {
    let weights = SCORE_WEIGHTS;

    let pay = job.hourly_rate * weights.pay;

    // 目標時間0のプロフィールでも割り算が壊れないよう分母だけ1に繰り上げる
    let target = f64::from(user.hours_target());
    let hours_alignment = 1.0 - (f64::from(job.hours_per_week) - target).abs() / target.max(1.0);

    let preference_bonus = match user.preferences.get("environment") {
        Some(env) if !env.is_empty() && job.title.to_lowercase().contains(&env.to_lowercase()) => {
            weights.preference_bonus
        }
        _ => 0.0,
    };

    MatchScore {
        total: pay + hours_alignment * weights.hours_alignment + preference_bonus,
        pay,
        hours_alignment,
        preference_bonus,
    }
}
