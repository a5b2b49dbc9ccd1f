use std::cmp::Ordering;

use tracing::debug;

use super::{
    feasibility::{job_fits_user, FitDecision},
    pairing::{classify_pair, income_detail, jobs_overlap, schedule_summary},
    scoring::score_job,
    MatchInsight, MatchResult,
};
use crate::{Job, UserProfile};

#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// 単独マッチの返却件数
    pub single_limit: usize,
    /// ペアマッチの返却件数
    pub pair_limit: usize,
    /// ペア列挙前に適合集合をスコア上位N件へ絞る明示的な上限。
    /// 列挙は O(n^2) なので、フィード集約が増えてもここで頭打ちにする。
    pub pair_pool_size: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            single_limit: 5,
            pair_limit: 3,
            pair_pool_size: 40,
        }
    }
}

impl MatcherConfig {
    /// 環境変数から設定を読み込み（未設定・解釈不能はデフォルト値）
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            single_limit: env_usize("TW_SINGLE_LIMIT", defaults.single_limit),
            pair_limit: env_usize("TW_PAIR_LIMIT", defaults.pair_limit),
            pair_pool_size: env_usize("TW_PAIR_POOL_SIZE", defaults.pair_pool_size),
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// 純粋な同期計算のみを行うマッチングエンジン。
/// 呼び出しごとに入力値から結果を組み立て、共有状態を持たない。
pub struct MatcherEngine {
    config: MatcherConfig,
}

impl Default for MatcherEngine {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

impl MatcherEngine {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// 単独ジョブのマッチング: 適合判定 → スコアリング → 降順安定ソート → 上位N件
    pub fn match_single_jobs(&self, jobs: &[Job], user: &UserProfile) -> Vec<MatchResult> {
        let mut eligible: Vec<(&Job, f64, Vec<MatchInsight>)> = Vec::new();
        for job in jobs {
            match job_fits_user(job, user) {
                FitDecision::Accept { insights } => {
                    let score = score_job(job, user);
                    eligible.push((job, score.total, insights));
                }
                FitDecision::Reject { reason } => {
                    debug!(job_id = %job.id, %reason, "single match rejected");
                }
            }
        }

        sort_by_score_desc(&mut eligible, |entry| entry.1);
        eligible.truncate(self.config.single_limit);

        eligible
            .into_iter()
            .map(|(job, score, insights)| MatchResult {
                jobs: vec![job.clone()],
                total_hours: job.hours_per_week,
                total_pay: job.weekly_pay(),
                insights,
                score,
            })
            .collect()
    }

    /// ペアマッチング: 適合集合を1度だけ計算してスコアをキャッシュし、
    /// 上位プールの非重複ペアを時間上限の範囲で列挙する。
    pub fn match_job_pairs(&self, jobs: &[Job], user: &UserProfile) -> Vec<MatchResult> {
        let mut feasible: Vec<(&Job, f64)> = jobs
            .iter()
            .filter(|job| job_fits_user(job, user).is_accept())
            .map(|job| (job, score_job(job, user).total))
            .collect();

        sort_by_score_desc(&mut feasible, |entry| entry.1);
        if feasible.len() > self.config.pair_pool_size {
            debug!(
                dropped = feasible.len() - self.config.pair_pool_size,
                pool = self.config.pair_pool_size,
                "pair pool truncated"
            );
            feasible.truncate(self.config.pair_pool_size);
        }

        let mut combos: Vec<MatchResult> = Vec::new();
        for (index, &(job_a, score_a)) in feasible.iter().enumerate() {
            for &(job_b, score_b) in &feasible[index + 1..] {
                if jobs_overlap(job_a, job_b) {
                    continue;
                }
                let total_hours = job_a.hours_per_week + job_b.hours_per_week;
                if total_hours > user.max_hours_per_week {
                    continue;
                }

                let total_pay = job_a.weekly_pay() + job_b.weekly_pay();
                let insights = vec![
                    MatchInsight::new("Pair Type", classify_pair(job_a, job_b).label()),
                    MatchInsight::new("Schedule Fit", schedule_summary(job_a, job_b)),
                    MatchInsight::new("Combined Hours", format!("{total_hours}h per week")),
                    MatchInsight::new(
                        "Income",
                        income_detail(job_a, job_b, &user.currency, total_pay),
                    ),
                ];

                combos.push(MatchResult {
                    jobs: vec![job_a.clone(), job_b.clone()],
                    total_hours,
                    total_pay,
                    insights,
                    score: score_a + score_b,
                });
            }
        }

        sort_by_score_desc(&mut combos, |result| result.score);
        combos.truncate(self.config.pair_limit);
        combos
    }
}

/// 降順の安定ソート。同点は元の並び順を保つ。
fn sort_by_score_desc<T>(entries: &mut [T], score_of: impl Fn(&T) -> f64) {
    entries.sort_by(|a, b| {
        score_of(b)
            .partial_cmp(&score_of(a))
            .unwrap_or(Ordering::Equal)
    });
}
