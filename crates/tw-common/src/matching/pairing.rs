use std::collections::HashSet;

use chrono::Weekday;

use crate::{schedule, schedule::TimeBlock, Job};

/// 2つのジョブのシフトが同一曜日上で重なるか。
/// ブロック数は高々曜日数程度なので総当たりで十分。
pub fn jobs_overlap(job_a: &Job, job_b: &Job) -> bool {
    job_a.schedule_blocks.iter().any(|block_a| {
        job_b
            .schedule_blocks
            .iter()
            .any(|block_b| schedule::overlaps(block_a, block_b))
    })
}

/// ペアの組み合わせ方の分類（insight 表示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    /// 曜日を共有しない
    DifferentDays,
    /// 曜日を共有するが、平均開始時刻が4時間超ずれている（前が朝型）
    MorningEveningSplit,
    /// 同上で前が夜型
    EveningMorningSplit,
    /// 同日内で隙間なく補完し合う
    ComplementarySchedule,
}

impl PairKind {
    pub fn label(&self) -> &'static str {
        match self {
            PairKind::DifferentDays => "Different Days (e.g., Mon-Wed and Thu-Sun)",
            PairKind::MorningEveningSplit => "Morning & Evening Split (ideal rest period)",
            PairKind::EveningMorningSplit => "Evening & Morning Split (ideal rest period)",
            PairKind::ComplementarySchedule => "Complementary Schedule",
        }
    }
}

/// 平均開始時刻の差が4時間を超えたら朝晩分割とみなす
const SPLIT_GAP_MINUTES: f64 = 240.0;

pub fn classify_pair(job_a: &Job, job_b: &Job) -> PairKind {
    let days_a = days_of(job_a);
    let days_b = days_of(job_b);

    if days_a.is_disjoint(&days_b) {
        return PairKind::DifferentDays;
    }

    // 曜日を共有するペアはここに来る。共有する以上、両方にブロックがある。
    let avg_a = average_start(job_a);
    let avg_b = average_start(job_b);

    if (avg_a - avg_b).abs() > SPLIT_GAP_MINUTES {
        if avg_a < avg_b {
            PairKind::MorningEveningSplit
        } else {
            PairKind::EveningMorningSplit
        }
    } else {
        PairKind::ComplementarySchedule
    }
}

fn days_of(job: &Job) -> HashSet<Weekday> {
    job.schedule_blocks.iter().map(TimeBlock::day).collect()
}

fn average_start(job: &Job) -> f64 {
    let total: u32 = job
        .schedule_blocks
        .iter()
        .map(|block| u32::from(block.start()))
        .sum();
    f64::from(total) / job.schedule_blocks.len() as f64
}

/// 両ジョブのシフト一覧と合計時間をまとめた Schedule Fit 文字列
pub fn schedule_summary(job_a: &Job, job_b: &Job) -> String {
    let total_hours = job_a.hours_per_week + job_b.hours_per_week;
    format!(
        "{} | {} | Total: {}h/week",
        render_blocks(job_a),
        render_blocks(job_b),
        total_hours
    )
}

fn render_blocks(job: &Job) -> String {
    if job.schedule_blocks.is_empty() {
        return "flexible".to_string();
    }
    job.schedule_blocks
        .iter()
        .map(TimeBlock::render)
        .collect::<Vec<_>>()
        .join(", ")
}

/// 合算収入の insight 文字列。通貨が食い違うペアはユーザー側の通貨で示す。
pub fn income_detail(job_a: &Job, job_b: &Job, user_currency: &str, total_pay: f64) -> String {
    let currency = if job_a.currency == job_b.currency {
        job_a.currency.as_str()
    } else {
        user_currency
    };

    if currency.is_empty() {
        format!("Combined weekly income: {total_pay:.0}")
    } else {
        format!("Combined weekly income: {total_pay:.0} {currency}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_with_blocks(id: &str, blocks: &[(Weekday, u16, u16)]) -> Job {
        Job {
            id: id.into(),
            title: id.into(),
            hours_per_week: 20,
            schedule_blocks: blocks
                .iter()
                .map(|&(day, start, end)| TimeBlock::new(day, start, end).unwrap())
                .collect(),
            ..Job::default()
        }
    }

    #[test]
    fn overlap_is_commutative() {
        let weekday_morning = job_with_blocks(
            "a",
            &[(Weekday::Mon, 540, 840), (Weekday::Tue, 540, 840)],
        );
        let monday_overlap = job_with_blocks("b", &[(Weekday::Mon, 720, 960)]);
        let evening = job_with_blocks("c", &[(Weekday::Mon, 1080, 1380)]);

        assert!(jobs_overlap(&weekday_morning, &monday_overlap));
        assert!(jobs_overlap(&monday_overlap, &weekday_morning));
        assert!(!jobs_overlap(&weekday_morning, &evening));
        assert!(!jobs_overlap(&evening, &weekday_morning));
    }

    #[test]
    fn boundary_touching_blocks_do_not_overlap() {
        let morning = job_with_blocks("a", &[(Weekday::Mon, 600, 840)]);
        let afternoon = job_with_blocks("b", &[(Weekday::Mon, 840, 1080)]);
        assert!(!jobs_overlap(&morning, &afternoon));
    }

    #[test]
    fn classifies_disjoint_days() {
        let weekdays = job_with_blocks("a", &[(Weekday::Mon, 540, 840)]);
        let weekend = job_with_blocks("b", &[(Weekday::Sat, 540, 1080)]);
        assert_eq!(classify_pair(&weekdays, &weekend), PairKind::DifferentDays);
    }

    #[test]
    fn classifies_morning_evening_split_in_both_orders() {
        let morning = job_with_blocks("a", &[(Weekday::Mon, 480, 840)]);
        let evening = job_with_blocks("b", &[(Weekday::Mon, 1080, 1380)]);

        assert_eq!(
            classify_pair(&morning, &evening),
            PairKind::MorningEveningSplit
        );
        assert_eq!(
            classify_pair(&evening, &morning),
            PairKind::EveningMorningSplit
        );
    }

    #[test]
    fn close_starts_are_complementary() {
        let first = job_with_blocks("a", &[(Weekday::Mon, 600, 780)]);
        let second = job_with_blocks("b", &[(Weekday::Mon, 780, 960)]);
        assert_eq!(
            classify_pair(&first, &second),
            PairKind::ComplementarySchedule
        );
    }

    #[test]
    fn jobs_without_blocks_share_no_days() {
        let flexible = job_with_blocks("a", &[]);
        let evening = job_with_blocks("b", &[(Weekday::Mon, 1080, 1380)]);
        assert_eq!(classify_pair(&flexible, &evening), PairKind::DifferentDays);
        assert_eq!(
            classify_pair(&flexible, &flexible.clone()),
            PairKind::DifferentDays
        );
    }

    #[test]
    fn summary_lists_both_schedules_and_total() {
        let morning = job_with_blocks("a", &[(Weekday::Mon, 600, 840)]);
        let evening = job_with_blocks("b", &[(Weekday::Mon, 1080, 1260)]);

        let summary = schedule_summary(&morning, &evening);
        assert_eq!(
            summary,
            "Mon 10:00-14:00 | Mon 18:00-21:00 | Total: 40h/week"
        );
    }

    #[test]
    fn income_detail_prefers_shared_currency() {
        let mut a = job_with_blocks("a", &[]);
        let mut b = job_with_blocks("b", &[]);
        a.currency = "AED".into();
        b.currency = "AED".into();
        assert_eq!(
            income_detail(&a, &b, "USD", 480.0),
            "Combined weekly income: 480 AED"
        );

        b.currency = "USD".into();
        assert_eq!(
            income_detail(&a, &b, "USD", 480.0),
            "Combined weekly income: 480 USD"
        );
    }
}
