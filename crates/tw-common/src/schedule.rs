use std::collections::HashMap;

use chrono::Weekday;
use thiserror::Error;

/// 1日の総分数。区間の終端はこの値まで許容する（24:00 = 終日勤務の終わり）
pub const MINUTES_PER_DAY: u16 = 1440;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// start >= end は常に不正。夜勤など日跨ぎのシフトは
    /// 境界側で同日ブロック2つに分割してから渡すこと。
    #[error("invalid interval {start}..{end}: start must be before end (overnight spans must be split per day)")]
    InvalidSpan { start: u16, end: u16 },

    #[error("interval end {end} is past midnight (1440 minutes)")]
    PastMidnight { end: u16 },
}

fn validate_span(start: u16, end: u16) -> Result<(), ScheduleError> {
    if end > MINUTES_PER_DAY {
        return Err(ScheduleError::PastMidnight { end });
    }
    if start >= end {
        return Err(ScheduleError::InvalidSpan { start, end });
    }
    Ok(())
}

/// 1曜日上の連続した勤務区間（深夜0時からの分数）。
/// コンストラクタで検証済みの不変値。フィールドは非公開で、
/// 不正な区間（start >= end、日跨ぎ）は構築時に拒否する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeBlock {
    day: Weekday,
    start: u16,
    end: u16,
}

impl TimeBlock {
    pub fn new(day: Weekday, start: u16, end: u16) -> Result<Self, ScheduleError> {
        validate_span(start, end)?;
        Ok(Self { day, start, end })
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end - self.start
    }

    /// "Mon 09:00-18:00" 形式の表示用文字列
    pub fn render(&self) -> String {
        format!(
            "{} {}-{}",
            day_label(self.day),
            format_time(self.start),
            format_time(self.end)
        )
    }
}

/// 半開区間の重なり判定。終端と始端が一致するだけ（end_a == start_b）は重ならない。
pub fn overlaps(a: &TimeBlock, b: &TimeBlock) -> bool {
    a.day == b.day && a.start < b.end && a.end > b.start
}

/// 曜日ごとの「使えない時間」区間リスト。構築時に一度だけ整列する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusyCalendar {
    by_day: HashMap<Weekday, Vec<(u16, u16)>>,
}

impl BusyCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = (Weekday, u16, u16)>,
    ) -> Result<Self, ScheduleError> {
        let mut calendar = Self::new();
        for (day, start, end) in entries {
            calendar.insert(day, start, end)?;
        }
        Ok(calendar)
    }

    pub fn insert(&mut self, day: Weekday, start: u16, end: u16) -> Result<(), ScheduleError> {
        validate_span(start, end)?;
        let intervals = self.by_day.entry(day).or_default();
        intervals.push((start, end));
        intervals.sort_unstable();
        Ok(())
    }

    /// 別カレンダーの区間を取り込む（学業・固定予定のマージ用）
    pub fn merge(&mut self, other: &BusyCalendar) {
        for (day, intervals) in &other.by_day {
            let merged = self.by_day.entry(*day).or_default();
            merged.extend_from_slice(intervals);
            merged.sort_unstable();
        }
    }

    pub fn intervals(&self, day: Weekday) -> &[(u16, u16)] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// ブロックがいずれかの busy 区間と重なるか（半開区間、境界一致は重ならない）
    pub fn conflicts(&self, block: &TimeBlock) -> bool {
        self.intervals(block.day)
            .iter()
            .any(|&(start, end)| block.start < end && block.end > start)
    }

    pub fn busy_minutes(&self) -> u32 {
        self.by_day
            .values()
            .flatten()
            .map(|&(start, end)| u32::from(end - start))
            .sum()
    }
}

/// 深夜0時からの分数を "HH:MM" に整形
pub fn format_time(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
