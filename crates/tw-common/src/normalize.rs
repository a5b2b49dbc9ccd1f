use std::collections::HashSet;

use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::schedule::{ScheduleError, MINUTES_PER_DAY};

static RE_CLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unsupported day name: {0:?}")]
    InvalidDay(String),

    /// 解釈できない時刻は即エラー。黙ってデフォルト時刻に
    /// フォールバックすると不正データが衝突判定まで素通りする。
    #[error("unparsable time value: {0:?}")]
    InvalidTime(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// 曜日名の正規化。"monday" / "Mon" / "TUE" などを受け付け、
/// それ以外はハードエラーにする。
pub fn normalize_day(raw: &str) -> Result<Weekday, ConvertError> {
    raw.trim()
        .parse::<Weekday>()
        .map_err(|_| ConvertError::InvalidDay(raw.to_string()))
}

/// "HH:MM" または素の分数文字列を深夜0時からの分数に変換する。
/// 24:00 は区間終端としてのみ意味を持つので許容する。
pub fn parse_time(raw: &str) -> Result<u16, ConvertError> {
    let trimmed = raw.trim();

    if let Some(caps) = RE_CLOCK.captures(trimmed) {
        let hour: u16 = caps[1]
            .parse()
            .map_err(|_| ConvertError::InvalidTime(raw.to_string()))?;
        let minute: u16 = caps[2]
            .parse()
            .map_err(|_| ConvertError::InvalidTime(raw.to_string()))?;
        let total = hour * 60 + minute;
        if minute > 59 || total > MINUTES_PER_DAY {
            return Err(ConvertError::InvalidTime(raw.to_string()));
        }
        return Ok(total);
    }

    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let minutes: u16 = trimmed
            .parse()
            .map_err(|_| ConvertError::InvalidTime(raw.to_string()))?;
        if minutes > MINUTES_PER_DAY {
            return Err(ConvertError::InvalidTime(raw.to_string()));
        }
        return Ok(minutes);
    }

    Err(ConvertError::InvalidTime(raw.to_string()))
}

/// スキル名の突き合わせ用正規化（小文字化・前後空白除去・空要素の除外）
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_day_aliases() {
        assert_eq!(normalize_day("monday"), Ok(Weekday::Mon));
        assert_eq!(normalize_day("Mon"), Ok(Weekday::Mon));
        assert_eq!(normalize_day(" SUN "), Ok(Weekday::Sun));
        assert_eq!(
            normalize_day("Funday"),
            Err(ConvertError::InvalidDay("Funday".into()))
        );
    }

    #[test]
    fn parses_clock_and_minute_forms() {
        assert_eq!(parse_time("09:00"), Ok(540));
        assert_eq!(parse_time("9:05"), Ok(545));
        assert_eq!(parse_time("24:00"), Ok(1440));
        assert_eq!(parse_time("540"), Ok(540));
        assert_eq!(parse_time(" 1380 "), Ok(1380));
    }

    #[test]
    fn bad_times_are_hard_errors_not_defaults() {
        for raw in ["25:00", "12:60", "12:5", "noon", "", "-30", "1500"] {
            assert_eq!(
                parse_time(raw),
                Err(ConvertError::InvalidTime(raw.into())),
                "expected rejection for {raw:?}"
            );
        }
    }

    #[test]
    fn skill_set_lowercases_and_drops_blanks() {
        let set = normalize_skill_set(&[
            "  Rust ".to_string(),
            "SQL".to_string(),
            "".to_string(),
        ]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("rust"));
        assert!(set.contains("sql"));
    }
}
