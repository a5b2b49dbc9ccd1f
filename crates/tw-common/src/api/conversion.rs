use std::collections::HashMap;

use crate::{
    normalize::{normalize_day, parse_time, ConvertError},
    schedule::{BusyCalendar, TimeBlock, MINUTES_PER_DAY},
    Job, UserProfile,
};

use super::match_request::{JobPayload, ProfilePayload, TimePoint};

impl TimePoint {
    /// 深夜0時からの分数へ解決する。解釈できない値はハードエラー。
    pub fn resolve(&self) -> Result<u16, ConvertError> {
        match self {
            TimePoint::Minutes(minutes) => {
                if *minutes > MINUTES_PER_DAY {
                    Err(ConvertError::InvalidTime(minutes.to_string()))
                } else {
                    Ok(*minutes)
                }
            }
            TimePoint::Clock(raw) => parse_time(raw),
        }
    }
}

/// フィードの求人ペイロードを検証済みの `Job` に変換する。
/// 不正な曜日・時刻・区間はここで弾き、エンジンには届かせない。
pub fn job_from_payload(payload: JobPayload) -> Result<Job, ConvertError> {
    let mut blocks = Vec::with_capacity(payload.schedule_blocks.len());
    for block in &payload.schedule_blocks {
        let day = normalize_day(&block.day)?;
        let start = block.start_minutes.resolve()?;
        let end = block.end_minutes.resolve()?;
        blocks.push(TimeBlock::new(day, start, end)?);
    }

    Ok(Job {
        id: payload.id,
        title: payload.title,
        location: payload.location,
        hourly_rate: payload.hourly_rate,
        required_skills: payload.required_skills,
        hours_per_week: payload.hours_per_week,
        schedule_blocks: blocks,
        currency: payload.currency,
        company: payload.company,
        source: payload.source,
        apply_link: payload.apply_link,
    })
}

/// プロフィールペイロードを検証済みの `UserProfile` に変換する。
/// busy_schedule と study_commitments はここで1つのカレンダーにまとめる。
pub fn profile_from_payload(payload: ProfilePayload) -> Result<UserProfile, ConvertError> {
    let mut busy = calendar_from_schedule(&payload.busy_schedule)?;
    let study = calendar_from_schedule(&payload.study_commitments)?;
    busy.merge(&study);

    Ok(UserProfile {
        location: payload.location,
        min_hourly_rate: payload.min_hourly_rate,
        max_hours_per_week: payload.max_hours_per_week,
        desired_hours_per_week: payload.desired_hours_per_week,
        remote_ok: payload.remote_ok,
        onsite_ok: payload.onsite_ok,
        skills: payload.skills,
        preferred_locations: payload.preferred_locations,
        preferences: payload.preferences,
        currency: payload.currency,
        busy,
    })
}

fn calendar_from_schedule(
    schedule: &HashMap<String, Vec<(TimePoint, TimePoint)>>,
) -> Result<BusyCalendar, ConvertError> {
    let mut calendar = BusyCalendar::new();
    for (raw_day, intervals) in schedule {
        let day = normalize_day(raw_day)?;
        for (start, end) in intervals {
            calendar.insert(day, start.resolve()?, end.resolve()?)?;
        }
    }
    Ok(calendar)
}
