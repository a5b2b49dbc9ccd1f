pub mod conversion;
pub mod match_request;
pub mod match_response;

pub use conversion::{job_from_payload, profile_from_payload};
pub use match_request::{JobPayload, ProfilePayload, TimeBlockPayload, TimePoint};
pub use match_response::{InsightDto, MatchResultDto, MatchedJobDto};
