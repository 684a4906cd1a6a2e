//! Unit tests for individual components

mod error_test;
mod store_test;
mod session_test;
mod audit_test;

use chrono::{DateTime, TimeZone, Utc};
use condo_ops::core::SchedulingRequest;

/// December 1st 2025, `hour:00` UTC.
pub fn dec1(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 1, hour, 0, 0).unwrap()
}

/// A valid birthday booking request for area 1 / unit 101, 14:00-18:00.
pub fn birthday_request() -> SchedulingRequest {
    SchedulingRequest {
        area_id: 1,
        unit_id: 101,
        start_time: dec1(14),
        end_time: dec1(18),
        purpose: Some("Birthday".to_owned()),
        guests_count: None,
    }
}
