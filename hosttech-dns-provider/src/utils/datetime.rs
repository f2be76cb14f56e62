//! TTL and timestamp helpers
//!
//! - TTL: canonical [`Duration`] <-> whole seconds on the wire, with the provider minimum
//! - Audit stamp: C-locale `Mon _2 15:04:05` rendering of a UTC instant

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Smallest TTL (seconds) the provider accepts.
pub const MIN_TTL_SECS: u32 = 600;

/// `strftime` pattern of the audit stamp: abbreviated month, space-padded day, 24h clock.
const STAMP_FORMAT: &str = "%b %e %H:%M:%S";

/// Convert a canonical TTL to whole wire seconds, raising anything below [`MIN_TTL_SECS`].
///
/// Sub-second parts are dropped before the clamp. Values beyond `u32::MAX` saturate.
pub fn duration_to_ttl_secs(ttl: Duration) -> u32 {
    let secs = u32::try_from(ttl.as_secs()).unwrap_or(u32::MAX);
    secs.max(MIN_TTL_SECS)
}

/// Convert wire seconds back to a canonical TTL. No clamping in this direction.
pub fn ttl_secs_to_duration(secs: u32) -> Duration {
    Duration::from_secs(u64::from(secs))
}

/// Render `now` as an audit stamp, e.g. `"Jan  2 15:04:05"`.
pub fn audit_stamp(now: DateTime<Utc>) -> String {
    now.format(STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ttl_below_minimum_is_raised() {
        assert_eq!(duration_to_ttl_secs(Duration::from_secs(100)), 600);
        assert_eq!(duration_to_ttl_secs(Duration::ZERO), 600);
    }

    #[test]
    fn ttl_above_minimum_is_kept() {
        assert_eq!(duration_to_ttl_secs(Duration::from_secs(1800)), 1800);
        assert_eq!(duration_to_ttl_secs(Duration::from_millis(3_600_900)), 3600);
    }

    #[test]
    fn ttl_saturates() {
        assert_eq!(
            duration_to_ttl_secs(Duration::from_secs(u64::MAX)),
            u32::MAX
        );
    }

    #[test]
    fn ttl_back_to_duration() {
        assert_eq!(ttl_secs_to_duration(1800), Duration::from_secs(1800));
        assert_eq!(ttl_secs_to_duration(60), Duration::from_secs(60));
    }

    #[test]
    fn stamp_pads_single_digit_day_with_space() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(audit_stamp(now), "Jan  2 15:04:05");
    }

    #[test]
    fn stamp_two_digit_day() {
        let now = Utc.with_ymd_and_hms(2024, 11, 23, 7, 30, 0).unwrap();
        assert_eq!(audit_stamp(now), "Nov 23 07:30:00");
    }
}
