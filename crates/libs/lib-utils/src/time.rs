//! # Time Utilities
//!
//! UTC helpers shared by token issuance and persistence.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Unix timestamp (seconds) `ttl` from now.
pub fn unix_after(ttl: Duration) -> i64 {
    (now_utc() + ttl).timestamp()
}

/// Convert a Unix timestamp (seconds) back to a UTC DateTime.
pub fn from_unix(secs: i64) -> Result<DateTime<Utc>, Error> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or(Error::TimestampOutOfRange(secs))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    TimestampOutOfRange(i64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_after_is_in_future() {
        let now = now_utc().timestamp();
        let later = unix_after(Duration::minutes(60));
        assert!(later >= now + 3600);
        assert!(later <= now + 3601);
    }

    #[test]
    fn test_from_unix() {
        let dt = from_unix(0).expect("Epoch should convert");
        assert_eq!(dt.timestamp(), 0);
    }
}
