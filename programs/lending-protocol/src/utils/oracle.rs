use crate::errors::{ProtocolError, ProtocolResult};

/// Check if a price snapshot published at `published_at` is older than `max_age_seconds`
pub fn is_price_stale(published_at: i64, now: i64, max_age_seconds: u64) -> bool {
    let age = now.saturating_sub(published_at);
    let max_age = i64::try_from(max_age_seconds).unwrap_or(i64::MAX);
    age > max_age
}

pub fn ensure_fresh(published_at: i64, now: i64, max_age_seconds: u64) -> ProtocolResult {
    if is_price_stale(published_at, now, max_age_seconds) {
        return Err(ProtocolError::OracleStale);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_price_stale() {
        let current = 1_700_000_000;

        // Not stale (10 seconds old, max 60)
        assert!(!is_price_stale(current - 10, current, 60));

        // Exactly at the limit is still fresh
        assert!(!is_price_stale(current - 60, current, 60));

        // Stale (70 seconds old, max 60)
        assert!(is_price_stale(current - 70, current, 60));
    }

    #[test]
    fn test_future_timestamps_are_fresh() {
        assert!(!is_price_stale(100, 50, 0));
        assert!(!is_price_stale(0, i64::MAX, u64::MAX));
    }

    #[test]
    fn test_ensure_fresh() {
        assert!(ensure_fresh(0, 30, 60).is_ok());
        assert_eq!(ensure_fresh(0, 61, 60), Err(ProtocolError::OracleStale));
    }
}
