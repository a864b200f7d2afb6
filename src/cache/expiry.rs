//! Expiry Policy
//!
//! Decides when a cached rate stops being served.

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, Utc};

/// First instant of the next UTC calendar day. Always strictly after `now`.
pub fn next_utc_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .checked_add_days(Days::new(1))
        .map(|tomorrow| tomorrow.and_time(NaiveTime::MIN).and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Expiry for a latest rate: it is only valid for the UTC day it was fetched on.
pub fn latest_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    next_utc_midnight(now)
}

/// Expiry for a historical rate (or a cached absence) of `date`.
///
/// Past dates do not change, so they are kept for `historical_ttl`. Today and
/// future dates may still be published, so they expire at the next midnight.
pub fn historical_expiry(
    date: NaiveDate,
    now: DateTime<Utc>,
    historical_ttl: Duration,
) -> DateTime<Utc> {
    if date < now.date_naive() {
        now.checked_add_signed(historical_ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    } else {
        next_utc_midnight(now)
    }
}
