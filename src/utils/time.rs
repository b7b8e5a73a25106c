//! Time helpers

use chrono::Utc;

/// Current instant as an RFC 3339 string
///
/// Timestamps are stored as strings; RFC 3339 sorts lexicographically in
/// timestamp order, which is all the queries need.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}
