use std::time::{SystemTime, UNIX_EPOCH};

pub fn blocked_uids_key(uid: u64) -> String {
    format!("uid:{uid}:blocked_uids")
}

/// Store members are strings; only strictly positive integers count as
/// account identifiers.
pub fn parse_uid(member: &str) -> Option<u64> {
    member.parse::<u64>().ok().filter(|uid| *uid > 0)
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
