//! Real time of day for the scaler.

pub const MILLIS_PER_DAY: u64 = 86_400_000;

/// Milliseconds elapsed since local midnight, read from the browser clock.
#[cfg(target_arch = "wasm32")]
pub fn millis_since_midnight() -> u64 {
    let now = js_sys::Date::new_0();
    let hours = u64::from(now.get_hours());
    let minutes = u64::from(now.get_minutes());
    let seconds = u64::from(now.get_seconds());
    let millis = u64::from(now.get_milliseconds());
    ((hours * 60 + minutes) * 60 + seconds) * 1_000 + millis
}

/// Milliseconds elapsed since midnight UTC. Host builds have no local
/// timezone information to go on.
#[cfg(not(target_arch = "wasm32"))]
pub fn millis_since_midnight() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64 % MILLIS_PER_DAY)
        .unwrap_or(0)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_millis_since_midnight_within_one_day() {
        assert!(millis_since_midnight() < MILLIS_PER_DAY);
    }
}
