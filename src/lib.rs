use serde::Serialize;
use std::fmt;
use wasm_bindgen::prelude::*;

use crate::i18n::{Label, Language};

/// Default application parameters
pub mod defaults {
    pub const MIN_DAY_LENGTH: u32 = 12;
    pub const MAX_DAY_LENGTH: u32 = 48;
    pub const DAY_LENGTH: u32 = 24;
    pub const SECONDS_VISIBLE: bool = true;
}

const REAL_DAY_HOURS: u128 = 24;
const SECONDS_PER_HOUR: u128 = 3_600;

/// Number of hours in one scaled day, always inside
/// `[MIN_DAY_LENGTH, MAX_DAY_LENGTH]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayLength(u32);

impl DayLength {
    pub const MIN: DayLength = DayLength(defaults::MIN_DAY_LENGTH);
    pub const MAX: DayLength = DayLength(defaults::MAX_DAY_LENGTH);

    /// Pin `hours` to the nearest bound, the way the range control does.
    pub fn clamped(hours: u32) -> Self {
        DayLength(hours.clamp(defaults::MIN_DAY_LENGTH, defaults::MAX_DAY_LENGTH))
    }

    pub fn hours(self) -> u32 {
        self.0
    }
}

impl Default for DayLength {
    fn default() -> Self {
        DayLength(defaults::DAY_LENGTH)
    }
}

impl fmt::Display for DayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time of day on the scaled clock. `hours` is below the active day length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScaledTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Map real milliseconds since midnight onto an N-hour day.
///
/// The scaled clock advances at `24 / N` times real speed, so a short day
/// runs fast and a long day runs slow. The result is folded into a single
/// scaled day.
///
/// # Examples
/// ```
/// use n_clock::{scale, DayLength, ScaledTime};
/// let t = scale(3_600_000, DayLength::clamped(12));
/// assert_eq!(t, ScaledTime { hours: 2, minutes: 0, seconds: 0 });
/// ```
pub fn scale(real_millis: u64, day_length: DayLength) -> ScaledTime {
    let n = u128::from(day_length.hours());
    // floor(real_secs * 24 / n) in integers; every later step floors too.
    // u128 keeps the product exact for any u64 input.
    let scaled_secs = u128::from(real_millis) * REAL_DAY_HOURS / (1_000 * n);
    let secs_into_day = scaled_secs % (n * SECONDS_PER_HOUR);

    ScaledTime {
        hours: (secs_into_day / SECONDS_PER_HOUR) as u32,
        minutes: ((secs_into_day % SECONDS_PER_HOUR) / 60) as u32,
        seconds: (secs_into_day % 60) as u32,
    }
}

/// `HH:MM:SS`, or `HH:MM` when seconds are hidden.
pub fn format_clock(time: ScaledTime, seconds_visible: bool) -> String {
    if seconds_visible {
        format!("{:02}:{:02}:{:02}", time.hours, time.minutes, time.seconds)
    } else {
        format!("{:02}:{:02}", time.hours, time.minutes)
    }
}

pub fn format_day_length_label(day_length: DayLength, language: Language) -> String {
    format!("N = {} {}", day_length, Label::HoursUnit.text(language))
}

/// Normalise arguments coming from JavaScript numbers.
///
/// Negative and NaN millis become midnight, fractions are truncated and
/// values beyond `u64::MAX` saturate. The day length is clamped.
fn js_inputs(real_millis: f64, day_length: u32) -> (u64, DayLength) {
    (real_millis.max(0.0) as u64, DayLength::clamped(day_length))
}

/// Scale a time of day for callers on the JavaScript side.
///
/// Accepts any number for `real_millis` (see [`js_inputs`]); any `day_length`
/// is clamped into `[12, 48]`. Returns `{ hours, minutes, seconds }`, or
/// `null` if the value could not be converted.
#[wasm_bindgen(js_name = scaleTime)]
pub fn scale_time(real_millis: f64, day_length: u32) -> JsValue {
    let (real_millis, day_length) = js_inputs(real_millis, day_length);
    serde_wasm_bindgen::to_value(&scale(real_millis, day_length)).unwrap_or(JsValue::NULL)
}

pub mod i18n;
pub mod scheduler;
pub mod state;
pub mod time_source;
pub mod view;
