use crate::config::SplitTime;

/// Monotonic clock that also works on wasm32
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const SECS_IN_MIN: i64 = 60;
    pub const SECS_IN_H: i64 = Self::SECS_IN_MIN * 60;
}

/// Formats a split time the way timers display it.
/// Under an hour: `m:ss.cc`, otherwise `h:mm:ss.cc`. Negative times get a leading `-`.
pub fn format_split_time(time: SplitTime) -> String {
    let sign = if time.is_negative() { "-" } else { "" };
    let centis_total = (time.value().abs() * 100.0).round() as i64;

    let centis = centis_total % 100;
    let secs_total = centis_total / 100;
    let secs = secs_total % TimeUtils::SECS_IN_MIN;
    let mins_total = secs_total / TimeUtils::SECS_IN_MIN;

    if secs_total >= TimeUtils::SECS_IN_H {
        let hours = secs_total / TimeUtils::SECS_IN_H;
        let mins = mins_total % 60;
        format!("{}{}:{:02}:{:02}.{:02}", sign, hours, mins, secs, centis)
    } else {
        format!("{}{}:{:02}.{:02}", sign, mins_total, secs, centis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_under_an_hour() {
        assert_eq!(format_split_time(SplitTime::from_secs(83.456)), "1:23.46");
        assert_eq!(format_split_time(SplitTime::ZERO), "0:00.00");
    }

    #[test]
    fn formats_hours() {
        assert_eq!(format_split_time(SplitTime::from_secs(3723.5)), "1:02:03.50");
    }

    #[test]
    fn formats_negative() {
        assert_eq!(format_split_time(SplitTime::from_secs(-15.0)), "-0:15.00");
    }
}
