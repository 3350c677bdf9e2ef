const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Render a number of seconds as `"<d> days, <h> hours, <m> minutes, <s> seconds"`.
///
/// Fractional seconds are truncated. Zero components are left out, except
/// seconds which is always present. Units are always plural ("1 days").
pub fn format_duration(seconds: f64) -> String {
    // `as` saturates: negatives and NaN become 0
    let total = seconds as u64;

    let days = total / SECS_PER_DAY;
    let rem = total % SECS_PER_DAY;
    let hours = rem / SECS_PER_HOUR;
    let rem = rem % SECS_PER_HOUR;
    let minutes = rem / SECS_PER_MINUTE;
    let secs = rem % SECS_PER_MINUTE;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{} days", days));
    }
    if hours > 0 {
        parts.push(format!("{} hours", hours));
    }
    if minutes > 0 {
        parts.push(format!("{} minutes", minutes));
    }
    parts.push(format!("{} seconds", secs));

    parts.join(", ")
}
