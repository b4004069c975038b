use std::time::{Duration, Instant};

pub fn summarize(result_count: usize, start: Instant, end: Instant) -> String {
    format_summary(result_count, end.saturating_duration_since(start))
}

/// Components are carved out of the total milliseconds, so they never round.
pub fn format_summary(result_count: usize, elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let hours = total_ms / 3_600_000;
    let minutes = total_ms % 3_600_000 / 60_000;
    let seconds = total_ms % 60_000 / 1_000;
    let millis = total_ms % 1_000;

    let mut message = format!("\n[INFO] Total {} result found in", result_count);
    [
        (hours, "hours"),
        (minutes, "minutes"),
        (seconds, "seconds"),
        (millis, "milliseconds"),
    ]
    .iter()
    .filter(|(value, _)| *value != 0)
    .for_each(|(value, unit)| message.push_str(&format!(" {} {}", value, unit)));

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_every_nonzero_component() {
        let start = Instant::now();
        let end = start + Duration::from_millis(3_725_040);

        assert_eq!(
            summarize(5, start, end),
            "\n[INFO] Total 5 result found in 1 hours 2 minutes 5 seconds 40 milliseconds"
        );
    }

    #[test]
    fn zero_duration_has_no_components() {
        let start = Instant::now();
        assert_eq!(
            summarize(0, start, start),
            "\n[INFO] Total 0 result found in"
        );
    }

    #[test]
    fn skips_zero_components_in_the_middle() {
        assert_eq!(
            format_summary(3, Duration::from_millis(3_600_007)),
            "\n[INFO] Total 3 result found in 1 hours 7 milliseconds"
        );
    }

    #[test]
    fn sub_millisecond_durations_round_down_to_nothing() {
        assert_eq!(
            format_summary(1, Duration::from_micros(900)),
            "\n[INFO] Total 1 result found in"
        );
    }

    #[test]
    fn reversed_instants_are_treated_as_zero() {
        let start = Instant::now();
        let end = start + Duration::from_secs(2);
        assert_eq!(summarize(2, end, start), "\n[INFO] Total 2 result found in");
    }
}
