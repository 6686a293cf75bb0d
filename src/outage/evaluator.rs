//! Pure window evaluation: when is a pause due?

use super::types::{OutageSchedule, Period};
use chrono::Timelike;

/// Flag a pause as imminent when at most this many minutes remain before the
/// pause point, so a pause is not stepped over between polls.
pub const IMMINENT_PAUSE_THRESHOLD_MINUTES: f64 = 1.0;

/// Evaluation outcome for a single poll
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionSignal {
    /// Whether a pause action is due now
    pub must_act: bool,

    /// Label of the window that triggered the signal
    pub window: Option<String>,

    /// Minutes until the pause point, or until the end of an active window
    pub minutes: Option<f64>,
}

impl DecisionSignal {
    /// No window pending
    pub fn idle() -> Self {
        Self {
            must_act: false,
            window: None,
            minutes: None,
        }
    }
}

/// Fractional hour of day with second precision
pub fn fractional_hour<T: Timelike>(now: &T) -> f64 {
    f64::from(now.hour()) + f64::from(now.minute()) / 60.0 + f64::from(now.second()) / 3600.0
}

/// Which day list to evaluate against.
///
/// In the last hour before midnight the evaluator looks ahead to tomorrow's
/// windows so a 23:xx-to-00:xx boundary is covered one hour early.
pub fn current_period<T: Timelike>(now: &T) -> Period {
    if now.hour() == 23 {
        Period::Tomorrow
    } else {
        Period::Today
    }
}

/// Find the next danger window and decide whether a pause is due now.
///
/// Intervals are assumed chronological and non-overlapping, as supplied by
/// the feed. The scan stops at the first interval that is not already past:
/// nothing earlier can exist, so later intervals never need checking.
pub fn next_danger_window(
    schedule: &OutageSchedule,
    period: Period,
    current_hour: f64,
    wait_before_minutes: f64,
) -> DecisionSignal {
    for interval in schedule.intervals(period) {
        let pause_point = interval.start_hour - wait_before_minutes / 60.0;

        if current_hour < pause_point {
            // Still ahead of the pause point
            let minutes_until_pause = (pause_point - current_hour) * 60.0;
            if minutes_until_pause <= IMMINENT_PAUSE_THRESHOLD_MINUTES {
                return DecisionSignal {
                    must_act: true,
                    window: Some(interval.label()),
                    minutes: Some(minutes_until_pause),
                };
            }
            return DecisionSignal::idle();
        } else if current_hour < interval.end_hour {
            // At or past the pause point, inside the pause-to-end span
            let minutes_until_end = (interval.end_hour - current_hour) * 60.0;
            return DecisionSignal {
                must_act: true,
                window: Some(interval.label()),
                minutes: Some(minutes_until_end),
            };
        }
        // Window already past; try the next one
    }

    DecisionSignal::idle()
}
