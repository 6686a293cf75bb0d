//! Typed outage-schedule model and raw feed records

use serde::{Deserialize, Serialize};

/// Day selector for the schedule's two published lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Tomorrow,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
        }
    }
}

/// A single confirmed outage window in fractional hours of the day.
///
/// `start_hour < end_hour` holds for every parsed interval; windows crossing
/// midnight are not modeled (the feed publishes day-partitioned slots).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutageInterval {
    pub start_hour: f64,
    pub end_hour: f64,
}

impl OutageInterval {
    /// Human-readable "HH:MM-HH:MM" label used in logs and pause sessions
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            format_hour(self.start_hour),
            format_hour(self.end_hour)
        )
    }
}

fn format_hour(hour: f64) -> String {
    let h = hour.trunc() as u32;
    let m = ((hour - hour.trunc()) * 60.0).round() as u32;
    format!("{:02}:{:02}", h, m)
}

/// Raw slot record as published by the feed (minutes of day)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSlot {
    #[serde(rename = "type")]
    pub slot_type: String,

    /// Window start in minutes after midnight
    #[serde(default)]
    pub start: u32,

    /// Window end in minutes after midnight
    #[serde(default)]
    pub end: u32,
}

/// Raw per-day slot list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDay {
    #[serde(default)]
    pub slots: Vec<RawSlot>,
}

/// Raw per-group schedule with today/tomorrow day lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGroupSchedule {
    #[serde(default)]
    pub today: RawDay,

    #[serde(default)]
    pub tomorrow: RawDay,
}

/// Parsed outage schedule for a single group.
///
/// Intervals keep the chronological order supplied by the feed; only
/// "Definite" slots are retained, tentative entries are discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutageSchedule {
    today: Vec<OutageInterval>,
    tomorrow: Vec<OutageInterval>,
}

impl OutageSchedule {
    /// Build a schedule from the raw feed records
    pub fn from_raw(raw: &RawGroupSchedule) -> Self {
        Self {
            today: parse_slots(&raw.today.slots),
            tomorrow: parse_slots(&raw.tomorrow.slots),
        }
    }

    /// Intervals for the given period, in feed order
    pub fn intervals(&self, period: Period) -> &[OutageInterval] {
        match period {
            Period::Today => &self.today,
            Period::Tomorrow => &self.tomorrow,
        }
    }

    /// Whether the schedule holds no confirmed windows at all
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.tomorrow.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_intervals(
        today: Vec<OutageInterval>,
        tomorrow: Vec<OutageInterval>,
    ) -> Self {
        Self { today, tomorrow }
    }
}

/// Convert raw slots to fractional-hour intervals, keeping only confirmed
/// windows and dropping degenerate ones (`end <= start`).
fn parse_slots(slots: &[RawSlot]) -> Vec<OutageInterval> {
    slots
        .iter()
        .filter(|slot| slot.slot_type == "Definite")
        .filter(|slot| slot.end > slot.start)
        .map(|slot| OutageInterval {
            start_hour: f64::from(slot.start) / 60.0,
            end_hour: f64::from(slot.end) / 60.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(slot_type: &str, start: u32, end: u32) -> RawSlot {
        RawSlot {
            slot_type: slot_type.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn parse_keeps_only_definite_slots() {
        let slots = vec![
            slot("Definite", 960, 1140),
            slot("Preliminary", 300, 360),
            slot("Definite", 1200, 1260),
        ];
        let intervals = parse_slots(&slots);
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].start_hour, 16.0);
        assert_eq!(intervals[0].end_hour, 19.0);
        assert_eq!(intervals[1].start_hour, 20.0);
    }

    #[test]
    fn parse_converts_minutes_to_fractional_hours() {
        let intervals = parse_slots(&[slot("Definite", 990, 1125)]);
        assert_eq!(intervals[0].start_hour, 16.5);
        assert_eq!(intervals[0].end_hour, 18.75);
    }

    #[test]
    fn parse_drops_degenerate_slots() {
        let intervals = parse_slots(&[slot("Definite", 600, 600), slot("Definite", 700, 650)]);
        assert!(intervals.is_empty());
    }

    #[test]
    fn interval_label_is_zero_padded() {
        let iv = OutageInterval {
            start_hour: 16.0,
            end_hour: 19.5,
        };
        assert_eq!(iv.label(), "16:00-19:30");

        let early = OutageInterval {
            start_hour: 8.25,
            end_hour: 9.0,
        };
        assert_eq!(early.label(), "08:15-09:00");
    }

    #[test]
    fn raw_group_schedule_decodes_feed_json() {
        let body = serde_json::json!({
            "today": {"slots": [
                {"type": "Definite", "start": 960, "end": 1140},
                {"type": "Preliminary", "start": 1200, "end": 1260}
            ]},
            "tomorrow": {"slots": []}
        });
        let raw: RawGroupSchedule = serde_json::from_value(body).unwrap();
        let schedule = OutageSchedule::from_raw(&raw);
        assert_eq!(schedule.intervals(Period::Today).len(), 1);
        assert_eq!(schedule.intervals(Period::Today)[0].label(), "16:00-19:00");
        assert!(schedule.intervals(Period::Tomorrow).is_empty());
    }

    #[test]
    fn missing_days_decode_as_empty() {
        let raw: RawGroupSchedule = serde_json::from_str("{}").unwrap();
        let schedule = OutageSchedule::from_raw(&raw);
        assert!(schedule.is_empty());
    }
}
