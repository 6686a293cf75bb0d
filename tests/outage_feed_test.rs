use hestia::outage::{OutageSchedule, Period, RawGroupSchedule};
use std::collections::HashMap;

/// The feed maps group ids to per-day slot lists; this mirrors the payload
/// shape the client decodes.
#[test]
fn multi_group_payload_decodes() {
    let body = serde_json::json!({
        "1.1": {
            "today": {"slots": [
                {"type": "Definite", "start": 960, "end": 1140},
                {"type": "Preliminary", "start": 1200, "end": 1320}
            ]},
            "tomorrow": {"slots": [{"type": "Definite", "start": 0, "end": 120}]}
        },
        "6.2": {
            "today": {"slots": []},
            "tomorrow": {"slots": []}
        }
    });

    let groups: HashMap<String, RawGroupSchedule> = serde_json::from_value(body).unwrap();
    assert_eq!(groups.len(), 2);

    let schedule = OutageSchedule::from_raw(&groups["1.1"]);
    let today = schedule.intervals(Period::Today);
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].label(), "16:00-19:00");

    let tomorrow = schedule.intervals(Period::Tomorrow);
    assert_eq!(tomorrow.len(), 1);
    assert_eq!(tomorrow[0].label(), "00:00-02:00");

    assert!(OutageSchedule::from_raw(&groups["6.2"]).is_empty());
}

#[test]
fn slot_records_tolerate_extra_fields() {
    let raw: RawGroupSchedule = serde_json::from_value(serde_json::json!({
        "today": {"slots": [
            {"type": "Definite", "start": 600, "end": 660, "updatedAt": "2024-01-15T00:00:00Z"}
        ]},
        "tomorrow": {"slots": []}
    }))
    .unwrap();

    let schedule = OutageSchedule::from_raw(&raw);
    assert_eq!(schedule.intervals(Period::Today).len(), 1);
}
