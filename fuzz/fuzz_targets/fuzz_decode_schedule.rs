#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Interpret the input as a raw feed document and exercise the decoder
    if let Ok(raw) = serde_json::from_slice::<hestia::outage::RawGroupSchedule>(data) {
        let schedule = hestia::outage::OutageSchedule::from_raw(&raw);
        for period in [
            hestia::outage::Period::Today,
            hestia::outage::Period::Tomorrow,
        ] {
            for window in schedule.intervals(period) {
                let _ = window.label();
            }
        }
    }
});
