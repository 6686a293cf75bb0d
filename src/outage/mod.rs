//! Planned-outage schedule integration
//!
//! This module is split across smaller files: the typed schedule model,
//! the pure window evaluator, and the HTTP feed client.

pub mod client;
pub mod evaluator;
pub mod types;

// Re-exports for the public API surface
pub use client::{DtekClient, ScheduleProvider};
pub use evaluator::{
    DecisionSignal, IMMINENT_PAUSE_THRESHOLD_MINUTES, current_period, fractional_hour,
    next_danger_window,
};
pub use types::{OutageInterval, OutageSchedule, Period, RawGroupSchedule};
