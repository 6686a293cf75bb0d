//! Pause/resume state machine
//!
//! This module holds the guard's persistent state and derives the next
//! action as a pure function of `(state, signal, now)`, so the transition
//! logic is testable without a live printer or network.

use crate::outage::DecisionSignal;
use chrono::{DateTime, Utc};

/// The singleton pause session held while the printer is paused
#[derive(Debug, Clone, PartialEq)]
pub struct PauseSession {
    /// When the pause command succeeded
    pub started_at: DateTime<Utc>,

    /// Label of the outage window that triggered the pause
    pub window: String,
}

/// Guard state: either printing normally or holding a pause session
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GuardState {
    #[default]
    Idle,
    Paused(PauseSession),
}

impl GuardState {
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused(_))
    }
}

/// The action the driver should perform this cycle
#[derive(Debug, Clone, PartialEq)]
pub enum GuardAction {
    /// Issue the pause command for the given window
    PausePrint { window: String },

    /// Stay paused; the wait_after timer has not elapsed yet
    HoldPause { remaining_minutes: f64 },

    /// Issue the resume command
    ResumePrint,

    /// Nothing to do
    Idle,
}

/// Derive the next action from the current state and evaluator signal.
///
/// While paused the evaluator's signal is ignored entirely: the exit
/// condition is time-based (`wait_after`), independent of the window's
/// actual end. The boundary `elapsed == wait_after` resumes.
pub fn next_action(
    state: &GuardState,
    signal: &DecisionSignal,
    now: DateTime<Utc>,
    wait_after_minutes: f64,
) -> GuardAction {
    match state {
        GuardState::Idle => {
            if signal.must_act {
                GuardAction::PausePrint {
                    window: signal.window.clone().unwrap_or_default(),
                }
            } else {
                GuardAction::Idle
            }
        }
        GuardState::Paused(session) => {
            let elapsed_minutes =
                (now - session.started_at).num_milliseconds() as f64 / 60_000.0;
            if elapsed_minutes >= wait_after_minutes {
                GuardAction::ResumePrint
            } else {
                GuardAction::HoldPause {
                    remaining_minutes: wait_after_minutes - elapsed_minutes,
                }
            }
        }
    }
}
