//! # Hestia - Outage-aware power guard for 3D printers
//!
//! A Rust daemon that protects a running Klipper print job from planned
//! power cuts: it watches the published blackout schedule for the printer's
//! outage group and proactively pauses, parks (partially cools), and later
//! resumes the printer through the Moonraker HTTP API.
//!
//! ## Architecture
//!
//! The application follows a modular architecture with clear separation of
//! concerns:
//!
//! - `config`: Configuration management and validation
//! - `logging`: Structured logging and tracing
//! - `outage`: Outage schedule model, feed client, and window evaluator
//! - `printer`: Structured G-code commands and the Moonraker control port
//! - `guard`: Pure pause/resume state machine
//! - `driver`: Polling engine and daily schedule refresh

pub mod config;
pub mod driver;
pub mod error;
pub mod guard;
pub mod logging;
pub mod outage;
pub mod printer;

// Re-export commonly used types
pub use config::Config;
pub use driver::OutageGuard;
pub use error::{HestiaError, Result};
