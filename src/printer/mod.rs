//! Printer control over the Moonraker HTTP API
//!
//! The structured G-code command model and the HTTP transport live in
//! separate files; the core only sees the `PrinterControl` capability.

pub mod gcode;
pub mod moonraker;

// Re-exports for the public API surface
pub use gcode::{GcodeCommand, render_script, script_is_slow};
pub use moonraker::{MoonrakerClient, PrinterControl};
