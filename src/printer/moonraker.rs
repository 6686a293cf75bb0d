//! Moonraker HTTP client for printer control
//!
//! This module provides the `PrinterControl` capability consumed by the
//! driver and its Moonraker implementation, issuing G-code scripts over
//! HTTP with per-command timeouts.

use super::gcode::{GcodeCommand, render_script, script_is_slow};
use crate::config::PrinterConfig;
use crate::error::{HestiaError, Result};
use crate::logging::get_logger;
use async_trait::async_trait;
use std::time::Duration;

/// Capability interface for the three printer operations the guard needs.
///
/// `resume` is compound on the device side: restore both heater setpoints,
/// wait for `settle_delay`, then continue the print.
#[async_trait]
pub trait PrinterControl: Send + Sync {
    async fn pause(&self) -> Result<()>;
    async fn resume(&self, extruder_temp: f64, bed_temp: f64, settle_delay: Duration)
    -> Result<()>;
    async fn park(&self, cool_temp: f64) -> Result<()>;
}

/// Client for the Moonraker G-code script endpoint
pub struct MoonrakerClient {
    base_url: String,
    http: reqwest::Client,
    command_timeout: Duration,
    slow_command_timeout: Duration,
    logger: crate::logging::StructuredLogger,
}

impl MoonrakerClient {
    /// Create a new Moonraker client from configuration
    pub fn new(config: &PrinterConfig) -> Result<Self> {
        let logger = get_logger("moonraker");
        let http = reqwest::Client::builder().build()?;
        logger.info(&format!("Moonraker endpoint: {}", config.base_url));
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            command_timeout: Duration::from_secs(config.command_timeout_secs),
            slow_command_timeout: Duration::from_secs(config.slow_command_timeout_secs),
            logger,
        })
    }

    /// Execute a G-code script over HTTP.
    ///
    /// Resume and heater commands wait on device-side heat-up, so they get
    /// the long timeout; everything else uses the short one.
    async fn run_script(&self, commands: &[GcodeCommand]) -> Result<()> {
        let script = render_script(commands);
        let timeout = if script_is_slow(commands) {
            self.slow_command_timeout
        } else {
            self.command_timeout
        };

        let url = format!("{}/printer/gcode/script", self.base_url);
        self.logger
            .debug(&format!("Running script '{}' (timeout {:?})", script, timeout));

        let resp = self
            .http
            .get(&url)
            .query(&[("script", script.as_str())])
            .timeout(timeout)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(HestiaError::command_failed(format!(
                "Script '{}' returned HTTP {}",
                script,
                resp.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PrinterControl for MoonrakerClient {
    async fn pause(&self) -> Result<()> {
        self.logger.warn("Pausing print");
        self.run_script(&[GcodeCommand::Pause]).await
    }

    async fn resume(
        &self,
        extruder_temp: f64,
        bed_temp: f64,
        settle_delay: Duration,
    ) -> Result<()> {
        self.logger.info(&format!(
            "Resuming print: heating extruder to {:.0}°C, bed to {:.0}°C",
            extruder_temp, bed_temp
        ));
        self.run_script(&[
            GcodeCommand::SetExtruderTemp(extruder_temp),
            GcodeCommand::SetBedTemp(bed_temp),
        ])
        .await?;

        // Give the heaters a head start before continuing the print
        tokio::time::sleep(settle_delay).await;

        self.logger.info("Issuing RESUME");
        self.run_script(&[GcodeCommand::Resume]).await
    }

    async fn park(&self, cool_temp: f64) -> Result<()> {
        self.logger.warn(&format!(
            "Parking printer: cooling heaters to {:.0}°C",
            cool_temp
        ));
        self.run_script(&[
            GcodeCommand::SetBedTemp(cool_temp),
            GcodeCommand::SetExtruderTemp(cool_temp),
        ])
        .await
    }
}
