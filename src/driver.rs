//! Outage guard engine and runtime loop
//!
//! `OutageGuard` owns the schedule, the pause/resume state machine, and the
//! two injected capabilities (schedule feed, printer control). One instance
//! runs per printer; a single polling task drives all evaluation.

use crate::config::Config;
use crate::error::{HestiaError, Result};
use crate::guard::{GuardAction, GuardState, PauseSession, next_action};
use crate::outage::{
    DtekClient, OutageSchedule, Period, ScheduleProvider, current_period, fractional_hour,
    next_danger_window,
};
use crate::printer::{MoonrakerClient, PrinterControl};
use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tokio::time::{Duration, interval, sleep};

/// Outage-aware printer power guard
pub struct OutageGuard {
    config: Config,
    tz: Tz,
    provider: Box<dyn ScheduleProvider>,
    printer: Box<dyn PrinterControl>,
    schedule: OutageSchedule,
    last_refresh: Option<DateTime<Utc>>,
    state: GuardState,
    logger: crate::logging::StructuredLogger,
}

impl OutageGuard {
    /// Create a guard instance with the real feed and Moonraker clients
    pub fn new() -> Result<Self> {
        let config = Config::load().map_err(|e| {
            eprintln!("Failed to load configuration: {}", e);
            e
        })?;
        let provider = Box::new(DtekClient::new(&config.outages)?);
        let printer = Box::new(MoonrakerClient::new(&config.printer)?);
        Self::with_ports(config, provider, printer)
    }

    /// Create a guard instance with injected capabilities
    pub fn with_ports(
        config: Config,
        provider: Box<dyn ScheduleProvider>,
        printer: Box<dyn PrinterControl>,
    ) -> Result<Self> {
        config.validate()?;
        crate::logging::init_logging(&config.logging)?;

        let tz: Tz = config
            .timezone
            .parse()
            .map_err(|_| HestiaError::config(format!("Invalid timezone: {}", config.timezone)))?;

        let logger = crate::logging::get_logger_with_context(
            crate::logging::LogContext::new("driver").with_group(config.outages.group.clone()),
        );

        logger.info(&format!(
            "Outage guard initialized for group {} (wait_before={} min, wait_after={} min)",
            config.outages.group, config.pause.wait_before_minutes, config.pause.wait_after_minutes
        ));
        logger.info(&format!(
            "Heaters: extruder {:.0}°C, bed {:.0}°C, park {:.0}°C",
            config.heaters.extruder_temp, config.heaters.bed_temp, config.heaters.park_temp
        ));

        Ok(Self {
            config,
            tz,
            provider,
            printer,
            schedule: OutageSchedule::default(),
            last_refresh: None,
            state: GuardState::Idle,
            logger,
        })
    }

    /// Current wall-clock time in the configured timezone
    fn local_now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    /// Guard state (test and inspection seam)
    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Currently held schedule (test and inspection seam)
    pub fn schedule(&self) -> &OutageSchedule {
        &self.schedule
    }

    /// When the held schedule was last replaced
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }

    /// Configured timezone
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Fetch a fresh schedule, replacing the held one wholesale.
    ///
    /// On failure the previous schedule is kept untouched: a stale schedule
    /// still protects the print, an empty one does not. Returns whether the
    /// refresh succeeded.
    pub async fn refresh_schedule(&mut self) -> bool {
        self.logger.info("Fetching outage schedule");
        match self.provider.fetch(&self.config.outages.group).await {
            Ok(schedule) => {
                for period in [Period::Today, Period::Tomorrow] {
                    for window in schedule.intervals(period) {
                        self.logger
                            .info(&format!("  {}: {}", period.as_str(), window.label()));
                    }
                }
                if schedule.is_empty() {
                    self.logger.info("  no confirmed outage windows published");
                }
                self.schedule = schedule;
                self.last_refresh = Some(Utc::now());
                true
            }
            Err(e) => {
                self.logger
                    .error(&format!("Failed to fetch outage schedule: {}", e));
                false
            }
        }
    }

    /// Run one evaluation cycle at the current wall-clock time
    pub async fn check_and_manage(&mut self) -> Result<()> {
        let now = self.local_now();
        self.check_and_manage_at(now).await
    }

    /// Run one evaluation cycle at an explicit instant
    pub async fn check_and_manage_at(&mut self, now: DateTime<Tz>) -> Result<()> {
        let period = current_period(&now);
        let hour = fractional_hour(&now);
        let signal = next_danger_window(
            &self.schedule,
            period,
            hour,
            self.config.pause.wait_before_minutes,
        );

        let action = next_action(
            &self.state,
            &signal,
            now.with_timezone(&Utc),
            self.config.pause.wait_after_minutes,
        );

        match action {
            GuardAction::PausePrint { window } => {
                self.apply_pause(window, now.with_timezone(&Utc)).await;
            }
            GuardAction::HoldPause { remaining_minutes } => {
                self.logger.debug(&format!(
                    "Paused, waiting {:.1} more minutes before resume",
                    remaining_minutes
                ));
            }
            GuardAction::ResumePrint => {
                self.apply_resume().await;
            }
            GuardAction::Idle => {}
        }
        Ok(())
    }

    /// Pause the print and park the heaters for the given window
    async fn apply_pause(&mut self, window: String, now: DateTime<Utc>) {
        self.logger.warn(&format!(
            "Danger window {} is close, pausing print (wait_before={} min)",
            window, self.config.pause.wait_before_minutes
        ));

        match self.printer.pause().await {
            Ok(()) => {
                self.state = GuardState::Paused(PauseSession {
                    started_at: now,
                    window,
                });
                self.logger.warn(&format!(
                    "Print paused; resume scheduled in {} minutes",
                    self.config.pause.wait_after_minutes
                ));

                sleep(Duration::from_secs(self.config.heaters.park_delay_secs)).await;
                if let Err(e) = self.printer.park(self.config.heaters.park_temp).await {
                    // Pause is already committed; a failed park only loses the cool-down
                    self.logger.warn(&format!("Park command failed: {}", e));
                }
            }
            Err(e) => {
                self.logger
                    .error(&format!("Pause command failed: {}; retrying next poll", e));
            }
        }
    }

    /// Attempt resume; on failure the pause timer is left untouched so the
    /// attempt repeats every poll until it succeeds
    async fn apply_resume(&mut self) {
        self.logger.info(&format!(
            "wait_after={} minutes elapsed, attempting resume",
            self.config.pause.wait_after_minutes
        ));

        let result = self
            .printer
            .resume(
                self.config.heaters.extruder_temp,
                self.config.heaters.bed_temp,
                Duration::from_secs(self.config.heaters.settle_delay_secs),
            )
            .await;

        match result {
            Ok(()) => {
                self.state = GuardState::Idle;
                self.logger.info("Print resumed");
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Resume failed: {}; retrying next poll", e));
            }
        }
    }

    /// Next local midnight strictly after `now`
    fn next_midnight(&self, now: &DateTime<Tz>) -> DateTime<Tz> {
        let tomorrow = now.date_naive() + chrono::Days::new(1);
        self.tz
            .from_local_datetime(&tomorrow.and_time(NaiveTime::MIN))
            .earliest()
            .unwrap_or_else(|| *now + chrono::Duration::hours(24))
    }

    /// Run the guard main loop until externally cancelled
    pub async fn run(&mut self) -> Result<()> {
        self.logger.info("Starting outage guard main loop");

        self.refresh_schedule().await;
        let mut next_refresh = self.next_midnight(&self.local_now());

        let mut poll = interval(Duration::from_secs(self.config.poll_interval_secs));

        loop {
            tokio::select! {
                _ = poll.tick() => {
                    let now = self.local_now();
                    if now >= next_refresh {
                        self.logger.info("Midnight schedule refresh");
                        self.refresh_schedule().await;
                        next_refresh = self.next_midnight(&self.local_now());
                    }
                    if let Err(e) = self.check_and_manage_at(now).await {
                        self.logger.error(&format!("Evaluation cycle failed: {}", e));
                        // Continue polling even on errors
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    self.logger.info("Shutdown signal received");
                    break;
                }
            }
        }

        self.logger.info("Outage guard shutdown complete");
        Ok(())
    }

    /// Single fetch-and-evaluate pass, for external schedulers
    pub async fn run_once(&mut self) -> Result<()> {
        self.refresh_schedule().await;
        self.check_and_manage().await
    }

    /// Manual smoke test: pause, park, wait a minute, resume
    pub async fn test_pause_resume(&self) -> Result<()> {
        self.logger.info("Manual pause/resume smoke test");

        self.printer.pause().await?;
        sleep(Duration::from_secs(self.config.heaters.park_delay_secs)).await;
        self.printer.park(self.config.heaters.park_temp).await?;

        self.logger.info("Paused and parked; waiting 60 seconds");
        sleep(Duration::from_secs(60)).await;

        self.printer
            .resume(
                self.config.heaters.extruder_temp,
                self.config.heaters.bed_temp,
                Duration::from_secs(self.config.heaters.settle_delay_secs),
            )
            .await?;

        self.logger.info("Smoke test completed");
        Ok(())
    }
}
