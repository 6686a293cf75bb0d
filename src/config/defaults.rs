use super::*;

impl Default for Config {
    fn default() -> Self {
        Self {
            outages: OutagesConfig::default(),
            printer: PrinterConfig::default(),
            pause: PauseConfig::default(),
            heaters: HeatersConfig::default(),
            logging: LoggingConfig::default(),
            poll_interval_secs: 60,
            timezone: "Europe/Kyiv".to_string(),
        }
    }
}

impl Default for OutagesConfig {
    fn default() -> Self {
        Self {
            api_url: "https://app.yasno.ua/api/blackout-service/public/shutdowns".to_string(),
            region: 25,
            dso: 902,
            group: "1.1".to_string(),
            fetch_timeout_secs: 10,
        }
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:7125".to_string(),
            command_timeout_secs: 15,
            slow_command_timeout_secs: 90,
        }
    }
}

impl Default for PauseConfig {
    fn default() -> Self {
        Self {
            wait_before_minutes: 5.0,
            wait_after_minutes: 10.0,
        }
    }
}

impl Default for HeatersConfig {
    fn default() -> Self {
        // PLA defaults; PETG ~245/80, ABS ~240/100
        Self {
            extruder_temp: 200.0,
            bed_temp: 60.0,
            park_temp: 40.0,
            settle_delay_secs: 2,
            park_delay_secs: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            console_level: None,
            file_level: None,
            file: "/tmp/hestia.log".to_string(),
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}
