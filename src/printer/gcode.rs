//! Structured G-code command model
//!
//! Commands are typed values; the textual G-code encoding is a transport
//! concern handled at render time.

/// A single printer command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GcodeCommand {
    /// Pause the running print
    Pause,

    /// Continue the paused print
    Resume,

    /// Set the extruder heater setpoint (°C)
    SetExtruderTemp(f64),

    /// Set the bed heater setpoint (°C)
    SetBedTemp(f64),
}

impl GcodeCommand {
    /// Render the command as G-code text
    pub fn render(&self) -> String {
        match self {
            Self::Pause => "PAUSE".to_string(),
            Self::Resume => "RESUME".to_string(),
            Self::SetExtruderTemp(temp) => format!("M104 S{:.0}", temp),
            Self::SetBedTemp(temp) => format!("M140 S{:.0}", temp),
        }
    }

    /// Whether the command can block on device-side heat-up and needs the
    /// long request timeout
    pub fn is_slow(&self) -> bool {
        matches!(
            self,
            Self::Resume | Self::SetExtruderTemp(_) | Self::SetBedTemp(_)
        )
    }
}

/// Join commands into a single newline-separated script
pub fn render_script(commands: &[GcodeCommand]) -> String {
    commands
        .iter()
        .map(GcodeCommand::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether any command in the script needs the long timeout
pub fn script_is_slow(commands: &[GcodeCommand]) -> bool {
    commands.iter().any(GcodeCommand::is_slow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_simple_commands() {
        assert_eq!(GcodeCommand::Pause.render(), "PAUSE");
        assert_eq!(GcodeCommand::Resume.render(), "RESUME");
        assert_eq!(GcodeCommand::SetExtruderTemp(200.0).render(), "M104 S200");
        assert_eq!(GcodeCommand::SetBedTemp(60.0).render(), "M140 S60");
    }

    #[test]
    fn render_script_joins_with_newlines() {
        let script = render_script(&[
            GcodeCommand::SetExtruderTemp(200.0),
            GcodeCommand::SetBedTemp(60.0),
        ]);
        assert_eq!(script, "M104 S200\nM140 S60");
    }

    #[test]
    fn slow_commands_are_flagged() {
        assert!(!GcodeCommand::Pause.is_slow());
        assert!(GcodeCommand::Resume.is_slow());
        assert!(GcodeCommand::SetBedTemp(40.0).is_slow());

        assert!(!script_is_slow(&[GcodeCommand::Pause]));
        assert!(script_is_slow(&[
            GcodeCommand::Pause,
            GcodeCommand::SetExtruderTemp(200.0)
        ]));
    }
}
