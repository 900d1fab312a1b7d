use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Seconds in a full day, inclusive upper bound for the repeat interval.
pub const SECS_PER_DAY: i64 = 86_400;
/// Upper bound for the pulse gap, a minute short of the day to leave room
/// for the pulse itself.
pub const MAX_PULSE_GAP_SECS: i64 = 86_340;

/// How the device fires its relay triggers, wire-encoded as 0-3.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ScheduleMode {
    /// One trigger after every interval, time of day is irrelevant.
    #[default]
    TickEveryInterval,
    /// One trigger at a specific time of day, interval is irrelevant.
    TickEveryDayAt,
    /// Two triggers separated by the pulse gap after every interval.
    PulseEveryInterval,
    /// Two triggers separated by the pulse gap at a specific time of day.
    PulseEveryDayAt,
}

impl ScheduleMode {
    pub const ALL: [ScheduleMode; 4] = [
        ScheduleMode::TickEveryInterval,
        ScheduleMode::TickEveryDayAt,
        ScheduleMode::PulseEveryInterval,
        ScheduleMode::PulseEveryDayAt,
    ];

    /// Display label for presentation layers.
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleMode::TickEveryInterval => "Tick Every Interval",
            ScheduleMode::TickEveryDayAt => "Tick Every Day At",
            ScheduleMode::PulseEveryInterval => "Pulse Every Interval",
            ScheduleMode::PulseEveryDayAt => "Pulse Every Day At",
        }
    }

    /// Whether the mode fires a trigger pair rather than a single trigger.
    pub fn is_pulsed(&self) -> bool {
        matches!(
            self,
            ScheduleMode::PulseEveryInterval | ScheduleMode::PulseEveryDayAt
        )
    }

    /// Whether the mode is driven by a time of day rather than an interval.
    pub fn uses_clock(&self) -> bool {
        matches!(
            self,
            ScheduleMode::TickEveryDayAt | ScheduleMode::PulseEveryDayAt
        )
    }
}

impl From<ScheduleMode> for u8 {
    fn from(mode: ScheduleMode) -> Self {
        match mode {
            ScheduleMode::TickEveryInterval => 0,
            ScheduleMode::TickEveryDayAt => 1,
            ScheduleMode::PulseEveryInterval => 2,
            ScheduleMode::PulseEveryDayAt => 3,
        }
    }
}

impl TryFrom<u8> for ScheduleMode {
    type Error = UnknownModeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ScheduleMode::TickEveryInterval),
            1 => Ok(ScheduleMode::TickEveryDayAt),
            2 => Ok(ScheduleMode::PulseEveryInterval),
            3 => Ok(ScheduleMode::PulseEveryDayAt),
            other => Err(UnknownModeError(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownModeError(pub u8);

impl Display for UnknownModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown schedule mode: {}", self.0)
    }
}

impl std::error::Error for UnknownModeError {}

/// Schedule configuration as it travels to and from the device registry.
///
/// Field names are the registry's wire keys, do not rename.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Trigger mode, 0-3
    pub config: ScheduleMode,
    /// Time of day as `"HH:MM"`, empty when no clock is set
    #[serde(default)]
    pub tickat: String,
    /// Gap between the two triggers of a pulse, in seconds
    pub pulsegap: i64,
    /// Repeat interval in seconds
    pub interval: i64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            config: ScheduleMode::default(),
            tickat: String::new(),
            pulsegap: 60,
            interval: 100,
        }
    }
}

impl Schedule {
    /// Whole-payload sanity check mirroring what the registry enforces
    /// before it persists a schedule.
    pub fn is_valid(&self) -> bool {
        if self.config == ScheduleMode::PulseEveryInterval && self.interval <= self.pulsegap {
            return false;
        }
        if self.config.uses_clock() && self.tickat.is_empty() {
            return false;
        }

        true
    }
}
