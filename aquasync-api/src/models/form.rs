use super::clock::{ClockTime, ParseClockError};
use super::schedule::{MAX_PULSE_GAP_SECS, SECS_PER_DAY, Schedule, ScheduleMode};

/// Editable schedule configuration, the single source of truth behind a
/// settings form.
///
/// Every mutation goes through a consuming setter that re-validates the
/// touched field and re-derives the matching [`Schedule`] field before the
/// next read. A rejected value raises the field's invalid flag and leaves
/// the last-known-valid payload field untouched, so [`ScheduleForm::schedule`]
/// never exposes an out-of-bounds value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    mode: ScheduleMode,
    clock: Option<ClockTime>,
    pulse_gap_secs: i64,
    interval_secs: i64,
    pulse_gap_invalid: bool,
    interval_invalid: bool,
    payload: Schedule,
}

impl ScheduleForm {
    /// Fresh form with the registry defaults: tick every interval, pulse
    /// gap 60s, interval 100s, no clock.
    pub fn new() -> Self {
        Self {
            mode: ScheduleMode::default(),
            clock: None,
            pulse_gap_secs: 60,
            interval_secs: 100,
            pulse_gap_invalid: false,
            interval_invalid: false,
            payload: Schedule::default(),
        }
    }

    /// Overwrites the form wholesale from a fetched schedule, the way the
    /// settings view is populated when the device's current configuration
    /// arrives. An empty `tickat` means no clock is set.
    pub fn from_schedule(schedule: Schedule) -> Result<Self, ParseClockError> {
        let clock = if schedule.tickat.is_empty() {
            None
        } else {
            Some(schedule.tickat.parse::<ClockTime>()?)
        };

        let mut form = Self {
            mode: schedule.config,
            clock,
            pulse_gap_secs: schedule.pulsegap,
            interval_secs: schedule.interval,
            pulse_gap_invalid: false,
            interval_invalid: false,
            payload: schedule,
        };
        // keep the payload a pure projection of the view fields
        form.payload.tickat = form.derived_tickat();
        form.interval_invalid = !form.interval_ok();
        form.pulse_gap_invalid = !form.pulse_gap_ok();

        Ok(form)
    }

    pub fn set_mode(mut self, mode: ScheduleMode) -> Self {
        self.mode = mode;
        self.payload.config = mode;
        // the cross-field rule only applies under PulseEveryInterval, so a
        // mode change can flip either verdict
        self.interval_invalid = !self.interval_ok();
        if !self.interval_invalid {
            self.payload.interval = self.interval_secs;
        }
        self.pulse_gap_invalid = !self.pulse_gap_ok();
        if !self.pulse_gap_invalid {
            self.payload.pulsegap = self.pulse_gap_secs;
        }

        self
    }

    pub fn set_interval(mut self, secs: i64) -> Self {
        self.interval_secs = secs;
        self.interval_invalid = !self.interval_ok();
        if !self.interval_invalid {
            self.payload.interval = secs;
        }

        self
    }

    pub fn set_pulse_gap(mut self, secs: i64) -> Self {
        self.pulse_gap_secs = secs;
        self.pulse_gap_invalid = !self.pulse_gap_ok();
        if !self.pulse_gap_invalid {
            self.payload.pulsegap = secs;
        }

        self
    }

    pub fn set_clock(mut self, clock: ClockTime) -> Self {
        self.clock = Some(clock);
        self.payload.tickat = self.derived_tickat();

        self
    }

    pub fn clear_clock(mut self) -> Self {
        self.clock = None;
        self.payload.tickat = self.derived_tickat();

        self
    }

    pub fn mode(&self) -> ScheduleMode {
        self.mode
    }

    pub fn clock(&self) -> Option<ClockTime> {
        self.clock
    }

    pub fn pulse_gap_secs(&self) -> i64 {
        self.pulse_gap_secs
    }

    pub fn interval_secs(&self) -> i64 {
        self.interval_secs
    }

    pub fn pulse_gap_invalid(&self) -> bool {
        self.pulse_gap_invalid
    }

    pub fn interval_invalid(&self) -> bool {
        self.interval_invalid
    }

    pub fn is_valid(&self) -> bool {
        !self.pulse_gap_invalid && !self.interval_invalid
    }

    /// The wire payload derived from the current form state. Fields that
    /// failed validation still hold their last accepted value.
    pub fn schedule(&self) -> &Schedule {
        &self.payload
    }

    fn derived_tickat(&self) -> String {
        self.clock.map(|c| c.to_string()).unwrap_or_default()
    }

    fn interval_ok(&self) -> bool {
        if self.interval_secs <= 0 || self.interval_secs > SECS_PER_DAY {
            return false;
        }
        // under pulsed intervals the interval must leave room for the gap
        if self.mode == ScheduleMode::PulseEveryInterval && self.interval_secs <= self.pulse_gap_secs
        {
            return false;
        }

        true
    }

    fn pulse_gap_ok(&self) -> bool {
        // NOTE: the gap's upper bound is 86340, a minute short of the
        // interval's 86400. Inherited from the registry contract.
        if self.pulse_gap_secs <= 0 || self.pulse_gap_secs > MAX_PULSE_GAP_SECS {
            return false;
        }
        if self.mode == ScheduleMode::PulseEveryInterval
            && self.pulse_gap_secs >= self.interval_secs
        {
            return false;
        }

        true
    }
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self::new()
    }
}
