use aquasync_api::models::ScheduleForm;

use crate::errors::{ApiError, Result};
use crate::services::device_service::DeviceRegistryClient;

/// Where the one-shot submit round trip stands. `Done` only means the
/// exchange resolved, not that it succeeded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Done,
}

/// One settings-form session against a single device: fetch the current
/// schedule into the form, take edits, and push the derived payload back.
/// Dropped with the form when the caller navigates away; a fresh exchange
/// starts over at `Idle`.
pub struct ScheduleExchange {
    registry: DeviceRegistryClient,
    device_id: String,
    form: ScheduleForm,
    state: SubmitState,
}

impl ScheduleExchange {
    pub fn new(registry: DeviceRegistryClient, device_id: impl Into<String>) -> Self {
        Self {
            registry,
            device_id: device_id.into(),
            form: ScheduleForm::new(),
            state: SubmitState::Idle,
        }
    }

    /// Pulls the device's current configuration and overwrites the form
    /// wholesale with it.
    pub async fn load(&mut self) -> Result<()> {
        let schedule = self.registry.fetch_schedule(&self.device_id).await?;
        self.form = ScheduleForm::from_schedule(schedule)?;

        Ok(())
    }

    /// Applies an edit to the form, e.g.
    /// `exchange.edit(|f| f.set_interval(80))`.
    pub fn edit(&mut self, apply: impl FnOnce(ScheduleForm) -> ScheduleForm) {
        self.form = apply(std::mem::take(&mut self.form));
    }

    pub fn form(&self) -> &ScheduleForm {
        &self.form
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Pushes the derived payload to the registry. Refused locally while
    /// any validity flag is raised or the payload as a whole would be
    /// rejected, with no network call and no state change. Otherwise the
    /// state runs Pending and settles on Done whichever way the round trip
    /// resolves.
    pub async fn submit(&mut self) -> Result<()> {
        if !self.form.is_valid() || !self.form.schedule().is_valid() {
            tracing::debug!(device = %self.device_id, "submit refused, form invalid");
            return Err(ApiError::Validation);
        }

        self.state = SubmitState::Pending;
        let result = self
            .registry
            .replace_schedule(&self.device_id, self.form.schedule())
            .await;
        self.state = SubmitState::Done;

        match &result {
            Ok(()) => tracing::info!(device = %self.device_id, "schedule replaced"),
            Err(err) => tracing::error!(device = %self.device_id, %err, "schedule submit failed"),
        }

        result
    }
}
