use aquasync_api::models::Schedule;
use aquasync_api::restful::DeviceResponse;

use crate::errors::Result;
use crate::services::ensure_success;

/// Client for the device registry: per-user listings, by-id lookups and
/// the replace-config partial update.
#[derive(Debug, Clone)]
pub struct DeviceRegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DeviceRegistryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// All devices the user has direct access to. Device to user mapping is
    /// always through the email.
    pub async fn user_devices(&self, email: &str) -> Result<Vec<DeviceResponse>> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("filter", "users"), ("user", email)])
            .send()
            .await?;

        let devices: Vec<DeviceResponse> = ensure_success(response)?.json().await?;
        tracing::debug!(user = email, count = devices.len(), "fetched user devices");

        Ok(devices)
    }

    /// Full registry record for one device, keyed by mac or object id.
    pub async fn device(&self, device_id: &str) -> Result<DeviceResponse> {
        let response = self
            .http
            .get(format!("{}/{}", self.base_url, device_id))
            .send()
            .await?;

        Ok(ensure_success(response)?.json().await?)
    }

    /// The device's current schedule configuration.
    pub async fn fetch_schedule(&self, device_id: &str) -> Result<Schedule> {
        let device = self.device(device_id).await?;
        tracing::debug!(device = device_id, schedule = ?device.cfg, "fetched schedule");

        Ok(device.cfg)
    }

    /// Replaces the device's schedule configuration on the registry. The
    /// registry relays the change to the device on the ground.
    pub async fn replace_schedule(&self, device_id: &str, schedule: &Schedule) -> Result<()> {
        let response = self
            .http
            .patch(format!("{}/{}", self.base_url, device_id))
            .query(&[("path", "config"), ("action", "replace")])
            .json(schedule)
            .send()
            .await?;

        ensure_success(response).map(|_| ())
    }
}
