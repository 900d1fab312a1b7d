use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Device record as the registry returns it, both from the by-id lookup and
/// the per-user listing.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceResponse {
    /// Registry object id, absent until the device is registered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique mac id of the device
    pub mac: String,
    /// Device name, preferably unique
    pub name: String,
    /// Location co-ordinates
    #[serde(default)]
    pub location: String,
    /// Platform or make of the device
    #[serde(default)]
    pub make: String,
    /// Emails of the users with direct access to the device
    #[serde(default)]
    pub users: Vec<String>,
    /// Current schedule configuration
    #[serde(default)]
    pub cfg: Schedule,
}
