use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// User roles as the authentication service encodes them, wire value 0-3.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum UserRole {
    SuperUser,
    Admin,
    #[default]
    EndUser,
    Guest,
}

impl From<UserRole> for u8 {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::SuperUser => 0,
            UserRole::Admin => 1,
            UserRole::EndUser => 2,
            UserRole::Guest => 3,
        }
    }
}

impl TryFrom<u8> for UserRole {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserRole::SuperUser),
            1 => Ok(UserRole::Admin),
            2 => Ok(UserRole::EndUser),
            3 => Ok(UserRole::Guest),
            other => Err(format!("unknown user role: {other}")),
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::SuperUser => write!(f, "superuser"),
            UserRole::Admin => write!(f, "admin"),
            UserRole::EndUser => write!(f, "user"),
            UserRole::Guest => write!(f, "guest"),
        }
    }
}

/// Credentials posted to the authentication service.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub auth: String,
}

impl LoginRequest {
    /// Pre-flight check before the credentials are sent anywhere.
    pub fn is_valid(&self) -> bool {
        is_plausible_email(&self.email) && !self.auth.is_empty()
    }
}

/// Authenticated user as the service returns it on a successful login.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub telegid: i64,
    pub authtok: String,
}

/// Structural plausibility check for an email id: a local part of word
/// characters plus `._-`, an `@`, and a dotted domain.
pub fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphanumeric());

    local_ok && host_ok && tld_ok
}
