use aquasync_api::restful::{UserResponse, UserRole};

/// Signed-in user plus the token the auth service handed out.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub telegid: i64,
    pub token: String,
}

impl From<UserResponse> for Session {
    fn from(user: UserResponse) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            telegid: user.telegid,
            token: user.authtok,
        }
    }
}

/// Holds the current session with an explicit establish/clear lifecycle.
/// Components that need the token or the signed-in email get it from here,
/// there is no ambient global.
#[derive(Debug, Default)]
pub struct SessionContext {
    current: Option<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn establish(&mut self, session: Session) {
        tracing::info!(email = %session.email, "session established");
        self.current = Some(session);
    }

    pub fn clear(&mut self) {
        if let Some(session) = self.current.take() {
            tracing::info!(email = %session.email, "session cleared");
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
