use crate::domain::ports::{AccountGatewayBox, Restaurant};
use crate::domain::session::{Credentials, Registration, Session};
use crate::error::Result;
use tracing::debug;

/// Explicit session lifecycle over the backend's auth endpoints.
///
/// Login produces a `Session` value that callers pass into workflow operations;
/// logout consumes it. Nothing is stored ambiently.
pub struct SessionManager {
    gateway: AccountGatewayBox,
}

impl SessionManager {
    pub fn new(gateway: AccountGatewayBox) -> Self {
        Self { gateway }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        debug!(email = %credentials.email, "logging in");
        self.gateway.login(credentials).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<()> {
        debug!(email = %registration.email, "registering user");
        self.gateway.register(registration).await
    }

    pub async fn restaurants(&self) -> Result<Vec<Restaurant>> {
        self.gateway.list_restaurants().await
    }

    /// Tears the session down. The backend keeps no session state, so this is purely
    /// consuming the token on the caller's side.
    pub fn logout(&self, session: Session) {
        debug!(user_id = session.user.id, "logging out");
        drop(session);
    }
}
