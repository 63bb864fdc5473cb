//! Mock identity helpers for integration tests.
//!
//! The api service trusts `x-shipway-user-id` + `x-shipway-user-role`
//! headers injected by the auth edge. In tests, `MockIdentity` produces
//! these headers directly so no real edge is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use shipway_domain::user::UserRole;

/// Configurable identity injected into test requests.
pub struct MockIdentity {
    pub user_id: Uuid,
    pub user_role: UserRole,
}

impl MockIdentity {
    pub fn new(user_id: Uuid, user_role: UserRole) -> Self {
        Self { user_id, user_role }
    }

    /// A fresh basic user.
    pub fn basic() -> Self {
        Self::new(Uuid::new_v4(), UserRole::Basic)
    }

    /// A fresh admin user.
    pub fn admin() -> Self {
        Self::new(Uuid::new_v4(), UserRole::Admin)
    }

    /// Return headers as if the auth edge injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("x-shipway-user-id"),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        );
        map.insert(
            HeaderName::from_static("x-shipway-user-role"),
            HeaderValue::from_str(&self.user_role.as_u8().to_string()).unwrap(),
        );
        map
    }
}

/// Headers for a machine caller holding the service api key.
pub fn api_key_headers(api_key: &str) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(
        HeaderName::from_static("x-shipway-api-key"),
        HeaderValue::from_str(api_key).unwrap(),
    );
    map
}
