use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::api::AuthApi;
use crate::session::SessionContext;
use crate::types::{
    AuthResponse, LoginRequest, RegisterRequest, Result, Role, Session, UserProfile,
};

/// Authentication/session store.
///
/// Owns the in-memory mirror of the persisted session. Mutations write
/// through to the durable [`SessionContext`] so the two never diverge except
/// after an out-of-band 401 clear, which [`AuthStore::sync_from_storage`]
/// reconciles.
pub struct AuthStore {
    api: AuthApi,
    session: Arc<SessionContext>,
    state: RwLock<AuthState>,
}

#[derive(Debug, Default)]
struct AuthState {
    session: Session,
    profile_loaded: bool,
    loading: bool,
    error: Option<String>,
}

impl AuthStore {
    /// Build the store, seeding in-memory state from durable storage the way
    /// the session survives a page reload.
    pub fn new(api: AuthApi, session: Arc<SessionContext>) -> Self {
        let initial = session.load();
        Self {
            api,
            session,
            state: RwLock::new(AuthState {
                session: initial,
                ..AuthState::default()
            }),
        }
    }

    // ----- actions -----

    pub async fn login(&self, credentials: LoginRequest) -> Result<AuthResponse> {
        self.begin();
        let result = self.api.login(&credentials).await;
        if let Ok(auth) = &result {
            self.set_auth(Session {
                token: Some(auth.token.clone()),
                username: auth.username.clone(),
                role: Some(auth.role),
                email: auth.email.clone().unwrap_or_default(),
            });
        }
        self.complete(result)
    }

    /// Registration does not create a session; callers log in afterwards.
    pub async fn register(&self, user_data: RegisterRequest) -> Result<Value> {
        self.begin();
        let result = self.api.register(&user_data).await;
        self.complete(result)
    }

    pub async fn fetch_profile(&self) -> Result<UserProfile> {
        self.begin();
        let result = self.api.get_profile().await;
        if let Ok(profile) = &result {
            self.update_profile(profile.clone());
        }
        self.complete(result)
    }

    /// Guard variant of [`fetch_profile`](Self::fetch_profile): bypasses the
    /// loading/error flags and propagates failure to the caller.
    pub async fn load_user_profile(&self) -> Result<UserProfile> {
        let profile = self.api.get_profile().await?;
        self.update_profile(profile.clone());
        Ok(profile)
    }

    /// Merge profile fields into the session, keeping existing values for
    /// anything the backend omitted. Fields are backfilled, never unset.
    pub fn update_profile(&self, profile: UserProfile) {
        let mut state = self.state.write();
        if let Some(username) = profile.username {
            state.session.username = username;
        }
        if let Some(email) = profile.email {
            state.session.email = email;
        }
        if let Some(role) = profile.role {
            state.session.role = Some(role);
        }
        state.profile_loaded = true;
        self.session.persist(&state.session);
    }

    /// Write all four session fields to state and durable storage.
    pub fn set_auth(&self, session: Session) {
        let mut state = self.state.write();
        state.session = session;
        state.profile_loaded = true;
        self.session.persist(&state.session);
    }

    /// Destroy the session wholesale, in memory and in storage.
    pub fn clear_auth(&self) {
        let mut state = self.state.write();
        state.session = Session::default();
        state.profile_loaded = false;
        self.session.clear();
    }

    pub fn logout(&self) {
        self.clear_auth();
    }

    /// Re-read the persisted fields, picking up out-of-band changes such as
    /// the transport layer's 401 clear.
    pub fn sync_from_storage(&self) {
        let mut state = self.state.write();
        state.session = self.session.load();
        if !state.session.is_logged_in() {
            state.profile_loaded = false;
        }
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    // ----- derived views -----

    pub fn is_logged_in(&self) -> bool {
        self.state.read().session.is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().session.role == Some(Role::Admin)
    }

    pub fn is_manager(&self) -> bool {
        matches!(
            self.state.read().session.role,
            Some(Role::Manager) | Some(Role::Admin)
        )
    }

    pub fn user_role(&self) -> Option<Role> {
        self.state.read().session.role
    }

    pub fn username(&self) -> String {
        self.state.read().session.username.clone()
    }

    pub fn email(&self) -> String {
        self.state.read().session.email.clone()
    }

    pub fn current_session(&self) -> Session {
        self.state.read().session.clone()
    }

    pub fn profile_loaded(&self) -> bool {
        self.state.read().profile_loaded
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    // ----- uniform action plumbing -----

    fn begin(&self) {
        let mut state = self.state.write();
        state.loading = true;
        state.error = None;
    }

    fn complete<T>(&self, result: Result<T>) -> Result<T> {
        let mut state = self.state.write();
        if let Err(e) = &result {
            state.error = Some(e.to_string());
        }
        state.loading = false;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpClient;
    use crate::session::MemorySessionStore;
    use crate::utils::ClientConfig;

    fn store() -> AuthStore {
        let session = Arc::new(SessionContext::new(Box::new(MemorySessionStore::default())));
        let http = HttpClient::new(
            &ClientConfig::new("http://localhost:8080/api"),
            session.clone(),
        )
        .unwrap();
        AuthStore::new(AuthApi::new(http), session)
    }

    fn admin_session() -> Session {
        Session {
            token: Some("t1".to_string()),
            username: "u".to_string(),
            role: Some(Role::Admin),
            email: "e".to_string(),
        }
    }

    #[test]
    fn test_set_auth_derived_views() {
        let store = store();
        store.set_auth(admin_session());

        assert!(store.is_logged_in());
        assert!(store.is_admin());
        assert!(store.is_manager());
        assert_eq!(store.user_role(), Some(Role::Admin));
    }

    #[test]
    fn test_manager_is_not_admin() {
        let store = store();
        store.set_auth(Session {
            role: Some(Role::Manager),
            ..admin_session()
        });

        assert!(store.is_manager());
        assert!(!store.is_admin());
    }

    #[test]
    fn test_clear_auth_removes_everything() {
        let store = store();
        store.set_auth(admin_session());
        store.clear_auth();

        assert!(!store.is_logged_in());
        assert!(!store.profile_loaded());
        let persisted = store.session.load();
        assert!(persisted.token.is_none());
        assert!(persisted.username.is_empty());
        assert!(persisted.role.is_none());
        assert!(persisted.email.is_empty());
    }

    #[test]
    fn test_update_profile_keeps_omitted_fields() {
        let store = store();
        store.set_auth(admin_session());

        store.update_profile(UserProfile {
            username: None,
            email: Some("new@example.com".to_string()),
            role: None,
        });

        let session = store.current_session();
        assert_eq!(session.username, "u");
        assert_eq!(session.email, "new@example.com");
        assert_eq!(session.role, Some(Role::Admin));
    }

    #[test]
    fn test_sync_from_storage_after_external_clear() {
        let store = store();
        store.set_auth(admin_session());

        // Simulates the transport layer's 401 clear.
        store.session.clear();
        assert!(store.is_logged_in());

        store.sync_from_storage();
        assert!(!store.is_logged_in());
        assert!(!store.profile_loaded());
    }

    #[test]
    fn test_clear_error_idempotent() {
        let store = store();
        assert!(store.error().is_none());
        store.clear_error();
        assert!(store.error().is_none());
    }
}
