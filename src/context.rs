//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::session::Session;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Mirror of the session flag - read
    pub authenticated: ReadSignal<bool>,
    session: StoredValue<Session, LocalStorage>,
    api: StoredValue<ApiClient, LocalStorage>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    /// Wrap the session and client, keeping `authenticated` in step with the session
    pub fn new(config: AppConfig, api: ApiClient) -> Self {
        let session = api.session().clone();
        let (authenticated, set_authenticated) = signal(session.is_authenticated());
        let subscription = session.subscribe(move |value| {
            set_authenticated.try_set(value);
        });

        let session = StoredValue::new_local(session);
        on_cleanup(move || {
            session.try_with_value(|s| s.unsubscribe(subscription));
        });

        Self {
            authenticated,
            session,
            api: StoredValue::new_local(api),
            config: StoredValue::new(config),
        }
    }

    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Persist the token and mark the session authenticated
    pub fn login(&self, token: &str) {
        self.session.with_value(|s| s.login(token));
    }

    pub fn logout(&self) {
        self.session.with_value(|s| s.logout());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::client_for;
    use crate::config::TOKEN_STORAGE_KEY;

    #[test]
    fn test_context_exposes_config_and_tracks_session() {
        let ctx = AppContext::new(
            AppConfig::with_base_url("http://api.test/"),
            client_for("http://api.test", None),
        );
        assert_eq!(ctx.config().api_base_url, "http://api.test");
        assert_eq!(ctx.config().token_key, TOKEN_STORAGE_KEY);
        assert!(!ctx.authenticated.get_untracked());

        ctx.login("tok");
        assert!(ctx.authenticated.get_untracked());
        assert_eq!(ctx.session().token().as_deref(), Some("tok"));
        assert_eq!(ctx.api().session().token().as_deref(), Some("tok"));

        ctx.logout();
        assert!(!ctx.authenticated.get_untracked());
        assert_eq!(ctx.session().token(), None);
    }
}
