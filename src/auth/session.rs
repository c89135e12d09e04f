//! Session manager: who is logged in
//!
//! [`SessionManager`] is the single source of truth for the current user. It
//! is constructed explicitly and handed to every view (usually behind an
//! `Arc`), rather than living in a global.
//!
//! # State machine
//!
//! ```text
//!              no token / identity check fails
//!   Resolving ─────────────────────────────────▶ Anonymous
//!       │                                        │   ▲
//!       │ token + identity check ok    login /   │   │ logout
//!       ▼                              signup    ▼   │
//!   Authenticated ◀──────────────────────────────────┘
//! ```
//!
//! Views must treat `Resolving` as "show a neutral loading state, do not
//! redirect" and `Anonymous` as "redirect to login"; see [`SessionManager::gate`].
//!
//! Logout is purely client-local: the token is forgotten but not revoked
//! server-side.

use std::sync::{Arc, PoisonError, RwLock};

use crate::api::types::User;
use crate::api::ApiClient;
use crate::auth::token_store::TokenStore;
use crate::error::{GradpathError, Result};

/// Where a session transition sends the user next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Public landing page
    Landing,
    Login,
    Signup,
    /// Existing users land here after login
    Dashboard,
    /// New users land here after signup
    Onboarding,
    Profile,
    Universities,
    Counsellor,
    Applications,
}

impl Route {
    /// Path-style name, e.g. `/dashboard`
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::Onboarding => "/onboarding",
            Route::Profile => "/profile",
            Route::Universities => "/universities",
            Route::Counsellor => "/counsellor",
            Route::Applications => "/applications",
        }
    }
}

/// Receives navigation side effects from session transitions
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that ignores every route
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _route: Route) {}
}

/// Authentication state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Startup; the stored token has not been checked yet
    Resolving,
    Anonymous,
    Authenticated(User),
}

/// What a view should do given the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Still resolving; render a loading state and wait
    Pending,
    /// Not logged in; go to the given route
    Redirect(Route),
    /// Logged in as this user
    Granted(User),
}

/// Owns the current user and keeps it in step with the token store.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use gradpath::api::ApiClient;
/// use gradpath::auth::session::{Gate, NoopNavigator, SessionManager};
/// use gradpath::auth::token_store::MemoryTokenStore;
///
/// # async fn example() -> anyhow::Result<()> {
/// let api = ApiClient::new("http://localhost:8000", Arc::new(MemoryTokenStore::default()))?;
/// let session = SessionManager::new(api, Arc::new(NoopNavigator));
/// session.resolve().await;
/// if let Gate::Granted(user) = session.gate() {
///     println!("hello {}", user.full_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SessionManager {
    api: ApiClient,
    navigator: Arc<dyn Navigator>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    /// Creates a manager in the `Resolving` state. Call [`Self::resolve`]
    /// before gating any view.
    pub fn new(api: ApiClient, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            navigator,
            state: RwLock::new(SessionState::Resolving),
        }
    }

    /// The API client this session authenticates
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn tokens(&self) -> &Arc<dyn TokenStore> {
        self.api.token_store()
    }

    fn set_state(&self, next: SessionState) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = next;
    }

    /// Current state snapshot
    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `true` while the stored token has not been checked yet
    pub fn is_loading(&self) -> bool {
        matches!(self.state(), SessionState::Resolving)
    }

    /// The logged-in user, if any
    pub fn user(&self) -> Option<User> {
        match self.state() {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Overwrites the user record without a round trip.
    ///
    /// `None` marks the session anonymous. The stored token is not touched.
    pub fn set_user(&self, user: Option<User>) {
        self.set_state(match user {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Anonymous,
        });
    }

    /// Rehydrates the session from durable storage.
    ///
    /// The identity check (`GET /auth/me`) is issued if and only if a token
    /// is stored. Any failure of that check drops the token. An unreadable
    /// token store is treated as no token.
    pub async fn resolve(&self) -> SessionState {
        let token = match self.tokens().load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Could not read stored token: {}", e);
                None
            }
        };

        if token.is_none() {
            tracing::debug!("No stored token; session is anonymous");
            self.set_state(SessionState::Anonymous);
            return SessionState::Anonymous;
        }

        match self.api.auth().me().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Session rehydrated");
                let next = SessionState::Authenticated(user);
                self.set_state(next.clone());
                next
            }
            Err(e) => {
                tracing::info!("Stored token rejected, dropping it: {}", e);
                if let Err(clear_err) = self.tokens().clear() {
                    tracing::warn!("Failed to clear rejected token: {}", clear_err);
                }
                self.set_state(SessionState::Anonymous);
                SessionState::Anonymous
            }
        }
    }

    /// Logs in, stores the token and navigates to the dashboard.
    ///
    /// # Errors
    ///
    /// The backend's error propagates unchanged and the state is untouched.
    /// A token store write failure is also returned.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let response = self.api.auth().login(email, password).await?;
        self.tokens().save(&response.access_token)?;
        tracing::info!(user_id = %response.user.id, "Logged in");
        self.set_state(SessionState::Authenticated(response.user.clone()));
        self.navigator.navigate(Route::Dashboard);
        Ok(response.user)
    }

    /// Creates an account, stores the token and navigates to onboarding.
    ///
    /// # Errors
    ///
    /// Same as [`Self::login`].
    pub async fn signup(&self, full_name: &str, email: &str, password: &str) -> Result<User> {
        let response = self.api.auth().signup(full_name, email, password).await?;
        self.tokens().save(&response.access_token)?;
        tracing::info!(user_id = %response.user.id, "Signed up");
        self.set_state(SessionState::Authenticated(response.user.clone()));
        self.navigator.navigate(Route::Onboarding);
        Ok(response.user)
    }

    /// Forgets the token and user, then navigates to the landing page.
    ///
    /// No backend call is made.
    pub fn logout(&self) {
        if let Err(e) = self.tokens().clear() {
            tracing::warn!("Failed to clear stored token: {}", e);
        }
        self.set_state(SessionState::Anonymous);
        tracing::info!("Logged out");
        self.navigator.navigate(Route::Landing);
    }

    /// Access decision for a view that needs a logged-in user
    pub fn gate(&self) -> Gate {
        match self.state() {
            SessionState::Resolving => Gate::Pending,
            SessionState::Anonymous => Gate::Redirect(Route::Login),
            SessionState::Authenticated(user) => Gate::Granted(user),
        }
    }

    /// Returns the user or a session error naming the login route
    ///
    /// # Errors
    ///
    /// [`GradpathError::Session`] when the session is not authenticated.
    pub fn require_user(&self) -> Result<User> {
        match self.gate() {
            Gate::Granted(user) => Ok(user),
            Gate::Pending => {
                Err(GradpathError::Session("session is still resolving".to_string()).into())
            }
            Gate::Redirect(route) => Err(GradpathError::Session(format!(
                "not logged in; go to {}",
                route.path()
            ))
            .into()),
        }
    }
}
