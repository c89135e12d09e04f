/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint. Each
submodule is one screen of the client:

- `auth`          - signup, login, logout, whoami
- `profile`       - onboarding profile
- `dashboard`     - dashboard snapshot and watch mode
- `universities`  - search, shortlist, lock, recommendations
- `todos`         - to-do list
- `chat`          - AI counsellor, one-shot or interactive
- `applications`  - application guidance

Handlers are small; the state and policy live in `views`.
*/

use std::sync::Arc;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde::Serialize;

use crate::api::types::User;
use crate::api::ApiClient;
use crate::auth::session::{Navigator, Route, SessionManager};
use crate::auth::token_store;
use crate::config::Config;
use crate::error::{GradpathError, Result};

pub mod applications;
pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod profile;
pub mod todos;
pub mod universities;

/// Shared state for one CLI invocation
pub struct Context {
    pub config: Config,
    pub session: Arc<SessionManager>,
    /// Print JSON instead of tables
    pub json: bool,
}

impl Context {
    /// Builds the token store, client and session from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the token store or HTTP client cannot be created
    pub fn new(config: Config, json: bool) -> Result<Self> {
        let tokens = token_store::from_config(&config.session)?;
        let api = ApiClient::from_config(&config, tokens)?;
        let navigator = Arc::new(TerminalNavigator { quiet: json });
        let session = Arc::new(SessionManager::new(api, navigator));
        Ok(Self::with_session(config, session, json))
    }

    /// Wraps an existing session
    pub fn with_session(config: Config, session: Arc<SessionManager>, json: bool) -> Self {
        Self {
            config,
            session,
            json,
        }
    }

    pub fn api(&self) -> &ApiClient {
        self.session.api()
    }

    /// Resolves the stored session and returns the user, or fails with a
    /// hint to log in.
    pub async fn authenticated(&self) -> Result<User> {
        self.session.resolve().await;
        match self.session.require_user() {
            Ok(user) => Ok(user),
            Err(e) => {
                eprintln!(
                    "{} Run {} first.",
                    "Not logged in.".yellow(),
                    "gradpath login".cyan()
                );
                Err(e)
            }
        }
    }
}

/// Prints where a session transition leads as the command to run next
pub struct TerminalNavigator {
    /// Suppress hints (JSON output mode)
    pub quiet: bool,
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = route.path(), "Navigate");
        if self.quiet {
            return;
        }
        if let Some(command) = command_for(route) {
            eprintln!("Next: {}", command.cyan());
        }
    }
}

/// CLI command that shows `route`, if there is one
pub fn command_for(route: Route) -> Option<&'static str> {
    match route {
        Route::Landing => None,
        Route::Login => Some("gradpath login"),
        Route::Signup => Some("gradpath signup"),
        Route::Dashboard => Some("gradpath dashboard"),
        Route::Onboarding => Some("gradpath profile update --help"),
        Route::Profile => Some("gradpath profile show"),
        Route::Universities => Some("gradpath universities shortlist"),
        Route::Counsellor => Some("gradpath chat"),
        Route::Applications => Some("gradpath applications"),
    }
}

/// Prints `value` as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(GradpathError::Serialization)?;
    println!("{}", json);
    Ok(())
}

/// Reads one line from the terminal
///
/// # Errors
///
/// Returns a session error if input is interrupted or closed
pub(crate) fn prompt_line(label: &str) -> Result<String> {
    let mut rl = DefaultEditor::new()?;
    match rl.readline(label) {
        Ok(line) => Ok(line.trim().to_string()),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            Err(GradpathError::Session("input cancelled".to_string()).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Returns the value if given, otherwise prompts for it
pub(crate) fn value_or_prompt(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => prompt_line(label),
    }
}

/// Asks a yes/no question; anything but `y`/`yes` is no
pub(crate) fn confirm(question: &str) -> Result<bool> {
    let mut rl = DefaultEditor::new()?;
    match rl.readline(&format!("{} [y/N] ", question)) {
        Ok(answer) => Ok(is_yes(&answer)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// `-` for missing values in tables
pub(crate) fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }

    #[test]
    fn test_command_for_routes() {
        assert_eq!(command_for(Route::Dashboard), Some("gradpath dashboard"));
        assert_eq!(command_for(Route::Landing), None);
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("₹8,50,000")), "₹8,50,000");
    }
}
