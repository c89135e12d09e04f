//! Counsellor conversation state and suggestion extraction

use serde::{Deserialize, Serialize};

use crate::api::types::{ChatMessage, ShortlistCreate};
use crate::api::ApiClient;
use crate::error::{GradpathError, Result};

/// Action type the counsellor uses to propose a university
pub const SHORTLIST_ADD: &str = "shortlist_add";

/// A university the counsellor proposed on one turn
///
/// Every field except `id` comes from the action object as-is; the
/// counsellor does not always fill them all in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// `<message id>-<index among this message's suggestions>`
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub web_page: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cost_level: Option<String>,
    #[serde(default)]
    pub acceptance_chance: Option<String>,
    #[serde(default)]
    pub fit_reason: Option<String>,
    #[serde(default)]
    pub risks: Option<String>,
}

impl Suggestion {
    /// Builds a shortlist entry from this suggestion.
    ///
    /// # Errors
    ///
    /// [`GradpathError::Session`] when the counsellor left out the name or
    /// the country, which the shortlist requires.
    pub fn to_shortlist_create(&self) -> Result<ShortlistCreate> {
        let (Some(name), Some(country)) = (&self.name, &self.country) else {
            return Err(GradpathError::Session(format!(
                "suggestion {} has no name or country",
                self.id
            ))
            .into());
        };
        Ok(ShortlistCreate {
            name: name.clone(),
            country: country.clone(),
            domain: self.domain.clone(),
            web_page: self.web_page.clone(),
            category: self.category.clone(),
            cost_level: self.cost_level.clone(),
            acceptance_chance: self.acceptance_chance.clone(),
            fit_reason: self.fit_reason.clone(),
            risks: self.risks.clone(),
        })
    }
}

/// Pulls the `shortlist_add` actions out of one message.
///
/// Actions of other types, and actions that are not JSON objects, are
/// skipped. Suggestion ids are numbered after that filtering.
pub fn suggestions(message: &ChatMessage) -> Vec<Suggestion> {
    let Some(actions) = &message.actions else {
        return Vec::new();
    };

    actions
        .iter()
        .filter(|a| a.get("type").and_then(|t| t.as_str()) == Some(SHORTLIST_ADD))
        .filter_map(|a| match serde_json::from_value::<Suggestion>(a.clone()) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::debug!("Skipping malformed suggestion: {}", e);
                None
            }
        })
        .enumerate()
        .map(|(idx, mut s)| {
            s.id = format!("{}-{}", message.id, idx);
            s
        })
        .collect()
}

/// Local copy of the conversation
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
}

impl ChatSession {
    /// Fetches the history. A failed fetch starts from an empty history.
    pub async fn load(api: &ApiClient) -> Self {
        let history = match api.counsellor().history().await {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!("Could not load chat history: {}", e);
                Vec::new()
            }
        };
        Self { history }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Latest assistant message, if any
    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.history.iter().rev().find(|m| m.role == "assistant")
    }

    /// Every suggestion across the whole history, oldest first
    pub fn all_suggestions(&self) -> Vec<Suggestion> {
        self.history.iter().flat_map(suggestions).collect()
    }

    /// Sends `input` and refetches the history.
    ///
    /// The input is trimmed first; blank input sends nothing and returns
    /// `Ok(false)`. On a send failure the local history is unchanged and
    /// the backend's error is returned for display.
    pub async fn send(&mut self, api: &ApiClient, input: &str) -> Result<bool> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(false);
        }

        api.counsellor().chat(text).await?;
        self.history = api.counsellor().history().await?;
        Ok(true)
    }
}
