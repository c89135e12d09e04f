//! Application guidance for locked universities
//!
//! The backend refuses guidance until at least one university is locked;
//! [`GuidanceView::load`] surfaces that refusal as its message.

use crate::api::types::{ApplicationGuidance, LockedUniversity, Todo, TodoPatch};
use crate::api::ApiClient;
use crate::error::{api_error, Result};

/// Shown when the backend refuses guidance without a message of its own
pub const LOCK_FIRST_HINT: &str = "Lock at least one university to view application guidance.";

/// Todos in `todos` tied to `shortlist_id`
pub fn todos_for_university<'a>(todos: &'a [Todo], shortlist_id: &str) -> Vec<&'a Todo> {
    todos
        .iter()
        .filter(|t| t.shortlist_id.as_deref() == Some(shortlist_id))
        .collect()
}

#[derive(Debug, Clone)]
pub struct GuidanceView {
    guidance: ApplicationGuidance,
    selected: Option<String>,
}

impl GuidanceView {
    /// Wraps fetched guidance and selects the first locked university
    pub fn new(guidance: ApplicationGuidance) -> Self {
        let selected = guidance.locked_universities.first().map(|u| u.id.clone());
        Self { guidance, selected }
    }

    /// Fetches guidance.
    ///
    /// # Errors
    ///
    /// The backend's error. Its message is empty only if the backend sent
    /// an empty body with an unknown status; callers can fall back to
    /// [`LOCK_FIRST_HINT`] via [`message_for`].
    pub async fn load(api: &ApiClient) -> Result<Self> {
        Ok(Self::new(api.applications().get().await?))
    }

    pub fn guidance(&self) -> &ApplicationGuidance {
        &self.guidance
    }

    pub fn locked_universities(&self) -> &[LockedUniversity] {
        &self.guidance.locked_universities
    }

    pub fn selected(&self) -> Option<&LockedUniversity> {
        let id = self.selected.as_deref()?;
        self.guidance.locked_universities.iter().find(|u| u.id == id)
    }

    /// Selects a locked university. Returns `false` for an unknown id.
    pub fn select(&mut self, id: &str) -> bool {
        if self.guidance.locked_universities.iter().any(|u| u.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Todos for the selected university; empty when nothing is selected
    pub fn selected_todos(&self) -> Vec<&Todo> {
        match self.selected.as_deref() {
            Some(id) => todos_for_university(&self.guidance.todos, id),
            None => Vec::new(),
        }
    }

    /// Sets completion and patches the local copy on success
    pub async fn set_completed(&mut self, api: &ApiClient, id: &str, completed: bool) -> Result<()> {
        let patch = TodoPatch::completed(completed);
        api.todos().update(id, &patch).await?;
        if let Some(todo) = self.guidance.todos.iter_mut().find(|t| t.id == id) {
            patch.apply_to(todo);
        }
        Ok(())
    }

    /// Removes a university from the shortlist and refetches guidance.
    ///
    /// If the removed university was selected, the selection moves to the
    /// first remaining locked university.
    pub async fn remove(&mut self, api: &ApiClient, shortlist_id: &str) -> Result<()> {
        api.universities().remove_shortlist(shortlist_id).await?;
        let refreshed = api.applications().get().await?;
        let keep = self
            .selected
            .as_deref()
            .filter(|id| *id != shortlist_id)
            .map(str::to_string);
        *self = Self::new(refreshed);
        if let Some(id) = keep {
            self.select(&id);
        }
        Ok(())
    }
}

/// Message to show for a failed guidance fetch
pub fn message_for(err: &anyhow::Error) -> String {
    match api_error(err) {
        Some(e) if !e.message.is_empty() => e.message.clone(),
        Some(_) => LOCK_FIRST_HINT.to_string(),
        None => err.to_string(),
    }
}
