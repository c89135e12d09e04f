//! To-do list view state with optimistic local patches
//!
//! Policy: after a successful `PATCH /todos/{id}` the same patch is applied
//! to the local list instead of refetching. The next full fetch
//! ([`TodoBoard::reconcile`]) replaces the local list wholesale, so any
//! divergence from the server lasts at most until then. A failed call
//! leaves the local list untouched.

use crate::api::types::{Todo, TodoCreate, TodoPatch};
use crate::api::ApiClient;
use crate::error::{GradpathError, Result};

#[derive(Debug, Clone, Default)]
pub struct TodoBoard {
    todos: Vec<Todo>,
}

impl TodoBoard {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// Fetches the full list
    pub async fn load(api: &ApiClient) -> Result<Self> {
        Ok(Self::new(api.todos().list().await?))
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Todos tied to one shortlist entry
    pub fn for_shortlist(&self, shortlist_id: &str) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|t| t.shortlist_id.as_deref() == Some(shortlist_id))
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Applies `patch` to the local copy of `id`. Returns `false` if the
    /// todo is not in the list.
    pub fn apply_local(&mut self, id: &str, patch: &TodoPatch) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                patch.apply_to(todo);
                true
            }
            None => false,
        }
    }

    /// Replaces the local list with a fresh fetch
    pub fn reconcile(&mut self, fresh: Vec<Todo>) {
        self.todos = fresh;
    }

    /// Sends `patch`, then applies it locally on success
    pub async fn update(&mut self, api: &ApiClient, id: &str, patch: &TodoPatch) -> Result<()> {
        api.todos().update(id, patch).await?;
        if !self.apply_local(id, patch) {
            tracing::debug!(id = %id, "Updated todo not in local list");
        }
        Ok(())
    }

    /// Sets completion; see [`Self::update`]
    pub async fn set_completed(&mut self, api: &ApiClient, id: &str, completed: bool) -> Result<()> {
        self.update(api, id, &TodoPatch::completed(completed)).await
    }

    /// Flips completion of a todo already in the list and returns the new value
    ///
    /// # Errors
    ///
    /// [`GradpathError::Session`] if `id` is not in the local list, or the
    /// backend's error.
    pub async fn toggle(&mut self, api: &ApiClient, id: &str) -> Result<bool> {
        let completed = !self
            .get(id)
            .ok_or_else(|| GradpathError::Session(format!("unknown todo {}", id)))?
            .completed;
        self.set_completed(api, id, completed).await?;
        Ok(completed)
    }

    /// Creates a todo and appends the server's copy
    pub async fn create(&mut self, api: &ApiClient, todo: &TodoCreate) -> Result<Todo> {
        let created = api.todos().create(todo).await?;
        self.todos.push(created.clone());
        Ok(created)
    }

    /// Deletes a todo and drops it locally
    pub async fn delete(&mut self, api: &ApiClient, id: &str) -> Result<()> {
        api.todos().delete(id).await?;
        self.todos.retain(|t| t.id != id);
        Ok(())
    }
}
