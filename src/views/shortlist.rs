//! Shortlist view state: membership, locked split, and the unlock guard
//!
//! Unlocking a locked university changes what application guidance the
//! backend generates, so it takes two steps: [`ShortlistView::set_lock`]
//! records a pending warning and issues no call, then
//! [`ShortlistView::confirm_unlock`] performs it (or
//! [`ShortlistView::cancel_unlock`] drops it). Every successful mutation is
//! followed by a shortlist refetch.

use crate::api::types::{LockStatus, ShortlistCreate, ShortlistItem};
use crate::api::ApiClient;
use crate::error::Result;

use super::pagination::{paginate, Page};

/// An unlock waiting for explicit confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUnlock {
    pub id: String,
    pub name: String,
}

/// Result of a lock request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockOutcome {
    /// The backend applied the change
    Applied(LockStatus),
    /// Nothing was sent; confirm or cancel the pending unlock
    NeedsConfirmation(PendingUnlock),
}

/// Locally held copy of the shortlist
#[derive(Debug, Clone, Default)]
pub struct ShortlistView {
    items: Vec<ShortlistItem>,
    pending_unlock: Option<PendingUnlock>,
}

impl ShortlistView {
    /// Wraps an already-fetched list
    pub fn new(items: Vec<ShortlistItem>) -> Self {
        Self {
            items,
            pending_unlock: None,
        }
    }

    /// Fetches the shortlist
    pub async fn load(api: &ApiClient) -> Result<Self> {
        Ok(Self::new(api.universities().shortlist().await?))
    }

    /// Refetches the list. A failed refetch keeps the current items.
    pub async fn refresh(&mut self, api: &ApiClient) {
        match api.universities().shortlist().await {
            Ok(items) => self.items = items,
            Err(e) => tracing::warn!("Shortlist refresh failed: {}", e),
        }
    }

    pub fn items(&self) -> &[ShortlistItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ShortlistItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// `true` when an entry with the same name and country is saved
    pub fn contains(&self, name: &str, country: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.name == name && item.country == country)
    }

    pub fn locked(&self) -> Vec<&ShortlistItem> {
        self.items.iter().filter(|item| item.locked).collect()
    }

    pub fn unlocked(&self) -> Vec<&ShortlistItem> {
        self.items.iter().filter(|item| !item.locked).collect()
    }

    pub fn page(&self, page: usize, per_page: usize) -> Page<'_, ShortlistItem> {
        paginate(&self.items, page, per_page)
    }

    /// Saves a university, then refetches
    pub async fn add(&mut self, api: &ApiClient, entry: &ShortlistCreate) -> Result<ShortlistItem> {
        let item = api.universities().add_shortlist(entry).await?;
        self.refresh(api).await;
        Ok(item)
    }

    /// Removes a university, then refetches
    pub async fn remove(&mut self, api: &ApiClient, id: &str) -> Result<()> {
        api.universities().remove_shortlist(id).await?;
        if self.pending_unlock.as_ref().map(|p| p.id.as_str()) == Some(id) {
            self.pending_unlock = None;
        }
        self.refresh(api).await;
        Ok(())
    }

    /// Requests a lock change.
    ///
    /// Unlocking an entry that is currently locked does not call the backend;
    /// it returns [`LockOutcome::NeedsConfirmation`] instead. Any other
    /// request clears a pending unlock and goes straight through.
    pub async fn set_lock(&mut self, api: &ApiClient, id: &str, lock: bool) -> Result<LockOutcome> {
        if !lock {
            if let Some(item) = self.get(id).filter(|item| item.locked) {
                let pending = PendingUnlock {
                    id: item.id.clone(),
                    name: item.name.clone(),
                };
                tracing::debug!(id = %id, "Unlock needs confirmation");
                self.pending_unlock = Some(pending.clone());
                return Ok(LockOutcome::NeedsConfirmation(pending));
            }
        }

        self.pending_unlock = None;
        let status = api.universities().set_lock(id, lock).await?;
        self.refresh(api).await;
        Ok(LockOutcome::Applied(status))
    }

    pub fn pending_unlock(&self) -> Option<&PendingUnlock> {
        self.pending_unlock.as_ref()
    }

    /// Performs the pending unlock. Returns `None` if nothing was pending.
    pub async fn confirm_unlock(&mut self, api: &ApiClient) -> Result<Option<LockStatus>> {
        let Some(pending) = self.pending_unlock.take() else {
            return Ok(None);
        };
        let status = api.universities().set_lock(&pending.id, false).await?;
        self.refresh(api).await;
        Ok(Some(status))
    }

    /// Drops the pending unlock without any network call
    pub fn cancel_unlock(&mut self) -> Option<PendingUnlock> {
        self.pending_unlock.take()
    }
}
