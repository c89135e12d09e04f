//! View-level state built on top of the API client
//!
//! Each module holds the local state one screen needs and the small amount
//! of client-side policy around it (pagination, display caps, optimistic
//! patches, confirmation steps). Rendering lives in `commands`.

pub mod chat;
pub mod dashboard;
pub mod guidance;
pub mod markdown;
pub mod pagination;
pub mod search;
pub mod shortlist;
pub mod todos;

pub use chat::{ChatSession, Suggestion};
pub use dashboard::DashboardSnapshot;
pub use guidance::GuidanceView;
pub use pagination::{paginate, Page};
pub use shortlist::{LockOutcome, PendingUnlock, ShortlistView};
pub use todos::TodoBoard;
