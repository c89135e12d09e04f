//! Dashboard snapshot loading and the periodic refresh loop

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::api::types::{Dashboard, ShortlistItem};
use crate::api::ApiClient;
use crate::config::MAX_REFRESH_SECONDS;
use crate::error::Result;

/// Maximum unlocked shortlist entries shown on the dashboard
pub const DASHBOARD_SHORTLIST_LIMIT: usize = 8;

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub dashboard: Dashboard,
    pub shortlist: Vec<ShortlistItem>,
    /// Local time of the fetch
    pub fetched_at: chrono::DateTime<chrono::Local>,
}

impl DashboardSnapshot {
    /// Locked entries, in shortlist order
    pub fn locked(&self) -> Vec<&ShortlistItem> {
        self.shortlist.iter().filter(|s| s.locked).collect()
    }

    /// Unlocked entries, capped at [`DASHBOARD_SHORTLIST_LIMIT`]
    pub fn unlocked_preview(&self) -> Vec<&ShortlistItem> {
        self.shortlist
            .iter()
            .filter(|s| !s.locked)
            .take(DASHBOARD_SHORTLIST_LIMIT)
            .collect()
    }

    /// Replaces the dashboard part after a periodic refresh; the shortlist
    /// is kept as first loaded
    pub fn apply_refresh(&mut self, dashboard: Dashboard) {
        self.dashboard = dashboard;
        self.fetched_at = chrono::Local::now();
    }
}

/// Fetches the dashboard and the shortlist concurrently
pub async fn load(api: &ApiClient) -> Result<DashboardSnapshot> {
    let dashboard_api = api.dashboard();
    let universities_api = api.universities();
    let (dashboard, shortlist) =
        futures::try_join!(dashboard_api.get(), universities_api.shortlist())?;
    Ok(DashboardSnapshot {
        dashboard,
        shortlist,
        fetched_at: chrono::Local::now(),
    })
}

/// Shortest period [`auto_refresh`] will tick at
pub const MIN_REFRESH_PERIOD: Duration = Duration::from_millis(1);

/// Longest period [`auto_refresh`] will tick at (one day)
pub const MAX_REFRESH_PERIOD: Duration = Duration::from_secs(MAX_REFRESH_SECONDS);

/// Refetches `GET /dashboard` every `period` until `shutdown` completes.
///
/// The first refetch happens one period after the call. Only the dashboard
/// is refetched, not the shortlist. Each successful fetch is passed to
/// `on_update`; failures are logged and skipped, so the
/// caller keeps whatever it last rendered. Returns the number of successful
/// refreshes.
///
/// `period` is clamped to [`MIN_REFRESH_PERIOD`]..=[`MAX_REFRESH_PERIOD`].
/// `shutdown` is also raced against an in-flight fetch, so a hung backend
/// never delays the return.
///
/// The loop holds no lock and does not coordinate with other calls on the
/// same client.
pub async fn auto_refresh<S, F>(
    api: &ApiClient,
    period: Duration,
    shutdown: S,
    mut on_update: F,
) -> usize
where
    S: Future<Output = ()>,
    F: FnMut(Dashboard),
{
    let period = period.clamp(MIN_REFRESH_PERIOD, MAX_REFRESH_PERIOD);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut refreshed = 0;
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                let dashboard_api = api.dashboard();
                let result = tokio::select! {
                    _ = &mut shutdown => break,
                    result = dashboard_api.get() => result,
                };
                match result {
                    Ok(dashboard) => {
                        refreshed += 1;
                        on_update(dashboard);
                    }
                    Err(e) => tracing::debug!("Dashboard refresh failed: {}", e),
                }
            }
        }
    }

    tracing::debug!(refreshed, "Dashboard refresh stopped");
    refreshed
}
