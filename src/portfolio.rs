// src/portfolio.rs
//! One fetch per page view: a `Snapshot` is loaded once and every
//! derivation is a pure function over the borrowed record set, so the
//! four sections never trigger redundant upstream requests.

use chrono::{DateTime, Utc};
use metrics::gauge;
use serde::Serialize;

use crate::classify;
use crate::content::{
    generate_experiences, generate_insights, generate_timeline, ExperienceEntry, InsightArticle,
    TimelineEvent,
};
use crate::fetch::{self, FetchError, RepoRecord, RepoSource};
use crate::stats::{stats_summary, StatsSummary};

pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Featured selection plus summary statistics for the repositories
/// section.
#[derive(Debug, Clone, Serialize)]
pub struct RepoOverview {
    pub featured: Vec<RepoRecord>,
    pub stats: StatsSummary,
}

/// An account's fetched repository set, frozen at `fetched_at`. All
/// derivations use the snapshot clock, so repeated calls over one
/// snapshot are byte-identical.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub account: String,
    pub repos: Vec<RepoRecord>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub async fn load(source: &(dyn RepoSource + Sync), account: &str) -> Result<Self, FetchError> {
        fetch::ensure_metrics_described();
        let repos = source.fetch_repos(account).await?;
        let fetched_at = Utc::now();
        gauge!("fetch_last_run_ts").set(fetched_at.timestamp() as f64);
        tracing::info!(account, count = repos.len(), source = source.name(), "snapshot loaded");
        Ok(Self::from_repos(account, repos, fetched_at))
    }

    /// Build a snapshot from pre-fetched records with an explicit clock.
    pub fn from_repos(account: &str, repos: Vec<RepoRecord>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            account: account.to_string(),
            repos,
            fetched_at,
        }
    }

    /// Blockchain-tagged subset, in fetch order.
    pub fn blockchain(&self) -> Vec<&RepoRecord> {
        classify::blockchain_repos(&self.repos)
    }

    pub fn experiences(&self) -> Vec<ExperienceEntry> {
        generate_experiences(&self.blockchain(), self.fetched_at)
    }

    pub fn repositories(&self, featured_limit: usize) -> RepoOverview {
        RepoOverview {
            featured: classify::featured_repos(&self.repos, featured_limit)
                .into_iter()
                .cloned()
                .collect(),
            stats: stats_summary(&self.repos),
        }
    }

    pub fn timeline(&self) -> Vec<TimelineEvent> {
        generate_timeline(&self.blockchain(), self.fetched_at)
    }

    pub fn insights(&self) -> Vec<InsightArticle> {
        generate_insights(&self.blockchain(), self.fetched_at)
    }
}
