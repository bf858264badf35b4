// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod classify;
pub mod config;
pub mod content;
pub mod fetch;
pub mod portfolio;
pub mod stats;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::fetch::{FetchError, FixtureSource, GithubClient, RepoRecord, RepoSource};
pub use crate::portfolio::{RepoOverview, Snapshot};
pub use crate::stats::{stats_summary, StatsSummary};
