// src/fetch/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Normalized repository record. The fetcher owns raw-to-normalized
/// conversion; everything downstream treats this as immutable input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoRecord {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub watchers: u32,
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_private: bool,
    pub is_fork: bool,
    pub size_kb: u64,
}

impl RepoRecord {
    /// Lower-cased "name description" haystack used by the rule tables.
    pub fn name_desc(&self) -> String {
        let mut s = self.name.to_lowercase();
        if let Some(d) = &self.description {
            s.push(' ');
            s.push_str(&d.to_lowercase());
        }
        s
    }

    /// Lower-cased "name description topics" haystack used by the
    /// blockchain classifier.
    pub fn search_text(&self) -> String {
        let mut s = self.name_desc();
        for t in &self.topics {
            s.push(' ');
            s.push_str(&t.to_lowercase());
        }
        s
    }

    pub fn days_since_update(&self, now: DateTime<Utc>) -> i64 {
        (now - self.updated_at).num_days()
    }
}

/// Fetch failure taxonomy. An empty repository list is `Ok(vec![])`,
/// a valid state, never an error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream returned status {status}")]
    RemoteUnavailable { status: u16 },
    #[error("transport failure: {0}")]
    Network(String),
}

#[async_trait::async_trait]
pub trait RepoSource {
    /// One request per invocation; no retries, no backoff.
    async fn fetch_repos(&self, account: &str) -> Result<Vec<RepoRecord>, FetchError>;
    fn name(&self) -> &'static str;
}
