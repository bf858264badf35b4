// src/fetch/mod.rs
pub mod github;
pub mod types;

use metrics::{describe_counter, describe_gauge, describe_histogram};
use once_cell::sync::OnceCell;

pub use github::{parse_repos_from_str, GithubClient};
pub use types::{FetchError, RepoRecord, RepoSource};

/// One-time metrics registration.
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "fetch_repos_total",
            "Repository records parsed from the upstream API."
        );
        describe_counter!(
            "fetch_errors_total",
            "Upstream fetch failures (transport or non-success status)."
        );
        describe_histogram!("fetch_parse_ms", "Response body parse time in milliseconds.");
        describe_gauge!(
            "fetch_last_run_ts",
            "Unix ts when a repository fetch last completed."
        );
    });
}

/// In-memory source backed by pre-built records. Used by tests and demos
/// in place of the live GitHub endpoint.
pub struct FixtureSource {
    repos: Vec<RepoRecord>,
}

impl FixtureSource {
    pub fn new(repos: Vec<RepoRecord>) -> Self {
        Self { repos }
    }
}

#[async_trait::async_trait]
impl RepoSource for FixtureSource {
    async fn fetch_repos(&self, _account: &str) -> Result<Vec<RepoRecord>, FetchError> {
        Ok(self.repos.clone())
    }

    fn name(&self) -> &'static str {
        "Fixture"
    }
}
