// tests/portfolio_derive.rs
//
// End-to-end derivation over a snapshot: one fetch feeds all four
// sections, and derivations over a frozen snapshot are deterministic.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use chainfolio::content::ProjectStatus;
use chainfolio::fetch::{FetchError, RepoRecord, RepoSource};
use chainfolio::portfolio::{Snapshot, DEFAULT_FEATURED_LIMIT};

fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn repo(id: u64, name: &str, desc: Option<&str>) -> RepoRecord {
    RepoRecord {
        id,
        name: name.to_string(),
        full_name: format!("acct/{name}"),
        description: desc.map(str::to_string),
        url: format!("https://github.com/acct/{name}"),
        homepage: None,
        language: None,
        stars: 0,
        forks: 0,
        watchers: 0,
        topics: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        is_private: false,
        is_fork: false,
        size_kb: 100,
    }
}

fn sample_repos() -> Vec<RepoRecord> {
    let mut validator = repo(1, "validator-node", Some("Blockchain validator testnet tool"));
    validator.language = Some("Rust".to_string());
    validator.stars = 12;
    validator.updated_at = frozen_now() - chrono::Duration::days(10);

    let mut bot = repo(2, "kuzco-bot", Some("Worker bot for kuzco"));
    bot.language = Some("JavaScript".to_string());
    bot.created_at = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();

    let mut fork = repo(3, "cosmos-sdk", Some("Forked framework"));
    fork.is_fork = true;
    fork.stars = 999;

    let plain = repo(4, "dotfiles", Some("shell setup"));

    vec![validator, bot, fork, plain]
}

/// Counts upstream calls so redundant fetches are visible.
struct CountingSource {
    repos: Vec<RepoRecord>,
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl RepoSource for CountingSource {
    async fn fetch_repos(&self, _account: &str) -> Result<Vec<RepoRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.repos.clone())
    }

    fn name(&self) -> &'static str {
        "Counting"
    }
}

#[tokio::test]
async fn one_fetch_serves_all_four_sections() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = CountingSource {
        repos: sample_repos(),
        calls: calls.clone(),
    };

    let snapshot = Snapshot::load(&source, "acct").await.expect("load");
    let _ = snapshot.experiences();
    let _ = snapshot.repositories(DEFAULT_FEATURED_LIMIT);
    let _ = snapshot.timeline();
    let _ = snapshot.insights();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn blockchain_subset_feeds_experiences() {
    let snapshot = Snapshot::from_repos("acct", sample_repos(), frozen_now());

    // dotfiles has no keyword; the fork is excluded by the generator.
    let entries = snapshot.experiences();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].project, "Validator node");
    assert_eq!(entries[0].role, "Validator");
    assert_eq!(entries[0].status, ProjectStatus::Active);
    assert_eq!(entries[0].period, "2023 - Present");
    assert_eq!(entries[1].project, "Kuzco bot");
    assert_eq!(entries[1].role, "Bot Developer");
}

#[test]
fn repositories_section_combines_featured_and_stats() {
    let snapshot = Snapshot::from_repos("acct", sample_repos(), frozen_now());
    let overview = snapshot.repositories(2);

    assert_eq!(overview.featured.len(), 2);
    // The heavily starred fork never features.
    assert!(overview.featured.iter().all(|r| !r.is_fork));
    assert_eq!(overview.featured[0].name, "validator-node");

    assert_eq!(overview.stats.total_repos, 4);
    assert_eq!(overview.stats.blockchain_repos, 3);
    assert_eq!(
        overview.stats.languages,
        vec![("Rust".to_string(), 1), ("JavaScript".to_string(), 1)]
    );
}

#[test]
fn timeline_and_insights_derive_from_the_same_subset() {
    let snapshot = Snapshot::from_repos("acct", sample_repos(), frozen_now());

    let timeline = snapshot.timeline();
    assert!(timeline.iter().any(|e| e.title == "Started validator node"));
    assert!(timeline.iter().any(|e| e.title == "Node Validator"));

    let insights = snapshot.insights();
    // validator repo is active -> experience article leads.
    assert_eq!(insights[0].title, "What I've Learned Running 1 Active Blockchain Projects");
    let ids: Vec<u32> = insights.iter().map(|a| a.id).collect();
    assert_eq!(ids, (1..=insights.len() as u32).collect::<Vec<_>>());
}

#[test]
fn derivations_are_idempotent_over_a_frozen_snapshot() {
    let snapshot = Snapshot::from_repos("acct", sample_repos(), frozen_now());

    assert_eq!(snapshot.experiences(), snapshot.experiences());
    assert_eq!(snapshot.timeline(), snapshot.timeline());
    assert_eq!(snapshot.insights(), snapshot.insights());
}

#[test]
fn empty_snapshot_yields_empty_sections_not_errors() {
    let snapshot = Snapshot::from_repos("acct", Vec::new(), frozen_now());
    assert!(snapshot.experiences().is_empty());
    assert!(snapshot.timeline().is_empty());
    assert!(snapshot.insights().is_empty());
    let overview = snapshot.repositories(DEFAULT_FEATURED_LIMIT);
    assert!(overview.featured.is_empty());
    assert_eq!(overview.stats.total_repos, 0);
}
