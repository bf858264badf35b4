// src/classify.rs
//! Blockchain tagging and featured selection over normalized records.
//! Both return borrowed projections; fetched records are never mutated.

use crate::fetch::RepoRecord;

/// Fixed domain keyword set. Matching is substring-based and
/// case-insensitive with no word-boundary checks, so "nodejs" matches
/// "node" — accepted behavior, some derived content depends on it.
pub const BLOCKCHAIN_KEYWORDS: &[&str] = &[
    "blockchain",
    "crypto",
    "web3",
    "defi",
    "nft",
    "ethereum",
    "bitcoin",
    "solana",
    "polygon",
    "avalanche",
    "cosmos",
    "validator",
    "node",
    "testnet",
    "mainnet",
    "staking",
    "newton",
    "nexus",
    "miden",
    "anoma",
    "kuzco",
    "destra",
    "bot",
    "mining",
    "faucet",
    "airdrop",
];

/// True when name + description + topics contain at least one keyword.
pub fn is_blockchain(repo: &RepoRecord) -> bool {
    let haystack = repo.search_text();
    BLOCKCHAIN_KEYWORDS.iter().any(|kw| haystack.contains(kw))
}

/// Matched subset in input order.
pub fn blockchain_repos<'a>(repos: &'a [RepoRecord]) -> Vec<&'a RepoRecord> {
    repos.iter().filter(|r| is_blockchain(r)).collect()
}

/// Featured subset: forks excluded, ranked by stars, then most recent
/// update, then ascending id so the order is a deterministic total order.
pub fn featured_repos<'a>(repos: &'a [RepoRecord], limit: usize) -> Vec<&'a RepoRecord> {
    let mut out: Vec<&RepoRecord> = repos.iter().filter(|r| !r.is_fork).collect();
    out.sort_by(|a, b| {
        b.stars
            .cmp(&a.stars)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
            .then_with(|| a.id.cmp(&b.id))
    });
    out.truncate(limit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo(id: u64, name: &str, desc: Option<&str>, topics: &[&str]) -> RepoRecord {
        RepoRecord {
            id,
            name: name.to_string(),
            full_name: format!("acct/{name}"),
            description: desc.map(str::to_string),
            url: format!("https://example.test/acct/{name}"),
            homepage: None,
            language: None,
            stars: 0,
            forks: 0,
            watchers: 0,
            topics: topics.iter().map(|s| s.to_string()).collect(),
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            is_private: false,
            is_fork: false,
            size_kb: 0,
        }
    }

    #[test]
    fn matches_name_description_and_topics() {
        assert!(is_blockchain(&repo(1, "solana-bot", None, &[])));
        assert!(is_blockchain(&repo(2, "toolbox", Some("A DeFi dashboard"), &[])));
        assert!(is_blockchain(&repo(3, "toolbox", None, &["staking"])));
        assert!(!is_blockchain(&repo(4, "dotfiles", Some("shell setup"), &[])));
    }

    #[test]
    fn substring_semantics_are_preserved() {
        // "nodejs" contains "node"; no word-boundary check by design.
        assert!(is_blockchain(&repo(1, "nodejs-starter", None, &[])));
    }

    #[test]
    fn classifier_is_monotonic_under_added_keywords() {
        let plain = repo(1, "toolbox", Some("utility scripts"), &[]);
        assert!(!is_blockchain(&plain));
        let mut enriched = plain.clone();
        enriched.description = Some("utility scripts for a validator".into());
        assert!(is_blockchain(&enriched));
    }

    #[test]
    fn featured_excludes_forks_and_caps_length() {
        let mut repos = vec![repo(1, "a", None, &[]), repo(2, "b", None, &[])];
        repos[0].is_fork = true;
        let feat = featured_repos(&repos, 5);
        assert_eq!(feat.len(), 1);
        assert!(feat.iter().all(|r| !r.is_fork));

        let feat = featured_repos(&repos, 0);
        assert!(feat.is_empty());
    }

    #[test]
    fn featured_orders_by_stars_then_recency_then_id() {
        let mut a = repo(3, "a", None, &[]);
        let mut b = repo(1, "b", None, &[]);
        let mut c = repo(2, "c", None, &[]);
        a.stars = 5;
        b.stars = 5;
        c.stars = 9;
        b.updated_at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let repos = [a, b, c].to_vec();
        let feat = featured_repos(&repos, 3);
        let names: Vec<&str> = feat.iter().map(|r| r.name.as_str()).collect();
        // c wins on stars; b beats a on recency.
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn featured_tie_break_on_id_is_ascending() {
        let a = repo(7, "a", None, &[]);
        let b = repo(2, "b", None, &[]);
        let repos = [a, b].to_vec();
        let feat = featured_repos(&repos, 2);
        let ids: Vec<u64> = feat.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 7]);
    }
}
