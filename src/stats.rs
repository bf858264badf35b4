// src/stats.rs
//! Summary statistics over a repository set. Pure; empty input yields
//! the all-zero summary.

use std::collections::HashMap;

use serde::Serialize;

use crate::classify;
use crate::fetch::RepoRecord;

pub const TOP_LANGUAGES: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_repos: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub public_repos: usize,
    pub blockchain_repos: usize,
    /// Top languages as (language, repo count), descending count,
    /// ties broken by first-seen order in the input.
    pub languages: Vec<(String, u32)>,
}

pub fn stats_summary(repos: &[RepoRecord]) -> StatsSummary {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    let mut total_stars = 0u64;
    let mut total_forks = 0u64;

    for repo in repos {
        if let Some(lang) = repo.language.as_deref() {
            let entry = counts.entry(lang).or_insert(0);
            if *entry == 0 {
                first_seen.push(lang);
            }
            *entry += 1;
        }
        total_stars += u64::from(repo.stars);
        total_forks += u64::from(repo.forks);
    }

    let mut ranked: Vec<(usize, &str)> = first_seen.into_iter().enumerate().collect();
    ranked.sort_by(|(ia, a), (ib, b)| counts[b].cmp(&counts[a]).then(ia.cmp(ib)));

    let languages = ranked
        .into_iter()
        .take(TOP_LANGUAGES)
        .map(|(_, lang)| (lang.to_string(), counts[lang]))
        .collect();

    StatsSummary {
        total_repos: repos.len(),
        total_stars,
        total_forks,
        public_repos: repos.iter().filter(|r| !r.is_private).count(),
        blockchain_repos: classify::blockchain_repos(repos).len(),
        languages,
    }
}
