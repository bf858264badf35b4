// src/content/experience.rs
//! "Experience" entries derived from non-fork blockchain repositories
//! with a description. Role, icon, and technology selection are static
//! ordered rule tables evaluated top-down, first match wins.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::content::{display_name, experience_icon, translate_to_english};
use crate::fetch::RepoRecord;

pub const MAX_ENTRIES: usize = 10;
pub const MAX_TECHNOLOGIES: usize = 5;
pub const MAX_ACHIEVEMENTS: usize = 4;
/// Recency window for the active/completed status, in days.
pub const ACTIVE_WINDOW_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceEntry {
    /// Keyed by the source repository id.
    pub id: u64,
    pub project: String,
    pub role: &'static str,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
    pub status: ProjectStatus,
    pub icon: &'static str,
    pub url: String,
    pub homepage: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub watchers: u32,
}

/// Ordered (name keyword, description keyword, role) rules. Priority
/// order matters because multiple keywords may co-occur; "validator"
/// must win over "node" and "testnet".
const ROLE_RULES: &[(&str, &str, &str)] = &[
    ("validator", "validator", "Validator"),
    ("node", "node", "Node Operator"),
    ("bot", "bot", "Bot Developer"),
    ("mining", "mining", "Miner"),
    ("test", "testnet", "Testnet Participant"),
    ("faucet", "faucet", "Faucet Operator"),
];

pub fn determine_role(repo: &RepoRecord) -> &'static str {
    let name = repo.name.to_lowercase();
    let desc = repo
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    for (name_kw, desc_kw, role) in ROLE_RULES {
        if name.contains(name_kw) || desc.contains(desc_kw) {
            return role;
        }
    }
    "Developer"
}

/// Content-based technology tags detected via substring match on
/// name + description.
const TECH_TAGS: &[(&[&str], &str)] = &[
    (&["cosmos", "tendermint"], "Cosmos SDK"),
    (&["solana", "anchor"], "Solana"),
    (&["ethereum", "solidity"], "Ethereum"),
    (&["rust"], "Rust"),
    (&["docker"], "Docker"),
    (&["node", "validator"], "Blockchain"),
    (&["web3"], "Web3"),
    (&["defi"], "DeFi"),
    (&["zkvm", "zk"], "Zero Knowledge"),
];

pub fn determine_technologies(repo: &RepoRecord) -> Vec<String> {
    let mut techs: Vec<String> = Vec::new();

    if let Some(lang) = &repo.language {
        techs.push(lang.clone());
    }

    let content = repo.name_desc();
    for (keywords, tag) in TECH_TAGS {
        if keywords.iter().any(|kw| content.contains(kw)) {
            techs.push((*tag).to_string());
        }
    }

    // Topics are appended last, deduplicated case-insensitively against
    // what is already listed.
    for topic in &repo.topics {
        if !techs.iter().any(|t| t.eq_ignore_ascii_case(topic)) {
            let mut chars = topic.chars();
            let capitalized = match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => continue,
            };
            techs.push(capitalized);
        }
    }

    techs.truncate(MAX_TECHNOLOGIES);
    techs
}

/// Threshold-rule achievements, capped at four. Two generic fallback
/// sentences are used only when no rule fires.
pub fn generate_achievements(repo: &RepoRecord, now: DateTime<Utc>) -> Vec<String> {
    let mut achievements = Vec::new();

    if repo.stars > 5 {
        achievements.push(format!("{} GitHub stars earned", repo.stars));
    }
    if repo.forks > 2 {
        achievements.push(format!("{} community forks", repo.forks));
    }
    if repo.watchers > 3 {
        achievements.push(format!("{} active watchers", repo.watchers));
    }

    let days_since_update = repo.days_since_update(now);
    if days_since_update < 7 {
        achievements.push("Recently active development".to_string());
    }
    if days_since_update < 30 {
        achievements.push("Regular maintenance".to_string());
    }

    if repo.size_kb > 1000 {
        achievements.push("Substantial codebase contribution".to_string());
    }

    if achievements.is_empty() {
        achievements.push("Project implementation".to_string());
        achievements.push("Code repository maintenance".to_string());
    }

    achievements.truncate(MAX_ACHIEVEMENTS);
    achievements
}

pub fn determine_status(repo: &RepoRecord, now: DateTime<Utc>) -> ProjectStatus {
    if repo.days_since_update(now) < ACTIVE_WINDOW_DAYS {
        ProjectStatus::Active
    } else {
        ProjectStatus::Completed
    }
}

/// Period label from creation/update years. An update within the last
/// six months renders as "YEAR - Present"; a single-year project renders
/// that year; otherwise a "START - END" range.
pub fn format_period(
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> String {
    use chrono::Datelike;

    let months_since_update = (now - updated_at).num_days() / 30;
    if months_since_update < 6 {
        format!("{} - Present", created_at.year())
    } else if created_at.year() == updated_at.year() {
        created_at.year().to_string()
    } else {
        format!("{} - {}", created_at.year(), updated_at.year())
    }
}

/// Derive experience entries from the blockchain subset, in input order,
/// capped at [`MAX_ENTRIES`]. Forks and repositories without a
/// description are skipped.
pub fn generate_experiences(repos: &[&RepoRecord], now: DateTime<Utc>) -> Vec<ExperienceEntry> {
    repos
        .iter()
        .filter(|r| !r.is_fork && r.description.is_some())
        .take(MAX_ENTRIES)
        .map(|repo| {
            let name = repo.name.to_lowercase();
            let desc = repo
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            let description = repo
                .description
                .clone()
                .unwrap_or_else(|| "Blockchain project development and testing.".to_string());

            ExperienceEntry {
                id: repo.id,
                project: display_name(&repo.name),
                role: determine_role(repo),
                period: format_period(repo.created_at, repo.updated_at, now),
                description: translate_to_english(&description),
                technologies: determine_technologies(repo),
                achievements: generate_achievements(repo, now)
                    .iter()
                    .map(|a| translate_to_english(a))
                    .collect(),
                status: determine_status(repo, now),
                icon: experience_icon(&name, &desc),
                url: repo.url.clone(),
                homepage: repo.homepage.clone(),
                stars: repo.stars,
                forks: repo.forks,
                watchers: repo.watchers,
            }
        })
        .collect()
}
