// src/content/timeline.rs
//! Timeline events: one "Started ..." project event per blockchain
//! repository plus up to three synthetic milestones, de-duplicated by
//! title and sorted newest-first.

use chrono::{DateTime, Datelike, Utc};
use serde::{Serialize, Serializer};
use std::collections::HashSet;

use crate::content::{spaced_name, timeline_icon};
use crate::fetch::RepoRecord;

pub const MAX_EVENTS: usize = 8;

/// Either a plain year or an open-ended "{year} - Present" label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDate {
    Year(i32),
    Present { since: i32 },
}

impl EventDate {
    /// Year used for ordering; an open-ended label sorts as the current
    /// year.
    pub fn effective_year(self, current_year: i32) -> i32 {
        match self {
            EventDate::Year(y) => y,
            EventDate::Present { .. } => current_year,
        }
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventDate::Year(y) => write!(f, "{y}"),
            EventDate::Present { since } => write!(f, "{since} - Present"),
        }
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Project,
    Milestone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEvent {
    pub date: EventDate,
    pub title: String,
    pub description: String,
    pub icon: &'static str,
    pub kind: EventKind,
}

pub fn generate_timeline(repos: &[&RepoRecord], now: DateTime<Utc>) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = repos
        .iter()
        .map(|repo| TimelineEvent {
            date: EventDate::Year(repo.created_at.year()),
            title: format!("Started {}", spaced_name(&repo.name)),
            description: repo
                .description
                .clone()
                .unwrap_or_else(|| "Blockchain project development".to_string()),
            icon: timeline_icon(&repo.name.to_lowercase()),
            kind: EventKind::Project,
        })
        .collect();

    if !events.is_empty() {
        let project_years: Vec<i32> = events
            .iter()
            .map(|e| e.date.effective_year(now.year()))
            .collect();
        let first_year = *project_years.iter().min().unwrap_or(&now.year());
        let latest_year = *project_years.iter().max().unwrap_or(&now.year());

        if latest_year >= 2024 {
            events.push(TimelineEvent {
                date: EventDate::Present { since: latest_year },
                title: "Active Testnet Hunter".to_string(),
                description: format!(
                    "Participating in {} blockchain projects and testnets",
                    repos.len()
                ),
                icon: "🚀",
                kind: EventKind::Milestone,
            });
        }

        if repos.iter().any(|r| r.name_desc().contains("validator")) {
            events.push(TimelineEvent {
                date: EventDate::Present {
                    since: first_year.max(2023),
                },
                title: "Node Validator".to_string(),
                description: "Running validator nodes for multiple blockchain networks"
                    .to_string(),
                icon: "⚡",
                kind: EventKind::Milestone,
            });
        }

        events.push(TimelineEvent {
            date: EventDate::Year(first_year),
            title: "Web3 Journey Begins".to_string(),
            description: "Started contributing to blockchain ecosystem".to_string(),
            icon: "🌟",
            kind: EventKind::Milestone,
        });
    }

    // De-duplicate by title, first occurrence wins.
    let mut seen: HashSet<String> = HashSet::new();
    events.retain(|e| seen.insert(e.title.clone()));

    // Stable sort keeps insertion order within a year.
    events.sort_by_key(|e| std::cmp::Reverse(e.date.effective_year(now.year())));
    events.truncate(MAX_EVENTS);
    events
}
