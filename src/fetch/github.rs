// src/fetch/github.rs
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use metrics::{counter, histogram};
use serde::Deserialize;

use crate::config::Config;
use crate::fetch::types::{FetchError, RepoRecord, RepoSource};

/// Raw repository object as returned by the GitHub REST API.
/// Only the consumed fields are deserialized.
#[derive(Debug, Deserialize)]
struct RawRepo {
    id: u64,
    name: String,
    full_name: String,
    description: Option<String>,
    html_url: String,
    homepage: Option<String>,
    language: Option<String>,
    stargazers_count: u32,
    forks_count: u32,
    watchers_count: u32,
    #[serde(default)]
    topics: Vec<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
    private: bool,
    fork: bool,
    size: u64,
}

/// Tolerant timestamp parse: the upstream supplies RFC 3339, but an
/// occasional unparsable date substitutes `now` rather than failing.
fn parse_timestamp(raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(now)
}

fn normalize(raw: RawRepo, now: DateTime<Utc>) -> RepoRecord {
    RepoRecord {
        id: raw.id,
        name: raw.name,
        full_name: raw.full_name,
        description: raw.description.filter(|d| !d.trim().is_empty()),
        url: raw.html_url,
        homepage: raw.homepage.filter(|h| !h.trim().is_empty()),
        language: raw.language.filter(|l| !l.trim().is_empty()),
        stars: raw.stargazers_count,
        forks: raw.forks_count,
        watchers: raw.watchers_count,
        topics: raw.topics,
        created_at: parse_timestamp(raw.created_at.as_deref(), now),
        updated_at: parse_timestamp(raw.updated_at.as_deref(), now),
        is_private: raw.private,
        is_fork: raw.fork,
        size_kb: raw.size,
    }
}

/// Parse a GitHub `/users/{account}/repos` response body into normalized
/// records. Public so fixture-based tests can exercise normalization
/// without a live endpoint.
pub fn parse_repos_from_str(body: &str, now: DateTime<Utc>) -> Result<Vec<RepoRecord>, FetchError> {
    let t0 = std::time::Instant::now();
    let raw: Vec<RawRepo> = serde_json::from_str(body)
        .map_err(|e| FetchError::Network(format!("decoding repository list: {e}")))?;

    let out: Vec<RepoRecord> = raw.into_iter().map(|r| normalize(r, now)).collect();

    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    histogram!("fetch_parse_ms").record(ms);
    counter!("fetch_repos_total").increment(out.len() as u64);
    Ok(out)
}

/// Unauthenticated GitHub REST client. Single request per invocation,
/// newest-updated-first, capped at `per_page`.
pub struct GithubClient {
    base_url: String,
    per_page: u32,
    client: reqwest::Client,
}

impl GithubClient {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("chainfolio/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: cfg.api_base.trim_end_matches('/').to_string(),
            per_page: cfg.per_page,
            client,
        })
    }

    /// Point the client at a non-default endpoint (used by tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl RepoSource for GithubClient {
    async fn fetch_repos(&self, account: &str) -> Result<Vec<RepoRecord>, FetchError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url, account, self.per_page
        );

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = ?e, account, "github transport error");
                counter!("fetch_errors_total").increment(1);
                return Err(FetchError::Network(e.to_string()));
            }
        };

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, account, "github non-success status");
            counter!("fetch_errors_total").increment(1);
            return Err(FetchError::RemoteUnavailable {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_repos_from_str(&body, Utc::now())
    }

    fn name(&self) -> &'static str {
        "GitHub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn timestamp_falls_back_to_now() {
        assert_eq!(parse_timestamp(Some("not a date"), now()), now());
        assert_eq!(parse_timestamp(None, now()), now());
        let parsed = parse_timestamp(Some("2024-03-05T10:00:00Z"), now());
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap());
    }

    #[test]
    fn normalize_blanks_optional_fields() {
        let body = r#"[{
            "id": 1, "name": "validator-kit", "full_name": "a/validator-kit",
            "description": "  ", "html_url": "https://example.test/a/validator-kit",
            "homepage": "", "language": null,
            "stargazers_count": 3, "forks_count": 0, "watchers_count": 1,
            "created_at": "2023-01-10T00:00:00Z", "updated_at": "2024-02-01T00:00:00Z",
            "private": false, "fork": false, "size": 120
        }]"#;
        let repos = parse_repos_from_str(body, now()).unwrap();
        assert_eq!(repos.len(), 1);
        let r = &repos[0];
        assert_eq!(r.description, None);
        assert_eq!(r.homepage, None);
        assert_eq!(r.language, None);
        assert!(r.topics.is_empty());
    }

    #[test]
    fn malformed_body_is_a_network_error() {
        let err = parse_repos_from_str("{not json", now()).unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
