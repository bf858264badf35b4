// tests/fetch_normalize.rs
//
// Fixture-based tests for raw-to-normalized conversion of the GitHub
// repository listing, without a live endpoint.

use chrono::{DateTime, TimeZone, Utc};

use chainfolio::fetch::{parse_repos_from_str, FetchError};

fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

const FIXTURE: &str = r#"[
  {
    "id": 101,
    "name": "miden-testnet-kit",
    "full_name": "acct/miden-testnet-kit",
    "description": "Tooling for the Miden testnet",
    "html_url": "https://github.com/acct/miden-testnet-kit",
    "homepage": "https://acct.dev",
    "language": "Rust",
    "stargazers_count": 12,
    "forks_count": 3,
    "watchers_count": 5,
    "topics": ["zkvm", "testnet"],
    "created_at": "2024-02-10T08:30:00Z",
    "updated_at": "2025-05-20T16:00:00Z",
    "private": false,
    "fork": false,
    "size": 2048
  },
  {
    "id": 102,
    "name": "dotfiles",
    "full_name": "acct/dotfiles",
    "description": null,
    "html_url": "https://github.com/acct/dotfiles",
    "homepage": "",
    "language": null,
    "stargazers_count": 0,
    "forks_count": 0,
    "watchers_count": 0,
    "created_at": "broken-timestamp",
    "updated_at": null,
    "private": false,
    "fork": true,
    "size": 10
  }
]"#;

#[test]
fn fixture_parses_into_normalized_records() {
    let repos = parse_repos_from_str(FIXTURE, frozen_now()).expect("fixture parses");
    assert_eq!(repos.len(), 2);

    let kit = &repos[0];
    assert_eq!(kit.id, 101);
    assert_eq!(kit.name, "miden-testnet-kit");
    assert_eq!(kit.description.as_deref(), Some("Tooling for the Miden testnet"));
    assert_eq!(kit.homepage.as_deref(), Some("https://acct.dev"));
    assert_eq!(kit.language.as_deref(), Some("Rust"));
    assert_eq!(kit.stars, 12);
    assert_eq!(kit.topics, vec!["zkvm".to_string(), "testnet".to_string()]);
    assert_eq!(
        kit.created_at,
        Utc.with_ymd_and_hms(2024, 2, 10, 8, 30, 0).unwrap()
    );
    assert!(!kit.is_fork);
    assert_eq!(kit.size_kb, 2048);
}

#[test]
fn unparsable_dates_substitute_the_current_time() {
    let repos = parse_repos_from_str(FIXTURE, frozen_now()).expect("fixture parses");
    let dotfiles = &repos[1];
    assert_eq!(dotfiles.created_at, frozen_now());
    assert_eq!(dotfiles.updated_at, frozen_now());
    // Empty homepage and missing topics normalize to None / empty.
    assert_eq!(dotfiles.homepage, None);
    assert!(dotfiles.topics.is_empty());
}

#[test]
fn empty_array_is_the_valid_no_data_state() {
    let repos = parse_repos_from_str("[]", frozen_now()).expect("empty is ok");
    assert!(repos.is_empty());
}

#[test]
fn garbage_body_is_a_network_error() {
    let err = parse_repos_from_str("<html>rate limited</html>", frozen_now()).unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
