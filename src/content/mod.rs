// src/content/mod.rs
//! Derived display content: experience entries, timeline events, and
//! insight articles. Generators are pure functions of the classified
//! repository subset plus an injected "now", so a frozen clock makes
//! them fully deterministic.

pub mod experience;
pub mod insight;
pub mod timeline;
pub mod translate;

pub use experience::{generate_experiences, ExperienceEntry, ProjectStatus};
pub use insight::{generate_insights, InsightArticle, InsightCategory};
pub use timeline::{generate_timeline, EventDate, EventKind, TimelineEvent};
pub use translate::translate_to_english;

/// Ordered project icon table, first match wins. Priority order matters
/// because several keywords can co-occur in one name.
const ICON_RULES: &[(&str, &str)] = &[
    ("newton", "🔬"),
    ("nexus", "🌐"),
    ("miden", "🔐"),
    ("anoma", "🎯"),
    ("kuzco", "🦙"),
    ("destra", "⚡"),
    ("bot", "🤖"),
    ("validator", "✅"),
    ("node", "🖥️"),
    ("mining", "⛏️"),
    ("faucet", "💧"),
];

/// Icon for an experience card, matched against name + description.
/// Carries an extra web entry and a rocket default.
pub(crate) fn experience_icon(name: &str, desc: &str) -> &'static str {
    for (kw, icon) in ICON_RULES {
        if name.contains(kw) || desc.contains(kw) {
            return icon;
        }
    }
    if name.contains("web") || desc.contains("website") {
        return "🌍";
    }
    "🚀"
}

/// Icon for a timeline event, matched against the name only, with a
/// package default.
pub(crate) fn timeline_icon(name: &str) -> &'static str {
    for (kw, icon) in ICON_RULES {
        if name.contains(kw) {
            return icon;
        }
    }
    "📦"
}

/// "my-repo_name" -> "my repo name".
pub(crate) fn spaced_name(name: &str) -> String {
    name.replace(['-', '_'], " ")
}

/// "my-repo" -> "My repo": first letter upper-cased, separators to spaces.
pub(crate) fn display_name(name: &str) -> String {
    let spaced = spaced_name(name);
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
