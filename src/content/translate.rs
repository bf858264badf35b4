// src/content/translate.rs
//! Fixed-dictionary substring replacement that converts embedded
//! Indonesian words inside generated text to English. Legacy behavior,
//! reproduced exactly: a static lookup table applied in registration
//! order, no general translation, no word boundaries. Callers must not
//! rely on correctness for substrings that coincide with English words
//! already present.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

const DICTIONARY: &[(&str, &str)] = &[
    ("pengembangan", "development"),
    ("proyek", "project"),
    ("blockchain", "blockchain"),
    ("node", "node"),
    ("validator", "validator"),
    ("aplikasi", "application"),
    ("sistem", "system"),
    ("jaringan", "network"),
    ("komunitas", "community"),
    ("kontribusi", "contributions"),
    ("dokumentasi", "documentation"),
    ("perbaikan", "improvements"),
    ("keamanan", "security"),
    ("performa", "performance"),
    ("optimisasi", "optimization"),
    ("implementasi", "implementation"),
    ("maintenance", "maintenance"),
    ("pemeliharaan", "maintenance"),
    ("repo", "repository"),
    ("kode", "code"),
    ("fitur", "feature"),
    ("bug", "bug"),
    ("laporan", "reports"),
    ("pengujian", "testing"),
    ("benchmarking", "benchmarking"),
    ("stress", "stress"),
    ("early", "early"),
    ("adopter", "adopter"),
    ("rewards", "rewards"),
    ("building", "building"),
    ("membangun", "building"),
];

static PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    DICTIONARY
        .iter()
        .map(|(term, english)| {
            let re = RegexBuilder::new(&regex::escape(term))
                .case_insensitive(true)
                .build()
                .expect("translation term regex");
            (re, *english)
        })
        .collect()
});

pub fn translate_to_english(text: &str) -> String {
    let mut out = text.to_string();
    for (re, english) in PATTERNS.iter() {
        out = re.replace_all(&out, *english).into_owned();
    }
    out
}
