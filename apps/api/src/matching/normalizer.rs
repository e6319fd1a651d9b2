//! Keyword normalization — the canonical form produced here is the single
//! source of truth for skill equality everywhere in the matcher.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Fixed synonym table, applied as an exact-match substitution after
/// whitespace normalization. Targets must themselves be canonical (mapping a
/// token twice must be a no-op) so normalization stays idempotent.
static SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("js", "javascript"),
        ("nodejs", "node.js"),
        ("node js", "node.js"),
        ("node", "node.js"),
        ("mongo", "mongodb"),
        ("postgres", "postgresql"),
        ("restful apis", "rest apis"),
        ("tensorflow developer", "tensorflow"),
        ("huggingface", "hugging face"),
        ("ml", "machine learning"),
        ("reactjs", "react.js"),
        ("react js", "react.js"),
        ("react", "react.js"),
        ("amazon web services", "aws"),
        ("natural language processing", "nlp"),
    ])
});

const BULLET_MARKERS: [char; 4] = ['•', '-', '–', '●'];

/// Canonicalizes a single raw token: lowercase, strip leading bullet markers,
/// collapse internal whitespace, then apply the synonym table. Pure; returns
/// an empty string for all-whitespace input.
pub fn normalize_token(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = lowered.trim().trim_start_matches(&BULLET_MARKERS[..]);
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    match SYNONYMS.get(collapsed.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => collapsed,
    }
}

/// Normalizes a sequence of raw keywords into a deduplicated set of canonical
/// skill tokens. Empty tokens are dropped.
pub fn normalize_keywords<I, S>(keywords: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|kw| normalize_token(kw.as_ref()))
        .filter(|kw| !kw.is_empty())
        .collect()
}
