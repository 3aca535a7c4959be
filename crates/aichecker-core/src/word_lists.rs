//! Fixed word lists for the style heuristics.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Forms of "to be" that can open a passive construction.
pub static BE_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["am", "is", "are", "was", "were", "be", "been", "being"]
        .into_iter()
        .collect()
});

/// Words ending in -ly that are not adverbs.
pub static ADVERB_EXCLUSIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["family", "only", "supply", "reply", "apply", "imply"]
        .into_iter()
        .collect()
});
