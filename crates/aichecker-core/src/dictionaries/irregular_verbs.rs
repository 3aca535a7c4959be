//! Irregular past participles for passive voice detection.
//!
//! Regular participles are caught by their `-ed` ending; this set covers the
//! common verbs whose participle does not end that way.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Irregular past participles.
pub static IRREGULAR_PAST_PARTICIPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Most common irregular verbs
    set.extend([
        "done",
        "gone",
        "seen",
        "known",
        "given",
        "taken",
        "made",
        "written",
        "spoken",
        "broken",
        "chosen",
        "driven",
        "eaten",
        "fallen",
        "forgotten",
        "forgiven",
        "frozen",
        "gotten",
        "hidden",
        "ridden",
        "risen",
        "shaken",
        "shown",
        "stolen",
        "sworn",
        "torn",
        "thrown",
        "worn",
        "beaten",
        "bitten",
        "blown",
        "drawn",
        "flown",
        "grown",
        "withdrawn",
        "overthrown",
        "undone",
    ]);

    // Vowel-change forms
    set.extend([
        "begun", "drunk", "rung", "shrunk", "sunk", "sprung", "sung", "spun", "won", "hung",
        "struck", "stuck", "swung", "flung", "stung", "strung", "wrung", "dug",
    ]);

    // Rarer -en/-n forms
    set.extend([
        "arisen",
        "awoken",
        "borne",
        "bidden",
        "forbidden",
        "forsaken",
        "hewn",
        "mistaken",
        "proven",
        "stricken",
        "striven",
        "trodden",
        "woken",
        "woven",
        "slain",
        "sown",
        "strewn",
    ]);

    // -t and -d forms that do not end in "ed"
    set.extend([
        "said", "paid", "laid", "heard", "sold", "told", "held", "left", "kept", "swept", "felt",
        "dealt", "meant", "sent", "spent", "bent", "lent", "built", "burnt", "learnt", "spelt",
        "spoilt", "brought", "bought", "caught", "taught", "thought", "sought", "fought",
        "found", "bound", "ground", "wound", "lost", "led", "fed", "bred", "fled", "shed",
        "understood", "withheld", "upheld",
    ]);

    // Same form as the base verb
    set.extend([
        "cast", "cut", "hit", "hurt", "let", "put", "quit", "read", "set", "shut", "split",
        "spread", "thrust", "upset", "forecast", "lit", "shot", "met",
    ]);

    set
});

/// Check if a word is an irregular past participle (case-insensitive).
pub fn is_irregular_past_participle(word: &str) -> bool {
    IRREGULAR_PAST_PARTICIPLES.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_participles() {
        assert!(is_irregular_past_participle("written"));
        assert!(is_irregular_past_participle("done"));
        assert!(is_irregular_past_participle("thrown"));
        assert!(is_irregular_past_participle("Broken"));
        assert!(!is_irregular_past_participle("walked"));
        assert!(!is_irregular_past_participle("red"));
    }
}
