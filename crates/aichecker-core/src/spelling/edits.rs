//! Edit-distance helpers for spelling suggestions.
//!
//! Distance 1 is found by generating every string one edit away (delete,
//! transpose, replace, insert) and keeping the known ones. Distance 2 is
//! never generated: callers compare nearby dictionary words with
//! [`bounded_distance`], which stays linear in word length.

use std::collections::HashSet;

/// Maximum number of suggestions returned for one word.
pub const MAX_SUGGESTIONS: usize = 10;

/// Lowercase ASCII letters, the fallback alphabet for dictionaries that
/// cannot enumerate their own characters.
pub fn ascii_alphabet() -> Vec<char> {
    ('a'..='z').collect()
}

/// All strings one edit away from `word` over `alphabet`, `word` excluded.
pub fn edits1(word: &str, alphabet: &[char]) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = HashSet::new();

    for i in 0..=chars.len() {
        let (left, right) = chars.split_at(i);

        if let Some((_, rest)) = right.split_first() {
            out.insert(left.iter().chain(rest).collect());

            if let Some((second, tail)) = rest.split_first() {
                let mut s: String = left.iter().collect();
                s.push(*second);
                s.push(right[0]);
                s.extend(tail);
                out.insert(s);
            }
        }

        for &c in alphabet {
            if let Some((_, rest)) = right.split_first() {
                let mut s: String = left.iter().collect();
                s.push(c);
                s.extend(rest);
                out.insert(s);
            }
            let mut s: String = left.iter().collect();
            s.push(c);
            s.extend(right);
            out.insert(s);
        }
    }

    out.remove(word);
    out
}

/// Suggest corrections one edit away from `word`.
///
/// `weight` returns `Some(frequency)` for known words and `None` otherwise.
/// Ranked as in [`rank`].
pub fn suggest_corrections<F>(word: &str, alphabet: &[char], mut weight: F) -> Vec<String>
where
    F: FnMut(&str) -> Option<u64>,
{
    let first = edits1(word, alphabet);
    rank(
        first
            .iter()
            .filter_map(|c| weight(c).map(|w| (c.as_str(), w)))
            .collect(),
    )
}

/// Order known candidates by frequency descending, then alphabetically,
/// keeping at most [`MAX_SUGGESTIONS`].
pub fn rank(mut known: Vec<(&str, u64)>) -> Vec<String> {
    known.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    known
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(c, _)| c.to_string())
        .collect()
}

/// Optimal string alignment distance between `a` and `b`, if at most `max`.
///
/// Only cells within `max` of the diagonal are filled, and the scan stops
/// as soon as a whole row exceeds `max`.
pub fn bounded_distance(a: &[char], b: &[char], max: usize) -> Option<usize> {
    let (n, m) = (a.len(), b.len());
    if n.abs_diff(m) > max {
        return None;
    }

    let over = max + 1;
    let mut two_back = vec![over; m + 1];
    let mut prev: Vec<usize> = (0..=m).map(|j| j.min(over)).collect();
    let mut cur = vec![over; m + 1];

    for i in 1..=n {
        cur.fill(over);
        if i <= max {
            cur[0] = i;
        }
        let mut row_min = cur[0];

        let lo = i.saturating_sub(max).max(1);
        let hi = (i + max).min(m);
        for j in lo..=hi {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut d = (prev[j - 1] + cost).min(prev[j] + 1).min(cur[j - 1] + 1);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d = d.min(two_back[j - 2] + 1);
            }
            cur[j] = d.min(over);
            row_min = row_min.min(cur[j]);
        }

        if row_min > max {
            return None;
        }
        std::mem::swap(&mut two_back, &mut prev);
        std::mem::swap(&mut prev, &mut cur);
    }

    let d = prev[m];
    (d <= max).then_some(d)
}
