//! Fuzzy subsequence matching for pathsurfer.
//!
//! [find] scores every candidate against a query in a single greedy left-to-right scan.
//! Each query rune is aligned with the best scoring occurrence seen since the previous
//! commit, and is only committed once the next query rune matches the next candidate rune
//! (or the candidate runs out). That lookahead lets a later, better placed occurrence win
//! over the first one.
//!
//! Scoring per committed rune:
//! - `1` for any match
//! - [FIRST_CHAR_BONUS] at rune index 0
//! - [CONSECUTIVE_BONUS] directly after the previously committed rune
//! - [SEPARATOR_BONUS] after `_`, `-` or `/`
//! - [CAMEL_CASE_BONUS] on a lowercase to uppercase boundary
//!
//! The final score subtracts the distance between consecutive committed positions.

pub const FIRST_CHAR_BONUS: i64 = 5;
pub const CONSECUTIVE_BONUS: i64 = 5;
pub const SEPARATOR_BONUS: i64 = 10;
pub const CAMEL_CASE_BONUS: i64 = 8;

/// A candidate that contains every query rune, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    candidate: String,
    positions: Vec<usize>,
    score: i64,
}

impl Match {
    #[inline]
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// Rune indices into the candidate, one per query rune, strictly increasing.
    #[inline]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Matches `query` against every candidate and returns the full matches in input order.
///
/// An empty query matches nothing.
pub fn find<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<Match> {
    let pattern: Vec<char> = query.chars().collect();
    if pattern.is_empty() || candidates.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .filter_map(|c| match_candidate(&pattern, c.as_ref()))
        .collect()
}

/// Orders matches by descending score, keeping input order for ties.
pub fn rank(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

fn match_candidate(pattern: &[char], candidate: &str) -> Option<Match> {
    let runes: Vec<char> = candidate.chars().collect();

    let mut positions = Vec::with_capacity(pattern.len());
    let mut total = 0;
    let mut pattern_idx = 0;
    let mut last_committed: Option<usize> = None;
    // (score, index) of the best occurrence of the current query rune since the last commit
    let mut running_best: Option<(i64, usize)> = None;

    for (idx, &curr) in runes.iter().enumerate() {
        let Some(&wanted) = pattern.get(pattern_idx) else {
            break;
        };
        let prev = idx.checked_sub(1).map(|i| runes[i]);

        if equals_ignore_case(wanted, curr) {
            let score = rune_score(idx, curr, prev, last_committed);
            if running_best.is_none_or(|(best, _)| score > best) {
                running_best = Some((score, idx));
            }
        }

        let next = runes.get(idx + 1).copied();
        let lookahead = match (pattern.get(pattern_idx + 1), next) {
            (Some(&p), Some(n)) => equals_ignore_case(p, n),
            _ => false,
        };

        if next.is_none() || lookahead {
            let Some((score, at)) = running_best.take() else {
                // Nothing to commit yet, keep scanning for the current rune.
                continue;
            };
            total += score;
            positions.push(at);
            last_committed = Some(at);
            pattern_idx += 1;
        }
    }

    if positions.len() != pattern.len() {
        return None;
    }

    let distance: usize = positions.windows(2).map(|w| w[1] - w[0]).sum();
    Some(Match {
        candidate: candidate.to_string(),
        positions,
        score: total - distance as i64,
    })
}

fn rune_score(idx: usize, curr: char, prev: Option<char>, last_committed: Option<usize>) -> i64 {
    let mut score = 1;

    if idx == 0 {
        score += FIRST_CHAR_BONUS;
    }
    if last_committed.is_some_and(|last| last + 1 == idx) {
        score += CONSECUTIVE_BONUS;
    }
    if let Some(prev) = prev {
        if is_separator(prev) {
            score += SEPARATOR_BONUS;
        }
        if prev.is_lowercase() && curr.is_uppercase() {
            score += CAMEL_CASE_BONUS;
        }
    }
    score
}

#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '/')
}

/// Case-insensitive rune comparison using Unicode simple case folding.
///
/// Two runes are equal when they fold to the same rune. Dotless `ı` and dotted `İ` have no
/// simple folding and only match themselves.
pub fn equals_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(&b);
    }
    simple_fold(a) == simple_fold(b)
}

/// Lowercase runes whose simple folding is another rune (`C` and `S` rows of
/// `CaseFolding.txt`). Sorted by the first rune.
const FOLD_EXCEPTIONS: &[(char, char)] = &[
    ('\u{00B5}', '\u{03BC}'),
    ('\u{017F}', 's'),
    ('\u{0345}', '\u{03B9}'),
    ('\u{03C2}', '\u{03C3}'),
    ('\u{03D0}', '\u{03B2}'),
    ('\u{03D1}', '\u{03B8}'),
    ('\u{03D5}', '\u{03C6}'),
    ('\u{03D6}', '\u{03C0}'),
    ('\u{03F0}', '\u{03BA}'),
    ('\u{03F1}', '\u{03C1}'),
    ('\u{03F5}', '\u{03B5}'),
    ('\u{1C80}', '\u{0432}'),
    ('\u{1C81}', '\u{0434}'),
    ('\u{1C82}', '\u{043E}'),
    ('\u{1C83}', '\u{0441}'),
    ('\u{1C84}', '\u{0442}'),
    ('\u{1C85}', '\u{0442}'),
    ('\u{1C86}', '\u{044A}'),
    ('\u{1C87}', '\u{0463}'),
    ('\u{1C88}', '\u{A64B}'),
    ('\u{1E9B}', '\u{1E61}'),
    ('\u{1FBE}', '\u{03B9}'),
    ('\u{1FD3}', '\u{0390}'),
    ('\u{1FE3}', '\u{03B0}'),
    ('\u{FB05}', '\u{FB06}'),
];

/// Maps a rune to the representative of its simple case folding class.
fn simple_fold(c: char) -> char {
    if let Ok(idx) = FOLD_EXCEPTIONS.binary_search_by_key(&c, |&(from, _)| from) {
        return FOLD_EXCEPTIONS[idx].1;
    }
    // Multi-rune lowercase mappings (like `İ`) are full folding only.
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
