//! Best-candidate resolution for ratings search results.
//!
//! The ratings search has no identifier in common with the campus directory,
//! so the queried display name is reconciled against each candidate's
//! generated search tokens with Levenshtein-based fuzzy matching. The whole
//! module is pure: no I/O, no caching, no clock. Identical inputs always
//! yield the identical candidate.

use std::collections::HashSet;

use strsim::normalized_levenshtein;

use crate::naming;
use crate::ratings::TeacherCandidate;

/// Maximum normalized edit distance for a token to count as a fuzzy match
/// (0 = exact only; lower is stricter).
pub const MAX_MATCH_DISTANCE: f64 = 0.35;

// ---------------------------------------------------------------------------
// Search tokens
// ---------------------------------------------------------------------------

/// Generate the deduplicated search-token set for one candidate.
///
/// Covers the name conventions a catalog page may use (`"First Last"`,
/// `"Last, First"`, `"Last, F."`, `"F. Last"`) plus compacted
/// letters-only variants of each, plus every non-empty rating-tag label.
/// Tokens live only for the duration of one match call; they are never
/// persisted.
pub fn search_tokens(candidate: &TeacherCandidate) -> Vec<String> {
    let first = candidate.first_name.trim();
    let last = candidate.last_name.trim();

    let mut tokens: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    if !first.is_empty() || !last.is_empty() {
        let full_name = [first, last]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let reversed_name = [last, first]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");

        push_unique(&mut tokens, &mut seen, full_name.clone());
        push_unique(&mut tokens, &mut seen, reversed_name.clone());

        // Initial forms only make sense with both parts present.
        if !first.is_empty() && !last.is_empty() {
            let initial = format!("{}.", first.chars().next().expect("non-empty"));
            push_unique(&mut tokens, &mut seen, format!("{last}, {initial}"));
            push_unique(&mut tokens, &mut seen, format!("{initial} {last}"));
            push_unique(&mut tokens, &mut seen, naming::compact(&format!("{last}{initial}")));
        }

        push_unique(&mut tokens, &mut seen, naming::compact(&full_name));
        push_unique(&mut tokens, &mut seen, naming::compact(&reversed_name));
    }

    for tag in &candidate.teacher_rating_tags {
        push_unique(&mut tokens, &mut seen, tag.tag_name.trim().to_string());
    }

    tokens
}

fn push_unique(tokens: &mut Vec<String>, seen: &mut HashSet<String>, token: String) {
    if !token.is_empty() && seen.insert(token.clone()) {
        tokens.push(token);
    }
}

// ---------------------------------------------------------------------------
// Fuzzy scoring
// ---------------------------------------------------------------------------

/// Case-insensitive partial Levenshtein similarity in `[0.0, 1.0]`.
///
/// Scores the whole strings against each other, and additionally slides the
/// shorter string over every same-length window of the longer one, keeping
/// the best score, so `"c tantalo"` still scores 1.0 against
/// `"cormac tantalo"`.
fn partial_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (&a, &b)
    } else {
        (&b, &a)
    };

    let mut best = normalized_levenshtein(shorter, longer);

    let longer_chars: Vec<char> = longer.chars().collect();
    let window = shorter.chars().count();
    for start in 0..=(longer_chars.len() - window) {
        let slice: String = longer_chars[start..start + window].iter().collect();
        let score = normalized_levenshtein(shorter, &slice);
        if score > best {
            best = score;
        }
    }

    best
}

/// A candidate's score against one search term: its best token score.
fn candidate_score(tokens: &[String], term: &str) -> f64 {
    tokens
        .iter()
        .map(|token| partial_similarity(term, token))
        .fold(0.0, f64::max)
}

// ---------------------------------------------------------------------------
// Best-match selection
// ---------------------------------------------------------------------------

/// Select the best candidate for `query_name`, never `None` for a non-empty
/// candidate list.
///
/// Resolution order:
/// 1. an empty `query_name` trusts the upstream's own ranking and returns
///    the first candidate;
/// 2. each search term (comma-swap-normalized form first, then the raw
///    name) is fuzzy-matched against every candidate's token set; the
///    first term with any match within [`MAX_MATCH_DISTANCE`]
///    short-circuits and returns its top-scoring candidate;
/// 3. exact fallback: the compacted first term is compared against every
///    compacted token;
/// 4. final fallback: the first candidate in upstream order.
pub fn select_best<'a>(
    candidates: &'a [TeacherCandidate],
    query_name: &str,
) -> Option<&'a TeacherCandidate> {
    if candidates.is_empty() {
        return None;
    }

    let query = query_name.trim();
    if query.is_empty() {
        return Some(&candidates[0]);
    }

    let token_sets: Vec<Vec<String>> = candidates.iter().map(search_tokens).collect();

    // Normalized form first; the raw name only when it differs.
    let mut terms: Vec<String> = vec![naming::normalize_display_name(query)];
    if !terms.contains(&query.to_string()) {
        terms.push(query.to_string());
    }

    for term in &terms {
        let mut best: Option<(usize, f64)> = None;
        for (index, tokens) in token_sets.iter().enumerate() {
            let score = candidate_score(tokens, term);
            if 1.0 - score <= MAX_MATCH_DISTANCE {
                // Strictly-greater keeps the earliest candidate on ties.
                if best.is_none_or(|(_, top)| score > top) {
                    best = Some((index, score));
                }
            }
        }
        if let Some((index, _)) = best {
            return Some(&candidates[index]);
        }
    }

    // Exact comparison over compacted forms.
    let target = naming::compact(&terms[0]);
    if !target.is_empty() {
        for (index, tokens) in token_sets.iter().enumerate() {
            if tokens.iter().any(|token| naming::compact(token) == target) {
                return Some(&candidates[index]);
            }
        }
    }

    Some(&candidates[0])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratings::RatingTag;

    fn candidate(id: &str, first: &str, last: &str) -> TeacherCandidate {
        TeacherCandidate {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..TeacherCandidate::default()
        }
    }

    // -- search_tokens -------------------------------------------------------

    #[test]
    fn tokens_cover_all_name_conventions() {
        let tokens = search_tokens(&candidate("t1", "Cormac", "Tantalo"));

        assert!(tokens.contains(&"Cormac Tantalo".to_string()));
        assert!(tokens.contains(&"Tantalo, Cormac".to_string()));
        assert!(tokens.contains(&"Tantalo, C.".to_string()));
        assert!(tokens.contains(&"C. Tantalo".to_string()));
        assert!(tokens.contains(&"cormactantalo".to_string()));
        assert!(tokens.contains(&"tantalocormac".to_string()));
        assert!(tokens.contains(&"tantaloc".to_string()));
    }

    #[test]
    fn tokens_include_trimmed_tag_names() {
        let mut c = candidate("t1", "Jane", "Doe");
        c.teacher_rating_tags = vec![
            RatingTag {
                tag_name: " Tough Grader ".to_string(),
                ..RatingTag::default()
            },
            RatingTag {
                tag_name: String::new(),
                ..RatingTag::default()
            },
        ];

        let tokens = search_tokens(&c);
        assert!(tokens.contains(&"Tough Grader".to_string()));
        assert!(!tokens.contains(&String::new()));
    }

    #[test]
    fn single_name_part_yields_no_initial_forms() {
        let tokens = search_tokens(&candidate("t1", "", "Tantalo"));
        assert!(tokens.contains(&"Tantalo".to_string()));
        assert!(tokens.contains(&"tantalo".to_string()));
        assert!(!tokens.iter().any(|t| t.contains('.')));
    }

    #[test]
    fn tokens_are_deduplicated() {
        let tokens = search_tokens(&candidate("t1", "Cher", ""));
        let unique: std::collections::HashSet<_> = tokens.iter().collect();
        assert_eq!(unique.len(), tokens.len());
    }

    #[test]
    fn empty_names_yield_only_tag_tokens() {
        let mut c = candidate("t1", "", "");
        c.teacher_rating_tags = vec![RatingTag {
            tag_name: "Caring".to_string(),
            ..RatingTag::default()
        }];
        assert_eq!(search_tokens(&c), vec!["Caring".to_string()]);
    }

    // -- select_best ---------------------------------------------------------

    #[test]
    fn empty_candidate_list_returns_none() {
        assert!(select_best(&[], "TANTALO,C").is_none());
    }

    #[test]
    fn empty_query_returns_first_candidate() {
        let candidates = [candidate("c1", "Jane", "Doe"), candidate("c2", "John", "Roe")];
        let best = select_best(&candidates, "").expect("non-empty list");
        assert_eq!(best.id, "c1");
    }

    #[test]
    fn catalog_form_matches_after_comma_swap() {
        let candidates = [
            candidate("other", "Agnes", "Varda"),
            candidate("target", "Cormac", "Tantalo"),
        ];
        let best = select_best(&candidates, "TANTALO,C").expect("non-empty list");
        assert_eq!(best.id, "target");
    }

    #[test]
    fn full_name_query_matches_exactly() {
        let candidates = [
            candidate("other", "Agnes", "Varda"),
            candidate("target", "Cormac", "Tantalo"),
        ];
        let best = select_best(&candidates, "Cormac Tantalo").expect("non-empty list");
        assert_eq!(best.id, "target");
    }

    #[test]
    fn reversed_full_name_query_matches() {
        let candidates = [
            candidate("target", "Cormac", "Tantalo"),
            candidate("other", "Agnes", "Varda"),
        ];
        let best = select_best(&candidates, "Tantalo, Cormac").expect("non-empty list");
        assert_eq!(best.id, "target");
    }

    #[test]
    fn no_match_falls_back_to_first_candidate() {
        let candidates = [
            candidate("c1", "Agnes", "Varda"),
            candidate("c2", "Wong", "Kar-wai"),
        ];
        let best = select_best(&candidates, "Zzyzx Qwertyuiop").expect("non-empty list");
        assert_eq!(best.id, "c1");
    }

    #[test]
    fn selection_is_deterministic() {
        let candidates = [
            candidate("c1", "Cormac", "Tantalo"),
            candidate("c2", "Cormag", "Tantale"),
        ];
        let first = select_best(&candidates, "TANTALO,C").expect("non-empty list").id.clone();
        for _ in 0..10 {
            let again = select_best(&candidates, "TANTALO,C").expect("non-empty list");
            assert_eq!(again.id, first);
        }
    }

    #[test]
    fn short_catalog_names_resolve_to_the_right_candidate() {
        let candidates = [
            candidate("c1", "Maximiliano", "Featherstonehaugh"),
            candidate("c2", "Al", "Po"),
        ];
        let best = select_best(&candidates, "PO,AL").expect("non-empty list");
        assert_eq!(best.id, "c2");
    }
}
