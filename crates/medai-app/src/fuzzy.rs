//! Fuzzy string matching for the command palette
//!
//! A query matches when its characters appear in order (case-insensitive)
//! in the label. Every substring match is therefore also a fuzzy match.

/// Match result with score for sorting
#[derive(Debug, Clone)]
struct FuzzyMatch {
    index: usize,
    score: i32,
}

/// Fuzzy-filter a list of labels
///
/// Returns indices of matching items, best score first; ties keep input order.
pub fn fuzzy_filter<S: AsRef<str>>(query: &str, items: &[S]) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let query_chars: Vec<char> = query.to_lowercase().chars().collect();

    let mut matches: Vec<FuzzyMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            fuzzy_score(&query_chars, &item.as_ref().to_lowercase())
                .map(|score| FuzzyMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));

    matches.into_iter().map(|m| m.index).collect()
}

/// Score a lowercase target against lowercase query chars
///
/// Scoring:
/// - Base points for each matched character
/// - Bonus for consecutive matches
/// - Bonus for matches at word boundaries
/// - Bonus for a prefix match
/// - Small penalty for long targets
pub fn fuzzy_score(query: &[char], target: &str) -> Option<i32> {
    if query.is_empty() {
        return Some(0);
    }

    let target_chars: Vec<char> = target.chars().collect();
    if target_chars.is_empty() {
        return None;
    }

    let mut score: i32 = 0;
    let mut query_idx = 0;
    let mut prev_match_idx: Option<usize> = None;
    let mut first_match_idx: Option<usize> = None;

    for (target_idx, &target_char) in target_chars.iter().enumerate() {
        if query_idx >= query.len() {
            break;
        }
        if target_char != query[query_idx] {
            continue;
        }

        score += 10;
        first_match_idx.get_or_insert(target_idx);

        if prev_match_idx.is_some_and(|prev| target_idx == prev + 1) {
            score += 15;
        }

        if target_idx == 0 || !target_chars[target_idx - 1].is_alphanumeric() {
            score += 10;
        }

        prev_match_idx = Some(target_idx);
        query_idx += 1;
    }

    if query_idx < query.len() {
        return None;
    }

    if first_match_idx == Some(0) {
        score += 20;
    }

    score -= (target_chars.len() as i32) / 5;

    Some(score)
}
