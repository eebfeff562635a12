//! Title-based deduplication of candidate recommendations.
//!
//! Two recommendations are duplicates when the Jaccard similarity of their
//! title word sets exceeds a threshold. The title is the only key: services,
//! savings and descriptions are ignored.

use super::types::Recommendation;
use std::collections::HashSet;

/// Lowercase and trim a title.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

fn word_set(title: &str) -> HashSet<&str> {
    title.split_whitespace().collect()
}

/// Jaccard similarity of the word sets of two normalized titles.
///
/// Returns 0.0 when both titles are empty.
pub fn title_similarity(a: &str, b: &str) -> f64 {
    let a = word_set(a);
    let b = word_set(b);

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

/// Drop recommendations whose title is too similar to an earlier one.
///
/// Input order decides which of two duplicates survives: the first one seen.
pub fn deduplicate<T>(candidates: Vec<T>, threshold: f64) -> Vec<T>
where
    T: AsRef<Recommendation>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut unique = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let title = normalize_title(&candidate.as_ref().title);
        if let Some(existing) = seen
            .iter()
            .find(|existing| title_similarity(&title, existing) > threshold)
        {
            log::debug!(
                "Dropping duplicate recommendation '{}' (similar to '{}')",
                candidate.as_ref().title,
                existing
            );
            continue;
        }
        seen.push(title);
        unique.push(candidate);
    }

    unique
}
