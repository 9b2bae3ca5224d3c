use strsim::jaro_winkler;

use crate::constants::SUGGESTION_THRESHOLD;

/// Find the candidate closest to `target` by case-insensitive Jaro-Winkler
/// similarity, if any scores above [`SUGGESTION_THRESHOLD`].
///
/// Ties keep the first candidate in iteration order.
pub fn closest_name<'a, I>(target: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let target = target.to_lowercase();
    let mut best: Option<(&String, f64)> = None;

    for candidate in candidates {
        let score = jaro_winkler(&candidate.to_lowercase(), &target);
        if score > SUGGESTION_THRESHOLD && best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    best.map(|(candidate, _)| candidate.clone())
}
