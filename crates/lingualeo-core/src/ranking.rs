//! Translation ranking
//!
//! Turns the unranked candidate list of one word into the final ordered list
//! of translation strings:
//!
//! 1. Composite entries (several translations joined with `"; "`) are dropped;
//!    the service lists their parts as separate candidates anyway.
//! 2. The remaining candidates are stably sorted by vote count, highest
//!    first. Ties keep payload order.
//! 3. Values are extracted. Duplicate values are not collapsed.

use crate::types::TranslationCandidate;

/// Separator the service uses to join several translations into one entry
pub const COMPOSITE_SEPARATOR: &str = "; ";

/// Whether a candidate restates several simpler translations
pub fn is_composite(value: &str) -> bool {
    value.contains(COMPOSITE_SEPARATOR)
}

/// Rank candidates into the final translation list
pub fn rank_translations(candidates: Vec<TranslationCandidate>) -> Vec<String> {
    let mut kept: Vec<TranslationCandidate> = candidates
        .into_iter()
        .filter(|c| !is_composite(&c.value))
        .collect();

    // `sort_by` is stable, so equal vote counts keep their relative order.
    kept.sort_by(|a, b| b.votes.cmp(&a.votes));

    kept.into_iter().map(|c| c.value).collect()
}
