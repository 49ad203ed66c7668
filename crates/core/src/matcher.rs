//! Query-to-candidate similarity scoring and ranking.

use std::cmp::Ordering as CmpOrdering;

/// Minimum score a match must reach to be displayed for a non-empty query.
pub const SCORE_CUTOFF: u16 = 30;

/// Upper bound of the similarity scale.
pub const SCORE_MAX: u16 = 100;

/// A scored candidate, addressed by its position in the input list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RankedEntry {
	/// Index of the candidate in the original input list.
	pub index: usize,
	/// Similarity to the query on the 0–100 scale.
	pub score: u16,
}

// Sorted order is display order: descending score, ties by input position.
impl Ord for RankedEntry {
	fn cmp(&self, other: &Self) -> CmpOrdering {
		other
			.score
			.cmp(&self.score)
			.then_with(|| self.index.cmp(&other.index))
	}
}

impl PartialOrd for RankedEntry {
	fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
		Some(self.cmp(other))
	}
}

/// Lowercase the text and rejoin its whitespace-separated tokens in sorted
/// order, so token order never affects the score.
fn token_sort_key(text: &str) -> String {
	let lowered = text.to_lowercase();
	let mut tokens: Vec<&str> = lowered.split_whitespace().collect();
	tokens.sort_unstable();
	tokens.join(" ")
}

/// Token-sort similarity between `query` and `candidate` on a 0–100 scale.
///
/// Both sides are case-normalized and token-sorted before the edit-distance
/// ratio is taken, so `"main src"` scores against `"src main"` as an exact
/// match. Deterministic for every input, including empty strings.
#[must_use]
pub fn similarity(query: &str, candidate: &str) -> u16 {
	let a = token_sort_key(query);
	let b = token_sort_key(candidate);
	let ratio = strsim::normalized_levenshtein(&a, &b);
	(ratio * f64::from(SCORE_MAX)).round() as u16
}

/// Score every candidate against `query` and return the full ranked list.
///
/// An empty query returns the candidates in input order with a nominal score
/// of zero; display logic treats those entries as always eligible. A
/// non-empty query scores every entry and sorts descending by score, ties
/// broken by input order. Duplicate candidates rank as independent entries.
#[must_use]
pub fn rank(query: &str, candidates: &[String]) -> Vec<RankedEntry> {
	if query.is_empty() {
		return (0..candidates.len())
			.map(|index| RankedEntry { index, score: 0 })
			.collect();
	}

	let mut ranked: Vec<RankedEntry> = candidates
		.iter()
		.enumerate()
		.map(|(index, candidate)| RankedEntry {
			index,
			score: similarity(query, candidate),
		})
		.collect();
	ranked.sort_unstable();
	ranked
}
