//! Generation of the candidate universe and the four filtering rounds.
//!
//! Each round corresponds to one public statement in the puzzle's dialogue:
//!
//! 1. Mr. P: "I don't know the numbers."
//! 2. Mr. S: "I knew you didn't."
//! 3. Mr. P: "Now I know them."
//! 4. Mr. S: "Now I know them too."
//!
//! Every round is a pure function from candidate sets to a new candidate set.
//! Order within a set is the order of the universe: increasing `x`, then
//! increasing `y`.

use crate::sum_product::bounds::{MIN_COMPONENT, clamp_max};
use crate::sum_product::candidate::{CandidateSet, Pair};
use crate::sum_product::multiplicity::{Multiplicity, Statistic};
use rustc_hash::FxHashSet;

/// Enumerates every pair `2 <= x <= y <= max`.
///
/// `max` is clamped into `[MIN_RANGE_LIMIT, MAX_RANGE_LIMIT]` first, so this
/// never fails.
#[must_use]
pub fn generate(max: i64) -> CandidateSet {
    let max = clamp_max(max);
    (MIN_COMPONENT..=max)
        .flat_map(|x| (x..=max).map(move |y| Pair::new(x, y)))
        .collect()
}

/// Round 1, "Mr. P does not know".
///
/// Someone told only the product can name the pair exactly when one pair in
/// the population has that product. Keeps the pairs whose product is shared
/// by at least two pairs of `candidates`.
///
/// `candidates` should be the whole universe: the multiplicity is a property
/// of the product over every possible pair.
#[must_use]
pub fn filter_step1(candidates: &CandidateSet) -> CandidateSet {
    let products = Multiplicity::count(Statistic::Product, candidates);
    candidates.retain_by(|pair| products.is_shared(pair))
}

/// Round 2, "Mr. S knew that Mr. P could not know".
///
/// A sum is dangerous when some pair of `all_candidates` with that sum is
/// missing from `step1_candidates`: that decomposition would have let Mr. P
/// name the pair at once. Keeps the pairs of `step1_candidates` whose sum is
/// not dangerous.
///
/// Danger comes from comparing the full universe with the round 1 survivors.
/// Counting sums over `step1_candidates` alone would miss every decomposition
/// that round 1 already removed.
#[must_use]
pub fn filter_step2(all_candidates: &CandidateSet, step1_candidates: &CandidateSet) -> CandidateSet {
    let dangerous = dangerous_sums(all_candidates, step1_candidates);
    tracing::trace!(dangerous = ?sorted(&dangerous), "dangerous sums");
    step1_candidates.retain_by(|pair| !dangerous.contains(&pair.sum))
}

/// Sums of the pairs in `all_candidates` that did not survive into `step1_candidates`.
#[must_use]
pub fn dangerous_sums(
    all_candidates: &CandidateSet,
    step1_candidates: &CandidateSet,
) -> FxHashSet<u32> {
    let survivors = step1_candidates.ids();
    all_candidates
        .iter()
        .filter(|pair| !survivors.contains(&pair.id()))
        .map(|pair| pair.sum)
        .collect()
}

/// Round 3, "Mr. P now knows".
///
/// Keeps the pairs whose product belongs to exactly one pair of `step2_candidates`.
#[must_use]
pub fn filter_step3(step2_candidates: &CandidateSet) -> CandidateSet {
    let products = Multiplicity::count(Statistic::Product, step2_candidates);
    step2_candidates.retain_by(|pair| products.is_unique(pair))
}

/// Round 4, "Mr. S now knows too".
///
/// Keeps the pairs whose sum belongs to exactly one pair of `step3_candidates`.
#[must_use]
pub fn filter_step4(step3_candidates: &CandidateSet) -> CandidateSet {
    let sums = Multiplicity::count(Statistic::Sum, step3_candidates);
    step3_candidates.retain_by(|pair| sums.is_unique(pair))
}

fn sorted(values: &FxHashSet<u32>) -> Vec<u32> {
    let mut values: Vec<u32> = values.iter().copied().collect();
    values.sort_unstable();
    values
}
