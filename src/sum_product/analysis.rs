//! Explaining and checking a finished solve.
//!
//! - [`trace`] follows one pair through the pipeline and reports the stage
//!   that removed it.
//! - [`sum_breakdown`] lists every decomposition of a sum with the product
//!   information Mr. S has to reason about in round 2.
//! - [`verify`] re-derives the laws every round must obey and checks a
//!   [`SolutionSteps`] against them.

use crate::sum_product::bounds::pair_count;
use crate::sum_product::candidate::{CandidateSet, Pair, PairId};
use crate::sum_product::error::InvariantViolation;
use crate::sum_product::filter::dangerous_sums;
use crate::sum_product::multiplicity::{Multiplicity, Statistic};
use crate::sum_product::solver::SolutionSteps;
use crate::sum_product::step::Step;
use bit_vec::BitVec;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt::Display;

/// Where a single pair survives in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTrace {
    /// The pair being followed.
    pub pair: Pair,
    membership: BitVec,
}

impl PairTrace {
    /// Whether the pair is present at `step`.
    #[must_use]
    pub fn survives(&self, step: Step) -> bool {
        self.membership.get(step.index()).unwrap_or(false)
    }

    /// First stage the pair is missing from, or `None` if it reaches the end.
    #[must_use]
    pub fn eliminated_at(&self) -> Option<Step> {
        Step::ALL.into_iter().find(|&step| !self.survives(step))
    }
}

impl Display for PairTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "({}, {}) status:", self.pair.x, self.pair.y)?;
        for step in Step::ALL {
            writeln!(f, "- {step}: {}", self.survives(step))?;
        }
        Ok(())
    }
}

/// Follows the pair `id` through every stage of `steps`.
///
/// Returns `None` if the pair is not in the universe at all.
#[must_use]
pub fn trace(steps: &SolutionSteps, id: PairId) -> Option<PairTrace> {
    let pair = *steps.initial.find(id)?;
    let membership = Step::ALL
        .into_iter()
        .map(|step| steps.stage(step).contains(id))
        .collect();
    Some(PairTrace { pair, membership })
}

/// One way of writing a sum as `x + y`, seen from round 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    /// The pair.
    pub pair: Pair,
    /// How many pairs in the universe share its product.
    pub product_count: usize,
    /// Whether it survived "Mr. P does not know".
    pub passed_step1: bool,
}

/// Every decomposition of one sum within the universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumBreakdown {
    /// The sum being broken down.
    pub sum: u32,
    /// Its decompositions in universe order.
    pub decompositions: SmallVec<[Decomposition; 8]>,
}

impl SumBreakdown {
    /// Whether any decomposition was removed in round 1, which rules the sum
    /// out in round 2.
    #[must_use]
    pub fn is_dangerous(&self) -> bool {
        self.decompositions.iter().any(|d| !d.passed_step1)
    }

    /// Decompositions whose product would have given the pair away.
    pub fn revealing(&self) -> impl Iterator<Item = &Decomposition> {
        self.decompositions.iter().filter(|d| !d.passed_step1)
    }
}

impl Display for SumBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Candidates with Sum={} ({}):",
            self.sum,
            self.decompositions.len()
        )?;
        for d in &self.decompositions {
            writeln!(
                f,
                "- ({}, {}) P={} Count={} => Passed Step 1? {}",
                d.pair.x, d.pair.y, d.pair.product, d.product_count, d.passed_step1
            )?;
        }
        Ok(())
    }
}

/// Lists the decompositions of `sum` in the universe of `steps`.
#[must_use]
pub fn sum_breakdown(steps: &SolutionSteps, sum: u32) -> SumBreakdown {
    let products = Multiplicity::count(Statistic::Product, &steps.initial);
    let survivors = steps.step1.ids();

    let decompositions = steps
        .initial
        .iter()
        .filter(|pair| pair.sum == sum)
        .map(|&pair| Decomposition {
            pair,
            product_count: products.of(&pair),
            passed_step1: survivors.contains(&pair.id()),
        })
        .collect();

    SumBreakdown {
        sum,
        decompositions,
    }
}

/// Checks `steps` against the laws of the pipeline.
///
/// # Errors
///
/// Returns the first [`InvariantViolation`] found.
pub fn verify(steps: &SolutionSteps) -> Result<(), InvariantViolation> {
    let expected = pair_count(steps.max());
    if steps.initial.len() != expected {
        return Err(InvariantViolation::InitialSize {
            expected,
            actual: steps.initial.len(),
        });
    }

    for (_, set) in steps.stages() {
        if let Some(id) = set.iter().map(Pair::id).duplicates().next() {
            return Err(InvariantViolation::DuplicateId(id));
        }
    }

    for (previous, current) in steps.stages().map(|(_, set)| set).tuple_windows() {
        let allowed = previous.ids();
        if let Some(pair) = current.iter().find(|pair| !allowed.contains(&pair.id())) {
            let stage = steps
                .stages()
                .position(|(_, set)| std::ptr::eq(set, current))
                .unwrap_or(Step::LAST);
            return Err(InvariantViolation::NotSubset {
                id: pair.id(),
                stage,
            });
        }
    }

    let products = Multiplicity::count(Statistic::Product, &steps.initial);
    check_law(&steps.initial, &steps.step1, |pair| products.is_shared(pair))
        .map_err(InvariantViolation::ProductUnknown)?;

    let dangerous: FxHashSet<u32> = dangerous_sums(&steps.initial, &steps.step1);
    check_law(&steps.step1, &steps.step2, |pair| !dangerous.contains(&pair.sum))
        .map_err(InvariantViolation::SumKnew)?;

    let products = Multiplicity::count(Statistic::Product, &steps.step2);
    check_law(&steps.step2, &steps.step3, |pair| products.is_unique(pair))
        .map_err(InvariantViolation::ProductKnows)?;

    let sums = Multiplicity::count(Statistic::Sum, &steps.step3);
    check_law(&steps.step3, &steps.step4, |pair| sums.is_unique(pair))
        .map_err(InvariantViolation::SumKnows)?;

    Ok(())
}

/// A pair of `before` must be in `after` exactly when `law` holds for it.
fn check_law<F: Fn(&Pair) -> bool>(
    before: &CandidateSet,
    after: &CandidateSet,
    law: F,
) -> Result<(), PairId> {
    let kept = after.ids();
    match before
        .iter()
        .find(|pair| law(pair) != kept.contains(&pair.id()))
    {
        Some(pair) => Err(pair.id()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum_product::solver::solve;

    #[test]
    fn test_trace_two_six() {
        let steps = solve(20);
        let trace = trace(&steps, PairId::new(2, 6)).unwrap();

        assert!(trace.survives(Step::Initial));
        assert!(trace.survives(Step::ProductUnknown));
        assert!(!trace.survives(Step::SumKnew));
        assert_eq!(trace.eliminated_at(), Some(Step::SumKnew));
    }

    #[test]
    fn test_trace_unknown_pair() {
        let steps = solve(10);
        assert!(trace(&steps, PairId::new(2, 11)).is_none());
        assert!(trace(&steps, PairId::new(1, 3)).is_none());
    }

    #[test]
    fn test_trace_unique_product_fails_first_round() {
        let steps = solve(20);
        let trace = trace(&steps, PairId::new(3, 5)).unwrap();
        assert_eq!(trace.eliminated_at(), Some(Step::ProductUnknown));
    }

    #[test]
    fn test_trace_display() {
        let steps = solve(20);
        let text = trace(&steps, PairId::new(2, 6)).unwrap().to_string();
        assert!(text.starts_with("(2, 6) status:"));
        assert!(text.contains("- step 2 (S knew P unknown): false"));
    }

    #[test]
    fn test_sum_breakdown_eight() {
        let steps = solve(20);
        let breakdown = sum_breakdown(&steps, 8);

        let pairs: Vec<(u32, u32)> = breakdown
            .decompositions
            .iter()
            .map(|d| (d.pair.x, d.pair.y))
            .collect();
        assert_eq!(pairs, vec![(2, 6), (3, 5), (4, 4)]);
        assert!(breakdown.is_dangerous());

        let revealing: Vec<u32> = breakdown.revealing().map(|d| d.pair.product).collect();
        assert_eq!(revealing, vec![15]);

        let two_six = breakdown.decompositions[0];
        assert_eq!(two_six.product_count, 2);
        assert!(two_six.passed_step1);
    }

    #[test]
    fn test_sum_breakdown_eleven_is_safe() {
        let steps = solve(20);
        let breakdown = sum_breakdown(&steps, 11);
        assert_eq!(breakdown.decompositions.len(), 4);
        assert!(!breakdown.is_dangerous());
        assert_eq!(breakdown.revealing().count(), 0);
    }

    #[test]
    fn test_sum_breakdown_out_of_range() {
        let steps = solve(5);
        assert!(sum_breakdown(&steps, 3).decompositions.is_empty());
        assert!(!sum_breakdown(&steps, 99).is_dangerous());
    }

    #[test]
    fn test_verify_accepts_every_bound() {
        for max in 5..=20 {
            assert_eq!(verify(&solve(max)), Ok(()), "max = {max}");
        }
    }

    #[test]
    fn test_verify_detects_wrong_step2() {
        let mut steps = solve(20);
        steps.step2 = steps.step1.clone();
        steps.step3 = CandidateSet::default();
        steps.step4 = CandidateSet::default();
        assert!(matches!(
            verify(&steps),
            Err(InvariantViolation::SumKnew(_))
        ));
    }

    #[test]
    fn test_verify_detects_non_subset() {
        let mut steps = solve(20);
        steps.step4 = [Pair::new(4, 13)].into_iter().collect();
        assert_eq!(
            verify(&steps),
            Err(InvariantViolation::NotSubset {
                id: PairId::new(4, 13),
                stage: 4,
            })
        );
    }

    #[test]
    fn test_verify_detects_duplicates() {
        let mut steps = solve(20);
        let doubled: Vec<Pair> = steps.step3.iter().chain(steps.step3.iter()).copied().collect();
        steps.step3 = doubled.into();
        assert!(matches!(
            verify(&steps),
            Err(InvariantViolation::DuplicateId(_))
        ));
    }
}
