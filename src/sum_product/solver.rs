//! Runs the full deduction pipeline for one bound.

use crate::sum_product::bounds::{DEFAULT_MAX, RangePolicy, clamp_max};
use crate::sum_product::candidate::{CandidateSet, Pair};
use crate::sum_product::error::SolveError;
use crate::sum_product::filter::{filter_step1, filter_step2, filter_step3, filter_step4, generate};
use crate::sum_product::step::Step;
use std::fmt::Display;
use std::ops::Index;

/// The candidate set after every stage of one solve.
///
/// Each set is a subset, by id, of the one before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSteps {
    max: u32,
    /// Every pair in range.
    pub initial: CandidateSet,
    /// Survivors of "Mr. P does not know".
    pub step1: CandidateSet,
    /// Survivors of "Mr. S knew Mr. P could not know".
    pub step2: CandidateSet,
    /// Survivors of "Mr. P now knows".
    pub step3: CandidateSet,
    /// Survivors of "Mr. S now knows too".
    pub step4: CandidateSet,
}

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly one pair survives every statement.
    Unique(Pair),
    /// No pair is consistent with the whole dialogue.
    NoSolution,
    /// More than one pair survives; holds how many.
    Ambiguous(usize),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unique(pair) => write!(f, "SOLVED ({}, {})", pair.x, pair.y),
            Self::NoSolution => write!(f, "NO SOLUTION"),
            Self::Ambiguous(n) => write!(f, "AMBIGUOUS ({n} pairs)"),
        }
    }
}

impl SolutionSteps {
    /// The bound the pipeline actually ran with, after clamping.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// The candidate set at `step`.
    #[must_use]
    pub const fn stage(&self, step: Step) -> &CandidateSet {
        match step {
            Step::Initial => &self.initial,
            Step::ProductUnknown => &self.step1,
            Step::SumKnew => &self.step2,
            Step::ProductKnows => &self.step3,
            Step::SumKnows => &self.step4,
        }
    }

    /// Every stage paired with its candidate set, in pipeline order.
    pub fn stages(&self) -> impl Iterator<Item = (Step, &CandidateSet)> {
        Step::ALL.into_iter().map(|step| (step, self.stage(step)))
    }

    /// Survivor counts for each stage, in pipeline order.
    #[must_use]
    pub fn counts(&self) -> [usize; 5] {
        Step::ALL.map(|step| self.stage(step).len())
    }

    /// Classifies the final stage.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.step4.as_slice() {
            [] => Outcome::NoSolution,
            [pair] => Outcome::Unique(*pair),
            pairs => Outcome::Ambiguous(pairs.len()),
        }
    }
}

impl Index<Step> for SolutionSteps {
    type Output = CandidateSet;

    fn index(&self, step: Step) -> &Self::Output {
        self.stage(step)
    }
}

impl Default for SolutionSteps {
    fn default() -> Self {
        solve(i64::from(DEFAULT_MAX))
    }
}

/// Runs all four rounds for the pairs up to `max`.
///
/// `max` is clamped into `[MIN_RANGE_LIMIT, MAX_RANGE_LIMIT]`. An empty or
/// multi-pair final stage is a valid result, not an error.
#[must_use]
pub fn solve(max: i64) -> SolutionSteps {
    let max = clamp_max(max);

    let initial = generate(i64::from(max));
    let step1 = filter_step1(&initial);
    // needs the whole universe, not only the round 1 survivors
    let step2 = filter_step2(&initial, &step1);
    let step3 = filter_step3(&step2);
    let step4 = filter_step4(&step3);

    let steps = SolutionSteps {
        max,
        initial,
        step1,
        step2,
        step3,
        step4,
    };

    for (step, set) in steps.stages() {
        tracing::debug!(max, %step, survivors = set.len(), "filtering round");
    }

    steps
}

/// Runs the pipeline after validating `max` with `policy`.
///
/// # Errors
///
/// Returns [`SolveError::OutOfRange`] when `policy` is [`RangePolicy::Reject`]
/// and `max` lies outside the supported range.
pub fn try_solve(max: i64, policy: RangePolicy) -> Result<SolutionSteps, SolveError> {
    let max = policy.apply(max)?;
    Ok(solve(i64::from(max)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum_product::candidate::PairId;

    #[test]
    fn test_solve_twenty() {
        let steps = solve(20);

        assert_eq!(steps.max(), 20);
        assert_eq!(steps.counts(), [190, 80, 4, 4, 0]);
        assert_eq!(steps.step3, steps.step2);
        assert_eq!(steps.outcome(), Outcome::NoSolution);
    }

    #[test]
    fn test_regression_probe_two_six() {
        let steps = solve(20);
        let id = PairId::new(2, 6);

        assert!(steps.initial.contains(id));
        assert!(steps.step1.contains(id));
        assert!(!steps.step2.contains(id));
        assert!(!steps.step3.contains(id));
        assert!(!steps.step4.contains(id));
    }

    #[test]
    fn test_solve_minimum_range() {
        let steps = solve(5);
        assert_eq!(steps.counts(), [10, 0, 0, 0, 0]);
        assert_eq!(steps.outcome(), Outcome::NoSolution);
    }

    #[test]
    fn test_solve_clamps() {
        assert_eq!(solve(3), solve(5));
        assert_eq!(solve(64).max(), 20);
    }

    #[test]
    fn test_try_solve_policies() {
        assert_eq!(try_solve(64, RangePolicy::Clamp).map(|s| s.max()), Ok(20));
        assert!(matches!(
            try_solve(64, RangePolicy::Reject),
            Err(SolveError::OutOfRange { requested: 64, .. })
        ));
        assert_eq!(try_solve(14, RangePolicy::Reject).map(|s| s.max()), Ok(14));
    }

    #[test]
    fn test_stage_lookup() {
        let steps = solve(14);
        assert_eq!(&steps[Step::SumKnew], &steps.step2);
        assert_eq!(steps.stage(Step::Initial).len(), 91);
        assert_eq!(steps.stages().count(), 5);
    }

    #[test]
    fn test_outcome_classification() {
        let mut steps = solve(20);
        steps.step4 = [Pair::new(4, 13)].into_iter().collect();
        assert_eq!(steps.outcome(), Outcome::Unique(Pair::new(4, 13)));

        steps.step4 = steps.step3.clone();
        assert_eq!(steps.outcome(), Outcome::Ambiguous(4));
        assert_eq!(steps.outcome().to_string(), "AMBIGUOUS (4 pairs)");
    }

    #[test]
    fn test_default_uses_default_max() {
        assert_eq!(SolutionSteps::default().max(), DEFAULT_MAX);
    }
}
