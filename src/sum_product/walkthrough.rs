//! The puzzle's dialogue, one line per stage, and a cursor for stepping through it.

use crate::sum_product::solver::SolutionSteps;
use crate::sum_product::step::{Speaker, Step};
use std::fmt::Display;

/// One line of the dialogue together with the number of pairs left after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueLine {
    /// The stage the line leads into.
    pub step: Step,
    /// Who says it.
    pub speaker: Speaker,
    /// What is said.
    pub statement: &'static str,
    /// Pairs remaining once the statement is taken into account.
    pub survivors: usize,
}

impl Display for DialogueLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: \"{}\" ({} => {} left)",
            self.speaker,
            self.statement,
            self.step.rule(),
            self.survivors
        )
    }
}

/// The full dialogue for a solve.
#[must_use]
pub fn walkthrough(steps: &SolutionSteps) -> Vec<DialogueLine> {
    steps
        .stages()
        .map(|(step, set)| DialogueLine {
            step,
            speaker: step.speaker(),
            statement: step.statement(),
            survivors: set.len(),
        })
        .collect()
}

/// Position within the dialogue, confined to `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepCursor {
    current: Step,
}

impl StepCursor {
    /// A cursor at the initial stage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Step::Initial,
        }
    }

    /// A cursor at `index`, saturating at the last stage.
    #[must_use]
    pub fn at(index: usize) -> Self {
        Self {
            current: Step::from_index(index.min(Step::LAST)).unwrap_or(Step::SumKnows),
        }
    }

    /// The stage under the cursor.
    #[must_use]
    pub const fn current(&self) -> Step {
        self.current
    }

    /// Moves forward one stage; stays put at the last one.
    pub fn next(&mut self) -> Step {
        self.current = self.current.next().unwrap_or(self.current);
        self.current
    }

    /// Moves back one stage; stays put at the first one.
    pub fn back(&mut self) -> Step {
        self.current = self.current.previous().unwrap_or(self.current);
        self.current
    }

    /// Returns to the initial stage.
    pub fn reset(&mut self) {
        self.current = Step::Initial;
    }

    /// Whether [`StepCursor::back`] would move.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.current != Step::Initial
    }

    /// Whether [`StepCursor::next`] would move.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.current != Step::SumKnows
    }
}

impl Display for StepCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {} / {}", self.current.index(), Step::LAST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum_product::solver::solve;

    #[test]
    fn test_walkthrough_counts() {
        let steps = solve(20);
        let lines = walkthrough(&steps);

        assert_eq!(lines.len(), 5);
        let survivors: Vec<usize> = lines.iter().map(|l| l.survivors).collect();
        assert_eq!(survivors, vec![190, 80, 4, 4, 0]);
        assert_eq!(lines[1].speaker, Speaker::MrP);
        assert_eq!(lines[2].statement, Step::SumKnew.statement());
    }

    #[test]
    fn test_dialogue_line_display() {
        let lines = walkthrough(&solve(20));
        assert_eq!(
            lines[1].to_string(),
            "Mr. P (Product): \"I don't know the two numbers.\" \
             (the product has more than one decomposition => 80 left)"
        );
    }

    #[test]
    fn test_cursor_saturates() {
        let mut cursor = StepCursor::new();
        assert!(!cursor.can_go_back());
        assert_eq!(cursor.back(), Step::Initial);

        for _ in 0..10 {
            cursor.next();
        }
        assert_eq!(cursor.current(), Step::SumKnows);
        assert!(!cursor.can_go_next());
        assert_eq!(cursor.to_string(), "Step 4 / 4");

        assert_eq!(cursor.back(), Step::ProductKnows);
        cursor.reset();
        assert_eq!(cursor, StepCursor::default());
    }

    #[test]
    fn test_cursor_at() {
        assert_eq!(StepCursor::at(2).current(), Step::SumKnew);
        assert_eq!(StepCursor::at(99).current(), Step::SumKnows);
    }
}
