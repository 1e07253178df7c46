//! A text grid of which pairs are still alive at a given stage.
//!
//! Rows are `x`, columns are `y`, both running `2..=max`. Only the upper
//! triangle (`x <= y`) holds pairs; the rest is left blank.

use crate::sum_product::bounds::MIN_COMPONENT;
use crate::sum_product::candidate::PairId;
use crate::sum_product::solver::SolutionSteps;
use crate::sum_product::step::Step;
use rustc_hash::FxHashSet;
use std::fmt::Display;

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Below the diagonal; no pair lives here.
    Blank,
    /// A pair already ruled out.
    Eliminated,
    /// A pair still consistent with the dialogue so far.
    Active,
    /// A pair that survives all four statements, shown at the last stage.
    Solution,
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, " "),
            Self::Eliminated => write!(f, "."),
            Self::Active => write!(f, "O"),
            Self::Solution => write!(f, "*"),
        }
    }
}

/// Survival grid for one stage of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurvivalGrid {
    max: u32,
    step: Step,
    cells: Vec<Vec<Cell>>,
}

impl SurvivalGrid {
    /// Builds the grid for `step`.
    #[must_use]
    pub fn new(steps: &SolutionSteps, step: Step) -> Self {
        let max = steps.max();
        let active = steps.stage(step).ids();
        let solutions: FxHashSet<PairId> = if step == Step::SumKnows {
            steps.step4.ids()
        } else {
            FxHashSet::default()
        };

        let cells = (MIN_COMPONENT..=max)
            .map(|x| {
                (MIN_COMPONENT..=max)
                    .map(|y| {
                        let id = PairId::new(x, y);
                        if x > y {
                            Cell::Blank
                        } else if solutions.contains(&id) {
                            Cell::Solution
                        } else if active.contains(&id) {
                            Cell::Active
                        } else {
                            Cell::Eliminated
                        }
                    })
                    .collect()
            })
            .collect();

        Self { max, step, cells }
    }

    /// The stage shown.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Cell for the pair `(x, y)`, or `None` outside `2..=max`.
    #[must_use]
    pub fn cell(&self, x: u32, y: u32) -> Option<Cell> {
        let row = x.checked_sub(MIN_COMPONENT)? as usize;
        let col = y.checked_sub(MIN_COMPONENT)? as usize;
        self.cells.get(row)?.get(col).copied()
    }

    /// Number of active or solution cells.
    #[must_use]
    pub fn alive(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Cell::Active | Cell::Solution))
            .count()
    }
}

impl Display for SurvivalGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X\\Y")?;
        for y in MIN_COMPONENT..=self.max {
            write!(f, "{y:>3}")?;
        }
        writeln!(f)?;

        for (x, row) in (MIN_COMPONENT..=self.max).zip(&self.cells) {
            write!(f, "{x:>3}")?;
            for cell in row {
                write!(f, "{:>3}", cell.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
