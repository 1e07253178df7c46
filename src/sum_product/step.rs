//! The five stages of a solve and who speaks at each of them.

use std::fmt::Display;

/// A stage in the deduction pipeline.
///
/// The pipeline is strictly linear: `Initial -> ProductUnknown -> SumKnew ->
/// ProductKnows -> SumKnows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    /// Every pair in range, before anyone speaks.
    #[default]
    Initial,
    /// After Mr. P says he does not know.
    ProductUnknown,
    /// After Mr. S says he knew Mr. P could not know.
    SumKnew,
    /// After Mr. P says he now knows.
    ProductKnows,
    /// After Mr. S says he now knows too.
    SumKnows,
}

/// Who makes the statement that leads into a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    /// The narrator setting up the puzzle.
    System,
    /// The product-holder.
    MrP,
    /// The sum-holder.
    MrS,
}

impl Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "System"),
            Self::MrP => write!(f, "Mr. P (Product)"),
            Self::MrS => write!(f, "Mr. S (Sum)"),
        }
    }
}

impl Step {
    /// All stages in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Initial,
        Self::ProductUnknown,
        Self::SumKnew,
        Self::ProductKnows,
        Self::SumKnows,
    ];

    /// Index of the last stage.
    pub const LAST: usize = 4;

    /// Position in the pipeline, `0..=4`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stage at a pipeline position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Initial),
            1 => Some(Self::ProductUnknown),
            2 => Some(Self::SumKnew),
            3 => Some(Self::ProductKnows),
            4 => Some(Self::SumKnows),
            _ => None,
        }
    }

    /// The following stage, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding stage, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(index) => Self::from_index(index),
            None => None,
        }
    }

    /// Who speaks.
    #[must_use]
    pub const fn speaker(self) -> Speaker {
        match self {
            Self::Initial => Speaker::System,
            Self::ProductUnknown | Self::ProductKnows => Speaker::MrP,
            Self::SumKnew | Self::SumKnows => Speaker::MrS,
        }
    }

    /// What the speaker says.
    #[must_use]
    pub const fn statement(self) -> &'static str {
        match self {
            Self::Initial => "Two integers x <= y are picked from the range.",
            Self::ProductUnknown => "I don't know the two numbers.",
            Self::SumKnew => "I already knew that you didn't know.",
            Self::ProductKnows => "Now I know the two numbers.",
            Self::SumKnows => "Then I know them too.",
        }
    }

    /// The reasoning that the statement adds to the candidate set.
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Initial => "every pair 2 <= x <= y <= max",
            Self::ProductUnknown => "the product has more than one decomposition",
            Self::SumKnew => "every decomposition of the sum has an ambiguous product",
            Self::ProductKnows => "the product is unique among the remaining pairs",
            Self::SumKnows => "the sum is unique among the remaining pairs",
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::ProductUnknown => write!(f, "step 1 (P unknown)"),
            Self::SumKnew => write!(f, "step 2 (S knew P unknown)"),
            Self::ProductKnows => write!(f, "step 3 (P knows)"),
            Self::SumKnows => write!(f, "step 4 (S knows)"),
        }
    }
}
