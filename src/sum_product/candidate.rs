//! Candidate pairs and the ordered sets the filtering rounds pass between them.

use crate::sum_product::error::ParseError;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::fmt::Display;
use std::str::FromStr;

/// Key identifying a pair within a generated set.
///
/// Rendered and parsed as `"x-y"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId {
    /// Smaller component.
    pub x: u32,
    /// Larger component.
    pub y: u32,
}

impl PairId {
    /// Creates a new id. The caller is responsible for `x <= y`.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

impl FromStr for PairId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| ParseError::Malformed(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidNumber(part.to_string()))
        };
        let (x, y) = (parse(x)?, parse(y)?);

        if x > y {
            return Err(ParseError::Unordered { x, y });
        }
        Ok(Self::new(x, y))
    }
}

/// One possible hidden answer: two integers `x <= y` with their derived sum and product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    /// Smaller component.
    pub x: u32,
    /// Larger component.
    pub y: u32,
    /// `x + y`, the value told to the sum-holder.
    pub sum: u32,
    /// `x * y`, the value told to the product-holder.
    pub product: u32,
}

impl Pair {
    /// Builds a pair, ordering the components so that `x <= y`.
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Self {
        let (x, y) = if a <= b { (a, b) } else { (b, a) };
        Self {
            x,
            y,
            sum: x + y,
            product: x * y,
        }
    }

    /// The pair's key.
    #[must_use]
    pub const fn id(&self) -> PairId {
        PairId::new(self.x, self.y)
    }
}

impl From<PairId> for Pair {
    fn from(id: PairId) -> Self {
        Self::new(id.x, id.y)
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}, Y: {}, Sum: {}, Product: {}",
            self.x, self.y, self.sum, self.product
        )
    }
}

/// An ordered, immutable sequence of pairs.
///
/// Sets are only ever produced by generation or by filtering another set, so
/// the order of the universe (increasing `x`, then increasing `y`) carries
/// through every stage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct CandidateSet(Vec<Pair>);

impl CandidateSet {
    /// Wraps an ordered list of pairs.
    #[must_use]
    pub const fn new(pairs: Vec<Pair>) -> Self {
        Self(pairs)
    }

    /// Number of pairs in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.0.iter()
    }

    /// The pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Pair] {
        &self.0
    }

    /// The set of ids present.
    #[must_use]
    pub fn ids(&self) -> FxHashSet<PairId> {
        self.0.iter().map(Pair::id).collect()
    }

    /// Whether a pair with this id is present.
    #[must_use]
    pub fn contains(&self, id: PairId) -> bool {
        self.0.iter().any(|pair| pair.id() == id)
    }

    /// Looks a pair up by id.
    #[must_use]
    pub fn find(&self, id: PairId) -> Option<&Pair> {
        self.0.iter().find(|pair| pair.id() == id)
    }

    /// Whether every id in `self` is also present in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        let other_ids = other.ids();
        self.0.iter().all(|pair| other_ids.contains(&pair.id()))
    }

    /// Keeps the pairs matching `keep`, preserving order.
    #[must_use]
    pub fn retain_by<F: FnMut(&Pair) -> bool>(&self, mut keep: F) -> Self {
        Self(self.0.iter().copied().filter(|pair| keep(pair)).collect())
    }
}

impl Display for CandidateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|pair| format!("({}, {})", pair.x, pair.y))
                .join(", ")
        )
    }
}

impl From<Vec<Pair>> for CandidateSet {
    fn from(pairs: Vec<Pair>) -> Self {
        Self::new(pairs)
    }
}

impl From<CandidateSet> for Vec<Pair> {
    fn from(set: CandidateSet) -> Self {
        set.0
    }
}

impl FromIterator<Pair> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
