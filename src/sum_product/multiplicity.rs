//! Frequency tables over the derived values of a candidate population.
//!
//! A table is built for one filtering round and dropped with it; nothing here
//! outlives the call that created it.

use crate::sum_product::candidate::Pair;
use rustc_hash::FxHashMap;

/// Which derived value of a pair is being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    /// `x + y`.
    Sum,
    /// `x * y`.
    Product,
}

impl Statistic {
    /// Reads the statistic off a pair.
    #[must_use]
    pub const fn of(self, pair: &Pair) -> u32 {
        match self {
            Self::Sum => pair.sum,
            Self::Product => pair.product,
        }
    }
}

/// Count of pairs sharing each value of a [`Statistic`] within a population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiplicity {
    statistic: Statistic,
    counts: FxHashMap<u32, usize>,
}

impl Multiplicity {
    /// Counts `statistic` over `population`.
    pub fn count<'a, I>(statistic: Statistic, population: I) -> Self
    where
        I: IntoIterator<Item = &'a Pair>,
    {
        let mut counts = FxHashMap::default();
        for pair in population {
            *counts.entry(statistic.of(pair)).or_insert(0) += 1;
        }
        Self { statistic, counts }
    }

    /// The statistic this table counts.
    #[must_use]
    pub const fn statistic(&self) -> Statistic {
        self.statistic
    }

    /// How many pairs in the population have this value.
    #[must_use]
    pub fn get(&self, value: u32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// How many pairs in the population share `pair`'s value.
    #[must_use]
    pub fn of(&self, pair: &Pair) -> usize {
        self.get(self.statistic.of(pair))
    }

    /// Whether `pair` is the only one in the population with its value.
    #[must_use]
    pub fn is_unique(&self, pair: &Pair) -> bool {
        self.of(pair) == 1
    }

    /// Whether at least one other pair in the population shares `pair`'s value.
    #[must_use]
    pub fn is_shared(&self, pair: &Pair) -> bool {
        self.of(pair) > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_products() {
        let pairs = [Pair::new(2, 6), Pair::new(3, 4), Pair::new(3, 5)];
        let products = Multiplicity::count(Statistic::Product, &pairs);

        assert_eq!(products.get(12), 2);
        assert_eq!(products.get(15), 1);
        assert_eq!(products.get(99), 0);
        assert!(products.is_shared(&pairs[0]));
        assert!(products.is_unique(&pairs[2]));
    }

    #[test]
    fn test_count_sums() {
        let pairs = [Pair::new(2, 6), Pair::new(3, 5), Pair::new(4, 4), Pair::new(2, 2)];
        let sums = Multiplicity::count(Statistic::Sum, &pairs);

        assert_eq!(sums.statistic(), Statistic::Sum);
        assert_eq!(sums.of(&pairs[1]), 3);
        assert!(sums.is_unique(&pairs[3]));
    }

    #[test]
    fn test_empty_population() {
        let sums = Multiplicity::count(Statistic::Sum, std::iter::empty::<&Pair>());
        assert_eq!(sums.get(4), 0);
        assert!(!sums.is_unique(&Pair::new(2, 2)));
    }
}
