//! Range limits for the candidate universe and the policy used to enforce them.
//!
//! The engine only ever works on bounds inside `[MIN_RANGE_LIMIT, MAX_RANGE_LIMIT]`.
//! Anything a caller hands in is brought into that range before a single pair
//! is generated. Two policies are supported:
//!
//! - [`RangePolicy::Clamp`]: silently move the bound to the nearest limit.
//!   This is the default and what the generation functions always do.
//! - [`RangePolicy::Reject`]: refuse the bound with [`SolveError::OutOfRange`].

use crate::sum_product::error::SolveError;
use clap::ValueEnum;
use std::fmt::Display;

/// Bound used when the caller does not supply one.
pub const DEFAULT_MAX: u32 = 20;

/// Largest accepted upper bound for the pair components.
pub const MAX_RANGE_LIMIT: u32 = 20;

/// Smallest accepted upper bound for the pair components.
pub const MIN_RANGE_LIMIT: u32 = 5;

/// Smallest value either component of a pair may take.
pub const MIN_COMPONENT: u32 = 2;

/// How an out-of-range bound is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum RangePolicy {
    /// Move the bound to the nearest limit.
    #[default]
    Clamp,
    /// Refuse the bound.
    Reject,
}

impl Display for RangePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamp"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl RangePolicy {
    /// Applies the policy to `requested`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::OutOfRange`] under [`RangePolicy::Reject`] when
    /// `requested` falls outside `[MIN_RANGE_LIMIT, MAX_RANGE_LIMIT]`.
    pub fn apply(self, requested: i64) -> Result<u32, SolveError> {
        match self {
            Self::Clamp => Ok(clamp_max(requested)),
            Self::Reject => checked_max(requested),
        }
    }
}

/// Clamps `requested` into `[MIN_RANGE_LIMIT, MAX_RANGE_LIMIT]`.
#[must_use]
pub fn clamp_max(requested: i64) -> u32 {
    let clamped = requested.clamp(i64::from(MIN_RANGE_LIMIT), i64::from(MAX_RANGE_LIMIT));
    if clamped != requested {
        tracing::debug!(requested, clamped, "range bound clamped");
    }
    u32::try_from(clamped).unwrap_or(MAX_RANGE_LIMIT)
}

/// Accepts `requested` only if it already lies in `[MIN_RANGE_LIMIT, MAX_RANGE_LIMIT]`.
///
/// # Errors
///
/// Returns [`SolveError::OutOfRange`] otherwise.
pub fn checked_max(requested: i64) -> Result<u32, SolveError> {
    u32::try_from(requested)
        .ok()
        .filter(|max| (MIN_RANGE_LIMIT..=MAX_RANGE_LIMIT).contains(max))
        .ok_or(SolveError::OutOfRange {
            requested,
            min: MIN_RANGE_LIMIT,
            max: MAX_RANGE_LIMIT,
        })
}

/// Reads a bound typed by a user.
///
/// Text that is not an integer, or is zero, falls back to [`DEFAULT_MAX`]; the
/// policy is then applied to whatever number results.
///
/// # Errors
///
/// See [`RangePolicy::apply`].
pub fn parse_max(text: &str, policy: RangePolicy) -> Result<u32, SolveError> {
    let requested = text
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|&n| n != 0)
        .unwrap_or(i64::from(DEFAULT_MAX));
    policy.apply(requested)
}

/// Number of pairs `2 <= x <= y <= max` for an already clamped `max`.
#[must_use]
pub const fn pair_count(max: u32) -> usize {
    if max < MIN_COMPONENT {
        return 0;
    }
    let n = (max - MIN_COMPONENT + 1) as usize;
    n * (n + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_max_keeps_values_in_range() {
        for max in MIN_RANGE_LIMIT..=MAX_RANGE_LIMIT {
            assert_eq!(clamp_max(i64::from(max)), max);
        }
    }

    #[test]
    fn test_clamp_max_moves_values_to_nearest_limit() {
        assert_eq!(clamp_max(-3), MIN_RANGE_LIMIT);
        assert_eq!(clamp_max(0), MIN_RANGE_LIMIT);
        assert_eq!(clamp_max(4), MIN_RANGE_LIMIT);
        assert_eq!(clamp_max(21), MAX_RANGE_LIMIT);
        assert_eq!(clamp_max(i64::MAX), MAX_RANGE_LIMIT);
    }

    #[test]
    fn test_checked_max_rejects_out_of_range() {
        assert_eq!(checked_max(12), Ok(12));
        assert_eq!(
            checked_max(100),
            Err(SolveError::OutOfRange {
                requested: 100,
                min: MIN_RANGE_LIMIT,
                max: MAX_RANGE_LIMIT,
            })
        );
        assert!(checked_max(-1).is_err());
        assert!(checked_max(4).is_err());
    }

    #[test]
    fn test_policy_apply() {
        assert_eq!(RangePolicy::Clamp.apply(50), Ok(20));
        assert!(RangePolicy::Reject.apply(50).is_err());
        assert_eq!(RangePolicy::Reject.apply(5), Ok(5));
    }

    #[test]
    fn test_parse_max_falls_back_to_default() {
        assert_eq!(parse_max("abc", RangePolicy::Clamp), Ok(DEFAULT_MAX));
        assert_eq!(parse_max("", RangePolicy::Reject), Ok(DEFAULT_MAX));
        assert_eq!(parse_max("0", RangePolicy::Clamp), Ok(DEFAULT_MAX));
        assert_eq!(parse_max(" 7 ", RangePolicy::Clamp), Ok(7));
        assert_eq!(parse_max("3", RangePolicy::Clamp), Ok(MIN_RANGE_LIMIT));
        assert!(parse_max("3", RangePolicy::Reject).is_err());
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(5), 10);
        assert_eq!(pair_count(20), 190);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(1), 0);
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(RangePolicy::Clamp.to_string(), "clamp");
        assert_eq!(RangePolicy::Reject.to_string(), "reject");
    }
}
