//! Scope resolution for a grading run
//!
//! Three independent overrides (year, day-or-range, part) narrow the
//! iteration domain; absent overrides fall back to the full defaults.

use crate::error::ScopeError;
use std::ops::RangeInclusive;

/// Years with published solvers, in grading order
pub const SUPPORTED_YEARS: [u16; 2] = [2018, 2019];

/// Days that exist in an advent calendar
const DAYS: RangeInclusive<u8> = 1..=25;

/// Resolved iteration domain: which years, days, and parts get graded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    years: Vec<u16>,
    days: RangeInclusive<u8>,
    parts: RangeInclusive<u8>,
}

/// One puzzle to grade: a (year, day) unit and the parts in scope for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

impl Scope {
    /// Resolve the three independent overrides into an iteration domain
    ///
    /// A malformed day token is an error, never silently defaulted: the
    /// operator scoped the run on purpose, and grading the wrong days would
    /// defeat that.
    pub fn resolve(
        year: Option<u16>,
        day: Option<&str>,
        part: Option<u8>,
    ) -> Result<Self, ScopeError> {
        let years = match year {
            Some(y) => vec![y],
            None => SUPPORTED_YEARS.to_vec(),
        };
        let days = match day {
            Some(token) => parse_day_token(token)?,
            None => DAYS,
        };
        let parts = match part {
            Some(p) => p..=p,
            None => 1..=2,
        };
        Ok(Self { years, days, parts })
    }

    /// The ordered work-item sequence: year-major, then day ascending
    pub fn work_items(&self) -> Vec<WorkItem> {
        let mut items = Vec::new();
        for &year in &self.years {
            for day in self.days.clone() {
                items.push(WorkItem {
                    year,
                    day,
                    parts: self.parts.clone(),
                });
            }
        }
        items
    }
}

/// Parse a day override: a single day or an inclusive "start-end" range
fn parse_day_token(token: &str) -> Result<RangeInclusive<u8>, ScopeError> {
    match token.split_once('-') {
        Some((start, end)) => {
            let start = parse_day(start)?;
            let end = parse_day(end)?;
            if end < start {
                return Err(ScopeError::EmptyDayRange { start, end });
            }
            Ok(start..=end)
        }
        None => {
            let day = parse_day(token)?;
            Ok(day..=day)
        }
    }
}

/// Parse one day number, bounds-checked against the calendar
fn parse_day(text: &str) -> Result<u8, ScopeError> {
    let text = text.trim();
    let day: u8 = text
        .parse()
        .map_err(|_| ScopeError::InvalidDay(text.to_string()))?;
    if !DAYS.contains(&day) {
        return Err(ScopeError::DayOutOfRange(day));
    }
    Ok(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_when_nothing_is_overridden() {
        let scope = Scope::resolve(None, None, None).unwrap();
        assert_eq!(scope.years, vec![2018, 2019]);
        assert_eq!(scope.days, 1..=25);
        assert_eq!(scope.parts, 1..=2);
    }

    #[test]
    fn test_single_overrides() {
        let scope = Scope::resolve(Some(2019), Some("7"), Some(2)).unwrap();
        assert_eq!(scope.years, vec![2019]);
        assert_eq!(scope.days, 7..=7);
        assert_eq!(scope.parts, 2..=2);
    }

    #[test]
    fn test_day_range_token() {
        let scope = Scope::resolve(None, Some("5-9"), None).unwrap();
        assert_eq!(scope.days, 5..=9);
    }

    #[test]
    fn test_day_range_may_be_a_single_day() {
        let scope = Scope::resolve(None, Some("12-12"), None).unwrap();
        assert_eq!(scope.days, 12..=12);
    }

    #[test]
    fn test_reversed_day_range_is_rejected_not_swapped() {
        let err = Scope::resolve(None, Some("9-5"), None).unwrap_err();
        assert_eq!(err, ScopeError::EmptyDayRange { start: 9, end: 5 });
    }

    #[test]
    fn test_malformed_day_tokens_are_rejected() {
        for token in ["abc", "1-x", "x-5", "", "1-2-3", "1.5"] {
            let result = Scope::resolve(None, Some(token), None);
            assert!(result.is_err(), "token {:?} should be rejected", token);
        }
    }

    #[test]
    fn test_days_outside_the_calendar_are_rejected() {
        assert_eq!(
            Scope::resolve(None, Some("0"), None).unwrap_err(),
            ScopeError::DayOutOfRange(0)
        );
        assert_eq!(
            Scope::resolve(None, Some("26"), None).unwrap_err(),
            ScopeError::DayOutOfRange(26)
        );
        assert!(Scope::resolve(None, Some("20-26"), None).is_err());
    }

    #[test]
    fn test_work_items_are_year_major_day_ascending() {
        let scope = Scope::resolve(None, Some("24-25"), None).unwrap();
        let keys: Vec<(u16, u8)> = scope.work_items().iter().map(|w| (w.year, w.day)).collect();
        assert_eq!(
            keys,
            vec![(2018, 24), (2018, 25), (2019, 24), (2019, 25)]
        );
    }

    #[test]
    fn test_work_items_carry_the_part_filter() {
        let scope = Scope::resolve(Some(2019), Some("3"), Some(2)).unwrap();
        let items = scope.work_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].parts, 2..=2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // Any "a-b" token with a <= b yields exactly [a, a+1, ..., b].
        #[test]
        fn prop_valid_range_tokens_yield_inclusive_sequences(
            a in 1u8..=25u8,
            b in 1u8..=25u8,
        ) {
            prop_assume!(a <= b);
            let scope = Scope::resolve(None, Some(&format!("{}-{}", a, b)), None).unwrap();
            let days: Vec<u8> = scope.days.clone().collect();
            let expected: Vec<u8> = (a..=b).collect();
            prop_assert_eq!(days, expected);
        }

        // Reversed ranges always fail, never swap.
        #[test]
        fn prop_reversed_range_tokens_fail(
            a in 1u8..=25u8,
            b in 1u8..=25u8,
        ) {
            prop_assume!(b < a);
            let err = Scope::resolve(None, Some(&format!("{}-{}", a, b)), None).unwrap_err();
            prop_assert_eq!(err, ScopeError::EmptyDayRange { start: a, end: b });
        }

        // Non-integer components always fail, never fall back to defaults.
        #[test]
        fn prop_non_integer_tokens_fail(token in "[a-z]{1,8}") {
            prop_assert!(Scope::resolve(None, Some(&token), None).is_err());
        }
    }
}
