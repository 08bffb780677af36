// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Finite set of closed intervals standing for the union of the integers they cover.
//!
//! While a set is being built, its intervals may overlap, nest or touch. `clean_up` turns it into the canonical representation: pairwise disjoint, non-adjacent intervals, which is the smallest number of intervals that can cover that union. For example `{[1..4], [3..6], [7..7], [10..12]}` cleans up to `{[1..7], [10..12]}`.
//!
//! Intervals are kept ordered by lower bound (then upper bound), so iteration order and equality never depend on insertion order.

use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::ops::*;
use gcollections::kind::*;
use gcollections::ops::{Bounded, Contains, Empty, IsEmpty, Singleton, Union};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_set::{BTreeSet, Iter};
use std::fmt::{Display, Error as FmtError, Formatter};
use std::iter::FromIterator;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<Bound = i64> {
  intervals: BTreeSet<Interval<Bound>>
}

impl<Bound: Width> IntervalSet<Bound>
{
  pub fn interval_count(&self) -> usize {
    self.intervals.len()
  }

  /// Returns `false` if the very same interval was already present.
  pub fn insert(&mut self, x: Interval<Bound>) -> bool {
    self.intervals.insert(x)
  }

  pub fn iter(&self) -> Iter<Interval<Bound>> {
    self.intervals.iter()
  }

  fn front(&self) -> Option<&Interval<Bound>> {
    self.intervals.iter().next()
  }

  /// Smallest interval containing every member, `None` on an empty set.
  pub fn span(&self) -> Option<Interval<Bound>> {
    let lb = self.front()?.lower();
    let ub = self.intervals.iter().map(|i| i.upper()).max()?;
    Some(Interval::new(lb, ub))
  }

  /// `true` when no two intervals share an integer. Adjacent intervals are disjoint.
  pub fn is_pairwise_disjoint(&self) -> bool {
    // Sorted by lower bound: if some interval overlaps a later one, it also overlaps its immediate successor.
    let mut iter = self.intervals.iter();
    let mut previous = match iter.next() {
      Some(x) => x,
      None => return true
    };
    for current in iter {
      if previous.upper() >= current.lower() {
        return false;
      }
      previous = current;
    }
    true
  }

  /// Minimal disjoint cover of the same integers: overlapping and adjacent intervals are merged.
  pub fn clean_up(&self) -> IntervalSet<Bound> {
    let mut res: Vec<Interval<Bound>> = Vec::with_capacity(self.intervals.len());
    for x in &self.intervals {
      join_or_push(&mut res, *x);
    }
    res.into_iter().collect()
  }

  /// Smallest covered integer.
  ///
  /// Only the intervals of the set are looked at, never their members.
  pub fn min_value(&self) -> Result<Bound> {
    self.front()
      .map(|x| x.lower())
      .ok_or(Error::EmptyInput)
  }

  pub fn max_value(&self) -> Result<Bound> {
    self.intervals.iter()
      .map(|x| x.upper())
      .max()
      .ok_or(Error::EmptyInput)
  }

  /// Every covered integer, once, in increasing order.
  ///
  /// This enumerates the members and is only meant for small sets.
  pub fn members(&self) -> Vec<Bound> {
    self.clean_up().iter().flat_map(|i| i.iter()).collect()
  }
}

// `x` must not start before the last interval of `res`.
fn join_or_push<Bound: Width>(res: &mut Vec<Interval<Bound>>, x: Interval<Bound>) {
  if let Some(back) = res.last_mut() {
    debug_assert!(back.lower() <= x.lower(),
      "This operation is only for pushing interval to the back of the array, possibly overlapping with the last element.");
    if let Some(joint) = back.hull(&x) {
      *back = joint;
      return;
    }
  }
  res.push(x);
}

impl<Bound> Collection for IntervalSet<Bound>
{
  type Item = Bound;
}

impl<Bound: Width> Range for IntervalSet<Bound>
{
  fn new(lb: Bound, ub: Bound) -> IntervalSet<Bound> {
    IntervalSet::from_iter(Some(Interval::new(lb, ub)))
  }
}

impl<Bound: Width> Singleton for IntervalSet<Bound>
{
  fn singleton(x: Bound) -> IntervalSet<Bound> {
    IntervalSet::from_iter(Some(Interval::singleton(x)))
  }
}

impl<Bound: Width> Empty for IntervalSet<Bound>
{
  fn empty() -> IntervalSet<Bound> {
    IntervalSet {
      intervals: BTreeSet::new()
    }
  }
}

impl<Bound: Width> Default for IntervalSet<Bound>
{
  fn default() -> IntervalSet<Bound> {
    IntervalSet::empty()
  }
}

impl<Bound: Width> IsEmpty for IntervalSet<Bound>
{
  fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }
}

impl<Bound: Width> Contains for IntervalSet<Bound>
{
  fn contains(&self, value: &Bound) -> bool {
    // Intervals starting after `value` cannot contain it.
    self.intervals.iter()
      .take_while(|i| i.lower() <= *value)
      .any(|i| i.contains(value))
  }
}

/// Raw union: the result is not cleaned up.
impl<Bound: Width> Union for IntervalSet<Bound>
{
  type Output = IntervalSet<Bound>;

  fn union(&self, rhs: &IntervalSet<Bound>) -> IntervalSet<Bound> {
    self.iter().chain(rhs.iter()).cloned().collect()
  }
}

impl<Bound: Width> Extend<Interval<Bound>> for IntervalSet<Bound>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=Interval<Bound>>
  {
    self.intervals.extend(iterable);
  }
}

impl<Bound: Width> FromIterator<Interval<Bound>> for IntervalSet<Bound>
{
  fn from_iter<I>(iterable: I) -> IntervalSet<Bound> where
   I: IntoIterator<Item=Interval<Bound>>
  {
    IntervalSet {
      intervals: iterable.into_iter().collect()
    }
  }
}

impl<'a, Bound: Width> IntoIterator for &'a IntervalSet<Bound>
{
  type Item = &'a Interval<Bound>;
  type IntoIter = Iter<'a, Interval<Bound>>;

  fn into_iter(self) -> Iter<'a, Interval<Bound>> {
    self.intervals.iter()
  }
}

impl<Bound: Width> IntoIterator for IntervalSet<Bound>
{
  type Item = Interval<Bound>;
  type IntoIter = std::collections::btree_set::IntoIter<Interval<Bound>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.into_iter()
  }
}

impl<Bound: Width> Display for IntervalSet<Bound>
{
  fn fmt(&self, formatter: &mut Formatter) -> std::result::Result<(), FmtError> {
    formatter.write_str("{")?;
    for (idx, interval) in self.intervals.iter().enumerate() {
      if idx > 0 {
        formatter.write_str(", ")?;
      }
      Display::fmt(interval, formatter)?;
    }
    formatter.write_str("}")
  }
}

impl<Bound: Width + Serialize> Serialize for IntervalSet<Bound>
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
    S: Serializer
  {
    serializer.collect_seq(self.intervals.iter())
  }
}

impl<'de, Bound: Width + Deserialize<'de>> Deserialize<'de> for IntervalSet<Bound>
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where
    D: Deserializer<'de>
  {
    let intervals = Vec::<Interval<Bound>>::deserialize(deserializer)?;
    let count = intervals.len();
    let set: IntervalSet<Bound> = intervals.into_iter().collect();
    if set.interval_count() != count {
      return Err(D::Error::custom("duplicate interval in interval set"));
    }
    Ok(set)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use proptest::prelude::*;
  use serde_test::{assert_de_tokens_error, assert_tokens, Token};

  fn make_interval_set(intervals: Vec<(i64, i64)>) -> IntervalSet<i64> {
    intervals.into_iter()
      .map(|(lb, ub)| Interval::new(lb, ub))
      .collect()
  }

  #[test]
  fn ordering_and_equality() {
    let a = make_interval_set(vec![(7,9), (1,2), (1,2)]);
    let b = make_interval_set(vec![(1,2), (7,9)]);
    assert_eq!(a, b);
    assert_eq!(a.interval_count(), 2);
    assert_eq!(a.iter().cloned().collect::<Vec<_>>(), vec![Interval::new(1, 2), Interval::new(7, 9)]);
    assert_eq!(a.to_string(), "{[1..2], [7..9]}");
  }

  #[test]
  fn test_contains() {
    let cases = vec![
      (vec![], vec![], vec![-2,-1,0,1,2]),
      (vec![(1,2)], vec![1,2], vec![-1,0,3,4]),
      (vec![(1,2),(7,9)], vec![1,2,7,8,9], vec![-1,0,3,4,5,6,10,11]),
      (vec![(1,2),(4,5),(7,9)], vec![1,2,4,5,7,8,9], vec![-1,0,3,6,10,11]),
      (vec![(-10,20),(1,2)], vec![-10,1,2,3,20], vec![-11,21])
    ];

    for (is, inside, outside) in cases {
      let is = make_interval_set(is);
      for i in &inside {
        assert!(is.contains(i), "{} is not contained inside {}, but it should.", i, is);
      }
      for i in &outside {
        assert!(!is.contains(i), "{} is contained inside {}, but it should not.", i, is);
      }
    }
  }

  #[test]
  fn test_clean_up() {
    // Note: the first number is the test id, so it should be easy to identify which test has failed.
    let cases = vec![
      (1, vec![], vec![]),
      (2, vec![(9,9)], vec![(9,9)]),
      (3, vec![(9,9),(2,9)], vec![(2,9)]),
      (4, vec![(1,9),(2,4),(3,5)], vec![(1,9)]),
      (5, vec![(1,2),(3,4)], vec![(1,4)]),
      (6, vec![(1,2),(4,5)], vec![(1,2),(4,5)]),
      (7, vec![(1,4),(3,6),(7,7),(10,12)], vec![(1,7),(10,12)]),
      (8, vec![(10,12),(0,20),(30,31),(21,25)], vec![(0,25),(30,31)]),
      (9, vec![(1,100),(5,6),(50,60),(99,101)], vec![(1,101)]),
      (10, vec![(-5,-1),(1,5)], vec![(-5,-1),(1,5)]),
      (11, vec![(-5,-1),(0,0),(1,5)], vec![(-5,5)])
    ];

    for (id, a, expected) in cases {
      let result = make_interval_set(a).clean_up();
      let expected = make_interval_set(expected);
      assert_eq!(result, expected, "test #{} of clean_up", id);
      assert!(result.is_pairwise_disjoint(), "test #{} of clean_up", id);
    }
  }

  #[test]
  fn clean_up_at_the_limits() {
    let max = i64::max_value();
    let min = i64::min_value();
    let set = make_interval_set(vec![(min, 0), (1, max)]);
    assert_eq!(set.clean_up(), IntervalSet::new(min, max));
  }

  #[test]
  fn reductions() {
    let set = make_interval_set(vec![(60,96), (55,55), (0,100)]);
    assert_eq!(set.min_value(), Ok(0));
    assert_eq!(set.max_value(), Ok(100));
    assert_eq!(set.span(), Some(Interval::new(0, 100)));
    let empty: IntervalSet<i64> = IntervalSet::empty();
    assert_eq!(empty.min_value(), Err(Error::EmptyInput));
    assert_eq!(empty.max_value(), Err(Error::EmptyInput));
    assert_eq!(empty.span(), None);
    assert!(empty.is_empty());
  }

  #[test]
  fn members() {
    let set = make_interval_set(vec![(5,7), (1,2), (6,8)]);
    assert_eq!(set.members(), vec![1, 2, 5, 6, 7, 8]);
  }

  #[test]
  fn union() {
    let a = make_interval_set(vec![(1,2),(7,9)]);
    let b = make_interval_set(vec![(2,7)]);
    assert_eq!(a.union(&b), make_interval_set(vec![(1,2),(2,7),(7,9)]));
    assert_eq!(a.union(&b).clean_up(), IntervalSet::new(1, 9));
  }

  #[test]
  fn serde() {
    let set = make_interval_set(vec![(1,2),(7,9)]);
    assert_tokens(&set, &[
      Token::Seq { len: Some(2) },
      Token::Tuple { len: 2 },
      Token::I64(1),
      Token::I64(2),
      Token::TupleEnd,
      Token::Tuple { len: 2 },
      Token::I64(7),
      Token::I64(9),
      Token::TupleEnd,
      Token::SeqEnd
    ]);
    assert_de_tokens_error::<IntervalSet<i64>>(&[
        Token::Seq { len: Some(2) },
        Token::Tuple { len: 2 },
        Token::I64(1),
        Token::I64(2),
        Token::TupleEnd,
        Token::Tuple { len: 2 },
        Token::I64(1),
        Token::I64(2),
        Token::TupleEnd,
        Token::SeqEnd
      ],
      "duplicate interval in interval set");
  }

  proptest! {
    #[test]
    fn clean_up_preserves_contents(set in small_set()) {
      prop_assert_eq!(covered(&set.clean_up()), covered(&set));
    }

    #[test]
    fn clean_up_shrinks(set in small_set()) {
      prop_assert!(set.clean_up().interval_count() <= set.interval_count());
    }

    #[test]
    fn clean_up_is_idempotent(set in small_set()) {
      let once = set.clean_up();
      prop_assert_eq!(once.clean_up(), once);
    }

    #[test]
    fn clean_up_is_minimal(set in small_set()) {
      let cleaned = set.clean_up();
      prop_assert!(cleaned.is_pairwise_disjoint());
      let intervals: Vec<_> = cleaned.iter().collect();
      for pair in intervals.windows(2) {
        prop_assert!(!pair[0].is_joinable(pair[1]));
      }
    }

    #[test]
    fn min_value_is_smallest_member(set in small_set()) {
      match covered(&set).iter().next() {
        Some(min) => prop_assert_eq!(set.min_value(), Ok(*min)),
        None => prop_assert_eq!(set.min_value(), Err(Error::EmptyInput))
      }
    }
  }
}
