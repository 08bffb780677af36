// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed and bounded integer interval.
//!
//! An interval `[lb..ub]` covers every integer `x` such that `lb <= x <= ub`. There is no empty interval: an operation that could produce nothing returns an `Option` or a possibly empty `Vec` instead of a sentinel value.
//!
//! # Examples
//!
//! ```rust
//! use intervalmap::prelude::*;
//! use intervalmap::Interval;
//!
//! let a: Interval = Interval::new(2, 9);
//! let b = Interval::new(3, 8);
//!
//! assert!(a.is_disjoint(&Interval::new(10, 100)));
//! assert!(b.is_subset(&a));
//! assert_eq!(a.intersection(&b), Some(b));
//! assert_eq!(a.difference(&b), vec![Interval::singleton(2), Interval::singleton(9)]);
//! assert_eq!(Interval::new(2, 5).hull(&Interval::new(4, 9)), Some(a));
//! ```

use crate::error::{Error, Result};
use crate::ops::*;
use gcollections::kind::*;
use gcollections::ops::{Bounded, Contains, Difference, Disjoint, Intersection, Overlap, Singleton, Subset};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Error as FmtError, Formatter};
use std::iter::FusedIterator;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<Bound = i64> {
  lb: Bound,
  ub: Bound
}

impl<Bound: Width> Interval<Bound>
{
  /// Returns `None` when `lb > ub`, the interval would be empty.
  pub fn try_new(lb: Bound, ub: Bound) -> Option<Interval<Bound>> {
    if lb <= ub {
      Some(Interval { lb, ub })
    } else {
      None
    }
  }

  /// The `size` integers starting at `start`, `None` if `size` is not positive.
  pub fn from_start_and_size(start: Bound, size: Bound) -> Result<Option<Interval<Bound>>> {
    if size <= Bound::zero() {
      return Ok(None);
    }
    let ub = start.checked_add(&(size - Bound::one()))
      .ok_or_else(|| Error::overflow(format!("computing the end of {} integers starting at {}", size, start)))?;
    Ok(Some(Interval { lb: start, ub }))
  }

  /// Number of integers covered.
  pub fn size(&self) -> Result<Bound> {
    Bound::width(&self.lb, &self.ub)
      .ok_or_else(|| Error::overflow(format!("computing the size of {}", self)))
  }

  pub fn is_singleton(&self) -> bool {
    self.lb == self.ub
  }

  /// Overlapping or adjacent, in which case `hull` covers exactly the union.
  pub fn is_joinable(&self, other: &Interval<Bound>) -> bool {
    let (left, right) = if self.lb <= other.lb { (self, other) } else { (other, self) };
    right.lb <= left.ub
      || left.ub.checked_add(&Bound::one()) == Some(right.lb)
  }

  /// Iterates over every covered integer in increasing order.
  pub fn iter(&self) -> Members<Bound> {
    Members {
      next: Some(self.lb),
      ub: self.ub
    }
  }
}

impl<Bound> Collection for Interval<Bound>
{
  type Item = Bound;
}

impl<Bound: Width> Range for Interval<Bound>
{
  /// # Panics
  ///
  /// If `lb > ub`. Use `Interval::try_new` when the bounds are not trusted.
  fn new(lb: Bound, ub: Bound) -> Interval<Bound> {
    assert!(lb <= ub, "Cannot build an empty interval [{}..{}]. Use `Interval::try_new` instead.", lb, ub);
    Interval { lb, ub }
  }
}

impl<Bound: Width> Singleton for Interval<Bound>
{
  fn singleton(x: Bound) -> Interval<Bound> {
    Interval { lb: x, ub: x }
  }
}

impl<Bound: Width> Bounded for Interval<Bound>
{
  fn lower(&self) -> Bound {
    self.lb
  }

  fn upper(&self) -> Bound {
    self.ub
  }
}

impl<Bound: Width> Contains for Interval<Bound>
{
  fn contains(&self, value: &Bound) -> bool {
    *value >= self.lb && *value <= self.ub
  }
}

impl<Bound: Width> Disjoint for Interval<Bound>
{
  fn is_disjoint(&self, other: &Interval<Bound>) -> bool {
    self.ub < other.lb || other.ub < self.lb
  }
}

impl<Bound: Width> Overlap for Interval<Bound>
{
  fn overlap(&self, other: &Interval<Bound>) -> bool {
    !self.is_disjoint(other)
  }
}

impl<Bound: Width> Subset for Interval<Bound>
{
  fn is_subset(&self, other: &Interval<Bound>) -> bool {
    other.lb <= self.lb && self.ub <= other.ub
  }
}

impl<Bound: Width> Intersection for Interval<Bound>
{
  type Output = Option<Interval<Bound>>;

  fn intersection(&self, other: &Interval<Bound>) -> Option<Interval<Bound>> {
    if self.is_disjoint(other) {
      None
    } else {
      Some(Interval {
        lb: std::cmp::max(self.lb, other.lb),
        ub: std::cmp::min(self.ub, other.ub)
      })
    }
  }
}

/// `self` minus `other`: zero, one or two intervals, left remainder first.
impl<Bound: Width> Difference for Interval<Bound>
{
  type Output = Vec<Interval<Bound>>;

  fn difference(&self, other: &Interval<Bound>) -> Vec<Interval<Bound>> {
    if self.is_disjoint(other) {
      return vec![*self];
    }
    let mut res = Vec::with_capacity(2);
    // Both bounds of `other` lie strictly inside `self` when they are pushed, so `-1` and `+1` cannot overflow.
    if self.lb < other.lb {
      res.push(Interval { lb: self.lb, ub: other.lb - Bound::one() });
    }
    if other.ub < self.ub {
      res.push(Interval { lb: other.ub + Bound::one(), ub: self.ub });
    }
    res
  }
}

impl<Bound: Width> Hull for Interval<Bound>
{
  type Output = Option<Interval<Bound>>;

  fn hull(&self, other: &Interval<Bound>) -> Option<Interval<Bound>> {
    if self.is_joinable(other) {
      Some(Interval {
        lb: std::cmp::min(self.lb, other.lb),
        ub: std::cmp::max(self.ub, other.ub)
      })
    } else {
      None
    }
  }
}

impl<Bound: Width> Shift<Bound> for Interval<Bound>
{
  type Output = Result<Interval<Bound>>;

  fn shift(&self, offset: &Bound) -> Result<Interval<Bound>> {
    let overflow = || Error::overflow(format!("shifting {} by {}", self, offset));
    let lb = self.lb.checked_add(offset).ok_or_else(overflow)?;
    let ub = self.ub.checked_add(offset).ok_or_else(overflow)?;
    Ok(Interval { lb, ub })
  }
}

impl<Bound: Width> Display for Interval<Bound>
{
  fn fmt(&self, formatter: &mut Formatter) -> std::result::Result<(), FmtError> {
    write!(formatter, "[{}..{}]", self.lb, self.ub)
  }
}

impl<Bound: Width + Serialize> Serialize for Interval<Bound>
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
    S: Serializer
  {
    (self.lb, self.ub).serialize(serializer)
  }
}

impl<'de, Bound: Width + Deserialize<'de>> Deserialize<'de> for Interval<Bound>
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where
    D: Deserializer<'de>
  {
    let (lb, ub) = <(Bound, Bound)>::deserialize(deserializer)?;
    Interval::try_new(lb, ub).ok_or_else(||
      D::Error::custom(format!("invalid interval [{}..{}]: lower bound exceeds upper bound", lb, ub)))
  }
}

/// Iterator over the members of an interval, see `Interval::iter`.
#[derive(Debug, Clone)]
pub struct Members<Bound>
{
  next: Option<Bound>,
  ub: Bound
}

impl<Bound: Width> Iterator for Members<Bound>
{
  type Item = Bound;

  fn next(&mut self) -> Option<Bound> {
    let current = self.next?;
    self.next =
      if current == self.ub { None }
      else { Some(current + Bound::one()) };
    Some(current)
  }
}

impl<Bound: Width> FusedIterator for Members<Bound> {}

impl<'a, Bound: Width> IntoIterator for &'a Interval<Bound>
{
  type Item = Bound;
  type IntoIter = Members<Bound>;

  fn into_iter(self) -> Members<Bound> {
    self.iter()
  }
}
