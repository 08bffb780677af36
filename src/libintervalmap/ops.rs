// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and bound specific operations.
//!
//! Set-like operations (`Disjoint`, `Subset`, `Intersection`, `Difference`, ...) come from `gcollections`; this module only adds what is specific to integer intervals.

use gcollections::kind::*;
use num_traits::PrimInt;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Smallest interval covering both operands, when it covers nothing else.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

pub trait Range : Collection
{
  fn new(lb: Self::Item, ub: Self::Item) -> Self;
}

/// Translation of every member by the same offset.
pub trait Shift<Offset>
{
  type Output;
  fn shift(&self, offset: &Offset) -> Self::Output;
}

/// Integer types usable as interval bounds.
///
/// Implemented for every primitive integer. Offsets are expressed in the bound type as well, so a signed type is needed as soon as a layer maps values downwards.
pub trait Width : PrimInt + Hash + Debug + Display
{
  /// Number of integers in `[lower, upper]`, `None` when it cannot be represented in `Self`.
  fn width(lower: &Self, upper: &Self) -> Option<Self> {
    debug_assert!(lower <= upper);
    upper.checked_sub(lower).and_then(|w| w.checked_add(&Self::one()))
  }
}

impl<Bound> Width for Bound where
  Bound: PrimInt + Hash + Debug + Display
{}
