// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Partition of an interval by a set of cutters.
//!
//! `explode(i, cutters)` returns the coarsest set of intervals covering exactly the integers of `i` such that every piece is, for every cutter, either contained in it or disjoint from it. Cutters may overlap each other; the result does not depend on their order.
//!
//! ```rust
//! use intervalmap::prelude::*;
//! use intervalmap::{explode, Interval, IntervalSet};
//!
//! let pieces = explode(Interval::new(2, 9), &[Interval::new(4, 5), Interval::new(6, 7)]);
//! let expected: IntervalSet = vec![(2, 3), (4, 5), (6, 7), (8, 9)]
//!   .into_iter()
//!   .map(|(lb, ub)| Interval::new(lb, ub))
//!   .collect();
//! assert_eq!(pieces, expected);
//! ```

use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::ops::*;
use gcollections::ops::{Difference, Empty, Intersection};
use log::trace;

pub fn explode<Bound: Width>(interval: Interval<Bound>, cutters: &[Interval<Bound>]) -> IntervalSet<Bound> {
  let mut pieces = IntervalSet::empty();
  // Each entry is a fragment together with the index of the next cutter it must be cut by.
  let mut worklist = vec![(interval, 0)];
  while let Some((fragment, next)) = worklist.pop() {
    match cutters.get(next) {
      None => { pieces.insert(fragment); }
      Some(cutter) => {
        let inside = fragment.intersection(cutter);
        let outside = fragment.difference(cutter);
        worklist.extend(inside.into_iter()
          .chain(outside)
          .map(|shrapnel| (shrapnel, next + 1)));
      }
    }
  }
  trace!("exploded {} by {} cutters into {} pieces", interval, cutters.len(), pieces.interval_count());
  pieces
}
