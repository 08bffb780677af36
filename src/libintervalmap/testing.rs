// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Strategies and helpers shared by the property tests.

use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::ops::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

pub fn small_interval() -> impl Strategy<Value = Interval<i64>> {
  (-1000i64..500)
    .prop_flat_map(|lb| (Just(lb), lb..500))
    .prop_map(|(lb, ub)| Interval::new(lb, ub))
}

pub fn small_set() -> impl Strategy<Value = IntervalSet<i64>> {
  prop::collection::vec(small_interval(), 0..40)
    .prop_map(|intervals| intervals.into_iter().collect())
}

/// Ascending, pairwise disjoint intervals, each starting at or after the end of the previous one plus one.
pub fn disjoint_intervals(max_len: usize) -> impl Strategy<Value = Vec<Interval<i64>>> {
  prop::collection::vec((0i64..40, 0i64..60), 0..max_len)
    .prop_map(|steps| {
      let mut lb = -1000;
      let mut res = vec![];
      for (gap, len) in steps {
        let start = lb + gap;
        res.push(Interval::new(start, start + len));
        lb = start + len + 1;
      }
      res
    })
}

/// Every integer covered by `set`, duplicates collapsed.
pub fn covered(set: &IntervalSet<i64>) -> BTreeSet<i64> {
  set.iter().flat_map(|i| i.iter()).collect()
}
