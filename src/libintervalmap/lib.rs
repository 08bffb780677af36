// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library remaps sets of integers through layers of piecewise translations without enumerating them. A set is represented by a union of closed intervals with integer bounds, and a layer by a set of disjoint domain intervals, each carrying an offset. A domain of a billion integers costs as much as a domain of one.
//!
//! The building blocks are:
//! * [`Interval`](interval/struct.Interval.html), with the usual set operations provided through the `gcollections` traits.
//! * [`explode`](explode/fn.explode.html), which partitions an interval along a set of cutters.
//! * [`IntervalSet`](interval_set/struct.IntervalSet.html) and its `clean_up` operation computing the minimal disjoint cover of a union.
//! * [`MappingLayer`](layer/struct.MappingLayer.html) and [`Pipeline`](pipeline/struct.Pipeline.html), translating interval sets.
//!
//! # Examples
//!
//! ```rust
//! use intervalmap::prelude::*;
//! use intervalmap::{IntervalSet, MappingLayer, Pipeline};
//!
//! # fn main() -> intervalmap::Result<()> {
//! let pipeline: Pipeline = vec![
//!   MappingLayer::from_lines("seed-to-soil", vec![(50, 98, 2), (52, 50, 48)])?,
//!   MappingLayer::from_lines("soil-to-fertilizer", vec![(0, 15, 37), (37, 52, 2), (39, 0, 15)])?,
//! ].into_iter().collect();
//!
//! let seeds = IntervalSet::new(0, 1_000_000_000);
//! let image = pipeline.run(&seeds)?;
//! assert_eq!(image.interval_count(), 1);
//! assert_eq!(pipeline.lowest(&seeds)?, 0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod explode;
pub mod interval;
pub mod interval_set;
pub mod layer;
pub mod ops;
pub mod pipeline;
#[cfg(test)]
mod testing;

pub use crate::error::{Error, Result};
pub use crate::explode::explode;
pub use crate::interval::Interval;
pub use crate::interval_set::IntervalSet;
pub use crate::layer::MappingLayer;
pub use crate::pipeline::{run_pipeline, Pipeline};

/// Traits needed to use intervals and interval sets.
pub mod prelude {
  pub use crate::ops::{Hull, Range, Shift, Width};
  pub use gcollections::ops::{
    Bounded, Contains, Difference, Disjoint, Empty, Intersection, IsEmpty, Overlap, Singleton, Subset, Union
  };
}

/// Minimal disjoint cover of `set`, see `IntervalSet::clean_up`.
pub fn clean_up<Bound: ops::Width>(set: &IntervalSet<Bound>) -> IntervalSet<Bound> {
  set.clean_up()
}

/// Image of `set` through `layer`, see `MappingLayer::apply`.
pub fn apply_layer<Bound: ops::Width>(layer: &MappingLayer<Bound>, set: &IntervalSet<Bound>) -> Result<IntervalSet<Bound>> {
  layer.apply(set)
}

/// Smallest integer covered by `set`.
pub fn min_value<Bound: ops::Width>(set: &IntervalSet<Bound>) -> Result<Bound> {
  set.min_value()
}
