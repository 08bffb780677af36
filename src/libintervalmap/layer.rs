// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Piecewise translation of integers.
//!
//! A layer is a set of pairwise disjoint domain intervals, each with an offset added to its members. Integers outside every domain are mapped to themselves. Layers are applied to whole intervals: the interval is exploded along the domains and each piece is shifted by the offset of the domain containing it, if any.
//!
//! # Examples
//!
//! ```rust
//! use intervalmap::prelude::*;
//! use intervalmap::{IntervalSet, MappingLayer};
//!
//! # fn main() -> intervalmap::Result<()> {
//! // Lines are `(destination, source, length)`: `[98..99]` is sent to `[50..51]`, `[50..97]` to `[52..99]`.
//! let layer = MappingLayer::from_lines("seed-to-soil", vec![(50, 98, 2), (52, 50, 48)])?;
//! assert_eq!(layer.map_value(79)?, 81);
//! assert_eq!(layer.map_value(10)?, 10);
//!
//! let mapped = layer.apply(&IntervalSet::new(79, 99))?;
//! assert_eq!(mapped.to_string(), "{[50..51], [81..99]}");
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::explode::explode;
use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::ops::*;
use gcollections::ops::{Bounded, Contains, Disjoint, Empty, Subset};
use serde::de::Error as DeError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingLayer<Bound = i64> {
  name: String,
  // Sorted and pairwise disjoint; `offsets[i]` applies to `domains[i]`.
  domains: Vec<Interval<Bound>>,
  offsets: Vec<Bound>
}

impl<Bound: Width> MappingLayer<Bound>
{
  /// Builds a layer from `(domain, offset)` entries given in any order.
  ///
  /// Fails with `Error::InvalidLayer` if two domains share an integer.
  pub fn new<S, I>(name: S, entries: I) -> Result<MappingLayer<Bound>> where
    S: Into<String>,
    I: IntoIterator<Item=(Interval<Bound>, Bound)>
  {
    let name = name.into();
    let mut entries: Vec<_> = entries.into_iter().collect();
    entries.sort_by_key(|(domain, _)| *domain);
    // Sorted by lower bound, an overlap always shows up between neighbours.
    if let Some(pair) = entries.windows(2).find(|pair| !pair[0].0.is_disjoint(&pair[1].0)) {
      return Err(Error::InvalidLayer {
        layer: name,
        first: pair[0].0.to_string(),
        second: pair[1].0.to_string()
      });
    }
    let (domains, offsets) = entries.into_iter().unzip();
    Ok(MappingLayer { name, domains, offsets })
  }

  /// Builds a layer from `(destination, source, length)` lines: `[source..source+length-1]` is sent to `[destination..destination+length-1]`.
  ///
  /// Lines of length zero contribute nothing.
  pub fn from_lines<S, I>(name: S, lines: I) -> Result<MappingLayer<Bound>> where
    S: Into<String>,
    I: IntoIterator<Item=(Bound, Bound, Bound)>
  {
    let mut entries = vec![];
    for (dest, source, length) in lines {
      if let Some(domain) = Interval::from_start_and_size(source, length)? {
        let offset = dest.checked_sub(&source)
          .ok_or_else(|| Error::overflow(format!("computing the offset from {} to {}", source, dest)))?;
        entries.push((domain, offset));
      }
    }
    MappingLayer::new(name, entries)
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn len(&self) -> usize {
    self.domains.len()
  }

  pub fn is_empty(&self) -> bool {
    self.domains.is_empty()
  }

  /// Domain intervals in increasing order.
  pub fn domains(&self) -> &[Interval<Bound>] {
    &self.domains
  }

  pub fn entries<'a>(&'a self) -> impl Iterator<Item=(Interval<Bound>, Bound)> + 'a {
    self.domains.iter().cloned().zip(self.offsets.iter().cloned())
  }

  // Index of the only domain that may contain `x`: the last one starting at or before it.
  fn candidate(&self, x: Bound) -> Option<usize> {
    match self.domains.partition_point(|domain| domain.lower() <= x) {
      0 => None,
      idx => Some(idx - 1)
    }
  }

  /// Offset of the domain containing the whole `fragment`, `None` if it lies outside every domain.
  ///
  /// `fragment` must not straddle a domain boundary, which holds for the pieces of `explode` by `self.domains()`.
  fn offset_of(&self, fragment: &Interval<Bound>) -> Option<Bound> {
    let idx = self.candidate(fragment.lower())?;
    let domain = &self.domains[idx];
    debug_assert!(fragment.is_subset(domain) || fragment.is_disjoint(domain),
      "{} straddles the boundary of domain {} in layer `{}`", fragment, domain, self.name);
    if fragment.is_subset(domain) {
      Some(self.offsets[idx])
    } else {
      None
    }
  }

  /// Image of a single integer.
  pub fn map_value(&self, x: Bound) -> Result<Bound> {
    match self.candidate(x) {
      Some(idx) if self.domains[idx].contains(&x) => {
        let offset = self.offsets[idx];
        x.checked_add(&offset)
          .ok_or_else(|| Error::overflow(format!("mapping {} by {} in layer `{}`", x, offset, self.name)))
      }
      _ => Ok(x)
    }
  }

  /// Image of one interval, not cleaned up: shifted pieces may overlap or touch each other.
  pub fn apply_interval(&self, interval: Interval<Bound>) -> Result<IntervalSet<Bound>> {
    explode(interval, &self.domains).iter()
      .map(|fragment| match self.offset_of(fragment) {
        Some(offset) => fragment.shift(&offset),
        None => Ok(*fragment)
      })
      .collect()
  }

  /// Image of a set, as a minimal disjoint cover.
  pub fn apply(&self, set: &IntervalSet<Bound>) -> Result<IntervalSet<Bound>> {
    let mut image = IntervalSet::empty();
    for interval in set {
      image.extend(self.apply_interval(*interval)?);
    }
    Ok(image.clean_up())
  }
}

impl<Bound: Width + Serialize> Serialize for MappingLayer<Bound>
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
    S: Serializer
  {
    let entries: Vec<_> = self.entries().collect();
    let mut state = serializer.serialize_struct("MappingLayer", 2)?;
    state.serialize_field("name", &self.name)?;
    state.serialize_field("entries", &entries)?;
    state.end()
  }
}

#[derive(Deserialize)]
#[serde(rename = "MappingLayer")]
#[serde(bound(deserialize = "Bound: Width + Deserialize<'de>"))]
struct LayerRepr<Bound> {
  name: String,
  entries: Vec<(Interval<Bound>, Bound)>
}

impl<'de, Bound: Width + Deserialize<'de>> Deserialize<'de> for MappingLayer<Bound>
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where
    D: Deserializer<'de>
  {
    let repr = LayerRepr::<Bound>::deserialize(deserializer)?;
    MappingLayer::new(repr.name, repr.entries).map_err(D::Error::custom)
  }
}
