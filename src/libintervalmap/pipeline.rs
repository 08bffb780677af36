// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordered composition of mapping layers.

use crate::error::{Error, Result};
use crate::interval_set::IntervalSet;
use crate::layer::MappingLayer;
use crate::ops::*;
use gcollections::ops::IsEmpty;
use log::debug;
use std::iter::FromIterator;
use std::slice::Iter;

/// Applies `layers` in order to `initial`, cleaning up the working set after every stage.
///
/// Fails with `Error::EmptyInput` when `initial` is empty.
pub fn run_pipeline<Bound: Width>(layers: &[MappingLayer<Bound>], initial: &IntervalSet<Bound>) -> Result<IntervalSet<Bound>> {
  if initial.is_empty() {
    return Err(Error::EmptyInput);
  }
  let mut working = initial.clean_up();
  for layer in layers {
    let next = layer.apply(&working)?;
    debug!("layer `{}` mapped {} intervals to {}", layer.name(), working.interval_count(), next.interval_count());
    working = next;
  }
  Ok(working)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline<Bound = i64> {
  layers: Vec<MappingLayer<Bound>>
}

impl<Bound: Width> Pipeline<Bound>
{
  pub fn new<I>(layers: I) -> Pipeline<Bound> where
    I: IntoIterator<Item=MappingLayer<Bound>>
  {
    Pipeline {
      layers: layers.into_iter().collect()
    }
  }

  pub fn len(&self) -> usize {
    self.layers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.layers.is_empty()
  }

  pub fn layers(&self) -> &[MappingLayer<Bound>] {
    &self.layers
  }

  /// First layer called `name`.
  pub fn layer(&self, name: &str) -> Option<&MappingLayer<Bound>> {
    self.layers.iter().find(|layer| layer.name() == name)
  }

  pub fn iter(&self) -> Iter<MappingLayer<Bound>> {
    self.layers.iter()
  }

  pub fn run(&self, initial: &IntervalSet<Bound>) -> Result<IntervalSet<Bound>> {
    run_pipeline(&self.layers, initial)
  }

  /// Smallest integer of the image of `initial`.
  pub fn lowest(&self, initial: &IntervalSet<Bound>) -> Result<Bound> {
    self.run(initial)?.min_value()
  }

  /// Image of a single integer through every layer.
  pub fn map_value(&self, x: Bound) -> Result<Bound> {
    self.layers.iter().try_fold(x, |x, layer| layer.map_value(x))
  }
}

impl<Bound: Width> FromIterator<MappingLayer<Bound>> for Pipeline<Bound>
{
  fn from_iter<I>(iterable: I) -> Pipeline<Bound> where
   I: IntoIterator<Item=MappingLayer<Bound>>
  {
    Pipeline::new(iterable)
  }
}

impl<'a, Bound: Width> IntoIterator for &'a Pipeline<Bound>
{
  type Item = &'a MappingLayer<Bound>;
  type IntoIter = Iter<'a, MappingLayer<Bound>>;

  fn into_iter(self) -> Iter<'a, MappingLayer<Bound>> {
    self.layers.iter()
  }
}
