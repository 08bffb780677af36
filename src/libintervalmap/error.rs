// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised while building layers or remapping interval sets.
//!
//! Every error is a precondition or postcondition violation of a pure computation: none of them is transient and no partial result is ever returned alongside one.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error
{
  /// Two domain intervals of the same layer share at least one integer, so the translation of that integer is ambiguous.
  #[error("domains {first} and {second} of layer `{layer}` overlap")]
  InvalidLayer {
    layer: String,
    first: String,
    second: String
  },

  /// A reduction such as the minimum was requested on a set covering no integer.
  #[error("cannot reduce an empty interval set")]
  EmptyInput,

  /// A bound left the range representable by the bound type.
  #[error("arithmetic overflow while {context}")]
  ArithmeticOverflow {
    context: String
  }
}

impl Error
{
  pub(crate) fn overflow<S: Into<String>>(context: S) -> Error {
    Error::ArithmeticOverflow { context: context.into() }
  }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    let invalid = Error::InvalidLayer {
      layer: "seed-to-soil".to_string(),
      first: "[50..97]".to_string(),
      second: "[60..70]".to_string()
    };
    assert_eq!(invalid.to_string(), "domains [50..97] and [60..70] of layer `seed-to-soil` overlap");
    assert_eq!(Error::EmptyInput.to_string(), "cannot reduce an empty interval set");
    assert_eq!(Error::overflow("shifting [1..2] by 3").to_string(),
      "arithmetic overflow while shifting [1..2] by 3");
  }
}
