// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised when building, transforming or parsing intervals.

use thiserror::Error;

/// Violation of an interval invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
  #[error("end must be after start")]
  EndBeforeStart,
  #[error("end must be at or after start")]
  EndNotAtOrAfterStart,
  #[error("bound is not comparable with itself")]
  IncomparableBound,
  #[error("unsupported boundary type {0:#04b}")]
  UnsupportedBoundaryType(u8),
  #[error("stepping the bound left the domain")]
  Overflow,
}

/// Failure of the text parser. `E` is the parse error of the domain type.
#[derive(Debug, Error)]
pub enum ParseIntervalError<E> {
  #[error("interval not found in string")]
  NotFound,
  #[error("infinity `{0}` is on the wrong side")]
  MisplacedInfinity(String),
  #[error("invalid bound: {0}")]
  Bound(#[source] E),
  #[error(transparent)]
  Interval(#[from] IntervalError),
}
