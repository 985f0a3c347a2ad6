// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Inclusivity of the two ends of an interval.

use crate::error::IntervalError;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

const START_BIT: u8 = 0b10;
const END_BIT: u8 = 0b01;

/// The four combinations of (start-inclusive, end-inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryType {
  Open,
  Closed,
  ClosedOpen,
  OpenClosed,
}

impl BoundaryType
{
  pub const ALL: [BoundaryType; 4] = [
    BoundaryType::Open,
    BoundaryType::Closed,
    BoundaryType::ClosedOpen,
    BoundaryType::OpenClosed,
  ];

  pub fn from_inclusivity(start_inclusive: bool, end_inclusive: bool) -> BoundaryType {
    match (start_inclusive, end_inclusive) {
      (true, true) => BoundaryType::Closed,
      (true, false) => BoundaryType::ClosedOpen,
      (false, true) => BoundaryType::OpenClosed,
      (false, false) => BoundaryType::Open,
    }
  }

  /// Returns `(start_inclusive, end_inclusive)`.
  pub fn inclusivity(self) -> (bool, bool) {
    match self {
      BoundaryType::Closed => (true, true),
      BoundaryType::ClosedOpen => (true, false),
      BoundaryType::OpenClosed => (false, true),
      BoundaryType::Open => (false, false),
    }
  }

  pub fn is_start_inclusive(self) -> bool {
    self.inclusivity().0
  }

  pub fn is_end_inclusive(self) -> bool {
    self.inclusivity().1
  }

  /// Two-bit encoding: the high bit is the start inclusivity, the low bit the end inclusivity.
  pub fn bits(self) -> u8 {
    let (start, end) = self.inclusivity();
    (if start { START_BIT } else { 0 }) | (if end { END_BIT } else { 0 })
  }
}

impl TryFrom<u8> for BoundaryType
{
  type Error = IntervalError;

  fn try_from(bits: u8) -> Result<BoundaryType, IntervalError> {
    if bits & !(START_BIT | END_BIT) != 0 {
      return Err(IntervalError::UnsupportedBoundaryType(bits));
    }
    Ok(BoundaryType::from_inclusivity(bits & START_BIT != 0, bits & END_BIT != 0))
  }
}

impl Display for BoundaryType
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    let (start, end) = self.inclusivity();
    write!(formatter, "{}{}",
      if start { '[' } else { '(' },
      if end { ']' } else { ')' })
  }
}
