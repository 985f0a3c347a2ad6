// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Endpoint of an interval: a finite value, a signed infinity, or the not-a-value marker of the empty interval.
//!
//! Bounds are totally ordered as `NaN < -∞ < finite values < +∞`, finite values being compared with the order of the domain. Stepping an infinite bound leaves it unchanged, so the boundary transformations treat bounded and unbounded ends alike.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::Bound;
//!
//! assert!(Bound::NegInfinity < Bound::Finite(-1000));
//! assert!(Bound::Finite(1000) < Bound::PosInfinity);
//! assert_eq!(Bound::Finite(1).add(2), Bound::Finite(3));
//! assert_eq!(Bound::<i32>::PosInfinity.add(2), Bound::PosInfinity);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound<T> {
  NaN,
  NegInfinity,
  Finite(T),
  PosInfinity,
}

impl<T> Bound<T>
{
  /// Bound of an optional value: `None` is the infinity on the side given by `upper`.
  pub fn from_option(value: Option<T>, upper: bool) -> Bound<T> {
    match value {
      Some(value) => Bound::Finite(value),
      None if upper => Bound::PosInfinity,
      None => Bound::NegInfinity,
    }
  }

  pub fn is_finite(&self) -> bool {
    matches!(self, Bound::Finite(_))
  }

  pub fn is_infinite(&self) -> bool {
    matches!(self, Bound::NegInfinity | Bound::PosInfinity)
  }

  pub fn is_nan(&self) -> bool {
    matches!(self, Bound::NaN)
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      Bound::Finite(value) => Some(value),
      _ => None,
    }
  }

  pub fn into_value(self) -> Option<T> {
    match self {
      Bound::Finite(value) => Some(value),
      _ => None,
    }
  }

  pub fn as_ref(&self) -> Bound<&T> {
    match self {
      Bound::NaN => Bound::NaN,
      Bound::NegInfinity => Bound::NegInfinity,
      Bound::Finite(value) => Bound::Finite(value),
      Bound::PosInfinity => Bound::PosInfinity,
    }
  }

  /// Applies `f` to a finite value, leaves the markers untouched.
  pub fn map_finite<U, F>(&self, f: F) -> Bound<U> where
   F: FnOnce(&T) -> U
  {
    match self {
      Bound::NaN => Bound::NaN,
      Bound::NegInfinity => Bound::NegInfinity,
      Bound::Finite(value) => Bound::Finite(f(value)),
      Bound::PosInfinity => Bound::PosInfinity,
    }
  }

  pub fn add<S>(&self, step: S) -> Bound<T> where
   T: Clone + Add<S, Output=T>
  {
    self.map_finite(|value| value.clone() + step)
  }

  pub fn sub<S>(&self, step: S) -> Bound<T> where
   T: Clone + Sub<S, Output=T>
  {
    self.map_finite(|value| value.clone() - step)
  }

  fn rank(&self) -> u8 {
    match self {
      Bound::NaN => 0,
      Bound::NegInfinity => 1,
      Bound::Finite(_) => 2,
      Bound::PosInfinity => 3,
    }
  }
}

impl<T: PartialOrd> Bound<T>
{
  /// Total comparison of two bounds.
  ///
  /// Finite values that do not compare (which construction of an interval rules out) are reported as equal.
  pub fn compare(&self, other: &Bound<T>) -> Ordering {
    match (self, other) {
      (Bound::Finite(a), Bound::Finite(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
      _ => self.rank().cmp(&other.rank()),
    }
  }

  /// `false` for a finite value that is not comparable with itself, such as a floating-point NaN.
  pub fn is_comparable(&self) -> bool {
    match self {
      Bound::Finite(value) => value.partial_cmp(value).is_some(),
      _ => true,
    }
  }
}

impl<T: PartialOrd> PartialOrd for Bound<T>
{
  fn partial_cmp(&self, other: &Bound<T>) -> Option<Ordering> {
    match (self, other) {
      (Bound::Finite(a), Bound::Finite(b)) => a.partial_cmp(b),
      _ => Some(self.rank().cmp(&other.rank())),
    }
  }
}

impl<T: Ord> Ord for Bound<T>
{
  fn cmp(&self, other: &Bound<T>) -> Ordering {
    match (self, other) {
      (Bound::Finite(a), Bound::Finite(b)) => a.cmp(b),
      _ => self.rank().cmp(&other.rank()),
    }
  }
}

impl<T> From<T> for Bound<T>
{
  fn from(value: T) -> Bound<T> {
    Bound::Finite(value)
  }
}

/// The alternate form (`{:#}`) prints infinities with the `∞` glyph.
impl<T: Display> Display for Bound<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    match (self, formatter.alternate()) {
      (Bound::Finite(value), _) => Display::fmt(value, formatter),
      (Bound::NaN, _) => formatter.write_str("NaN"),
      (Bound::NegInfinity, false) => formatter.write_str("-Infinity"),
      (Bound::NegInfinity, true) => formatter.write_str("-∞"),
      (Bound::PosInfinity, false) => formatter.write_str("Infinity"),
      (Bound::PosInfinity, true) => formatter.write_str("∞"),
    }
  }
}
