// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval over an ordered domain with independently open or closed ends.
//!
//! An interval is an immutable value made of two [bounds](../bound/index.html) and two inclusivity flags. A missing endpoint is a signed infinity and is never inclusive. Every operation builds a new value.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::{BoundaryType, Interval};
//!
//! let a = Interval::closed_open(1, 5);
//! assert_eq!(a.boundary_type(), BoundaryType::ClosedOpen);
//! assert!(a.contains_value(&1));
//! assert!(!a.contains_value(&5));
//! assert_eq!(a.to_string(), "[1, 5)");
//!
//! let b: Interval<i32> = Interval::at_least(3);
//! assert_eq!(b.to_string(), "[3, Infinity)");
//! assert!(Interval::try_new(Some(5), Some(5), true, false).is_err());
//! ```

use crate::bound::Bound;
use crate::boundary::BoundaryType;
use crate::error::IntervalError;
use crate::ops::Whole;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
  start: Bound<T>,
  end: Bound<T>,
  start_inclusive: bool,
  end_inclusive: bool,
}

impl<T> Interval<T>
{
  /// The interval containing nothing. Both ends carry the not-a-value marker.
  pub const fn empty() -> Interval<T> {
    Interval {
      start: Bound::NaN,
      end: Bound::NaN,
      start_inclusive: false,
      end_inclusive: false,
    }
  }

  /// `(-Infinity, Infinity)`.
  pub const fn all() -> Interval<T> {
    Interval {
      start: Bound::NegInfinity,
      end: Bound::PosInfinity,
      start_inclusive: false,
      end_inclusive: false,
    }
  }

  pub fn start(&self) -> &Bound<T> {
    &self.start
  }

  pub fn end(&self) -> &Bound<T> {
    &self.end
  }

  pub fn start_inclusive(&self) -> bool {
    self.start_inclusive
  }

  pub fn end_inclusive(&self) -> bool {
    self.end_inclusive
  }

  pub fn boundary_type(&self) -> BoundaryType {
    BoundaryType::from_inclusivity(self.start_inclusive, self.end_inclusive)
  }

  /// Splits the interval into `(start, end, start_inclusive, end_inclusive)`.
  pub fn into_parts(self) -> (Bound<T>, Bound<T>, bool, bool) {
    (self.start, self.end, self.start_inclusive, self.end_inclusive)
  }

  /// Both ends are finite.
  pub fn is_bounded(&self) -> bool {
    self.start.is_finite() && self.end.is_finite()
  }

  pub fn is_unbounded(&self) -> bool {
    self.start.is_infinite() || self.end.is_infinite()
  }

  /// Both ends are infinite, that is the interval is `All`.
  pub fn is_whole(&self) -> bool {
    self.start.is_infinite() && self.end.is_infinite()
  }

  pub(crate) fn from_parts_unchecked(start: Bound<T>, end: Bound<T>,
    start_inclusive: bool, end_inclusive: bool) -> Interval<T>
  {
    Interval {
      start_inclusive: start_inclusive && start.is_finite(),
      end_inclusive: end_inclusive && end.is_finite(),
      start: start,
      end: end,
    }
  }
}

impl<T: PartialOrd> Interval<T>
{
  /// Builds an interval from optional endpoints, `None` standing for the infinity of that side.
  ///
  /// The inclusivity of an infinite side is ignored. Fails when the end does not come after the start, or at least at the start if both ends are inclusive.
  pub fn try_new(start: Option<T>, end: Option<T>,
    start_inclusive: bool, end_inclusive: bool) -> Result<Interval<T>, IntervalError>
  {
    Interval::try_from_bounds(
      Bound::from_option(start, false),
      Bound::from_option(end, true),
      start_inclusive,
      end_inclusive)
  }

  pub fn try_from_bounds(start: Bound<T>, end: Bound<T>,
    start_inclusive: bool, end_inclusive: bool) -> Result<Interval<T>, IntervalError>
  {
    if start.is_nan() || end.is_nan() || !start.is_comparable() || !end.is_comparable() {
      return Err(IntervalError::IncomparableBound);
    }
    let start_inclusive = start_inclusive && start.is_finite();
    let end_inclusive = end_inclusive && end.is_finite();
    let closed = start_inclusive && end_inclusive;
    let valid = match end.compare(&start) {
      Ordering::Greater => true,
      Ordering::Equal => closed,
      Ordering::Less => false,
    };
    if valid {
      Ok(Interval::from_parts_unchecked(start, end, start_inclusive, end_inclusive))
    }
    else if closed {
      Err(IntervalError::EndNotAtOrAfterStart)
    }
    else {
      Err(IntervalError::EndBeforeStart)
    }
  }

  pub fn with_boundary_type(start: Option<T>, end: Option<T>,
    boundary: BoundaryType) -> Result<Interval<T>, IntervalError>
  {
    let (start_inclusive, end_inclusive) = boundary.inclusivity();
    Interval::try_new(start, end, start_inclusive, end_inclusive)
  }

  fn build(start: Option<T>, end: Option<T>, start_inclusive: bool, end_inclusive: bool) -> Interval<T> {
    match Interval::try_new(start, end, start_inclusive, end_inclusive) {
      Ok(interval) => interval,
      Err(error) => panic!("Cannot build the interval: {}.", error),
    }
  }

  /// `(start, end)`.
  ///
  /// # Panics
  ///
  /// Panics if `end <= start`.
  pub fn open(start: T, end: T) -> Interval<T> {
    Interval::build(Some(start), Some(end), false, false)
  }

  /// `[start, end]`.
  ///
  /// # Panics
  ///
  /// Panics if `end < start`.
  pub fn closed(start: T, end: T) -> Interval<T> {
    Interval::build(Some(start), Some(end), true, true)
  }

  /// `[start, end)`.
  ///
  /// # Panics
  ///
  /// Panics if `end <= start`.
  pub fn closed_open(start: T, end: T) -> Interval<T> {
    Interval::build(Some(start), Some(end), true, false)
  }

  /// `(start, end]`.
  ///
  /// # Panics
  ///
  /// Panics if `end <= start`.
  pub fn open_closed(start: T, end: T) -> Interval<T> {
    Interval::build(Some(start), Some(end), false, true)
  }

  /// `(start, Infinity)`.
  pub fn greater_than(start: T) -> Interval<T> {
    Interval::build(Some(start), None, false, false)
  }

  /// `[start, Infinity)`.
  pub fn at_least(start: T) -> Interval<T> {
    Interval::build(Some(start), None, true, false)
  }

  /// `(-Infinity, end)`.
  pub fn less_than(end: T) -> Interval<T> {
    Interval::build(None, Some(end), false, false)
  }

  /// `(-Infinity, end]`.
  pub fn at_most(end: T) -> Interval<T> {
    Interval::build(None, Some(end), false, true)
  }

  pub fn singleton(value: T) -> Interval<T> where
   T: Clone
  {
    Interval::closed(value.clone(), value)
  }

  pub fn is_empty(&self) -> bool {
    if self.start.is_nan() || self.end.is_nan() {
      return true;
    }
    match self.end.compare(&self.start) {
      Ordering::Greater => false,
      Ordering::Equal => !(self.start_inclusive && self.end_inclusive),
      Ordering::Less => true,
    }
  }

  pub fn is_valid(&self) -> bool {
    !self.is_empty()
  }

  pub fn is_singleton(&self) -> bool {
    self.start_inclusive && self.end_inclusive
      && self.start.compare(&self.end) == Ordering::Equal
  }

  pub fn contains_value(&self, value: &T) -> bool {
    if self.is_empty() {
      return false;
    }
    let after_start = match &self.start {
      Bound::Finite(start) => admits(value.partial_cmp(start), Ordering::Greater, self.start_inclusive),
      Bound::NegInfinity => true,
      _ => false,
    };
    let before_end = match &self.end {
      Bound::Finite(end) => admits(value.partial_cmp(end), Ordering::Less, self.end_inclusive),
      Bound::PosInfinity => true,
      _ => false,
    };
    after_start && before_end
  }

  /// Orders intervals by their end, ties being broken by their start.
  ///
  /// At the same value an exclusive end comes before an inclusive one and an inclusive start before an exclusive one. The empty interval comes first.
  pub fn compare(&self, other: &Interval<T>) -> Ordering {
    cmp_end(self, other).then_with(|| cmp_start(self, other))
  }

  /// Orders intervals by their start, ties being broken by their end. This is the order expected by the [sequence reducers](../sequence/index.html).
  pub fn cmp_by_start(&self, other: &Interval<T>) -> Ordering {
    cmp_start(self, other).then_with(|| cmp_end(self, other))
  }

  pub fn is_less_than(&self, other: &Interval<T>) -> bool {
    self.compare(other) == Ordering::Less
  }

  pub fn is_greater_than(&self, other: &Interval<T>) -> bool {
    self.compare(other) == Ordering::Greater
  }
}

fn admits(order: Option<Ordering>, strict: Ordering, inclusive: bool) -> bool {
  match order {
    Some(Ordering::Equal) => inclusive,
    Some(order) => order == strict,
    None => false,
  }
}

/// Orders the starts of two intervals. At the same value, an inclusive start comes first.
pub(crate) fn cmp_start<T: PartialOrd>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
  a.start.compare(&b.start)
    .then_with(|| b.start_inclusive.cmp(&a.start_inclusive))
}

/// Orders the ends of two intervals. At the same value, an exclusive end comes first.
pub(crate) fn cmp_end<T: PartialOrd>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
  a.end.compare(&b.end)
    .then_with(|| a.end_inclusive.cmp(&b.end_inclusive))
}

impl<T: PartialOrd> PartialOrd for Interval<T>
{
  fn partial_cmp(&self, other: &Interval<T>) -> Option<Ordering> {
    Some(self.compare(other))
  }
}

impl<T: Ord> Ord for Interval<T>
{
  fn cmp(&self, other: &Interval<T>) -> Ordering {
    self.compare(other)
  }
}

/// `[start, end]` with `(`/`)` on exclusive sides and `∅` for the empty interval. The alternate form prints infinities as `∞`.
impl<T> Display for Interval<T> where
 T: Display + PartialOrd
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    if self.is_empty() {
      return formatter.write_str("∅");
    }
    let open = if self.start_inclusive { '[' } else { '(' };
    let close = if self.end_inclusive { ']' } else { ')' };
    if formatter.alternate() {
      write!(formatter, "{}{:#}, {:#}{}", open, self.start, self.end, close)
    }
    else {
      write!(formatter, "{}{}, {}{}", open, self.start, self.end, close)
    }
  }
}

impl<T> Serialize for Interval<T> where
 T: Serialize + PartialOrd
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    if self.is_empty() {
      serializer.serialize_none()
    }
    else {
      serializer.serialize_some(&(
        self.start.value(),
        self.end.value(),
        self.start_inclusive,
        self.end_inclusive))
    }
  }
}

impl<'de, T> Deserialize<'de> for Interval<T> where
 T: Deserialize<'de> + PartialOrd
{
  fn deserialize<D>(deserializer: D) -> Result<Interval<T>, D::Error> where
   D: Deserializer<'de>
  {
    let parts: Option<(Option<T>, Option<T>, bool, bool)> = Deserialize::deserialize(deserializer)?;
    match parts {
      None => Ok(Interval::empty()),
      Some((start, end, start_inclusive, end_inclusive)) =>
        Interval::try_new(start, end, start_inclusive, end_inclusive)
          .map_err(de::Error::custom)
    }
  }
}

impl<T> Collection for Interval<T>
{
  type Item = T;
}

impl<T> Empty for Interval<T>
{
  fn empty() -> Interval<T> {
    Interval::empty()
  }
}

impl<T> Whole for Interval<T>
{
  fn whole() -> Interval<T> {
    Interval::all()
  }
}

impl<T> Singleton for Interval<T> where
 T: PartialOrd + Clone
{
  fn singleton(value: T) -> Interval<T> {
    Interval::singleton(value)
  }
}

impl<T: PartialOrd> IsEmpty for Interval<T>
{
  fn is_empty(&self) -> bool {
    Interval::is_empty(self)
  }
}

impl<T: PartialOrd> IsSingleton for Interval<T>
{
  fn is_singleton(&self) -> bool {
    Interval::is_singleton(self)
  }
}

impl<T: PartialOrd> Contains for Interval<T>
{
  fn contains(&self, value: &T) -> bool {
    self.contains_value(value)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_de_tokens_error, assert_tokens, Token};

  #[test]
  fn construction() {
    let cases = vec![
      (1, Some(1), Some(2), true, true, Ok(BoundaryType::Closed)),
      (2, Some(1), Some(1), true, true, Ok(BoundaryType::Closed)),
      (3, Some(1), Some(1), true, false, Err(IntervalError::EndBeforeStart)),
      (4, Some(1), Some(1), false, false, Err(IntervalError::EndBeforeStart)),
      (5, Some(2), Some(1), true, true, Err(IntervalError::EndNotAtOrAfterStart)),
      (6, Some(2), Some(1), false, true, Err(IntervalError::EndBeforeStart)),
      (7, None, Some(1), true, true, Ok(BoundaryType::OpenClosed)),
      (8, Some(1), None, true, true, Ok(BoundaryType::ClosedOpen)),
      (9, None, None, true, true, Ok(BoundaryType::Open)),
    ];
    for (id, start, end, si, ei, expected) in cases {
      let result = Interval::try_new(start, end, si, ei).map(|i| i.boundary_type());
      assert_eq!(result, expected, "test #{} of construction", id);
    }
  }

  #[test]
  fn error_messages() {
    assert_eq!(Interval::try_new(Some(2), Some(1), true, true).unwrap_err().to_string(),
      "end must be at or after start");
    assert_eq!(Interval::try_new(Some(1), Some(1), false, true).unwrap_err().to_string(),
      "end must be after start");
  }

  #[test]
  #[should_panic(expected = "end must be after start")]
  fn open_without_room() {
    Interval::open(3, 3);
  }

  #[test]
  fn incomparable_bounds() {
    assert_eq!(Interval::try_new(Some(std::f64::NAN), Some(1.0), true, true),
      Err(IntervalError::IncomparableBound));
    assert_eq!(Interval::try_from_bounds(Bound::NaN, Bound::Finite(1), true, true),
      Err(IntervalError::IncomparableBound));
  }

  #[test]
  fn infinite_sides_are_never_inclusive() {
    let i = Interval::try_new(None, Some(4), true, true).unwrap();
    assert_eq!(i, Interval::at_most(4));
    assert!(!i.start_inclusive());
    assert_eq!(Interval::<i32>::try_new(None, None, true, true), Ok(Interval::all()));
  }

  #[test]
  fn named_constructors() {
    assert_eq!(Interval::open(1, 2).into_parts(), (Bound::Finite(1), Bound::Finite(2), false, false));
    assert_eq!(Interval::closed(1, 2).into_parts(), (Bound::Finite(1), Bound::Finite(2), true, true));
    assert_eq!(Interval::closed_open(1, 2).boundary_type(), BoundaryType::ClosedOpen);
    assert_eq!(Interval::open_closed(1, 2).boundary_type(), BoundaryType::OpenClosed);
    assert_eq!(Interval::greater_than(1).into_parts(), (Bound::Finite(1), Bound::PosInfinity, false, false));
    assert_eq!(Interval::at_least(1).into_parts(), (Bound::Finite(1), Bound::PosInfinity, true, false));
    assert_eq!(Interval::less_than(1).into_parts(), (Bound::NegInfinity, Bound::Finite(1), false, false));
    assert_eq!(Interval::at_most(1).into_parts(), (Bound::NegInfinity, Bound::Finite(1), false, true));
    assert_eq!(Interval::singleton(7), Interval::closed(7, 7));
    assert_eq!(Interval::with_boundary_type(Some(1), Some(2), BoundaryType::OpenClosed),
      Ok(Interval::open_closed(1, 2)));
  }

  #[test]
  fn predicates() {
    let empty: Interval<i32> = Interval::empty();
    assert!(empty.is_empty());
    assert!(!empty.is_valid());
    assert!(!empty.is_singleton());
    assert!(Interval::singleton(3).is_singleton());
    assert!(!Interval::closed(3, 4).is_singleton());
    assert!(Interval::closed(3, 4).is_bounded());
    assert!(!Interval::at_least(3).is_bounded());
    assert!(Interval::at_least(3).is_unbounded());
    assert!(!Interval::closed(3, 4).is_unbounded());
    assert!(!Interval::<i32>::empty().is_unbounded());
    assert!(Interval::<i32>::all().is_whole());
    assert!(!Interval::at_least(3).is_whole());
    assert!(!Interval::<i32>::all().is_empty());
  }

  #[test]
  fn membership() {
    let i1_5 = Interval::closed_open(1, 5);
    assert!(i1_5.contains_value(&1));
    assert!(i1_5.contains_value(&4));
    assert!(!i1_5.contains_value(&5));
    assert!(!i1_5.contains_value(&0));
    assert!(Interval::less_than(0).contains_value(&i32::min_value()));
    assert!(!Interval::<i32>::empty().contains_value(&0));
    assert!(Interval::<i32>::all().contains(&0));
    assert!(!Interval::open(0.0, 1.0).contains_value(&std::f64::NAN));
  }

  #[test]
  fn ordering() {
    let ordered = vec![
      Interval::empty(),
      Interval::less_than(0),
      Interval::closed_open(0, 2),
      Interval::open(1, 2),
      Interval::closed(0, 2),
      Interval::open_closed(0, 2),
      Interval::all(),
      Interval::at_least(-5),
      Interval::greater_than(1),
    ];
    for (i, a) in ordered.iter().enumerate() {
      for (j, b) in ordered.iter().enumerate() {
        assert_eq!(a.compare(b), i.cmp(&j), "{} vs {}", a, b);
        assert_eq!(a.is_less_than(b), i < j);
        assert_eq!(a.is_greater_than(b), i > j);
      }
    }
  }

  #[test]
  fn ordering_by_start() {
    let mut intervals = vec![
      Interval::open(1, 4),
      Interval::closed(1, 2),
      Interval::less_than(9),
      Interval::closed(1, 4),
    ];
    intervals.sort_by(|a, b| a.cmp_by_start(b));
    assert_eq!(intervals, vec![
      Interval::less_than(9),
      Interval::closed(1, 2),
      Interval::closed(1, 4),
      Interval::open(1, 4),
    ]);
  }

  #[test]
  fn display() {
    assert_eq!(Interval::closed(1, 2).to_string(), "[1, 2]");
    assert_eq!(Interval::open_closed(1, 2).to_string(), "(1, 2]");
    assert_eq!(Interval::<i32>::all().to_string(), "(-Infinity, Infinity)");
    assert_eq!(format!("{:#}", Interval::at_least(2)), "[2, ∞)");
    assert_eq!(Interval::<i32>::empty().to_string(), "∅");
    assert_eq!(Interval::closed_open(0.5, 1.25).to_string(), "[0.5, 1.25)");
  }

  #[test]
  fn serde_tokens() {
    assert_tokens(&Interval::closed_open(1i32, 2), &[
      Token::Some,
      Token::Tuple { len: 4 },
      Token::Some,
      Token::I32(1),
      Token::Some,
      Token::I32(2),
      Token::Bool(true),
      Token::Bool(false),
      Token::TupleEnd,
    ]);
    assert_tokens(&Interval::at_most(3i32), &[
      Token::Some,
      Token::Tuple { len: 4 },
      Token::None,
      Token::Some,
      Token::I32(3),
      Token::Bool(false),
      Token::Bool(true),
      Token::TupleEnd,
    ]);
    assert_tokens(&Interval::<i32>::empty(), &[Token::None]);
  }

  #[test]
  fn serde_rejects_invalid() {
    assert_de_tokens_error::<Interval<i32>>(&[
      Token::Some,
      Token::Tuple { len: 4 },
      Token::Some,
      Token::I32(3),
      Token::Some,
      Token::I32(1),
      Token::Bool(true),
      Token::Bool(true),
      Token::TupleEnd,
    ], "end must be at or after start");
  }

  #[test]
  fn collection_traits() {
    let empty: Interval<i32> = Empty::empty();
    assert!(IsEmpty::is_empty(&empty));
    let one: Interval<i32> = Singleton::singleton(1);
    assert!(IsSingleton::is_singleton(&one));
    assert_eq!(<Interval<i32> as Whole>::whole(), Interval::all());
  }
}
