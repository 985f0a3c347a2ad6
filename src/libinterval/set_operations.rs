// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pairwise set operations on intervals.
//!
//! The hull of two intervals always exists. The union, intersection, difference and gap exist only when the result is a single non-empty interval, otherwise `None` is returned. For non-empty operands, all operations are consistent with the [relation](../relation/index.html) of the operands:
//!
//! * `a.overlaps(&b)` iff the relation is neither `Before` nor `After`, and then `a.intersect(&b)` exists.
//! * `a.is_connected(&b)` iff the relation under `Touch::HalfOpen` is neither `Before` nor `After`, and then `a.union(&b)` is the hull.
//! * `a.gap(&b)` exists iff the intervals are not connected.
//!
//! The empty interval overlaps and connects with nothing, so its union, intersection and gap with any interval are `None`. Its hull with `x` is `x`.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::Interval;
//!
//! let a = Interval::closed(0, 4);
//! let b = Interval::closed(6, 10);
//! assert_eq!(a.hull(&b), Interval::closed(0, 10));
//! assert_eq!(a.union(&b), None);
//! assert_eq!(a.gap(&b), Some(Interval::open(4, 6)));
//! assert_eq!(a.intersect(&Interval::closed(2, 8)), Some(Interval::closed(2, 4)));
//! assert_eq!(Interval::closed_open(1, 3).union(&Interval::closed(3, 5)), Some(Interval::closed(1, 5)));
//! ```

use crate::bound::Bound;
use crate::interval::{cmp_end, cmp_start, Interval};
use crate::ops::Hull;
use crate::relation::{Relation, Touch};
use gcollections::ops::*;
use std::cmp::Ordering;

impl<T> Interval<T> where
 T: PartialOrd + Clone
{
  /// The two intervals share at least one point, ends at the same value touching as defined by `Touch::Closed`.
  pub fn overlaps(&self, other: &Interval<T>) -> bool {
    self.overlaps_with(other, Touch::Closed)
  }

  pub fn overlaps_with(&self, other: &Interval<T>, touch: Touch) -> bool {
    !self.is_empty() && !other.is_empty()
      && !self.relation_with(other, touch).is_disjoint()
  }

  /// No value lies between the two intervals, so their union is a single interval.
  pub fn is_connected(&self, other: &Interval<T>) -> bool {
    self.overlaps_with(other, Touch::HalfOpen)
  }

  pub fn is_subset(&self, other: &Interval<T>) -> bool {
    if self.is_empty() { true }
    else if other.is_empty() { false }
    else {
      self.relation(other).is_within()
    }
  }

  pub fn hull(&self, other: &Interval<T>) -> Interval<T> {
    if self.is_empty() { other.clone() }
    else if other.is_empty() { self.clone() }
    else {
      let first = if cmp_start(self, other) == Ordering::Greater { other } else { self };
      let last = if cmp_end(self, other) == Ordering::Less { other } else { self };
      Interval::from_parts_unchecked(
        first.start().clone(),
        last.end().clone(),
        first.start_inclusive(),
        last.end_inclusive())
    }
  }

  pub fn union(&self, other: &Interval<T>) -> Option<Interval<T>> {
    if self.is_connected(other) {
      Some(self.hull(other))
    }
    else {
      None
    }
  }

  pub fn intersect(&self, other: &Interval<T>) -> Option<Interval<T>> {
    if self.is_empty() || other.is_empty() {
      return None;
    }
    let last_start = if cmp_start(self, other) == Ordering::Less { other } else { self };
    let first_end = if cmp_end(self, other) == Ordering::Greater { other } else { self };
    Interval::try_from_bounds(
      last_start.start().clone(),
      first_end.end().clone(),
      last_start.start_inclusive(),
      first_end.end_inclusive()).ok()
  }

  /// Parts of `self` lying before and after `other`.
  pub fn difference(&self, other: &Interval<T>) -> (Option<Interval<T>>, Option<Interval<T>>) {
    if self.is_empty() {
      return (None, None);
    }
    if other.is_empty() {
      return (Some(self.clone()), None);
    }
    let below = match other.start() {
      Bound::Finite(_) => Interval::try_from_bounds(
        Bound::NegInfinity, other.start().clone(), false, !other.start_inclusive()).ok(),
      _ => None,
    };
    let above = match other.end() {
      Bound::Finite(_) => Interval::try_from_bounds(
        other.end().clone(), Bound::PosInfinity, !other.end_inclusive(), false).ok(),
      _ => None,
    };
    (below.and_then(|below| self.intersect(&below)),
     above.and_then(|above| self.intersect(&above)))
  }

  /// `self` without `other`, when the operands overlap and the remainder is a single non-empty interval.
  pub fn except(&self, other: &Interval<T>) -> Option<Interval<T>> {
    if !self.overlaps(other) {
      return None;
    }
    match self.difference(other) {
      (Some(left), None) => Some(left),
      (None, Some(right)) => Some(right),
      _ => None,
    }
  }

  /// Values lying strictly between two intervals that are not connected.
  ///
  /// The gap exists when the relation under `Touch::HalfOpen` is `Before` or `After`, so `[1, 3)` and `[3, 5]` have no gap although they are `Before` under the default policy.
  pub fn gap(&self, other: &Interval<T>) -> Option<Interval<T>> {
    if self.is_empty() || other.is_empty() {
      return None;
    }
    let (earlier, later) = match self.relation_with(other, Touch::HalfOpen) {
      Relation::Before => (self, other),
      Relation::After => (other, self),
      _ => return None,
    };
    Interval::try_from_bounds(
      earlier.end().clone(),
      later.start().clone(),
      !earlier.end_inclusive(),
      !later.start_inclusive()).ok()
  }

  pub fn union_or(&self, other: &Interval<T>, default: Interval<T>) -> Interval<T> {
    self.union(other).unwrap_or(default)
  }

  pub fn intersect_or(&self, other: &Interval<T>, default: Interval<T>) -> Interval<T> {
    self.intersect(other).unwrap_or(default)
  }

  pub fn except_or(&self, other: &Interval<T>, default: Interval<T>) -> Interval<T> {
    self.except(other).unwrap_or(default)
  }

  pub fn gap_or(&self, other: &Interval<T>, default: Interval<T>) -> Interval<T> {
    self.gap(other).unwrap_or(default)
  }
}

impl<T> Hull for Interval<T> where
 T: PartialOrd + Clone
{
  type Output = Interval<T>;

  fn hull(&self, other: &Interval<T>) -> Interval<T> {
    Interval::hull(self, other)
  }
}

impl<T> Union for Interval<T> where
 T: PartialOrd + Clone
{
  type Output = Option<Interval<T>>;

  fn union(&self, other: &Interval<T>) -> Option<Interval<T>> {
    Interval::union(self, other)
  }
}

impl<T> Intersection for Interval<T> where
 T: PartialOrd + Clone
{
  type Output = Option<Interval<T>>;

  fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>> {
    self.intersect(other)
  }
}

impl<T> Difference for Interval<T> where
 T: PartialOrd + Clone
{
  type Output = (Option<Interval<T>>, Option<Interval<T>>);

  fn difference(&self, other: &Interval<T>) -> (Option<Interval<T>>, Option<Interval<T>>) {
    Interval::difference(self, other)
  }
}

impl<T> Overlap for Interval<T> where
 T: PartialOrd + Clone
{
  fn overlap(&self, other: &Interval<T>) -> bool {
    self.overlaps(other)
  }
}

impl<T> Disjoint for Interval<T> where
 T: PartialOrd + Clone
{
  fn is_disjoint(&self, other: &Interval<T>) -> bool {
    !self.overlaps(other)
  }
}

impl<T> Subset for Interval<T> where
 T: PartialOrd + Clone
{
  fn is_subset(&self, other: &Interval<T>) -> bool {
    Interval::is_subset(self, other)
  }
}

impl<T> ProperSubset for Interval<T> where
 T: PartialOrd + Clone
{
  fn is_proper_subset(&self, other: &Interval<T>) -> bool {
    Interval::is_subset(self, other) && self != other
  }
}
