// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Allen's interval relations.
//!
//! Exactly one of the thirteen relations holds between two intervals. The classification first orders the two starts and the two ends, inclusivity breaking ties. Seven of the nine outcomes name a relation directly. When one interval starts and ends before the other, the end of the earlier one is compared with the start of the later one to tell `Before`, `Meets` and `Overlaps` apart.
//!
//! Two facing ends at the same value *meet* according to a [`Touch`](enum.Touch.html) policy. With `Touch::Closed`, the default, both ends must be inclusive, so `[1, 3]` meets `[3, 5]` but `[1, 3]` is before `(3, 5)`. With `Touch::HalfOpen`, one inclusive end is enough, so `[1, 3)` meets `[3, 5]`. Facing ends that are both exclusive leave a hole and the intervals are always `Before`/`After`.
//!
//! The empty interval comes before every other interval and is `Equal` to itself.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::{Interval, Relation, Touch};
//!
//! let a = Interval::closed(1, 3);
//! assert_eq!(a.relation(&Interval::closed(3, 5)), Relation::Meets);
//! assert_eq!(a.relation(&Interval::open(3, 5)), Relation::Before);
//! assert_eq!(a.relation(&Interval::closed(2, 3)), Relation::FinishedBy);
//!
//! let b = Interval::closed_open(1, 3);
//! assert_eq!(b.relation(&Interval::closed(3, 5)), Relation::Before);
//! assert_eq!(b.relation_with(&Interval::closed(3, 5), Touch::HalfOpen), Relation::Meets);
//! ```

use crate::interval::{cmp_end, cmp_start, Interval};
use std::cmp::Ordering;
use trilean::SKleene;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
  Before,
  Meets,
  Overlaps,
  Starts,
  ContainedBy,
  Finishes,
  Equal,
  FinishedBy,
  Contains,
  StartedBy,
  OverlappedBy,
  MetBy,
  After,
}

impl Relation
{
  pub const ALL: [Relation; 13] = [
    Relation::Before,
    Relation::Meets,
    Relation::Overlaps,
    Relation::Starts,
    Relation::ContainedBy,
    Relation::Finishes,
    Relation::Equal,
    Relation::FinishedBy,
    Relation::Contains,
    Relation::StartedBy,
    Relation::OverlappedBy,
    Relation::MetBy,
    Relation::After,
  ];

  /// The relation seen from the other operand: `a.relation(b).inverse() == b.relation(a)`.
  pub fn inverse(self) -> Relation {
    use self::Relation::*;
    match self {
      Before => After,
      Meets => MetBy,
      Overlaps => OverlappedBy,
      Starts => StartedBy,
      ContainedBy => Contains,
      Finishes => FinishedBy,
      Equal => Equal,
      FinishedBy => Finishes,
      Contains => ContainedBy,
      StartedBy => Starts,
      OverlappedBy => Overlaps,
      MetBy => Meets,
      After => Before,
    }
  }

  /// `Before` or `After`: the intervals share no point and are not touching.
  pub fn is_disjoint(self) -> bool {
    self == Relation::Before || self == Relation::After
  }

  /// The first operand lies within the second one.
  pub fn is_within(self) -> bool {
    use self::Relation::*;
    match self {
      Starts | ContainedBy | Finishes | Equal => true,
      _ => false,
    }
  }
}

/// When do two ends at the same value touch each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touch {
  /// Both facing ends must be inclusive.
  Closed,
  /// One inclusive end is enough, half-open neighbours such as `[1, 2)` and `[2, 3)` touch.
  HalfOpen,
}

impl Default for Touch
{
  fn default() -> Touch {
    Touch::Closed
  }
}

impl Touch
{
  fn touches(self, earlier_end_inclusive: bool, later_start_inclusive: bool) -> bool {
    match self {
      Touch::Closed => earlier_end_inclusive && later_start_inclusive,
      Touch::HalfOpen => earlier_end_inclusive || later_start_inclusive,
    }
  }
}

/// Relation of `a` with respect to `b`.
pub fn classify<T: PartialOrd>(a: &Interval<T>, b: &Interval<T>, touch: Touch) -> Relation {
  match (a.is_empty(), b.is_empty()) {
    (true, true) => return Relation::Equal,
    (true, false) => return Relation::Before,
    (false, true) => return Relation::After,
    (false, false) => {}
  }
  use std::cmp::Ordering::*;
  match (cmp_start(a, b), cmp_end(a, b)) {
    (Equal, Equal) => Relation::Equal,
    (Equal, Less) => Relation::Starts,
    (Greater, Less) => Relation::ContainedBy,
    (Greater, Equal) => Relation::Finishes,
    (Less, Equal) => Relation::FinishedBy,
    (Less, Greater) => Relation::Contains,
    (Equal, Greater) => Relation::StartedBy,
    (Less, Less) => classify_apart(a, b, touch),
    (Greater, Greater) => classify_apart(b, a, touch).inverse(),
  }
}

/// `earlier` starts and ends before `later`.
fn classify_apart<T: PartialOrd>(earlier: &Interval<T>, later: &Interval<T>, touch: Touch) -> Relation {
  match earlier.end().compare(later.start()) {
    Ordering::Less => Relation::Before,
    Ordering::Equal if touch.touches(earlier.end_inclusive(), later.start_inclusive()) => Relation::Meets,
    Ordering::Equal => Relation::Before,
    Ordering::Greater => Relation::Overlaps,
  }
}

impl<T: PartialOrd> Interval<T>
{
  /// Relation of `self` with respect to `other` under the default `Touch::Closed` policy.
  pub fn relation(&self, other: &Interval<T>) -> Relation {
    classify(self, other, Touch::default())
  }

  pub fn relation_with(&self, other: &Interval<T>, touch: Touch) -> Relation {
    classify(self, other, touch)
  }

  /// `True` when every point of `self` lies strictly before every point of `other`, `False` when no point of `self` does, `Unknown` otherwise and whenever one operand is empty.
  pub fn precedes(&self, other: &Interval<T>) -> SKleene {
    if self.is_empty() || other.is_empty() {
      return SKleene::Unknown;
    }
    if self.relation(other) == Relation::Before {
      SKleene::True
    }
    else if cmp_start(self, other) != Ordering::Less {
      SKleene::False
    }
    else {
      SKleene::Unknown
    }
  }

  pub fn succeeds(&self, other: &Interval<T>) -> SKleene {
    other.precedes(self)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use super::Relation::*;

  fn check(id: u32, a: Interval<i32>, b: Interval<i32>, touch: Touch, expected: Relation) {
    assert_eq!(a.relation_with(&b, touch), expected,
      "test #{}: {} against {} ({:?})", id, a, b, touch);
    assert_eq!(b.relation_with(&a, touch), expected.inverse(),
      "test #{} (inverse): {} against {} ({:?})", id, b, a, touch);
  }

  #[test]
  fn thirteen_relations() {
    let i0_10 = Interval::closed(0, 10);
    let cases = vec![
      (1, Interval::closed(-5, -1), Before),
      (2, Interval::closed(-5, 0), Meets),
      (3, Interval::closed(-5, 5), Overlaps),
      (4, Interval::closed(0, 5), Starts),
      (5, Interval::closed(2, 5), ContainedBy),
      (6, Interval::closed(5, 10), Finishes),
      (7, Interval::closed(0, 10), Equal),
      (8, Interval::closed(-5, 10), FinishedBy),
      (9, Interval::closed(-5, 15), Contains),
      (10, Interval::closed(0, 15), StartedBy),
      (11, Interval::closed(5, 15), OverlappedBy),
      (12, Interval::closed(10, 15), MetBy),
      (13, Interval::closed(11, 15), After),
    ];
    for (id, a, expected) in cases {
      check(id, a, i0_10, Touch::Closed, expected);
      check(id, a, i0_10, Touch::HalfOpen, expected);
    }
  }

  #[test]
  fn ties_broken_by_inclusivity() {
    let cases = vec![
      (1, Interval::closed_open(0, 10), Interval::closed(0, 10), Starts),
      (2, Interval::open_closed(0, 10), Interval::closed(0, 10), Finishes),
      (3, Interval::open(0, 10), Interval::closed(0, 10), ContainedBy),
      (4, Interval::closed(0, 10), Interval::open(0, 10), Contains),
      (5, Interval::open(0, 10), Interval::open_closed(0, 10), Starts),
      (6, Interval::closed_open(0, 10), Interval::open_closed(0, 10), Overlaps),
      (7, Interval::singleton(0), Interval::closed(0, 10), Starts),
      (8, Interval::singleton(10), Interval::closed(0, 10), Finishes),
      (9, Interval::singleton(0), Interval::open_closed(0, 10), Before),
    ];
    for (id, a, b, expected) in cases {
      check(id, a, b, Touch::Closed, expected);
    }
  }

  // Every boundary combination of two intervals facing each other at 5.
  #[test]
  fn touching_at_a_shared_value() {
    let cases = vec![
      // (earlier end inclusive, later start inclusive, Closed, HalfOpen)
      (1, true, true, Meets, Meets),
      (2, true, false, Before, Meets),
      (3, false, true, Before, Meets),
      (4, false, false, Before, Before),
    ];
    for (id, end_inclusive, start_inclusive, closed, half_open) in cases {
      let a = Interval::try_new(Some(0), Some(5), true, end_inclusive).unwrap();
      let b = Interval::try_new(Some(5), Some(10), start_inclusive, true).unwrap();
      check(id, a, b, Touch::Closed, closed);
      check(id, a, b, Touch::HalfOpen, half_open);
    }
  }

  #[test]
  fn unbounded() {
    let all: Interval<i32> = Interval::all();
    check(1, all, all, Touch::Closed, Equal);
    check(2, Interval::at_most(3), all, Touch::Closed, Starts);
    check(3, Interval::at_least(3), all, Touch::Closed, Finishes);
    check(4, Interval::closed(1, 3), all, Touch::Closed, ContainedBy);
    check(5, Interval::less_than(3), Interval::at_least(3), Touch::Closed, Before);
    check(6, Interval::less_than(3), Interval::at_least(3), Touch::HalfOpen, Meets);
    check(7, Interval::at_most(3), Interval::at_least(3), Touch::Closed, Meets);
    check(8, Interval::at_most(5), Interval::at_least(3), Touch::Closed, Overlaps);
    check(9, Interval::less_than(0), Interval::greater_than(0), Touch::HalfOpen, Before);
  }

  #[test]
  fn empty_interval() {
    let empty: Interval<i32> = Interval::empty();
    check(1, empty, Interval::closed(1, 2), Touch::Closed, Before);
    check(2, empty, Interval::all(), Touch::HalfOpen, Before);
    check(3, empty, empty, Touch::Closed, Equal);
  }

  #[test]
  fn exactly_one_relation() {
    let samples = vec![
      Interval::closed(0, 4),
      Interval::open(0, 4),
      Interval::closed_open(2, 6),
      Interval::open_closed(4, 8),
      Interval::singleton(4),
      Interval::at_most(2),
      Interval::greater_than(4),
      Interval::all(),
    ];
    for touch in [Touch::Closed, Touch::HalfOpen].iter().cloned() {
      for a in &samples {
        for b in &samples {
          let relation = a.relation_with(b, touch);
          assert_eq!(b.relation_with(a, touch), relation.inverse());
          assert_eq!(relation == Equal, a == b);
          assert_eq!(Relation::ALL.iter().filter(|r| **r == relation).count(), 1);
        }
      }
    }
  }

  #[test]
  fn inverse_is_an_involution() {
    for r in Relation::ALL.iter().cloned() {
      assert_eq!(r.inverse().inverse(), r);
      assert_eq!(r.is_disjoint(), r.inverse().is_disjoint());
    }
    assert!(Before.is_disjoint());
    assert!(!Meets.is_disjoint());
    assert!(Starts.is_within());
    assert!(!Contains.is_within());
  }

  #[test]
  fn kleene_precedence() {
    let i0_2 = Interval::closed(0, 2);
    assert_eq!(i0_2.precedes(&Interval::closed(3, 4)), SKleene::True);
    assert_eq!(Interval::closed_open(0, 2).precedes(&Interval::closed(2, 4)), SKleene::True);
    assert_eq!(i0_2.precedes(&Interval::closed(2, 4)), SKleene::Unknown);
    assert_eq!(i0_2.precedes(&Interval::closed(1, 4)), SKleene::Unknown);
    assert_eq!(i0_2.precedes(&Interval::closed(-3, -1)), SKleene::False);
    assert_eq!(i0_2.precedes(&Interval::closed(-3, 0)), SKleene::False);
    assert_eq!(Interval::singleton(1).precedes(&Interval::singleton(1)), SKleene::False);
    assert_eq!(Interval::closed(2, 4).precedes(&Interval::closed(0, 10)), SKleene::False);
    assert_eq!(i0_2.precedes(&Interval::closed(0, 4)), SKleene::False);
    assert_eq!(Interval::closed(2, 4).precedes(&Interval::closed(0, 4)), SKleene::False);
    assert_eq!(i0_2.precedes(&i0_2), SKleene::False);
    assert_eq!(Interval::open(0, 4).precedes(&Interval::closed(0, 2)), SKleene::False);
    assert_eq!(Interval::closed(0, 4).precedes(&Interval::open(0, 2)), SKleene::Unknown);
    assert_eq!(i0_2.precedes(&Interval::empty()), SKleene::Unknown);
    assert_eq!(Interval::closed(3, 4).succeeds(&i0_2), SKleene::True);
  }
}
