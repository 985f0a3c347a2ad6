// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rewriting an interval into another boundary type.
//!
//! The domain is assumed to be discrete with a given step, such as `1` for integers or one day for dates. An exclusive finite end becoming inclusive moves one step inward, an inclusive finite end becoming exclusive moves one step outward. Infinite ends never move and never become inclusive. When no value of the domain is left, the result is the empty interval. The empty interval and `All` are left unchanged.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::{BoundaryType, Interval};
//!
//! assert_eq!(Interval::open(6, 10).closure(1), Interval::closed(7, 9));
//! assert_eq!(Interval::closed(1, 2).canonicalize(BoundaryType::Open, 1), Interval::open(0, 3));
//! assert_eq!(Interval::less_than(5).closure(1), Interval::at_most(4));
//! ```

use crate::bound::Bound;
use crate::boundary::BoundaryType;
use crate::error::IntervalError;
use crate::interval::Interval;
use num_traits::PrimInt;
use std::convert::Infallible;
use std::ops::{Add, Sub};

impl<T> Interval<T> where
 T: PartialOrd + Clone
{
  /// Rewrites `self` into `target`. `add` and `sub` apply `step` to a finite endpoint.
  pub fn canonicalize_with<S, A, D>(&self, target: BoundaryType, step: &S, add: A, sub: D) -> Interval<T> where
   A: Fn(&T, &S) -> T,
   D: Fn(&T, &S) -> T
  {
    let forward = |value: &T| Ok::<T, Infallible>(add(value, step));
    let backward = |value: &T| Ok::<T, Infallible>(sub(value, step));
    match self.rewrite(target, forward, backward) {
      Ok(interval) => interval,
      Err(never) => match never {},
    }
  }

  pub fn canonicalize<S>(&self, target: BoundaryType, step: S) -> Interval<T> where
   T: Add<S, Output=T> + Sub<S, Output=T>,
   S: Clone
  {
    self.canonicalize_with(target, &step,
      |value, step| value.clone() + step.clone(),
      |value, step| value.clone() - step.clone())
  }

  /// Closed rewriting of `self`: `(6, 10)` becomes `[7, 9]` with a step of `1`.
  pub fn closure<S>(&self, step: S) -> Interval<T> where
   T: Add<S, Output=T> + Sub<S, Output=T>,
   S: Clone
  {
    self.canonicalize(BoundaryType::Closed, step)
  }

  /// Open rewriting of `self`: `[6, 10]` becomes `(5, 11)` with a step of `1`.
  pub fn interior<S>(&self, step: S) -> Interval<T> where
   T: Add<S, Output=T> + Sub<S, Output=T>,
   S: Clone
  {
    self.canonicalize(BoundaryType::Open, step)
  }

  pub fn closure_with<S, A, D>(&self, step: &S, add: A, sub: D) -> Interval<T> where
   A: Fn(&T, &S) -> T,
   D: Fn(&T, &S) -> T
  {
    self.canonicalize_with(BoundaryType::Closed, step, add, sub)
  }

  pub fn interior_with<S, A, D>(&self, step: &S, add: A, sub: D) -> Interval<T> where
   A: Fn(&T, &S) -> T,
   D: Fn(&T, &S) -> T
  {
    self.canonicalize_with(BoundaryType::Open, step, add, sub)
  }

  /// Integer rewriting with a step of one. Fails if an end leaves the range of `T`.
  pub fn canonicalize_discrete(&self, target: BoundaryType) -> Result<Interval<T>, IntervalError> where
   T: PrimInt
  {
    self.rewrite(target,
      |value| value.checked_add(&T::one()).ok_or(IntervalError::Overflow),
      |value| value.checked_sub(&T::one()).ok_or(IntervalError::Overflow))
  }

  fn rewrite<E, A, D>(&self, target: BoundaryType, forward: A, backward: D) -> Result<Interval<T>, E> where
   A: Fn(&T) -> Result<T, E>,
   D: Fn(&T) -> Result<T, E>
  {
    if self.is_empty() {
      return Ok(self.clone());
    }
    let (start_inclusive, end_inclusive) = target.inclusivity();
    let start = match self.start() {
      Bound::Finite(value) if !self.start_inclusive() && start_inclusive => Bound::Finite(forward(value)?),
      Bound::Finite(value) if self.start_inclusive() && !start_inclusive => Bound::Finite(backward(value)?),
      bound => bound.clone(),
    };
    let end = match self.end() {
      Bound::Finite(value) if !self.end_inclusive() && end_inclusive => Bound::Finite(backward(value)?),
      Bound::Finite(value) if self.end_inclusive() && !end_inclusive => Bound::Finite(forward(value)?),
      bound => bound.clone(),
    };
    match Interval::try_from_bounds(start, end, start_inclusive, end_inclusive) {
      Ok(interval) => Ok(interval),
      Err(error) => {
        tracing::debug!("no value left when rewriting into {:?} ({}), the interval is empty", target, error);
        Ok(Interval::empty())
      }
    }
  }
}
