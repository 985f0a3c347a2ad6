// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Set operations over sequences of intervals.
//!
//! The reducers combine neighbouring elements of a sequence sorted by start (see [`sort_by_start`](fn.sort_by_start.html)). They are built on two lazy adaptors:
//!
//! * [`pairwise`](trait.PairwiseExt.html#method.pairwise) yields `f(previous, current)` for each pair of consecutive elements, `n - 1` results for `n` elements.
//! * [`reduce_adjacent`](trait.PairwiseExt.html#method.reduce_adjacent) folds from the left as long as `f` combines the accumulated value with the next element. When `f` returns `None`, the accumulated value is yielded and the fold restarts from the next element. The last accumulated value is always yielded.
//!
//! Both advance the underlying iterator once per element and work on infinite sequences.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::Interval;
//! use interval_algebra::sequence::{complement, sort_by_start, union_all};
//!
//! let mut intervals = vec![
//!   Interval::closed(5, 7),
//!   Interval::closed(1, 3),
//!   Interval::closed_open(2, 4),
//! ];
//! sort_by_start(&mut intervals);
//! let merged: Vec<_> = union_all(intervals).collect();
//! assert_eq!(merged, vec![Interval::closed_open(1, 4), Interval::closed(5, 7)]);
//! let holes: Vec<_> = complement(merged).collect();
//! assert_eq!(holes, vec![Interval::closed_open(4, 5)]);
//! ```

use crate::interval::Interval;
use std::iter::{Fuse, FusedIterator};

pub struct Pairwise<I: Iterator, F>
{
  iter: Fuse<I>,
  previous: Option<I::Item>,
  f: F,
}

impl<I, F, R> Iterator for Pairwise<I, F> where
 I: Iterator,
 F: FnMut(&I::Item, &I::Item) -> R
{
  type Item = R;

  fn next(&mut self) -> Option<R> {
    let previous = match self.previous.take() {
      Some(previous) => previous,
      None => self.iter.next()?,
    };
    let current = self.iter.next()?;
    let result = (self.f)(&previous, &current);
    self.previous = Some(current);
    Some(result)
  }
}

impl<I, F, R> FusedIterator for Pairwise<I, F> where
 I: Iterator,
 F: FnMut(&I::Item, &I::Item) -> R
{}

pub struct Reduce<I: Iterator, F>
{
  iter: Fuse<I>,
  pending: Option<I::Item>,
  f: F,
}

impl<I, F> Iterator for Reduce<I, F> where
 I: Iterator,
 F: FnMut(&I::Item, &I::Item) -> Option<I::Item>
{
  type Item = I::Item;

  fn next(&mut self) -> Option<I::Item> {
    let mut accumulated = match self.pending.take() {
      Some(pending) => pending,
      None => self.iter.next()?,
    };
    while let Some(current) = self.iter.next() {
      match (self.f)(&accumulated, &current) {
        Some(combined) => accumulated = combined,
        None => {
          self.pending = Some(current);
          break;
        }
      }
    }
    Some(accumulated)
  }
}

impl<I, F> FusedIterator for Reduce<I, F> where
 I: Iterator,
 F: FnMut(&I::Item, &I::Item) -> Option<I::Item>
{}

pub trait PairwiseExt: Iterator + Sized
{
  fn pairwise<F, R>(self, f: F) -> Pairwise<Self, F> where
   F: FnMut(&Self::Item, &Self::Item) -> R
  {
    Pairwise {
      iter: self.fuse(),
      previous: None,
      f: f,
    }
  }

  fn reduce_adjacent<F>(self, f: F) -> Reduce<Self, F> where
   F: FnMut(&Self::Item, &Self::Item) -> Option<Self::Item>
  {
    Reduce {
      iter: self.fuse(),
      pending: None,
      f: f,
    }
  }
}

impl<I: Iterator> PairwiseExt for I {}

/// Sorts by start, ties broken by end, as expected by the reducers of this module.
pub fn sort_by_start<T: PartialOrd>(intervals: &mut [Interval<T>]) {
  intervals.sort_by(|a, b| a.cmp_by_start(b));
}

fn fallback<T: Clone>(default: &Interval<T>) -> Interval<T> {
  tracing::trace!("no single interval combines the neighbours, falling back to the default");
  default.clone()
}

/// Merges connected neighbours.
pub fn union_all<T, I>(intervals: I) -> impl Iterator<Item=Interval<T>> where
 I: IntoIterator<Item=Interval<T>>,
 T: PartialOrd + Clone
{
  intervals.into_iter().reduce_adjacent(|a, b| a.union(b))
}

pub fn union_all_or<T, I>(intervals: I, default: Interval<T>) -> impl Iterator<Item=Interval<T>> where
 I: IntoIterator<Item=Interval<T>>,
 T: PartialOrd + Clone
{
  intervals.into_iter()
    .reduce_adjacent(move |a, b| Some(a.union(b).unwrap_or_else(|| fallback(&default))))
}

/// Intersects overlapping neighbours.
pub fn intersect_all<T, I>(intervals: I) -> impl Iterator<Item=Interval<T>> where
 I: IntoIterator<Item=Interval<T>>,
 T: PartialOrd + Clone
{
  intervals.into_iter().reduce_adjacent(|a, b| a.intersect(b))
}

pub fn intersect_all_or<T, I>(intervals: I, default: Interval<T>) -> impl Iterator<Item=Interval<T>> where
 I: IntoIterator<Item=Interval<T>>,
 T: PartialOrd + Clone
{
  intervals.into_iter()
    .reduce_adjacent(move |a, b| Some(a.intersect(b).unwrap_or_else(|| fallback(&default))))
}

/// Removes from each accumulated interval its overlapping successor.
pub fn except_all<T, I>(intervals: I) -> impl Iterator<Item=Interval<T>> where
 I: IntoIterator<Item=Interval<T>>,
 T: PartialOrd + Clone
{
  intervals.into_iter().reduce_adjacent(|a, b| a.except(b))
}

pub fn except_all_or<T, I>(intervals: I, default: Interval<T>) -> impl Iterator<Item=Interval<T>> where
 I: IntoIterator<Item=Interval<T>>,
 T: PartialOrd + Clone
{
  intervals.into_iter()
    .reduce_adjacent(move |a, b| Some(a.except(b).unwrap_or_else(|| fallback(&default))))
}

/// Gaps between consecutive intervals.
pub fn complement<T, I>(intervals: I) -> impl Iterator<Item=Interval<T>> where
 I: IntoIterator<Item=Interval<T>>,
 T: PartialOrd + Clone
{
  intervals.into_iter()
    .pairwise(|a, b| a.gap(b))
    .flatten()
}

/// Hull of all the intervals, `None` for an empty sequence.
pub fn hull_all<T, I>(intervals: I) -> Option<Interval<T>> where
 I: IntoIterator<Item=Interval<T>>,
 T: PartialOrd + Clone
{
  intervals.into_iter().fold(None, |hull, interval| match hull {
    Some(hull) => Some(Interval::hull(&hull, &interval)),
    None => Some(interval),
  })
}
