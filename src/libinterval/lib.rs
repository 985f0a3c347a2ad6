// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This library proposes an interval algebra over any partially ordered domain: numbers, dates or any other type comparable with itself. Intervals have an explicit inclusivity on each side and may be unbounded on either side.
//!
//! The algebra covers the thirteen relations between two intervals, set operations (hull, union, intersection, difference and gap), rewriting into another boundary type over a discrete domain, and lazy reducers over sequences of intervals. Intervals implement the collection traits of `gcollections`.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::{Interval, Relation};
//!
//! let a = Interval::closed(1, 3);
//! let b = Interval::closed(3, 5);
//! assert_eq!(a.relation(&b), Relation::Meets);
//! assert!(a.overlaps(&b));
//! assert_eq!(a.union(&b), Some(Interval::closed(1, 5)));
//! assert_eq!(a.to_string(), "[1, 3]");
//! ```
//!
//! For more examples see the [interval module](interval/index.html) and the [sequence module](sequence/index.html).
//!
//! # References
//! * [Allen's interval algebra](https://en.wikipedia.org/wiki/Allen%27s_interval_algebra)
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//!

pub mod bound;
pub mod boundary;
pub mod canonical;
pub mod error;
pub mod interval;
pub mod ops;
pub mod parse;
pub mod relation;
pub mod sequence;
pub mod set_operations;

pub use bound::Bound;
pub use boundary::BoundaryType;
pub use error::{IntervalError, ParseIntervalError};
pub use interval::Interval;
pub use ops::{Hull, Whole};
pub use relation::{Relation, Touch};
pub use sequence::PairwiseExt;
