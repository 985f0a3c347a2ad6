// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading intervals back from their textual form.
//!
//! The first bracketed pair found in the string is parsed, so `"[1, 2]"` and `"x in (0, 5]"` are both accepted. An empty side, `Infinity` or `∞` stands for an unbounded side. The sign is optional but must match the side, `-` at the start and `+` at the end, and `∅` alone is the empty interval.
//!
//! ```rust
//! use interval_algebra::Interval;
//!
//! let interval: Interval<i32> = "[1, 5)".parse().unwrap();
//! assert_eq!(interval, Interval::closed_open(1, 5));
//! let unbounded: Interval<i32> = "(-∞, 3]".parse().unwrap();
//! assert_eq!(unbounded, Interval::at_most(3));
//! ```

use crate::error::ParseIntervalError;
use crate::interval::Interval;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static INTERVAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\[(]([^,()\[\]]*),([^,()\[\]]*)[\])]").unwrap());

const UNBOUNDED: [&str; 3] = ["", "Infinity", "∞"];
const NEG_INFINITY: [&str; 2] = ["-Infinity", "-∞"];
const POS_INFINITY: [&str; 2] = ["+Infinity", "+∞"];

/// Parses one side. A signed infinity is only accepted on its own side: `-` at the start, `+` at the end.
fn parse_bound<T: FromStr>(text: &str, upper: bool) -> Result<Option<T>, ParseIntervalError<T::Err>> {
  let text = text.trim();
  let (own, other) = if upper { (&POS_INFINITY, &NEG_INFINITY) } else { (&NEG_INFINITY, &POS_INFINITY) };
  if UNBOUNDED.contains(&text) || own.contains(&text) {
    Ok(None)
  }
  else if other.contains(&text) {
    Err(ParseIntervalError::MisplacedInfinity(text.to_string()))
  }
  else {
    text.parse().map(Some).map_err(ParseIntervalError::Bound)
  }
}

impl<T> FromStr for Interval<T> where
 T: FromStr + PartialOrd
{
  type Err = ParseIntervalError<T::Err>;

  fn from_str(input: &str) -> Result<Interval<T>, Self::Err> {
    let input = input.trim();
    if input == "∅" {
      return Ok(Interval::empty());
    }
    let captures = INTERVAL_RE.captures(input).ok_or(ParseIntervalError::NotFound)?;
    let matched = captures.get(0).map_or("", |m| m.as_str());
    tracing::trace!("parsing interval from `{}`", matched);
    let start_inclusive = matched.starts_with('[');
    let end_inclusive = matched.ends_with(']');
    let start = parse_bound(&captures[1], false)?;
    let end = parse_bound(&captures[2], true)?;
    Ok(Interval::try_new(start, end, start_inclusive, end_inclusive)?)
  }
}
