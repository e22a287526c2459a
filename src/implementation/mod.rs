// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the actual selection algorithms:
//!
//! * `bounded` solves the 0/1 knapsack problem (each item at most once),
//! * `unbounded` solves the rod cutting problem (each length any number of times),
//! * `reference` enumerates all the cuttings of a rod. It is exponential and is
//!   only meant to serve as an oracle against which `unbounded` is checked.

mod bounded;
mod unbounded;
mod reference;

pub use bounded::*;
pub use unbounded::*;
pub use reference::*;

use crate::{Error, Malformation};

/// Checks that the given capacity is non negative and returns it as an index
/// in the value table.
pub(crate) fn check_capacity(capacity: isize) -> Result<usize, Error> {
    usize::try_from(capacity).map_err(|_| Error::InvalidCapacity(capacity))
}

/// Checks that the price table covers all piece lengths from 1 to `length`
/// and returns the length as an index in the value table.
pub(crate) fn check_price_table<V>(prices: &[V], length: isize) -> Result<usize, Error> {
    let n = check_capacity(length)?;
    if prices.len() < n {
        return Err(Malformation::PriceTableTooShort { required: length, available: prices.len() }.into());
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use crate::{Error, Malformation};
    use super::{check_capacity, check_price_table};

    #[test]
    fn a_non_negative_capacity_is_accepted() {
        assert_eq!(Ok(0),  check_capacity(0));
        assert_eq!(Ok(50), check_capacity(50));
    }
    #[test]
    fn a_negative_capacity_is_rejected() {
        assert_eq!(Err(Error::InvalidCapacity(-1)), check_capacity(-1));
        assert_eq!(Err(Error::InvalidCapacity(isize::MIN)), check_capacity(isize::MIN));
    }
    #[test]
    fn a_price_table_may_be_longer_than_needed() {
        assert_eq!(Ok(2), check_price_table(&[1, 5, 8], 2));
        assert_eq!(Ok(0), check_price_table::<isize>(&[], 0));
    }
    #[test]
    fn a_price_table_must_not_be_shorter_than_needed() {
        assert_eq!(
            Err(Error::MalformedInput(Malformation::PriceTableTooShort{required: 4, available: 3})),
            check_price_table(&[1, 5, 8], 4));
    }
    #[test]
    fn the_length_is_checked_before_the_price_table() {
        assert_eq!(Err(Error::InvalidCapacity(-2)), check_price_table::<isize>(&[], -2));
    }
}
