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

//! This module provides an exhaustive (and exponential) enumeration of all
//! the ways to cut a rod. It does not memoize anything on purpose: it is only
//! meant to serve as an independent oracle to check the results of
//! `unbounded_select` on small instances. Keep the rod length well below 30.
//! The recursion also goes one stack frame deeper per piece cut: a rod of a
//! few million units cut in unit pieces overflows the stack.

use tracing::{debug, trace};

use crate::{Error, Malformation, Value};

use super::check_capacity;

/// Returns the maximum revenue obtainable from a rod of length
/// `remaining_length` when only the pieces of length `1..=eligible_index` may
/// be cut. `prices[i]` is the price of a piece of length `i + 1`.
///
/// `reference_enumerate(prices, n, n)` is the unrestricted problem, and it
/// always agrees with `unbounded_select(prices, n)`.
///
/// # Examples:
/// ```
/// # use dpsel::reference_enumerate;
/// let prices = [1, 5, 8, 9, 10, 17, 17, 20];
/// assert_eq!(Ok(22), reference_enumerate(&prices, 8, 8));
/// assert_eq!(Ok(8),  reference_enumerate(&prices, 1, 8));
/// ```
pub fn reference_enumerate<V: Value>(prices: &[V], eligible_index: isize, remaining_length: isize) -> Result<V, Error> {
    let n = check_capacity(remaining_length)?;
    let i = usize::try_from(eligible_index).ok()
        .filter(|i| *i <= prices.len())
        .ok_or(Malformation::EligibleIndexOutOfRange { index: eligible_index, max: prices.len() })?;
    debug!(eligible_index, remaining_length, "reference enumeration");

    let best_value = enumerate(prices, i, n);
    trace!(?best_value, "reference enumeration complete");
    Ok(best_value)
}

/// Either piece length `i` is never cut (and we move on to the shorter ones)
/// or one piece of length `i` is cut and `i` remains eligible.
fn enumerate<V: Value>(prices: &[V], i: usize, n: usize) -> V {
    if i == 0 || n == 0 {
        return V::zero();
    }

    let skip = enumerate(prices, i - 1, n);
    if i <= n {
        let take = prices[i - 1] + enumerate(prices, i, n - i);
        if take > skip {
            return take;
        }
    }
    skip
}
