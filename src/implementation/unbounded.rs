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

//! This module provides the solver of the unbounded knapsack problem, in its
//! rod cutting flavor: how should a rod be cut in pieces so as to maximize the
//! revenue obtained from selling these pieces ? Any piece length may be cut as
//! many times as desired.
//!
//! The value table is filled by increasing rod lengths. The best value for a
//! rod of length `l` refers to the very same table (`table[l - i]`) which has
//! already been completed for all shorter rods, possibly using a piece of
//! length `i` already. This self reference is what permits unlimited reuse.

use tracing::{debug, trace};

use crate::{Decision, Error, Selection, Value, Variable};

use super::check_price_table;

/// Returns the maximum revenue obtainable by cutting a rod of length `length`
/// into pieces, where `prices[i]` is the price of a piece of length `i + 1`.
/// Cutting nothing (or leaving part of the rod unsold) is always allowed and
/// is worth nothing.
///
/// # Memory
/// The value table holds `length + 1` values. Since the price table must
/// cover every piece length up to `length`, the table is never larger than
/// the prices the caller already holds.
///
/// # Examples:
/// ```
/// # use dpsel::unbounded_select;
/// let prices = [1, 5, 8, 9, 10, 17, 17, 20];
/// assert_eq!(Ok(22), unbounded_select(&prices, 8));
/// ```
pub fn unbounded_select<V: Value>(prices: &[V], length: isize) -> Result<V, Error> {
    let n = check_price_table(prices, length)?;
    debug!(length, nb_prices = prices.len(), "unbounded selection");

    let table = cut(prices, n, |_, _| {});

    let best_value = table[n];
    trace!(?best_value, "unbounded selection complete");
    Ok(best_value)
}

/// Same as `unbounded_select` but also tells how the rod should be cut. The
/// decision `[[ Variable(i) = k ]]` means that `k` pieces of length `i + 1`
/// are cut.
pub fn unbounded_select_solution<V: Value>(prices: &[V], length: isize) -> Result<Selection<V>, Error> {
    let n = check_price_table(prices, length)?;
    debug!(length, nb_prices = prices.len(), "unbounded selection (with solution)");

    // first_cut[l] is the length of the first piece cut off a rod of length l
    // (zero when the rod is best left uncut)
    let mut first_cut = vec![0_usize; n + 1];
    let table = cut(prices, n, |l, i| first_cut[l] = i);

    let mut count = vec![0_isize; n];
    let mut l = n;
    while first_cut[l] > 0 {
        let piece = first_cut[l];
        count[piece - 1] += 1;
        l -= piece;
    }
    let decisions = count.iter().copied().enumerate()
        .filter(|(_, k)| *k > 0)
        .map(|(i, k)| Decision { variable: Variable(i), value: k })
        .collect::<Vec<_>>();

    let best_value = table[n];
    trace!(?best_value, nb_pieces = count.iter().sum::<isize>(), "unbounded selection complete");
    Ok(Selection { best_value, decisions })
}

/// Fills the value table. The callback `on_improve` is told about each
/// (rod length, piece length) pair for which cutting the piece strictly
/// improved the best value known for that rod length.
fn cut<V, F>(prices: &[V], n: usize, mut on_improve: F) -> Vec<V>
where V: Value,
      F: FnMut(usize, usize)
{
    let mut table = vec![V::zero(); n + 1];
    for l in 1..=n {
        let mut best = V::zero();
        for i in 1..=l {
            let candidate = prices[i - 1] + table[l - i];
            if candidate > best {
                best = candidate;
                on_improve(l, i);
            }
        }
        table[l] = best;
    }
    table
}
