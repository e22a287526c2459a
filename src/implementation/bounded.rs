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

//! This module provides the solver of the bounded (0/1) knapsack problem:
//! which cargo items should an aircraft carry so as to maximize its revenue
//! without exceeding its maximum cargo capacity ?
//!
//! The value table is a single row which is overwritten once per item. That
//! row is always traversed from the largest capacity down to the weight of the
//! item being considered. This guarantees that `table[k - weight]` still holds
//! the best value achievable *without* the current item when `table[k]` gets
//! updated, hence that no item is ever loaded twice. Traversing the row the
//! other way round would silently turn this algorithm into the unbounded one.

use bit_vec::BitVec;
use tracing::{debug, trace};

use crate::{Decision, Error, Item, Malformation, Selection, Value, Variable};

use super::check_capacity;

/// Returns the maximum total value of a subset of `items` whose total weight
/// does not exceed `capacity`. Each item is used at most once.
///
/// # Preconditions
/// The capacity and all the weights must be non negative. Items weighing
/// nothing are tolerated, but it is up to the caller to decide whether a free
/// item makes sense in its model (it is counted once).
///
/// # Memory
/// The value table holds `capacity + 1` values. A huge capacity is not
/// rejected but its table may not fit in memory, in which case the process
/// aborts on allocation failure.
///
/// # Examples:
/// ```
/// # use dpsel::{bounded_select, Item};
/// let cargo = [Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)];
/// assert_eq!(Ok(220), bounded_select(&cargo, 50));
/// ```
pub fn bounded_select<V: Value>(items: &[Item<V>], capacity: isize) -> Result<V, Error> {
    let capa = check_items(items, capacity)?;
    debug!(capacity, nb_items = items.len(), "bounded selection");

    let table = load(items, capa, |_, _| {});

    let best_value = table[capa];
    trace!(?best_value, "bounded selection complete");
    Ok(best_value)
}

/// Same as `bounded_select`, but also tells which items are part of the
/// optimal selection. Each selected item appears once (with value 1) in the
/// decisions, in the order of the input.
///
/// On top of the value table, this keeps one bit per (item, capacity) pair.
///
/// When several subsets reach the optimum, the one that was found first is
/// retained: an item only displaces the current best when it strictly
/// improves it.
pub fn bounded_select_solution<V: Value>(items: &[Item<V>], capacity: isize) -> Result<Selection<V>, Error> {
    let capa = check_items(items, capacity)?;
    debug!(capacity, nb_items = items.len(), "bounded selection (with solution)");

    // improved[i][k] iff item i was loaded in the best selection of capacity k
    // when considering the items 0..=i only
    let mut improved = vec![BitVec::from_elem(capa + 1, false); items.len()];
    let table = load(items, capa, |i, k| improved[i].set(k, true));

    let mut decisions = vec![];
    let mut remaining = capa;
    for (i, item) in items.iter().enumerate().rev() {
        if improved[i][remaining] {
            decisions.push(Decision { variable: Variable(i), value: 1 });
            remaining -= item.weight as usize;
        }
    }
    decisions.reverse();

    let best_value = table[capa];
    trace!(?best_value, nb_items = decisions.len(), "bounded selection complete");
    Ok(Selection { best_value, decisions })
}

/// Validates the request and returns the capacity as an index in the table.
fn check_items<V>(items: &[Item<V>], capacity: isize) -> Result<usize, Error> {
    let capa = check_capacity(capacity)?;
    if let Some((index, item)) = items.iter().enumerate().find(|(_, it)| it.weight < 0) {
        return Err(Malformation::NegativeWeight { index, weight: item.weight }.into());
    }
    Ok(capa)
}

/// Fills the value table. The callback `on_improve` is told about each
/// (item, capacity) pair for which loading the item strictly improved the
/// best known value.
fn load<V, F>(items: &[Item<V>], capa: usize, mut on_improve: F) -> Vec<V>
where V: Value,
      F: FnMut(usize, usize)
{
    let mut table = vec![V::zero(); capa + 1];
    for (i, item) in items.iter().enumerate() {
        let weight = item.weight as usize;
        // empty whenever the item is heavier than the whole capacity
        for k in (weight..=capa).rev() {
            let candidate = table[k - weight] + item.value;
            if candidate > table[k] {
                table[k] = candidate;
                on_improve(i, k);
            }
        }
    }
    table
}
