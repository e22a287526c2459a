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

//! This module provides some utilities to write unit tests: the textbook
//! instances and a few generators of small instances on which the exponential
//! enumeration remains affordable.
#![cfg(test)]

use crate::Item;

/// The cargo example everybody knows: the optimum for a capacity of 50 is 220.
pub fn textbook_cargo() -> Vec<Item<isize>> {
    cargo(&[(10, 60), (20, 100), (30, 120)])
}

/// The rod cutting price table everybody knows: the optimum for a rod of
/// length 8 is 22.
pub fn textbook_prices() -> Vec<isize> {
    vec![1, 5, 8, 9, 10, 17, 17, 20]
}

/// Turns a list of (weight, value) pairs into items.
pub fn cargo(pairs: &[(isize, isize)]) -> Vec<Item<isize>> {
    pairs.iter().copied().map(Item::from).collect()
}

/// All the cargos of three items whose weights and values are taken from
/// a few representative numbers (including weightless and harmful items).
pub fn small_cargos() -> Vec<Vec<Item<isize>>> {
    const WEIGHTS: [isize; 4] = [0, 1, 3, 5];
    const VALUES : [isize; 3] = [-2, 3, 7];

    let items = WEIGHTS.into_iter()
        .flat_map(|w| VALUES.into_iter().map(move |v| Item::new(w, v)))
        .collect::<Vec<_>>();

    let mut out = vec![];
    for a in items.iter() {
        for b in items.iter() {
            for c in items.iter() {
                out.push(vec![*a, *b, *c]);
            }
        }
    }
    out
}

/// All the price tables of exactly `len` entries whose prices are taken from
/// a few representative numbers (including a negative one).
pub fn small_price_tables(len: usize) -> Vec<Vec<isize>> {
    const PRICES: [isize; 4] = [-1, 1, 3, 4];

    let mut out = vec![vec![]];
    for _ in 0..len {
        out = out.iter()
            .flat_map(|t: &Vec<isize>| PRICES.into_iter().map(move |p| {
                let mut t = t.clone();
                t.push(p);
                t
            }))
            .collect();
    }
    out
}

/// A few price tables covering rods up to length 12.
pub fn longer_price_tables() -> Vec<Vec<isize>> {
    vec![
        vec![1, 5, 8, 9, 10, 17, 17, 20, 24, 30, 31, 33],
        vec![1; 12],
        vec![1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 66, 78],
        vec![-3, 2, -1, 9, 0, 4, 16, -5, 20, 1, 30, 2],
        vec![0; 12],
    ]
}

#[test]
fn small_price_tables_are_exhaustive() {
    assert_eq!(1,    small_price_tables(0).len());
    assert_eq!(4,    small_price_tables(1).len());
    assert_eq!(1024, small_price_tables(5).len());
    assert!(small_price_tables(3).iter().all(|t| t.len() == 3));
}
#[test]
fn small_cargos_are_exhaustive() {
    assert_eq!(12 * 12 * 12, small_cargos().len());
}
