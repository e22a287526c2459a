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

//! # DPSEL
//! DPSEL is a small library of dynamic programs solving the two classic
//! flavors of the knapsack problem: "choose items so as to maximize their
//! value without exceeding a capacity".
//!
//! * In its **bounded** flavor (0/1 knapsack), each item may be selected at
//!   most once. This is for instance the problem of an airline which must
//!   decide which cargo items to load in its aircraft so as to maximize its
//!   revenue without exceeding the maximum cargo capacity. See `bounded_select`.
//! * In its **unbounded** flavor, the same "item" may be selected any number
//!   of times. This is for instance the rod cutting problem where a rod must
//!   be cut in pieces whose lengths are chosen so as to maximize the revenue
//!   of selling them. See `unbounded_select`.
//!
//! Both dynamic programs use a single row of values indexed by capacity. The
//! crux lies in the direction in which that row is traversed: backward in the
//! bounded case (so that an item never meets a value it already contributed
//! to) and forward in the unbounded case (so that it does).
//!
//! In addition to these, the library offers `reference_enumerate`, a plain
//! exponential enumeration of all rod cuttings which serves as an oracle to
//! validate the unbounded selector on small instances.
//!
//! ## Quick Example
//! ```
//! # use dpsel::*;
//! // 1. Which cargo should an aircraft carrying at most 50 tons load ?
//! let cargo = [Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)];
//! let sol   = bounded_select_solution(&cargo, 50).unwrap();
//! assert_eq!(220, sol.best_value);
//! assert_eq!(vec![
//!     Decision { variable: Variable(1), value: 1 },
//!     Decision { variable: Variable(2), value: 1 },
//! ], sol.decisions);
//!
//! // 2. How should a rod of length 8 be cut ?
//! let prices = [1, 5, 8, 9, 10, 17, 17, 20];
//! assert_eq!(Ok(22), unbounded_select(&prices, 8));
//! assert_eq!(Ok(22), reference_enumerate(&prices, 8, 8));
//!
//! // 3. Capacities cannot be negative
//! assert_eq!(Err(Error::InvalidCapacity(-1)), bounded_select(&cargo, -1));
//! ```
mod common;
mod value;
mod error;
mod implementation;

pub mod io_utils;

pub use common::*;
pub use value::*;
pub use error::*;
pub use implementation::*;

#[cfg(test)]
mod test_utils;
