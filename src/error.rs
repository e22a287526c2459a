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

//! This module groups the errors that can be raised by the selectors. All of
//! them are precondition violations: they are detected before any table is
//! allocated (or any recursion is started) and nothing is ever computed from
//! an input that did not pass validation.

/// The error returned by all the selection functions of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The capacity (or rod length) is negative
    #[error("invalid capacity {0}: a capacity must be non negative")]
    InvalidCapacity(isize),
    /// The items or prices are inconsistent with the rest of the request
    #[error("malformed input: {0}")]
    MalformedInput(#[from] Malformation),
}

/// Explains what is wrong with an input that was deemed malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformation {
    /// An item weighs less than nothing
    #[error("item {index} has a negative weight ({weight})")]
    NegativeWeight { index: usize, weight: isize },
    /// The price table does not cover all the piece lengths up to the
    /// requested rod length
    #[error("the price table has {available} entries but {required} are needed")]
    PriceTableTooShort { required: isize, available: usize },
    /// The largest eligible piece length does not exist in the price table
    #[error("eligible index {index} is out of range 0..={max}")]
    EligibleIndexOutOfRange { index: isize, max: usize },
}

#[cfg(test)]
mod tests {
    use crate::{Error, Malformation};

    #[test]
    fn invalid_capacity_mentions_the_offending_value() {
        let msg = Error::InvalidCapacity(-1).to_string();
        assert!(msg.contains("-1"));
    }
    #[test]
    fn malformed_input_mentions_the_faulty_item() {
        let err: Error = Malformation::NegativeWeight { index: 3, weight: -7 }.into();
        assert_eq!("malformed input: item 3 has a negative weight (-7)", err.to_string());
    }
    #[test]
    fn short_price_table_mentions_both_lengths() {
        let err: Error = Malformation::PriceTableTooShort { required: 9, available: 8 }.into();
        let msg = err.to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains('8'));
    }
}
