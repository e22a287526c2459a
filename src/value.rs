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

//! This module defines the numeric seam of the library: the `Value` trait.
//! Profits, revenues and prices are all expressed as values.

use std::{fmt::Debug, ops::Add};

use num_traits::Zero;

/// A value is anything that can be accumulated and compared in a total order.
///
/// Integers (`isize`, `i64`, `u32`, ...) are values. Floating point numbers
/// are not, because they are only partially ordered; wrap them in
/// `ordered_float::OrderedFloat` to use them as values.
///
/// # Note:
/// You never need to implement this trait yourself. It is blanket-implemented
/// for every type satisfying its bounds.
pub trait Value: Copy + Ord + Add<Output = Self> + Zero + Debug {}

impl <T> Value for T where T: Copy + Ord + Add<Output = T> + Zero + Debug {}
