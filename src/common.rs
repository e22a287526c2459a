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

//! This module defines the most basic data types that are used throughout all
//! the code of our library. These are also the types your client code is
//! likely to work with: the items you feed to a selector and the selection
//! it hands you back.

// ----------------------------------------------------------------------------
// --- VARIABLE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes a variable of the selection problem at hand. With the
/// bounded selector, `Variable(i)` stands for the i-th item of the input. With
/// the unbounded selector, `Variable(i)` stands for the piece of length `i+1`
/// (that is, the i-th entry of the price table).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Variable(pub usize);
impl Variable {
    #[inline]
    /// This function returns the id (numeric value) of the variable.
    ///
    /// # Examples:
    /// ```
    /// # use dpsel::Variable;
    /// assert_eq!(0, Variable(0).id());
    /// assert_eq!(3, Variable(3).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- DECISION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This denotes a decision that was retained in an optimal selection. It says
/// that `value` units of the given `variable` are part of the selection. Any
/// given `Decision` should be understood as ```[[ variable = value ]]```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Decision {
    pub variable : Variable,
    pub value    : isize
}

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// One unit of cargo: it weighs `weight` and brings `value` when it is loaded.
///
/// The weight is signed so that a negative weight can be reported to the
/// caller rather than being wrapped around. Selectors reject negative weights.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Item<V> {
    pub weight: isize,
    pub value : V,
}
impl <V> Item<V> {
    pub fn new(weight: isize, value: V) -> Self {
        Self { weight, value }
    }
}
impl <V> From<(isize, V)> for Item<V> {
    fn from((weight, value): (isize, V)) -> Self {
        Self { weight, value }
    }
}

// ----------------------------------------------------------------------------
// --- SELECTION --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a selection when the caller also wants to know *how* the
/// optimum is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<V> {
    /// The value of the best selection
    pub best_value: V,
    /// The decisions that make up the best selection, sorted by variable.
    /// Variables that were not selected at all do not appear in this list.
    pub decisions: Vec<Decision>,
}
impl <V> Selection<V> {
    /// Returns the total number of units that were selected
    pub fn nb_units(&self) -> isize {
        self.decisions.iter().map(|d| d.value).sum()
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_var {
    use crate::Variable;

    #[test]
    fn test_var_id() {
        assert_eq!(0, Variable(0).id());
        assert_eq!(1, Variable(1).id());
        assert_eq!(2, Variable(2).id());
        assert_eq!(3, Variable(3).id());
    }
}
