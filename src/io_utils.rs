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

//! This module provides the functions to read the instances of the cargo
//! loading and rod cutting problems from plain text.
//!
//! A cargo manifest starts with a line `<capacity> <nb_items>` followed by
//! exactly `nb_items` lines `<weight> <value>`. A price table is a sequence of
//! whitespace separated prices, the first of which is the price of a piece of
//! length 1. In both formats, blank lines and lines starting with a `c` are
//! ignored (these are comments).

use std::{fs::File, io::{BufRead, BufReader}, num::ParseIntError, path::Path};

use regex::Regex;

use crate::Item;

/// This enumeration simply groups the kind of errors that might occur when
/// parsing an instance from file. There can be io errors (file unavailable ?),
/// format errors (e.g. the file is not an instance but contains the text of
/// your next paper), or parse int errors (which are actually a variant of the
/// format error since it tells you that the parser expected an integer number
/// but got ... something else).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// One of the line patterns could not be compiled
    #[error("invalid pattern {0}")]
    Pattern(#[from] regex::Error),
    /// The file was not properly formatted.
    #[error("ill formed instance")]
    Format,
}

/// A cargo loading instance: the capacity of the aircraft and the items that
/// could be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cargo {
    pub capacity: isize,
    pub items   : Vec<Item<isize>>,
}

/// Reads a cargo manifest from the given file.
pub fn read_cargo<P: AsRef<Path>>(fname: P) -> Result<Cargo, Error> {
    let f = File::open(fname)?;
    parse_cargo(BufReader::new(f))
}

/// Reads a price table from the given file.
pub fn read_prices<P: AsRef<Path>>(fname: P) -> Result<Vec<isize>, Error> {
    let f = File::open(fname)?;
    parse_prices(BufReader::new(f))
}

/// Parses a cargo manifest. Negative numbers are parsed as such: rejecting
/// them is the job of the selector which will then tell what is wrong.
pub fn parse_cargo<B: BufRead>(input: B) -> Result<Cargo, Error> {
    let sack = Regex::new(r"^(?P<capa>-?\d+)\s+(?P<nb_items>\d+)$")?;
    let item = Regex::new(r"^(?P<weight>-?\d+)\s+(?P<value>-?\d+)$")?;

    let mut capacity = None;
    let mut expected = 0;
    let mut items    = vec![];

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if is_ignored(line) {
            continue;
        }

        if capacity.is_none() {
            let caps = sack.captures(line).ok_or(Error::Format)?;
            capacity = Some(caps["capa"].parse::<isize>()?);
            expected = caps["nb_items"].parse::<usize>()?;
            continue;
        }

        if items.len() == expected {
            return Err(Error::Format);
        }
        let caps   = item.captures(line).ok_or(Error::Format)?;
        let weight = caps["weight"].parse::<isize>()?;
        let value  = caps["value"].parse::<isize>()?;
        items.push(Item::new(weight, value));
    }

    match capacity {
        Some(capacity) if items.len() == expected => Ok(Cargo { capacity, items }),
        _ => Err(Error::Format),
    }
}

/// Parses a price table.
pub fn parse_prices<B: BufRead>(input: B) -> Result<Vec<isize>, Error> {
    let mut prices = vec![];
    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if is_ignored(line) {
            continue;
        }
        for token in line.split_whitespace() {
            prices.push(token.parse::<isize>()?);
        }
    }
    Ok(prices)
}

fn is_ignored(line: &str) -> bool {
    line.is_empty() || line.starts_with('c')
}
