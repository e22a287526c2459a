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

//! This is the command line driver of the library. It reads a cargo manifest
//! or a price table (or falls back to the textbook instances), solves it and
//! reports the size of the instance, the best value and the time it took.

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use dpsel::{
    bounded_select, bounded_select_solution, io_utils, reference_enumerate, unbounded_select,
    unbounded_select_solution, Decision, Item,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Solves cargo loading (0/1 knapsack) and rod cutting (unbounded knapsack)
/// instances with dynamic programming
struct Args {
    #[command(subcommand)]
    problem: Problem,
}

#[derive(Subcommand, Debug)]
enum Problem {
    /// Maximizes the revenue of an aircraft whose cargo capacity is limited
    Cargo {
        /// The path to the cargo manifest (the textbook instance is used when omitted)
        fname: Option<String>,
        /// Overrides the capacity declared in the manifest
        #[clap(short, long, allow_hyphen_values = true)]
        capacity: Option<isize>,
        /// Also print the ids of the items to load
        #[clap(short, long)]
        solution: bool,
    },
    /// Maximizes the revenue obtained from cutting a rod in pieces
    Rod {
        /// The path to the price table (the textbook instance is used when omitted)
        fname: Option<String>,
        /// The length of the rod (defaults to the number of prices)
        #[clap(short, long, allow_hyphen_values = true)]
        length: Option<isize>,
        /// Use the exhaustive (exponential) enumeration instead of dynamic programming
        #[clap(short, long, conflicts_with = "solution")]
        recursive: bool,
        /// Also print the lengths of the pieces to cut
        #[clap(short, long)]
        solution: bool,
    },
}

/// What gets reported about one resolution
struct Outcome {
    size      : usize,
    best_value: isize,
    duration  : Duration,
    units     : Option<isize>,
    solution  : Option<Vec<usize>>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let outcome = match args.problem {
        Problem::Cargo { fname, capacity, solution } =>
            solve_cargo(fname.as_deref(), capacity, solution)?,
        Problem::Rod { fname, length, recursive, solution } =>
            solve_rod(fname.as_deref(), length, recursive, solution)?,
    };

    println!("Size:       {}\nObjective:  {}\nDuration:   {:.4} seconds",
        outcome.size,
        outcome.best_value,
        outcome.duration.as_secs_f64());
    if let Some(units) = outcome.units {
        println!("Units:      {}", units);
    }
    if let Some(solution) = outcome.solution {
        println!("Solution:   {:?}", solution);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn solve_cargo(fname: Option<&str>, capacity: Option<isize>, solution: bool) -> anyhow::Result<Outcome> {
    let cargo = match fname {
        Some(fname) => io_utils::read_cargo(fname)
            .with_context(|| format!("cannot read the cargo manifest {fname}"))?,
        None => io_utils::Cargo {
            capacity: 50,
            items   : vec![Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)],
        },
    };
    let capacity = capacity.unwrap_or(cargo.capacity);

    let start = Instant::now();
    let (best_value, units, solution) = if solution {
        let sel = bounded_select_solution(&cargo.items, capacity)
            .with_context(|| format!("cannot load cargo with capacity {capacity}"))?;
        let ids = sel.decisions.iter().map(|d| d.variable.id()).collect();
        (sel.best_value, Some(sel.nb_units()), Some(ids))
    } else {
        let best = bounded_select(&cargo.items, capacity)
            .with_context(|| format!("cannot load cargo with capacity {capacity}"))?;
        (best, None, None)
    };

    Ok(Outcome { size: cargo.items.len(), best_value, duration: start.elapsed(), units, solution })
}

fn solve_rod(fname: Option<&str>, length: Option<isize>, recursive: bool, solution: bool) -> anyhow::Result<Outcome> {
    let prices = match fname {
        Some(fname) => io_utils::read_prices(fname)
            .with_context(|| format!("cannot read the price table {fname}"))?,
        None => vec![1, 5, 8, 9, 10, 17, 17, 20],
    };
    let length = length.unwrap_or(prices.len() as isize);

    let start = Instant::now();
    let (best_value, units, solution) = if recursive {
        let best = reference_enumerate(&prices, length, length)
            .with_context(|| format!("cannot enumerate the cuts of a rod of length {length}"))?;
        (best, None, None)
    } else if solution {
        let sel = unbounded_select_solution(&prices, length)
            .with_context(|| format!("cannot cut a rod of length {length}"))?;
        (sel.best_value, Some(sel.nb_units()), Some(pieces(&sel.decisions)))
    } else {
        let best = unbounded_select(&prices, length)
            .with_context(|| format!("cannot cut a rod of length {length}"))?;
        (best, None, None)
    };

    Ok(Outcome { size: prices.len(), best_value, duration: start.elapsed(), units, solution })
}

/// Lists the length of each piece to cut (one entry per piece)
fn pieces(decisions: &[Decision]) -> Vec<usize> {
    decisions.iter()
        .flat_map(|d| std::iter::repeat(d.variable.id() + 1).take(d.value as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use dpsel::Variable;

    use super::*;

    #[test]
    fn pieces_are_repeated_according_to_their_multiplicity() {
        let decisions = [
            Decision { variable: Variable(0), value: 2 },
            Decision { variable: Variable(5), value: 1 },
        ];
        assert_eq!(vec![1, 1, 6], pieces(&decisions));
    }
    #[test]
    fn textbook_cargo_is_the_default() {
        let outcome = solve_cargo(None, None, true).unwrap();
        assert_eq!(3, outcome.size);
        assert_eq!(220, outcome.best_value);
        assert_eq!(Some(2), outcome.units);
        assert_eq!(Some(vec![1, 2]), outcome.solution);
    }
    #[test]
    fn textbook_rod_is_the_default() {
        let outcome = solve_rod(None, None, false, true).unwrap();
        assert_eq!(8, outcome.size);
        assert_eq!(22, outcome.best_value);
        assert_eq!(Some(2), outcome.units);
        assert_eq!(Some(vec![2, 6]), outcome.solution);
    }
    #[test]
    fn units_count_every_piece_cut() {
        // two pieces of length 2, a single decision
        let outcome = solve_rod(None, Some(4), false, true).unwrap();
        assert_eq!(10, outcome.best_value);
        assert_eq!(Some(2), outcome.units);
        assert_eq!(Some(vec![2, 2]), outcome.solution);
    }
    #[test]
    fn recursive_rod_agrees_with_dp() {
        let outcome = solve_rod(None, Some(6), true, false).unwrap();
        assert_eq!(17, outcome.best_value);
        assert_eq!(None, outcome.units);
        assert_eq!(None, outcome.solution);
    }
    #[test]
    fn negative_capacity_is_reported() {
        let err = solve_cargo(None, Some(-1), false).err().unwrap();
        assert!(format!("{err:#}").contains("invalid capacity -1"));
    }
    #[test]
    fn negative_capacity_is_accepted_on_the_command_line() {
        let args = Args::try_parse_from(["dpsel", "cargo", "--capacity", "-1"]).unwrap();
        assert!(matches!(args.problem, Problem::Cargo { capacity: Some(-1), .. }));
    }
    #[test]
    fn recursive_rod_has_no_solution_to_print() {
        assert!(Args::try_parse_from(["dpsel", "rod", "--recursive", "--solution"]).is_err());
    }
}
