//! Rucksack Reorganization

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["easy"])]
pub struct Solver;

/// `a`..`z` are 1..26, `A`..`Z` are 27..52
fn priority(item: u8) -> Option<u32> {
    match item {
        b'a'..=b'z' => Some(u32::from(item - b'a') + 1),
        b'A'..=b'Z' => Some(u32::from(item - b'A') + 27),
        _ => None,
    }
}

/// Set of priorities as bits
fn item_set(items: &[u8]) -> u64 {
    items
        .iter()
        .filter_map(|&item| priority(item))
        .fold(0, |set, p| set | (1 << p))
}

fn single_priority(set: u64) -> Result<u32, SolveError> {
    if set.count_ones() == 1 {
        Ok(set.trailing_zeros())
    } else {
        Err(SolveError::failed(format!(
            "expected exactly one shared item, found {}",
            set.count_ones()
        )))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                if line.len() % 2 != 0 {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) odd number of items",
                        line_idx + 1
                    )));
                }
                if let Some(bad) = line.bytes().find(|&b| priority(b).is_none()) {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) invalid item {:?}",
                        line_idx + 1,
                        bad as char
                    )));
                }
                Ok(line.as_bytes())
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|sack| {
                let (left, right) = sack.split_at(sack.len() / 2);
                single_priority(item_set(left) & item_set(right))
            })
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::failed(format!(
                "{} rucksacks do not form groups of three",
                shared.len()
            )));
        }
        shared
            .iter()
            .tuples()
            .map(|(a, b, c)| single_priority(item_set(a) & item_set(b) & item_set(c)))
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}
