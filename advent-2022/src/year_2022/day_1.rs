//! Calorie Counting

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["easy"])]
pub struct Solver;

impl AocParser for Solver {
    /// Total calories carried by each elf, in input order
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut totals = Vec::new();
        let mut current: Option<u64> = None;

        for (line_idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                totals.extend(current.take());
                continue;
            }
            let calories: u64 = line
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))?;
            *current.get_or_insert(0) += calories;
        }
        // The last group need not be followed by a blank line
        totals.extend(current);

        if totals.is_empty() {
            return Err(ParseError::MissingData("no calorie groups".into()));
        }
        Ok(totals)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or_default().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().copied().k_largest(3).sum::<u64>().to_string())
    }
}
