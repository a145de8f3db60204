//! Tuning Trouble

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["easy"])]
pub struct Solver;

/// Position just after the first run of `len` distinct characters
fn marker_end(stream: &[u8], len: usize) -> Option<usize> {
    stream
        .windows(len)
        .position(|window| {
            let seen = window.iter().fold(0u32, |seen, &b| seen | 1 << (b - b'a'));
            seen.count_ones() as usize == len
        })
        .map(|start| start + len)
}

fn solve_marker(stream: &[u8], len: usize) -> Result<String, SolveError> {
    marker_end(stream, len)
        .map(|end| end.to_string())
        .ok_or_else(|| SolveError::failed(format!("no run of {} distinct characters", len)))
}

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stream = input.trim().as_bytes();
        if stream.is_empty() {
            return Err(ParseError::MissingData("empty datastream".into()));
        }
        if let Some(pos) = stream.iter().position(|b| !b.is_ascii_lowercase()) {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected character {:?} at offset {}",
                stream[pos] as char, pos
            )));
        }
        Ok(stream)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_marker(shared, 4)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_marker(shared, 14)
    }
}
