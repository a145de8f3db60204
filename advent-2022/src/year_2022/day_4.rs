//! Camp Cleanup

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow};
use std::ops::RangeInclusive;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["easy"])]
pub struct Solver;

type Sections = RangeInclusive<u32>;

fn parse_range(text: &str) -> anyhow::Result<Sections> {
    let (start, end) = text
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `start-end`, found {:?}", text))?;
    let start: u32 = start.parse().context("bad range start")?;
    let end: u32 = end.parse().context("bad range end")?;
    if start > end {
        return Err(anyhow!("range {} is reversed", text));
    }
    Ok(start..=end)
}

fn contains(outer: &Sections, inner: &Sections) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

fn overlaps(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Sections, Sections)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                let parse_line = || -> anyhow::Result<(Sections, Sections)> {
                    let (left, right) = line
                        .trim()
                        .split_once(',')
                        .ok_or_else(|| anyhow!("expected two ranges"))?;
                    Ok((parse_range(left)?, parse_range(right)?))
                };
                parse_line().with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(a, b)| contains(a, b) || contains(b, a))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.iter().filter(|(a, b)| overlaps(a, b)).count();
        Ok(count.to_string())
    }
}
