//! Regolith Reservoir

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow, bail};
use itertools::Itertools;
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 14, tags = ["simulation", "grid"])]
pub struct Solver;

type Point = (i32, i32);

const SOURCE: Point = (500, 0);

#[derive(Debug, Clone)]
pub struct Cave {
    rock: HashSet<Point>,
    lowest_rock: i32,
}

fn parse_point(text: &str) -> anyhow::Result<Point> {
    let (x, y) = text
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, found {:?}", text))?;
    Ok((x.parse().context("bad x")?, y.parse().context("bad y")?))
}

fn parse_path(line: &str, rock: &mut HashSet<Point>) -> anyhow::Result<()> {
    let points: Vec<Point> = line.split("->").map(parse_point).collect::<anyhow::Result<_>>()?;
    if points.is_empty() {
        bail!("empty path");
    }
    rock.insert(points[0]);

    for (from, to) in points.iter().tuple_windows() {
        if from.0 != to.0 && from.1 != to.1 {
            bail!("diagonal segment {:?} -> {:?}", from, to);
        }
        let step = ((to.0 - from.0).signum(), (to.1 - from.1).signum());
        let mut point = *from;
        while point != *to {
            point = (point.0 + step.0, point.1 + step.1);
            rock.insert(point);
        }
    }
    Ok(())
}

impl Cave {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut rock = HashSet::new();
        for (line_idx, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            parse_path(line, &mut rock)
                .with_context(|| format!("(line {})", line_idx + 1))
                .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;
        }

        let lowest_rock = rock
            .iter()
            .map(|&(_, y)| y)
            .max()
            .ok_or_else(|| ParseError::MissingData("no rock paths".into()))?;
        if rock.contains(&SOURCE) || lowest_rock < SOURCE.1 {
            return Err(ParseError::InvalidFormat("rock must lie below the sand source".into()));
        }

        Ok(Self { rock, lowest_rock })
    }

    /// Count the sand units that come to rest
    ///
    /// Without a floor, pouring stops once a unit falls past the lowest rock.
    /// With one, an infinite floor lies two rows below the lowest rock and
    /// pouring stops when the source itself is covered.
    fn pour(&self, floor: bool) -> usize {
        let floor_y = self.lowest_rock + 2;
        let mut blocked = self.rock.clone();
        let mut units = 0;

        'pour: while !blocked.contains(&SOURCE) {
            let (mut x, mut y) = SOURCE;
            loop {
                if !floor && y > self.lowest_rock {
                    break 'pour;
                }
                let next = [(x, y + 1), (x - 1, y + 1), (x + 1, y + 1)]
                    .into_iter()
                    .find(|p| !blocked.contains(p) && !(floor && p.1 == floor_y));
                match next {
                    Some(p) => (x, y) = p,
                    None => break,
                }
            }
            blocked.insert((x, y));
            units += 1;
        }

        units
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Cave;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Cave::parse(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.pour(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.pour(true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: &str = "\
498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9
";

    #[test]
    fn test_example() {
        let mut cave = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(cave.lowest_rock, 9);
        assert_eq!(cave.rock.len(), 20);
        assert_eq!(Solver::solve_part(&mut cave, 1).unwrap(), "24");
        assert_eq!(Solver::solve_part(&mut cave, 2).unwrap(), "93");
    }

    #[test]
    fn test_invalid_paths() {
        assert!(matches!(Solver::parse("1,1 -> 2,2"), Err(ParseError::InvalidFormat(msg)) if msg.contains("diagonal")));
        assert!(matches!(Solver::parse("498,4 -> 498"), Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 1)")));
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
    }
}
