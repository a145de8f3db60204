//! Rope Bridge

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 9, tags = ["simulation"])]
pub struct Solver;

type Pos = (i32, i32);

/// Head motion: a unit direction repeated `steps` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    dir: Pos,
    steps: u32,
}

/// Move `knot` one step towards `leader` unless they already touch
fn follow(knot: Pos, leader: Pos) -> Pos {
    let (dx, dy) = (leader.0 - knot.0, leader.1 - knot.1);
    if dx.abs() <= 1 && dy.abs() <= 1 {
        knot
    } else {
        (knot.0 + dx.signum(), knot.1 + dy.signum())
    }
}

/// Number of distinct cells the last knot visits
fn tail_visits(motions: &[Motion], knots: usize) -> usize {
    let mut rope = vec![(0, 0); knots];
    let mut visited = HashSet::from([(0, 0)]);

    for motion in motions {
        for _ in 0..motion.steps {
            rope[0].0 += motion.dir.0;
            rope[0].1 += motion.dir.1;
            for idx in 1..rope.len() {
                rope[idx] = follow(rope[idx], rope[idx - 1]);
            }
            if let Some(&tail) = rope.last() {
                visited.insert(tail);
            }
        }
    }

    visited.len()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Motion>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                let bad_line = || {
                    ParseError::InvalidFormat(format!("(line {}) invalid motion {:?}", line_idx + 1, line))
                };
                let (dir, steps) = line.trim().split_once(' ').ok_or_else(bad_line)?;
                let dir = match dir {
                    "R" => (1, 0),
                    "L" => (-1, 0),
                    "U" => (0, 1),
                    "D" => (0, -1),
                    _ => return Err(bad_line()),
                };
                let steps = steps.parse().map_err(|_| bad_line())?;
                Ok(Motion { dir, steps })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn test_larger_example() {
        let mut shared = Solver::parse("R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "36");
    }

    #[test]
    fn test_follow() {
        assert_eq!(follow((0, 0), (1, 1)), (0, 0));
        assert_eq!(follow((0, 0), (2, 0)), (1, 0));
        assert_eq!(follow((0, 0), (2, 1)), (1, 1));
        assert_eq!(follow((0, 0), (2, 2)), (1, 1));
    }

    #[test]
    fn test_invalid_motion() {
        assert!(matches!(Solver::parse("R 4\nX 1"), Err(ParseError::InvalidFormat(msg)) if msg.contains("line 2")));
        assert!(matches!(Solver::parse("R -4"), Err(ParseError::InvalidFormat(_))));
    }
}
