//! Rock Paper Scissors

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["easy"])]
pub struct Solver;

/// One round: opponent shape and the second column, both as 0, 1 or 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    opponent: u8,
    column: u8,
}

/// Shape score (1..=3) plus outcome score (0, 3 or 6)
fn score(me: u8, opponent: u8) -> u32 {
    let outcome = (me + 4 - opponent) % 3;
    u32::from(me) + 1 + u32::from(outcome) * 3
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| match line.trim().as_bytes() {
                [opponent @ b'A'..=b'C', b' ', column @ b'X'..=b'Z'] => Ok(Round {
                    opponent: opponent - b'A',
                    column: column - b'X',
                }),
                _ => Err(ParseError::InvalidFormat(format!(
                    "(line {}) expected `A..C X..Z`, found {:?}",
                    line_idx + 1,
                    line
                ))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|round| score(round.column, round.opponent))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // X loses, Y draws, Z wins
        let total: u32 = shared
            .iter()
            .map(|round| {
                let me = (round.opponent + round.column + 2) % 3;
                score(me, round.opponent)
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("A Y\nB X\nC Z\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "15");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "12");
    }

    #[test]
    fn test_scoring() {
        // rock vs scissors wins, scissors vs rock loses, paper vs paper draws
        assert_eq!(score(0, 2), 7);
        assert_eq!(score(2, 0), 3);
        assert_eq!(score(1, 1), 5);
    }

    #[test]
    fn test_invalid_round() {
        assert!(matches!(Solver::parse("A Y\nD X"), Err(ParseError::InvalidFormat(msg)) if msg.contains("line 2")));
    }
}
