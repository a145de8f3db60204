//! Cathode-Ray Tube

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 10, tags = ["simulation"])]
pub struct Solver;

const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Noop,
    Addx(i64),
}

/// Value of the X register during each cycle; index 0 is cycle 1
fn register_trace(program: &[Instruction]) -> Vec<i64> {
    let mut x = 1;
    let mut trace = Vec::with_capacity(program.len() * 2);
    for instruction in program {
        match instruction {
            Instruction::Noop => trace.push(x),
            Instruction::Addx(value) => {
                trace.extend([x, x]);
                x += value;
            }
        }
    }
    trace
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let program = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| match line.split_once(' ') {
                None if line == "noop" => Ok(Instruction::Noop),
                Some(("addx", value)) => value.parse().map(Instruction::Addx).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                }),
                _ => Err(ParseError::InvalidFormat(format!(
                    "(line {}) unknown instruction {:?}",
                    line_idx + 1,
                    line
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(register_trace(&program))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let strength: i64 = (20..=220)
            .step_by(40)
            .map(|cycle| {
                shared
                    .get(cycle - 1)
                    .map(|x| x * cycle as i64)
                    .ok_or_else(|| SolveError::failed(format!("program ends before cycle {}", cycle)))
            })
            .sum::<Result<_, _>>()?;
        Ok(strength.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() < SCREEN_WIDTH * SCREEN_HEIGHT {
            return Err(SolveError::failed(format!(
                "program runs {} cycles, the screen needs {}",
                shared.len(),
                SCREEN_WIDTH * SCREEN_HEIGHT
            )));
        }

        let rows: Vec<String> = shared[..SCREEN_WIDTH * SCREEN_HEIGHT]
            .chunks(SCREEN_WIDTH)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(col, &sprite)| if (sprite - col as i64).abs() <= 1 { '#' } else { '.' })
                    .collect()
            })
            .collect();
        Ok(rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: &str = "\
addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop
";

    #[test]
    fn test_example() {
        let mut trace = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(trace[19], 21);
        assert_eq!(trace[219], 18);
        assert_eq!(Solver::solve_part(&mut trace, 1).unwrap(), "13140");
        assert_eq!(
            Solver::solve_part(&mut trace, 2).unwrap(),
            [
                "##..##..##..##..##..##..##..##..##..##..",
                "###...###...###...###...###...###...###.",
                "####....####....####....####....####....",
                "#####.....#####.....#####.....#####.....",
                "######......######......######......####",
                "#######.......#######.......#######.....",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_small_program() {
        let trace = Solver::parse("noop\naddx 3\naddx -5").unwrap();
        assert_eq!(trace, vec![1, 1, 1, 4, 4]);
    }

    #[test]
    fn test_short_program_fails() {
        let mut trace = Solver::parse("noop\naddx 3").unwrap();
        assert!(matches!(Solver::solve_part(&mut trace, 1), Err(SolveError::SolveFailed(_))));
        assert!(matches!(Solver::solve_part(&mut trace, 2), Err(SolveError::SolveFailed(_))));
        assert!(matches!(Solver::parse("addx"), Err(ParseError::InvalidFormat(_))));
    }
}
