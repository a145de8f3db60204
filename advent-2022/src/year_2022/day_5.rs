//! Supply Stacks

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    count: usize,
    /// 0-based stack index
    from: usize,
    /// 0-based stack index
    to: usize,
}

#[derive(Debug, Clone)]
pub struct Cargo {
    /// Bottom crate first
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

impl Cargo {
    fn parse_drawing(lines: &[&str]) -> Result<Vec<Vec<u8>>, ParseError> {
        let (labels, crates) = lines
            .split_last()
            .ok_or_else(|| ParseError::MissingData("empty crate drawing".into()))?;
        let stack_count = labels.split_whitespace().count();
        if stack_count == 0 {
            return Err(ParseError::MissingData("no stack labels".into()));
        }

        let mut stacks = vec![Vec::new(); stack_count];
        for (line_idx, line) in crates.iter().enumerate().rev() {
            let bytes = line.as_bytes();
            for (idx, stack) in stacks.iter_mut().enumerate() {
                match bytes.get(1 + 4 * idx) {
                    Some(&b' ') | None => {}
                    Some(&label) if label.is_ascii_uppercase() => stack.push(label),
                    Some(&other) => {
                        return Err(ParseError::InvalidFormat(format!(
                            "(line {}) invalid crate {:?}",
                            line_idx + 1,
                            other as char
                        )));
                    }
                }
            }
        }
        Ok(stacks)
    }

    fn parse_move(line: &str, stack_count: usize) -> Option<Move> {
        let mut words = line.split_whitespace();
        let (Some("move"), Some(count), Some("from"), Some(from), Some("to"), Some(to), None) = (
            words.next(),
            words.next(),
            words.next(),
            words.next(),
            words.next(),
            words.next(),
            words.next(),
        ) else {
            return None;
        };

        let count = count.parse().ok()?;
        let from = from.parse::<usize>().ok()?.checked_sub(1)?;
        let to = to.parse::<usize>().ok()?.checked_sub(1)?;
        (from < stack_count && to < stack_count).then_some(Move { count, from, to })
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = input.lines().collect();
        let split = lines
            .iter()
            .position(|line| line.trim().is_empty())
            .ok_or_else(|| ParseError::MissingData("no blank line after the crate drawing".into()))?;

        let stacks = Self::parse_drawing(&lines[..split])?;
        let moves = lines[split + 1..]
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                Self::parse_move(line, stacks.len()).ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) invalid move {:?}",
                        split + idx + 2,
                        line
                    ))
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { stacks, moves })
    }

    /// Apply every move; `in_order` keeps the moved crates' order
    fn rearrange(&self, in_order: bool) -> Result<String, SolveError> {
        let mut stacks = self.stacks.clone();

        for (idx, mv) in self.moves.iter().enumerate() {
            let source = &mut stacks[mv.from];
            let keep = source.len().checked_sub(mv.count).ok_or_else(|| {
                SolveError::failed(format!(
                    "move {} takes {} crates from a stack of {}",
                    idx + 1,
                    mv.count,
                    source.len()
                ))
            })?;
            let mut moved = source.split_off(keep);
            if !in_order {
                moved.reverse();
            }
            stacks[mv.to].extend(moved);
        }

        Ok(stacks
            .iter()
            .filter_map(|stack| stack.last())
            .map(|&label| label as char)
            .collect())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Cargo;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Cargo::parse(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.rearrange(false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.rearrange(true)
    }
}
