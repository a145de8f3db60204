//! Pyroclastic Flow

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 17, tags = ["simulation", "cycle"])]
pub struct Solver;

/// Rock rows from the bottom up; bit `x` is chamber column `x`
const ROCKS: [&[u8]; 5] = [
    &[0b1111],
    &[0b010, 0b111, 0b010],
    &[0b111, 0b100, 0b100],
    &[0b1, 0b1, 0b1, 0b1],
    &[0b11, 0b11],
];
const RIGHT_WALL: u8 = 1 << 6;
/// Rows of the tower surface used to recognise a repeating state
const SURFACE_ROWS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jet {
    Left,
    Right,
}

/// Chamber contents with the next rock and jet to use
struct Chamber<'j> {
    rows: Vec<u8>,
    jets: &'j [Jet],
    jet: usize,
    rock: usize,
}

impl<'j> Chamber<'j> {
    fn new(jets: &'j [Jet]) -> Self {
        Self {
            rows: Vec::new(),
            jets,
            jet: 0,
            rock: 0,
        }
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn collides(&self, shape: &[u8], y: usize) -> bool {
        shape
            .iter()
            .enumerate()
            .any(|(dy, row)| self.rows.get(y + dy).is_some_and(|settled| settled & row != 0))
    }

    fn push(shape: &[u8], jet: Jet) -> Option<Vec<u8>> {
        match jet {
            Jet::Left if shape.iter().all(|row| row & 1 == 0) => {
                Some(shape.iter().map(|row| row >> 1).collect())
            }
            Jet::Right if shape.iter().all(|row| row & RIGHT_WALL == 0) => {
                Some(shape.iter().map(|row| row << 1).collect())
            }
            _ => None,
        }
    }

    fn drop_rock(&mut self) {
        let mut shape: Vec<u8> = ROCKS[self.rock].iter().map(|row| row << 2).collect();
        self.rock = (self.rock + 1) % ROCKS.len();
        let mut y = self.height() + 3;

        loop {
            let jet = self.jets[self.jet];
            self.jet = (self.jet + 1) % self.jets.len();
            if let Some(pushed) = Self::push(&shape, jet) {
                if !self.collides(&pushed, y) {
                    shape = pushed;
                }
            }

            if y == 0 || self.collides(&shape, y - 1) {
                break;
            }
            y -= 1;
        }

        for (dy, row) in shape.iter().enumerate() {
            if self.rows.len() <= y + dy {
                self.rows.resize(y + dy + 1, 0);
            }
            self.rows[y + dy] |= row;
        }
    }

    fn surface(&self) -> Vec<u8> {
        self.rows.iter().rev().take(SURFACE_ROWS).copied().collect()
    }
}

/// Tower height after `count` rocks, skipping ahead once the state repeats
fn tower_height(jets: &[Jet], count: u64) -> u64 {
    let mut chamber = Chamber::new(jets);
    let mut seen: HashMap<(usize, usize, Vec<u8>), (u64, usize)> = HashMap::new();
    let mut skipped = 0u64;
    let mut dropped = 0u64;

    while dropped < count {
        chamber.drop_rock();
        dropped += 1;

        if skipped == 0 && chamber.height() >= SURFACE_ROWS {
            let key = (chamber.rock, chamber.jet, chamber.surface());
            if let Some(&(prev_dropped, prev_height)) = seen.get(&key) {
                let period = dropped - prev_dropped;
                let gain = (chamber.height() - prev_height) as u64;
                let cycles = (count - dropped) / period;
                skipped = cycles * gain;
                dropped += cycles * period;
            } else {
                seen.insert(key, (dropped, chamber.height()));
            }
        }
    }

    chamber.height() as u64 + skipped
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Jet>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let jets: Vec<Jet> = input
            .trim()
            .bytes()
            .enumerate()
            .map(|(idx, b)| match b {
                b'<' => Ok(Jet::Left),
                b'>' => Ok(Jet::Right),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected {:?} at offset {}",
                    other as char, idx
                ))),
            })
            .collect::<Result<_, _>>()?;

        if jets.is_empty() {
            return Err(ParseError::MissingData("empty jet pattern".into()));
        }
        Ok(jets)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tower_height(shared, 2022).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tower_height(shared, 1_000_000_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>\n";

    #[test]
    fn test_example() {
        let mut jets = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut jets, 1).unwrap(), "3068");
        assert_eq!(Solver::solve_part(&mut jets, 2).unwrap(), "1514285714288");
    }

    #[test]
    fn test_first_rocks() {
        let jets = Solver::parse(EXAMPLE).unwrap();
        let mut chamber = Chamber::new(&jets);
        chamber.drop_rock();
        assert_eq!(chamber.rows, vec![0b0111100]);
        chamber.drop_rock();
        assert_eq!(chamber.height(), 4);
    }

    #[test]
    fn test_cycle_skip_matches_simulation() {
        let jets = Solver::parse(EXAMPLE).unwrap();
        let mut chamber = Chamber::new(&jets);
        for _ in 0..5000 {
            chamber.drop_rock();
        }
        assert_eq!(tower_height(&jets, 5000), chamber.height() as u64);
    }

    #[test]
    fn test_invalid_jet() {
        assert!(matches!(Solver::parse("<<x>"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("\n"), Err(ParseError::MissingData(_))));
    }
}
