//! Treetop Tree House

use crate::utils::grid::parse_rows;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["grid"])]
pub struct Solver;

pub struct Forest {
    heights: Vec<Vec<u8>>,
}

impl Forest {
    fn rows(&self) -> usize {
        self.heights.len()
    }

    fn cols(&self) -> usize {
        self.heights[0].len()
    }

    /// Trees met walking from (row, col) towards each edge, nearest first
    fn lines_of_sight(&self, row: usize, col: usize) -> [Vec<u8>; 4] {
        let column = |r: usize| self.heights[r][col];
        [
            (0..row).rev().map(column).collect(),
            (row + 1..self.rows()).map(column).collect(),
            self.heights[row][..col].iter().rev().copied().collect(),
            self.heights[row][col + 1..].to_vec(),
        ]
    }

    fn is_visible(&self, row: usize, col: usize) -> bool {
        let height = self.heights[row][col];
        self.lines_of_sight(row, col)
            .iter()
            .any(|line| line.iter().all(|&tree| tree < height))
    }

    fn scenic_score(&self, row: usize, col: usize) -> usize {
        let height = self.heights[row][col];
        self.lines_of_sight(row, col)
            .iter()
            .map(|line| match line.iter().position(|&tree| tree >= height) {
                Some(blocked) => blocked + 1,
                None => line.len(),
            })
            .product()
    }

    fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols()).map(move |col| (row, col)))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Forest;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let heights = parse_rows(input)?
            .into_iter()
            .enumerate()
            .map(|(line_idx, row)| {
                row.iter()
                    .map(|&b| {
                        if b.is_ascii_digit() {
                            Ok(b - b'0')
                        } else {
                            Err(ParseError::InvalidFormat(format!(
                                "(line {}) expected a digit, found {:?}",
                                line_idx + 1,
                                b as char
                            )))
                        }
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<_, _>>()?;
        Ok(Forest { heights })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let visible = shared
            .positions()
            .filter(|&(row, col)| shared.is_visible(row, col))
            .count();
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared
            .positions()
            .map(|(row, col)| shared.scenic_score(row, col))
            .max()
            .unwrap_or_default();
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: &str = "\
30373
25512
65332
33549
35390
";

    #[test]
    fn test_example() {
        let mut forest = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut forest, 1).unwrap(), "21");
        assert_eq!(Solver::solve_part(&mut forest, 2).unwrap(), "8");
    }

    #[test]
    fn test_scenic_score() {
        let forest = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(forest.scenic_score(1, 2), 4);
        assert_eq!(forest.scenic_score(3, 2), 8);
        // Edge trees see nothing in one direction
        assert_eq!(forest.scenic_score(0, 0), 0);
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(matches!(Solver::parse("123\n1a3"), Err(ParseError::InvalidFormat(_))));
    }
}
