//! Hill Climbing Algorithm: fewest steps across a heightmap

use crate::utils::grid::parse_rows;
use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;
use std::fmt;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["grid", "search"])]
pub struct Solver;

/// A (row, column) position on the heightmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    /// 0 for `a` up to 25 for `z`
    pub elevation: u8,
    pub marker: Option<Marker>,
}

/// Elevation of a map character; `S` sits at `a` and `E` at `z`
pub fn elevation(ch: u8) -> Option<u8> {
    match ch {
        b'S' => Some(0),
        b'E' => Some(b'z' - b'a'),
        b'a'..=b'z' => Some(ch - b'a'),
        _ => None,
    }
}

/// A move may climb at most one elevation level; any descent is allowed
pub fn can_step(from: u8, to: u8) -> bool {
    to <= from.saturating_add(1)
}

/// Rectangular grid of cells, immutable once parsed
#[derive(Debug, Clone)]
pub struct Heightmap {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: Coord,
    end: Coord,
}

impl Heightmap {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let lines = parse_rows(input)?;
        let rows = lines.len();
        let cols = lines[0].len();

        let mut cells = Vec::with_capacity(rows * cols);
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, &ch) in line.iter().enumerate() {
                let coord = Coord::new(row, col);
                let elevation = elevation(ch).ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) unexpected character {:?}",
                        row + 1,
                        ch as char
                    ))
                })?;

                let marker = match ch {
                    b'S' => Some((Marker::Start, &mut start)),
                    b'E' => Some((Marker::End, &mut end)),
                    _ => None,
                };
                let marker = match marker {
                    Some((marker, slot)) => {
                        if slot.replace(coord).is_some() {
                            return Err(ParseError::InvalidFormat(format!(
                                "(line {}) duplicate {:?} marker",
                                row + 1,
                                marker
                            )));
                        }
                        Some(marker)
                    }
                    None => None,
                };

                cells.push(Cell {
                    coord,
                    elevation,
                    marker,
                });
            }
        }

        Ok(Self {
            cells,
            rows,
            cols,
            start: start.ok_or_else(|| ParseError::MissingData("no start marker `S`".into()))?,
            end: end.ok_or_else(|| ParseError::MissingData("no end marker `E`".into()))?,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if coord.row < self.rows && coord.col < self.cols {
            self.cells.get(self.index(coord))
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// In-bounds orthogonal neighbours, in the order down, up, right, left
    fn neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let Coord { row, col } = coord;
        [
            Some(row + 1).filter(|&r| r < self.rows).map(|r| Coord::new(r, col)),
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(col + 1).filter(|&c| c < self.cols).map(|c| Coord::new(row, c)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
        ]
        .into_iter()
        .flatten()
    }

    /// Fewest moves from `from` to `to`, or `None` when `to` is unreachable
    pub fn shortest_path(&self, from: Coord, to: Coord) -> Option<usize> {
        let start = self.get(from)?;
        self.get(to)?;

        let mut visited = vec![false; self.cells.len()];
        let mut frontier = VecDeque::new();
        visited[self.index(from)] = true;
        frontier.push_back((start.coord, 0usize));

        while let Some((coord, distance)) = frontier.pop_front() {
            if coord == to {
                return Some(distance);
            }
            let here = self.cells[self.index(coord)].elevation;

            for next in self.neighbours(coord) {
                let idx = self.index(next);
                if !visited[idx] && can_step(here, self.cells[idx].elevation) {
                    visited[idx] = true;
                    frontier.push_back((next, distance + 1));
                }
            }
        }

        None
    }

    /// Fewest moves to `E` from any cell at elevation `a`
    pub fn best_start_distance(&self) -> Option<usize> {
        self.cells
            .iter()
            .filter(|cell| cell.elevation == 0)
            .filter_map(|cell| self.shortest_path(cell.coord, self.end))
            .min()
    }
}

impl fmt::Display for Heightmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, cell) in self.cells.iter().enumerate() {
            if idx > 0 && idx % self.cols == 0 {
                writeln!(f)?;
            }
            let ch = match cell.marker {
                Some(Marker::Start) => 'S',
                Some(Marker::End) => 'E',
                None => (b'a' + cell.elevation) as char,
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Heightmap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Heightmap::parse(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .shortest_path(shared.start(), shared.end())
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::failed("E is unreachable from S"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .best_start_distance()
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::failed("E is unreachable from every `a` cell"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn test_example() {
        let mut map = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(map.rows(), 5);
        assert_eq!(map.cols(), 8);
        assert_eq!(map.start(), Coord::new(0, 0));
        assert_eq!(map.end(), Coord::new(2, 5));
        assert_eq!(Solver::solve_part(&mut map, 1).unwrap(), "31");
        assert_eq!(Solver::solve_part(&mut map, 2).unwrap(), "29");
    }

    #[test]
    fn test_elevation_mapping() {
        assert_eq!(elevation(b'S'), elevation(b'a'));
        assert_eq!(elevation(b'E'), elevation(b'z'));
        assert_eq!(elevation(b'm'), Some(12));
        assert_eq!(elevation(b'#'), None);
        assert_eq!(elevation(b'A'), None);
    }

    #[test]
    fn test_unreachable_is_none() {
        let mut map = Solver::parse("SbcdE").unwrap();
        assert_eq!(map.shortest_path(map.start(), map.end()), None);
        assert_eq!(map.best_start_distance(), None);
        assert!(matches!(
            Solver::solve_part(&mut map, 1),
            Err(SolveError::SolveFailed(_))
        ));
        assert!(matches!(
            Solver::solve_part(&mut map, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_descending_is_free() {
        let map = Solver::parse("Szzz\naaaE").unwrap();
        // Nothing at `a` can climb to z, but z can drop straight down
        assert_eq!(map.shortest_path(map.start(), map.end()), None);
        assert_eq!(map.shortest_path(Coord::new(0, 3), Coord::new(1, 1)), Some(3));
        assert_eq!(map.shortest_path(Coord::new(1, 1), Coord::new(0, 1)), None);
    }

    #[test]
    fn test_out_of_bounds_is_none() {
        let map = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(map.shortest_path(Coord::new(9, 9), map.end()), None);
        assert!(map.get(Coord::new(5, 0)).is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Heightmap::parse(""), Err(ParseError::MissingData(_))));
        assert!(matches!(Heightmap::parse("Sab\nabE\nab"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Heightmap::parse("Sab\nab1\nabE"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Heightmap::parse("SaS\naaE"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Heightmap::parse("aaa\naaE"), Err(ParseError::MissingData(_))));
        assert!(matches!(Heightmap::parse("Saa\naaa"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_display_round_trip_example() {
        let map = Heightmap::parse(EXAMPLE).unwrap();
        assert_eq!(map.to_string(), EXAMPLE.trim_end());
    }

    /// Random grid text with exactly one `S` and one `E` at distinct cells
    fn grid_text() -> impl Strategy<Value = String> {
        (1usize..8, 2usize..8)
            .prop_flat_map(|(rows, cols)| {
                let size = rows * cols;
                (
                    Just(cols),
                    prop::collection::vec(b'a'..=b'z', size),
                    0..size,
                    0..size - 1,
                )
            })
            .prop_map(|(cols, mut bytes, start, end)| {
                let end = if end >= start { end + 1 } else { end };
                bytes[start] = b'S';
                bytes[end] = b'E';
                bytes
                    .chunks(cols)
                    .map(|row| String::from_utf8_lossy(row).into_owned())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
    }

    proptest! {
        #[test]
        fn prop_round_trip(text in grid_text()) {
            let map = Heightmap::parse(&text).unwrap();
            prop_assert_eq!(map.to_string(), text);
        }

        #[test]
        fn prop_start_equals_end_is_zero(text in grid_text(), pick in any::<prop::sample::Index>()) {
            let map = Heightmap::parse(&text).unwrap();
            let cells: Vec<Coord> = map.cells().map(|cell| cell.coord).collect();
            let coord = cells[pick.index(cells.len())];
            prop_assert_eq!(map.shortest_path(coord, coord), Some(0));
        }

        #[test]
        fn prop_distances_grow_one_layer_at_a_time(text in grid_text()) {
            let map = Heightmap::parse(&text).unwrap();
            let from = map.start();
            for cell in map.cells() {
                let Some(distance) = map.shortest_path(from, cell.coord) else {
                    continue;
                };
                if distance == 0 {
                    prop_assert_eq!(cell.coord, from);
                    continue;
                }
                // Some neighbour one layer closer must be able to step here
                let has_parent = map.neighbours(cell.coord).any(|prev| {
                    map.shortest_path(from, prev) == Some(distance - 1)
                        && can_step(map.cells[map.index(prev)].elevation, cell.elevation)
                });
                prop_assert!(has_parent);
            }
        }

        #[test]
        fn prop_climbing_more_than_one_rejected(from in 0u8..26, to in 0u8..26) {
            prop_assert_eq!(can_step(from, to), to <= from + 1);
            if to > from + 1 {
                prop_assert!(!can_step(from, to));
            }
        }

        #[test]
        fn prop_best_start_never_worse_than_s(text in grid_text()) {
            let map = Heightmap::parse(&text).unwrap();
            let from_s = map.shortest_path(map.start(), map.end());
            let best = map.best_start_distance();

            if let Some(from_s) = from_s {
                prop_assert!(best.is_some_and(|best| best <= from_s));
            }
            let expected = map
                .cells()
                .filter(|cell| cell.elevation == 0)
                .filter_map(|cell| map.shortest_path(cell.coord, map.end()))
                .min();
            prop_assert_eq!(best, expected);
        }
    }
}
