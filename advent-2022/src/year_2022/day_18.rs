//! Boiling Boulders

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 18, tags = ["grid", "search"])]
pub struct Solver;

type Cube = [i32; 3];

fn faces(cube: Cube) -> impl Iterator<Item = Cube> {
    [
        [1, 0, 0],
        [-1, 0, 0],
        [0, 1, 0],
        [0, -1, 0],
        [0, 0, 1],
        [0, 0, -1],
    ]
    .into_iter()
    .map(move |d| [cube[0] + d[0], cube[1] + d[1], cube[2] + d[2]])
}

#[derive(Debug, Clone)]
pub struct Droplet {
    cubes: HashSet<Cube>,
}

impl Droplet {
    fn surface_area(&self) -> usize {
        self.cubes
            .iter()
            .flat_map(|&cube| faces(cube))
            .filter(|side| !self.cubes.contains(side))
            .count()
    }

    /// Faces reachable by steam from outside the droplet
    fn exterior_surface_area(&self) -> usize {
        let (Some(min), Some(max)) = (
            (0..3).map(|axis| self.cubes.iter().map(|c| c[axis]).min()).collect::<Option<Vec<_>>>(),
            (0..3).map(|axis| self.cubes.iter().map(|c| c[axis]).max()).collect::<Option<Vec<_>>>(),
        ) else {
            return 0;
        };
        // One layer of air around the bounding box
        let lo: Cube = [min[0] - 1, min[1] - 1, min[2] - 1];
        let hi: Cube = [max[0] + 1, max[1] + 1, max[2] + 1];
        let in_bounds = |c: &Cube| (0..3).all(|axis| (lo[axis]..=hi[axis]).contains(&c[axis]));

        let mut steam = HashSet::from([lo]);
        let mut stack = vec![lo];
        let mut exposed = 0;

        while let Some(air) = stack.pop() {
            for next in faces(air) {
                if self.cubes.contains(&next) {
                    exposed += 1;
                } else if in_bounds(&next) && steam.insert(next) {
                    stack.push(next);
                }
            }
        }

        exposed
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Droplet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let cubes = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                let coords = line
                    .trim()
                    .split(',')
                    .map(str::parse)
                    .collect::<Result<Vec<i32>, _>>()
                    .ok()
                    .and_then(|coords| Cube::try_from(coords).ok());
                coords.ok_or_else(|| {
                    ParseError::InvalidFormat(format!("(line {}) expected `x,y,z`, found {:?}", line_idx + 1, line))
                })
            })
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Droplet { cubes })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.surface_area().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.exterior_surface_area().to_string())
    }
}
