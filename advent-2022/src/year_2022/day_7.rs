//! No Space Left On Device

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["tree"])]
pub struct Solver;

const DISK_SIZE: u64 = 70_000_000;
const REQUIRED_FREE: u64 = 30_000_000;
const SMALL_DIR_LIMIT: u64 = 100_000;

/// Directory node in an arena; index 0 is the root
#[derive(Debug, Default)]
struct Dir<'a> {
    parent: Option<usize>,
    children: HashMap<&'a str, usize>,
    files: HashMap<&'a str, u64>,
}

/// Directory tree rebuilt from a terminal transcript
#[derive(Debug)]
pub struct FileSystem<'a> {
    dirs: Vec<Dir<'a>>,
}

impl<'a> FileSystem<'a> {
    pub fn parse(input: &'a str) -> Result<Self, ParseError> {
        let mut dirs = vec![Dir::default()];
        let mut cwd = 0usize;

        for (line_idx, line) in input.lines().enumerate() {
            let bad_line = |reason: &str| {
                ParseError::InvalidFormat(format!("(line {}) {}: {:?}", line_idx + 1, reason, line))
            };
            let words: Vec<&str> = line.split_whitespace().collect();

            match words.as_slice() {
                [] | ["$", "ls"] => {}
                ["$", "cd", "/"] => cwd = 0,
                ["$", "cd", ".."] => {
                    cwd = dirs[cwd].parent.ok_or_else(|| bad_line("cannot leave the root"))?;
                }
                ["$", "cd", name] => {
                    cwd = *dirs[cwd]
                        .children
                        .get(name)
                        .ok_or_else(|| bad_line("unknown directory"))?;
                }
                ["dir", name] => {
                    if !dirs[cwd].children.contains_key(name) {
                        let idx = dirs.len();
                        dirs.push(Dir {
                            parent: Some(cwd),
                            ..Dir::default()
                        });
                        dirs[cwd].children.insert(*name, idx);
                    }
                }
                [size, name] if !size.starts_with('$') => {
                    let size = size.parse().map_err(|_| bad_line("invalid file size"))?;
                    // Re-listing a directory must not count its files twice
                    dirs[cwd].files.insert(*name, size);
                }
                _ => return Err(bad_line("unrecognised line")),
            }
        }

        Ok(Self { dirs })
    }

    /// Total size of every directory, indexed like the arena
    pub fn dir_sizes(&self) -> Vec<u64> {
        let mut sizes: Vec<u64> = self
            .dirs
            .iter()
            .map(|dir| dir.files.values().sum())
            .collect();

        // Children always have larger indices than their parent
        for idx in (1..self.dirs.len()).rev() {
            if let Some(parent) = self.dirs[idx].parent {
                sizes[parent] += sizes[idx];
            }
        }
        sizes
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(FileSystem::parse(input)?.dir_sizes())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().filter(|&&size| size <= SMALL_DIR_LIMIT).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let used = shared[0];
        if used > DISK_SIZE {
            return Err(SolveError::failed(format!("{} bytes used exceeds the disk", used)));
        }
        let needed = REQUIRED_FREE.saturating_sub(DISK_SIZE - used);

        shared
            .iter()
            .filter(|&&size| size >= needed)
            .min()
            .map(|size| size.to_string())
            .ok_or_else(|| SolveError::failed("no directory frees enough space"))
    }
}
