//! Parsed puzzles behind a type-erased, timed interface

use crate::error::{ParseError, SolveError};
use crate::id::PuzzleId;
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// One answered part with the wall-clock span spent computing it
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// The model of one puzzle input, parsed once and shared by all its parts
///
/// Part 2 of a day often reuses work done by part 1 (day 1 keeps its group
/// totals, day 16 its distance table), so parts solve against the same
/// `SharedData` in order instead of reparsing.
pub struct SolverInstance<'a, S: Solver> {
    id: PuzzleId,
    shared: S::SharedData<'a>,
    parsed_at: (DateTime<Utc>, DateTime<Utc>),
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` for puzzle `id`, timing the parse
    pub fn new(id: PuzzleId, input: &'a str) -> Result<Self, ParseError> {
        let start = Utc::now();
        let shared = S::parse(input)?;
        let end = Utc::now();

        Ok(Self {
            id,
            shared,
            parsed_at: (start, end),
        })
    }
}

/// What the registry hands out: any day's solver, reachable by part number
///
/// The runner drives every puzzle through this trait:
///
/// ```no_run
/// use advent_solver::{PuzzleId, SolverRegistryBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = SolverRegistryBuilder::new().register_all_plugins()?.build();
/// let input = std::fs::read_to_string("2022_day12.txt")?;
///
/// let mut solver = registry.create_solver(PuzzleId::new(2022, 12), &input)?;
/// for part in 1..=solver.parts() {
///     let result = solver.solve(part)?;
///     println!("{} Part {}: {} ({})", solver.id(), part, result.answer, result.duration());
/// }
/// # Ok(())
/// # }
/// ```
pub trait DynSolver {
    /// Solve one part; parts outside `1..=parts()` are `PartOutOfRange`
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn id(&self) -> PuzzleId;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end: Utc::now(),
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parsed_at.0
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parsed_at.1
    }

    fn id(&self) -> PuzzleId {
        self.id
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
