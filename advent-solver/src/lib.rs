//! Advent of Code Solver Library
//!
//! A small, type-safe framework for puzzle solvers. Each puzzle is a type that
//! parses its input once into a shared model and answers one or more parts
//! from it.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`] / [`PartSolver`] / [`Solver`] traits for defining solvers
//! - [`SolverInstance`] and the type-erased [`DynSolver`], with parse and
//!   solve timing
//! - A [`SolverRegistry`] keyed by [`PuzzleId`], filled by hand or from
//!   plugins collected with `inventory`
//! - Derive macros: `AocSolver` for part dispatch and `AutoRegisterSolver`
//!   for plugin submission
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, PuzzleId, RegisterableSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat(line.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let id = PuzzleId::new(2022, 1);
//! let registry = Sums.register_with(SolverRegistryBuilder::new(), id).unwrap().build();
//!
//! let mut solver = registry.create_solver(id, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Plugins
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2022, day = 1, tags = ["easy"])]
//! struct Day1;
//! ```
//!
//! Every plugin linked into the binary is picked up by
//! [`SolverRegistryBuilder::register_all_plugins`].

mod error;
mod id;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use id::{DAYS_PER_YEAR, PuzzleId};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use advent_solver_macros::{AocSolver, AutoRegisterSolver};
