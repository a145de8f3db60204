//! Advent of Code 2022 puzzle solutions with automatic registration
//!
//! Each day lives in its own module under [`year_2022`] and registers itself
//! with the solver framework through the `AutoRegisterSolver` derive macro,
//! so linking this crate is enough to make every day available to
//! [`advent_solver::SolverRegistryBuilder::register_all_plugins`].

pub mod utils;
pub mod year_2022;
