//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid argument combination or environment
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input could not be resolved from cache or network
    #[error("Input error: {0}")]
    Input(#[from] advent_input::InputError),

    /// Solver lookup failed
    #[error("Solver error: {0}")]
    Solver(#[from] advent_solver::SolverError),

    /// Plugin registration failed
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// An explicit input file could not be read
    #[error("Failed to read input file {}: {source}", path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more parts failed to parse or solve
    #[error("{failed} of {total} part(s) failed")]
    Unsolved { failed: usize, total: usize },
}
