//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::id::PuzzleId;
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The puzzle the factory solves
    pub id: PuzzleId,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a [`SolverRegistry`]
///
/// The registry is immutable after [`build`](Self::build); duplicates are
/// rejected while registering.
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ParseError, PuzzleId, RegisterableSolver, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let id = PuzzleId::new(2022, 1);
/// let registry = Echo
///     .register_with(SolverRegistryBuilder::new(), id)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(id, " hello ").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct SolverRegistryBuilder {
    entries: BTreeMap<PuzzleId, FactoryEntry>,
}

impl SolverRegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a solver factory for a puzzle
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Invalid day or duplicate registration
    pub fn register<F>(mut self, id: PuzzleId, parts: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if !id.is_valid() {
            return Err(RegistrationError::InvalidPuzzle(id.year, id.day));
        }
        if self.entries.contains_key(&id) {
            return Err(RegistrationError::DuplicateSolver(id));
        }
        self.entries.insert(
            id,
            FactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register every plugin submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.id.year == 2022 && plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.id)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    entries: BTreeMap<PuzzleId, FactoryEntry>,
}

impl SolverRegistry {
    /// Iterate over metadata for all registered factories in calendar order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().map(|(id, entry)| FactoryInfo {
            id: *id,
            parts: entry.parts,
        })
    }

    /// Get metadata for a specific puzzle
    pub fn get_info(&self, id: PuzzleId) -> Option<FactoryInfo> {
        self.entries
            .get(&id)
            .map(|entry| FactoryInfo { id, parts: entry.parts })
    }

    /// Check if a factory exists for the puzzle
    pub fn contains(&self, id: PuzzleId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a solver instance for a puzzle by parsing its input
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        id: PuzzleId,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self.entries.get(&id).ok_or(SolverError::NotFound(id))?;
        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Object safe (no associated types), so differently-typed solvers can sit
/// behind `&'static dyn RegisterableSolver` in [`SolverPlugin`]. Every
/// [`Solver`] gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a puzzle
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        id: PuzzleId,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        id: PuzzleId,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register(id, S::PARTS, move |input: &str| {
            let instance: Box<dyn DynSolver + '_> = Box::new(SolverInstance::<S>::new(id, input)?);
            Ok(instance)
        })
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`; can also be
/// submitted by hand:
///
/// ```no_run
/// use advent_solver::{AocParser, ParseError, PuzzleId, SolveError, Solver, SolverPlugin};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// advent_solver::inventory::submit! {
///     SolverPlugin {
///         id: PuzzleId::new(2022, 1),
///         solver: &Day1,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The puzzle the solver handles
    pub id: PuzzleId,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g., "grid", "search", "simulation")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::AocParser;

    struct LineCount;

    impl AocParser for LineCount {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for LineCount {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_create_and_solve() {
        let id = PuzzleId::new(2022, 4);
        let registry = LineCount
            .register_with(SolverRegistryBuilder::new(), id)
            .unwrap()
            .build();

        let mut solver = registry.create_solver(id, "a\nb\nc").unwrap();
        assert_eq!(solver.id(), id);
        assert_eq!(solver.parts(), 2);
        assert_eq!(solver.solve(1).unwrap().answer, "3");
        assert!(matches!(solver.solve(2), Err(SolveError::PartNotImplemented(2))));
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let id = PuzzleId::new(2022, 4);
        let builder = LineCount
            .register_with(SolverRegistryBuilder::new(), id)
            .unwrap();
        let result = LineCount.register_with(builder, id);
        assert!(matches!(result, Err(RegistrationError::DuplicateSolver(dup)) if dup == id));
    }

    #[test]
    fn test_invalid_day_rejected() {
        let result = LineCount.register_with(SolverRegistryBuilder::new(), PuzzleId::new(2022, 26));
        assert!(matches!(result, Err(RegistrationError::InvalidPuzzle(2022, 26))));
    }

    #[test]
    fn test_not_found_and_parse_error() {
        let id = PuzzleId::new(2022, 4);
        let registry = LineCount
            .register_with(SolverRegistryBuilder::new(), id)
            .unwrap()
            .build();

        assert!(matches!(
            registry.create_solver(PuzzleId::new(2022, 5), "x"),
            Err(SolverError::NotFound(_))
        ));
        assert!(matches!(
            registry.create_solver(id, ""),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_iter_info_in_calendar_order() {
        let registry = SolverRegistryBuilder::new();
        let registry = LineCount.register_with(registry, PuzzleId::new(2022, 9)).unwrap();
        let registry = LineCount.register_with(registry, PuzzleId::new(2022, 2)).unwrap();
        let registry = registry.build();

        let days: Vec<u8> = registry.iter_info().map(|info| info.id.day).collect();
        assert_eq!(days, vec![2, 9]);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get_info(PuzzleId::new(2022, 9)),
            Some(FactoryInfo {
                id: PuzzleId::new(2022, 9),
                parts: 2
            })
        );
    }
}
