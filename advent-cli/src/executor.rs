//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::CliError;
use advent_input::{InputCache, InputClient, InputProvider};
use advent_solver::{PuzzleId, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::{debug, info};

/// Result from a single part
pub struct SolverResult {
    pub id: PuzzleId,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Shared by every part of a puzzle; `None` when parsing failed
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub id: PuzzleId,
    pub parts: RangeInclusive<u8>,
}

/// Where puzzle text comes from
pub enum InputSource {
    /// A single file given on the command line
    File(PathBuf),
    /// Cache, then network
    Provider(InputProvider),
}

impl InputSource {
    fn load(&self, id: PuzzleId) -> Result<String, CliError> {
        match self {
            InputSource::File(path) => std::fs::read_to_string(path).map_err(|source| CliError::InputFile {
                path: path.clone(),
                source,
            }),
            InputSource::Provider(provider) => Ok(provider.resolve(id.year, id.day)?),
        }
    }
}

/// Runs selected solvers one after another
pub struct Executor {
    registry: SolverRegistry,
    source: InputSource,
    year: u16,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, CliError> {
        let source = match &config.input_file {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Provider(InputProvider::new(
                InputCache::new(config.cache_dir.clone()),
                InputClient::new()?,
                config.session.clone(),
            )),
        };
        Ok(Self::with_source(registry, source, config))
    }

    /// Create an executor reading inputs from the given source
    pub fn with_source(registry: SolverRegistry, source: InputSource, config: &Config) -> Self {
        Self {
            registry,
            source,
            year: config.year,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering registry metadata, in calendar order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| info.id.year == self.year)
            .filter(|info| self.day_filter.is_none_or(|d| info.id.day == d))
            .filter_map(|info| {
                let parts = match self.part_filter {
                    Some(p) if p <= info.parts => p..=p,
                    Some(_) => return None,
                    None => 1..=info.parts,
                };
                Some(WorkItem { id: info.id, parts })
            })
            .collect()
    }

    /// Execute every work item, handing each part's result to `on_result`
    ///
    /// Parse and solve failures are reported as results; input failures
    /// abort the run.
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F) -> Result<(), CliError>
    where
        F: FnMut(SolverResult),
    {
        for work in work_items {
            let input = self.source.load(work.id)?;
            info!(id = %work.id, bytes = input.len(), "solving");

            let mut solver = match self.registry.create_solver(work.id, &input) {
                Ok(solver) => solver,
                Err(SolverError::ParseError(e)) => {
                    for part in work.parts.clone() {
                        on_result(SolverResult {
                            id: work.id,
                            part,
                            answer: Err(SolverError::ParseError(e.clone())),
                            parse_duration: None,
                            solve_duration: TimeDelta::zero(),
                        });
                    }
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let parse_duration = solver.parse_duration();
            for part in work.parts.clone() {
                let result = match solver.solve(part) {
                    Ok(solved) => SolverResult {
                        id: work.id,
                        part,
                        solve_duration: solved.duration(),
                        answer: Ok(solved.answer),
                        parse_duration: Some(parse_duration),
                    },
                    Err(e) => SolverResult {
                        id: work.id,
                        part,
                        answer: Err(e.into()),
                        parse_duration: Some(parse_duration),
                        solve_duration: TimeDelta::zero(),
                    },
                };
                debug!(id = %work.id, part, ok = result.answer.is_ok(), "part finished");
                on_result(result);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverRegistryBuilder;
    use std::io::Write;

    const HEIGHTMAP: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n";

    fn config(day: Option<u8>, part: Option<u8>) -> Config {
        Config {
            year: 2022,
            day_filter: day,
            part_filter: part,
            tags: Vec::new(),
            cache_dir: PathBuf::new(),
            input_file: None,
            session: None,
            quiet: true,
        }
    }

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new().register_all_plugins().unwrap().build()
    }

    fn input_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_work_items_follow_filters() {
        let source = InputSource::File(PathBuf::new());
        let executor = Executor::with_source(registry(), source, &config(Some(12), Some(2)));
        assert_eq!(
            executor.collect_work_items(),
            vec![WorkItem {
                id: PuzzleId::new(2022, 12),
                parts: 2..=2
            }]
        );

        let executor = Executor::with_source(registry(), InputSource::File(PathBuf::new()), &config(None, None));
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 20);
        assert!(items.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_other_year_selects_nothing() {
        let mut config = config(None, None);
        config.year = 2015;
        let executor = Executor::with_source(registry(), InputSource::File(PathBuf::new()), &config);
        assert!(executor.collect_work_items().is_empty());
    }

    #[test]
    fn test_execute_from_file() {
        let file = input_file(HEIGHTMAP);
        let executor = Executor::with_source(
            registry(),
            InputSource::File(file.path().to_path_buf()),
            &config(Some(12), None),
        );

        let mut answers = Vec::new();
        executor
            .execute(&executor.collect_work_items(), |result| {
                assert!(result.parse_duration.is_some());
                answers.push((result.part, result.answer.unwrap()));
            })
            .unwrap();
        assert_eq!(answers, vec![(1, "31".to_string()), (2, "29".to_string())]);
    }

    #[test]
    fn test_parse_failure_reported_per_part() {
        let file = input_file("Sab\nabcdE\n");
        let executor = Executor::with_source(
            registry(),
            InputSource::File(file.path().to_path_buf()),
            &config(Some(12), None),
        );

        let mut failures = 0;
        executor
            .execute(&executor.collect_work_items(), |result| {
                assert!(matches!(result.answer, Err(SolverError::ParseError(_))));
                assert!(result.parse_duration.is_none());
                failures += 1;
            })
            .unwrap();
        assert_eq!(failures, 2);
    }

    #[test]
    fn test_missing_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let executor = Executor::with_source(
            registry(),
            InputSource::File(dir.path().join("missing.txt")),
            &config(Some(12), None),
        );
        let result = executor.execute(&executor.collect_work_items(), |_| {});
        assert!(matches!(result, Err(CliError::InputFile { .. })));
    }

    #[test]
    fn test_missing_session_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let provider = InputProvider::new(InputCache::new(dir.path()), InputClient::new().unwrap(), None);
        let executor = Executor::with_source(registry(), InputSource::Provider(provider), &config(Some(12), None));
        let result = executor.execute(&executor.collect_work_items(), |_| {});
        assert!(matches!(
            result,
            Err(CliError::Input(advent_input::InputError::MissingSession { year: 2022, day: 12 }))
        ));
    }
}
