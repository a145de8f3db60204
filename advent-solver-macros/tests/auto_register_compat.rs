use advent_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, PuzzleId, SolveError,
    SolverRegistryBuilder,
};

fn parse_numbers(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .lines()
        .map(|line| {
            line.trim()
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
        })
        .collect()
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 1999, day = 3, tags = ["test", "combined"])]
struct CombinedMacroSolver;

impl AocParser for CombinedMacroSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for CombinedMacroSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for CombinedMacroSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 1999, day = 4)]
struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for UntaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(|max| max.to_string())
            .ok_or_else(|| SolveError::failed("empty input"))
    }
}

#[test]
fn test_combined_solver_auto_registers() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let mut solver = registry
        .create_solver(PuzzleId::new(1999, 3), "5\n6\n7")
        .expect("Failed to create solver - was it registered?");

    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "18");
    assert_eq!(solver.solve(2).unwrap().answer, "210");
}

#[test]
fn test_plugins_carry_tags() {
    let plugin = advent_solver::inventory::iter::<advent_solver::SolverPlugin>()
        .find(|plugin| plugin.id == PuzzleId::new(1999, 3))
        .expect("plugin submitted");
    assert_eq!(plugin.tags, &["test", "combined"]);

    let untagged = advent_solver::inventory::iter::<advent_solver::SolverPlugin>()
        .find(|plugin| plugin.id == PuzzleId::new(1999, 4))
        .expect("plugin submitted");
    assert!(untagged.tags.is_empty());
}

#[test]
fn test_register_plugins_with_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"combined"))
        .expect("Failed to register plugins")
        .build();

    assert!(registry.contains(PuzzleId::new(1999, 3)));
    assert!(!registry.contains(PuzzleId::new(1999, 4)));
    assert_eq!(registry.len(), 1);
}
