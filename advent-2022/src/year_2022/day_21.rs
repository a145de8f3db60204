//! Monkey Math

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, bail};
use std::collections::{HashMap, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 21, tags = ["expression", "tree"])]
pub struct Solver;

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn apply(self, lhs: i64, rhs: i64) -> Result<i64, SolveError> {
        let value = match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
            Op::Div => lhs.checked_div(rhs),
        };
        value.ok_or_else(|| SolveError::failed(format!("{lhs} {self:?} {rhs} is not representable")))
    }

    /// Solve `x op rhs == target` for `x`
    fn solve_lhs(self, target: i64, rhs: i64) -> Result<i64, SolveError> {
        match self {
            Op::Add => Op::Sub.apply(target, rhs),
            Op::Sub => Op::Add.apply(target, rhs),
            Op::Mul => exact_div(target, rhs),
            Op::Div => Op::Mul.apply(target, rhs),
        }
    }

    /// Solve `lhs op x == target` for `x`
    fn solve_rhs(self, target: i64, lhs: i64) -> Result<i64, SolveError> {
        match self {
            Op::Add => Op::Sub.apply(target, lhs),
            Op::Sub => Op::Sub.apply(lhs, target),
            Op::Mul => exact_div(target, lhs),
            Op::Div => exact_div(lhs, target),
        }
    }
}

fn exact_div(lhs: i64, rhs: i64) -> Result<i64, SolveError> {
    if rhs == 0 || lhs % rhs != 0 {
        return Err(SolveError::failed(format!("{lhs} is not a multiple of {rhs}")));
    }
    Ok(lhs / rhs)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Job<'a> {
    Number(i64),
    Math(&'a str, Op, &'a str),
}

/// Monkeys by name
///
/// Jobs are expected to form a tree rooted at `root`. Every walk tracks the
/// monkeys on its current path so a cyclic input fails at the first repeat.
#[derive(Debug, Clone)]
pub struct Troop<'a> {
    jobs: HashMap<&'a str, Job<'a>>,
}

impl<'a> Troop<'a> {
    fn job(&self, name: &str) -> Result<Job<'a>, SolveError> {
        self.jobs
            .get(name)
            .copied()
            .ok_or_else(|| SolveError::Lookup(format!("monkey `{name}`")))
    }

    fn enter(path: &mut HashSet<&'a str>, name: &'a str) -> Result<(), SolveError> {
        if !path.insert(name) {
            return Err(SolveError::failed(format!("monkey `{name}` depends on itself")));
        }
        Ok(())
    }

    fn evaluate(&self, name: &'a str, path: &mut HashSet<&'a str>) -> Result<i64, SolveError> {
        Self::enter(path, name)?;
        let value = match self.job(name)? {
            Job::Number(value) => value,
            Job::Math(lhs, op, rhs) => {
                let lhs = self.evaluate(lhs, path)?;
                op.apply(lhs, self.evaluate(rhs, path)?)?
            }
        };
        path.remove(name);
        Ok(value)
    }

    fn depends_on_human(&self, name: &'a str, path: &mut HashSet<&'a str>) -> Result<bool, SolveError> {
        if name == HUMAN {
            return Ok(true);
        }
        Self::enter(path, name)?;
        let depends = match self.job(name)? {
            Job::Number(_) => false,
            Job::Math(lhs, _, rhs) => self.depends_on_human(lhs, path)? || self.depends_on_human(rhs, path)?,
        };
        path.remove(name);
        Ok(depends)
    }

    fn value_of(&self, name: &'a str) -> Result<i64, SolveError> {
        self.evaluate(name, &mut HashSet::new())
    }

    fn reaches_human(&self, name: &'a str) -> Result<bool, SolveError> {
        self.depends_on_human(name, &mut HashSet::new())
    }

    /// Walk from `name` down to `humn`, inverting each operation so that
    /// `name` evaluates to `target`
    fn solve_for_human(&self, mut name: &'a str, mut target: i64) -> Result<i64, SolveError> {
        let mut path = HashSet::new();
        while name != HUMAN {
            Self::enter(&mut path, name)?;

            let Job::Math(lhs, op, rhs) = self.job(name)? else {
                return Err(SolveError::failed(format!("`{name}` does not depend on `{HUMAN}`")));
            };
            match (self.reaches_human(lhs)?, self.reaches_human(rhs)?) {
                (true, false) => {
                    target = op.solve_lhs(target, self.value_of(rhs)?)?;
                    name = lhs;
                }
                (false, true) => {
                    target = op.solve_rhs(target, self.value_of(lhs)?)?;
                    name = rhs;
                }
                (true, true) => {
                    return Err(SolveError::failed(format!("both operands of `{name}` depend on `{HUMAN}`")));
                }
                (false, false) => {
                    return Err(SolveError::failed(format!("`{name}` does not depend on `{HUMAN}`")));
                }
            }
        }
        Ok(target)
    }

    fn human_value(&self) -> Result<i64, SolveError> {
        let Job::Math(lhs, _, rhs) = self.job(ROOT)? else {
            return Err(SolveError::failed("`root` must compare two monkeys"));
        };
        if self.reaches_human(lhs)? {
            self.solve_for_human(lhs, self.value_of(rhs)?)
        } else {
            self.solve_for_human(rhs, self.value_of(lhs)?)
        }
    }
}

fn parse_job(line: &str) -> anyhow::Result<(&str, Job<'_>)> {
    let (name, job) = line.split_once(": ").context("expected `name: job`")?;
    let job = match job.split_whitespace().collect::<Vec<_>>()[..] {
        [number] => Job::Number(number.parse().with_context(|| format!("invalid number `{number}`"))?),
        [lhs, op, rhs] => {
            let op = match op {
                "+" => Op::Add,
                "-" => Op::Sub,
                "*" => Op::Mul,
                "/" => Op::Div,
                other => bail!("unknown operator `{other}`"),
            };
            Job::Math(lhs, op, rhs)
        }
        _ => bail!("expected a number or `a op b`, found `{job}`"),
    };
    Ok((name, job))
}

impl AocParser for Solver {
    type SharedData<'a> = Troop<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut jobs = HashMap::new();
        for (line_idx, line) in input.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }
            let (name, job) = parse_job(line)
                .with_context(|| format!("(line {})", line_idx + 1))
                .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;
            if jobs.insert(name, job).is_some() {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) monkey `{}` is defined twice",
                    line_idx + 1,
                    name
                )));
            }
        }

        if !jobs.contains_key(ROOT) {
            return Err(ParseError::MissingData(format!("no `{ROOT}` monkey")));
        }
        Ok(Troop { jobs })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.value_of(ROOT)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.human_value()?.to_string())
    }
}
