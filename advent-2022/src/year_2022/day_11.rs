//! Monkey in the Middle

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow, bail};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 11, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Old,
    Value(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(Operand),
    Mul(Operand),
}

impl Operation {
    fn apply(self, old: u64) -> Result<u64, SolveError> {
        let value = |operand: Operand| match operand {
            Operand::Old => old,
            Operand::Value(v) => v,
        };
        let new = match self {
            Operation::Add(operand) => old.checked_add(value(operand)),
            Operation::Mul(operand) => old.checked_mul(value(operand)),
        };
        new.ok_or_else(|| SolveError::failed(format!("worry level {} overflows under {:?}", old, self)))
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn field<'a>(line: Option<&'a str>, prefix: &str) -> anyhow::Result<&'a str> {
    line.map(str::trim)
        .and_then(|line| line.strip_prefix(prefix))
        .map(str::trim)
        .ok_or_else(|| anyhow!("expected `{}`", prefix))
}

impl Monkey {
    fn parse(block: &str, expected_id: usize) -> anyhow::Result<Self> {
        let mut lines = block.lines();

        let id: usize = field(lines.next(), "Monkey")?
            .trim_end_matches(':')
            .parse()
            .context("bad monkey id")?;
        if id != expected_id {
            bail!("expected monkey {}, found monkey {}", expected_id, id);
        }

        let items = field(lines.next(), "Starting items:")?;
        let items = if items.is_empty() {
            Vec::new()
        } else {
            items
                .split(',')
                .map(|item| item.trim().parse::<u64>())
                .collect::<Result<_, _>>()
                .context("bad starting item")?
        };

        let operation = match field(lines.next(), "Operation: new = old")?.split_once(' ') {
            Some((op, operand)) => {
                let operand = match operand {
                    "old" => Operand::Old,
                    value => Operand::Value(value.parse().context("bad operand")?),
                };
                match op {
                    "+" => Operation::Add(operand),
                    "*" => Operation::Mul(operand),
                    other => bail!("unknown operator {:?}", other),
                }
            }
            None => bail!("incomplete operation"),
        };

        let divisor: u64 = field(lines.next(), "Test: divisible by")?
            .parse()
            .context("bad divisor")?;
        if divisor == 0 {
            bail!("divisor must be positive");
        }
        let if_true = field(lines.next(), "If true: throw to monkey")?
            .parse()
            .context("bad target")?;
        let if_false = field(lines.next(), "If false: throw to monkey")?
            .parse()
            .context("bad target")?;

        Ok(Self {
            items,
            operation,
            divisor,
            if_true,
            if_false,
        })
    }
}

/// Product of the two busiest monkeys' inspection counts
fn monkey_business(monkeys: &[Monkey], rounds: usize, relief: bool) -> Result<u64, SolveError> {
    let mut monkeys = monkeys.to_vec();
    let mut inspections = vec![0u64; monkeys.len()];
    // Divisibility tests are unaffected by reducing modulo their product
    let modulus = monkeys
        .iter()
        .try_fold(1u64, |acc, m| acc.checked_mul(m.divisor))
        .ok_or_else(|| SolveError::failed("product of divisors overflows"))?;

    for _ in 0..rounds {
        for idx in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[idx].items);
            inspections[idx] += items.len() as u64;

            for item in items {
                let monkey = &monkeys[idx];
                let mut worry = monkey.operation.apply(item)?;
                if relief {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }
                let target = if worry % monkey.divisor == 0 {
                    monkey.if_true
                } else {
                    monkey.if_false
                };
                monkeys[target].items.push(worry);
            }
        }
    }

    Ok(inspections.into_iter().k_largest(2).product())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Monkey>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let monkeys = input
            .replace("\r\n", "\n")
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .enumerate()
            .map(|(idx, block)| Monkey::parse(block, idx).with_context(|| format!("(monkey {})", idx)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;

        if monkeys.len() < 2 {
            return Err(ParseError::MissingData("need at least two monkeys".into()));
        }
        if let Some((idx, monkey)) = monkeys
            .iter()
            .enumerate()
            .find(|(_, m)| m.if_true >= monkeys.len() || m.if_false >= monkeys.len())
        {
            return Err(ParseError::InvalidFormat(format!(
                "(monkey {}) throws to unknown monkey {}",
                idx,
                monkey.if_true.max(monkey.if_false)
            )));
        }
        Ok(monkeys)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 20, true)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 10_000, false)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";

    #[test]
    fn test_example() {
        let mut monkeys = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(monkeys.len(), 4);
        assert_eq!(monkeys[2].operation, Operation::Mul(Operand::Old));
        assert_eq!(Solver::solve_part(&mut monkeys, 1).unwrap(), "10605");
        assert_eq!(Solver::solve_part(&mut monkeys, 2).unwrap(), "2713310158");
    }

    #[test]
    fn test_worry_overflow_is_solve_failure() {
        // 2^33 squared does not fit in u64
        let input = "\
Monkey 0:
  Starting items: 8589934592
  Operation: new = old * old
  Test: divisible by 2
    If true: throw to monkey 1
    If false: throw to monkey 1

Monkey 1:
  Starting items:
  Operation: new = old + 1
  Test: divisible by 3
    If true: throw to monkey 0
    If false: throw to monkey 0
";
        let mut monkeys = Solver::parse(input).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut monkeys, 1),
            Err(SolveError::SolveFailed(_))
        ));
        assert_eq!(Operation::Add(Operand::Value(1)).apply(u64::MAX - 1).unwrap(), u64::MAX);
        assert!(Operation::Add(Operand::Old).apply(u64::MAX).is_err());
    }

    #[test]
    fn test_unknown_target_rejected() {
        let input = EXAMPLE.replace("throw to monkey 3\n\nMonkey 1", "throw to monkey 7\n\nMonkey 1");
        assert!(matches!(
            Solver::parse(&input),
            Err(ParseError::InvalidFormat(msg)) if msg.contains("unknown monkey 7")
        ));
    }

    #[test]
    fn test_bad_operation_reports_monkey() {
        let input = EXAMPLE.replace("old + 6", "old - 6");
        assert!(matches!(
            Solver::parse(&input),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(monkey 1)")
        ));
    }
}
