//! Grove Positioning System

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 20, tags = ["linked-list"])]
pub struct Solver;

const DECRYPTION_KEY: i64 = 811_589_153;
const GROVE_OFFSETS: [usize; 3] = [1000, 2000, 3000];

/// Circular doubly linked list over an index arena
///
/// Node `i` holds the `i`-th number of the original file, so the original
/// order is always available for mixing.
struct Ring {
    values: Vec<i64>,
    next: Vec<usize>,
    prev: Vec<usize>,
}

impl Ring {
    fn new(values: Vec<i64>) -> Self {
        let n = values.len();
        Self {
            next: (0..n).map(|i| (i + 1) % n).collect(),
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            values,
        }
    }

    fn unlink(&mut self, node: usize) {
        let (prev, next) = (self.prev[node], self.next[node]);
        self.next[prev] = next;
        self.prev[next] = prev;
    }

    fn insert_after(&mut self, node: usize, anchor: usize) {
        let next = self.next[anchor];
        self.next[anchor] = node;
        self.prev[node] = anchor;
        self.next[node] = next;
        self.prev[next] = node;
    }

    /// Move every number, in original order, by its own value
    fn mix(&mut self) {
        let n = self.values.len();
        if n <= 2 {
            // Every position is equivalent in a ring this small
            return;
        }
        let others = n - 1;

        for node in 0..n {
            let shift = self.values[node].rem_euclid(others as i64) as usize;
            if shift == 0 {
                continue;
            }
            let mut anchor = self.prev[node];
            self.unlink(node);
            if shift <= others / 2 {
                for _ in 0..shift {
                    anchor = self.next[anchor];
                }
            } else {
                for _ in 0..others - shift {
                    anchor = self.prev[anchor];
                }
            }
            self.insert_after(node, anchor);
        }
    }

    /// Values in ring order starting at `from`
    fn ordered_from(&self, from: usize) -> Vec<i64> {
        let mut order = Vec::with_capacity(self.values.len());
        let mut node = from;
        for _ in 0..self.values.len() {
            order.push(self.values[node]);
            node = self.next[node];
        }
        order
    }
}

fn grove_sum(numbers: &[i64], key: i64, rounds: usize) -> Result<String, SolveError> {
    let zero = numbers
        .iter()
        .position(|&v| v == 0)
        .ok_or_else(|| SolveError::failed("the file contains no 0"))?;

    let mut ring = Ring::new(numbers.iter().map(|v| v * key).collect());
    for _ in 0..rounds {
        ring.mix();
    }

    let order = ring.ordered_from(zero);
    let sum: i64 = GROVE_OFFSETS
        .iter()
        .map(|offset| order[offset % order.len()])
        .sum();
    Ok(sum.to_string())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                line.parse()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        grove_sum(shared, 1, 1)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        grove_sum(shared, DECRYPTION_KEY, 10)
    }
}
