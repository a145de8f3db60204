//! Proboscidea Volcanium

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow};
use std::collections::{HashMap, VecDeque};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 16, tags = ["graph", "search"])]
pub struct Solver;

const START: &str = "AA";
const MAX_USEFUL_VALVES: usize = 20;

struct Valve<'a> {
    name: &'a str,
    rate: u32,
    tunnels: Vec<&'a str>,
}

fn parse_valve(line: &str) -> anyhow::Result<Valve<'_>> {
    let (head, tail) = line
        .trim()
        .split_once(';')
        .ok_or_else(|| anyhow!("expected `;` between valve and tunnels"))?;
    let (name, rate) = head
        .strip_prefix("Valve ")
        .and_then(|rest| rest.split_once(" has flow rate="))
        .ok_or_else(|| anyhow!("expected `Valve XX has flow rate=N`"))?;
    let rate = rate.parse().context("bad flow rate")?;

    let tunnels = ["tunnels lead to valves ", "tunnel leads to valve "]
        .iter()
        .find_map(|prefix| tail.trim().strip_prefix(prefix))
        .ok_or_else(|| anyhow!("expected tunnel list"))?
        .split(", ")
        .map(str::trim)
        .collect();

    Ok(Valve { name, rate, tunnels })
}

/// The tunnel graph reduced to valves worth opening
///
/// Index `rates.len()` in `dist` is the start valve.
#[derive(Debug, Clone)]
pub struct Network {
    rates: Vec<u32>,
    /// Minutes to walk between two reduced valves
    dist: Vec<Vec<u32>>,
}

impl Network {
    fn build(valves: &[Valve<'_>]) -> Result<Self, ParseError> {
        let index: HashMap<&str, usize> = valves.iter().enumerate().map(|(i, v)| (v.name, i)).collect();

        let mut adjacency = Vec::with_capacity(valves.len());
        for valve in valves {
            let neighbours = valve
                .tunnels
                .iter()
                .map(|name| {
                    index.get(name).copied().ok_or_else(|| {
                        ParseError::InvalidFormat(format!(
                            "valve {} leads to unknown valve {}",
                            valve.name, name
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            adjacency.push(neighbours);
        }

        let start = *index
            .get(START)
            .ok_or_else(|| ParseError::MissingData(format!("no start valve {}", START)))?;

        let useful: Vec<usize> = (0..valves.len()).filter(|&i| valves[i].rate > 0).collect();
        if useful.len() > MAX_USEFUL_VALVES {
            return Err(ParseError::InvalidFormat(format!(
                "{} valves with flow exceed the supported {}",
                useful.len(),
                MAX_USEFUL_VALVES
            )));
        }

        let nodes: Vec<usize> = useful.iter().copied().chain([start]).collect();
        let dist = nodes
            .iter()
            .map(|&from| {
                let steps = bfs(&adjacency, from);
                nodes.iter().map(|&to| steps[to]).collect::<Vec<u32>>()
            })
            .collect();

        Ok(Self {
            rates: useful.iter().map(|&i| valves[i].rate).collect(),
            dist,
        })
    }

    /// Best pressure for every set of opened valves, within `minutes`
    fn best_by_opened_set(&self, minutes: u32) -> Vec<u32> {
        let mut best = vec![0; 1 << self.rates.len()];
        self.explore(self.rates.len(), minutes, 0, 0, &mut best);
        best
    }

    /// Depth-first walk over valve opening orders
    ///
    /// `best[opened]` keeps the highest pressure seen for each opened set.
    fn explore(&self, at: usize, minutes_left: u32, opened: usize, pressure: u32, best: &mut [u32]) {
        best[opened] = best[opened].max(pressure);

        for next in 0..self.rates.len() {
            if opened & (1 << next) != 0 {
                continue;
            }
            let cost = self.dist[at][next] + 1;
            if cost >= minutes_left {
                continue;
            }
            let remaining = minutes_left - cost;
            self.explore(
                next,
                remaining,
                opened | (1 << next),
                pressure + self.rates[next] * remaining,
                best,
            );
        }
    }
}

/// Walking distance from `from` to every valve; unreachable valves get `u32::MAX / 2`
fn bfs(adjacency: &[Vec<usize>], from: usize) -> Vec<u32> {
    let mut dist = vec![u32::MAX / 2; adjacency.len()];
    let mut queue = VecDeque::from([from]);
    dist[from] = 0;

    while let Some(valve) = queue.pop_front() {
        for &next in &adjacency[valve] {
            if dist[next] > dist[valve] + 1 {
                dist[next] = dist[valve] + 1;
                queue.push_back(next);
            }
        }
    }
    dist
}

impl AocParser for Solver {
    type SharedData<'a> = Network;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let valves = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_valve(line)
                    .with_context(|| format!("(line {})", line_idx + 1))
                    .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Network::build(&valves)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared.best_by_opened_set(30);
        Ok(best.iter().max().copied().unwrap_or_default().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut best = shared.best_by_opened_set(26);
        let full = best.len() - 1;

        // best[mask] becomes the best over every subset of mask
        for bit in 0..shared.rates.len() {
            for mask in 0..best.len() {
                if mask & (1 << bit) != 0 {
                    best[mask] = best[mask].max(best[mask ^ (1 << bit)]);
                }
            }
        }

        // You and the elephant open disjoint sets
        let total = (0..best.len())
            .map(|mine| best[mine] + best[full ^ mine])
            .max()
            .unwrap_or_default();
        Ok(total.to_string())
    }
}
