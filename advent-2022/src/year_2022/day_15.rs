//! Beacon Exclusion Zone

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 15, tags = ["geometry"])]
pub struct Solver;

pub const DEFAULT_ROW: i64 = 2_000_000;
pub const DEFAULT_LIMIT: i64 = 4_000_000;
const TUNING_MULTIPLIER: i64 = 4_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    pos: (i64, i64),
    beacon: (i64, i64),
    /// Manhattan distance to the closest beacon
    radius: i64,
}

impl Sensor {
    fn covers(&self, (x, y): (i64, i64)) -> bool {
        (x - self.pos.0).abs() + (y - self.pos.1).abs() <= self.radius
    }

    /// Columns covered on `row`, if any
    fn span(&self, row: i64) -> Option<(i64, i64)> {
        let reach = self.radius - (row - self.pos.1).abs();
        (reach >= 0).then(|| (self.pos.0 - reach, self.pos.0 + reach))
    }
}

/// Sensor readings plus the rows and bounds the two parts inspect
#[derive(Debug, Clone)]
pub struct Report {
    sensors: Vec<Sensor>,
    /// Row inspected by part 1
    pub row: i64,
    /// Part 2 searches `0..=limit` on both axes
    pub limit: i64,
}

fn parse_coord(text: &str, axis: &str) -> anyhow::Result<i64> {
    text.trim()
        .strip_prefix(axis)
        .and_then(|s| s.strip_prefix('='))
        .ok_or_else(|| anyhow!("expected `{}=`", axis))?
        .parse()
        .with_context(|| format!("bad {} coordinate", axis))
}

fn parse_position(text: &str) -> anyhow::Result<(i64, i64)> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x=.., y=..`"))?;
    Ok((parse_coord(x, "x")?, parse_coord(y, "y")?))
}

fn parse_sensor(line: &str) -> anyhow::Result<Sensor> {
    let (sensor, beacon) = line
        .trim()
        .strip_prefix("Sensor at ")
        .and_then(|rest| rest.split_once(": closest beacon is at "))
        .ok_or_else(|| anyhow!("unrecognised sensor line"))?;
    let pos = parse_position(sensor)?;
    let beacon = parse_position(beacon)?;
    let radius = (pos.0 - beacon.0).abs() + (pos.1 - beacon.1).abs();
    Ok(Sensor { pos, beacon, radius })
}

/// Sort and merge overlapping or touching spans
fn merge_spans(mut spans: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    spans.sort_unstable();
    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

impl Report {
    pub fn with_params(mut self, row: i64, limit: i64) -> Self {
        self.row = row;
        self.limit = limit;
        self
    }

    /// Positions on `row` where no undetected beacon can be
    fn excluded_on_row(&self) -> i64 {
        let spans = merge_spans(self.sensors.iter().filter_map(|s| s.span(self.row)).collect());
        let covered: i64 = spans.iter().map(|(start, end)| end - start + 1).sum();

        let beacons_on_row: HashSet<i64> = self
            .sensors
            .iter()
            .filter(|s| s.beacon.1 == self.row)
            .map(|s| s.beacon.0)
            .filter(|x| spans.iter().any(|&(start, end)| (start..=end).contains(x)))
            .collect();

        covered - beacons_on_row.len() as i64
    }

    /// The only point in the search square no sensor covers
    ///
    /// Such a point sits just outside the sensor diamonds around it. Inside the
    /// square it lies where two boundary diagonals cross; on an edge of the
    /// square one diagonal meeting that edge is enough, and a corner may need
    /// none at all.
    fn distress_beacon(&self) -> Option<(i64, i64)> {
        let mut rising = HashSet::new();
        let mut falling = HashSet::new();
        for s in &self.sensors {
            let (x, y) = s.pos;
            let r = s.radius + 1;
            rising.extend([y - x + r, y - x - r]);
            falling.extend([y + x + r, y + x - r]);
        }

        let intersections = rising.iter().flat_map(|&a| {
            falling
                .iter()
                .filter(move |&&b| (b - a) % 2 == 0)
                .map(move |&b| ((b - a) / 2, (a + b) / 2))
        });
        let limit = self.limit;
        let rising_edges = rising
            .iter()
            .flat_map(|&a| [(0, a), (limit, a + limit), (-a, 0), (limit - a, limit)]);
        let falling_edges = falling
            .iter()
            .flat_map(|&b| [(0, b), (limit, b - limit), (b, 0), (b - limit, limit)]);
        let corners = [(0, 0), (0, limit), (limit, 0), (limit, limit)];

        intersections
            .chain(rising_edges)
            .chain(falling_edges)
            .chain(corners)
            .find(|&(x, y)| {
                (0..=limit).contains(&x)
                    && (0..=limit).contains(&y)
                    && !self.sensors.iter().any(|s| s.covers((x, y)))
            })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Report;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let sensors: Vec<Sensor> = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_sensor(line)
                    .with_context(|| format!("(line {})", line_idx + 1))
                    .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
            })
            .collect::<Result<_, _>>()?;

        if sensors.is_empty() {
            return Err(ParseError::MissingData("no sensors".into()));
        }
        Ok(Report {
            sensors,
            row: DEFAULT_ROW,
            limit: DEFAULT_LIMIT,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.excluded_on_row().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (x, y) = shared
            .distress_beacon()
            .ok_or_else(|| SolveError::failed("every position in the search area is covered"))?;
        Ok((x * TUNING_MULTIPLIER + y).to_string())
    }
}
