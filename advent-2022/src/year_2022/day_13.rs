//! Distress Signal

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Ordering;
use std::fmt;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 13, tags = ["parsing"])]
pub struct Solver;

/// An integer or a list of packets
///
/// Ordering compares integers numerically and lists element by element; an
/// integer compared with a list is treated as a one-element list.
#[derive(Debug, Clone)]
pub enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(b)) => [Packet::Int(*a)].as_slice().cmp(b.as_slice()),
            (Packet::List(a), Packet::Int(b)) => a.as_slice().cmp([Packet::Int(*b)].as_slice()),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packet::Int(value) => write!(f, "{}", value),
            Packet::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Recursive descent over one packet line
struct PacketParser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> PacketParser<'a> {
    fn parse(text: &'a str) -> Result<Packet, String> {
        let mut parser = Self {
            bytes: text.as_bytes(),
            pos: 0,
        };
        let packet = parser.packet()?;
        if parser.pos != parser.bytes.len() {
            return Err(format!("trailing input at column {}", parser.pos + 1));
        }
        Ok(packet)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> Result<(), String> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(format!("expected {:?} at column {}", byte as char, self.pos + 1))
        }
    }

    fn packet(&mut self) -> Result<Packet, String> {
        match self.peek() {
            Some(b'[') => self.list(),
            Some(b) if b.is_ascii_digit() => self.int(),
            _ => Err(format!("expected a packet at column {}", self.pos + 1)),
        }
    }

    fn list(&mut self) -> Result<Packet, String> {
        self.expect(b'[')?;
        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Packet::List(items));
        }
        loop {
            items.push(self.packet()?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                _ => {
                    self.expect(b']')?;
                    return Ok(Packet::List(items));
                }
            }
        }
    }

    fn int(&mut self) -> Result<Packet, String> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()
            .and_then(|digits| digits.parse().ok())
            .map(Packet::Int)
            .ok_or_else(|| format!("integer out of range at column {}", start + 1))
    }
}

impl std::str::FromStr for Packet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PacketParser::parse(s)
    }
}

fn divider(value: u32) -> Packet {
    Packet::List(vec![Packet::List(vec![Packet::Int(value)])])
}

impl AocParser for Solver {
    /// Every packet in input order; pairs are consecutive
    type SharedData<'a> = Vec<Packet>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let packets: Vec<Packet> = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                line.parse()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect::<Result<_, _>>()?;

        if packets.len() % 2 != 0 {
            return Err(ParseError::MissingData(format!(
                "{} packets cannot be split into pairs",
                packets.len()
            )));
        }
        Ok(packets)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: usize = shared
            .chunks(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] < pair[1])
            .map(|(idx, _)| idx + 1)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (two, six) = (divider(2), divider(6));
        // 1-based positions once both dividers are sorted in; [[2]] precedes [[6]]
        let two_pos = shared.iter().filter(|p| **p < two).count() + 1;
        let six_pos = shared.iter().filter(|p| **p < six).count() + 2;
        Ok((two_pos * six_pos).to_string())
    }
}
