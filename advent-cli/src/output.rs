//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::fmt::Write as _;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match &result.answer {
            Ok(_) => println!("{}", self.format_result(result)),
            Err(_) => eprintln!("{}", Self::format_error(result)),
        }
    }

    fn format_error(result: &SolverResult) -> String {
        match &result.answer {
            Err(e) => format!("{} Part {}: Error - {}", result.id, result.part, e),
            Ok(_) => String::new(),
        }
    }

    /// Render a successful result; failures are printed separately to stderr
    fn format_result(&self, result: &SolverResult) -> String {
        let answer = result.answer.as_deref().unwrap_or_default();
        if self.quiet {
            return answer.to_string();
        }

        let parse_timing = result
            .parse_duration
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        let timing = format!("({}solve: {})", parse_timing, format_duration(result.solve_duration));
        let prefix = format!("{} Part {}", result.id, result.part);

        // Multi-line answers (rendered images) start on their own line
        if answer.contains('\n') {
            let mut out = format!("{}: {}", prefix, timing);
            for line in answer.lines() {
                let _ = write!(out, "\n{}", line);
            }
            out
        } else {
            format!("{}: {} {}", prefix, answer, timing)
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::PuzzleId;

    fn solved(answer: &str) -> SolverResult {
        SolverResult {
            id: PuzzleId::new(2022, 12),
            part: 1,
            answer: Ok(answer.to_string()),
            parse_duration: Some(TimeDelta::microseconds(12)),
            solve_duration: TimeDelta::microseconds(1500),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(80)), "80µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    #[test]
    fn test_full_line() {
        let formatter = OutputFormatter::new(false);
        assert_eq!(
            formatter.format_result(&solved("31")),
            "2022/12 Part 1: 31 (parse: 12µs, solve: 1.50ms)"
        );
    }

    #[test]
    fn test_multi_line_answer() {
        let formatter = OutputFormatter::new(false);
        assert_eq!(
            formatter.format_result(&solved("#.#\n.#.")),
            "2022/12 Part 1: (parse: 12µs, solve: 1.50ms)\n#.#\n.#."
        );
    }

    #[test]
    fn test_error_line_uses_puzzle_id() {
        let result = SolverResult {
            id: PuzzleId::new(2022, 5),
            part: 2,
            answer: Err(advent_solver::SolverError::SolveError(advent_solver::SolveError::failed("stuck"))),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        };
        assert_eq!(
            OutputFormatter::format_error(&result),
            "2022/05 Part 2: Error - Solve error: Solve failed: stuck"
        );
    }

    #[test]
    fn test_quiet_prints_answer_only() {
        let formatter = OutputFormatter::new(true);
        assert_eq!(formatter.format_result(&solved("#.#\n.#.")), "#.#\n.#.");
    }
}
