//! Output formatting for part outcomes

use crate::executor::{PartOutcome, Verdict};
use chrono::TimeDelta;

/// Output formatter for part outcomes
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

    /// Format and print a single outcome
    pub fn print_outcome(&self, outcome: &PartOutcome) {
        match self.format_outcome(outcome) {
            Some(line) => println!("{}", line),
            None => eprintln!("{}: failed", outcome.part),
        }
    }

    /// Line for a solved part; `None` if solving failed
    fn format_outcome(&self, outcome: &PartOutcome) -> Option<String> {
        let solution = outcome.result.as_ref().ok()?;
        if self.quiet {
            return Some(solution.answer.to_string());
        }

        let check = match outcome.verdict() {
            Some(Verdict::Correct) => ", ✓ expected".to_string(),
            Some(Verdict::Mismatch { expected }) => format!(", ✗ expected {}", expected),
            _ => String::new(),
        };
        Some(format!(
            "{}: {} (parse: {}, solve: {}{})",
            outcome.part,
            solution.answer,
            format_duration(solution.parse_duration()),
            format_duration(solution.solve_duration()),
            check
        ))
    }

    /// Print a summary after all outcomes
    pub fn print_summary(&self, outcomes: &[PartOutcome]) {
        if self.quiet {
            return;
        }

        let solved = outcomes.iter().filter(|o| o.result.is_ok()).count();
        let failed = outcomes.len() - solved;
        let (total_parse_time, total_solve_time) = outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .fold((TimeDelta::zero(), TimeDelta::zero()), |(parse, solve), s| {
                (parse + s.parse_duration(), solve + s.solve_duration())
            });

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", solved, failed);
        println!("Total parse time: {}", format_duration(total_parse_time));
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
    format_micros(micros.unsigned_abs())
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
}

fn format_micros(micros: u64) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;
    use springs::puzzle::{Part, Solution};

    fn solved(part: Part, answer: u64, expected: Option<u64>) -> PartOutcome {
        let start = Utc::now();
        PartOutcome {
            part,
            result: Ok(Solution {
                part,
                answer,
                parse_start: start,
                parse_end: start + TimeDelta::microseconds(250),
                solve_end: start + TimeDelta::milliseconds(12),
            }),
            expected,
        }
    }

    #[test]
    fn test_full_line() {
        let formatter = OutputFormatter::new(false);
        assert_eq!(
            formatter.format_outcome(&solved(Part::One, 21, None)).unwrap(),
            "Part 1: 21 (parse: 250µs, solve: 11.75ms)"
        );
        assert_eq!(
            formatter
                .format_outcome(&solved(Part::Two, 525152, Some(525152)))
                .unwrap(),
            "Part 2: 525152 (parse: 250µs, solve: 11.75ms, ✓ expected)"
        );
        assert_eq!(
            formatter.format_outcome(&solved(Part::Two, 7, Some(8))).unwrap(),
            "Part 2: 7 (parse: 250µs, solve: 11.75ms, ✗ expected 8)"
        );
    }

    #[test]
    fn test_quiet_line() {
        let formatter = OutputFormatter::new(true);
        assert_eq!(
            formatter.format_outcome(&solved(Part::One, 21, Some(3))).unwrap(),
            "21"
        );
    }

    #[test]
    fn test_failed_outcome_has_no_line() {
        let err = springs::puzzle::solve(
            "? x",
            Part::One,
            &Default::default(),
            &springs::progress::Silent,
        )
        .unwrap_err();
        let outcome = PartOutcome {
            part: Part::One,
            result: Err(err),
            expected: None,
        };
        assert!(OutputFormatter::new(false).format_outcome(&outcome).is_none());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
        assert_eq!(
            format_std_duration(std::time::Duration::from_millis(3)),
            "3.00ms"
        );
    }

    proptest! {
        #[test]
        fn prop_duration_units(micros in 0i64..10_000_000_000) {
            let text = format_duration(TimeDelta::microseconds(micros));
            let unit = if micros < 1000 {
                "µs"
            } else if micros < 1_000_000 {
                "ms"
            } else {
                "s"
            };
            prop_assert!(text.ends_with(unit));
            prop_assert!(!text.ends_with("µs") || unit == "µs");
            prop_assert!(!text.ends_with("ms") || unit == "ms");
        }
    }
}
