//! Worked examples from the puzzle statement, through the public API.

use springs::progress::{LogProgress, Silent};
use springs::puzzle::{Options, Part, solve};
use springs::{CountError, Dispatcher, Record, SolveError, Strategy, brute_force};

const EXAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

fn arrangements(line: &str) -> u64 {
    line.parse::<Record>().unwrap().arrangements().unwrap()
}

#[test]
fn test_single_records() {
    assert_eq!(arrangements("???.### 1,1,3"), 1);
    assert_eq!(arrangements(".??..??...?##. 1,1,3"), 4);
    assert_eq!(arrangements("?###???????? 3,2,1"), 10);
}

#[test]
fn test_unfolded_record() {
    let record: Record = ".??..??...?##. 1,1,3".parse().unwrap();
    assert_eq!(record.unfold(5).arrangements().unwrap(), 16384);
}

#[test]
fn test_count_past_u64_is_an_error() {
    let record: Record = ".??..??...?##. 1,1,3".parse().unwrap();
    assert_eq!(record.unfold(21).arrangements(), Ok(1 << 62));
    assert_eq!(record.unfold(22).arrangements(), Err(CountError::Overflow));

    let options = Options {
        unfold: Some(22),
        dispatcher: Dispatcher::new(Strategy::Workers, 2),
    };
    let err = solve(".??..??...?##. 1,1,3\n", Part::Two, &options, &Silent).unwrap_err();
    assert!(matches!(err, SolveError::Overflow { line: 1 }), "{err}");
}

#[test]
fn test_only_placement() {
    // The single valid placement is `#.#.###`.
    let record: Record = "???.### 1,1,3".parse().unwrap();
    assert_eq!(brute_force(&record), Some(1));
    let fixed: Record = "#.#.### 1,1,3".parse().unwrap();
    assert_eq!(fixed.arrangements().unwrap(), 1);
}

#[test]
fn test_impossible_record_counts_zero() {
    assert_eq!(arrangements("#.# 3"), 0);
    assert_eq!(arrangements("??? 2,2"), 0);
    assert_eq!(arrangements("### 1"), 0);
}

#[test]
fn test_example_input_every_strategy() {
    for strategy in [Strategy::Sequential, Strategy::Workers, Strategy::Rayon] {
        let options = Options {
            unfold: None,
            dispatcher: Dispatcher::new(strategy, 4),
        };
        let progress = LogProgress::new("example");
        assert_eq!(solve(EXAMPLE, Part::One, &options, &progress).unwrap().answer, 21);
        assert_eq!(solve(EXAMPLE, Part::Two, &options, &Silent).unwrap().answer, 525152);
    }
}

#[test]
fn test_blank_lines_are_ignored() {
    let input = format!("\n{}\n\n", EXAMPLE.replace('\n', "\n\n"));
    let solution = solve(&input, Part::One, &Options::default(), &Silent).unwrap();
    assert_eq!(solution.answer, 21);
}
