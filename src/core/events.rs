use log::error;
use serde::Deserialize;
use thiserror::Error;

use crate::types::{CaseResult, Part};

// Kinds and outcomes emitted by libtest's JSON format, one object per line:
// `{ "type": "test", "event": "ok", "name": "<module path>" }`
const KIND_TEST: &str = "test";
const EVENT_STARTED: &str = "started";
const EVENT_OK: &str = "ok";

const MODULE_SEPARATOR: &str = "::";

/// A single record from the test runner's stdout. Fields beyond these three
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TestEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub event: String,
    #[serde(default)]
    pub name: String,
}

impl TestEvent {
    /// Suite records and per-test `started` records carry no outcome.
    pub fn is_case_outcome(&self) -> bool {
        self.kind == KIND_TEST && self.event != EVENT_STARTED
    }

    pub fn passed(&self) -> bool {
        self.event == EVENT_OK
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("expected at least 4 `::` segments, got {0}")]
    SegmentCount(usize),
    #[error("year segment `{0}` is not `<letter><digits>`")]
    Year(String),
    #[error("day segment `{0}` is not `day<digits>`")]
    Day(String),
    #[error("no part digit in segment `{0}`")]
    PartDigit(String),
    #[error("part {0} is out of range")]
    PartRange(char),
}

/// Parse a flat stream of test-runner output into per-case results.
///
/// Every failure is contained to the line or record it occurred on: bad JSON
/// drops the line, a test name outside the expected module-path grammar
/// drops the record, and the rest of the stream parses normally.
pub fn parse_events(output: &str) -> Vec<CaseResult> {
    let mut cases = Vec::new();
    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: TestEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(err) => {
                error!("Skipping malformed runner output line: {err}");
                continue;
            }
        };
        if !event.is_case_outcome() {
            continue;
        }

        match parse_test_name(&event.name) {
            Ok((year, day, part)) => cases.push(CaseResult {
                year,
                day,
                part,
                passed: event.passed(),
            }),
            Err(err) => error!("Failed to parse `{}`: {err}", event.name),
        }
    }
    cases
}

/// Extract (year, day, part) from a test's module path.
///
/// Segment 0 is the year module (`y2015`), segment 1 the day module
/// (`day_1` or `day1`), and segment 3 names the part with the first digit
/// it contains (`test_p1`, `part_2_example`). The digit must be 1 or 2.
pub fn parse_test_name(name: &str) -> Result<(u32, u8, Part), NameError> {
    let segments: Vec<&str> = name.split(MODULE_SEPARATOR).collect();
    if segments.len() < 4 {
        return Err(NameError::SegmentCount(segments.len()));
    }

    // The year module is a single prefix letter followed by the year digits.
    let mut year_chars = segments[0].chars();
    if year_chars.next().is_none() {
        return Err(NameError::Year(segments[0].to_string()));
    }
    let year: u32 = year_chars
        .as_str()
        .parse()
        .map_err(|_| NameError::Year(segments[0].to_string()))?;

    let day: u8 = segments[1]
        .strip_prefix("day")
        .map(|rest| rest.trim_start_matches('_'))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| NameError::Day(segments[1].to_string()))?;

    let digit = segments[3]
        .chars()
        .find(char::is_ascii_digit)
        .ok_or_else(|| NameError::PartDigit(segments[3].to_string()))?;
    let part = match digit {
        '1' => Part::One,
        '2' => Part::Two,
        other => return Err(NameError::PartRange(other)),
    };

    Ok((year, day, part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_underscore_day_names() {
        assert_eq!(
            parse_test_name("y2015::day_1::tests::test_p1"),
            Ok((2015, 1, Part::One))
        );
    }

    #[test]
    fn parses_compact_day_names() {
        assert_eq!(
            parse_test_name("y2023::day25::solutions::part_2_large"),
            Ok((2023, 25, Part::Two))
        );
    }

    #[test]
    fn rejects_short_paths() {
        assert_eq!(
            parse_test_name("y2015::day_1::test_p1"),
            Err(NameError::SegmentCount(3))
        );
    }

    #[test]
    fn rejects_non_numeric_year() {
        assert_eq!(
            parse_test_name("spam::day_1::tests::test_p1"),
            Err(NameError::Year("spam".to_string()))
        );
    }

    #[test]
    fn rejects_unrecognized_day_segment() {
        assert_eq!(
            parse_test_name("y2015::d1::tests::test_p1"),
            Err(NameError::Day("d1".to_string()))
        );
    }

    #[test]
    fn rejects_part_digit_out_of_range() {
        assert_eq!(
            parse_test_name("y2015::day_1::tests::test_p3"),
            Err(NameError::PartRange('3'))
        );
    }

    #[test]
    fn rejects_missing_part_digit() {
        assert_eq!(
            parse_test_name("y2015::day_1::tests::works"),
            Err(NameError::PartDigit("works".to_string()))
        );
    }

    #[test]
    fn filters_suite_and_started_records() {
        let output = concat!(
            r#"{"type":"suite","event":"started","test_count":2}"#,
            "\n",
            r#"{"type":"test","event":"started","name":"y2015::day_1::tests::test_p1"}"#,
            "\n",
            r#"{"type":"test","event":"ok","name":"y2015::day_1::tests::test_p1"}"#,
            "\n",
            r#"{"type":"suite","event":"ok","passed":1,"failed":0}"#,
        );
        let cases = parse_events(output);
        assert_eq!(
            cases,
            vec![CaseResult {
                year: 2015,
                day: 1,
                part: Part::One,
                passed: true,
            }]
        );
    }

    #[test]
    fn failed_and_ignored_events_count_as_not_passing() {
        let output = concat!(
            r#"{"type":"test","event":"failed","name":"y2015::day_1::tests::test_p1","exec_time":0.01}"#,
            "\n",
            r#"{"type":"test","event":"ignored","name":"y2015::day_1::tests::test_p2"}"#,
        );
        let cases = parse_events(output);
        assert_eq!(cases.len(), 2);
        assert!(cases.iter().all(|case| !case.passed));
    }

    #[test]
    fn bad_lines_do_not_poison_the_stream() {
        let output = concat!(
            "not json at all\n",
            "\n",
            r#"{"type":"test","event":"ok","name":"unparseable-name"}"#,
            "\n",
            r#"{"type":"test","event":"ok","name":"y2022::day_7::tests::test_p2"}"#,
        );
        let cases = parse_events(output);
        assert_eq!(
            cases,
            vec![CaseResult {
                year: 2022,
                day: 7,
                part: Part::Two,
                passed: true,
            }]
        );
    }

    #[test]
    fn empty_output_parses_to_no_cases() {
        assert!(parse_events("").is_empty());
    }
}
