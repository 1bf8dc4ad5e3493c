//! Response collection.
//!
//! Gathers one answer per catalog item, either interactively from the
//! terminal or from a batch answers file. All collection paths constrain
//! values to the response scale before they reach the aggregator.

use crate::catalog::{ITEMS, SCALE_MAX, SCALE_MIN};
use crate::models::Response;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use thiserror::Error;

/// Errors produced while parsing a batch answers file.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// The file did not contain exactly one answer per item.
    #[error("expected {expected} answers, found {found}")]
    WrongCount { expected: usize, found: usize },

    /// A token could not be read as an integer rating.
    #[error("invalid answer '{token}': not an integer")]
    InvalidToken { token: String },

    /// The answers JSON array could not be parsed.
    #[error("invalid answers JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Clamp a raw value to the response scale, mirroring the slider bounds.
pub fn clamp_to_scale(value: i64) -> u8 {
    value.clamp(i64::from(SCALE_MIN), i64::from(SCALE_MAX)) as u8
}

/// One response per item at the given value (clamped).
pub fn default_responses(default_value: u8) -> Vec<Response> {
    let value = clamp_to_scale(i64::from(default_value));
    (0..ITEMS.len())
        .map(|item_index| Response { item_index, value })
        .collect()
}

/// Parse a batch answers file.
///
/// Accepts either a JSON array of integers or plain text with
/// whitespace/comma-separated integers; `#` starts a line comment. Values
/// outside the scale are clamped; the count must match the catalog exactly.
pub fn parse_answers(content: &str) -> Result<Vec<Response>, SurveyError> {
    let trimmed = content.trim();

    let values: Vec<i64> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)?
    } else {
        let mut values = Vec::new();
        for line in trimmed.lines() {
            let line = line.split('#').next().unwrap_or("");
            for token in line.split(|c: char| c.is_whitespace() || c == ',') {
                if token.is_empty() {
                    continue;
                }
                let value = token.parse::<i64>().map_err(|_| SurveyError::InvalidToken {
                    token: token.to_string(),
                })?;
                values.push(value);
            }
        }
        values
    };

    if values.len() != ITEMS.len() {
        return Err(SurveyError::WrongCount {
            expected: ITEMS.len(),
            found: values.len(),
        });
    }

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(item_index, value)| Response {
            item_index,
            value: clamp_to_scale(value),
        })
        .collect())
}

/// Read and parse a batch answers file from disk.
pub fn read_answers_file(path: &Path) -> Result<Vec<Response>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file: {}", path.display()))?;

    parse_answers(&content)
        .with_context(|| format!("Failed to parse answers file: {}", path.display()))
}

/// Run the interactive questionnaire.
///
/// Prompts once per item in catalog order. An empty answer takes
/// `default_value`, non-numeric input re-prompts, and out-of-range integers
/// are clamped to the scale. If input ends early, the remaining items take
/// the default, like untouched sliders on a submitted form.
pub fn run_interactive<R, W>(input: &mut R, output: &mut W, default_value: u8) -> Result<Vec<Response>>
where
    R: BufRead,
    W: Write,
{
    let default_value = clamp_to_scale(i64::from(default_value));

    writeln!(
        output,
        "Rate each statement from {} (strongly disagree) to {} (strongly agree).",
        SCALE_MIN, SCALE_MAX
    )?;
    writeln!(output, "Press Enter to keep the default ({}).\n", default_value)?;

    let mut responses = Vec::with_capacity(ITEMS.len());
    let mut exhausted = false;

    for (item_index, entry) in ITEMS.iter().enumerate() {
        let value = if exhausted {
            default_value
        } else {
            loop {
                write!(output, "{:2}. {} [{}]: ", item_index + 1, entry.prompt, default_value)?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    tracing::debug!("input ended at item {}; using defaults", item_index + 1);
                    exhausted = true;
                    break default_value;
                }

                let answer = line.trim();
                if answer.is_empty() {
                    break default_value;
                }

                match answer.parse::<i64>() {
                    Ok(value) => break clamp_to_scale(value),
                    Err(_) => {
                        writeln!(
                            output,
                            "    Please enter a number between {} and {}.",
                            SCALE_MIN, SCALE_MAX
                        )?;
                    }
                }
            }
        };

        responses.push(Response { item_index, value });
    }

    writeln!(output)?;
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_RESPONSE;
    use std::io::Cursor;

    fn values_of(responses: &[Response]) -> Vec<u8> {
        responses.iter().map(|r| r.value).collect()
    }

    #[test]
    fn test_parse_plain_answers() {
        let content = "4 4 4 4 4\n4 4 4 4 4\n4 4 4 4\n4 4 4 4\n4 4 4 4 4\n";
        let responses = parse_answers(content).unwrap();

        assert_eq!(responses.len(), 23);
        assert!(responses.iter().all(|r| r.value == 4));
        assert_eq!(responses[22].item_index, 22);
    }

    #[test]
    fn test_parse_comma_separated_answers() {
        let content = "1,2,3,4,5,6,7,1,2,3,4,5,6,7,1,2,3,4,5,6,7,1,2";
        let responses = parse_answers(content).unwrap();

        assert_eq!(responses.len(), 23);
        assert_eq!(responses[0].value, 1);
        assert_eq!(responses[6].value, 7);
    }

    #[test]
    fn test_parse_json_answers() {
        let content = "[4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4]";
        let responses = parse_answers(content).unwrap();

        assert_eq!(responses.len(), 23);
        assert!(responses.iter().all(|r| r.value == 4));
    }

    #[test]
    fn test_parse_skips_comments() {
        let content = "# weekly check-in\n5 5 5 5 5 # P\n5 5 5 5 5\n5 5 5 5\n5 5 5 5\n5 5 5 5 5\n";
        let responses = parse_answers(content).unwrap();

        assert_eq!(responses.len(), 23);
        assert!(responses.iter().all(|r| r.value == 5));
    }

    #[test]
    fn test_parse_clamps_out_of_range_values() {
        let mut values = vec![4i64; 23];
        values[0] = 0;
        values[1] = 99;
        values[2] = -3;
        let content = serde_json::to_string(&values).unwrap();

        let responses = parse_answers(&content).unwrap();
        assert_eq!(responses[0].value, 1);
        assert_eq!(responses[1].value, 7);
        assert_eq!(responses[2].value, 1);
        assert_eq!(responses[3].value, 4);
    }

    #[test]
    fn test_parse_rejects_wrong_count() {
        let err = parse_answers("4 4 4").unwrap_err();
        match err {
            SurveyError::WrongCount { expected, found } => {
                assert_eq!(expected, 23);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = parse_answers("4 4 four 4").unwrap_err();
        match err {
            SurveyError::InvalidToken { token } => assert_eq!(token, "four"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_answers_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");
        std::fs::write(&path, "4 ".repeat(23)).unwrap();

        let responses = read_answers_file(&path).unwrap();
        assert_eq!(responses.len(), 23);
    }

    #[test]
    fn test_read_answers_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(read_answers_file(&path).is_err());
    }

    #[test]
    fn test_default_responses() {
        let responses = default_responses(DEFAULT_RESPONSE);

        assert_eq!(responses.len(), 23);
        assert!(responses.iter().all(|r| r.value == DEFAULT_RESPONSE));

        // Defaults outside the scale are clamped like any other value.
        let clamped = default_responses(9);
        assert!(clamped.iter().all(|r| r.value == 7));
    }

    #[test]
    fn test_interactive_empty_answers_take_default() {
        let mut input = Cursor::new("\n".repeat(23));
        let mut output = Vec::new();

        let responses = run_interactive(&mut input, &mut output, 4).unwrap();

        assert_eq!(responses.len(), 23);
        assert!(responses.iter().all(|r| r.value == 4));

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("strongly disagree"));
        assert!(prompts.contains(" 1. "));
        assert!(prompts.contains("23. "));
    }

    #[test]
    fn test_interactive_reprompts_on_invalid_input() {
        // First item: garbage then a valid answer; the rest default.
        let script = format!("abc\n6\n{}", "\n".repeat(22));
        let mut input = Cursor::new(script);
        let mut output = Vec::new();

        let responses = run_interactive(&mut input, &mut output, 4).unwrap();

        assert_eq!(responses[0].value, 6);
        assert!(responses[1..].iter().all(|r| r.value == 4));

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Please enter a number"));
    }

    #[test]
    fn test_interactive_clamps_out_of_range() {
        let script = format!("0\n12\n{}", "\n".repeat(21));
        let mut input = Cursor::new(script);
        let mut output = Vec::new();

        let responses = run_interactive(&mut input, &mut output, 4).unwrap();

        assert_eq!(responses[0].value, 1);
        assert_eq!(responses[1].value, 7);
    }

    #[test]
    fn test_interactive_early_eof_uses_defaults() {
        let mut input = Cursor::new("5\n5\n");
        let mut output = Vec::new();

        let responses = run_interactive(&mut input, &mut output, 4).unwrap();

        assert_eq!(responses.len(), 23);
        assert_eq!(responses[0].value, 5);
        assert_eq!(responses[1].value, 5);
        assert!(responses[2..].iter().all(|r| r.value == 4));
    }

    #[test]
    fn test_fixture_files_parse() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        for name in ["answers_all_fours.txt", "answers_low_engagement.txt"] {
            let responses = read_answers_file(&root.join("fixtures").join(name)).unwrap();
            assert_eq!(responses.len(), 23);
        }
    }
}
