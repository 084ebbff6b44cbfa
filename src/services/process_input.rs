use thiserror::Error;

use crate::domain::process::ProcessSpec;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProcessInputError {
    #[error("process list is empty")]
    Empty,
    #[error("expected three fields on line {line}: {text}")]
    FieldCount { line: usize, text: String },
    #[error("invalid {field} on line {line}: {token}")]
    InvalidToken {
        line: usize,
        field: &'static str,
        token: String,
    },
}

/// Parses a multi-line process list into ProcessSpec rows.
///
/// Each non-empty line must hold exactly three whitespace-separated integers:
/// begin, duration, priority. Blank lines are skipped. Every token must parse
/// as an integer; a malformed token rejects the whole submission.
pub fn parse_process_list(input: &str) -> Result<Vec<ProcessSpec>, ProcessInputError> {
    let mut processes = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(ProcessInputError::FieldCount {
                line: index + 1,
                text: line.to_string(),
            });
        }

        processes.push(ProcessSpec {
            begin: parse_field(fields[0], "begin", index + 1)?,
            duration: parse_field(fields[1], "duration", index + 1)?,
            priority: parse_field(fields[2], "priority", index + 1)?,
        });
    }

    if processes.is_empty() {
        return Err(ProcessInputError::Empty);
    }

    Ok(processes)
}

fn parse_field(token: &str, field: &'static str, line: usize) -> Result<i64, ProcessInputError> {
    token
        .parse::<i64>()
        .map_err(|_| ProcessInputError::InvalidToken {
            line,
            field,
            token: token.to_string(),
        })
}
