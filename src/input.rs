//! Process definition loading.
//!
//! # Format
//!
//! One process per line as `id,burst,arrival`:
//!
//! ```text
//! # id, burst, arrival
//! P1, 5, 0
//! P2, 3, 1
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. The parsed set is
//! sorted by arrival (ties keep file order) and validated before it is
//! returned, so the result can be passed straight to a scheduler.

use std::fs;
use std::path::Path;

use crate::models::{sort_by_arrival, Process};
use crate::validation::{validate_processes, ValidationError, ValidationErrorKind};

/// Parses process definitions from text.
///
/// # Errors
/// Every malformed line, plus any validation failure of the parsed set.
pub fn parse_processes(text: &str) -> Result<Vec<Process>, Vec<ValidationError>> {
    let mut processes = Vec::new();
    let mut errors = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Ok(p) => processes.push(p),
            Err(msg) => errors.push(ValidationError::new(
                ValidationErrorKind::Malformed,
                format!("line {}: {}", idx + 1, msg),
            )),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    sort_by_arrival(&mut processes);
    validate_processes(&processes)?;
    Ok(processes)
}

/// Reads and parses a process definition file.
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, Vec<ValidationError>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        vec![ValidationError::new(
            ValidationErrorKind::Malformed,
            format!("cannot read '{}': {e}", path.display()),
        )]
    })?;
    parse_processes(&text)
}

fn parse_line(line: &str) -> Result<Process, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [id, burst, arrival] = fields.as_slice() else {
        return Err(format!(
            "expected 3 fields 'id,burst,arrival', found {}",
            fields.len()
        ));
    };
    if id.is_empty() {
        return Err("empty process id".to_string());
    }
    let burst: i64 = burst
        .parse()
        .map_err(|_| format!("invalid burst '{burst}' for process '{id}'"))?;
    let arrival: i64 = arrival
        .parse()
        .map_err(|_| format!("invalid arrival '{arrival}' for process '{id}'"))?;
    Ok(Process::new(*id, burst, arrival))
}
