use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;
use thiserror::Error;

use crate::model::answers::random_answers;
use crate::model::student::StudentRecord;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid roster file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads a roster: a JSON array of student records.
pub fn load_roster(path: &Path) -> Result<Vec<StudentRecord>, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// One name per line; blanks dropped, whitespace trimmed, duplicates
/// removed keeping the first occurrence.
pub fn parse_name_list(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in text.lines() {
        let name = line.trim();
        if name.is_empty() || names.iter().any(|n| n == name) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}

/// Builds records for students known by name only, filling in randomized
/// answers so they can participate in grouping right away.
pub fn roster_from_names<R: Rng>(names: &[String], rng: &mut R) -> Vec<StudentRecord> {
    let now = Utc::now();
    names
        .iter()
        .map(|name| StudentRecord::new(name.clone(), random_answers(rng), now))
        .collect()
}

/// Loads a plain-text name list and synthesizes a roster from it.
pub fn load_names_roster<R: Rng>(path: &Path, rng: &mut R) -> Result<Vec<StudentRecord>, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(roster_from_names(&parse_name_list(&raw), rng))
}
