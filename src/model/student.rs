use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::answers::AnswerSet;
use crate::model::traits::TraitVector;

/// One student's survey submission. Answers are replaced wholesale on a
/// retake; `ai_analysis` is an opaque annotation attached by an external
/// collaborator and is never inspected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub student_name: String,
    pub answers: AnswerSet,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<serde_json::Value>,
}

impl StudentRecord {
    pub fn new(student_name: impl Into<String>, answers: AnswerSet, timestamp: DateTime<Utc>) -> Self {
        Self {
            student_name: student_name.into(),
            answers,
            timestamp,
            ai_analysis: None,
        }
    }
}

/// Roster entry fed to the partitioner: identity plus the scored vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredStudent {
    pub name: String,
    pub traits: TraitVector,
}
