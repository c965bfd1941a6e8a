use serde::{Deserialize, Serialize};

use crate::model::student::ScoredStudent;
use crate::model::traits::TraitVector;

/// Per-group head counts over the members present when the group was
/// created. This is a snapshot: removing a member later leaves it
/// untouched until the caller asks for a recompute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitSummary {
    pub extroverts: usize,
    pub leaders: usize,
    pub collaborative: usize,
    pub visual_learners: usize,
}

impl TraitSummary {
    pub fn from_vectors<'a>(vectors: impl Iterator<Item = &'a TraitVector>) -> Self {
        let mut summary = TraitSummary::default();
        for v in vectors {
            if v.is_extrovert() {
                summary.extroverts += 1;
            }
            if v.is_leader() {
                summary.leaders += 1;
            }
            if v.is_collaborative() {
                summary.collaborative += 1;
            }
            if v.visual {
                summary.visual_learners += 1;
            }
        }
        summary
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub students: Vec<String>,
    pub traits: TraitSummary,
}

impl Group {
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Drops the member from the list. The trait summary keeps its
    /// creation-time counts.
    pub fn remove_member(&mut self, student_name: &str) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s != student_name);
        self.students.len() != before
    }

    /// Explicit opt-in refresh of the summary from current members.
    /// Members missing from the roster contribute nothing.
    pub fn recompute_summary(&mut self, roster: &[ScoredStudent]) {
        self.traits = TraitSummary::from_vectors(
            self.students
                .iter()
                .filter_map(|name| roster.iter().find(|s| &s.name == name))
                .map(|s| &s.traits),
        );
    }
}
