use serde::{Deserialize, Serialize};

use crate::model::group::Group;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub student_name: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Considerations {
    pub personality_balance: String,
    pub learning_style_mix: String,
    pub collaboration_opportunities: String,
}

/// A classroom arrangement. `layout` rows hold occupied seats and explicit
/// empty cells; `groups` is populated only for group-projected charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingChart {
    pub layout: Vec<Vec<Option<Seat>>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
    pub recommendations: Vec<String>,
    pub considerations: Considerations,
}

impl SeatingChart {
    /// Names of every seated student, row-major.
    pub fn seated_students(&self) -> Vec<&str> {
        self.layout
            .iter()
            .flatten()
            .filter_map(|seat| seat.as_ref().map(|s| s.student_name.as_str()))
            .collect()
    }
}
