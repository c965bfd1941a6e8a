pub mod csv;
pub mod text;

use serde::Serialize;

use crate::model::archetype::archetype;
use crate::model::student::ScoredStudent;

/// Class-wide trait distribution for the analytics view. Axis pairs are
/// complementary: every student lands on exactly one side of each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassProfile {
    pub total_students: usize,
    pub extroverts: usize,
    pub introverts: usize,
    pub leaders: usize,
    pub supporters: usize,
    pub collaborative: usize,
    pub independent: usize,
    pub visual_learners: usize,
    pub auditory_learners: usize,
    pub reading_learners: usize,
    pub kinesthetic_learners: usize,
}

pub fn class_profile(roster: &[ScoredStudent]) -> ClassProfile {
    let mut profile = ClassProfile {
        total_students: roster.len(),
        ..ClassProfile::default()
    };
    for student in roster {
        let v = &student.traits;
        if v.is_extrovert() {
            profile.extroverts += 1;
        } else {
            profile.introverts += 1;
        }
        if v.is_leader() {
            profile.leaders += 1;
        } else {
            profile.supporters += 1;
        }
        if v.is_collaborative() {
            profile.collaborative += 1;
        } else {
            profile.independent += 1;
        }
        if v.visual {
            profile.visual_learners += 1;
        }
        if v.auditory {
            profile.auditory_learners += 1;
        }
        if v.reading {
            profile.reading_learners += 1;
        }
        if v.kinesthetic {
            profile.kinesthetic_learners += 1;
        }
    }
    profile
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStyles {
    pub visual: bool,
    pub auditory: bool,
    pub reading: bool,
    pub kinesthetic: bool,
}

/// Per-student projection for export: archetype plus the side of each
/// trait pair the student falls on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub archetype: String,
    pub extroversion: &'static str,
    pub leadership: &'static str,
    pub collaboration: &'static str,
    pub focus: &'static str,
    pub learning_styles: LearningStyles,
}

pub fn student_profiles(roster: &[ScoredStudent]) -> Vec<StudentProfile> {
    roster
        .iter()
        .map(|student| {
            let v = &student.traits;
            StudentProfile {
                name: student.name.clone(),
                archetype: archetype(v).label().to_string(),
                extroversion: if v.is_extrovert() { "extrovert" } else { "introvert" },
                leadership: if v.is_leader() { "leader" } else { "supporter" },
                collaboration: if v.is_collaborative() {
                    "collaborative"
                } else {
                    "independent"
                },
                focus: if v.is_focused() { "focused" } else { "distractible" },
                learning_styles: LearningStyles {
                    visual: v.visual,
                    auditory: v.auditory,
                    reading: v.reading,
                    kinesthetic: v.kinesthetic,
                },
            }
        })
        .collect()
}
