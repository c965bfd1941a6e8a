use crate::model::answers::AnswerSet;
use crate::model::student::{ScoredStudent, StudentRecord};
use crate::model::traits::TraitVector;

/// Tallies an answer set into a trait vector. Pure and total: unknown
/// question ids or off-vocabulary tokens contribute nothing, so partial
/// or malformed quizzes still score.
pub fn score(answers: &AnswerSet) -> TraitVector {
    let mut v = TraitVector::default();
    for (id, token) in answers {
        match (*id, token.as_str()) {
            (1, "extrovert") => v.extrovert += 1,
            (1, "introvert") => v.extrovert -= 1,
            (2 | 6, "leader") => v.leader += 1,
            (2 | 6, "supporter") => v.leader -= 1,
            (3, "collaborative") => v.collaborative += 1,
            (3, "independent") => v.collaborative -= 1,
            (4, "creative") => v.creative += 1,
            (4, "analytical") => v.creative -= 1,
            (5, "focused") => v.focused += 1,
            (5, "distracted") => v.focused -= 1,
            (7, "visual") => v.visual = true,
            (8, "auditory") => v.auditory = true,
            (9, "reading") => v.reading = true,
            (10, "kinesthetic") => v.kinesthetic = true,
            (11, "visual-kinesthetic") => {
                v.visual = true;
                v.kinesthetic = true;
            }
            (11, "auditory-reading") => {
                v.auditory = true;
                v.reading = true;
            }
            (12, "interactive") => {
                v.extrovert += 1;
                v.collaborative += 1;
            }
            (12, "quiet" | "independent-seating") => {
                v.extrovert -= 1;
                v.collaborative -= 1;
            }
            _ => {}
        }
    }
    v
}

/// Scores a whole roster. Every caller that needs vectors goes through
/// this one scorer.
pub fn score_roster(records: &[StudentRecord]) -> Vec<ScoredStudent> {
    records
        .iter()
        .map(|r| ScoredStudent {
            name: r.student_name.clone(),
            traits: score(&r.answers),
        })
        .collect()
}
