use std::collections::BTreeMap;

use rand::Rng;

/// Question id -> chosen option token. Ids run 1..=12; tokens outside each
/// question's vocabulary are ignored by the scorer, so a partially
/// completed quiz is a valid answer set.
pub type AnswerSet = BTreeMap<u32, String>;

pub const QUESTION_COUNT: u32 = 12;

/// Option pair drawn from per question when synthesizing answers for
/// students added by name only.
const RANDOM_OPTIONS: [(u32, &str, &str); 12] = [
    (1, "extrovert", "introvert"),
    (2, "leader", "supporter"),
    (3, "collaborative", "independent"),
    (4, "creative", "analytical"),
    (5, "focused", "distracted"),
    (6, "leader", "supporter"),
    (7, "visual", "auditory"),
    (8, "auditory", "visual"),
    (9, "reading", "kinesthetic"),
    (10, "kinesthetic", "reading"),
    (11, "visual-kinesthetic", "auditory-reading"),
    (12, "interactive", "quiet"),
];

/// Fair-coin answer fill for manually added students.
pub fn random_answers<R: Rng>(rng: &mut R) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for (id, heads, tails) in RANDOM_OPTIONS {
        let token = if rng.gen_bool(0.5) { heads } else { tails };
        answers.insert(id, token.to_string());
    }
    answers
}
