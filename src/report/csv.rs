use std::fmt::Write;

use crate::engine::score::score;
use crate::model::student::StudentRecord;

const HEADERS: [&str; 11] = [
    "Student Name",
    "Timestamp",
    "Extrovert Score",
    "Leader Score",
    "Collaborative Score",
    "Creative Score",
    "Focused Score",
    "Visual Learner",
    "Auditory Learner",
    "Reading/Writing Learner",
    "Kinesthetic Learner",
];

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// One scored row per student, comma separated. Names are expected to be
/// comma-free (roster identities, not free text).
pub fn render_students_csv(records: &[StudentRecord]) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(","));
    out.push('\n');

    for record in records {
        let v = score(&record.answers);
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{}",
            record.student_name,
            record.timestamp.format("%Y-%m-%d"),
            v.extrovert,
            v.leader,
            v.collaborative,
            v.creative,
            v.focused,
            yes_no(v.visual),
            yes_no(v.auditory),
            yes_no(v.reading),
            yes_no(v.kinesthetic),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::answers::AnswerSet;
    use chrono::TimeZone;

    #[test]
    fn test_csv_header_and_row() {
        let mut answers = AnswerSet::new();
        answers.insert(1, "extrovert".to_string());
        answers.insert(7, "visual".to_string());
        let record = StudentRecord::new(
            "Ana Lopez",
            answers,
            chrono::Utc.with_ymd_and_hms(2024, 9, 2, 8, 30, 0).unwrap(),
        );

        let csv = render_students_csv(&[record]);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Student Name,Timestamp,Extrovert Score,Leader Score,Collaborative Score,\
             Creative Score,Focused Score,Visual Learner,Auditory Learner,\
             Reading/Writing Learner,Kinesthetic Learner"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Ana Lopez,2024-09-02,1,0,0,0,0,Yes,No,No,No"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_empty_roster_is_header_only() {
        let csv = render_students_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }
}
