use rand::Rng;
use rand::seq::SliceRandom;

use crate::engine::AssignmentError;
use crate::engine::partition::partition;
use crate::model::chart::{Considerations, Seat, SeatingChart};
use crate::model::student::ScoredStudent;

/// Partitions the roster, then projects the groups onto a near-square
/// grid: ceil(sqrt(group_count)) columns, each group's members seated
/// contiguously in one row segment, missing group slots left empty.
pub fn grouped_chart<R: Rng>(
    roster: &[ScoredStudent],
    group_count: usize,
    group_size: usize,
    rng: &mut R,
) -> Result<SeatingChart, AssignmentError> {
    let groups = partition(roster, group_count, group_size, rng)?;

    let cols = (group_count as f64).sqrt().ceil() as usize;
    let rows = group_count.div_ceil(cols);

    let mut layout = Vec::with_capacity(rows);
    for r in 0..rows {
        let mut row = Vec::new();
        for c in 0..cols {
            let slot = r * cols + c;
            match groups.get(slot) {
                Some(group) => {
                    for name in &group.students {
                        row.push(Some(Seat {
                            student_name: name.clone(),
                            reasoning: format!(
                                "Group {}: compatible personality traits and learning styles",
                                slot + 1
                            ),
                        }));
                    }
                }
                None => row.push(None),
            }
        }
        layout.push(row);
    }

    let collaborative_groups = groups.iter().filter(|g| g.traits.collaborative > 0).count();
    let recommendations = vec![
        format!("Created {group_count} groups with {group_size} students each"),
        "Mixed personality types for balanced group dynamics".to_string(),
        "Paired compatible learning styles within groups".to_string(),
        "Leaders distributed across different groups".to_string(),
        "Collaborative students grouped together when possible".to_string(),
    ];
    let considerations = Considerations {
        personality_balance: "Groups balanced with mix of introverts/extroverts and leaders/supporters"
            .to_string(),
        learning_style_mix: "Visual, auditory, and kinesthetic learners distributed for peer learning"
            .to_string(),
        collaboration_opportunities: format!(
            "{collaborative_groups} groups have strong collaborative potential"
        ),
    };

    Ok(SeatingChart {
        layout,
        groups,
        recommendations,
        considerations,
    })
}

/// Layout without group semantics: shuffles the roster and fills a
/// rows x cols grid row-major, remaining cells empty. Refuses overfull
/// grids rather than dropping students.
pub fn random_chart<R: Rng>(
    roster: &[ScoredStudent],
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<SeatingChart, AssignmentError> {
    let capacity = rows * cols;
    if capacity < roster.len() {
        return Err(AssignmentError::GridCapacity {
            roster: roster.len(),
            rows,
            cols,
            capacity,
        });
    }
    if roster.is_empty() {
        return Err(AssignmentError::EmptyRoster);
    }

    let mut shuffled: Vec<&ScoredStudent> = roster.iter().collect();
    shuffled.shuffle(rng);

    let mut seats = shuffled.iter().map(|student| Seat {
        student_name: student.name.clone(),
        reasoning: format!(
            "Positioned to optimize {} and support {} work style",
            if student.traits.is_extrovert() {
                "social interaction"
            } else {
                "focused learning"
            },
            if student.traits.is_collaborative() {
                "collaborative"
            } else {
                "independent"
            },
        ),
    });

    let layout = (0..rows)
        .map(|_| (0..cols).map(|_| seats.next()).collect())
        .collect();

    Ok(SeatingChart {
        layout,
        groups: Vec::new(),
        recommendations: vec![
            "Monitor student interactions and adjust as needed".to_string(),
            "Consider rotating seating monthly for variety".to_string(),
            "Use this arrangement for group activities".to_string(),
            "Place visual aids where all students can see clearly".to_string(),
        ],
        considerations: Considerations {
            personality_balance:
                "Extroverts and introverts are distributed to create balanced energy levels throughout the classroom"
                    .to_string(),
            learning_style_mix:
                "Visual, auditory, and kinesthetic learners are mixed to encourage peer learning and diverse perspectives"
                    .to_string(),
            collaboration_opportunities:
                "Collaborative students are positioned to facilitate group work while independent learners have space to focus"
                    .to_string(),
        },
    })
}
