use rand::Rng;

use crate::engine::AssignmentError;
use crate::model::group::{Group, TraitSummary};
use crate::model::student::ScoredStudent;
use crate::model::traits::TraitVector;

/// Pairwise compatibility between a pool candidate and one current group
/// member. Rewards mixing introverts with extroverts and spreading
/// leadership, clusters collaborative students, and keeps visual learners
/// together.
pub fn compatibility(candidate: &TraitVector, member: &TraitVector) -> i32 {
    let mut score = 0;
    if candidate.is_extrovert() != member.is_extrovert() {
        score += 2;
    }
    if candidate.is_leader() != member.is_leader() {
        score += 2;
    }
    if candidate.is_collaborative() && member.is_collaborative() {
        score += 3;
    }
    if candidate.visual == member.visual {
        score += 1;
    }
    score
}

/// Greedy nearest-fit partition of the roster into up to `group_count`
/// groups of at most `group_size` members. Each group starts from a
/// uniformly random seed member, then repeatedly admits the pool candidate
/// with the strictly highest summed compatibility against the members so
/// far; ties keep the first-encountered candidate. Runs once per call, no
/// iterative refinement.
pub fn partition<R: Rng>(
    roster: &[ScoredStudent],
    group_count: usize,
    group_size: usize,
    rng: &mut R,
) -> Result<Vec<Group>, AssignmentError> {
    if group_count == 0 || group_size == 0 {
        return Err(AssignmentError::InvalidDimensions {
            group_count,
            group_size,
        });
    }
    let capacity = group_count * group_size;
    if capacity < roster.len() {
        return Err(AssignmentError::Capacity {
            roster: roster.len(),
            group_count,
            group_size,
            capacity,
            min_group_count: roster.len().div_ceil(group_size),
            min_group_size: roster.len().div_ceil(group_count),
        });
    }
    if roster.is_empty() {
        return Err(AssignmentError::EmptyRoster);
    }

    let mut pool: Vec<&ScoredStudent> = roster.iter().collect();
    let mut groups = Vec::with_capacity(group_count);

    for g in 0..group_count {
        if pool.is_empty() {
            break;
        }
        let seed = pool.remove(rng.gen_range(0..pool.len()));
        let mut members = vec![seed];

        while members.len() < group_size && !pool.is_empty() {
            let best = best_candidate(&pool, &members);
            members.push(pool.remove(best));
        }

        groups.push(Group {
            id: format!("group-{}", g + 1),
            name: format!("Group {}", g + 1),
            students: members.iter().map(|s| s.name.clone()).collect(),
            traits: TraitSummary::from_vectors(members.iter().map(|s| &s.traits)),
        });
    }

    Ok(groups)
}

fn best_candidate(pool: &[&ScoredStudent], members: &[&ScoredStudent]) -> usize {
    let mut best_index = 0;
    let mut best_score = 0;
    for (index, candidate) in pool.iter().enumerate() {
        let score: i32 = members
            .iter()
            .map(|m| compatibility(&candidate.traits, &m.traits))
            .sum();
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }
    best_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn student(name: &str, extrovert: i32, leader: i32, collaborative: i32, visual: bool) -> ScoredStudent {
        ScoredStudent {
            name: name.to_string(),
            traits: TraitVector {
                extrovert,
                leader,
                collaborative,
                visual,
                ..TraitVector::default()
            },
        }
    }

    fn roster_of_six() -> Vec<ScoredStudent> {
        vec![
            student("a", 1, 0, 1, true),
            student("b", -1, 0, 1, false),
            student("c", 1, 1, 0, true),
            student("d", -1, -1, -1, false),
            student("e", 1, 0, 1, false),
            student("f", -1, 0, -1, true),
        ]
    }

    fn names(group: &Group) -> Vec<&str> {
        group.students.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_compatibility_mixes_extroverts() {
        let extro = student("x", 2, 0, 0, false).traits;
        let intro = student("y", -1, 0, 0, false).traits;
        // differing sign classes on extrovert, matching visual flags
        assert_eq!(compatibility(&extro, &intro), 3);
    }

    #[test]
    fn test_compatibility_spreads_leaders() {
        let lead = student("x", 0, 1, 0, true).traits;
        let support = student("y", 0, -2, 0, false).traits;
        assert_eq!(compatibility(&lead, &support), 2);
    }

    #[test]
    fn test_compatibility_clusters_collaborative() {
        let a = student("x", 0, 0, 2, false).traits;
        let b = student("y", 0, 0, 1, false).traits;
        // both collaborative (+3) and matching visual flags (+1)
        assert_eq!(compatibility(&a, &b), 4);
    }

    #[test]
    fn test_compatibility_zero_axes_share_sign_class() {
        let a = student("x", 0, 0, 0, false).traits;
        let b = student("y", -3, -3, -3, false).traits;
        // zero counts as non-positive, so nothing differs
        assert_eq!(compatibility(&a, &b), 1);
    }

    #[test]
    fn test_single_member_group_is_one_pairwise_score() {
        let candidate = student("x", 1, 1, 1, true);
        let member = student("y", -1, -1, 1, true);
        let group = [&member];
        let total: i32 = group
            .iter()
            .map(|m| compatibility(&candidate.traits, &m.traits))
            .sum();
        assert_eq!(total, compatibility(&candidate.traits, &member.traits));
    }

    #[test]
    fn test_best_candidate_tie_keeps_first() {
        let a = student("a", 0, 0, 0, false);
        let twin1 = student("t1", 0, 0, 0, false);
        let twin2 = student("t2", 0, 0, 0, false);
        let pool = [&twin1, &twin2];
        assert_eq!(best_candidate(&pool, &[&a]), 0);
    }

    #[test]
    fn test_best_candidate_strictly_higher_wins() {
        let anchor = student("a", 1, 0, 1, true);
        let weak = student("w", 1, 0, 0, false);
        let strong = student("s", -1, 0, 1, true);
        let pool = [&weak, &strong];
        assert_eq!(best_candidate(&pool, &[&anchor]), 1);
    }

    #[test]
    fn test_partition_exact_fit_assigns_everyone() {
        let roster = roster_of_six();
        let mut rng = StdRng::seed_from_u64(11);
        let groups = partition(&roster, 2, 3, &mut rng).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].students.len(), 3);
        assert_eq!(groups[1].students.len(), 3);

        let mut assigned: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.students.iter().map(String::as_str))
            .collect();
        assigned.sort_unstable();
        assert_eq!(assigned, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_partition_deterministic_fixture() {
        // Constant-zero RNG seeds every group with the first pool entry,
        // making the whole run hand-checkable.
        let roster = roster_of_six();
        let mut rng = StepRng::new(0, 0);
        let groups = partition(&roster, 2, 3, &mut rng).unwrap();

        assert_eq!(names(&groups[0]), vec!["a", "b", "e"]);
        assert_eq!(names(&groups[1]), vec!["c", "f", "d"]);

        assert_eq!(groups[0].id, "group-1");
        assert_eq!(groups[0].name, "Group 1");
        assert_eq!(groups[0].traits.extroverts, 2);
        assert_eq!(groups[0].traits.leaders, 0);
        assert_eq!(groups[0].traits.collaborative, 3);
        assert_eq!(groups[0].traits.visual_learners, 1);

        assert_eq!(groups[1].traits.extroverts, 1);
        assert_eq!(groups[1].traits.leaders, 1);
        assert_eq!(groups[1].traits.collaborative, 0);
        assert_eq!(groups[1].traits.visual_learners, 2);
    }

    #[test]
    fn test_partition_same_seed_same_groups() {
        let roster = roster_of_six();
        let a = partition(&roster, 3, 2, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = partition(&roster, 3, 2, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_partition_undersized_trailing_group() {
        let roster = roster_of_six()[..4].to_vec();
        let mut rng = StepRng::new(0, 0);
        let groups = partition(&roster, 2, 3, &mut rng).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].students.len(), 3);
        assert_eq!(groups[1].students.len(), 1);
    }

    #[test]
    fn test_partition_stops_when_pool_runs_out() {
        let roster = roster_of_six();
        let mut rng = StepRng::new(0, 0);
        let groups = partition(&roster, 5, 2, &mut rng).unwrap();
        // 6 students fill only 3 of the 5 requested groups
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.students.len() == 2));
    }

    #[test]
    fn test_partition_capacity_refusal() {
        let roster = roster_of_six()[..2].to_vec();
        let err = partition(&roster, 1, 1, &mut StepRng::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            AssignmentError::Capacity {
                roster: 2,
                group_count: 1,
                group_size: 1,
                capacity: 1,
                min_group_count: 2,
                min_group_size: 2,
            }
        );
    }

    #[test]
    fn test_partition_empty_roster_refusal() {
        let err = partition(&[], 2, 3, &mut StepRng::new(0, 0)).unwrap_err();
        assert_eq!(err, AssignmentError::EmptyRoster);
    }

    #[test]
    fn test_partition_zero_dimensions_refusal() {
        let roster = roster_of_six();
        let err = partition(&roster, 0, 3, &mut StepRng::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            AssignmentError::InvalidDimensions {
                group_count: 0,
                group_size: 3,
            }
        );
    }
}
