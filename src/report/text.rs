use std::fmt::Write;

use crate::model::chart::SeatingChart;

/// Plain-text rendering of a seating chart for printing or pasting.
/// Group-projected charts list memberships; ungrouped charts render the
/// grid itself with placeholders for empty cells.
pub fn render_chart_text(chart: &SeatingChart) -> String {
    let mut out = String::new();

    out.push_str("CLASSROOM SEATING CHART\n\n");

    if chart.groups.is_empty() {
        for row in &chart.layout {
            let cells: Vec<&str> = row
                .iter()
                .map(|seat| seat.as_ref().map_or("[Empty]", |s| s.student_name.as_str()))
                .collect();
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
    } else {
        for group in &chart.groups {
            let _ = writeln!(out, "{}: {}", group.name, group.students.join(", "));
        }
    }

    out.push_str("\nRECOMMENDATIONS:\n");
    for recommendation in &chart.recommendations {
        out.push_str(recommendation);
        out.push('\n');
    }

    out.push_str("\nCONSIDERATIONS:\n");
    let _ = writeln!(
        out,
        "personality balance: {}",
        chart.considerations.personality_balance
    );
    let _ = writeln!(
        out,
        "learning style mix: {}",
        chart.considerations.learning_style_mix
    );
    let _ = writeln!(
        out,
        "collaboration opportunities: {}",
        chart.considerations.collaboration_opportunities
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::chart::{Considerations, Seat};
    use crate::model::group::{Group, TraitSummary};

    fn considerations() -> Considerations {
        Considerations {
            personality_balance: "balanced".to_string(),
            learning_style_mix: "mixed".to_string(),
            collaboration_opportunities: "plenty".to_string(),
        }
    }

    fn seat(name: &str) -> Option<Seat> {
        Some(Seat {
            student_name: name.to_string(),
            reasoning: String::new(),
        })
    }

    #[test]
    fn test_grouped_chart_lists_memberships() {
        let chart = SeatingChart {
            layout: vec![vec![seat("ana"), seat("ben")]],
            groups: vec![Group {
                id: "group-1".to_string(),
                name: "Group 1".to_string(),
                students: vec!["ana".to_string(), "ben".to_string()],
                traits: TraitSummary::default(),
            }],
            recommendations: vec!["rotate monthly".to_string()],
            considerations: considerations(),
        };

        let text = render_chart_text(&chart);
        assert!(text.starts_with("CLASSROOM SEATING CHART\n\n"));
        assert!(text.contains("Group 1: ana, ben\n"));
        assert!(text.contains("RECOMMENDATIONS:\nrotate monthly\n"));
        assert!(text.contains("personality balance: balanced\n"));
    }

    #[test]
    fn test_ungrouped_chart_renders_grid() {
        let chart = SeatingChart {
            layout: vec![vec![seat("ana"), None], vec![seat("ben"), None]],
            groups: Vec::new(),
            recommendations: Vec::new(),
            considerations: considerations(),
        };

        let text = render_chart_text(&chart);
        assert!(text.contains("ana\t[Empty]\n"));
        assert!(text.contains("ben\t[Empty]\n"));
    }
}
