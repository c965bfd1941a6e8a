use crate::model::traits::TraitVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    NaturalLeader,
    CreativeCollaborator,
    ThoughtfulSolver,
    TeamPlayer,
    InnovativeThinker,
    BalancedLearner,
}

impl Archetype {
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::NaturalLeader => "Natural Leader",
            Archetype::CreativeCollaborator => "Creative Collaborator",
            Archetype::ThoughtfulSolver => "Thoughtful Solver",
            Archetype::TeamPlayer => "Team Player",
            Archetype::InnovativeThinker => "Innovative Thinker",
            Archetype::BalancedLearner => "Balanced Learner",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolves a vector to its archetype. Rule order is fixed; earlier rules
/// win even when a later rule also matches.
pub fn archetype(v: &TraitVector) -> Archetype {
    if v.leader > 0 && v.extrovert > 0 {
        return Archetype::NaturalLeader;
    }
    if v.creative > 0 && v.collaborative > 0 {
        return Archetype::CreativeCollaborator;
    }
    if v.focused > 0 && v.extrovert < 0 {
        return Archetype::ThoughtfulSolver;
    }
    if v.collaborative > 0 && v.extrovert > 0 {
        return Archetype::TeamPlayer;
    }
    if v.focused > 0 && v.creative > 0 {
        return Archetype::InnovativeThinker;
    }
    Archetype::BalancedLearner
}
