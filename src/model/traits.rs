use serde::Serialize;

/// Scored result of one student's answer set. Axes are net tallies
/// (opposing options cancel), flags latch true once a matching learning
/// style answer is seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraitVector {
    pub extrovert: i32,
    pub leader: i32,
    pub collaborative: i32,
    pub creative: i32,
    pub focused: i32,
    pub visual: bool,
    pub auditory: bool,
    pub reading: bool,
    pub kinesthetic: bool,
}

impl TraitVector {
    pub fn is_extrovert(&self) -> bool {
        self.extrovert > 0
    }

    pub fn is_leader(&self) -> bool {
        self.leader > 0
    }

    pub fn is_collaborative(&self) -> bool {
        self.collaborative > 0
    }

    pub fn is_focused(&self) -> bool {
        self.focused > 0
    }
}
