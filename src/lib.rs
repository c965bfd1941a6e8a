//! Deterministic trait scoring and balanced group/seating assignment for
//! classroom rosters.

pub mod engine;
pub mod input;
pub mod model;
pub mod report;
pub mod store;

pub use engine::AssignmentError;
pub use engine::partition::partition;
pub use engine::score::{score, score_roster};
pub use engine::seating::{grouped_chart, random_chart};
pub use model::answers::AnswerSet;
pub use model::archetype::{Archetype, archetype};
pub use model::chart::SeatingChart;
pub use model::group::{Group, TraitSummary};
pub use model::student::{ScoredStudent, StudentRecord};
pub use model::traits::TraitVector;
