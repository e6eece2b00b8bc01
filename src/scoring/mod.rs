pub mod attributes;
pub mod buffs;
pub mod engine;
pub mod validation;

pub use attributes::{Attribute, AttributeSet, AttributeValue};
pub use buffs::{compute_multiplier, BuffSet};
pub use engine::{
    compute_scores, explain_scores, resolve_attribute_total, AttributeBreakdown, AttributeTotals,
    EquipmentContribution, ScoreBreakdown, ScoreResult,
};
pub use validation::{check_loadout, check_score_range, LoadoutIssue};
