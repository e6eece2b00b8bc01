pub mod catalog;
pub mod cli;
pub mod config;
pub mod output;
pub mod scoring;
pub mod telemetry;

pub use catalog::{Catalog, EquipmentItem, EquipmentLoadout, SlotCategory};
pub use scoring::{
    compute_multiplier, compute_scores, explain_scores, resolve_attribute_total, Attribute,
    AttributeSet, AttributeValue, BuffSet, ScoreResult,
};
