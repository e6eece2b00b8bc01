use std::fmt;

use super::engine::ScoreBreakdown;
use crate::catalog::{Catalog, EquipmentLoadout, ItemId, SlotCategory};

// 2^63; the largest f64 below it converts to i64 exactly.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Non-fatal loadout problem. The engine scores through these unchanged;
/// callers decide whether to surface them.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadoutIssue {
    /// Slot references an id that is not in the catalog (contributes 0)
    Unresolved { slot: SlotCategory, id: ItemId },
    /// Item exists but belongs to a different slot category
    WrongSlot {
        slot: SlotCategory,
        id: ItemId,
        name: String,
        category: SlotCategory,
    },
}

impl fmt::Display for LoadoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadoutIssue::Unresolved { slot, id } => {
                write!(f, "loadout.{}: item {} not found in catalog, counted as 0", slot, id)
            }
            LoadoutIssue::WrongSlot {
                slot,
                id,
                name,
                category,
            } => write!(
                f,
                "loadout.{}: item {} '{}' is a {} item",
                slot, id, name, category
            ),
        }
    }
}

/// List every non-fatal problem in a loadout, in slot order.
pub fn check_loadout(loadout: &EquipmentLoadout, catalog: &Catalog) -> Vec<LoadoutIssue> {
    loadout
        .selected()
        .filter_map(|(slot, id)| match catalog.find(id) {
            None => Some(LoadoutIssue::Unresolved { slot, id }),
            Some(item) if item.category != slot => Some(LoadoutIssue::WrongSlot {
                slot,
                id,
                name: item.name.clone(),
                category: item.category,
            }),
            Some(_) => None,
        })
        .collect()
}

fn fits_i64(raw: f64) -> bool {
    raw.is_finite() && raw.floor() >= -I64_LIMIT && raw.floor() < I64_LIMIT
}

/// Raw scores that cannot be represented as an integer score. Such scores
/// saturate (or become 0 for NaN), so the printed number is not the real one.
pub fn check_score_range(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut issues = Vec::new();
    if !fits_i64(breakdown.raw_attack) {
        issues.push(format!(
            "attack: raw score {} is out of range, shown as {}",
            breakdown.raw_attack, breakdown.result.attack
        ));
    }
    if !fits_i64(breakdown.raw_defense) {
        issues.push(format!(
            "defense: raw score {} is out of range, shown as {}",
            breakdown.raw_defense, breakdown.result.defense
        ));
    }
    issues
}
