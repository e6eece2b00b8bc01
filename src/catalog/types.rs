use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::scoring::Attribute;

pub type ItemId = u64;

/// Equipment slot. Shared by catalog items and loadouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotCategory {
    Shoes,
    Wristband,
    Pendant,
    Special,
}

impl SlotCategory {
    pub const ALL: [SlotCategory; 4] = [
        SlotCategory::Shoes,
        SlotCategory::Wristband,
        SlotCategory::Pendant,
        SlotCategory::Special,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SlotCategory::Shoes => "shoes",
            SlotCategory::Wristband => "wristband",
            SlotCategory::Pendant => "pendant",
            SlotCategory::Special => "special",
        }
    }

    /// Parse a category label from a catalog record.
    ///
    /// Accepts the English slot names (any case), `misanga` for wristbands,
    /// and the Japanese labels used by the equipment data store.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s {
            "シューズ" => return Ok(SlotCategory::Shoes),
            "ミサンガ" => return Ok(SlotCategory::Wristband),
            "ペンダント" => return Ok(SlotCategory::Pendant),
            "スペシャル" => return Ok(SlotCategory::Special),
            _ => {}
        }
        match s.to_ascii_lowercase().as_str() {
            "shoes" => Ok(SlotCategory::Shoes),
            "wristband" | "misanga" => Ok(SlotCategory::Wristband),
            "pendant" => Ok(SlotCategory::Pendant),
            "special" => Ok(SlotCategory::Special),
            _ => bail!(
                "unknown equipment category '{}' (expected shoes, wristband, pendant or special)",
                s
            ),
        }
    }
}

impl FromStr for SlotCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        SlotCategory::parse(s)
    }
}

impl fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog row as exported by the equipment data store.
///
/// Bonus columns may be missing or null; both mean 0.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RawEquipment {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kick: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<f64>,
}

/// A validated equipment item with flat attribute bonuses.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentItem {
    pub id: ItemId,
    pub name: String,
    pub category: SlotCategory,
    pub kick: f64,
    pub control: f64,
    pub technique: f64,
    pub agility: f64,
    pub intelligence: f64,
}

impl EquipmentItem {
    /// An item with no bonuses; set fields directly afterwards.
    pub fn new(id: ItemId, name: impl Into<String>, category: SlotCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            kick: 0.0,
            control: 0.0,
            technique: 0.0,
            agility: 0.0,
            intelligence: 0.0,
        }
    }

    pub fn with_bonus(mut self, attribute: Attribute, value: f64) -> Self {
        match attribute {
            Attribute::Kick => self.kick = value,
            Attribute::Control => self.control = value,
            Attribute::Technique => self.technique = value,
            Attribute::Agility => self.agility = value,
            Attribute::Intelligence => self.intelligence = value,
        }
        self
    }

    pub fn bonus(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Kick => self.kick,
            Attribute::Control => self.control,
            Attribute::Technique => self.technique,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
        }
    }
}

impl From<&EquipmentItem> for RawEquipment {
    fn from(item: &EquipmentItem) -> Self {
        let column = |v: f64| if v == 0.0 { None } else { Some(v) };
        RawEquipment {
            id: item.id,
            name: item.name.clone(),
            category: item.category.name().to_string(),
            kick: column(item.kick),
            control: column(item.control),
            technique: column(item.technique),
            agility: column(item.agility),
            intelligence: column(item.intelligence),
        }
    }
}

/// In-memory equipment catalog. Lookups are linear searches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<EquipmentItem>,
}

impl Catalog {
    pub fn new(items: Vec<EquipmentItem>) -> Self {
        Self { items }
    }

    pub fn find(&self, id: ItemId) -> Option<&EquipmentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items of one slot category, in catalog order.
    pub fn in_slot(&self, slot: SlotCategory) -> impl Iterator<Item = &EquipmentItem> {
        self.items.iter().filter(move |item| item.category == slot)
    }

    pub fn items(&self) -> &[EquipmentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
