use serde::{Deserialize, Serialize};

use super::types::{ItemId, SlotCategory};

/// Selected item id per equipment slot. Any slot may be empty.
///
/// Example YAML:
/// ```yaml
/// loadout: { shoes: 3, wristband: 7 }
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EquipmentLoadout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoes: Option<ItemId>,
    #[serde(alias = "misanga", skip_serializing_if = "Option::is_none")]
    pub wristband: Option<ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pendant: Option<ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<ItemId>,
}

impl EquipmentLoadout {
    pub fn get(&self, slot: SlotCategory) -> Option<ItemId> {
        match slot {
            SlotCategory::Shoes => self.shoes,
            SlotCategory::Wristband => self.wristband,
            SlotCategory::Pendant => self.pendant,
            SlotCategory::Special => self.special,
        }
    }

    pub fn set(&mut self, slot: SlotCategory, id: Option<ItemId>) {
        match slot {
            SlotCategory::Shoes => self.shoes = id,
            SlotCategory::Wristband => self.wristband = id,
            SlotCategory::Pendant => self.pendant = id,
            SlotCategory::Special => self.special = id,
        }
    }

    pub fn with(mut self, slot: SlotCategory, id: ItemId) -> Self {
        self.set(slot, Some(id));
        self
    }

    /// Non-empty slots in slot order (shoes, wristband, pendant, special).
    pub fn selected(&self) -> impl Iterator<Item = (SlotCategory, ItemId)> + '_ {
        SlotCategory::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|id| (slot, id)))
    }

    pub fn is_empty(&self) -> bool {
        self.selected().next().is_none()
    }
}
