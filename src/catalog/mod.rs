pub mod ingest;
pub mod loadout;
pub mod types;

pub use ingest::{ingest, load_catalog, read_raw_catalog};
pub use loadout::EquipmentLoadout;
pub use types::{Catalog, EquipmentItem, ItemId, RawEquipment, SlotCategory};
