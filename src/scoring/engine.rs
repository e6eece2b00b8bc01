use super::attributes::{Attribute, AttributeSet, AttributeValue};
use super::buffs::{compute_multiplier, BuffSet};
use crate::catalog::{Catalog, EquipmentLoadout, ItemId, SlotCategory};

/// The two derived focus scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub attack: i64,
    pub defense: i64,
}

/// Resolved per-attribute totals (character + equipment).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttributeTotals {
    pub kick: f64,
    pub control: f64,
    pub technique: f64,
    pub agility: f64,
    pub intelligence: f64,
}

impl AttributeTotals {
    pub fn resolve(
        attributes: &AttributeSet,
        loadout: &EquipmentLoadout,
        catalog: &Catalog,
    ) -> Self {
        let total = |a: Attribute| resolve_attribute_total(a, attributes.get(a), loadout, catalog);
        Self {
            kick: total(Attribute::Kick),
            control: total(Attribute::Control),
            technique: total(Attribute::Technique),
            agility: total(Attribute::Agility),
            intelligence: total(Attribute::Intelligence),
        }
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Kick => self.kick,
            Attribute::Control => self.control,
            Attribute::Technique => self.technique,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
        }
    }

    /// Pre-multiplier attack: half kick + control + technique.
    pub fn attack_subtotal(&self) -> f64 {
        (self.kick / 2.0) + self.control + self.technique
    }

    /// Pre-multiplier defense: half agility + intelligence + technique.
    pub fn defense_subtotal(&self) -> f64 {
        (self.agility / 2.0) + self.intelligence + self.technique
    }
}

/// One equipped item's bonus to a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentContribution {
    pub slot: SlotCategory,
    pub item_id: ItemId,
    pub item_name: String,
    pub bonus: f64,
}

/// Where one attribute total came from.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeBreakdown {
    pub attribute: Attribute,
    pub character: AttributeValue,
    pub equipment: Vec<EquipmentContribution>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub attributes: Vec<AttributeBreakdown>,
    pub totals: AttributeTotals,
    pub multiplier: f64,
    pub raw_attack: f64,
    pub raw_defense: f64,
    pub result: ScoreResult,
}

/// Total for one attribute: base + board + supplement, plus that attribute's
/// bonus from every selected item that resolves in the catalog.
///
/// Loadout ids with no catalog entry contribute 0.
pub fn resolve_attribute_total(
    attribute: Attribute,
    value: &AttributeValue,
    loadout: &EquipmentLoadout,
    catalog: &Catalog,
) -> f64 {
    let mut total = value.sum();
    for (_, id) in loadout.selected() {
        if let Some(item) = catalog.find(id) {
            total += item.bonus(attribute);
        }
    }
    total
}

pub fn compute_scores(
    attributes: &AttributeSet,
    loadout: &EquipmentLoadout,
    catalog: &Catalog,
    buffs: &BuffSet,
) -> ScoreResult {
    let totals = AttributeTotals::resolve(attributes, loadout, catalog);
    let multiplier = compute_multiplier(buffs);
    let (attack, defense) = scale(&totals, multiplier);
    ScoreResult {
        attack: floor_score(attack),
        defense: floor_score(defense),
    }
}

/// Same computation as `compute_scores`, reporting every contribution.
pub fn explain_scores(
    attributes: &AttributeSet,
    loadout: &EquipmentLoadout,
    catalog: &Catalog,
    buffs: &BuffSet,
) -> ScoreBreakdown {
    let per_attribute = Attribute::ALL
        .iter()
        .map(|&attribute| {
            let character = *attributes.get(attribute);
            let equipment = loadout
                .selected()
                .filter_map(|(slot, id)| catalog.find(id).map(|item| (slot, item)))
                .map(|(slot, item)| EquipmentContribution {
                    slot,
                    item_id: item.id,
                    item_name: item.name.clone(),
                    bonus: item.bonus(attribute),
                })
                .collect();
            AttributeBreakdown {
                attribute,
                character,
                equipment,
                total: resolve_attribute_total(attribute, &character, loadout, catalog),
            }
        })
        .collect();

    let totals = AttributeTotals::resolve(attributes, loadout, catalog);
    let multiplier = compute_multiplier(buffs);
    let (raw_attack, raw_defense) = scale(&totals, multiplier);

    ScoreBreakdown {
        attributes: per_attribute,
        totals,
        multiplier,
        raw_attack,
        raw_defense,
        result: ScoreResult {
            attack: floor_score(raw_attack),
            defense: floor_score(raw_defense),
        },
    }
}

// Multiply first; flooring happens exactly once afterwards.
fn scale(totals: &AttributeTotals, multiplier: f64) -> (f64, f64) {
    (
        totals.attack_subtotal() * multiplier,
        totals.defense_subtotal() * multiplier,
    )
}

/// `as` saturates: values beyond the i64 range clamp to `i64::MIN`/`i64::MAX`
/// and NaN becomes 0. `check_score_range` reports such builds.
fn floor_score(raw: f64) -> i64 {
    raw.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EquipmentItem;

    fn stat(base: f64) -> AttributeValue {
        AttributeValue::new(base, 0.0, 0.0)
    }

    fn empty() -> (AttributeSet, EquipmentLoadout, Catalog, BuffSet) {
        (
            AttributeSet::default(),
            EquipmentLoadout::default(),
            Catalog::default(),
            BuffSet::default(),
        )
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            EquipmentItem::new(1, "Lightning Boots", SlotCategory::Shoes)
                .with_bonus(Attribute::Kick, 12.0)
                .with_bonus(Attribute::Technique, 10.0),
            EquipmentItem::new(2, "Red Band", SlotCategory::Wristband)
                .with_bonus(Attribute::Technique, 10.0),
            EquipmentItem::new(3, "Wise Charm", SlotCategory::Pendant)
                .with_bonus(Attribute::Intelligence, 8.0)
                .with_bonus(Attribute::Agility, 4.0),
            EquipmentItem::new(4, "Captain Gloves", SlotCategory::Special)
                .with_bonus(Attribute::Control, 6.0),
        ])
    }

    #[test]
    fn test_zero_input_zero_output() {
        let (attributes, loadout, catalog, buffs) = empty();
        let result = compute_scores(&attributes, &loadout, &catalog, &buffs);
        assert_eq!(result, ScoreResult { attack: 0, defense: 0 });
    }

    #[test]
    fn test_buff_compounding() {
        let (_, loadout, catalog, _) = empty();
        let attributes = AttributeSet::default().with(Attribute::Control, stat(100.0));
        let buffs = BuffSet::new(10.0, 10.0);

        let result = compute_scores(&attributes, &loadout, &catalog, &buffs);
        // 100 * 1.1 * 1.1 = 121
        assert_eq!(result.attack, 121);
    }

    #[test]
    fn test_kick_half_weighting() {
        let (_, loadout, catalog, buffs) = empty();
        let attributes = AttributeSet::default().with(Attribute::Kick, stat(100.0));

        let result = compute_scores(&attributes, &loadout, &catalog, &buffs);
        assert_eq!(result.attack, 50);
        assert_eq!(result.defense, 0);
    }

    #[test]
    fn test_agility_half_weighting() {
        let (_, loadout, catalog, buffs) = empty();
        let attributes = AttributeSet::default()
            .with(Attribute::Agility, stat(81.0))
            .with(Attribute::Intelligence, stat(20.0));

        let result = compute_scores(&attributes, &loadout, &catalog, &buffs);
        // 40.5 + 20 = 60.5 -> 60
        assert_eq!(result.defense, 60);
        assert_eq!(result.attack, 0);
    }

    #[test]
    fn test_unresolved_equipment_ignored() {
        let catalog = sample_catalog();
        let attributes = AttributeSet::default().with(Attribute::Technique, stat(30.0));
        let buffs = BuffSet::new(5.0, 0.0);

        let with_missing = EquipmentLoadout::default()
            .with(SlotCategory::Shoes, 1)
            .with(SlotCategory::Pendant, 404);
        let without = EquipmentLoadout::default().with(SlotCategory::Shoes, 1);

        assert_eq!(
            compute_scores(&attributes, &with_missing, &catalog, &buffs),
            compute_scores(&attributes, &without, &catalog, &buffs)
        );
    }

    #[test]
    fn test_floor_after_multiply() {
        let (_, loadout, catalog, _) = empty();
        let attributes = AttributeSet::default().with(Attribute::Kick, stat(1.0));
        let buffs = BuffSet::new(100.0, 0.0);

        let result = compute_scores(&attributes, &loadout, &catalog, &buffs);
        // floor(0.5 * 2.0) = 1, not floor(0.5) * 2 = 0
        assert_eq!(result.attack, 1);
    }

    #[test]
    fn test_idempotent() {
        let catalog = sample_catalog();
        let attributes = AttributeSet::default()
            .with(Attribute::Kick, AttributeValue::new(133.0, 12.0, 3.0))
            .with(Attribute::Control, AttributeValue::new(97.0, 5.0, 0.0))
            .with(Attribute::Technique, AttributeValue::new(101.0, 0.0, 7.0));
        let loadout = EquipmentLoadout::default()
            .with(SlotCategory::Shoes, 1)
            .with(SlotCategory::Wristband, 2);
        let buffs = BuffSet::new(15.0, 20.0);

        let first = compute_scores(&attributes, &loadout, &catalog, &buffs);
        let second = compute_scores(&attributes, &loadout, &catalog, &buffs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_equipment_aggregation() {
        let catalog = Catalog::new(vec![
            EquipmentItem::new(10, "Boots", SlotCategory::Shoes)
                .with_bonus(Attribute::Technique, 10.0),
            EquipmentItem::new(20, "Band", SlotCategory::Wristband)
                .with_bonus(Attribute::Technique, 10.0),
        ]);
        let attributes = AttributeSet::default();
        let loadout = EquipmentLoadout::default()
            .with(SlotCategory::Shoes, 10)
            .with(SlotCategory::Wristband, 20);

        let technique = resolve_attribute_total(
            Attribute::Technique,
            attributes.get(Attribute::Technique),
            &loadout,
            &catalog,
        );
        assert_eq!(technique, 20.0);

        let result = compute_scores(&attributes, &loadout, &catalog, &BuffSet::default());
        assert_eq!(result, ScoreResult { attack: 20, defense: 20 });
    }

    #[test]
    fn test_resolve_sums_all_character_sources() {
        let (_, loadout, catalog, _) = empty();
        let value = AttributeValue::new(120.0, 10.0, 5.0);
        let total = resolve_attribute_total(Attribute::Kick, &value, &loadout, &catalog);
        assert_eq!(total, 135.0);
    }

    #[test]
    fn test_minus_hundred_buff_zeroes_scores() {
        let (_, loadout, catalog, _) = empty();
        let attributes = AttributeSet::default()
            .with(Attribute::Control, stat(200.0))
            .with(Attribute::Intelligence, stat(150.0));
        let buffs = BuffSet::new(-100.0, 50.0);

        let result = compute_scores(&attributes, &loadout, &catalog, &buffs);
        assert_eq!(result, ScoreResult { attack: 0, defense: 0 });
    }

    #[test]
    fn test_negative_scores_not_clamped() {
        let (_, loadout, catalog, buffs) = empty();
        let attributes = AttributeSet::default()
            .with(Attribute::Control, stat(-10.0))
            .with(Attribute::Kick, stat(-1.0));

        let result = compute_scores(&attributes, &loadout, &catalog, &buffs);
        // -0.5 - 10 = -10.5 -> floor = -11
        assert_eq!(result.attack, -11);
    }

    #[test]
    fn test_full_build() {
        let catalog = sample_catalog();
        let attributes = AttributeSet::default()
            .with(Attribute::Kick, AttributeValue::new(120.0, 10.0, 4.0))
            .with(Attribute::Control, AttributeValue::new(90.0, 0.0, 0.0))
            .with(Attribute::Technique, AttributeValue::new(80.0, 5.0, 0.0))
            .with(Attribute::Agility, AttributeValue::new(70.0, 0.0, 0.0))
            .with(Attribute::Intelligence, AttributeValue::new(60.0, 0.0, 2.0));
        let loadout = EquipmentLoadout::default()
            .with(SlotCategory::Shoes, 1)
            .with(SlotCategory::Wristband, 2)
            .with(SlotCategory::Pendant, 3)
            .with(SlotCategory::Special, 4);
        let buffs = BuffSet::new(20.0, 0.0);

        // kick 146, control 96, technique 105, agility 74, intelligence 70
        // attack = (73 + 96 + 105) * 1.2 = 328.8 -> 328
        // defense = (37 + 70 + 105) * 1.2 = 254.4 -> 254
        let result = compute_scores(&attributes, &loadout, &catalog, &buffs);
        assert_eq!(result, ScoreResult { attack: 328, defense: 254 });
    }

    #[test]
    fn test_explain_agrees_with_compute() {
        let catalog = sample_catalog();
        let attributes = AttributeSet::default()
            .with(Attribute::Kick, AttributeValue::new(111.0, 3.0, 0.0))
            .with(Attribute::Technique, AttributeValue::new(77.0, 0.0, 1.0))
            .with(Attribute::Agility, AttributeValue::new(63.0, 0.0, 0.0));
        let loadout = EquipmentLoadout::default()
            .with(SlotCategory::Shoes, 1)
            .with(SlotCategory::Special, 999);
        let buffs = BuffSet::new(12.0, 7.0);

        let breakdown = explain_scores(&attributes, &loadout, &catalog, &buffs);
        let result = compute_scores(&attributes, &loadout, &catalog, &buffs);
        assert_eq!(breakdown.result, result);
        assert_eq!(breakdown.multiplier, compute_multiplier(&buffs));
        assert_eq!(
            breakdown.totals,
            AttributeTotals::resolve(&attributes, &loadout, &catalog)
        );
    }

    #[test]
    fn test_explain_lists_resolved_equipment_only() {
        let catalog = sample_catalog();
        let attributes = AttributeSet::default().with(Attribute::Kick, stat(100.0));
        let loadout = EquipmentLoadout::default()
            .with(SlotCategory::Shoes, 1)
            .with(SlotCategory::Pendant, 404);

        let breakdown = explain_scores(&attributes, &loadout, &catalog, &BuffSet::default());
        assert_eq!(breakdown.attributes.len(), 5);

        let kick = &breakdown.attributes[0];
        assert_eq!(kick.attribute, Attribute::Kick);
        assert_eq!(kick.equipment.len(), 1);
        assert_eq!(kick.equipment[0].item_name, "Lightning Boots");
        assert_eq!(kick.equipment[0].bonus, 12.0);
        assert_eq!(kick.total, 112.0);
        assert_eq!(breakdown.raw_attack, 56.0 + 10.0);
    }

    #[test]
    fn test_out_of_range_score_saturates() {
        let (_, loadout, catalog, _) = empty();
        let attributes = AttributeSet::default().with(Attribute::Control, stat(1e300));
        let buffs = BuffSet::new(1e300, 0.0);

        let result = compute_scores(&attributes, &loadout, &catalog, &buffs);
        assert_eq!(result.attack, i64::MAX);
        assert_eq!(result.defense, 0);
    }
}
