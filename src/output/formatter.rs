use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::catalog::{Catalog, EquipmentItem, SlotCategory};
use crate::scoring::{Attribute, ScoreBreakdown, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a stat value without a trailing ".0" for whole numbers
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.0}", value)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Format a multiplier as "x1.21"
pub fn format_multiplier(multiplier: f64) -> String {
    let s = format!("{:.4}", multiplier);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    format!("x{}", trimmed)
}

/// One line per build: "{name}  AT {attack}  DF {defense}"
pub fn format_result(name: &str, result: &ScoreResult, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{}  {} {}  {} {}",
            name.bold(),
            "AT".dimmed(),
            result.attack.red().bold(),
            "DF".dimmed(),
            result.defense.blue().bold()
        )
    } else {
        format!(
            "{}  AT {}  DF {}",
            name, result.attack, result.defense
        )
    }
}

/// Detailed multi-line breakdown (for `calc --explain`)
pub fn format_breakdown(name: &str, breakdown: &ScoreBreakdown, use_colors: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format_result(name, &breakdown.result, use_colors));

    for entry in &breakdown.attributes {
        let c = &entry.character;
        let mut parts = vec![format!(
            "{} + {} + {}",
            format_number(c.base),
            format_number(c.board),
            format_number(c.supplement)
        )];
        for equip in &entry.equipment {
            if equip.bonus != 0.0 {
                parts.push(format!(
                    "{} ({})",
                    format_number(equip.bonus),
                    equip.item_name
                ));
            }
        }
        let label = format!("{:<12}", entry.attribute.name());
        let total = format_number(entry.total);
        if use_colors {
            lines.push(format!(
                "  {} {:>6}  = {}",
                label.cyan(),
                total.bold(),
                parts.join(" + ")
            ));
        } else {
            lines.push(format!("  {} {:>6}  = {}", label, total, parts.join(" + ")));
        }
    }

    let totals = &breakdown.totals;
    lines.push(format!(
        "  multiplier   {:>6}",
        format_multiplier(breakdown.multiplier)
    ));
    lines.push(format!(
        "  AT = ({}/2 + {} + {}) {} = {} -> {}",
        format_number(totals.get(Attribute::Kick)),
        format_number(totals.get(Attribute::Control)),
        format_number(totals.get(Attribute::Technique)),
        format_multiplier(breakdown.multiplier),
        format_number(breakdown.raw_attack),
        breakdown.result.attack
    ));
    lines.push(format!(
        "  DF = ({}/2 + {} + {}) {} = {} -> {}",
        format_number(totals.get(Attribute::Agility)),
        format_number(totals.get(Attribute::Intelligence)),
        format_number(totals.get(Attribute::Technique)),
        format_multiplier(breakdown.multiplier),
        format_number(breakdown.raw_defense),
        breakdown.result.defense
    ));

    lines.join("\n")
}

fn format_item_bonuses(item: &EquipmentItem) -> String {
    let bonuses: Vec<String> = Attribute::ALL
        .iter()
        .filter(|&&a| item.bonus(a) != 0.0)
        .map(|&a| format!("{} {:+}", a.name(), item.bonus(a)))
        .collect();
    if bonuses.is_empty() {
        "-".to_string()
    } else {
        bonuses.join(", ")
    }
}

/// Format catalog items grouped by slot. `slot` restricts output to one slot.
pub fn format_catalog(catalog: &Catalog, slot: Option<SlotCategory>, use_colors: bool) -> String {
    if catalog.is_empty() {
        return "No equipment in catalog.".to_string();
    }

    let slots: Vec<SlotCategory> = match slot {
        Some(s) => vec![s],
        None => SlotCategory::ALL.to_vec(),
    };

    let mut sections = Vec::new();
    for slot in slots {
        let mut lines = Vec::new();
        if use_colors {
            lines.push(format!("{}", slot.name().bold()));
        } else {
            lines.push(slot.name().to_string());
        }

        let items: Vec<&EquipmentItem> = catalog.in_slot(slot).collect();
        if items.is_empty() {
            lines.push("  (none)".to_string());
        }
        for item in items {
            let id = format!("{:>4}", item.id);
            if use_colors {
                lines.push(format!(
                    "  {}  {}  {}",
                    id.dimmed(),
                    item.name,
                    format_item_bonuses(item).green()
                ));
            } else {
                lines.push(format!("  {}  {}  {}", id, item.name, format_item_bonuses(item)));
            }
        }
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EquipmentLoadout;
    use crate::scoring::{explain_scores, AttributeSet, AttributeValue, BuffSet};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            EquipmentItem::new(1, "Boots", SlotCategory::Shoes)
                .with_bonus(Attribute::Kick, 12.0)
                .with_bonus(Attribute::Agility, -2.0),
            EquipmentItem::new(2, "Band", SlotCategory::Wristband)
                .with_bonus(Attribute::Technique, 10.0),
        ])
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(120.0), "120");
        assert_eq!(format_number(73.5), "73.5");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn test_format_multiplier() {
        assert_eq!(format_multiplier(1.0), "x1");
        assert_eq!(format_multiplier(1.1 * 1.1), "x1.21");
        assert_eq!(format_multiplier(0.0), "x0");
    }

    #[test]
    fn test_format_result_plain() {
        let result = ScoreResult {
            attack: 330,
            defense: -4,
        };
        assert_eq!(format_result("striker", &result, false), "striker  AT 330  DF -4");
    }

    #[test]
    fn test_format_breakdown_plain() {
        let attributes =
            AttributeSet::default().with(Attribute::Kick, AttributeValue::new(100.0, 5.0, 0.0));
        let loadout = EquipmentLoadout::default()
            .with(SlotCategory::Shoes, 1)
            .with(SlotCategory::Wristband, 2);
        let breakdown = explain_scores(&attributes, &loadout, &catalog(), &BuffSet::new(10.0, 0.0));

        let output = format_breakdown("striker", &breakdown, false);
        let lines: Vec<&str> = output.lines().collect();
        // kick 117, technique 10, agility -2: (58.5 + 10) * 1.1 = 75.35
        assert_eq!(lines[0], "striker  AT 75  DF 9");
        assert!(lines[1].contains("kick"));
        assert!(lines[1].contains("117"));
        assert!(lines[1].contains("12 (Boots)"));
        assert!(output.contains("multiplier"));
        assert!(output.contains("x1.1"));
        assert!(output.contains("-> 75"));
    }

    #[test]
    fn test_format_catalog_all_slots() {
        let output = format_catalog(&catalog(), None, false);
        assert!(output.contains("shoes\n     1  Boots  kick +12, agility -2"));
        assert!(output.contains("wristband\n     2  Band  technique +10"));
        assert!(output.contains("pendant\n  (none)"));
        assert!(output.contains("special\n  (none)"));
    }

    #[test]
    fn test_format_catalog_one_slot() {
        let output = format_catalog(&catalog(), Some(SlotCategory::Wristband), false);
        assert!(output.starts_with("wristband"));
        assert!(!output.contains("Boots"));
    }

    #[test]
    fn test_format_empty_catalog() {
        assert_eq!(
            format_catalog(&Catalog::default(), None, false),
            "No equipment in catalog."
        );
    }
}
