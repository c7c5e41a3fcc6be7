//! Packing-list sections for reports.
//!
//! Groups totals keys into categories by naming convention. Keys nobody
//! knows about yet land in [`Category::Other`] instead of being dropped.

use serde::{Deserialize, Serialize};

use crate::constants::{hardware, TOP_ROW_HEIGHT_LABEL};
use crate::packlista::Totals;

/// Packing-list category, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Panels,
    TopRow,
    Connectors,
    CornerBrackets,
    Pins,
    Baseplates,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Panels,
        Category::TopRow,
        Category::Connectors,
        Category::CornerBrackets,
        Category::Pins,
        Category::Baseplates,
        Category::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Panels => "Frames",
            Self::TopRow => "Top row",
            Self::Connectors => "Connectors",
            Self::CornerBrackets => "Corner brackets",
            Self::Pins => "Pins",
            Self::Baseplates => "Baseplates",
            Self::Other => "Other",
        }
    }
}

/// Split a `"{height}x{width}"` key into its two dimensions.
fn panel_dimensions(key: &str) -> Option<(&str, &str)> {
    let (height, width) = key.split_once('x')?;
    let numeric = |s: &str| !s.is_empty() && s.parse::<f64>().is_ok_and(|v| v > 0.0);
    (numeric(height) && numeric(width)).then_some((height, width))
}

/// Category of a totals key.
pub fn categorize_key(key: &str) -> Category {
    if let Some((height, _)) = panel_dimensions(key) {
        return if height == TOP_ROW_HEIGHT_LABEL {
            Category::TopRow
        } else {
            Category::Panels
        };
    }
    if key == hardware::CONNECTORS {
        Category::Connectors
    } else if key.starts_with("corner_") {
        Category::CornerBrackets
    } else if key.ends_with("pin") {
        Category::Pins
    } else if key == hardware::BASEPLATE {
        Category::Baseplates
    } else {
        Category::Other
    }
}

/// Human-readable line text for a key.
pub fn describe_key(key: &str) -> String {
    match key {
        hardware::CONNECTORS => "Connector".to_string(),
        hardware::CORNER_90_4PIN => "Corner bracket 90°, 4 pin".to_string(),
        hardware::M8_PIN => "M8 pin".to_string(),
        hardware::T_5PIN => "T-connector, 5 pin".to_string(),
        hardware::BASEPLATE => "Baseplate".to_string(),
        _ => match panel_dimensions(key) {
            Some((height, width)) if height == TOP_ROW_HEIGHT_LABEL => {
                format!("Top-row frame {width} m wide")
            }
            Some((height, width)) => format!("Frame {height} m x {width} m"),
            None => key.to_string(),
        },
    }
}

/// One line of the packing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingLine {
    pub key: String,
    pub description: String,
    pub count: u32,
}

/// All lines of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingSection {
    pub category: Category,
    pub lines: Vec<PackingLine>,
}

impl PackingSection {
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.count).sum()
    }
}

/// Group totals into sections in report order. Empty sections are skipped.
pub fn categorize_totals(totals: &Totals) -> Vec<PackingSection> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let lines: Vec<PackingLine> = totals
                .iter()
                .filter(|&(key, count)| count > 0 && categorize_key(key) == category)
                .map(|(key, count)| PackingLine {
                    key: key.to_string(),
                    description: describe_key(key),
                    count,
                })
                .collect();
            (!lines.is_empty()).then_some(PackingSection { category, lines })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_categories() {
        assert_eq!(categorize_key("2.5x1"), Category::Panels);
        assert_eq!(categorize_key("3x0.5"), Category::Panels);
        assert_eq!(categorize_key("1x1"), Category::Panels);
        assert_eq!(categorize_key("1.0x2.5"), Category::TopRow);
        assert_eq!(categorize_key("connectors"), Category::Connectors);
        assert_eq!(categorize_key("corner_90_4pin"), Category::CornerBrackets);
        assert_eq!(categorize_key("m8_pin"), Category::Pins);
        assert_eq!(categorize_key("t_5pin"), Category::Pins);
        assert_eq!(categorize_key("baseplate"), Category::Baseplates);
    }

    #[test]
    fn unknown_keys_fall_into_other() {
        assert_eq!(categorize_key("led_strip"), Category::Other);
        assert_eq!(categorize_key("box"), Category::Other);
        assert_eq!(categorize_key("x"), Category::Other);
        assert_eq!(categorize_key("axb"), Category::Other);
    }

    #[test]
    fn descriptions() {
        assert_eq!(describe_key("2.5x1"), "Frame 2.5 m x 1 m");
        assert_eq!(describe_key("1.0x1.1"), "Top-row frame 1.1 m wide");
        assert_eq!(describe_key("m8_pin"), "M8 pin");
        assert_eq!(describe_key("led_strip"), "led_strip");
    }

    #[test]
    fn sections_in_report_order() {
        let mut totals = Totals::new();
        totals.add("baseplate", 1);
        totals.add("3x1", 3);
        totals.add("connectors", 6);
        totals.add("led_strip", 2);
        totals.add("m8_pin", 4);
        totals.add("t_5pin", 1);

        let sections = categorize_totals(&totals);
        let order: Vec<_> = sections.iter().map(|s| s.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Panels,
                Category::Connectors,
                Category::Pins,
                Category::Baseplates,
                Category::Other
            ]
        );
        let pins = &sections[2];
        assert_eq!(pins.lines.len(), 2);
        assert_eq!(pins.item_count(), 5);
    }

    #[test]
    fn every_key_lands_in_exactly_one_section() {
        let mut totals = Totals::new();
        for key in ["2.5x1", "1.0x3", "corner_90_4pin", "mystery", "connectors"] {
            totals.add(key, 1);
        }
        let sections = categorize_totals(&totals);
        let lines: u32 = sections.iter().map(|s| s.lines.len() as u32).sum();
        assert_eq!(lines as usize, totals.len());
        assert_eq!(
            sections.iter().map(|s| s.item_count()).sum::<u32>(),
            totals.item_count()
        );
    }
}
