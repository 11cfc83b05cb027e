//! Portfolio view models for the dashboard and the ETF detail screen.

use serde::{Deserialize, Serialize};

/// Asset class of a held security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Stock,
    Bond,
    #[serde(other)]
    Other,
}

impl AssetType {
    /// Unknown type strings fall back to `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "stock" => AssetType::Stock,
            "bond" => AssetType::Bond,
            _ => AssetType::Other,
        }
    }
}

/// One holding as delivered by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetItem {
    pub security_symbol: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub quantity: u32,
    pub ratio: f32,
    pub security_name: String,
    #[serde(default)]
    pub security_description: Option<String>,
}

/// ARGB color, e.g. `0xFF80DEEA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argb(pub u32);

impl Argb {
    /// `#RRGGBB`, alpha dropped.
    pub fn to_hex_rgb(&self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

/// Group an allocation is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetGroup {
    Equity,
    FixedIncome,
    Other,
}

impl AssetGroup {
    pub fn label(&self) -> &'static str {
        match self {
            AssetGroup::Equity => "주식형 자산",
            AssetGroup::FixedIncome => "채권형 자산",
            AssetGroup::Other => "기타 자산",
        }
    }

    pub fn color(&self) -> Argb {
        match self {
            AssetGroup::Equity => Argb(0xFF80_DEEA),
            AssetGroup::FixedIncome => Argb(0xFF21_96F3),
            AssetGroup::Other => Argb(0xFFFF_EB3B),
        }
    }
}

impl From<AssetType> for AssetGroup {
    fn from(value: AssetType) -> Self {
        match value {
            AssetType::Stock => AssetGroup::Equity,
            AssetType::Bond => AssetGroup::FixedIncome,
            AssetType::Other => AssetGroup::Other,
        }
    }
}

/// A holding converted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetAllocation {
    pub group: AssetGroup,
    pub name: String,
    pub percentage: f32,
    pub color: Argb,
}

/// Allocations sharing a group, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationGroup {
    pub group: AssetGroup,
    pub items: Vec<AssetAllocation>,
}

impl AllocationGroup {
    pub fn total_percentage(&self) -> f32 {
        self.items.iter().map(|a| a.percentage).sum()
    }
}

/// One arc of the donut chart, in degrees. 0° points right, angles grow clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonutSegment {
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub color: Argb,
}

/// Donut charts start at twelve o'clock.
pub const DONUT_START_ANGLE: f32 = -90.0;

pub fn allocations_from(items: &[AssetItem]) -> Vec<AssetAllocation> {
    items
        .iter()
        .map(|item| {
            let group = AssetGroup::from(item.asset_type);
            AssetAllocation {
                group,
                name: item.security_name.clone(),
                percentage: item.ratio,
                color: group.color(),
            }
        })
        .collect()
}

/// Groups keep the order in which each group first appears.
pub fn group_allocations(allocations: &[AssetAllocation]) -> Vec<AllocationGroup> {
    let mut groups: Vec<AllocationGroup> = Vec::new();
    for allocation in allocations {
        match groups.iter_mut().find(|g| g.group == allocation.group) {
            Some(group) => group.items.push(allocation.clone()),
            None => groups.push(AllocationGroup {
                group: allocation.group,
                items: vec![allocation.clone()],
            }),
        }
    }
    groups
}

pub fn donut_segments(allocations: &[AssetAllocation]) -> Vec<DonutSegment> {
    let mut start_angle = DONUT_START_ANGLE;
    allocations
        .iter()
        .map(|allocation| {
            let sweep_angle = 360.0 * (allocation.percentage / 100.0);
            let segment = DonutSegment {
                start_angle,
                sweep_angle,
                color: allocation.color,
            };
            start_angle += sweep_angle;
            segment
        })
        .collect()
}

/// One card of the ETF detail list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtfItem {
    pub title: String,
    pub description: String,
    pub change_rate: String,
    pub shares: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(symbol: &str, asset_type: AssetType, ratio: f32) -> AssetItem {
        AssetItem {
            security_symbol: symbol.to_string(),
            asset_type,
            quantity: 1,
            ratio,
            security_name: format!("{symbol} name"),
            security_description: None,
        }
    }

    #[test]
    fn type_decides_group_and_color() {
        let allocations = allocations_from(&[
            item("S", AssetType::Stock, 10.0),
            item("B", AssetType::Bond, 20.0),
            item("C", AssetType::Other, 70.0),
        ]);
        assert_eq!(allocations[0].group.label(), "주식형 자산");
        assert_eq!(allocations[0].color, Argb(0xFF80DEEA));
        assert_eq!(allocations[1].group.label(), "채권형 자산");
        assert_eq!(allocations[1].color, Argb(0xFF2196F3));
        assert_eq!(allocations[2].group.label(), "기타 자산");
        assert_eq!(allocations[2].color, Argb(0xFFFFEB3B));
    }

    #[test]
    fn unknown_type_string_is_other() {
        assert_eq!(AssetType::parse("etc"), AssetType::Other);
        let parsed: AssetType = serde_json::from_str(r#""crypto""#).unwrap();
        assert_eq!(parsed, AssetType::Other);
    }

    #[test]
    fn grouping_preserves_first_appearance_order() {
        let allocations = allocations_from(&[
            item("B1", AssetType::Bond, 5.0),
            item("S1", AssetType::Stock, 5.0),
            item("B2", AssetType::Bond, 5.0),
        ]);
        let groups = group_allocations(&allocations);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group, AssetGroup::FixedIncome);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].group, AssetGroup::Equity);
        assert!((groups[0].total_percentage() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn donut_segments_are_contiguous_from_twelve_o_clock() {
        let allocations = allocations_from(&[
            item("A", AssetType::Stock, 25.0),
            item("B", AssetType::Bond, 50.0),
            item("C", AssetType::Other, 25.0),
        ]);
        let segments = donut_segments(&allocations);
        assert_eq!(segments[0].start_angle, -90.0);
        assert_eq!(segments[0].sweep_angle, 90.0);
        assert_eq!(segments[1].start_angle, 0.0);
        assert_eq!(segments[1].sweep_angle, 180.0);
        assert_eq!(segments[2].start_angle, 180.0);
        let total: f32 = segments.iter().map(|s| s.sweep_angle).sum();
        assert!((total - 360.0).abs() < 1e-3);
    }

    #[test]
    fn hex_rgb_drops_alpha() {
        assert_eq!(Argb(0xFF2196F3).to_hex_rgb(), "#2196F3");
    }
}
