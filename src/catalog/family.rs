//! Product family rules table
//!
//! One `FamilyRules` descriptor per generated catalog program. Everything
//! that used to vary between the per-family generation scripts lives here as
//! data: dimension domains, wall material, wall flags, cladding removal, and
//! the door rule. The configuration writer consumes descriptors and never
//! branches on a family name.

use serde::{Deserialize, Serialize};

use crate::catalog::segment::CatalogError;

/// Shelter product line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductFamily {
    Carport,
    Bosquet,
    Domino,
    Metallique,
    Neve,
}

impl std::fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductFamily::Carport => write!(f, "carport"),
            ProductFamily::Bosquet => write!(f, "bosquet"),
            ProductFamily::Domino => write!(f, "domino"),
            ProductFamily::Metallique => write!(f, "metallique"),
            ProductFamily::Neve => write!(f, "neve"),
        }
    }
}

/// Whether the bottom wall exists (the entrance side is walled shut)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Closure {
    Open,
    Closed,
}

impl std::fmt::Display for Closure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Closure::Open => write!(f, "ouvert"),
            Closure::Closed => write!(f, "ferme"),
        }
    }
}

/// Surface finish of the steel structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finish {
    Galvanized,
    PowderCoated,
}

impl Finish {
    /// Value written into the finish input cell
    pub fn label(&self) -> &'static str {
        match self {
            Finish::Galvanized => "Galvanized",
            Finish::PowderCoated => "Powder coated",
        }
    }

    /// Short code used in catalog file names
    pub fn code(&self) -> &'static str {
        match self {
            Finish::Galvanized => "G",
            Finish::PowderCoated => "PT",
        }
    }
}

impl std::fmt::Display for Finish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Trim level of the build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimLevel {
    Standard,
    Plus,
}

impl TrimLevel {
    /// Value written into the trim input cell
    pub fn label(&self) -> &'static str {
        match self {
            TrimLevel::Standard => "Standard",
            TrimLevel::Plus => "PLUS",
        }
    }

    /// Single-letter code used in catalog file names
    pub fn code(&self) -> &'static str {
        match self {
            TrimLevel::Standard => "N",
            TrimLevel::Plus => "P",
        }
    }
}

impl std::fmt::Display for TrimLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structural sub-variant of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubVariant {
    Plain,
    Clustered,
}

impl std::fmt::Display for SubVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubVariant::Plain => write!(f, "normal"),
            SubVariant::Clustered => write!(f, "bosque"),
        }
    }
}

/// Wall material written into the material input cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallMaterial {
    Thermowood,
    Mesh2D,
    Glass,
    NoWall,
}

impl WallMaterial {
    pub fn label(&self) -> &'static str {
        match self {
            WallMaterial::Thermowood => "Thermowood",
            WallMaterial::Mesh2D => "2D mesh",
            WallMaterial::Glass => "Glass",
            WallMaterial::NoWall => "No wall",
        }
    }
}

/// Per-side wall closure flags, in template order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallFlags {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl WallFlags {
    /// Top/right/left walled, bottom per closure.
    pub const fn walled(closure: Closure) -> Self {
        WallFlags {
            top: true,
            right: true,
            bottom: matches!(closure, Closure::Closed),
            left: true,
        }
    }

    /// No walls at all (open-frame canopy).
    pub const NONE: WallFlags = WallFlags {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };
}

/// One row of a per-width door lookup: (width in cm, door segment size in
/// meters, door count).
pub type DoorTableRow = (i64, f64, u32);

/// How the door/hardware region is configured for a family
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoorRule {
    /// Open variant: the whole door region and the lock cell are cleared.
    None,

    /// The template ships with the door block pre-configured; only the door
    /// segment-size cell is rewritten to the dominant depth module. Entrance
    /// type, count and lock stay as the template preset them.
    PresetDepthMatched,

    /// Closed compact variant: entrance type, segment and count come from an
    /// exhaustive per-width table, and the lock cell is set.
    WidthTable(&'static [DoorTableRow]),
}

/// Entrance type written for width-table door rules.
pub const ENTRANCE_DOUBLE_SWING: &str = "Double swing gate";

/// Lock hardware written for width-table door rules.
pub const LOCK_EURO_CYLINDER: &str = "Euro cylinder lock";

/// Door table for the closed mesh compact line.
const MESH_COMPACT_DOORS: &[DoorTableRow] = &[
    (200, 2.03, 1),
    (250, 2.53, 1),
    (400, 2.03, 2),
    (500, 2.53, 2),
    (600, 2.03, 3),
];

/// Full rule set for one catalog program (family x closure x footprint).
#[derive(Debug)]
pub struct FamilyRules {
    pub family: ProductFamily,
    pub closure: Closure,
    pub compact: bool,

    /// File-name code, e.g. `DOM-F`. Reserved vocabulary: downstream tooling
    /// matches these codes and the directory tokens by substring.
    pub code: &'static str,

    /// Output subdirectory under the results root.
    pub dir: &'static str,

    /// Total widths sold, meters.
    pub widths: &'static [f64],

    /// Total depths sold, meters. Compact lines carry a single fixed depth.
    pub depths: &'static [f64],

    pub trims: &'static [TrimLevel],
    pub sub_variants: &'static [SubVariant],
    pub finishes: &'static [Finish],

    pub wall_material: WallMaterial,
    /// Extra finish code for mesh walls, written alongside the material.
    pub mesh_finish: Option<&'static str>,
    pub walls: WallFlags,
    pub remove_cladding: bool,
    pub doors: DoorRule,
}

const BOTH_TRIMS: &[TrimLevel] = &[TrimLevel::Standard, TrimLevel::Plus];
const STANDARD_ONLY: &[TrimLevel] = &[TrimLevel::Standard];
const BOTH_FINISHES: &[Finish] = &[Finish::Galvanized, Finish::PowderCoated];
const PLAIN_ONLY: &[SubVariant] = &[SubVariant::Plain];
const PLAIN_AND_CLUSTERED: &[SubVariant] = &[SubVariant::Plain, SubVariant::Clustered];

const SHALLOW_DEPTHS: &[f64] = &[2.0, 2.5];
const COMPACT_DEPTH: &[f64] = &[2.5];
const OPEN_DEPTHS: &[f64] = &[4.0, 4.5, 5.0, 6.0, 6.5, 7.0];
const CLOSED_DEPTHS: &[f64] = &[4.0, 4.5, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
const DEEP_DEPTHS: &[f64] = &[4.0, 4.5, 5.0, 6.0, 6.5, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];

const WIDE_WIDTHS: &[f64] = &[
    2.0, 2.5, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0,
];
const BOSQUET_WIDTHS: &[f64] = &[
    2.0, 2.5, 3.0, 4.0, 4.5, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0,
];
const CARPORT_WIDTHS: &[f64] = &[2.5, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
const CLOSED_WIDTHS: &[f64] = &[4.0, 5.0, 6.0, 7.0, 8.0];
const COMPACT_WIDTHS: &[f64] = &[2.0, 2.5, 4.0, 5.0, 6.0];

/// Every catalog program the generator knows about.
pub static CATALOG: [FamilyRules; 8] = [
    FamilyRules {
        family: ProductFamily::Carport,
        closure: Closure::Open,
        compact: false,
        code: "CAR",
        dir: "carport",
        widths: CARPORT_WIDTHS,
        depths: SHALLOW_DEPTHS,
        trims: BOTH_TRIMS,
        sub_variants: PLAIN_ONLY,
        finishes: BOTH_FINISHES,
        wall_material: WallMaterial::NoWall,
        mesh_finish: None,
        walls: WallFlags::NONE,
        remove_cladding: false,
        doors: DoorRule::None,
    },
    FamilyRules {
        family: ProductFamily::Bosquet,
        closure: Closure::Open,
        compact: false,
        code: "BOS",
        dir: "bosquet_ouvert",
        widths: BOSQUET_WIDTHS,
        depths: DEEP_DEPTHS,
        trims: BOTH_TRIMS,
        sub_variants: PLAIN_AND_CLUSTERED,
        finishes: BOTH_FINISHES,
        wall_material: WallMaterial::Thermowood,
        mesh_finish: None,
        walls: WallFlags::walled(Closure::Open),
        remove_cladding: false,
        doors: DoorRule::None,
    },
    FamilyRules {
        family: ProductFamily::Domino,
        closure: Closure::Open,
        compact: false,
        code: "DOM",
        dir: "domino_ouvert",
        widths: WIDE_WIDTHS,
        depths: SHALLOW_DEPTHS,
        trims: BOTH_TRIMS,
        sub_variants: PLAIN_AND_CLUSTERED,
        finishes: BOTH_FINISHES,
        wall_material: WallMaterial::Thermowood,
        mesh_finish: None,
        walls: WallFlags::walled(Closure::Open),
        remove_cladding: true,
        doors: DoorRule::None,
    },
    FamilyRules {
        family: ProductFamily::Domino,
        closure: Closure::Closed,
        compact: false,
        code: "DOM-F",
        dir: "domino_ferme",
        widths: CLOSED_WIDTHS,
        depths: CLOSED_DEPTHS,
        trims: BOTH_TRIMS,
        sub_variants: PLAIN_AND_CLUSTERED,
        finishes: BOTH_FINISHES,
        wall_material: WallMaterial::Thermowood,
        mesh_finish: None,
        walls: WallFlags::walled(Closure::Closed),
        remove_cladding: true,
        doors: DoorRule::PresetDepthMatched,
    },
    FamilyRules {
        family: ProductFamily::Domino,
        closure: Closure::Open,
        compact: true,
        code: "DOM-COMPACT",
        dir: "domino_ouvert_compact",
        widths: COMPACT_WIDTHS,
        depths: COMPACT_DEPTH,
        trims: BOTH_TRIMS,
        sub_variants: PLAIN_AND_CLUSTERED,
        finishes: BOTH_FINISHES,
        wall_material: WallMaterial::Thermowood,
        mesh_finish: None,
        walls: WallFlags::walled(Closure::Open),
        remove_cladding: true,
        doors: DoorRule::None,
    },
    FamilyRules {
        family: ProductFamily::Metallique,
        closure: Closure::Open,
        compact: false,
        code: "MET",
        dir: "metallique_ouvert",
        widths: WIDE_WIDTHS,
        depths: OPEN_DEPTHS,
        trims: BOTH_TRIMS,
        sub_variants: PLAIN_ONLY,
        finishes: BOTH_FINISHES,
        wall_material: WallMaterial::Mesh2D,
        mesh_finish: Some("RAV716"),
        walls: WallFlags::walled(Closure::Open),
        remove_cladding: false,
        doors: DoorRule::None,
    },
    FamilyRules {
        family: ProductFamily::Metallique,
        closure: Closure::Closed,
        compact: true,
        code: "MET-F-COMPACT",
        dir: "metallique_ferme_compact",
        widths: COMPACT_WIDTHS,
        depths: COMPACT_DEPTH,
        trims: BOTH_TRIMS,
        sub_variants: PLAIN_ONLY,
        finishes: BOTH_FINISHES,
        wall_material: WallMaterial::Mesh2D,
        mesh_finish: Some("RAV716"),
        walls: WallFlags::walled(Closure::Closed),
        remove_cladding: false,
        doors: DoorRule::WidthTable(MESH_COMPACT_DOORS),
    },
    FamilyRules {
        family: ProductFamily::Neve,
        closure: Closure::Open,
        compact: false,
        code: "NEVE",
        dir: "neve_ouvert",
        widths: WIDE_WIDTHS,
        depths: SHALLOW_DEPTHS,
        trims: STANDARD_ONLY,
        sub_variants: PLAIN_ONLY,
        finishes: BOTH_FINISHES,
        wall_material: WallMaterial::Glass,
        mesh_finish: None,
        walls: WallFlags::walled(Closure::Open),
        remove_cladding: false,
        doors: DoorRule::None,
    },
];

/// Look up a program by its file-name code or output directory name.
pub fn find(name: &str) -> Result<&'static FamilyRules, CatalogError> {
    CATALOG
        .iter()
        .find(|r| r.code.eq_ignore_ascii_case(name) || r.dir.eq_ignore_ascii_case(name))
        .ok_or_else(|| CatalogError::UnknownFamily(name.to_string()))
}

/// Door configuration resolved from a width-table rule.
///
/// Widths outside the table take the 2 m single-door fallback; the table is
/// an exhaustive enumeration of sold widths, never interpolated.
pub fn door_for_width(table: &[DoorTableRow], width: f64) -> (f64, u32) {
    let key = (width * 100.0).round() as i64;
    table
        .iter()
        .find(|(w, _, _)| *w == key)
        .map(|(_, seg, count)| (*seg, *count))
        .unwrap_or((2.03, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_codes_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in CATALOG.iter().skip(i + 1) {
                assert_ne!(a.code, b.code);
                assert_ne!(a.dir, b.dir);
            }
        }
    }

    #[test]
    fn test_find_by_code_and_dir() {
        assert_eq!(find("DOM-F").unwrap().dir, "domino_ferme");
        assert_eq!(find("domino_ferme").unwrap().code, "DOM-F");
        assert_eq!(find("neve").unwrap().code, "NEVE");
        assert_eq!(
            find("igloo").unwrap_err(),
            CatalogError::UnknownFamily("igloo".into())
        );
    }

    #[test]
    fn test_neve_has_no_premium_trim() {
        let rules = find("NEVE").unwrap();
        assert_eq!(rules.trims, &[TrimLevel::Standard]);
    }

    #[test]
    fn test_carport_has_no_walls() {
        let rules = find("CAR").unwrap();
        assert_eq!(rules.walls, WallFlags::NONE);
        assert_eq!(rules.wall_material, WallMaterial::NoWall);
    }

    #[test]
    fn test_closed_families_have_bottom_wall() {
        for rules in CATALOG.iter() {
            if rules.closure == Closure::Closed {
                assert!(rules.walls.bottom, "{} must be walled shut", rules.code);
            }
        }
    }

    #[test]
    fn test_only_domino_removes_cladding() {
        for rules in CATALOG.iter() {
            assert_eq!(
                rules.remove_cladding,
                rules.family == ProductFamily::Domino,
                "{}",
                rules.code
            );
        }
    }

    #[test]
    fn test_mesh_compact_door_table() {
        assert_eq!(door_for_width(MESH_COMPACT_DOORS, 2.0), (2.03, 1));
        assert_eq!(door_for_width(MESH_COMPACT_DOORS, 2.5), (2.53, 1));
        assert_eq!(door_for_width(MESH_COMPACT_DOORS, 4.0), (2.03, 2));
        assert_eq!(door_for_width(MESH_COMPACT_DOORS, 5.0), (2.53, 2));
        assert_eq!(door_for_width(MESH_COMPACT_DOORS, 6.0), (2.03, 3));
        // outside the enumeration: the fallback door, never interpolated
        assert_eq!(door_for_width(MESH_COMPACT_DOORS, 9.0), (2.03, 1));
    }
}
