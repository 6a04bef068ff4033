//! Catalog file-name scheme
//!
//! `{code}[-BSQ]-{width}M-{trim}-{depthcm}-{finish}.xlsx`, e.g.
//! `DOM-F-9M-N-900-G.xlsx`. Downstream tooling infers the program from
//! path substrings, so the family codes, the `ferme`/`ouvert` directory
//! tokens, the `compact` token and the `BSQ` sub-variant token form a
//! reserved, non-overlapping vocabulary. Any change here is a breaking
//! change for the extraction side.

use crate::catalog::family::SubVariant;
use crate::catalog::variant::Variant;

/// File name for a variant, unique within its family directory.
pub fn file_name(variant: &Variant) -> String {
    format!(
        "{}-{}-{}-{}-{}.xlsx",
        family_code(variant),
        width_code(variant.width),
        variant.trim.code(),
        depth_code(variant.depth),
        variant.finish.code()
    )
}

/// Family code with the clustered sub-variant token appended when needed.
fn family_code(variant: &Variant) -> String {
    match variant.sub_variant {
        SubVariant::Plain => variant.rules.code.to_string(),
        SubVariant::Clustered => format!("{}-BSQ", variant.rules.code),
    }
}

/// Width token: whole meters render without decimals, halves with one.
fn width_code(width: f64) -> String {
    if width.fract() == 0.0 {
        format!("{}M", width as i64)
    } else {
        format!("{width}M")
    }
}

/// Depth token: total depth in integer centimeters.
fn depth_code(depth: f64) -> String {
    format!("{}", (depth * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::family::{find, CATALOG};
    use std::collections::HashSet;

    fn variant_for(code: &str, width: f64, depth: f64) -> Variant {
        let rules = find(code).unwrap();
        Variant {
            rules,
            width,
            depth,
            sub_variant: crate::catalog::family::SubVariant::Plain,
            finish: crate::catalog::family::Finish::Galvanized,
            trim: crate::catalog::family::TrimLevel::Standard,
        }
    }

    #[test]
    fn test_closed_domino_name() {
        let v = variant_for("DOM-F", 9.0, 9.0);
        assert_eq!(file_name(&v), "DOM-F-9M-N-900-G.xlsx");
    }

    #[test]
    fn test_fractional_width_token() {
        let v = variant_for("CAR", 2.5, 2.0);
        assert_eq!(file_name(&v), "CAR-2.5M-N-200-G.xlsx");
    }

    #[test]
    fn test_trim_and_finish_codes() {
        let rules = find("MET").unwrap();
        let v = Variant {
            rules,
            width: 8.0,
            depth: 4.5,
            sub_variant: crate::catalog::family::SubVariant::Plain,
            finish: crate::catalog::family::Finish::PowderCoated,
            trim: crate::catalog::family::TrimLevel::Plus,
        };
        assert_eq!(file_name(&v), "MET-8M-P-450-PT.xlsx");
    }

    #[test]
    fn test_clustered_token() {
        let rules = find("DOM").unwrap();
        let v = Variant {
            rules,
            width: 4.0,
            depth: 2.5,
            sub_variant: crate::catalog::family::SubVariant::Clustered,
            finish: crate::catalog::family::Finish::Galvanized,
            trim: crate::catalog::family::TrimLevel::Standard,
        };
        assert_eq!(file_name(&v), "DOM-BSQ-4M-N-250-G.xlsx");
    }

    #[test]
    fn test_names_injective_per_family() {
        for rules in CATALOG.iter() {
            let mut seen = HashSet::new();
            for v in rules.variants() {
                let name = file_name(&v);
                assert!(seen.insert(name.clone()), "collision in {}: {name}", rules.code);
            }
        }
    }

    #[test]
    fn test_clustered_token_stays_out_of_reserved_vocabulary() {
        for rules in CATALOG.iter() {
            assert!(!rules.code.contains("BSQ"), "{}", rules.code);
            assert!(!rules.dir.contains("bsq"), "{}", rules.dir);
        }
    }
}
