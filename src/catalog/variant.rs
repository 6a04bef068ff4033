//! Variant enumeration
//!
//! A `Variant` is one fully-specified sellable configuration. The enumerator
//! yields the full Cartesian product of a program's parameter domains as a
//! lazy iterator; every run re-enumerates from scratch, so iteration is
//! restartable by construction. Order (width, depth, sub-variant, finish,
//! trim) fixes only the creation order of output documents; consumers rely
//! on nothing beyond "every combination exactly once".

use crate::catalog::family::{FamilyRules, Finish, SubVariant, TrimLevel};

/// One fully-specified sellable configuration.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub rules: &'static FamilyRules,
    /// Requested total width, meters.
    pub width: f64,
    /// Requested total depth, meters.
    pub depth: f64,
    pub sub_variant: SubVariant,
    pub finish: Finish,
    pub trim: TrimLevel,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}m x {}m {} {} {}",
            self.rules.code, self.width, self.depth, self.sub_variant, self.finish, self.trim
        )
    }
}

impl FamilyRules {
    /// Enumerate every variant of this program exactly once.
    pub fn variants(&'static self) -> impl Iterator<Item = Variant> + 'static {
        self.widths.iter().flat_map(move |&width| {
            self.depths.iter().flat_map(move |&depth| {
                self.sub_variants.iter().flat_map(move |&sub_variant| {
                    self.finishes.iter().flat_map(move |&finish| {
                        self.trims.iter().map(move |&trim| Variant {
                            rules: self,
                            width,
                            depth,
                            sub_variant,
                            finish,
                            trim,
                        })
                    })
                })
            })
        })
    }

    /// Number of variants `variants()` will yield.
    pub fn variant_count(&self) -> usize {
        self.widths.len()
            * self.depths.len()
            * self.sub_variants.len()
            * self.finishes.len()
            * self.trims.len()
    }
}
