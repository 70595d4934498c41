//! Variant enumerator
//!
//! The number of phrasings under a (category, rating) pair is whatever the
//! catalog provides; nothing here assumes a fixed count.

use serde::Serialize;

use crate::catalog::{Catalog, FORM};
use crate::rating::{PerformanceCategory, Rating};

/// One choice in a variant picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantOption {
    /// 1-based variant index
    pub index: u32,
    /// Display label, e.g. "Variante 2"
    pub label: String,
}

/// Number of variants the catalog has for `category` at `rating`
pub fn enumerate_variants(catalog: &Catalog, category: PerformanceCategory, rating: Rating) -> usize {
    catalog.count_keys(&[FORM, category.catalog_key().as_str(), rating.key()])
}

/// Selectable options `1..=count` for `category` at `rating`
pub fn variant_options(
    catalog: &Catalog,
    category: PerformanceCategory,
    rating: Rating,
) -> Vec<VariantOption> {
    let label = catalog.variant_label();
    let count = enumerate_variants(catalog, category, rating);
    (1..=count as u32)
        .map(|index| VariantOption {
            index,
            label: format!("{label} {index}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::from_value(
            "de",
            json!({
                "form": {
                    "labels": {"variant": "Variante"},
                    "socialVariants": {
                        "sehr-gut": {"1": "a", "2": "b", "3": "c"},
                        "gut": {"1": "d", "2": "e"}
                    }
                }
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_count_matches_catalog() {
        let catalog = catalog();
        let social = PerformanceCategory::Social;
        assert_eq!(enumerate_variants(&catalog, social, Rating::VeryGood), 3);
        assert_eq!(enumerate_variants(&catalog, social, Rating::Good), 2);
        assert_eq!(enumerate_variants(&catalog, social, Rating::Poor), 0);
        assert_eq!(
            enumerate_variants(&catalog, PerformanceCategory::Overall, Rating::VeryGood),
            0
        );
    }

    #[test]
    fn test_options_labels() {
        let options = variant_options(&catalog(), PerformanceCategory::Social, Rating::Good);
        assert_eq!(
            options,
            vec![
                VariantOption { index: 1, label: "Variante 1".to_string() },
                VariantOption { index: 2, label: "Variante 2".to_string() },
            ]
        );
    }

    #[test]
    fn test_gap_yields_empty_list() {
        assert!(variant_options(&catalog(), PerformanceCategory::Social, Rating::Adequate).is_empty());
    }

    #[test]
    fn test_default_label() {
        let catalog = Catalog::from_value(
            "en",
            json!({"form": {"qualityVariants": {"gut": {"1": "x"}}}}),
        )
        .unwrap();
        let options = variant_options(&catalog, PerformanceCategory::Quality, Rating::Good);
        assert_eq!(options[0].label, "Variant 1");
    }
}
