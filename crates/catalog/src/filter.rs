//! Category filter: narrows the displayed catalog to one category.
//!
//! Nothing here is cached. Both the category list and the filtered view are
//! recomputed from the catalog on every call.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::product::{Category, Product};

/// Label the storefront shows for the unfiltered view.
pub const ALL_LABEL: &str = "Все";

/// The current category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Sentinel: show the whole catalog.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Map a label from the category bar to a selection.
    ///
    /// Both the displayed sentinel label and ASCII `All` select everything.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label == ALL_LABEL || label.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(Category::new(label))
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category() == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// `All` followed by every distinct category, in first-seen catalog order.
pub fn categories(catalog: &Catalog) -> Vec<CategoryFilter> {
    let mut out = vec![CategoryFilter::All];
    for product in catalog.products() {
        let candidate = CategoryFilter::Only(product.category().clone());
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

/// Products matching `selected`, preserving catalog order.
///
/// A category that no product carries yields an empty list.
pub fn filtered_products<'a>(catalog: &'a Catalog, selected: &CategoryFilter) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|p| selected.matches(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use techstore_core::{Money, ProductId};

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id_typed().get()).collect()
    }

    #[test]
    fn categories_start_with_all_in_first_seen_order() {
        let labels: Vec<String> = categories(&Catalog::seed())
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(labels, vec!["Все", "Электроника", "Аудио", "Аксессуары", "Умный дом"]);
    }

    #[test]
    fn empty_catalog_has_only_all() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert_eq!(categories(&catalog), vec![CategoryFilter::All]);
    }

    #[test]
    fn all_returns_whole_catalog_in_order() {
        let catalog = Catalog::seed();
        assert_eq!(ids(&filtered_products(&catalog, &CategoryFilter::All)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_returns_matching_products_in_order() {
        let catalog = Catalog::seed();
        let audio = CategoryFilter::parse("Аудио");
        assert_eq!(ids(&filtered_products(&catalog, &audio)), vec![2, 3]);

        let electronics = CategoryFilter::parse("Электроника");
        assert_eq!(ids(&filtered_products(&catalog, &electronics)), vec![1, 4]);
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let catalog = Catalog::seed();
        assert!(filtered_products(&catalog, &CategoryFilter::parse("Книги")).is_empty());
    }

    #[test]
    fn parse_recognizes_sentinel_labels() {
        assert_eq!(CategoryFilter::parse("Все"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(" all "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Умный дом"),
            CategoryFilter::Only(Category::new("Умный дом"))
        );
    }

    #[test]
    fn filter_serializes_with_lowercase_tags() {
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"all\"");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_catalog() -> impl Strategy<Value = Catalog> {
            prop::collection::vec(0usize..4, 0..20).prop_map(|cats| {
                let labels = ["A", "B", "C", "D"];
                let products = cats
                    .into_iter()
                    .enumerate()
                    .map(|(i, c)| {
                        Product::new(
                            ProductId::new(i as u32 + 1),
                            format!("P{i}"),
                            Money::new(100),
                            labels[c],
                            "img",
                            "desc",
                        )
                    })
                    .collect();
                Catalog::new(products).unwrap()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: filtering keeps only matching products, in catalog order,
            /// and the filtered views of all categories partition the catalog.
            #[test]
            fn filtered_views_partition_catalog(catalog in arb_catalog()) {
                let mut seen = 0;
                for selection in categories(&catalog).iter().skip(1) {
                    let view = filtered_products(&catalog, selection);
                    prop_assert!(view.iter().all(|p| selection.matches(p)));

                    let positions: Vec<usize> = view
                        .iter()
                        .map(|p| catalog.products().iter().position(|q| q == *p).unwrap())
                        .collect();
                    prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
                    seen += view.len();
                }
                prop_assert_eq!(seen, catalog.len());
                prop_assert_eq!(filtered_products(&catalog, &CategoryFilter::All).len(), catalog.len());
            }
        }
    }
}
