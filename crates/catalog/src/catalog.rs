use std::collections::HashSet;

use techstore_core::{DomainError, DomainResult, Money, ProductId, entity};

use crate::product::Product;

const IMAGE_WATCH: &str = "https://cdn.poehali.dev/projects/6e89ad4b-f88d-4ca3-93fa-5835ff8cd19c/files/a9c0c7aa-067a-4592-9948-32581ba83897.jpg";
const IMAGE_SPEAKER: &str = "https://cdn.poehali.dev/projects/6e89ad4b-f88d-4ca3-93fa-5835ff8cd19c/files/5a86f7ec-a139-42b9-9672-fb3efc63e750.jpg";

/// Fixed, ordered list of products. Built once at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, enforcing unique ids and non-empty names/categories.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            let id = product.id_typed();
            if !seen.insert(id) {
                return Err(DomainError::invariant(format!("duplicate product id {id}")));
            }
            if product.name().trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "product {id}: name cannot be empty"
                )));
            }
            if product.category().as_str().trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "product {id}: category cannot be empty"
                )));
            }
        }

        tracing::debug!(products = products.len(), "catalog built");
        Ok(Self { products })
    }

    /// The TechStore storefront's product list.
    pub fn seed() -> Self {
        let products = vec![
            Product::new(
                ProductId::new(1),
                "Умные часы Premium",
                Money::new(24990),
                "Электроника",
                IMAGE_WATCH,
                "Стильные умные часы с AMOLED-дисплеем",
            ),
            Product::new(
                ProductId::new(2),
                "Беспроводная колонка",
                Money::new(8990),
                "Аудио",
                IMAGE_SPEAKER,
                "Мощный звук 360° с защитой от воды",
            ),
            Product::new(
                ProductId::new(3),
                "Наушники TWS Pro",
                Money::new(12990),
                "Аудио",
                IMAGE_WATCH,
                "Активное шумоподавление и Hi-Res звук",
            ),
            Product::new(
                ProductId::new(4),
                "Фитнес-браслет",
                Money::new(4990),
                "Электроника",
                IMAGE_SPEAKER,
                "Отслеживание активности 24/7",
            ),
            Product::new(
                ProductId::new(5),
                "Портативное зарядное",
                Money::new(3490),
                "Аксессуары",
                IMAGE_WATCH,
                "Power Bank 20000 мАч с быстрой зарядкой",
            ),
            Product::new(
                ProductId::new(6),
                "Умная лампа RGB",
                Money::new(2990),
                "Умный дом",
                IMAGE_SPEAKER,
                "16 млн цветов, управление со смартфона",
            ),
        ];

        // Seed ids are distinct literals and every name/category is non-empty.
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        entity::find_by_id(&self.products, &id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str, category: &str) -> Product {
        Product::new(ProductId::new(id), name, Money::new(100), category, "img", "desc")
    }

    #[test]
    fn seed_catalog_is_valid() {
        let seed = Catalog::seed();
        let rebuilt = Catalog::new(seed.products().to_vec()).unwrap();
        assert_eq!(rebuilt, seed);
        assert_eq!(seed.len(), 6);
    }

    #[test]
    fn seed_catalog_prices() {
        let seed = Catalog::seed();
        let prices: Vec<u64> = seed.products().iter().map(|p| p.price().amount()).collect();
        assert_eq!(prices, vec![24990, 8990, 12990, 4990, 3490, 2990]);
    }

    #[test]
    fn get_finds_products_by_id() {
        let seed = Catalog::seed();
        assert_eq!(seed.get(ProductId::new(2)).unwrap().name(), "Беспроводная колонка");
        assert!(seed.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![product(1, "A", "X"), product(1, "B", "Y")]).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("duplicate product id 1") => {}
            _ => panic!("Expected InvariantViolation for duplicate id"),
        }
    }

    #[test]
    fn rejects_blank_name_and_category() {
        assert!(matches!(
            Catalog::new(vec![product(1, "  ", "X")]),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Catalog::new(vec![product(1, "A", "")]),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
