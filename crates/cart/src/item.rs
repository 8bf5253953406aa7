use serde::{Deserialize, Serialize};

use techstore_catalog::Product;
use techstore_core::{Entity, Money, ProductId};

/// Cart line: a product snapshot and how many units of it are wanted.
///
/// Serializes as the product's fields plus `quantity`. Quantity is never zero
/// while the line lives in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    product: Product,
    quantity: u32,
}

impl CartItem {
    /// Build a line. Used by the cart itself and to seed order snapshots.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id_typed()
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    pub fn unit_price(&self) -> Money {
        self.product.price()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> Money {
        self.product.price().times(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl Entity for CartItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        Entity::id(&self.product)
    }
}
