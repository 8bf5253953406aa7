use chrono::NaiveDate;

use techstore_cart::CartItem;
use techstore_catalog::Catalog;
use techstore_core::{DomainError, DomainResult, Money, OrderId, ProductId, entity};

use crate::order::{Order, OrderStatus};

/// Read-only accessor over the seeded orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// The one past order shown on the profile panel.
    ///
    /// Its recorded total (37 980) is kept as-is even though the two lines sum
    /// to 33 980.
    pub fn seed(catalog: &Catalog) -> DomainResult<Self> {
        let line = |id: u32| -> DomainResult<CartItem> {
            let product = catalog.get(ProductId::new(id)).ok_or_else(DomainError::not_found)?;
            Ok(CartItem::new(product.clone(), 1))
        };

        let date = NaiveDate::from_ymd_opt(2024, 10, 15)
            .ok_or_else(|| DomainError::validation("invalid seed order date"))?;

        let order = Order::new(
            OrderId::new(1001),
            date,
            Money::new(37980),
            OrderStatus::Delivered,
            vec![line(1)?, line(2)?],
        );

        Ok(Self::new(vec![order]))
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        entity::find_by_id(&self.orders, &id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
