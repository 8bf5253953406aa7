use serde::{Deserialize, Serialize};

use techstore_catalog::Product;
use techstore_core::{Aggregate, AggregateRoot, DomainError, Money, ProductId, entity};
use techstore_events::Event;

use crate::item::CartItem;

/// Cart identifier. One cart per storefront session.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(u32);

impl CartId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Cart.
///
/// Invariants:
/// - at most one line per product id
/// - every line has quantity >= 1
/// - lines keep the order in which products were first added
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    id: CartId,
    items: Vec<CartItem>,
    version: u64,
}

impl Cart {
    pub fn empty(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        entity::find_by_id(&self.items, &product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities over all lines.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity())).sum()
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem (one more unit of `product`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub product: Product,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub product_id: ProductId,
}

/// Command: SetQuantity.
///
/// `quantity` is signed so that out-of-range requests (0, negatives) reach the
/// guard instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetQuantity {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Command: ClearCart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    SetQuantity(SetQuantity),
    ClearCart(ClearCart),
}

/// Event: ItemAdded. `quantity` is the line's quantity after the add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product: Product,
    pub quantity: u32,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub product_id: ProductId,
}

/// Event: QuantityChanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    QuantityChanged(QuantityChanged),
    CartCleared,
}

impl CartEvent {
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CartEvent::ItemAdded(e) => Some(e.product.id_typed()),
            CartEvent::ItemRemoved(e) => Some(e.product_id),
            CartEvent::QuantityChanged(e) => Some(e.product_id),
            CartEvent::CartCleared => None,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
            CartEvent::QuantityChanged(_) => "cart.item.quantity_changed",
            CartEvent::CartCleared => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                match entity::position_by_id(&self.items, &e.product.id_typed()) {
                    Some(pos) => self.items[pos].set_quantity(e.quantity),
                    None => self.items.push(CartItem::new(e.product.clone(), e.quantity)),
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.items.retain(|item| item.product_id() != e.product_id);
            }
            CartEvent::QuantityChanged(e) => {
                if let Some(pos) = entity::position_by_id(&self.items, &e.product_id) {
                    self.items[pos].set_quantity(e.quantity);
                }
            }
            CartEvent::CartCleared => {
                self.items.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    /// Never fails: guarded and absent-id commands decide to emit nothing.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = match command {
            CartCommand::AddItem(cmd) => self.handle_add(cmd),
            CartCommand::RemoveItem(cmd) => self.handle_remove(cmd),
            CartCommand::SetQuantity(cmd) => self.handle_set_quantity(cmd),
            CartCommand::ClearCart(_) => self.handle_clear(),
        };
        Ok(events)
    }
}

impl Cart {
    fn handle_add(&self, cmd: &AddItem) -> Vec<CartEvent> {
        let quantity = self
            .get(cmd.product.id_typed())
            .map_or(1, |item| item.quantity().saturating_add(1));

        vec![CartEvent::ItemAdded(ItemAdded {
            product: cmd.product.clone(),
            quantity,
        })]
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Vec<CartEvent> {
        if self.get(cmd.product_id).is_none() {
            return Vec::new();
        }

        vec![CartEvent::ItemRemoved(ItemRemoved {
            product_id: cmd.product_id,
        })]
    }

    fn handle_set_quantity(&self, cmd: &SetQuantity) -> Vec<CartEvent> {
        // Sub-1 quantities are ignored, not clamped and not treated as removal.
        if cmd.quantity < 1 {
            return Vec::new();
        }
        let Ok(quantity) = u32::try_from(cmd.quantity) else {
            return Vec::new();
        };
        if self.get(cmd.product_id).is_none() {
            return Vec::new();
        }

        vec![CartEvent::QuantityChanged(QuantityChanged {
            product_id: cmd.product_id,
            quantity,
        })]
    }

    fn handle_clear(&self) -> Vec<CartEvent> {
        if self.items.is_empty() {
            return Vec::new();
        }
        vec![CartEvent::CartCleared]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techstore_catalog::Catalog;

    fn product(id: u32) -> Product {
        Catalog::seed().get(ProductId::new(id)).cloned().unwrap()
    }

    fn add(id: u32) -> CartCommand {
        CartCommand::AddItem(AddItem { product: product(id) })
    }

    #[test]
    fn add_to_empty_cart_emits_item_added_with_quantity_one() {
        let cart = Cart::empty(CartId::new(1));
        let events = cart.handle(&add(1)).unwrap();
        assert_eq!(events.len(), 1);

        match &events[0] {
            CartEvent::ItemAdded(e) => {
                assert_eq!(e.product.id_typed(), ProductId::new(1));
                assert_eq!(e.quantity, 1);
            }
            _ => panic!("Expected ItemAdded event"),
        }
    }

    #[test]
    fn adding_same_product_twice_increments_one_line() {
        let mut cart = Cart::empty(CartId::new(1));
        cart.execute(&add(1)).unwrap();
        cart.execute(&add(1)).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity(), 2);
    }

    #[test]
    fn remove_of_absent_product_emits_nothing() {
        let cart = Cart::empty(CartId::new(1));
        let events = cart
            .handle(&CartCommand::RemoveItem(RemoveItem {
                product_id: ProductId::new(9),
            }))
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn set_quantity_guard_rejects_sub_one_and_oversized_values() {
        let mut cart = Cart::empty(CartId::new(1));
        cart.execute(&add(1)).unwrap();

        for quantity in [0, -1, i64::MIN, i64::from(u32::MAX) + 1] {
            let events = cart
                .handle(&CartCommand::SetQuantity(SetQuantity {
                    product_id: ProductId::new(1),
                    quantity,
                }))
                .unwrap();
            assert!(events.is_empty(), "quantity {quantity} should be ignored");
        }
    }

    #[test]
    fn set_quantity_of_absent_product_emits_nothing() {
        let cart = Cart::empty(CartId::new(1));
        let events = cart
            .handle(&CartCommand::SetQuantity(SetQuantity {
                product_id: ProductId::new(1),
                quantity: 3,
            }))
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn clear_on_empty_cart_emits_nothing() {
        let cart = Cart::empty(CartId::new(1));
        assert!(cart.handle(&CartCommand::ClearCart(ClearCart)).unwrap().is_empty());
    }

    #[test]
    fn version_increments_on_apply() {
        let mut cart = Cart::empty(CartId::new(1));
        assert_eq!(cart.version(), 0);

        cart.execute(&add(1)).unwrap();
        assert_eq!(cart.version(), 1);

        cart.execute(&CartCommand::SetQuantity(SetQuantity {
            product_id: ProductId::new(1),
            quantity: 0,
        }))
        .unwrap();
        assert_eq!(cart.version(), 1);

        cart.execute(&CartCommand::RemoveItem(RemoveItem {
            product_id: ProductId::new(1),
        }))
        .unwrap();
        assert_eq!(cart.version(), 2);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let mut cart = Cart::empty(CartId::new(1));
        cart.execute(&add(2)).unwrap();
        let before = cart.clone();

        let events1 = cart.handle(&add(2)).unwrap();
        let events2 = cart.handle(&add(2)).unwrap();

        assert_eq!(cart, before);
        assert_eq!(events1, events2);
    }

    #[test]
    fn apply_is_deterministic() {
        let events = vec![
            CartEvent::ItemAdded(ItemAdded {
                product: product(1),
                quantity: 1,
            }),
            CartEvent::ItemAdded(ItemAdded {
                product: product(2),
                quantity: 1,
            }),
            CartEvent::QuantityChanged(QuantityChanged {
                product_id: ProductId::new(1),
                quantity: 4,
            }),
        ];

        let mut cart1 = Cart::empty(CartId::new(1));
        let mut cart2 = Cart::empty(CartId::new(1));
        for event in &events {
            cart1.apply(event);
            cart2.apply(event);
        }

        assert_eq!(cart1, cart2);
        assert_eq!(cart1.count(), 5);
        assert_eq!(cart1.total(), Money::new(24990 * 4 + 8990));
    }

    #[test]
    fn event_types_are_stable() {
        assert_eq!(
            CartEvent::ItemRemoved(ItemRemoved {
                product_id: ProductId::new(1)
            })
            .event_type(),
            "cart.item.removed"
        );
        assert_eq!(CartEvent::CartCleared.event_type(), "cart.cleared");
    }
}
