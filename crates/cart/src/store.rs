//! Owned, non-persisted cart state holder for one storefront session.

use serde::{Deserialize, Serialize};

use techstore_catalog::Product;
use techstore_core::{Aggregate, AggregateRoot, Money, ProductId};
use techstore_events::Event;

use crate::cart::{AddItem, Cart, CartCommand, CartEvent, CartId, ClearCart, RemoveItem, SetQuantity};
use crate::item::CartItem;
use crate::notify::{NoopNotifier, Notification, Notifier};

/// Owned copy of the cart for renderers and serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub count: u64,
    pub total: Money,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The authoritative set of items the user intends to buy this session.
///
/// All operations are synchronous and total. Each mutator returns the events
/// it applied; an empty list means the request was a no-op (absent id, or a
/// quantity rejected by the guard). Count and total are recomputed on every
/// read.
pub struct CartStore<N = NoopNotifier> {
    cart: Cart,
    notifier: N,
}

impl CartStore<NoopNotifier> {
    pub fn without_notifications() -> Self {
        Self::new(NoopNotifier)
    }
}

impl<N: Notifier> CartStore<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_id(CartId::default(), notifier)
    }

    pub fn with_id(id: CartId, notifier: N) -> Self {
        Self {
            cart: Cart::empty(id),
            notifier,
        }
    }

    /// One more unit of `product`; appends a new line on first add.
    ///
    /// Always succeeds and always fires the "item added" notification.
    pub fn add(&mut self, product: &Product) -> Vec<CartEvent> {
        let events = self.execute(CartCommand::AddItem(AddItem {
            product: product.clone(),
        }));
        self.notifier.notify(Notification::item_added(product.id_typed()));
        events
    }

    /// Drop the line for `product_id`. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        self.execute(CartCommand::RemoveItem(RemoveItem { product_id }))
    }

    /// Replace the line's quantity. Values below 1 are silently ignored.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> Vec<CartEvent> {
        let events = self.execute(CartCommand::SetQuantity(SetQuantity {
            product_id,
            quantity,
        }));
        if events.is_empty() {
            tracing::debug!(%product_id, quantity, "set_quantity ignored");
        }
        events
    }

    /// Empty the cart (session reset).
    pub fn clear(&mut self) -> Vec<CartEvent> {
        self.execute(CartCommand::ClearCart(ClearCart))
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.cart.get(product_id)
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.get(product_id).map(CartItem::quantity)
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.cart.version()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.cart.items().to_vec(),
            count: self.count(),
            total: self.total(),
        }
    }

    fn execute(&mut self, command: CartCommand) -> Vec<CartEvent> {
        // Cart::handle is infallible; the Err arm only exists for the trait.
        let events = match self.cart.execute(&command) {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(error = %err, ?command, "cart rejected command");
                Vec::new()
            }
        };

        for event in &events {
            tracing::debug!(
                cart_id = %self.cart.id_typed(),
                event_type = event.event_type(),
                product_id = ?event.product_id(),
                version = self.cart.version(),
                "cart event applied"
            );
        }
        events
    }
}

impl<N> core::fmt::Debug for CartStore<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CartStore").field("cart", &self.cart).finish_non_exhaustive()
    }
}
