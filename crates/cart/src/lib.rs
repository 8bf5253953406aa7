//! Cart domain module.
//!
//! The cart is the session's only mutable state. It is modelled as a small
//! command/event aggregate (`Cart`) wrapped by an owned state holder
//! (`CartStore`) that applies commands, fires the "item added" notification,
//! and answers the derived reads (count, total, snapshot).

pub mod cart;
pub mod item;
pub mod notify;
pub mod store;

pub use cart::{
    AddItem, Cart, CartCommand, CartEvent, CartId, ClearCart, ItemAdded, ItemRemoved,
    QuantityChanged, RemoveItem, SetQuantity,
};
pub use item::CartItem;
pub use notify::{BusNotifier, FnNotifier, NoopNotifier, Notification, NotificationLevel, Notifier};
pub use store::{CartSnapshot, CartStore};
