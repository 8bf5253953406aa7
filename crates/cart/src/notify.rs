//! "Show a message" collaborator seam.
//!
//! The cart calls a [`Notifier`] once per successful add. Delivery is
//! fire-and-forget: there is no return value and no retry, and a failing
//! transport never affects cart state.

use serde::{Deserialize, Serialize};

use techstore_core::ProductId;
use techstore_events::EventBus;

/// Message shown after a product lands in the cart.
pub const ITEM_ADDED_MESSAGE: &str = "Товар добавлен в корзину";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
}

/// A user-visible toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub product_id: Option<ProductId>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            product_id: None,
        }
    }

    pub fn item_added(product_id: ProductId) -> Self {
        Self {
            product_id: Some(product_id),
            ..Self::success(ITEM_ADDED_MESSAGE)
        }
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let marker = match self.level {
            NotificationLevel::Success => "✓",
            NotificationLevel::Info => "i",
        };
        write!(f, "{marker} {}", self.message)
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// Adapts a closure.
pub struct FnNotifier<F>(pub F);

impl<F: Fn(Notification)> Notifier for FnNotifier<F> {
    fn notify(&self, notification: Notification) {
        (self.0)(notification)
    }
}

/// Publishes notifications on a bus for whoever renders them.
#[derive(Debug, Clone)]
pub struct BusNotifier<B> {
    bus: B,
}

impl<B> BusNotifier<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

impl<B: EventBus<Notification>> Notifier for BusNotifier<B> {
    fn notify(&self, notification: Notification) {
        if let Err(err) = self.bus.publish(notification) {
            tracing::warn!(error = ?err, "dropping notification: publish failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use techstore_events::InMemoryEventBus;

    #[test]
    fn bus_notifier_publishes_to_subscribers() {
        let bus: Arc<InMemoryEventBus<Notification>> = Arc::new(InMemoryEventBus::new());
        let subscription = bus.subscribe();
        let notifier = BusNotifier::new(bus.clone());

        notifier.notify(Notification::item_added(ProductId::new(3)));

        let received = subscription.drain();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].message, ITEM_ADDED_MESSAGE);
        assert_eq!(received[0].product_id, Some(ProductId::new(3)));
    }

    #[test]
    fn fn_notifier_forwards_to_closure() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let notifier: Box<dyn Notifier> =
            Box::new(FnNotifier(move |n: Notification| sink.borrow_mut().push(n)));

        notifier.notify(Notification::success("готово"));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].level, NotificationLevel::Success);
    }

    #[test]
    fn display_prefixes_level_marker() {
        let text = Notification::item_added(ProductId::new(1)).to_string();
        assert_eq!(text, "✓ Товар добавлен в корзину");
    }
}
