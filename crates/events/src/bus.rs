//! Publish/subscribe abstraction (mechanics only).
//!
//! The storefront uses the bus for fire-and-forget messages that leave the
//! domain, such as the "item added" notification. Delivery is synchronous:
//! `publish` enqueues into every subscriber's channel before returning, and a
//! subscriber picks messages up whenever it next polls. Nothing is persisted.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a message stream.
///
/// Each subscription gets a copy of every message published after it was
/// created (broadcast semantics), in publish order.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// bus.publish(message)?;
///
/// for message in subscription.drain() {
///     show(message);
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Take every message queued so far without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic message bus (pub/sub abstraction).
///
/// - **Transport-agnostic**: the in-process implementation uses channels
/// - **Broadcast semantics**: each subscriber gets a copy of every message
/// - **No storage**: messages published with no subscribers are dropped
///
/// `publish()` can fail (e.g. the bus is poisoned). Callers that treat
/// publication as fire-and-forget log the failure and carry on.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
