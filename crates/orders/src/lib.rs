//! Order history (read-only).
//!
//! A fixed list of past orders seeded at session start. Nothing in the
//! storefront creates or changes orders.

pub mod history;
pub mod order;

pub use history::OrderHistory;
pub use order::{Order, OrderStatus, format_date};
