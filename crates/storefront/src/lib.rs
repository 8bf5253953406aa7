//! `techstore-storefront`
//!
//! **Responsibility:** the view layer of the TechStore page.
//!
//! This crate provides:
//! - `Storefront`, the owned per-session state (catalog, cart, filter, orders,
//!   open panel) with a single `dispatch` entry point for user actions
//! - the line-oriented action language used by the `techstore` binary
//! - pure text renderers for every panel of the page
//! - environment-driven configuration
//!
//! Nothing here persists: a session starts empty and is discarded on exit.

pub mod action;
pub mod config;
pub mod render;
pub mod session;

pub use action::{Action, Input, ProfileTab};
pub use config::StorefrontConfig;
pub use session::{Panel, Storefront};
