//! Per-session storefront state.

use serde::{Deserialize, Serialize};

use techstore_cart::{CartSnapshot, CartStore, NoopNotifier, Notifier};
use techstore_catalog::{Catalog, CategoryFilter, Product, categories, filtered_products};
use techstore_core::{DomainError, DomainResult, ProductId};
use techstore_orders::OrderHistory;

use crate::action::{Action, ProfileTab};
use crate::config::StorefrontConfig;
use crate::render;

/// Which slide-over panel is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    None,
    Cart,
    Profile(ProfileTab),
}

/// Everything one visitor's page holds, created at session start and
/// discarded at session end.
///
/// Control flow is one-way: a renderer reads the state, a user action goes
/// through [`Storefront::dispatch`], the state changes, the renderer reads
/// again.
pub struct Storefront<N = NoopNotifier> {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore<N>,
    filter: CategoryFilter,
    orders: OrderHistory,
    panel: Panel,
}

impl<N: Notifier> Storefront<N> {
    /// A fresh session over the seed catalog and order history.
    pub fn new(config: StorefrontConfig, notifier: N) -> DomainResult<Self> {
        let catalog = Catalog::seed();
        let orders = OrderHistory::seed(&catalog)?;
        Ok(Self::with_data(config, catalog, orders, notifier))
    }

    pub fn with_data(
        config: StorefrontConfig,
        catalog: Catalog,
        orders: OrderHistory,
        notifier: N,
    ) -> Self {
        tracing::info!(
            store = %config.store_name,
            products = catalog.len(),
            orders = orders.len(),
            "storefront session started"
        );

        Self {
            config,
            catalog,
            cart: CartStore::new(notifier),
            filter: CategoryFilter::All,
            orders,
            panel: Panel::None,
        }
    }

    /// Apply one user action.
    ///
    /// The only error is adding a product id that is not in the catalog;
    /// removes, quantity changes and filters never fail.
    pub fn dispatch(&mut self, action: Action) -> DomainResult<()> {
        tracing::debug!(?action, "dispatch");

        match action {
            Action::AddToCart(id) => {
                let product = self.catalog.get(id).ok_or_else(DomainError::not_found)?;
                self.cart.add(product);
            }
            Action::RemoveFromCart(id) => {
                self.cart.remove(id);
            }
            Action::SetQuantity(id, quantity) => {
                self.cart.set_quantity(id, quantity);
            }
            Action::Increment(id) => self.step_quantity(id, 1),
            Action::Decrement(id) => self.step_quantity(id, -1),
            Action::SelectCategory(filter) => {
                self.filter = filter;
            }
            Action::OpenCart => self.panel = Panel::Cart,
            Action::OpenProfile(tab) => self.panel = Panel::Profile(tab),
            Action::ClosePanel => self.panel = Panel::None,
            Action::SaveProfile => {
                tracing::info!("profile save requested; profile data is not stored");
            }
            Action::Checkout => {
                tracing::info!(
                    items = self.cart.count(),
                    total = self.cart.total().amount(),
                    "checkout requested; no ordering backend, cart left unchanged"
                );
            }
        }
        Ok(())
    }

    fn step_quantity(&mut self, id: ProductId, delta: i64) {
        // Absent lines stay absent: the buttons only exist on cart lines.
        if let Some(current) = self.cart.quantity_of(id) {
            self.cart.set_quantity(id, i64::from(current) + delta);
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore<N> {
        &self.cart
    }

    pub fn cart_snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        categories(&self.catalog)
    }

    /// Products for the grid under the current filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        filtered_products(&self.catalog, &self.filter)
    }

    pub fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// The whole page as text.
    pub fn render(&self) -> String {
        render::page(self)
    }
}

impl<N> Drop for Storefront<N> {
    fn drop(&mut self) {
        tracing::info!("storefront session ended");
    }
}
