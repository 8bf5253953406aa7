//! Plain-text rendering of the storefront page.
//!
//! Every function here is pure: it reads state and returns a `String`.

use std::fmt::Write as _;

use techstore_cart::{CartSnapshot, Notifier};
use techstore_catalog::{CategoryFilter, Product};
use techstore_orders::{Order, OrderHistory, format_date};

use crate::action::ProfileTab;
use crate::config::StorefrontConfig;
use crate::session::{Panel, Storefront};

const RULE: &str = "────────────────────────────────────────";

/// Noun suffix after a cart count, following the page's own rule:
/// 1 -> "", 2..=4 -> "а", everything else -> "ов".
pub fn items_suffix(count: u64) -> &'static str {
    if count == 1 {
        ""
    } else if count < 5 {
        "а"
    } else {
        "ов"
    }
}

pub fn header(config: &StorefrontConfig, cart_count: u64) -> String {
    let badge = if cart_count > 0 {
        format!("Корзина ({cart_count})")
    } else {
        "Корзина".to_string()
    };
    format!("■ {}    [{badge}] [Профиль]\n{RULE}\n", config.store_name)
}

pub fn category_bar(categories: &[CategoryFilter], selected: &CategoryFilter) -> String {
    let labels: Vec<String> = categories
        .iter()
        .map(|c| {
            if c == selected {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect();
    format!("{}\n", labels.join("  "))
}

pub fn product_grid(config: &StorefrontConfig, products: &[&Product]) -> String {
    let mut out = String::new();
    if products.is_empty() {
        out.push_str("Нет товаров в этой категории\n");
        return out;
    }
    for product in products {
        let _ = writeln!(out, "#{} · {}", product.id_typed(), product.category());
        let _ = writeln!(out, "  {}", product.name());
        let _ = writeln!(out, "  {}", product.description());
        let _ = writeln!(out, "  {}    [В корзину]", config.price(product.price()));
    }
    out
}

pub fn cart_panel(config: &StorefrontConfig, cart: &CartSnapshot) -> String {
    let mut out = format!("{RULE}\nКорзина\n");

    if cart.is_empty() {
        out.push_str("Корзина пуста\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{} товар{} на сумму {}",
        cart.count,
        items_suffix(cart.count),
        config.price(cart.total)
    );
    for item in &cart.items {
        let _ = writeln!(out, "#{} {}", item.product_id(), item.name());
        let _ = writeln!(
            out,
            "  {}   [−] {} [+]   [✕]",
            config.price(item.unit_price()),
            item.quantity()
        );
    }
    let _ = writeln!(out, "Итого: {}", config.price(cart.total));
    out.push_str("[Оформить заказ]\n");
    out
}

pub fn profile_panel(config: &StorefrontConfig, orders: &OrderHistory, tab: ProfileTab) -> String {
    let mut out = format!("{RULE}\nЛичный кабинет\nУправление профилем и заказами\n");
    match tab {
        ProfileTab::Profile => {
            out.push_str("[Профиль]  Заказы\n");
            out.push_str("Имя: ________\nEmail: ________\nТелефон: ________\n[Сохранить]\n");
        }
        ProfileTab::Orders => {
            out.push_str("Профиль  [Заказы]\n");
            if orders.is_empty() {
                out.push_str("Заказов пока нет\n");
            }
            for order in orders.orders() {
                out.push_str(&order_card(config, order));
            }
        }
    }
    out
}

fn order_card(config: &StorefrontConfig, order: &Order) -> String {
    let status = order.status();
    let badge = if status.is_highlighted() {
        format!("[{status}]")
    } else {
        format!("({status})")
    };

    let mut out = String::new();
    let _ = writeln!(out, "Заказ #{}  {badge}", order.id_typed());
    let _ = writeln!(out, "{}", format_date(order.date()));
    for item in order.items() {
        let _ = writeln!(
            out,
            "  {} × {}    {}",
            item.name(),
            item.quantity(),
            config.price(item.line_total())
        );
    }
    // The recorded total, not the sum of the lines.
    let _ = writeln!(out, "Итого: {}", config.price(order.total()));
    out
}

pub fn footer(config: &StorefrontConfig) -> String {
    format!("{RULE}\n© 2024 {}. Премиум гаджеты для вас\n", config.store_name)
}

pub fn page<N: Notifier>(store: &Storefront<N>) -> String {
    let config = store.config();
    let cart = store.cart_snapshot();

    let mut out = header(config, cart.count);
    out.push_str(&category_bar(&store.categories(), store.filter()));
    out.push_str(&product_grid(config, &store.visible_products()));

    match store.panel() {
        Panel::None => {}
        Panel::Cart => out.push_str(&cart_panel(config, &cart)),
        Panel::Profile(tab) => out.push_str(&profile_panel(config, store.orders(), tab)),
    }

    out.push_str(&footer(config));
    out
}
