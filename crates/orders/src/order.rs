use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use techstore_cart::CartItem;
use techstore_core::{Entity, Money, OrderId};

/// Order status lifecycle, as displayed on the profile panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "В обработке",
            OrderStatus::Shipped => "Отправлен",
            OrderStatus::Delivered => "Доставлен",
            OrderStatus::Cancelled => "Отменён",
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Delivered orders get the primary badge; everything else is secondary.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A past order: a frozen snapshot of cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    date: NaiveDate,
    /// Total as recorded when the order was placed. Not derived from `items`.
    total: Money,
    status: OrderStatus,
    items: Vec<CartItem>,
}

impl Order {
    pub fn new(
        id: OrderId,
        date: NaiveDate,
        total: Money,
        status: OrderStatus,
        items: Vec<CartItem>,
    ) -> Self {
        Self {
            id,
            date,
            total,
            status,
            items,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of the line totals, which may differ from the recorded `total`.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// `2024-10-15` -> `"15 октября 2024"`.
pub fn format_date(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_with_genitive_month() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        assert_eq!(format_date(date), "15 октября 2024");

        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_date(date), "1 марта 2025");
    }

    #[test]
    fn status_labels_and_badges() {
        assert_eq!(OrderStatus::Delivered.to_string(), "Доставлен");
        assert!(OrderStatus::Delivered.is_highlighted());
        assert!(!OrderStatus::Shipped.is_highlighted());
        assert!(OrderStatus::Cancelled.is_final());
        assert!(!OrderStatus::Processing.is_final());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
    }
}
