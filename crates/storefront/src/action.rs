//! User actions and the line-oriented input language that produces them.

use serde::{Deserialize, Serialize};

use techstore_catalog::CategoryFilter;
use techstore_core::{DomainError, DomainResult, ProductId};

/// Tabs of the profile panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Profile,
    Orders,
}

/// Everything a user can do on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    SetQuantity(ProductId, i64),
    /// Cart panel "+" button.
    Increment(ProductId),
    /// Cart panel "−" button; goes through the same guard as `SetQuantity`.
    Decrement(ProductId),
    SelectCategory(CategoryFilter),
    OpenCart,
    OpenProfile(ProfileTab),
    /// Closes whichever panel is open.
    ClosePanel,
    /// Decorative: the profile form is not stored anywhere.
    SaveProfile,
    /// Decorative: there is no ordering backend.
    Checkout,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    /// Re-render the page without changing anything.
    Show,
    /// Print the cart as JSON.
    Snapshot,
    Help,
    Quit,
    Empty,
}

pub const HELP: &str = "\
commands:
  add <id>          add one unit of a product
  remove <id>       remove a product from the cart
  qty <id> <n>      set quantity (values below 1 are ignored)
  inc <id>          quantity + 1
  dec <id>          quantity - 1 (stays at 1)
  filter <label>    show one category (`Все` or `all` for everything)
  cart              open the cart panel
  profile           open the profile panel
  orders            open the order history
  close             close the open panel
  save              save profile
  checkout          place order
  show              re-render the page
  snapshot          print the cart as JSON
  help              this text
  quit              leave the store";

impl Input {
    pub fn parse(line: &str) -> DomainResult<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let input = match verb.to_ascii_lowercase().as_str() {
            "" => Input::Empty,
            "add" => Input::Action(Action::AddToCart(product_id(rest)?)),
            "remove" | "rm" => Input::Action(Action::RemoveFromCart(product_id(rest)?)),
            "qty" => {
                let (id, quantity) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| DomainError::validation("usage: qty <id> <n>"))?;
                let quantity = quantity
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| DomainError::validation(format!("quantity: {e}")))?;
                Input::Action(Action::SetQuantity(product_id(id)?, quantity))
            }
            "inc" => Input::Action(Action::Increment(product_id(rest)?)),
            "dec" => Input::Action(Action::Decrement(product_id(rest)?)),
            "filter" => {
                if rest.is_empty() {
                    return Err(DomainError::validation("usage: filter <label>"));
                }
                Input::Action(Action::SelectCategory(CategoryFilter::parse(rest)))
            }
            "cart" => Input::Action(Action::OpenCart),
            "profile" => Input::Action(Action::OpenProfile(ProfileTab::Profile)),
            "orders" => Input::Action(Action::OpenProfile(ProfileTab::Orders)),
            "close" => Input::Action(Action::ClosePanel),
            "save" => Input::Action(Action::SaveProfile),
            "checkout" => Input::Action(Action::Checkout),
            "show" => Input::Show,
            "snapshot" => Input::Snapshot,
            "help" | "?" => Input::Help,
            "quit" | "exit" => Input::Quit,
            other => {
                return Err(DomainError::validation(format!("unknown command `{other}`")));
            }
        };
        Ok(input)
    }
}

fn product_id(raw: &str) -> DomainResult<ProductId> {
    if raw.is_empty() {
        return Err(DomainError::validation("missing product id"));
    }
    raw.parse()
}
