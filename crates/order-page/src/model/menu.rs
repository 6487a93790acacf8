//! A purchasable product as listed on the menu.
//!
//! Menu items are loaded once when the page starts and never change afterwards.
//! Ordering the same item twice creates two independent [`OrderLine`](crate::model::OrderLine)s.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// Bare number: this is what ends up in `data-product`.
impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub emoji: String,
    pub ingredients: Vec<String>,
}

impl MenuItem {
    /// Creates a new MenuItem.
    ///
    /// # Arguments
    /// * `id` - Catalog-wide unique identifier
    /// * `name` - Display name
    /// * `price` - Unit price, shown as `$<price>`
    /// * `emoji` - Picture shown next to the entry
    /// * `ingredients` - Shown joined with `", "`
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: f64,
        emoji: impl Into<String>,
        ingredients: &[&str],
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            emoji: emoji.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Errors raised while loading a menu.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Menu data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),
}

/// The ordered, read-only list of menu items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate product ids. Order is preserved.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.id == item.id) {
                return Err(CatalogError::DuplicateProduct(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parses a JSON array of menu items.
    ///
    /// ```rust
    /// use order_page::model::{Catalog, ProductId};
    ///
    /// let catalog = Catalog::from_json(
    ///     r#"[{ "id": 7, "name": "Tea", "price": 3, "emoji": "🍵", "ingredients": ["leaves", "water"] }]"#,
    /// ).unwrap();
    /// assert_eq!(catalog.get(ProductId(7)).unwrap().name, "Tea");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// The diner's standard menu.
    pub fn builtin() -> Self {
        Self {
            items: vec![
                MenuItem::new(0, "Pizza", 14.0, "🍕", &["pepperoni", "mushroom", "mozzarella"]),
                MenuItem::new(1, "Hamburger", 12.0, "🍔", &["beef", "cheese", "lettuce"]),
                MenuItem::new(2, "Beer", 12.0, "🍺", &["grain", "hops", "yeast", "water"]),
            ],
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
