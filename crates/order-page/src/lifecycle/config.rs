//! Startup settings for a [`Storefront`](super::Storefront).

use crate::model::Catalog;
use crate::page::{DEFAULT_TAGLINE, DEFAULT_TITLE};

/// Everything needed to start a page.
///
/// ```rust
/// use order_page::lifecycle::StorefrontConfig;
/// use order_page::model::Catalog;
///
/// let config = StorefrontConfig {
///     catalog: Catalog::from_json(r#"[{ "id": 1, "name": "Tea", "price": 3, "emoji": "🍵", "ingredients": [] }]"#).unwrap(),
///     ..StorefrontConfig::default()
/// };
/// assert_eq!(config.buffer_size, 32);
/// ```
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Capacity of the event channel. Clients wait when it is full.
    pub buffer_size: usize,
    pub catalog: Catalog,
    pub title: String,
    pub tagline: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            catalog: Catalog::builtin(),
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}
