//! Error types for the order state.

use crate::model::{LineId, ProductId};
use thiserror::Error;

/// Errors that can occur while changing the cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The product is not on the menu.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// An add control carried a tag that is not a product id at all.
    #[error("Invalid product tag: {0:?}")]
    InvalidProductTag(String),

    /// The id generator kept returning ids that are already in the cart.
    #[error("Could not allocate a unique line id (last candidate: {0})")]
    DuplicateLineId(LineId),
}
