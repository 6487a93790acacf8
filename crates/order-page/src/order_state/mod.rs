//! # Order State
//!
//! The cart: an ordered list of [`OrderLine`]s and the only domain state of the page.
//!
//! ## Structure
//!
//! - [`ids`] - [`LineIdGenerator`] and its two implementations
//! - [`error`] - [`OrderError`] for rejected changes
//!
//! ## Rules
//!
//! - Lines keep insertion order; that is also display order.
//! - Every add creates a new line with a fresh id, even for a product already in the cart.
//! - Removing an id that is not in the cart does nothing.
//! - `total()` is the sum of the line prices, `0` when empty.
//!
//! The state never touches the document. Rendering reads it through [`OrderState::lines`]
//! and [`OrderState::total`].
//!
//! ## Usage
//!
//! ```rust
//! use order_page::model::{Catalog, MenuItem, ProductId};
//! use order_page::order_state::{OrderState, SequentialLineIds};
//!
//! let catalog = Catalog::new(vec![
//!     MenuItem::new(1, "Soup", 5.0, "🍲", &[]),
//!     MenuItem::new(2, "Pie", 7.0, "🥧", &[]),
//! ]).unwrap();
//! let mut order = OrderState::new(SequentialLineIds::default());
//!
//! let soup = order.add_line(&catalog, ProductId(1)).unwrap().id.clone();
//! order.add_line(&catalog, ProductId(2)).unwrap();
//! assert_eq!(order.total(), 12.0);
//!
//! assert!(order.remove_line(&soup));
//! assert!(!order.remove_line(&soup));
//! assert_eq!(order.total(), 7.0);
//! ```

pub mod error;
pub mod ids;

pub use error::*;
pub use ids::*;

use crate::model::{Catalog, LineId, OrderLine, OrderSnapshot, ProductId};
use std::fmt;
use tracing::{debug, info, warn};

/// How many times `add_line` asks the generator before giving up on a unique id.
const MAX_ID_ATTEMPTS: usize = 8;

pub struct OrderState {
    lines: Vec<OrderLine>,
    ids: Box<dyn LineIdGenerator>,
}

impl fmt::Debug for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderState")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl OrderState {
    pub fn new(ids: impl LineIdGenerator + 'static) -> Self {
        Self {
            lines: Vec::new(),
            ids: Box::new(ids),
        }
    }

    /// Appends a line for `product_id`.
    ///
    /// # Errors
    /// [`OrderError::UnknownProduct`] if the catalog has no such product; the cart is left
    /// as it was.
    pub fn add_line(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
    ) -> Result<&OrderLine, OrderError> {
        let item = catalog
            .get(product_id)
            .ok_or(OrderError::UnknownProduct(product_id))?;
        let id = self.fresh_id()?;

        let index = self.lines.len();
        self.lines.push(OrderLine {
            id,
            name: item.name.clone(),
            price: item.price,
        });
        let line = &self.lines[index];
        info!(line_id = %line.id, %product_id, lines = index + 1, "Line added");
        Ok(line)
    }

    fn fresh_id(&mut self) -> Result<LineId, OrderError> {
        let mut candidate = self.ids.next_id();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.contains(&candidate) {
                return Ok(candidate);
            }
            warn!(line_id = %candidate, "Generated line id already in use");
            candidate = self.ids.next_id();
        }
        if self.contains(&candidate) {
            Err(OrderError::DuplicateLineId(candidate))
        } else {
            Ok(candidate)
        }
    }

    /// Removes the line with this id. Returns whether anything was removed.
    pub fn remove_line(&mut self, line_id: &LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.id != line_id);
        let removed = self.lines.len() != before;
        if removed {
            info!(%line_id, lines = self.lines.len(), "Line removed");
        } else {
            debug!(%line_id, "No such line");
        }
        removed
    }

    /// Empties the cart and returns how many lines were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.lines.len();
        self.lines.clear();
        dropped
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().fold(0.0, |total, line| total + line.price)
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line_id: &LineId) -> bool {
        self.lines.iter().any(|line| &line.id == line_id)
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            lines: self.lines.clone(),
            total: self.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            MenuItem::new(1, "A", 5.0, "a", &[]),
            MenuItem::new(2, "B", 7.0, "b", &[]),
            MenuItem::new(3, "C", 2.5, "c", &[]),
        ])
        .unwrap()
    }

    fn order() -> OrderState {
        OrderState::new(SequentialLineIds::default())
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = order();
        assert!(order.is_empty());
        assert_eq!(order.total(), 0.0);
        assert!(order.total().is_sign_positive());
    }

    #[test]
    fn test_same_product_twice_gives_independent_lines() {
        let catalog = catalog();
        let mut order = order();
        let first = order.add_line(&catalog, ProductId(1)).unwrap().id.clone();
        let second = order.add_line(&catalog, ProductId(1)).unwrap().id.clone();
        assert_ne!(first, second);

        order.remove_line(&first);
        assert_eq!(order.len(), 1);
        assert_eq!(order.lines()[0].id, second);
        assert_eq!(order.total(), 5.0);
    }

    #[test]
    fn test_unknown_product_leaves_order_untouched() {
        let catalog = catalog();
        let mut order = order();
        order.add_line(&catalog, ProductId(2)).unwrap();

        let result = order.add_line(&catalog, ProductId(99));

        assert_eq!(result.unwrap_err(), OrderError::UnknownProduct(ProductId(99)));
        assert_eq!(order.len(), 1);
        assert_eq!(order.total(), 7.0);
    }

    #[test]
    fn test_remove_unknown_line_is_noop() {
        let catalog = catalog();
        let mut order = order();
        order.add_line(&catalog, ProductId(1)).unwrap();
        assert!(!order.remove_line(&LineId::new("nope")));
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_clear_empties_order() {
        let catalog = catalog();
        let mut order = order();
        order.add_line(&catalog, ProductId(1)).unwrap();
        order.add_line(&catalog, ProductId(3)).unwrap();
        assert_eq!(order.clear(), 2);
        assert!(order.is_empty());
        assert_eq!(order.snapshot(), OrderSnapshot::default());
    }

    #[test]
    fn test_colliding_generator_is_retried() {
        let catalog = catalog();
        let mut calls = 0u32;
        // "x", "x", "y", "y", ...
        let mut order = OrderState::new(move || {
            calls += 1;
            LineId::new(if calls <= 2 { "x" } else { "y" })
        });
        order.add_line(&catalog, ProductId(1)).unwrap();
        let second = order.add_line(&catalog, ProductId(1)).unwrap().id.clone();
        assert_eq!(second, LineId::new("y"));
    }

    #[test]
    fn test_stuck_generator_is_reported() {
        let catalog = catalog();
        let mut order = OrderState::new(|| LineId::new("same"));
        order.add_line(&catalog, ProductId(1)).unwrap();
        let result = order.add_line(&catalog, ProductId(2));
        assert_eq!(result.unwrap_err(), OrderError::DuplicateLineId(LineId::new("same")));
        assert_eq!(order.len(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u32),
        RemoveExisting(usize),
        RemoveMissing,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..5).prop_map(Op::Add),
            (0usize..16).prop_map(Op::RemoveExisting),
            Just(Op::RemoveMissing),
        ]
    }

    proptest! {
        #[test]
        fn line_count_total_and_ids_stay_consistent(ops in prop::collection::vec(op(), 0..40)) {
            let catalog = catalog();
            let mut order = order();
            let mut accepted = 0usize;
            let mut matched = 0usize;

            for op in ops {
                match op {
                    Op::Add(id) => {
                        if order.add_line(&catalog, ProductId(id)).is_ok() {
                            accepted += 1;
                        }
                    }
                    Op::RemoveExisting(pick) => {
                        if !order.is_empty() {
                            let id = order.lines()[pick % order.len()].id.clone();
                            if order.remove_line(&id) {
                                matched += 1;
                            }
                        }
                    }
                    Op::RemoveMissing => {
                        prop_assert!(!order.remove_line(&LineId::new("missing")));
                    }
                }

                prop_assert_eq!(order.len(), accepted - matched);
                let sum: f64 = order.lines().iter().map(|l| l.price).sum();
                prop_assert!((order.total() - sum).abs() < 1e-9);
                let unique: HashSet<&LineId> = order.lines().iter().map(|l| &l.id).collect();
                prop_assert_eq!(unique.len(), order.len());
            }
        }
    }
}
