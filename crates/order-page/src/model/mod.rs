//! Pure data structures: the menu a page is built from and the lines of the cart.

pub mod menu;
pub mod order;

pub use menu::*;
pub use order::*;
