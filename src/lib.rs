//! Mandi
//!
//! Mandi is the storefront data core of a local-produce marketplace: a
//! fixture-backed catalog query service, a cart aggregate with derived
//! totals, and an order placement stub, wired together through an explicit
//! session and application context.

pub mod cart;
pub mod catalog;
pub mod context;
pub mod fixtures;
pub mod location;
pub mod orders;
pub mod products;
pub mod session;
pub mod utils;
