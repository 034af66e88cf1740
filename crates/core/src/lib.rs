//! Core traits and types shared by the tube drain crates.
//!
//! - [`constraint`] — numeric invariants checked once at construction
//! - [`Observer`] — watches drain steps and may ask the solver to stop

pub mod constraint;
mod observer;

pub use observer::Observer;
