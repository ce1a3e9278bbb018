//! Derived-view query entry points.
//!
//! # Responsibility
//! - Expose the pure filter/search recomputation over the full collection.
//! - Keep view shaping inside core, away from presentation.

pub mod filter;
