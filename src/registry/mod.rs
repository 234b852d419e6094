//! # Strategy Registry
//!
//! Resolution of subject slugs to [`ContentStrategy`](crate::content::ContentStrategy)
//! implementations.
//!
//! ## Architecture
//!
//! ```text
//! subject.slug -> StrategyRegistry::resolve -> exact match | "default" fallback
//! ```
//!
//! The registry is built once and never mutated afterwards, so it can be
//! shared across tasks behind an `Arc` without locking.
//!
//! ## Usage
//!
//! ```rust
//! use curriculum_core::registry::StrategyRegistry;
//!
//! let registry = StrategyRegistry::with_default_strategies();
//! assert_eq!(registry.resolve("science").slug(), "science");
//! assert_eq!(registry.resolve("music").slug(), "default");
//! ```

pub mod strategy_registry;

pub use strategy_registry::{RegistryStats, StrategyRegistry, StrategyRegistryBuilder};
