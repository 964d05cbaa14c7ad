//! Tidy Naming
//!
//! Everything that decides what a layer should be called:
//! - [`NameClassifier`]: is the current name generated (safe to replace)?
//! - [`NamingStrategy`] / [`StrategyRegistry`]: per-category base names with a
//!   total fallback
//! - [`MainComponentCache`]: TTL cache for instance lookups
//! - [`NameFormatter`]: PascalCase / kebab-case rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use tidy_naming::{NamingContext, NamingOptions, StrategyRegistry};
//!
//! let registry = StrategyRegistry::default();
//! let outcome = registry
//!     .generate_name(&NamingContext::new(&doc, node), &NamingOptions::default())
//!     .await;
//! println!("{} via {}", outcome.name, outcome.strategy);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod cache;
mod classifier;
mod formatter;
mod registry;
pub mod strategies;
mod strategy;
mod vocabulary;

pub use cache::{CacheStats, MainComponentCache};
pub use classifier::NameClassifier;
pub use formatter::{
    split_suffix, to_camel_case, to_kebab_case, to_pascal_case, NameFormatter, SemanticName,
    SUFFIX_SEPARATOR,
};
pub use registry::{NameOutcome, StrategyRegistry};
pub use strategies::{InstanceNamingStrategy, InstanceState};
pub use strategy::{NamingContext, NamingError, NamingOptions, NamingStrategy, StrategyConfig};
pub use vocabulary::{NamingVocabulary, GENERATED_BASE_NAMES};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
