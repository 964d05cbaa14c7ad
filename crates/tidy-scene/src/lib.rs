//! Tidy Scene
//!
//! Scene graph model shared by the naming engine and its hosts:
//! - [`NodeCategory`]: closed set of layer type tags
//! - [`SceneNode`] / [`NodeProps`]: one layer and its category-specific state
//! - [`SceneStore`]: the host contract (read nodes, resolve main components,
//!   write names)
//! - [`SceneDocument`]: in-memory, JSON-loadable implementation of the store
//!
//! # Example
//!
//! ```rust,ignore
//! use tidy_scene::{NodeCategory, NodeRecord, SceneDocument, SceneStore};
//!
//! let frame = NodeRecord::new("1:1", NodeCategory::Frame, "Frame 1");
//! let doc = SceneDocument::from_records(vec![frame], vec!["1:1".into()])?;
//! assert_eq!(doc.selection().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod category;
mod document;
mod error;
mod node;
mod store;

pub use category::NodeCategory;
pub use document::{DocumentFile, NodeRecord, SceneDocument};
pub use error::SceneError;
pub use node::{
    AutoLayout, BooleanOperation, Effect, EffectKind, LayoutMode, LayoutWrap, NodeId, NodeProps,
    OverflowDirection, Paint, PaintKind, SceneNode,
};
pub use store::{ComponentParent, MainComponent, SceneStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
