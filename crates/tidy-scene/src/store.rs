//! Host contract
//!
//! [`SceneStore`] is the seam between the naming engine and whatever owns
//! the live scene graph. The engine reads nodes, asks for an instance's main
//! component (possibly a slow, cross-document lookup) and writes names back.

use crate::category::NodeCategory;
use crate::error::SceneError;
use crate::node::{NodeId, SceneNode};
use async_trait::async_trait;

/// Live scene graph owned by the host
#[async_trait]
pub trait SceneStore: Send + Sync {
    /// Look up a node
    fn node(&self, id: &NodeId) -> Option<&SceneNode>;

    /// Children the engine should walk, in document order
    ///
    /// Hosts may hide some children (see
    /// [`SceneStore::set_skip_invisible_instance_children`]).
    fn children(&self, id: &NodeId) -> Vec<NodeId>;

    /// Currently selected top-level nodes
    fn selection(&self) -> Vec<NodeId>;

    /// Replace a node's name
    ///
    /// # Errors
    /// Returns [`SceneError::NodeNotFound`] for unknown ids, or any
    /// host-specific rejection.
    fn set_name(&mut self, id: &NodeId, name: String) -> Result<(), SceneError>;

    /// Hide invisible descendants of instances from [`SceneStore::children`]
    fn set_skip_invisible_instance_children(&mut self, skip: bool);

    /// Resolve the component an instance was created from
    ///
    /// Resolves to `Ok(None)` when the reference cannot be found (deleted or
    /// unavailable library component).
    ///
    /// # Errors
    /// Returns an error when `instance` is unknown or not an instance.
    async fn main_component(&self, instance: &NodeId) -> Result<Option<MainComponent>, SceneError>;

    /// Parent of a node
    fn parent(&self, id: &NodeId) -> Option<&SceneNode> {
        self.node(id)?
            .parent
            .as_ref()
            .and_then(|parent| self.node(parent))
    }
}

/// Resolved main component of an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainComponent {
    /// Component node id
    pub id: NodeId,
    /// Component name
    pub name: String,
    /// Component's parent, if any
    pub parent: Option<ComponentParent>,
}

impl MainComponent {
    /// Whether the component is a variant of a component set
    #[inline]
    #[must_use]
    pub fn is_variant(&self) -> bool {
        self.variant_set_name().is_some()
    }

    /// Name of the owning component set
    #[must_use]
    pub fn variant_set_name(&self) -> Option<&str> {
        self.parent
            .as_ref()
            .filter(|parent| parent.category == NodeCategory::ComponentSet)
            .map(|parent| parent.name.as_str())
    }
}

/// Parent of a main component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentParent {
    /// Parent id
    pub id: NodeId,
    /// Parent category
    pub category: NodeCategory,
    /// Parent name
    pub name: String,
}
