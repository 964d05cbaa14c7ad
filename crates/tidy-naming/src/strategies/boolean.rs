//! Boolean operation naming

use crate::formatter::SemanticName;
use crate::strategy::{NamingContext, NamingError, NamingOptions, NamingStrategy};
use async_trait::async_trait;
use tidy_scene::{NodeCategory, SceneNode};

/// Names boolean nodes `boolean-<operation>`
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanOperationStrategy;

impl BooleanOperationStrategy {
    /// Create strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NamingStrategy for BooleanOperationStrategy {
    fn name(&self) -> &'static str {
        "boolean"
    }

    fn can_handle(&self, node: &SceneNode) -> bool {
        node.category == NodeCategory::BooleanOperation
    }

    async fn generate_name(
        &self,
        ctx: &NamingContext<'_>,
        _options: &NamingOptions,
    ) -> Result<SemanticName, NamingError> {
        let node = ctx.node;
        if !self.can_handle(node) {
            return Err(NamingError::wrong_category(self.name(), node));
        }

        let operation = node
            .props
            .boolean_operation
            .ok_or_else(|| NamingError::MissingField {
                id: node.id.clone(),
                field: "booleanOperation",
            })?;

        Ok(SemanticName::structural(format!(
            "boolean-{}",
            operation.label()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidy_scene::{BooleanOperation, NodeId, NodeRecord, SceneDocument, SceneStore};

    async fn generate(record: NodeRecord) -> Result<SemanticName, NamingError> {
        let doc = SceneDocument::from_records(vec![record], vec![]).unwrap();
        let node = doc.node(&NodeId::new("1:1")).unwrap();
        BooleanOperationStrategy::new()
            .generate_name(&NamingContext::new(&doc, node), &NamingOptions::default())
            .await
    }

    #[tokio::test]
    async fn operation_label() {
        for op in BooleanOperation::ALL {
            let record = NodeRecord::new("1:1", NodeCategory::BooleanOperation, op.host_label())
                .with_boolean_operation(op);
            let name = generate(record).await.unwrap();
            assert_eq!(name.text, format!("boolean-{}", op.label()));
            assert!(!name.preserve_case);
        }
    }

    #[tokio::test]
    async fn missing_operation_is_an_error() {
        let record = NodeRecord::new("1:1", NodeCategory::BooleanOperation, "Union");
        let err = generate(record).await.unwrap_err();
        assert!(matches!(err, NamingError::MissingField { field: "booleanOperation", .. }));
    }
}
