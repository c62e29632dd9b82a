//! Content arrays: the derived sub-components of a wrapper.

use std::sync::Arc;

use ontograph_graph::GraphNode;

use crate::equality::objects_equal;
use crate::error::Result;
use crate::object::OntObject;

/// One entry of a content array.
///
/// Named entities, anonymous individuals and literals are stored as their
/// node; anonymous sub-expressions (and SWRL variables) must carry a full
/// wrapper because a bare blank id cannot be re-resolved into a structure.
#[derive(Clone, Debug)]
pub enum ContentItem {
    /// A primitive, stored as its node.
    Node(GraphNode),
    /// A nested wrapper.
    Object(OntObject),
}

impl ContentItem {
    /// Returns the node of a primitive item.
    #[must_use]
    pub fn as_node(&self) -> Option<&GraphNode> {
        match self {
            ContentItem::Node(node) => Some(node),
            ContentItem::Object(_) => None,
        }
    }

    /// Returns the wrapper of a nested item.
    #[must_use]
    pub fn as_object(&self) -> Option<&OntObject> {
        match self {
            ContentItem::Node(_) => None,
            ContentItem::Object(object) => Some(object),
        }
    }

    /// The graph node this item stands for: the node itself, or the root
    /// node (subject for statements) of a nested wrapper.
    #[must_use]
    pub fn graph_node(&self) -> &GraphNode {
        match self {
            ContentItem::Node(node) => node,
            ContentItem::Object(object) => object.node_ref().subject(),
        }
    }

    fn structural_eq(&self, other: &ContentItem) -> Result<bool> {
        match (self, other) {
            (ContentItem::Node(a), ContentItem::Node(b)) => Ok(a == b),
            (ContentItem::Object(a), ContentItem::Object(b)) => objects_equal(a, b),
            _ => Ok(false),
        }
    }
}

/// A materialized content array and the hash folded from it.
///
/// Layout: fixed components, then operands, then the annotation section.
/// Cloning shares the item array.
#[derive(Clone, Debug)]
pub struct Content {
    items: Arc<[ContentItem]>,
    hash: i64,
    annotations_start: usize,
}

impl Content {
    pub(crate) fn new(items: Vec<ContentItem>, annotations_start: usize, hash: i64) -> Self {
        Self {
            items: items.into(),
            hash,
            annotations_start,
        }
    }

    /// Every item, in canonical content order.
    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// The hash folded from the items.
    #[must_use]
    pub fn hash(&self) -> i64 {
        self.hash
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true for an empty array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fixed components and operands.
    #[must_use]
    pub fn body(&self) -> &[ContentItem] {
        &self.items[..self.annotations_start]
    }

    /// The sorted annotation section.
    #[must_use]
    pub fn annotations(&self) -> &[ContentItem] {
        &self.items[self.annotations_start..]
    }

    /// Index where the annotation section starts.
    #[must_use]
    pub fn annotations_start(&self) -> usize {
        self.annotations_start
    }

    /// Returns true if both contents share one item array.
    #[must_use]
    pub fn ptr_eq(&self, other: &Content) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

/// Element-wise content comparison of two objects of the same kind.
pub(crate) fn content_equal(a: &Content, b: &Content) -> Result<bool> {
    if a.ptr_eq(b) {
        return Ok(true);
    }
    if a.hash != b.hash
        || a.annotations_start != b.annotations_start
        || a.items.len() != b.items.len()
    {
        return Ok(false);
    }
    for (x, y) in a.items.iter().zip(b.items.iter()) {
        if !x.structural_eq(y)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn node_content(labels: &[&str], hash: i64) -> Content {
        let items = labels
            .iter()
            .map(|l| ContentItem::Node(GraphNode::string(l)))
            .collect::<Vec<_>>();
        let len = items.len();
        Content::new(items, len, hash)
    }

    #[test]
    fn sections_split_at_annotation_start() {
        let items = vec![
            ContentItem::Node(GraphNode::uri("http://example.org/p")),
            ContentItem::Node(GraphNode::string("v")),
        ];
        let content = Content::new(items, 1, 7);
        assert_eq!(content.body().len(), 1);
        assert_eq!(content.annotations().len(), 1);
        assert_eq!(content.hash(), 7);
    }

    #[test]
    fn equal_nodes_compare_equal() {
        let a = node_content(&["x", "y"], 1);
        let b = node_content(&["x", "y"], 1);
        assert!(content_equal(&a, &b).unwrap());
        assert!(content_equal(&a, &a.clone()).unwrap());
        assert!(!content_equal(&a, &node_content(&["x", "z"], 1)).unwrap());
        assert!(!content_equal(&a, &node_content(&["x", "y"], 2)).unwrap());
    }
}
