//! Visual counterparts of process nodes.
//!
//! A [`DiagramNode`] carries the raw positional and style data copied from
//! an input shape, plus a reference to the semantic process node it
//! visualizes. No layout or rendering computation happens here; the values
//! are carried through conversion verbatim.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::{geometry::Bounds, process::ProcessNodeRef};

/// The visual family a diagram node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramNodeKind {
    /// Event shapes (circles).
    Event,
    /// Activity shapes (rounded rectangles).
    Activity,
    /// Gateway shapes (diamonds).
    Gateway,
    /// Connecting edges.
    Edge,
    /// Shapes whose stencil has no registered family.
    Unknown,
}

impl DiagramNodeKind {
    /// A short, stable name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            DiagramNodeKind::Event => "event",
            DiagramNodeKind::Activity => "activity",
            DiagramNodeKind::Gateway => "gateway",
            DiagramNodeKind::Edge => "edge",
            DiagramNodeKind::Unknown => "unknown",
        }
    }
}

/// The visual counterpart of a process node.
///
/// A diagram node is created once per shape with its semantic reference
/// unset; the element factory binds the reference when it pairs the node
/// with a freshly constructed process node. The reference must always
/// point at the current process node of the pair, even after the process
/// node is replaced (see
/// [`BpmnElement::rebind`](crate::element::BpmnElement::rebind)).
#[derive(Debug)]
pub struct DiagramNode {
    kind: DiagramNodeKind,
    bounds: Bounds,
    style: IndexMap<String, String>,
    element: Option<ProcessNodeRef>,
}

impl DiagramNode {
    /// Create a new diagram node with the given visual kind and bounds.
    /// The semantic reference starts unset.
    pub fn new(kind: DiagramNodeKind, bounds: Bounds) -> Self {
        Self {
            kind,
            bounds,
            style: IndexMap::new(),
            element: None,
        }
    }

    /// Copy a raw style attribute onto this node.
    pub fn insert_style(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.style.insert(key.into(), value.into());
    }

    /// Get the node's visual kind.
    pub fn kind(&self) -> DiagramNodeKind {
        self.kind
    }

    /// Get the node's raw bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Borrow the raw style attributes copied from the shape.
    pub fn style(&self) -> &IndexMap<String, String> {
        &self.style
    }

    /// Get the semantic reference, if bound.
    pub fn element_ref(&self) -> Option<&ProcessNodeRef> {
        self.element.as_ref()
    }

    /// Point the semantic reference at the given process node.
    pub fn set_element_ref(&mut self, node: ProcessNodeRef) {
        self.element = Some(node);
    }

    /// Returns `true` if the semantic reference points exactly at the
    /// given process node.
    pub fn references(&self, node: &ProcessNodeRef) -> bool {
        self.element
            .as_ref()
            .is_some_and(|bound| Rc::ptr_eq(bound, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{Event, EventKind, ProcessNode};

    #[test]
    fn semantic_reference_starts_unset() {
        let node = DiagramNode::new(DiagramNodeKind::Event, Bounds::default());
        assert!(node.element_ref().is_none());
    }

    #[test]
    fn references_checks_pointer_identity() {
        let mut node = DiagramNode::new(DiagramNodeKind::Event, Bounds::default());
        let first = ProcessNode::Event(Event::new(EventKind::IntermediateCatch)).into_ref();
        let second = ProcessNode::Event(Event::new(EventKind::Boundary)).into_ref();

        node.set_element_ref(Rc::clone(&first));
        assert!(node.references(&first));
        assert!(!node.references(&second));
    }
}
