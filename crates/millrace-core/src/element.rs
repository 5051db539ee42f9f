//! The paired (diagram, process) element unit.
//!
//! A [`BpmnElement`] binds the visual and semantic representations of one
//! model element together with the originating resource id. The diagram
//! node's semantic reference must always point at the wrapper's current
//! process node; any replacement of the process node goes through
//! [`BpmnElement::rebind`], never through independent field writes.

use std::rc::Rc;

use log::trace;

use crate::{diagram::DiagramNode, process::ProcessNodeRef};

/// A paired diagram node and process node produced by construction.
///
/// The wrapper is mutated in place when its process node is replaced, so
/// every holder of the wrapper observes the new node.
#[derive(Debug)]
pub struct BpmnElement {
    diagram: DiagramNode,
    node: ProcessNodeRef,
    resource_id: String,
}

impl BpmnElement {
    /// Pair a diagram node with a process node under the given resource
    /// id. The diagram node's semantic reference is bound to the process
    /// node.
    pub fn new(mut diagram: DiagramNode, node: ProcessNodeRef, resource_id: impl Into<String>) -> Self {
        diagram.set_element_ref(Rc::clone(&node));
        Self {
            diagram,
            node,
            resource_id: resource_id.into(),
        }
    }

    /// Borrow the visual node.
    pub fn diagram(&self) -> &DiagramNode {
        &self.diagram
    }

    /// Borrow the shared process node handle.
    pub fn node(&self) -> &ProcessNodeRef {
        &self.node
    }

    /// Get the originating shape's resource id.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Replace the process node, updating the paired diagram node's
    /// semantic reference in the same step.
    ///
    /// This is the only sanctioned way to swap a process node; it keeps
    /// the pairing invariant intact for every holder of the wrapper.
    pub fn rebind(&mut self, node: ProcessNodeRef) {
        trace!(
            resource_id = self.resource_id,
            kind = node.borrow().kind_name();
            "Rebinding element to replacement process node"
        );
        self.diagram.set_element_ref(Rc::clone(&node));
        self.node = node;
    }

    /// Returns `true` if the diagram node's semantic reference is
    /// pointer-identical to the current process node.
    pub fn is_consistent(&self) -> bool {
        self.diagram.references(&self.node)
    }
}
