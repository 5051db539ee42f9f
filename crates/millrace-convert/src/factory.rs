//! The per-shape element factory.
//!
//! The factory is the construction contract the graph assembler calls
//! into: a visual node, a semantic node, and the composed pairing of the
//! two. Dispatch is a table lookup through the
//! [`StencilRegistry`](crate::registry::StencilRegistry); every
//! routine-internal failure is normalized into
//! [`ConvertError::ElementConstruction`] so callers handle one error kind
//! regardless of the failure's origin.

use log::trace;

use millrace_core::{
    diagram::DiagramNode,
    element::BpmnElement,
    process::ProcessNodeRef,
    shape::Shape,
};

use crate::{error::ConvertError, registry::StencilRegistry};

/// Raw style properties copied verbatim from shapes onto diagram nodes.
const STYLE_PROPERTIES: &[&str] = &["bgcolor", "bordercolor"];

/// Builds paired (diagram, process) elements from shapes.
///
/// Construction is a pure, single-pass function of the input shape; the
/// factory holds no per-diagram state beyond the shared registry
/// reference.
pub struct ElementFactory<'r> {
    registry: &'r StencilRegistry,
}

impl<'r> ElementFactory<'r> {
    /// Create a factory dispatching through the given registry.
    pub fn new(registry: &'r StencilRegistry) -> Self {
        Self { registry }
    }

    /// Allocate the visual node for a shape.
    ///
    /// Copies the raw positional and style data and leaves the semantic
    /// reference unset. Never fails on a well-formed shape; stencils
    /// without a registered family get the unknown visual kind.
    pub fn create_diagram_element(&self, shape: &Shape) -> DiagramNode {
        let kind = self.registry.diagram_kind(shape.stencil_id());
        let mut node = DiagramNode::new(kind, shape.bounds());
        for &key in STYLE_PROPERTIES {
            if let Some(value) = shape.property(key) {
                node.insert_style(key, value);
            }
        }
        node
    }

    /// Construct the semantic node for a shape.
    ///
    /// Resolves the shape's stencil id, invokes the construction routine,
    /// then assigns the node's id (the shape's resource id) and name (the
    /// shape's `name` property, if present).
    ///
    /// # Errors
    ///
    /// [`ConvertError::UnknownStencil`] when the stencil id does not
    /// resolve; [`ConvertError::ElementConstruction`] wrapping the
    /// original cause when the routine fails.
    pub fn create_process_element(&self, shape: &Shape) -> Result<ProcessNodeRef, ConvertError> {
        let registration = self.registry.resolve(shape.stencil_id())?;
        let mut node =
            registration
                .construct(shape)
                .map_err(|source| ConvertError::ElementConstruction {
                    stencil_id: shape.stencil_id().to_string(),
                    source,
                })?;
        node.set_id(shape.resource_id());
        node.set_name(shape.property("name").map(str::to_owned));
        trace!(
            resource_id = shape.resource_id(),
            stencil_id = shape.stencil_id(),
            kind = node.kind_name();
            "Constructed process element"
        );
        Ok(node.into_ref())
    }

    /// Construct the paired element for a shape.
    ///
    /// This is the entry point the graph assembler uses: it builds both
    /// nodes and binds the diagram node's semantic reference to the fresh
    /// process node.
    pub fn create_bpmn_element(&self, shape: &Shape) -> Result<BpmnElement, ConvertError> {
        let node = self.create_process_element(shape)?;
        let diagram = self.create_diagram_element(shape);
        Ok(BpmnElement::new(diagram, node, shape.resource_id()))
    }
}
