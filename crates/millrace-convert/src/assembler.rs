//! The shape-tree walk that assembles a process model.
//!
//! The assembler invokes the element factory per shape, indexes the
//! resulting elements by resource id, records containment, wires sequence
//! flow source/target references from the shapes' outgoing lists, and
//! triggers boundary-event reclassification for catching events nested
//! inside activities.
//!
//! A shape whose construction fails does not abort its siblings: the
//! failure is collected as a diagnostic and the walk continues, including
//! into the failed shape's children.

use std::rc::Rc;

use indexmap::IndexMap;
use log::{info, warn};

use millrace_core::{
    element::BpmnElement,
    process::EventKind,
    shape::Shape,
};

use crate::{boundary, error::ConvertError, factory::ElementFactory, registry::StencilRegistry};

/// The assembled model graph: elements indexed by resource id plus
/// parent/child containment.
#[derive(Debug, Default)]
pub struct ProcessModel {
    elements: IndexMap<String, BpmnElement>,
    containment: IndexMap<String, Vec<String>>,
}

impl ProcessModel {
    /// Look up an element by resource id.
    pub fn get(&self, resource_id: &str) -> Option<&BpmnElement> {
        self.elements.get(resource_id)
    }

    /// Look up an element mutably by resource id.
    pub fn get_mut(&mut self, resource_id: &str) -> Option<&mut BpmnElement> {
        self.elements.get_mut(resource_id)
    }

    /// Iterate over all elements in insertion (document) order.
    pub fn elements(&self) -> impl Iterator<Item = &BpmnElement> {
        self.elements.values()
    }

    /// The number of elements in the model.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the model holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The resource ids of a shape's converted children, in document
    /// order.
    pub fn children_of(&self, resource_id: &str) -> &[String] {
        self.containment
            .get(resource_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn insert(&mut self, parent: Option<&str>, element: BpmnElement) {
        if let Some(parent) = parent {
            self.containment
                .entry(parent.to_string())
                .or_default()
                .push(element.resource_id().to_string());
        }
        let resource_id = element.resource_id().to_string();
        if self.elements.insert(resource_id.clone(), element).is_some() {
            warn!(resource_id; "Duplicate resource id, keeping the later element");
        }
    }
}

/// The outcome of one assembly run: the (possibly partial) model and the
/// per-shape construction failures encountered along the way.
#[derive(Debug)]
pub struct Assembly {
    model: ProcessModel,
    diagnostics: Vec<ConvertError>,
}

impl Assembly {
    /// Borrow the assembled model.
    pub fn model(&self) -> &ProcessModel {
        &self.model
    }

    /// Borrow the collected construction failures.
    pub fn diagnostics(&self) -> &[ConvertError] {
        &self.diagnostics
    }

    /// Split the outcome into its parts.
    pub fn into_parts(self) -> (ProcessModel, Vec<ConvertError>) {
        (self.model, self.diagnostics)
    }
}

/// Walks a shape tree and assembles a [`ProcessModel`].
pub struct GraphAssembler<'r> {
    factory: ElementFactory<'r>,
}

impl<'r> GraphAssembler<'r> {
    /// Create an assembler dispatching through the given registry.
    pub fn new(registry: &'r StencilRegistry) -> Self {
        Self {
            factory: ElementFactory::new(registry),
        }
    }

    /// Assemble the model for one diagram.
    ///
    /// `canvas` is the diagram's root shape; its children are the
    /// top-level elements. The canvas itself is not converted.
    pub fn assemble(&self, canvas: &Shape) -> Assembly {
        let mut model = ProcessModel::default();
        let mut diagnostics = Vec::new();
        let mut edges = Vec::new();

        self.walk(None, canvas.children(), &mut model, &mut diagnostics, &mut edges);
        Self::wire_sequence_flows(&model, &edges);
        self.reclassify_nested_events(canvas, &mut model);

        info!(
            elements = model.len(),
            failures = diagnostics.len();
            "Model assembled"
        );
        Assembly { model, diagnostics }
    }

    fn walk(
        &self,
        parent: Option<&str>,
        shapes: &[Shape],
        model: &mut ProcessModel,
        diagnostics: &mut Vec<ConvertError>,
        edges: &mut Vec<(String, String)>,
    ) {
        for shape in shapes {
            match self.factory.create_bpmn_element(shape) {
                Ok(element) => {
                    model.insert(parent, element);
                    for target in shape.outgoing() {
                        edges.push((shape.resource_id().to_string(), target.clone()));
                    }
                }
                Err(err) => {
                    warn!(
                        resource_id = shape.resource_id(),
                        stencil_id = shape.stencil_id(),
                        err:err;
                        "Skipping shape"
                    );
                    diagnostics.push(err);
                }
            }
            self.walk(
                Some(shape.resource_id()),
                shape.children(),
                model,
                diagnostics,
                edges,
            );
        }
    }

    /// Resolve the outgoing references into sequence-flow endpoints: a
    /// node pointing at a flow is the flow's source, a flow pointing at a
    /// node names the flow's target.
    fn wire_sequence_flows(model: &ProcessModel, edges: &[(String, String)]) {
        for (from, to) in edges {
            let from_is_flow = model
                .get(from)
                .is_some_and(|el| el.node().borrow().as_sequence_flow().is_some());

            if from_is_flow {
                if let Some(flow_element) = model.get(from) {
                    if let Some(flow) = flow_element.node().borrow_mut().as_sequence_flow_mut() {
                        flow.set_target_ref(to.clone());
                    }
                }
            } else if let Some(target_element) = model.get(to) {
                if let Some(flow) = target_element.node().borrow_mut().as_sequence_flow_mut() {
                    flow.set_source_ref(from.clone());
                }
            }
        }
    }

    /// Reclassify every catching event structurally nested inside an
    /// activity shape into a boundary event attached to that activity.
    fn reclassify_nested_events(&self, canvas: &Shape, model: &mut ProcessModel) {
        let mut pairs = Vec::new();
        collect_nested_catch_events(canvas.children(), model, &mut pairs);

        for (activity_id, event_id) in pairs {
            let Some(activity_node) = model.get(&activity_id).map(|el| Rc::clone(el.node()))
            else {
                continue;
            };
            if let Some(event_element) = model.get_mut(&event_id) {
                boundary::convert_with_activity_node(&activity_node, event_element);
            }
        }
    }
}

fn collect_nested_catch_events(
    shapes: &[Shape],
    model: &ProcessModel,
    pairs: &mut Vec<(String, String)>,
) {
    for shape in shapes {
        let shape_is_activity = model
            .get(shape.resource_id())
            .is_some_and(|el| el.node().borrow().as_activity().is_some());

        if shape_is_activity {
            for child in shape.children() {
                let child_is_catch_event = model.get(child.resource_id()).is_some_and(|el| {
                    el.node()
                        .borrow()
                        .as_event()
                        .is_some_and(|event| event.kind() == EventKind::IntermediateCatch)
                });
                if child_is_catch_event {
                    pairs.push((
                        shape.resource_id().to_string(),
                        child.resource_id().to_string(),
                    ));
                }
            }
        }
        collect_nested_catch_events(shape.children(), model, pairs);
    }
}
