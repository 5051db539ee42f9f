//! Serializable summary view of an assembled model.
//!
//! The summary is the CLI's output format: one entry per element with its
//! semantic kind and graph connections, plus the per-shape failures
//! collected during assembly. It is a read-only projection; the shared
//! node graph itself is not serialized.

use serde::Serialize;

use millrace_convert::Assembly;

/// A serializable projection of one assembly run.
#[derive(Debug, Serialize)]
pub struct ModelSummary {
    elements: Vec<ElementSummary>,
    diagnostics: Vec<String>,
}

impl ModelSummary {
    /// Project an assembly into its summary.
    pub fn from_assembly(assembly: &Assembly) -> Self {
        let elements = assembly
            .model()
            .elements()
            .map(ElementSummary::from_element)
            .collect();
        let diagnostics = assembly
            .diagnostics()
            .iter()
            .map(ToString::to_string)
            .collect();
        Self {
            elements,
            diagnostics,
        }
    }

    /// The summarized elements, in document order.
    pub fn elements(&self) -> &[ElementSummary] {
        &self.elements
    }

    /// The collected per-shape failure messages.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }
}

/// Summary of one converted element.
#[derive(Debug, Serialize)]
pub struct ElementSummary {
    resource_id: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attached_to: Option<String>,
}

impl ElementSummary {
    fn from_element(element: &millrace_core::element::BpmnElement) -> Self {
        let node = element.node().borrow();
        let (source_ref, target_ref) = match node.as_sequence_flow() {
            Some(flow) => (
                flow.source_ref().map(str::to_owned),
                flow.target_ref().map(str::to_owned),
            ),
            None => (None, None),
        };
        let attached_to = node
            .as_event()
            .and_then(|event| event.attached_to())
            .map(|activity| activity.borrow().id().to_string());

        Self {
            resource_id: element.resource_id().to_string(),
            kind: node.kind_name(),
            name: node.name().map(str::to_owned),
            source_ref,
            target_ref,
            attached_to,
        }
    }

    /// The element's resource id.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// The element's semantic kind name.
    pub fn kind(&self) -> &str {
        self.kind
    }

    /// The element's name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// For boundary events, the id of the attached activity.
    pub fn attached_to(&self) -> Option<&str> {
        self.attached_to.as_deref()
    }
}
