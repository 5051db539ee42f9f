//! Sequence flows. Source and target references are wired later by the
//! graph assembler from the shapes' outgoing lists.

use millrace_core::{
    diagram::DiagramNodeKind,
    process::{ProcessNode, SequenceFlow},
    shape::Shape,
};

use crate::{
    error::RoutineError,
    registry::{FamilySpec, Routine},
};

const STENCILS: &[&str] = &["SequenceFlow"];

const ROUTINES: &[(&str, Routine)] = &[("SequenceFlow", create_sequence_flow)];

/// Registration table for sequence flows.
pub fn family() -> FamilySpec {
    FamilySpec {
        name: "sequence_flow",
        diagram_kind: DiagramNodeKind::Edge,
        stencils: STENCILS,
        routines: ROUTINES,
        default_routine: None,
    }
}

fn create_sequence_flow(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let flow = match shape.property("conditionexpression") {
        Some(condition) if !condition.is_empty() => SequenceFlow::with_condition(condition),
        _ => SequenceFlow::new(),
    };
    Ok(ProcessNode::SequenceFlow(flow))
}
