//! End events. A single default routine covers the whole family.

use std::rc::Rc;

use millrace_core::{
    diagram::DiagramNodeKind,
    process::{Event, EventDefinition, EventKind, ProcessNode},
    shape::Shape,
};

use crate::{error::RoutineError, registry::FamilySpec};

const STENCILS: &[&str] = &[
    "EndNoneEvent",
    "EndMessageEvent",
    "EndErrorEvent",
    "EndEscalationEvent",
    "EndCancelEvent",
    "EndCompensationEvent",
    "EndSignalEvent",
    "EndTerminateEvent",
    "EndMultipleEvent",
];

/// Registration table for end events.
pub fn family() -> FamilySpec {
    FamilySpec {
        name: "end_event",
        diagram_kind: DiagramNodeKind::Event,
        stencils: STENCILS,
        routines: &[],
        default_routine: Some(create_end_event),
    }
}

fn create_end_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = Event::new(EventKind::End);
    let definition = match shape.stencil_id() {
        "EndMessageEvent" => Some(EventDefinition::Message),
        "EndErrorEvent" => Some(EventDefinition::Error),
        "EndEscalationEvent" => Some(EventDefinition::Escalation),
        "EndCancelEvent" => Some(EventDefinition::Cancel),
        "EndCompensationEvent" => Some(EventDefinition::Compensate),
        "EndSignalEvent" => Some(EventDefinition::Signal),
        "EndTerminateEvent" => Some(EventDefinition::Terminate),
        "EndMultipleEvent" => Some(EventDefinition::Multiple),
        _ => None,
    };
    if let Some(definition) = definition {
        event.push_definition(Rc::new(definition));
    }
    Ok(ProcessNode::Event(event))
}
