//! Intermediate throwing events.

use std::rc::Rc;

use millrace_core::{
    diagram::DiagramNodeKind,
    process::{Event, EventDefinition, EventKind, ProcessNode},
    shape::Shape,
};

use crate::{
    error::RoutineError,
    registry::{FamilySpec, Routine},
};

const STENCILS: &[&str] = &[
    "IntermediateEvent",
    "IntermediateMessageEventThrowing",
    "IntermediateEscalationEventThrowing",
    "IntermediateLinkEventThrowing",
    "IntermediateCompensationEventThrowing",
    "IntermediateSignalEventThrowing",
    "IntermediateMultipleEventThrowing",
];

const ROUTINES: &[(&str, Routine)] = &[("IntermediateLinkEventThrowing", create_link_event)];

/// Registration table for intermediate throwing events.
pub fn family() -> FamilySpec {
    FamilySpec {
        name: "intermediate_throw_event",
        diagram_kind: DiagramNodeKind::Event,
        stencils: STENCILS,
        routines: ROUTINES,
        default_routine: Some(create_throw_event),
    }
}

fn bare_event() -> Event {
    Event::new(EventKind::IntermediateThrow)
}

/// Family default: definition derived from the stencil id alone. The
/// plain intermediate event carries no definition.
fn create_throw_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    let definition = match shape.stencil_id() {
        "IntermediateMessageEventThrowing" => Some(EventDefinition::Message),
        "IntermediateEscalationEventThrowing" => Some(EventDefinition::Escalation),
        "IntermediateCompensationEventThrowing" => Some(EventDefinition::Compensate),
        "IntermediateSignalEventThrowing" => Some(EventDefinition::Signal),
        "IntermediateMultipleEventThrowing" => Some(EventDefinition::Multiple),
        _ => None,
    };
    if let Some(definition) = definition {
        event.push_definition(Rc::new(definition));
    }
    Ok(ProcessNode::Event(event))
}

fn create_link_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    event.push_definition(Rc::new(EventDefinition::Link {
        name: shape.property("name").map(str::to_owned),
    }));
    Ok(ProcessNode::Event(event))
}
