//! Intermediate catching events.
//!
//! This family claims the eleven catching stencils. Stencils whose
//! definition carries extra data (timer schedules, conditions, link
//! names) get specific routines; the rest fall through to the family
//! default, which derives the definition from the stencil id alone.

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
    "IntermediateMessageEventCatching",
    "IntermediateTimerEvent",
    "IntermediateEscalationEvent",
    "IntermediateConditionalEvent",
    "IntermediateLinkEventCatching",
    "IntermediateErrorEvent",
    "IntermediateCancelEvent",
    "IntermediateCompensationEventCatching",
    "IntermediateSignalEventCatching",
    "IntermediateMultipleEventCatching",
    "IntermediateParallelMultipleEventCatching",
];

const ROUTINES: &[(&str, Routine)] = &[
    ("IntermediateMessageEventCatching", create_message_event),
    ("IntermediateTimerEvent", create_timer_event),
    ("IntermediateConditionalEvent", create_conditional_event),
    ("IntermediateLinkEventCatching", create_link_event),
    (
        "IntermediateCompensationEventCatching",
        create_compensate_event,
    ),
    (
        "IntermediateParallelMultipleEventCatching",
        create_parallel_multiple_event,
    ),
];

/// Registration table for intermediate catching events.
pub fn family() -> FamilySpec {
    FamilySpec {
        name: "intermediate_catch_event",
        diagram_kind: DiagramNodeKind::Event,
        stencils: STENCILS,
        routines: ROUTINES,
        default_routine: Some(create_catch_event),
    }
}

fn bare_event() -> Event {
    Event::new(EventKind::IntermediateCatch)
}

/// Family default: definition derived from the stencil id alone.
fn create_catch_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    let definition = match shape.stencil_id() {
        "IntermediateEscalationEvent" => Some(EventDefinition::Escalation),
        "IntermediateErrorEvent" => Some(EventDefinition::Error),
        "IntermediateCancelEvent" => Some(EventDefinition::Cancel),
        "IntermediateSignalEventCatching" => Some(EventDefinition::Signal),
        "IntermediateMultipleEventCatching" => Some(EventDefinition::Multiple),
        _ => None,
    };
    if let Some(definition) = definition {
        event.push_definition(Rc::new(definition));
    }
    Ok(ProcessNode::Event(event))
}

fn create_message_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    event.set_name(shape.property("name").map(str::to_owned));
    event.push_definition(Rc::new(EventDefinition::Message));
    let mut node = ProcessNode::Event(event);
    node.set_id(shape.resource_id());
    Ok(node)
}

fn create_timer_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    event.set_name(shape.property("name").map(str::to_owned));
    event.push_definition(Rc::new(EventDefinition::Timer {
        time_date: shape.property("timedate").map(str::to_owned),
        time_duration: shape.property("timeduration").map(str::to_owned),
        time_cycle: shape.property("timecycle").map(str::to_owned),
    }));
    let mut node = ProcessNode::Event(event);
    node.set_id(shape.resource_id());
    Ok(node)
}

fn create_conditional_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    event.push_definition(Rc::new(EventDefinition::Conditional {
        condition: shape.property("condition").map(str::to_owned),
    }));
    Ok(ProcessNode::Event(event))
}

fn create_link_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    event.push_definition(Rc::new(EventDefinition::Link {
        name: shape.property("name").map(str::to_owned),
    }));
    Ok(ProcessNode::Event(event))
}

// The id and name stay unassigned here; the element factory sets them for
// every routine's result.
fn create_compensate_event(_shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    event.push_definition(Rc::new(EventDefinition::Compensate));
    Ok(ProcessNode::Event(event))
}

fn create_parallel_multiple_event(_shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    event.set_parallel_multiple(true);
    event.push_definition(Rc::new(EventDefinition::Multiple));
    Ok(ProcessNode::Event(event))
}
