//! Start events.

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
    "StartNoneEvent",
    "StartMessageEvent",
    "StartTimerEvent",
    "StartConditionalEvent",
    "StartErrorEvent",
    "StartEscalationEvent",
    "StartCompensationEvent",
    "StartSignalEvent",
    "StartMultipleEvent",
    "StartParallelMultipleEvent",
];

const ROUTINES: &[(&str, Routine)] = &[
    ("StartTimerEvent", create_timer_event),
    ("StartConditionalEvent", create_conditional_event),
    ("StartParallelMultipleEvent", create_parallel_multiple_event),
];

/// Registration table for start events.
pub fn family() -> FamilySpec {
    FamilySpec {
        name: "start_event",
        diagram_kind: DiagramNodeKind::Event,
        stencils: STENCILS,
        routines: ROUTINES,
        default_routine: Some(create_start_event),
    }
}

fn bare_event() -> Event {
    Event::new(EventKind::Start)
}

/// Family default: definition derived from the stencil id alone. The
/// plain start event carries no definition.
fn create_start_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    let definition = match shape.stencil_id() {
        "StartMessageEvent" => Some(EventDefinition::Message),
        "StartErrorEvent" => Some(EventDefinition::Error),
        "StartEscalationEvent" => Some(EventDefinition::Escalation),
        "StartCompensationEvent" => Some(EventDefinition::Compensate),
        "StartSignalEvent" => Some(EventDefinition::Signal),
        "StartMultipleEvent" => Some(EventDefinition::Multiple),
        _ => None,
    };
    if let Some(definition) = definition {
        event.push_definition(Rc::new(definition));
    }
    Ok(ProcessNode::Event(event))
}

fn create_timer_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    event.push_definition(Rc::new(EventDefinition::Timer {
        time_date: shape.property("timedate").map(str::to_owned),
        time_duration: shape.property("timeduration").map(str::to_owned),
        time_cycle: shape.property("timecycle").map(str::to_owned),
    }));
    Ok(ProcessNode::Event(event))
}

fn create_conditional_event(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    event.push_definition(Rc::new(EventDefinition::Conditional {
        condition: shape.property("condition").map(str::to_owned),
    }));
    Ok(ProcessNode::Event(event))
}

fn create_parallel_multiple_event(_shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let mut event = bare_event();
    event.set_parallel_multiple(true);
    event.push_definition(Rc::new(EventDefinition::Multiple));
    Ok(ProcessNode::Event(event))
}
