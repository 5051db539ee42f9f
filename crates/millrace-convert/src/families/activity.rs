//! Activities: tasks and subprocesses.
//!
//! The task routine refines the activity kind from the shape's
//! `tasktype` property; an unrecognized task type is a routine failure
//! and surfaces as an element-construction error.

use millrace_core::{
    diagram::DiagramNodeKind,
    process::{Activity, ActivityKind, ProcessNode},
    shape::Shape,
};

use crate::{
    error::RoutineError,
    registry::{FamilySpec, Routine},
};

const STENCILS: &[&str] = &["Task", "Subprocess", "CollapsedSubprocess"];

const ROUTINES: &[(&str, Routine)] = &[
    ("Task", create_task),
    ("Subprocess", create_subprocess),
    ("CollapsedSubprocess", create_collapsed_subprocess),
];

/// Registration table for activities.
pub fn family() -> FamilySpec {
    FamilySpec {
        name: "activity",
        diagram_kind: DiagramNodeKind::Activity,
        stencils: STENCILS,
        routines: ROUTINES,
        default_routine: None,
    }
}

fn create_task(shape: &Shape) -> Result<ProcessNode, RoutineError> {
    let kind = match shape.property("tasktype") {
        None | Some("None") | Some("") => ActivityKind::Task,
        Some("User") => ActivityKind::UserTask,
        Some("Service") => ActivityKind::ServiceTask,
        Some("Script") => ActivityKind::ScriptTask,
        Some("Manual") => ActivityKind::ManualTask,
        Some("Send") => ActivityKind::SendTask,
        Some("Receive") => ActivityKind::ReceiveTask,
        Some("Business Rule") => ActivityKind::BusinessRuleTask,
        Some(other) => return Err(format!("unsupported task type '{other}'").into()),
    };
    Ok(ProcessNode::Activity(Activity::new(kind)))
}

fn create_subprocess(_shape: &Shape) -> Result<ProcessNode, RoutineError> {
    Ok(ProcessNode::Activity(Activity::new(ActivityKind::SubProcess)))
}

fn create_collapsed_subprocess(_shape: &Shape) -> Result<ProcessNode, RoutineError> {
    Ok(ProcessNode::Activity(Activity::new(
        ActivityKind::CollapsedSubProcess,
    )))
}
