//! Boundary-event reclassification.
//!
//! When a catching event shape is nested inside an activity shape, the
//! already-constructed (activity, intermediate catch event) pair is
//! rewritten in place into (activity, boundary event). The event's
//! definitions are carried over by reference, the new node is attached to
//! the activity, and every outstanding reference to the old node is
//! rewritten through the element's rebind step.
//!
//! A pair that does not meet the preconditions is left completely
//! unmodified; the non-applicable call is reported as a warning rather
//! than an error.

use std::rc::Rc;

use log::{debug, warn};

use millrace_core::{
    element::BpmnElement,
    process::{Event, EventKind, ProcessNode, ProcessNodeRef},
};

/// Reclassify an (activity, intermediate catch event) element pair into
/// (activity, boundary event).
///
/// Preconditions: `activity`'s process node is an activity and `event`'s
/// process node is an intermediate catch event. On violation the call is
/// a no-op apart from a logged warning.
///
/// The conversion affects only the element pair and the activity's
/// boundary-reference set: the interrupting flag stays unset and any
/// containing process's flow-element listing keeps its original entry;
/// callers reconcile that listing themselves.
pub fn convert_to_boundary_event(activity: &BpmnElement, event: &mut BpmnElement) {
    convert_with_activity_node(activity.node(), event);
}

pub(crate) fn convert_with_activity_node(activity_node: &ProcessNodeRef, event: &mut BpmnElement) {
    if activity_node.borrow().as_activity().is_none() {
        warn!(
            kind = activity_node.borrow().kind_name();
            "Boundary conversion skipped: attachment target is not an activity"
        );
        return;
    }

    let replacement = {
        let source = event.node().borrow();
        let source_event = match source.as_event() {
            Some(source_event) if source_event.kind() == EventKind::IntermediateCatch => {
                source_event
            }
            _ => {
                warn!(
                    resource_id = event.resource_id(),
                    kind = source.kind_name();
                    "Boundary conversion skipped: element is not an intermediate catch event"
                );
                return;
            }
        };

        let mut boundary = Event::new(EventKind::Boundary);
        boundary.extend_definitions(source_event.definitions().iter().cloned());
        boundary.set_attached_to(Rc::downgrade(activity_node));
        boundary.set_name(source_event.name().map(str::to_owned));
        boundary.set_parallel_multiple(source_event.parallel_multiple());
        // TODO: derive cancel_activity once the stencil set distinguishes
        // interrupting from non-interrupting catching events.

        let mut node = ProcessNode::Event(boundary);
        node.set_id(source.id());
        node.into_ref()
    };

    event.rebind(Rc::clone(&replacement));
    if let Some(activity) = activity_node.borrow_mut().as_activity_mut() {
        activity.attach_boundary_event(Rc::downgrade(&replacement));
    }

    debug!(
        event_id = event.resource_id(),
        activity_id = activity_node.borrow().id();
        "Reclassified intermediate catch event as boundary event"
    );
}
