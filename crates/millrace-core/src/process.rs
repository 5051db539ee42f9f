//! The typed process-model node hierarchy.
//!
//! This module contains the semantic counterparts of diagram shapes:
//! [`ProcessNode`] is the tagged hierarchy of flow elements (activities,
//! events, gateways, sequence flows), and [`EventDefinition`] describes
//! what triggers or resolves an event node.
//!
//! Process nodes are shared as `Rc<RefCell<ProcessNode>>` because a node is
//! addressable from several places at once: the owning
//! [`BpmnElement`](crate::element::BpmnElement), its paired
//! [`DiagramNode`](crate::diagram::DiagramNode), and, for boundary events,
//! the attached activity's back-reference set. Back-references
//! ([`Event::attached_to`], [`Activity::boundary_event_refs`]) are held as
//! `Weak` pointers: they exist for lookup, not for lifetime.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

/// A shared, mutable handle to a process node.
pub type ProcessNodeRef = Rc<RefCell<ProcessNode>>;

/// A weak back-reference to a process node.
pub type ProcessNodeWeak = Weak<RefCell<ProcessNode>>;

/// A semantic process-model node.
///
/// Variants form the flow-element hierarchy of the process model. Every
/// variant carries an `id` (equal to the originating shape's resource id)
/// and an optional `name`.
#[derive(Debug)]
pub enum ProcessNode {
    /// A unit of work (task or subprocess).
    Activity(Activity),
    /// Something that happens during the course of a process.
    Event(Event),
    /// A routing point controlling divergence and convergence of flow.
    Gateway(Gateway),
    /// A directed connection between two flow nodes.
    SequenceFlow(SequenceFlow),
}

impl ProcessNode {
    /// Get the node's id.
    pub fn id(&self) -> &str {
        match self {
            ProcessNode::Activity(a) => &a.id,
            ProcessNode::Event(e) => &e.id,
            ProcessNode::Gateway(g) => &g.id,
            ProcessNode::SequenceFlow(f) => &f.id,
        }
    }

    /// Set the node's id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        match self {
            ProcessNode::Activity(a) => a.id = id,
            ProcessNode::Event(e) => e.id = id,
            ProcessNode::Gateway(g) => g.id = id,
            ProcessNode::SequenceFlow(f) => f.id = id,
        }
    }

    /// Get the node's name, if one was set.
    pub fn name(&self) -> Option<&str> {
        match self {
            ProcessNode::Activity(a) => a.name.as_deref(),
            ProcessNode::Event(e) => e.name.as_deref(),
            ProcessNode::Gateway(g) => g.name.as_deref(),
            ProcessNode::SequenceFlow(f) => f.name.as_deref(),
        }
    }

    /// Set the node's name.
    pub fn set_name(&mut self, name: Option<String>) {
        match self {
            ProcessNode::Activity(a) => a.name = name,
            ProcessNode::Event(e) => e.name = name,
            ProcessNode::Gateway(g) => g.name = name,
            ProcessNode::SequenceFlow(f) => f.name = name,
        }
    }

    /// A short, stable name for the node's kind, for logs and summaries.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ProcessNode::Activity(a) => a.kind.name(),
            ProcessNode::Event(e) => e.kind.name(),
            ProcessNode::Gateway(g) => g.kind.name(),
            ProcessNode::SequenceFlow(_) => "sequence_flow",
        }
    }

    /// Borrow this node as an activity, if it is one.
    pub fn as_activity(&self) -> Option<&Activity> {
        match self {
            ProcessNode::Activity(a) => Some(a),
            _ => None,
        }
    }

    /// Mutably borrow this node as an activity, if it is one.
    pub fn as_activity_mut(&mut self) -> Option<&mut Activity> {
        match self {
            ProcessNode::Activity(a) => Some(a),
            _ => None,
        }
    }

    /// Borrow this node as an event, if it is one.
    pub fn as_event(&self) -> Option<&Event> {
        match self {
            ProcessNode::Event(e) => Some(e),
            _ => None,
        }
    }

    /// Mutably borrow this node as an event, if it is one.
    pub fn as_event_mut(&mut self) -> Option<&mut Event> {
        match self {
            ProcessNode::Event(e) => Some(e),
            _ => None,
        }
    }

    /// Borrow this node as a sequence flow, if it is one.
    pub fn as_sequence_flow(&self) -> Option<&SequenceFlow> {
        match self {
            ProcessNode::SequenceFlow(f) => Some(f),
            _ => None,
        }
    }

    /// Mutably borrow this node as a sequence flow, if it is one.
    pub fn as_sequence_flow_mut(&mut self) -> Option<&mut SequenceFlow> {
        match self {
            ProcessNode::SequenceFlow(f) => Some(f),
            _ => None,
        }
    }

    /// Wrap this node into a shared handle.
    pub fn into_ref(self) -> ProcessNodeRef {
        Rc::new(RefCell::new(self))
    }
}

/// The concrete kind of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Task,
    UserTask,
    ServiceTask,
    ScriptTask,
    ManualTask,
    SendTask,
    ReceiveTask,
    BusinessRuleTask,
    SubProcess,
    CollapsedSubProcess,
}

impl ActivityKind {
    /// A short, stable name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Task => "task",
            ActivityKind::UserTask => "user_task",
            ActivityKind::ServiceTask => "service_task",
            ActivityKind::ScriptTask => "script_task",
            ActivityKind::ManualTask => "manual_task",
            ActivityKind::SendTask => "send_task",
            ActivityKind::ReceiveTask => "receive_task",
            ActivityKind::BusinessRuleTask => "business_rule_task",
            ActivityKind::SubProcess => "subprocess",
            ActivityKind::CollapsedSubProcess => "collapsed_subprocess",
        }
    }
}

/// A unit of work in the process model.
///
/// Activities own a set of weak back-references to the boundary events
/// attached to them. The set is used only for lookup; the boundary events
/// themselves are owned by their enclosing
/// [`BpmnElement`](crate::element::BpmnElement)s.
#[derive(Debug)]
pub struct Activity {
    id: String,
    name: Option<String>,
    kind: ActivityKind,
    boundary_event_refs: Vec<ProcessNodeWeak>,
}

impl Activity {
    /// Create a bare activity of the given kind. The id and name are
    /// assigned by the element factory after construction.
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            id: String::new(),
            name: None,
            kind,
            boundary_event_refs: Vec::new(),
        }
    }

    /// Get the activity's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the activity's name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the activity's kind.
    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Record a boundary event as attached to this activity.
    ///
    /// Attaching the same node twice is a no-op; the set semantics are
    /// enforced by pointer identity.
    pub fn attach_boundary_event(&mut self, event: ProcessNodeWeak) {
        if !self
            .boundary_event_refs
            .iter()
            .any(|existing| Weak::ptr_eq(existing, &event))
        {
            self.boundary_event_refs.push(event);
        }
    }

    /// Get the boundary events currently attached to this activity,
    /// skipping any that no longer exist.
    pub fn boundary_event_refs(&self) -> Vec<ProcessNodeRef> {
        self.boundary_event_refs
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    /// Returns `true` if the given node is in this activity's boundary
    /// event set (by pointer identity).
    pub fn has_boundary_event(&self, node: &ProcessNodeRef) -> bool {
        self.boundary_event_refs
            .iter()
            .any(|existing| existing.as_ptr() == Rc::as_ptr(node))
    }
}

/// The position of an event in the process lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Starts a process or subprocess.
    Start,
    /// Catches a trigger in the middle of the flow.
    IntermediateCatch,
    /// Throws a trigger in the middle of the flow.
    IntermediateThrow,
    /// Catches a trigger while attached to an activity's lifecycle.
    Boundary,
    /// Ends a path of the process.
    End,
}

impl EventKind {
    /// A short, stable name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Start => "start_event",
            EventKind::IntermediateCatch => "intermediate_catch_event",
            EventKind::IntermediateThrow => "intermediate_throw_event",
            EventKind::Boundary => "boundary_event",
            EventKind::End => "end_event",
        }
    }
}

/// An event node.
///
/// Event definitions are shared by reference: reclassifying an event (for
/// example into a boundary event) carries the same definition values over
/// without cloning them.
#[derive(Debug)]
pub struct Event {
    id: String,
    name: Option<String>,
    kind: EventKind,
    definitions: Vec<Rc<EventDefinition>>,
    parallel_multiple: bool,
    attached_to: Option<ProcessNodeWeak>,
}

impl Event {
    /// Create a bare event of the given kind. The id and name are assigned
    /// by the element factory after construction.
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: String::new(),
            name: None,
            kind,
            definitions: Vec::new(),
            parallel_multiple: false,
            attached_to: None,
        }
    }

    /// Get the event's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the event's name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the event's name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Get the event's kind.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Append an event definition.
    pub fn push_definition(&mut self, definition: Rc<EventDefinition>) {
        self.definitions.push(definition);
    }

    /// Append several event definitions, preserving order.
    pub fn extend_definitions<I>(&mut self, definitions: I)
    where
        I: IntoIterator<Item = Rc<EventDefinition>>,
    {
        self.definitions.extend(definitions);
    }

    /// Borrow the ordered event definitions.
    pub fn definitions(&self) -> &[Rc<EventDefinition>] {
        &self.definitions
    }

    /// Whether this event requires all of its triggers at once.
    pub fn parallel_multiple(&self) -> bool {
        self.parallel_multiple
    }

    /// Set the parallel-multiple flag.
    pub fn set_parallel_multiple(&mut self, parallel_multiple: bool) {
        self.parallel_multiple = parallel_multiple;
    }

    /// Record the activity this event is attached to (boundary events
    /// only).
    pub fn set_attached_to(&mut self, activity: ProcessNodeWeak) {
        self.attached_to = Some(activity);
    }

    /// Get the activity this event is attached to, if it is a boundary
    /// event and the activity still exists.
    pub fn attached_to(&self) -> Option<ProcessNodeRef> {
        self.attached_to.as_ref().and_then(Weak::upgrade)
    }
}

/// The concrete kind of a gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayKind {
    Exclusive,
    Parallel,
    Inclusive,
    EventBased,
    Complex,
}

impl GatewayKind {
    /// A short, stable name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            GatewayKind::Exclusive => "exclusive_gateway",
            GatewayKind::Parallel => "parallel_gateway",
            GatewayKind::Inclusive => "inclusive_gateway",
            GatewayKind::EventBased => "event_based_gateway",
            GatewayKind::Complex => "complex_gateway",
        }
    }
}

/// A routing point in the process model.
#[derive(Debug)]
pub struct Gateway {
    id: String,
    name: Option<String>,
    kind: GatewayKind,
}

impl Gateway {
    /// Create a bare gateway of the given kind.
    pub fn new(kind: GatewayKind) -> Self {
        Self {
            id: String::new(),
            name: None,
            kind,
        }
    }

    /// Get the gateway's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the gateway's kind.
    pub fn kind(&self) -> GatewayKind {
        self.kind
    }
}

/// A directed connection between two flow nodes.
///
/// Source and target are recorded as resource ids; the graph assembler
/// wires them from the shapes' outgoing references.
#[derive(Debug, Default)]
pub struct SequenceFlow {
    id: String,
    name: Option<String>,
    source_ref: Option<String>,
    target_ref: Option<String>,
    condition_expression: Option<String>,
}

impl SequenceFlow {
    /// Create a bare sequence flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bare sequence flow with a condition expression.
    pub fn with_condition(condition: impl Into<String>) -> Self {
        Self {
            condition_expression: Some(condition.into()),
            ..Self::default()
        }
    }

    /// Get the flow's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the resource id of the flow's source node, once wired.
    pub fn source_ref(&self) -> Option<&str> {
        self.source_ref.as_deref()
    }

    /// Set the resource id of the flow's source node.
    pub fn set_source_ref(&mut self, resource_id: impl Into<String>) {
        self.source_ref = Some(resource_id.into());
    }

    /// Get the resource id of the flow's target node, once wired.
    pub fn target_ref(&self) -> Option<&str> {
        self.target_ref.as_deref()
    }

    /// Set the resource id of the flow's target node.
    pub fn set_target_ref(&mut self, resource_id: impl Into<String>) {
        self.target_ref = Some(resource_id.into());
    }

    /// Get the condition expression, if one was set.
    pub fn condition_expression(&self) -> Option<&str> {
        self.condition_expression.as_deref()
    }
}

/// What triggers or resolves an event node.
///
/// Zero or one definition per event is the common case; "multiple" events
/// may carry several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDefinition {
    Message,
    Timer {
        time_date: Option<String>,
        time_duration: Option<String>,
        time_cycle: Option<String>,
    },
    Compensate,
    Signal,
    Error,
    Escalation,
    Conditional {
        condition: Option<String>,
    },
    Link {
        name: Option<String>,
    },
    Cancel,
    Terminate,
    Multiple,
}

impl EventDefinition {
    /// A short, stable name for this definition kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            EventDefinition::Message => "message",
            EventDefinition::Timer { .. } => "timer",
            EventDefinition::Compensate => "compensate",
            EventDefinition::Signal => "signal",
            EventDefinition::Error => "error",
            EventDefinition::Escalation => "escalation",
            EventDefinition::Conditional { .. } => "conditional",
            EventDefinition::Link { .. } => "link",
            EventDefinition::Cancel => "cancel",
            EventDefinition::Terminate => "terminate",
            EventDefinition::Multiple => "multiple",
        }
    }

    /// Returns `true` if this is a timer definition.
    pub fn is_timer(&self) -> bool {
        matches!(self, EventDefinition::Timer { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_event_set_deduplicates_by_identity() {
        let mut activity = Activity::new(ActivityKind::Task);
        let event = ProcessNode::Event(Event::new(EventKind::Boundary)).into_ref();

        activity.attach_boundary_event(Rc::downgrade(&event));
        activity.attach_boundary_event(Rc::downgrade(&event));

        assert_eq!(activity.boundary_event_refs().len(), 1);
        assert!(activity.has_boundary_event(&event));
    }

    #[test]
    fn boundary_event_refs_skip_dropped_nodes() {
        let mut activity = Activity::new(ActivityKind::Task);
        {
            let event = ProcessNode::Event(Event::new(EventKind::Boundary)).into_ref();
            activity.attach_boundary_event(Rc::downgrade(&event));
            assert_eq!(activity.boundary_event_refs().len(), 1);
        }
        assert!(activity.boundary_event_refs().is_empty());
    }

    #[test]
    fn event_definitions_preserve_order() {
        let mut event = Event::new(EventKind::IntermediateCatch);
        event.push_definition(Rc::new(EventDefinition::Message));
        event.push_definition(Rc::new(EventDefinition::Signal));

        let kinds: Vec<_> = event
            .definitions()
            .iter()
            .map(|def| def.kind_name())
            .collect();
        assert_eq!(kinds, ["message", "signal"]);
    }
}
